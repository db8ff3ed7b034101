use std::fmt;

use arrayvec::ArrayVec;

use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Columns currently open for play, in ascending order.
pub type LegalActions = ArrayVec<usize, COLS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Columns whose top cell is still empty, ascending.
    pub fn legal_columns(&self) -> LegalActions {
        (0..COLS)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Row a piece dropped in this column would land on, without placing it.
    pub fn drop_row(&self, col: usize) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col))
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        let row = self.drop_row(col)?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Remove the topmost piece of a column, returns the row it occupied.
    pub fn remove_top(&mut self, col: usize) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        match (0..ROWS).find(|&row| self.cells[row][col] != Cell::Empty) {
            Some(row) => {
                self.cells[row][col] = Cell::Empty;
                Ok(row)
            }
            None => Err(MoveError::ColumnEmpty(col)),
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check whether the given piece has four in a row anywhere on the board.
    pub fn has_connect_four(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }

        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - 4 {
                if (0..4).all(|i| self.cells[row][col + i] == cell) {
                    return true;
                }
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..=ROWS - 4 {
                if (0..4).all(|i| self.cells[row + i][col] == cell) {
                    return true;
                }
            }
        }

        // Diagonal (top-left to bottom-right, \)
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                if (0..4).all(|i| self.cells[row + i][col + i] == cell) {
                    return true;
                }
            }
        }

        // Diagonal (bottom-left to top-right, /)
        for row in 3..ROWS {
            for col in 0..COLS - 3 {
                if (0..4).all(|i| self.cells[row - i][col + i] == cell) {
                    return true;
                }
            }
        }

        false
    }

    /// All four-in-a-row windows held by the given piece, one entry per
    /// window in scan order: horizontal, vertical, then both diagonals.
    /// Overlapping windows of a longer run are all reported.
    pub fn winning_lines(&self, cell: Cell) -> Vec<[(usize, usize); 4]> {
        let mut lines = Vec::new();
        if cell == Cell::Empty {
            return lines;
        }

        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - 4 {
                if (0..4).all(|i| self.cells[row][col + i] == cell) {
                    lines.push([(row, col), (row, col + 1), (row, col + 2), (row, col + 3)]);
                }
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..=ROWS - 4 {
                if (0..4).all(|i| self.cells[row + i][col] == cell) {
                    lines.push([(row, col), (row + 1, col), (row + 2, col), (row + 3, col)]);
                }
            }
        }

        // Diagonal (top-left to bottom-right, \)
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                if (0..4).all(|i| self.cells[row + i][col + i] == cell) {
                    lines.push([
                        (row, col),
                        (row + 1, col + 1),
                        (row + 2, col + 2),
                        (row + 3, col + 3),
                    ]);
                }
            }
        }

        // Diagonal (bottom-left to top-right, /)
        for row in 3..ROWS {
            for col in 0..COLS - 3 {
                if (0..4).all(|i| self.cells[row - i][col + i] == cell) {
                    lines.push([
                        (row, col),
                        (row - 1, col + 1),
                        (row - 2, col + 2),
                        (row - 3, col + 3),
                    ]);
                }
            }
        }

        lines
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                let ch = match self.cells[row][col] {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "0 1 2 3 4 5 6")
    }
}
