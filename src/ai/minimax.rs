use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::AiError;
use crate::game::{Board, GameState, Player, COLS};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// Score of a won position. Dwarfs anything the heuristic can produce, so a
/// forced win always outranks positional play.
pub const WIN_SCORE: i64 = 100_000_000_000_000;

const CENTER_COL: usize = COLS / 2;

/// Minimax agent with alpha-beta pruning.
///
/// Before searching it takes any immediate win and blocks any immediate
/// opposing win. The search itself runs to the configured depth in plies;
/// deeper is stronger and slower.
pub struct MinimaxAgent {
    player: Player,
    depth: usize,
    heuristic: Box<dyn Heuristic>,
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new(player: Player, depth: usize) -> Self {
        MinimaxAgent {
            player,
            depth,
            heuristic: Box::new(WindowHeuristic),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Agent with a fixed RNG seed, for reproducible move selection.
    pub fn with_seed(player: Player, depth: usize, seed: u64) -> Self {
        MinimaxAgent {
            player,
            depth,
            heuristic: Box::new(WindowHeuristic),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_heuristic(player: Player, depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent {
            player,
            depth,
            heuristic,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Pick a column for the configured side.
    ///
    /// Fails only when the board is full; a losing position still yields the
    /// best legal column.
    pub fn compute_move(&mut self, board: &Board) -> Result<usize, AiError> {
        let legal = board.legal_columns();
        if legal.is_empty() {
            return Err(AiError::NoLegalMove);
        }

        let own = self.player.to_cell();
        let opp = self.player.other().to_cell();

        // Take an immediate win
        for &col in &legal {
            let mut probe = *board;
            probe.drop_piece(col, own).unwrap();
            if probe.has_connect_four(own) {
                return Ok(col);
            }
        }

        // Block an immediate opposing win
        for &col in &legal {
            let mut probe = *board;
            probe.drop_piece(col, opp).unwrap();
            if probe.has_connect_four(opp) {
                return Ok(col);
            }
        }

        let (column, _) = self.minimax(board, self.depth, i64::MIN, i64::MAX, true);
        match column {
            Some(col) => Ok(col),
            None => self.fallback_column(board),
        }
    }

    /// Depth-bounded minimax over board copies.
    ///
    /// Maximizing nodes play the agent's piece, minimizing nodes the
    /// opponent's; scores are always from the agent's perspective. Columns
    /// are tried in ascending order and ties keep the first strict
    /// improvement.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> (Option<usize>, i64) {
        let legal = board.legal_columns();
        let own = self.player.to_cell();
        let opp = self.player.other().to_cell();

        let own_won = board.has_connect_four(own);
        let opp_won = board.has_connect_four(opp);
        let terminal = own_won || opp_won || legal.is_empty();

        if depth == 0 || terminal {
            if own_won {
                return (None, WIN_SCORE);
            }
            if opp_won {
                return (None, -WIN_SCORE);
            }
            if terminal {
                // Full board, no winner
                return (None, 0);
            }
            return (None, self.heuristic.evaluate(board, self.player));
        }

        if maximizing {
            let mut best_score = i64::MIN;
            let mut best_column = legal[self.rng.random_range(0..legal.len())];
            for &col in &legal {
                let mut child = *board;
                child.drop_piece(col, own).unwrap();
                let (_, score) = self.minimax(&child, depth - 1, alpha, beta, false);
                if score > best_score {
                    best_score = score;
                    best_column = col;
                }
                alpha = alpha.max(best_score);
                if alpha >= beta {
                    break;
                }
            }
            (Some(best_column), best_score)
        } else {
            let mut best_score = i64::MAX;
            let mut best_column = legal[self.rng.random_range(0..legal.len())];
            for &col in &legal {
                let mut child = *board;
                child.drop_piece(col, opp).unwrap();
                let (_, score) = self.minimax(&child, depth - 1, alpha, beta, true);
                if score < best_score {
                    best_score = score;
                    best_column = col;
                }
                beta = beta.min(best_score);
                if alpha >= beta {
                    break;
                }
            }
            (Some(best_column), best_score)
        }
    }

    /// Column policy when the search returns no choice: center first, then
    /// outward by increasing offset, then any open column at random.
    fn fallback_column(&mut self, board: &Board) -> Result<usize, AiError> {
        if !board.is_column_full(CENTER_COL) {
            return Ok(CENTER_COL);
        }
        for offset in 1..=CENTER_COL {
            if CENTER_COL + offset < COLS && !board.is_column_full(CENTER_COL + offset) {
                return Ok(CENTER_COL + offset);
            }
            if !board.is_column_full(CENTER_COL - offset) {
                return Ok(CENTER_COL - offset);
            }
        }
        let legal = board.legal_columns();
        if legal.is_empty() {
            return Err(AiError::NoLegalMove);
        }
        Ok(legal[self.rng.random_range(0..legal.len())])
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        debug_assert_eq!(
            state.current_player(),
            self.player,
            "agent plays {:?} but it is {:?}'s turn",
            self.player,
            state.current_player()
        );
        self.compute_move(state.board())
            .expect("No legal actions available")
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(MinimaxAgent::new(self.player, self.depth))
    }
}
