//! # Connect Four Engine
//!
//! A deterministic, tunable-strength move-decision engine for Connect Four.
//! The engine picks a column for the side to move using greedy win/block
//! shortcuts backed by depth-bounded minimax with alpha-beta pruning over a
//! window-scanning positional heuristic.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ai`] — Agent trait, window heuristic, minimax and random agents
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
