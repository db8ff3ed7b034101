mod agent;
mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use heuristic::{Heuristic, WindowHeuristic};
pub use minimax::{MinimaxAgent, WIN_SCORE};
pub use random::RandomAgent;
