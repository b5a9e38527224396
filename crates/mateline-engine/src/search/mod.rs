//! Adversarial search and move ordering.

pub mod alphabeta;
pub mod guard;
pub mod minimax;
pub mod ordering;

pub use alphabeta::{alpha_beta, alpha_beta_with_stats};
pub use guard::MoveGuard;
pub use minimax::{minimax, minimax_with_stats};
pub use ordering::{MoveClass, MovePicker, classify};

/// Counters collected during one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, the root included.
    pub nodes: u64,
}
