//! Adversarial search and forced-mate proof search over a [`Game`].
//!
//! [`Game`]: mateline_core::Game

pub mod error;
pub mod limits;
pub mod mate;
pub mod score;
pub mod search;

pub use error::SearchError;
pub use limits::SearchLimits;
pub use mate::{MateTree, NodeId, SearchMove, mate_search, mate_search_with_stats, render_line};
pub use score::{Decisive, Score};
pub use search::{
    MoveGuard, SearchStats, alpha_beta, alpha_beta_with_stats, minimax, minimax_with_stats,
};
