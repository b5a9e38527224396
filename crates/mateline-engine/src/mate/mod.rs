//! Forced-mate search: candidate generation, proof tree, search and rendering.

pub mod moves;
pub mod render;
pub mod search;
pub mod tree;

pub use moves::{SearchMove, searchable_moves};
pub use render::render_line;
pub use search::{mate_search, mate_search_with_stats};
pub use tree::{MateTree, NodeId};
