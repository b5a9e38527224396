//! Search errors.

use mateline_core::GameError;

/// Errors that abort a search or a rendering.
///
/// Not finding a mate is a normal result and never appears here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The game rejected an apply or undo. Fatal to the whole search.
    #[error(transparent)]
    Game(#[from] GameError),

    /// The proof tree cannot be rendered.
    #[error("malformed tree: {reason}")]
    MalformedTree {
        /// What went wrong.
        reason: String,
    },

    /// A requested depth is zero where a move is required, or above the limit.
    #[error("depth {requested} outside the allowed range {min}..={max}")]
    DepthOutOfRange {
        /// The requested depth.
        requested: u8,
        /// The smallest accepted depth.
        min: u8,
        /// The configured maximum.
        max: u8,
    },

    /// The tree passed to a mate search was built for another search.
    #[error("mate tree does not match the search: {reason}")]
    TreeMismatch {
        /// What differs.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::SearchError;
    use mateline_core::GameError;

    #[test]
    fn game_error_is_transparent() {
        let err: SearchError = GameError::NothingToUndo.into();
        assert_eq!(format!("{err}"), "no move to undo");
    }

    #[test]
    fn depth_error_display() {
        let err = SearchError::DepthOutOfRange {
            requested: 40,
            min: 1,
            max: 8,
        };
        assert_eq!(format!("{err}"), "depth 40 outside the allowed range 1..=8");
    }
}
