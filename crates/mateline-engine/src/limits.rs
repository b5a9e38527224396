//! Bounds on recursion depth.

use crate::error::SearchError;

/// Deepest adversarial search accepted by default, in plies.
pub const DEFAULT_MAX_DEPTH: u8 = 8;

/// Longest forced mate searched for by default, in full moves.
pub const DEFAULT_MAX_MATE_MOVES: u8 = 6;

/// Depth limits checked before any search starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum plies for `alpha_beta` and `minimax`.
    pub max_depth: u8,
    /// Maximum full moves for `mate_search`.
    pub max_mate_moves: u8,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_mate_moves: DEFAULT_MAX_MATE_MOVES,
        }
    }
}

impl SearchLimits {
    /// Accept an adversarial depth of `0..=max_depth`.
    ///
    /// Depth zero is allowed and yields the static evaluation.
    pub fn check_depth(&self, depth: u8) -> Result<(), SearchError> {
        if depth > self.max_depth {
            return Err(SearchError::DepthOutOfRange {
                requested: depth,
                min: 0,
                max: self.max_depth,
            });
        }
        Ok(())
    }

    /// Accept a mate length of `1..=max_mate_moves`.
    pub fn check_mate_moves(&self, moves_to_mate: u8) -> Result<(), SearchError> {
        if moves_to_mate == 0 || moves_to_mate > self.max_mate_moves {
            return Err(SearchError::DepthOutOfRange {
                requested: moves_to_mate,
                min: 1,
                max: self.max_mate_moves,
            });
        }
        Ok(())
    }
}
