//! Error types for position setup and move application.

/// Errors surfaced by the game collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The FEN string could not be parsed.
    #[error("invalid FEN: {fen}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
    },

    /// The FEN parsed but describes an impossible position.
    #[error("illegal position: {fen}")]
    IllegalPosition {
        /// The offending FEN string.
        fen: String,
    },

    /// A move was applied that is not legal in the current position.
    #[error("illegal move: {uci}")]
    IllegalMove {
        /// The rejected move in UCI notation.
        uci: String,
    },

    /// A UCI move string does not name any legal move.
    #[error("invalid UCI move: {uci}")]
    InvalidUci {
        /// The rejected UCI string.
        uci: String,
    },

    /// `undo` was called with no moves on the history stack.
    #[error("no move to undo")]
    NothingToUndo,
}

#[cfg(test)]
mod tests {
    use super::GameError;

    #[test]
    fn illegal_move_display() {
        let err = GameError::IllegalMove {
            uci: "e2e5".to_string(),
        };
        assert_eq!(format!("{err}"), "illegal move: e2e5");
    }

    #[test]
    fn nothing_to_undo_display() {
        assert_eq!(format!("{}", GameError::NothingToUndo), "no move to undo");
    }
}
