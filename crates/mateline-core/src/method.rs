//! Game status classification and results.

use std::fmt;

use shakmaty::Color;

/// How the current position stands: ongoing, in check, or finished by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Nothing notable about the position.
    NoMethod,
    /// The side to move is in check but has legal replies.
    InCheck,
    /// The side to move is in check and has no legal replies.
    Checkmate,
    /// The side to move is not in check and has no legal replies.
    Stalemate,
    /// The position occurred three times (claimable draw).
    ThreefoldRepetition,
    /// The position occurred five times.
    FivefoldRepetition,
    /// Fifty moves without a capture or pawn move (claimable draw).
    FiftyMoveRule,
    /// Seventy-five moves without a capture or pawn move.
    SeventyFiveMoveRule,
    /// Neither side can possibly deliver mate.
    InsufficientMaterial,
}

impl Method {
    /// Return `true` if this method ends the game in a draw.
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            Method::Stalemate
                | Method::ThreefoldRepetition
                | Method::FivefoldRepetition
                | Method::FiftyMoveRule
                | Method::SeventyFiveMoveRule
                | Method::InsufficientMaterial
        )
    }
}

/// Result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The game is still in progress.
    NoOutcome,
    /// White delivered checkmate.
    WhiteWon,
    /// Black delivered checkmate.
    BlackWon,
    /// The game was drawn.
    Draw,
}

impl Outcome {
    /// The outcome in which `winner` has won.
    pub const fn won_by(winner: Color) -> Outcome {
        match winner {
            Color::White => Outcome::WhiteWon,
            Color::Black => Outcome::BlackWon,
        }
    }

    /// PGN result token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::NoOutcome => "*",
            Outcome::WhiteWon => "1-0",
            Outcome::BlackWon => "0-1",
            Outcome::Draw => "1/2-1/2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
