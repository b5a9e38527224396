//! Candidate generation for the mate search.

use std::fmt;

use mateline_core::{Game, Move};

use crate::error::SearchError;
use crate::search::MoveGuard;

/// A legal move and the number of replies it leaves the opponent.
#[derive(Clone, PartialEq, Eq)]
pub struct SearchMove {
    /// The move itself.
    pub mv: Move,
    /// Legal replies after `mv` is played.
    pub mobility: usize,
}

impl SearchMove {
    /// Return `true` if the move gives check.
    pub fn is_check(&self) -> bool {
        self.mv.is_check()
    }
}

impl fmt::Debug for SearchMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.mv, self.mobility)
    }
}

/// Legal moves with their mobility, fewest replies first.
///
/// Each move is applied and undone once to count replies. The sort is
/// stable, so moves with equal mobility keep generation order.
pub fn searchable_moves<G: Game>(game: &mut G) -> Result<Vec<SearchMove>, SearchError> {
    let moves = game.valid_moves();
    let mut result = Vec::with_capacity(moves.len());

    for mv in moves {
        let guard = MoveGuard::apply(game, &mv)?;
        let mobility = guard.mobility();
        guard.undo()?;
        result.push(SearchMove { mv, mobility });
    }

    result.sort_by_key(|m| m.mobility);
    Ok(result)
}
