//! Scoped apply/undo on a shared game.

use std::ops::{Deref, DerefMut};

use mateline_core::{Game, GameError, Move};
use tracing::warn;

/// A move applied to a game, taken back when the guard goes away.
///
/// Call [`MoveGuard::undo`] on the normal path to see undo errors. If the
/// guard is dropped instead (an early `?` return), the move is undone in
/// `Drop` and a failure there is only logged.
///
/// The guard dereferences to the game, so recursion runs through it.
pub struct MoveGuard<'g, G: Game> {
    game: &'g mut G,
    applied: bool,
}

impl<'g, G: Game> MoveGuard<'g, G> {
    /// Apply `mv` and return a guard that owns the undo.
    pub fn apply(game: &'g mut G, mv: &Move) -> Result<Self, GameError> {
        game.apply(mv)?;
        Ok(Self {
            game,
            applied: true,
        })
    }

    /// Undo the move now, reporting failure.
    pub fn undo(mut self) -> Result<(), GameError> {
        self.applied = false;
        self.game.undo()
    }
}

impl<G: Game> Deref for MoveGuard<'_, G> {
    type Target = G;

    fn deref(&self) -> &G {
        self.game
    }
}

impl<G: Game> DerefMut for MoveGuard<'_, G> {
    fn deref_mut(&mut self) -> &mut G {
        self.game
    }
}

impl<G: Game> Drop for MoveGuard<'_, G> {
    fn drop(&mut self) {
        if self.applied {
            if let Err(e) = self.game.undo() {
                warn!(error = %e, "undo failed while unwinding");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mateline_core::ChessGame;

    fn first_move(game: &ChessGame) -> Move {
        game.valid_moves().into_iter().next().unwrap()
    }

    #[test]
    fn explicit_undo_restores_position() {
        let mut game = ChessGame::new();
        let before = game.fen();
        let mv = first_move(&game);
        let guard = MoveGuard::apply(&mut game, &mv).unwrap();
        assert_ne!(guard.fen(), before);
        guard.undo().unwrap();
        assert_eq!(game.fen(), before);
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn dropping_the_guard_undoes() {
        let mut game = ChessGame::new();
        let before = game.fen();
        let mv = first_move(&game);
        {
            let _guard = MoveGuard::apply(&mut game, &mv).unwrap();
        }
        assert_eq!(game.fen(), before);
    }

    #[test]
    fn nested_guards_unwind_in_order() {
        let mut game = ChessGame::new();
        let before = game.fen();
        let white = first_move(&game);
        {
            let mut outer = MoveGuard::apply(&mut game, &white).unwrap();
            let black = first_move(&outer);
            let inner = MoveGuard::apply(&mut *outer, &black).unwrap();
            assert_eq!(inner.ply_count(), 2);
        }
        assert_eq!(game.fen(), before);
    }

    #[test]
    fn failed_apply_leaves_nothing_to_undo() {
        let mut game = ChessGame::new();
        let mv = first_move(&game);
        game.apply(&mv).unwrap();
        assert!(MoveGuard::apply(&mut game, &mv).is_err());
        assert_eq!(game.ply_count(), 1);
    }
}
