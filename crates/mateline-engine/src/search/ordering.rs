//! Move ordering by move class for the adversarial search.

use mateline_core::{Move, MoveTags};

/// Ordering class of a move. Later variants are searched first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoveClass {
    Quiet,
    EnPassant,
    Castle,
    Check,
    Capture,
    CaptureCheck,
}

/// Classify a move from its tags.
///
/// En passant is ranked on its own and never as a capture, even though
/// it removes a pawn.
pub fn classify(mv: &Move) -> MoveClass {
    let tags = mv.tags();
    let en_passant = tags.contains(MoveTags::EN_PASSANT);
    let capture = tags.contains(MoveTags::CAPTURE) && !en_passant;
    let check = tags.contains(MoveTags::CHECK);

    match (capture, check) {
        (true, true) => MoveClass::CaptureCheck,
        (true, false) => MoveClass::Capture,
        (false, true) => MoveClass::Check,
        _ if tags.is_castle() => MoveClass::Castle,
        _ if en_passant => MoveClass::EnPassant,
        _ => MoveClass::Quiet,
    }
}

/// Incremental move picker using selection.
///
/// Yields moves in descending class. Moves of equal class come out in the
/// order they were generated.
pub struct MovePicker {
    moves: Vec<Move>,
    classes: Vec<MoveClass>,
}

impl MovePicker {
    /// Create a picker over `moves`.
    pub fn new(moves: Vec<Move>) -> Self {
        let classes = moves.iter().map(classify).collect();
        Self { moves, classes }
    }

    /// Yield the next highest-class move.
    pub fn pick_next(&mut self) -> Option<Move> {
        if self.moves.is_empty() {
            return None;
        }

        let mut best_idx = 0;
        for i in 1..self.classes.len() {
            if self.classes[i] > self.classes[best_idx] {
                best_idx = i;
            }
        }

        // remove, not swap: equal classes keep their relative order
        self.classes.remove(best_idx);
        Some(self.moves.remove(best_idx))
    }
}

impl Iterator for MovePicker {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        self.pick_next()
    }
}
