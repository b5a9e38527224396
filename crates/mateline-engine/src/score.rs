//! Search scores: proven results kept apart from heuristic evaluations.

use std::cmp::Ordering;
use std::fmt;

use mateline_core::Color;

/// A proven game result, in White's frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decisive {
    /// White wins by force.
    Win,
    /// White loses by force.
    Loss,
}

/// The value of a position as seen by the search.
///
/// Always in White's frame, matching the evaluator: larger is better for
/// White. Ordering is `Decisive(Loss) < Heuristic(_) < Decisive(Win)`.
///
/// `Score` has no arithmetic. A decisive result can be compared with a
/// heuristic value but never added to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Score {
    /// A forced result.
    Decisive(Decisive),
    /// A static evaluation in centipawns.
    Heuristic(i32),
}

impl Score {
    /// Upper bound of every search window.
    pub const INF: Score = Score::Decisive(Decisive::Win);
    /// Lower bound of every search window.
    pub const NEG_INF: Score = Score::Decisive(Decisive::Loss);
    /// A drawn position.
    pub const DRAW: Score = Score::Heuristic(0);

    /// The score of a position where `loser` has been checkmated.
    pub const fn mated(loser: Color) -> Score {
        match loser {
            Color::White => Score::Decisive(Decisive::Loss),
            Color::Black => Score::Decisive(Decisive::Win),
        }
    }

    fn rank(self) -> (i8, i32) {
        match self {
            Score::Decisive(Decisive::Loss) => (0, 0),
            Score::Heuristic(cp) => (1, cp),
            Score::Decisive(Decisive::Win) => (2, 0),
        }
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Score) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Score) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Heuristic(cp) => write!(f, "cp {cp}"),
            Score::Decisive(Decisive::Win) => f.write_str("mate white"),
            Score::Decisive(Decisive::Loss) => f.write_str("mate black"),
        }
    }
}
