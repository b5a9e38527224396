//! Legal moves annotated with their tactical tags.

use std::fmt;
use std::ops::BitOr;

use shakmaty::{CastlingSide, File, Role, Square};

/// Move tags encoded as a 5-bit field.
///
/// bit 0 = capture, 1 = check, 2 = en passant, 3 = king-side castle,
/// 4 = queen-side castle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveTags(u8);

impl MoveTags {
    /// No tags.
    pub const NONE: MoveTags = MoveTags(0);
    /// The move captures a piece (including en passant).
    pub const CAPTURE: MoveTags = MoveTags(0b00001);
    /// The move gives check.
    pub const CHECK: MoveTags = MoveTags(0b00010);
    /// The move is an en passant capture.
    pub const EN_PASSANT: MoveTags = MoveTags(0b00100);
    /// The move castles king-side.
    pub const KING_SIDE_CASTLE: MoveTags = MoveTags(0b01000);
    /// The move castles queen-side.
    pub const QUEEN_SIDE_CASTLE: MoveTags = MoveTags(0b10000);

    /// Return the raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Return `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: MoveTags) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Return new tags with all bits from `other` added.
    #[inline]
    pub const fn insert(self, other: MoveTags) -> MoveTags {
        MoveTags(self.0 | other.0)
    }

    /// Return `true` if the move castles to either side.
    #[inline]
    pub const fn is_castle(self) -> bool {
        self.0 & (Self::KING_SIDE_CASTLE.0 | Self::QUEEN_SIDE_CASTLE.0) != 0
    }
}

impl BitOr for MoveTags {
    type Output = MoveTags;

    #[inline]
    fn bitor(self, rhs: MoveTags) -> MoveTags {
        self.insert(rhs)
    }
}

impl fmt::Debug for MoveTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(MoveTags, &str); 5] = [
            (MoveTags::CAPTURE, "Capture"),
            (MoveTags::CHECK, "Check"),
            (MoveTags::EN_PASSANT, "EnPassant"),
            (MoveTags::KING_SIDE_CASTLE, "KingSideCastle"),
            (MoveTags::QUEEN_SIDE_CASTLE, "QueenSideCastle"),
        ];
        let names: Vec<&str> = NAMES
            .iter()
            .filter(|(tag, _)| self.contains(*tag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "MoveTags({})", names.join("|"))
    }
}

/// A legal move produced by [`Game::valid_moves`](crate::Game::valid_moves).
///
/// Carries the underlying board move so it can be replayed without
/// re-parsing, plus the tags computed when the move was generated.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Move {
    inner: shakmaty::Move,
    tags: MoveTags,
}

impl Move {
    /// Wrap a board move, deriving all tags except [`MoveTags::CHECK`],
    /// which is set when `gives_check` is `true`.
    pub(crate) fn new(inner: shakmaty::Move, gives_check: bool) -> Move {
        let mut tags = MoveTags::NONE;
        if inner.is_capture() {
            tags = tags | MoveTags::CAPTURE;
        }
        if inner.is_en_passant() {
            tags = tags | MoveTags::EN_PASSANT;
        }
        match inner.castling_side() {
            Some(CastlingSide::KingSide) => tags = tags | MoveTags::KING_SIDE_CASTLE,
            Some(CastlingSide::QueenSide) => tags = tags | MoveTags::QUEEN_SIDE_CASTLE,
            None => {}
        }
        if gives_check {
            tags = tags | MoveTags::CHECK;
        }
        Move { inner, tags }
    }

    /// The board move this wraps.
    #[inline]
    pub(crate) fn inner(&self) -> &shakmaty::Move {
        &self.inner
    }

    /// Origin square.
    ///
    /// Every standard-chess move has one; drops do not exist in this variant.
    pub fn from(&self) -> Square {
        self.inner.from().unwrap_or(self.inner.to())
    }

    /// Destination square. Castling moves report the king's destination.
    pub fn to(&self) -> Square {
        match self.inner.castling_side() {
            Some(side) => {
                let file = match side {
                    CastlingSide::KingSide => File::G,
                    CastlingSide::QueenSide => File::C,
                };
                Square::from_coords(file, self.from().rank())
            }
            None => self.inner.to(),
        }
    }

    /// The piece a pawn promotes to, if any.
    #[inline]
    pub fn promotion(&self) -> Option<Role> {
        self.inner.promotion()
    }

    /// The role of the moving piece.
    #[inline]
    pub fn role(&self) -> Role {
        self.inner.role()
    }

    /// All tags attached at generation time.
    #[inline]
    pub fn tags(&self) -> MoveTags {
        self.tags
    }

    /// Return `true` if the move carries `tag`.
    #[inline]
    pub fn has_tag(&self, tag: MoveTags) -> bool {
        self.tags.contains(tag)
    }

    /// Return `true` if the move gives check.
    #[inline]
    pub fn is_check(&self) -> bool {
        self.has_tag(MoveTags::CHECK)
    }

    /// Format as a UCI string (e.g. "e2e4", "e1g1", "a7a8q").
    pub fn to_uci(&self) -> String {
        let mut s = format!("{}{}", self.from(), self.to());
        if let Some(role) = self.promotion() {
            s.push(role.char());
        }
        s
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uci())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}, {:?})", self.to_uci(), self.tags)
    }
}
