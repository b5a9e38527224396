//! Packed middlegame/endgame score used by the static evaluator.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, SubAssign};

use crate::eval::phase::MAX_PHASE;

/// Middlegame and endgame values packed into one `i32`.
///
/// Middlegame in the upper 16 bits, endgame in the lower 16 bits:
/// `((mg as i32) << 16) + (eg as i32)`. The encoding is additive, so
/// addition and subtraction work on the packed value directly.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Tapered(i32);

impl Tapered {
    /// Zero in both phases.
    pub const ZERO: Tapered = Tapered(0);

    /// Pack separate middlegame and endgame values.
    #[inline]
    pub const fn new(mg: i16, eg: i16) -> Tapered {
        Tapered(((mg as i32) << 16).wrapping_add(eg as i32))
    }

    /// Middlegame component.
    #[inline]
    pub fn mg(self) -> i16 {
        // +0x8000 undoes the borrow a negative eg takes from the upper half
        (self.0.wrapping_add(0x8000) >> 16) as i16
    }

    /// Endgame component.
    #[inline]
    pub fn eg(self) -> i16 {
        self.0 as i16
    }

    /// Interpolate between the two components by game phase.
    ///
    /// `phase == MAX_PHASE` yields the middlegame value, `0` the endgame value.
    pub fn blend(self, phase: i32) -> i32 {
        let phase = phase.clamp(0, MAX_PHASE);
        (self.mg() as i32 * phase + self.eg() as i32 * (MAX_PHASE - phase)) / MAX_PHASE
    }
}

/// Shorthand constructor: `S(mg, eg)`.
#[allow(non_snake_case)]
#[inline]
pub const fn S(mg: i16, eg: i16) -> Tapered {
    Tapered::new(mg, eg)
}

impl Add for Tapered {
    type Output = Tapered;

    #[inline]
    fn add(self, rhs: Tapered) -> Tapered {
        Tapered(self.0 + rhs.0)
    }
}

impl AddAssign for Tapered {
    #[inline]
    fn add_assign(&mut self, rhs: Tapered) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Tapered {
    #[inline]
    fn sub_assign(&mut self, rhs: Tapered) {
        self.0 -= rhs.0;
    }
}

impl Mul<i16> for Tapered {
    type Output = Tapered;

    /// Scale each component separately; the raw packed value cannot be multiplied.
    #[inline]
    fn mul(self, rhs: i16) -> Tapered {
        Tapered::new(self.mg() * rhs, self.eg() * rhs)
    }
}

impl fmt::Debug for Tapered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S({}, {})", self.mg(), self.eg())
    }
}
