//! Material balance.
//!
//! All scores are from White's perspective (positive = White ahead).

use shakmaty::{Board, Color, Role};

use crate::eval::tapered::{S, Tapered};

/// Base value of a piece of `role`. Kings carry no material value.
pub const fn material_value(role: Role) -> Tapered {
    match role {
        Role::Pawn => S(100, 120),
        Role::Knight => S(320, 310),
        Role::Bishop => S(330, 320),
        Role::Rook => S(500, 520),
        Role::Queen => S(900, 950),
        Role::King => S(0, 0),
    }
}

/// Bonus for owning two or more bishops.
const BISHOP_PAIR_BONUS: Tapered = S(50, 60);

const ROLES: [Role; 5] = [Role::Pawn, Role::Knight, Role::Bishop, Role::Rook, Role::Queen];

/// Material balance plus the bishop-pair bonus, White minus Black.
pub fn material(board: &Board) -> Tapered {
    let white = board.by_color(Color::White);
    let black = board.by_color(Color::Black);
    let mut score = Tapered::ZERO;

    for role in ROLES {
        let pieces = board.by_role(role);
        let diff = (pieces & white).count() as i16 - (pieces & black).count() as i16;
        score += material_value(role) * diff;
    }

    let bishops = board.by_role(Role::Bishop);
    if (bishops & white).count() >= 2 {
        score += BISHOP_PAIR_BONUS;
    }
    if (bishops & black).count() >= 2 {
        score -= BISHOP_PAIR_BONUS;
    }

    score
}
