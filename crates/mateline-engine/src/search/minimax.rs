//! Minimax with alpha-beta cutoffs that also reports the best move.

use mateline_core::{Color, Game, Method, Move};
use tracing::debug;

use crate::error::SearchError;
use crate::limits::SearchLimits;
use crate::score::Score;
use crate::search::guard::MoveGuard;
use crate::search::ordering::MovePicker;
use crate::search::SearchStats;

/// Best score and move for the side to move, searched `depth` plies deep.
///
/// White maximizes and Black minimizes; the direction comes from the
/// game's turn. The best move is `None` only when the position is terminal
/// or `depth` is zero.
pub fn minimax<G: Game>(
    game: &mut G,
    depth: u8,
    alpha: Score,
    beta: Score,
) -> Result<(Score, Option<Move>), SearchError> {
    minimax_with_stats(game, depth, alpha, beta, &SearchLimits::default())
        .map(|(score, best, _)| (score, best))
}

/// [`minimax`] under explicit limits, also reporting node counts.
pub fn minimax_with_stats<G: Game>(
    game: &mut G,
    depth: u8,
    alpha: Score,
    beta: Score,
    limits: &SearchLimits,
) -> Result<(Score, Option<Move>, SearchStats), SearchError> {
    limits.check_depth(depth)?;

    let mut stats = SearchStats::default();
    let (score, best) = search(game, depth, alpha, beta, &mut stats)?;
    let best_uci = best.as_ref().map_or_else(|| "none".to_string(), Move::to_uci);
    debug!(depth, %score, best = %best_uci, nodes = stats.nodes, "minimax finished");
    Ok((score, best, stats))
}

fn search<G: Game>(
    game: &mut G,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    stats: &mut SearchStats,
) -> Result<(Score, Option<Move>), SearchError> {
    stats.nodes += 1;

    let method = game.method();
    if method == Method::Checkmate {
        return Ok((Score::mated(game.turn()), None));
    }
    if depth == 0 {
        return Ok((Score::Heuristic(game.evaluate()), None));
    }
    if method.is_draw() {
        return Ok((Score::DRAW, None));
    }

    let side = game.turn();
    let mut best_score = match side {
        Color::White => Score::NEG_INF,
        Color::Black => Score::INF,
    };
    let mut best_move: Option<Move> = None;

    for mv in MovePicker::new(game.valid_moves()) {
        let mut child = MoveGuard::apply(game, &mv)?;
        let (score, _) = search(&mut *child, depth - 1, alpha, beta, stats)?;
        child.undo()?;

        let improves = match side {
            Color::White => score > best_score,
            Color::Black => score < best_score,
        };
        if improves || best_move.is_none() {
            best_score = score;
            best_move = Some(mv);
            match side {
                Color::White => alpha = alpha.max(score),
                Color::Black => beta = beta.min(score),
            }
        }

        if alpha >= beta {
            break;
        }
    }

    Ok((best_score, best_move))
}
