//! Fixed-depth alpha-beta search with an explicit maximizing flag.

use mateline_core::{Game, Method};
use tracing::debug;

use crate::error::SearchError;
use crate::limits::SearchLimits;
use crate::score::Score;
use crate::search::guard::MoveGuard;
use crate::search::ordering::MovePicker;
use crate::search::SearchStats;

/// Alpha-beta value of the current position searched `depth` plies deep.
///
/// Scores are in White's frame, so the root call passes
/// `maximizing = true` when White is to move. Use the full window
/// `Score::NEG_INF..Score::INF` for an exact value.
///
/// The game is left exactly as it was on every return path.
pub fn alpha_beta<G: Game>(
    game: &mut G,
    depth: u8,
    alpha: Score,
    beta: Score,
    maximizing: bool,
) -> Result<Score, SearchError> {
    alpha_beta_with_stats(game, depth, alpha, beta, maximizing, &SearchLimits::default())
        .map(|(score, _)| score)
}

/// [`alpha_beta`] under explicit limits, also reporting node counts.
pub fn alpha_beta_with_stats<G: Game>(
    game: &mut G,
    depth: u8,
    alpha: Score,
    beta: Score,
    maximizing: bool,
    limits: &SearchLimits,
) -> Result<(Score, SearchStats), SearchError> {
    limits.check_depth(depth)?;

    let mut stats = SearchStats::default();
    let score = search(game, depth, alpha, beta, maximizing, &mut stats)?;
    debug!(depth, %score, nodes = stats.nodes, "alpha-beta finished");
    Ok((score, stats))
}

fn search<G: Game>(
    game: &mut G,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    stats: &mut SearchStats,
) -> Result<Score, SearchError> {
    stats.nodes += 1;

    let method = game.method();
    if method == Method::Checkmate {
        return Ok(Score::mated(game.turn()));
    }
    if depth == 0 {
        return Ok(Score::Heuristic(game.evaluate()));
    }
    if method.is_draw() {
        return Ok(Score::DRAW);
    }

    let picker = MovePicker::new(game.valid_moves());

    if maximizing {
        let mut best = Score::NEG_INF;
        for mv in picker {
            let mut child = MoveGuard::apply(game, &mv)?;
            let value = search(&mut *child, depth - 1, alpha, beta, false, stats)?;
            child.undo()?;

            best = best.max(value);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        Ok(best)
    } else {
        let mut best = Score::INF;
        for mv in picker {
            let mut child = MoveGuard::apply(game, &mv)?;
            let value = search(&mut *child, depth - 1, alpha, beta, true, stats)?;
            child.undo()?;

            best = best.min(value);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        Ok(best)
    }
}
