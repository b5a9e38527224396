//! AND-OR proof search for a forced mate.
//!
//! The side to move at the root is the attacker. At attacker nodes one
//! candidate that forces mate is enough (OR); at defender nodes every reply
//! must lose (AND). `depth` counts attacker moves from 1, so the final
//! mating move is played at `depth == maximum`.

use mateline_core::Game;
use tracing::{debug, info, trace};

use crate::error::SearchError;
use crate::limits::SearchLimits;
use crate::mate::moves::searchable_moves;
use crate::mate::tree::{MateTree, NodeId};
use crate::search::{MoveGuard, SearchStats};

/// Prove that the side to move mates in at most `moves_to_mate` moves.
///
/// `tree` must be fresh from [`MateTree::new`] for the same game and
/// length. On `Ok(true)` the reachable tree holds the proof; on `Ok(false)`
/// the root has no children left. The game is restored on every path.
pub fn mate_search<G: Game>(
    game: &mut G,
    moves_to_mate: u8,
    tree: &mut MateTree,
) -> Result<bool, SearchError> {
    mate_search_with_stats(game, moves_to_mate, tree, &SearchLimits::default())
        .map(|(found, _)| found)
}

/// [`mate_search`] under explicit limits, also reporting node counts.
pub fn mate_search_with_stats<G: Game>(
    game: &mut G,
    moves_to_mate: u8,
    tree: &mut MateTree,
    limits: &SearchLimits,
) -> Result<(bool, SearchStats), SearchError> {
    limits.check_mate_moves(moves_to_mate)?;
    if tree.moves_to_mate() != moves_to_mate {
        return Err(SearchError::TreeMismatch {
            reason: format!(
                "tree built for mate in {}, search asked for mate in {moves_to_mate}",
                tree.moves_to_mate()
            ),
        });
    }
    if tree.fen() != game.fen() {
        return Err(SearchError::TreeMismatch {
            reason: format!("tree rooted at {}, game is at {}", tree.fen(), game.fen()),
        });
    }
    if !tree.children(NodeId::ROOT).is_empty() {
        return Err(SearchError::TreeMismatch {
            reason: "tree already holds a search".to_string(),
        });
    }

    let mut stats = SearchStats::default();
    let found = prove(game, 1, moves_to_mate, NodeId::ROOT, tree, &mut stats)?;

    if found {
        info!(
            moves_to_mate,
            nodes = stats.nodes,
            proof_nodes = tree.reachable(),
            fen = %tree.fen(),
            "forced mate found"
        );
    } else {
        debug!(moves_to_mate, nodes = stats.nodes, fen = %tree.fen(), "no forced mate");
    }
    Ok((found, stats))
}

/// Attacker node: succeed if any candidate forces mate.
fn prove<G: Game>(
    game: &mut G,
    depth: u8,
    maximum: u8,
    node: NodeId,
    tree: &mut MateTree,
    stats: &mut SearchStats,
) -> Result<bool, SearchError> {
    stats.nodes += 1;
    let final_ply = depth == maximum;

    for candidate in searchable_moves(game)? {
        let current = tree.add(node, candidate.clone(), !game.turn());

        if final_ply && !candidate.is_check() {
            tree.remove(node, current);
            continue;
        }

        if candidate.mobility == 0 {
            if !candidate.is_check() {
                trace!(mv = %candidate.mv, depth, "stalemate");
                tree.remove(node, current);
                continue;
            }
            // a mate on the first move only counts when nothing longer was asked for
            if depth != 1 || final_ply {
                return Ok(true);
            }
            tree.remove(node, current);
            continue;
        }

        if final_ply {
            tree.remove(node, current);
            continue;
        }

        let refuted = {
            let mut attacked = MoveGuard::apply(game, &candidate.mv)?;
            let refuted = defend(&mut *attacked, depth, maximum, current, tree, stats)?;
            attacked.undo()?;
            refuted
        };

        if refuted == candidate.mobility {
            return Ok(true);
        }
        trace!(mv = %candidate.mv, depth, refuted, "candidate escapes");
        tree.remove(node, current);
    }

    Ok(false)
}

/// Defender node: count replies that still lose, stopping at the first escape.
fn defend<G: Game>(
    game: &mut G,
    depth: u8,
    maximum: u8,
    node: NodeId,
    tree: &mut MateTree,
    stats: &mut SearchStats,
) -> Result<usize, SearchError> {
    stats.nodes += 1;
    let mut refuted = 0;

    for reply in searchable_moves(game)? {
        let current = tree.add(node, reply.clone(), !game.turn());

        let mut defended = MoveGuard::apply(game, &reply.mv)?;
        let proven = prove(&mut *defended, depth + 1, maximum, current, tree, stats)?;
        defended.undo()?;

        if !proven {
            tree.remove(node, current);
            break;
        }
        refuted += 1;
    }

    Ok(refuted)
}
