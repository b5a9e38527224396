//! Principal-line rendering as SAN movetext.

use mateline_core::{ChessGame, Move};

use crate::error::SearchError;
use crate::mate::tree::{MateTree, NodeId};

impl MateTree {
    /// Render the principal line as movetext, e.g. `"1. Qxf7# 1-0"`.
    ///
    /// The line is replayed on a fresh game from the root position, so the
    /// output carries move numbers, check marks and the result. A tree with
    /// no node at the target depth renders as `"*"`.
    pub fn render(&self) -> Result<String, SearchError> {
        render_line(self, NodeId::ROOT)
    }
}

/// Render the line below `node`, which must be the root of `tree`.
pub fn render_line(tree: &MateTree, node: NodeId) -> Result<String, SearchError> {
    if !tree.is_root(node) {
        return Err(SearchError::MalformedTree {
            reason: format!("render requested on non-root node {}", node.index()),
        });
    }

    let mut game: ChessGame = tree.fen().parse().map_err(|e| SearchError::MalformedTree {
        reason: format!("root position: {e}"),
    })?;
    replay(&mut game, &tree.principal_line())?;
    Ok(game.movetext())
}

fn replay(game: &mut ChessGame, line: &[Move]) -> Result<(), SearchError> {
    for mv in line {
        let uci = mv.to_uci();
        game.apply_uci(&uci)
            .map_err(|_| SearchError::MalformedTree {
                reason: format!("invalid move: {uci}"),
            })?;
    }
    Ok(())
}
