//! Arena-backed proof tree built by the mate search.

use std::fmt;

use mateline_core::{Color, Game, Move};

use crate::mate::moves::SearchMove;

/// Index of a node inside a [`MateTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root of every tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    search_move: Option<SearchMove>,
    /// Side to move once this node's move has been played.
    color: Color,
}

/// A tree of moves mirroring the mate search recursion.
///
/// Nodes live in an arena and are never freed. Removing a node splices it
/// out of its parent's child list, which makes its whole subtree
/// unreachable. After a successful search the reachable tree is the proof:
/// every surviving defender reply under a surviving mating move.
#[derive(Debug, Clone)]
pub struct MateTree {
    nodes: Vec<Node>,
    fen: String,
    moves_to_mate: u8,
}

impl MateTree {
    /// An empty tree rooted at the game's current position.
    pub fn new<G: Game>(game: &G, moves_to_mate: u8) -> Self {
        Self::from_fen(game.fen(), game.turn(), moves_to_mate)
    }

    /// An empty tree rooted at `fen` with `turn` to move.
    pub fn from_fen(fen: impl Into<String>, turn: Color, moves_to_mate: u8) -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            search_move: None,
            color: turn,
        };
        Self {
            nodes: vec![root],
            fen: fen.into(),
            moves_to_mate,
        }
    }

    /// The root position as FEN.
    pub fn fen(&self) -> &str {
        &self.fen
    }

    /// The mate length this tree was built for, in full moves.
    pub fn moves_to_mate(&self) -> u8 {
        self.moves_to_mate
    }

    /// Depth in plies of the final mating move: `1 + (N - 1) * 2`.
    pub fn target_depth(&self) -> usize {
        (2 * usize::from(self.moves_to_mate)).saturating_sub(1)
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Return `true` if `id` names the root.
    pub fn is_root(&self, id: NodeId) -> bool {
        self.nodes.get(id.0).is_some_and(|n| n.parent.is_none())
    }

    /// Parent of `id`, `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    /// Surviving children of `id`, in exploration order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.nodes.get(id.0) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// The move that produced `id`, `None` for the root.
    pub fn search_move(&self, id: NodeId) -> Option<&SearchMove> {
        self.nodes.get(id.0).and_then(|n| n.search_move.as_ref())
    }

    /// Side to move after `id`'s move.
    pub fn color(&self, id: NodeId) -> Option<Color> {
        self.nodes.get(id.0).map(|n| n.color)
    }

    /// Number of ancestors of `id`. The root has depth 0.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(p) = current {
            depth += 1;
            current = self.parent(p);
        }
        depth
    }

    /// Append a child to `parent` and return its id.
    pub fn add(&mut self, parent: NodeId, search_move: SearchMove, color: Color) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            search_move: Some(search_move),
            color,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Detach `child` from `parent`. Does nothing if it is not a child.
    pub fn remove(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(parent.0) {
            if let Some(pos) = node.children.iter().position(|&c| c == child) {
                node.children.remove(pos);
            }
        }
    }

    /// Nodes reachable from the root, the root included.
    pub fn reachable(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            count += 1;
            stack.extend_from_slice(self.children(id));
        }
        count
    }

    /// Moves from the root to the first node at the target depth.
    ///
    /// Children are visited depth-first in exploration order, so after a
    /// successful search this is the line through the first surviving child
    /// at every ply. A proof that mates before the target depth ends instead
    /// at the first mating node. Empty when the tree has neither.
    pub fn principal_line(&self) -> Vec<Move> {
        let target = self.target_depth();
        if target == 0 {
            return Vec::new();
        }
        let Some(leaf) = self
            .first_at_depth(NodeId::ROOT, 0, target)
            .or_else(|| self.first_mate(NodeId::ROOT))
        else {
            return Vec::new();
        };

        let mut line = Vec::with_capacity(target);
        let mut current = Some(leaf);
        while let Some(id) = current {
            if let Some(sm) = self.search_move(id) {
                line.push(sm.mv.clone());
            }
            current = self.parent(id);
        }
        line.reverse();
        line
    }

    fn first_at_depth(&self, id: NodeId, depth: usize, target: usize) -> Option<NodeId> {
        if depth == target {
            return Some(id);
        }
        self.children(id)
            .iter()
            .find_map(|&child| self.first_at_depth(child, depth + 1, target))
    }

    fn first_mate(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).iter().find_map(|&child| {
            match self.search_move(child) {
                Some(sm) if sm.mobility == 0 && sm.is_check() => Some(child),
                _ => self.first_mate(child),
            }
        })
    }

    fn write_subtree(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        for &child in self.children(id) {
            if let Some(sm) = self.search_move(child) {
                writeln!(f, "{:indent$}{}", "", sm.mv, indent = 2 * (depth + 1))?;
            }
            self.write_subtree(f, child, depth + 1)?;
        }
        Ok(())
    }
}

/// One UCI move per line, indented two spaces per ply.
impl fmt::Display for MateTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_subtree(f, NodeId::ROOT, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mateline_core::ChessGame;

    fn moves(game: &ChessGame, ucis: &[&str]) -> Vec<SearchMove> {
        ucis.iter()
            .map(|uci| SearchMove {
                mv: game
                    .valid_moves()
                    .into_iter()
                    .find(|m| m.to_uci() == *uci)
                    .unwrap(),
                mobility: 0,
            })
            .collect()
    }

    #[test]
    fn new_tree_has_only_a_root() {
        let game = ChessGame::new();
        let tree = MateTree::new(&game, 2);
        assert!(tree.is_root(NodeId::ROOT));
        assert!(tree.children(NodeId::ROOT).is_empty());
        assert_eq!(tree.parent(NodeId::ROOT), None);
        assert_eq!(tree.color(NodeId::ROOT), Some(Color::White));
        assert_eq!(tree.target_depth(), 3);
        assert_eq!(tree.reachable(), 1);
    }

    #[test]
    fn target_depth_follows_mate_length() {
        let game = ChessGame::new();
        assert_eq!(MateTree::new(&game, 1).target_depth(), 1);
        assert_eq!(MateTree::new(&game, 3).target_depth(), 5);
        assert_eq!(MateTree::new(&game, 0).target_depth(), 0);
    }

    #[test]
    fn add_and_remove_keep_order() {
        let game = ChessGame::new();
        let mut tree = MateTree::new(&game, 1);
        let ms = moves(&game, &["e2e4", "d2d4", "g1f3"]);
        let a = tree.add(NodeId::ROOT, ms[0].clone(), Color::Black);
        let b = tree.add(NodeId::ROOT, ms[1].clone(), Color::Black);
        let c = tree.add(NodeId::ROOT, ms[2].clone(), Color::Black);
        assert_eq!(tree.children(NodeId::ROOT), &[a, b, c]);

        tree.remove(NodeId::ROOT, b);
        assert_eq!(tree.children(NodeId::ROOT), &[a, c]);
        assert_eq!(tree.depth(c), 1);
        assert!(!tree.is_root(c));

        // not a child any more
        tree.remove(NodeId::ROOT, b);
        assert_eq!(tree.children(NodeId::ROOT), &[a, c]);
    }

    #[test]
    fn removed_subtree_is_unreachable() {
        let mut game = ChessGame::new();
        let mut tree = MateTree::new(&game, 2);
        let e4 = moves(&game, &["e2e4"]).remove(0);
        let first = tree.add(NodeId::ROOT, e4, Color::Black);
        game.apply_uci("e2e4").unwrap();
        let e5 = moves(&game, &["e7e5"]).remove(0);
        let reply = tree.add(first, e5, Color::White);
        assert_eq!(tree.depth(reply), 2);
        assert_eq!(tree.reachable(), 3);

        tree.remove(NodeId::ROOT, first);
        assert_eq!(tree.reachable(), 1);
    }

    #[test]
    fn principal_line_follows_first_children() {
        let mut game = ChessGame::new();
        let mut tree = MateTree::new(&game, 2);
        let white = moves(&game, &["e2e4", "d2d4"]);
        let e4 = tree.add(NodeId::ROOT, white[0].clone(), Color::Black);
        tree.add(NodeId::ROOT, white[1].clone(), Color::Black);

        game.apply_uci("e2e4").unwrap();
        let black = moves(&game, &["e7e5", "c7c5"]);
        let e5 = tree.add(e4, black[0].clone(), Color::White);
        tree.add(e4, black[1].clone(), Color::White);

        game.apply_uci("e7e5").unwrap();
        let nf3 = moves(&game, &["g1f3"]).remove(0);
        tree.add(e5, nf3, Color::Black);

        let line: Vec<String> = tree.principal_line().iter().map(Move::to_uci).collect();
        assert_eq!(line, ["e2e4", "e7e5", "g1f3"]);
    }

    #[test]
    fn principal_line_skips_short_branches() {
        let mut game = ChessGame::new();
        let mut tree = MateTree::new(&game, 2);
        let white = moves(&game, &["e2e4", "d2d4"]);
        tree.add(NodeId::ROOT, white[0].clone(), Color::Black);
        let d4 = tree.add(NodeId::ROOT, white[1].clone(), Color::Black);

        game.apply_uci("d2d4").unwrap();
        let d5 = tree.add(d4, moves(&game, &["d7d5"]).remove(0), Color::White);
        game.apply_uci("d7d5").unwrap();
        tree.add(d5, moves(&game, &["c2c4"]).remove(0), Color::Black);

        let line: Vec<String> = tree.principal_line().iter().map(Move::to_uci).collect();
        assert_eq!(line, ["d2d4", "d7d5", "c2c4"]);
    }

    #[test]
    fn short_mate_ends_the_line() {
        let mut game: ChessGame = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1".parse().unwrap();
        let mut tree = MateTree::new(&game, 3);
        let kf2 = tree.add(NodeId::ROOT, moves(&game, &["g1f2"]).remove(0), Color::Black);
        game.apply_uci("g1f2").unwrap();
        let kh8 = tree.add(kf2, moves(&game, &["g8h8"]).remove(0), Color::White);
        game.apply_uci("g8h8").unwrap();
        // mobility 0 and a check: the mate lands two plies short of the target
        tree.add(kh8, moves(&game, &["a1a8"]).remove(0), Color::Black);

        let line: Vec<String> = tree.principal_line().iter().map(Move::to_uci).collect();
        assert_eq!(line, ["g1f2", "g8h8", "a1a8"]);
    }

    #[test]
    fn empty_tree_has_no_line() {
        let tree = MateTree::new(&ChessGame::new(), 1);
        assert!(tree.principal_line().is_empty());
    }

    #[test]
    fn display_indents_by_depth() {
        let mut game = ChessGame::new();
        let mut tree = MateTree::new(&game, 1);
        let e4 = tree.add(NodeId::ROOT, moves(&game, &["e2e4"]).remove(0), Color::Black);
        game.apply_uci("e2e4").unwrap();
        tree.add(e4, moves(&game, &["e7e5"]).remove(0), Color::White);
        assert_eq!(tree.to_string(), "  e2e4\n    e7e5\n");
    }
}
