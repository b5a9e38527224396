//! The game collaborator: legal moves, apply/undo on shared state, and status.

use std::fmt;
use std::str::FromStr;

use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, File, Position, Rank, Square};
use tracing::trace;

use crate::chess_move::Move;
use crate::error::GameError;
use crate::eval::evaluate;
use crate::method::{Method, Outcome};

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// What a search needs from a game: legal moves, perfectly invertible
/// apply/undo, terminal classification and a static evaluator.
pub trait Game {
    /// Legal moves from the current position. Order carries no meaning.
    fn valid_moves(&self) -> Vec<Move>;

    /// Number of legal moves from the current position.
    fn mobility(&self) -> usize {
        self.valid_moves().len()
    }

    /// Play `mv` on the current position.
    fn apply(&mut self, mv: &Move) -> Result<(), GameError>;

    /// Take back the most recently applied move.
    fn undo(&mut self) -> Result<(), GameError>;

    /// Classify the current position.
    fn method(&self) -> Method;

    /// Result of the game so far.
    fn outcome(&self) -> Outcome;

    /// Static evaluation in centipawns from White's perspective.
    fn evaluate(&self) -> i32;

    /// The side to move.
    fn turn(&self) -> Color;

    /// The current position as FEN.
    fn fen(&self) -> String;
}

/// Snapshot taken before a move, restored by `undo`.
#[derive(Clone)]
struct Ply {
    position: Chess,
    key: String,
    san: String,
}

/// A standard chess game with a move history that supports undo.
#[derive(Clone)]
pub struct ChessGame {
    position: Chess,
    /// Repetition key of `position`: the first four FEN fields.
    key: String,
    history: Vec<Ply>,
    start_turn: Color,
    start_fullmoves: u32,
}

impl ChessGame {
    /// A game at the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    /// A game starting from an already validated position.
    pub fn from_position(position: Chess) -> Self {
        let start_turn = position.turn();
        let start_fullmoves = position.fullmoves().get();
        let key = position_key(&position);
        Self {
            position,
            key,
            history: Vec::new(),
            start_turn,
            start_fullmoves,
        }
    }

    /// The current board position.
    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Number of moves played since the starting position.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Parse a UCI move string against the current position and play it.
    pub fn apply_uci(&mut self, uci: &str) -> Result<(), GameError> {
        let mv = self
            .valid_moves()
            .into_iter()
            .find(|m| m.to_uci() == uci)
            .ok_or_else(|| GameError::InvalidUci {
                uci: uci.to_string(),
            })?;
        self.apply(&mv)
    }

    /// SAN movetext with move numbers and the result token,
    /// e.g. `"1. e4 e5 2. Qh5 *"` or `"1... Qxd1+ 2. Nxd1 Re1# 0-1"`.
    pub fn movetext(&self) -> String {
        let mut tokens: Vec<String> = Vec::with_capacity(self.history.len() + 1);
        let mut number = self.start_fullmoves;
        let mut turn = self.start_turn;

        for (i, ply) in self.history.iter().enumerate() {
            match turn {
                Color::White => tokens.push(format!("{number}. {}", ply.san)),
                Color::Black if i == 0 => tokens.push(format!("{number}... {}", ply.san)),
                Color::Black => tokens.push(ply.san.clone()),
            }
            if turn == Color::Black {
                number += 1;
            }
            turn = !turn;
        }

        tokens.push(self.outcome().to_string());
        tokens.join(" ")
    }

    /// Render the board as an 8x8 grid, rank 8 at the top.
    pub fn draw(&self) -> String {
        let board = self.position.board();
        let mut out = String::new();
        for rank in (0..8u32).rev() {
            out.push_str(&format!("{} ", rank + 1));
            for file in 0..8u32 {
                let sq = Square::from_coords(File::new(file), Rank::new(rank));
                let c = board.piece_at(sq).map_or('.', |p| p.char());
                out.push(c);
                out.push(' ');
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h\n");
        out
    }

    fn repetitions(&self) -> usize {
        1 + self.history.iter().filter(|p| p.key == self.key).count()
    }
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ChessGame {
    type Err = GameError;

    fn from_str(fen: &str) -> Result<ChessGame, GameError> {
        let parsed: Fen = fen.trim().parse().map_err(|_| GameError::InvalidFen {
            fen: fen.to_string(),
        })?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|_| GameError::IllegalPosition {
                fen: fen.to_string(),
            })?;
        Ok(ChessGame::from_position(position))
    }
}

impl Game for ChessGame {
    fn valid_moves(&self) -> Vec<Move> {
        self.position
            .legal_moves()
            .iter()
            .map(|m| {
                let mut next = self.position.clone();
                next.play_unchecked(m);
                Move::new(m.clone(), next.is_check())
            })
            .collect()
    }

    fn mobility(&self) -> usize {
        self.position.legal_moves().len()
    }

    fn apply(&mut self, mv: &Move) -> Result<(), GameError> {
        if !self.position.is_legal(mv.inner()) {
            return Err(GameError::IllegalMove { uci: mv.to_uci() });
        }
        let before = self.position.clone();
        let san = SanPlus::from_move_and_play_unchecked(&mut self.position, mv.inner()).to_string();
        let key = std::mem::replace(&mut self.key, position_key(&self.position));
        self.history.push(Ply {
            position: before,
            key,
            san,
        });
        trace!(mv = %mv, ply = self.history.len(), "applied move");
        Ok(())
    }

    fn undo(&mut self) -> Result<(), GameError> {
        let ply = self.history.pop().ok_or(GameError::NothingToUndo)?;
        self.position = ply.position;
        self.key = ply.key;
        Ok(())
    }

    fn method(&self) -> Method {
        let pos = &self.position;
        if pos.legal_moves().is_empty() {
            return if pos.is_check() {
                Method::Checkmate
            } else {
                Method::Stalemate
            };
        }
        if pos.is_insufficient_material() {
            return Method::InsufficientMaterial;
        }
        if pos.halfmoves() >= 150 {
            return Method::SeventyFiveMoveRule;
        }
        let repetitions = self.repetitions();
        if repetitions >= 5 {
            return Method::FivefoldRepetition;
        }
        if pos.halfmoves() >= 100 {
            return Method::FiftyMoveRule;
        }
        if repetitions >= 3 {
            return Method::ThreefoldRepetition;
        }
        if pos.is_check() {
            return Method::InCheck;
        }
        Method::NoMethod
    }

    fn outcome(&self) -> Outcome {
        match self.method() {
            Method::Checkmate => Outcome::won_by(!self.position.turn()),
            m if m.is_draw() => Outcome::Draw,
            _ => Outcome::NoOutcome,
        }
    }

    fn evaluate(&self) -> i32 {
        evaluate(&self.position)
    }

    fn turn(&self) -> Color {
        self.position.turn()
    }

    fn fen(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }
}

impl fmt::Display for ChessGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.movetext())
    }
}

impl fmt::Debug for ChessGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChessGame")
            .field("fen", &self.fen())
            .field("plies", &self.history.len())
            .finish()
    }
}

/// Board, side to move, castling rights and en passant square.
fn position_key(position: &Chess) -> String {
    let fen = Fen::from_position(position.clone(), EnPassantMode::Legal).to_string();
    fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut ChessGame, ucis: &[&str]) {
        for uci in ucis {
            game.apply_uci(uci).unwrap();
        }
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let game = ChessGame::new();
        assert_eq!(game.valid_moves().len(), 20);
        assert_eq!(game.mobility(), 20);
        assert_eq!(game.fen(), STARTING_FEN);
        assert_eq!(game.method(), Method::NoMethod);
    }

    #[test]
    fn apply_then_undo_restores_fen() {
        let mut game = ChessGame::new();
        let before = game.fen();
        play(&mut game, &["e2e4", "c7c5", "g1f3"]);
        assert_ne!(game.fen(), before);
        for _ in 0..3 {
            game.undo().unwrap();
        }
        assert_eq!(game.fen(), before);
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn undo_on_empty_history_fails() {
        let mut game = ChessGame::new();
        assert_eq!(game.undo(), Err(GameError::NothingToUndo));
    }

    #[test]
    fn apply_rejects_move_from_other_position() {
        let start = ChessGame::new();
        let e4 = start
            .valid_moves()
            .into_iter()
            .find(|m| m.to_uci() == "e2e4")
            .unwrap();
        let mut game = start.clone();
        game.apply(&e4).unwrap();
        let err = game.apply(&e4).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { .. }));
        assert_eq!(game.ply_count(), 1);
    }

    #[test]
    fn apply_uci_rejects_unknown_move() {
        let mut game = ChessGame::new();
        assert!(matches!(
            game.apply_uci("e2e5"),
            Err(GameError::InvalidUci { .. })
        ));
    }

    #[test]
    fn invalid_fen_is_rejected() {
        assert!(matches!(
            "not a fen".parse::<ChessGame>(),
            Err(GameError::InvalidFen { .. })
        ));
    }

    #[test]
    fn checkmate_is_classified() {
        let game: ChessGame = "7k/6Q1/5K2/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert_eq!(game.method(), Method::Checkmate);
        assert_eq!(game.outcome(), Outcome::WhiteWon);
    }

    #[test]
    fn stalemate_is_classified() {
        let game: ChessGame = "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert_eq!(game.method(), Method::Stalemate);
        assert_eq!(game.outcome(), Outcome::Draw);
    }

    #[test]
    fn insufficient_material_is_classified() {
        let game: ChessGame = "8/8/4k3/8/8/3K4/8/8 w - - 0 1".parse().unwrap();
        assert_eq!(game.method(), Method::InsufficientMaterial);
    }

    #[test]
    fn in_check_is_classified() {
        let game: ChessGame = "4k3/8/8/8/8/8/4R3/4K3 b - - 0 1".parse().unwrap();
        assert_eq!(game.method(), Method::InCheck);
        assert_eq!(game.outcome(), Outcome::NoOutcome);
    }

    #[test]
    fn threefold_repetition_is_detected() {
        let mut game = ChessGame::new();
        play(
            &mut game,
            &["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1", "f6g8"],
        );
        assert_eq!(game.method(), Method::ThreefoldRepetition);
    }

    #[test]
    fn movetext_numbers_white_start() {
        let mut game = ChessGame::new();
        play(&mut game, &["e2e4", "e7e5", "d1h5"]);
        assert_eq!(game.movetext(), "1. e4 e5 2. Qh5 *");
    }

    #[test]
    fn movetext_numbers_black_start() {
        let mut game: ChessGame = "r3r1k1/ppp2ppp/5n2/7q/8/2N3Qb/PPP2P1P/R1BR2K1 b - - 0 1"
            .parse()
            .unwrap();
        play(&mut game, &["h5d1", "c3d1", "e8e1"]);
        assert_eq!(game.movetext(), "1... Qxd1+ 2. Nxd1 Re1# 0-1");
    }

    #[test]
    fn movetext_of_untouched_game_is_result_only() {
        assert_eq!(ChessGame::new().movetext(), "*");
    }

    #[test]
    fn draw_shows_pieces() {
        let drawing = ChessGame::new().draw();
        assert!(drawing.starts_with("8 r n b q k b n r"));
        assert!(drawing.ends_with("  a b c d e f g h\n"));
    }
}
