//! Line-oriented command session over a single game.

use std::io::{BufRead, Write};

use mateline_core::{ChessGame, Color, Game};
use mateline_engine::{
    MateTree, Score, SearchLimits, alpha_beta_with_stats, mate_search_with_stats,
    minimax_with_stats,
};
use tracing::{debug, info, warn};

use crate::command::{
    Command, GoParams, MAX_DEPTH_OPTION, MAX_MATE_MOVES_OPTION, SessionOption, parse_command,
};
use crate::error::CliError;

/// Depth used by `go` when none is given.
const DEFAULT_GO_DEPTH: u8 = 4;

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Depth bounds handed to every search.
    pub limits: SearchLimits,
}

/// The command session, holding the current position and the last proof tree.
pub struct Session {
    game: ChessGame,
    config: SessionConfig,
    last_tree: Option<MateTree>,
}

impl Session {
    /// Create a session at the starting position.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            game: ChessGame::new(),
            config,
            last_tree: None,
        }
    }

    /// The current position.
    pub fn game(&self) -> &ChessGame {
        &self.game
    }

    /// The current configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Malformed commands and failed searches are logged and reported on
    /// `output`; the session carries on. Only I/O errors end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<(), CliError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let cmd = match parse_command(trimmed) {
                Ok(cmd) => cmd,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(output, "error: {e}")?;
                    continue;
                }
            };

            match self.execute(cmd, output) {
                Ok(true) => {}
                Ok(false) => break,
                Err(CliError::Io { source }) => return Err(CliError::Io { source }),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }

        info!("mateline shutting down");
        Ok(())
    }

    /// Run one command. Returns `false` when the session should end.
    pub fn execute<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<bool, CliError> {
        match cmd {
            Command::Uci => self.handle_uci(output)?,
            Command::IsReady => writeln!(output, "readyok")?,
            Command::NewGame => {
                self.game = ChessGame::new();
                self.last_tree = None;
            }
            Command::Position(game) => {
                self.game = game;
                self.last_tree = None;
            }
            Command::Mate(moves) => self.handle_mate(moves, output)?,
            Command::Go(params) => self.handle_go(params, output)?,
            Command::Eval => writeln!(output, "eval cp {}", self.game.evaluate())?,
            Command::Display => self.handle_display(output)?,
            Command::Tree => match &self.last_tree {
                Some(tree) => write!(output, "{tree}")?,
                None => writeln!(output, "no tree")?,
            },
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Quit => return Ok(false),
            Command::Unknown(_) => {}
        }
        Ok(true)
    }

    fn handle_uci<W: Write>(&self, output: &mut W) -> Result<(), CliError> {
        let limits = self.config.limits;
        writeln!(output, "id name mateline")?;
        writeln!(
            output,
            "option name MaxDepth type spin default {} min 1 max {MAX_DEPTH_OPTION}",
            limits.max_depth
        )?;
        writeln!(
            output,
            "option name MaxMateMoves type spin default {} min 1 max {MAX_MATE_MOVES_OPTION}",
            limits.max_mate_moves
        )?;
        writeln!(output, "uciok")?;
        Ok(())
    }

    fn handle_setoption(&mut self, option: SessionOption) {
        match option {
            SessionOption::MaxDepth(depth) => self.config.limits.max_depth = depth,
            SessionOption::MaxMateMoves(moves) => self.config.limits.max_mate_moves = moves,
        }
        debug!(?option, "option set");
    }

    fn handle_mate<W: Write>(&mut self, moves: u8, output: &mut W) -> Result<(), CliError> {
        let mut tree = MateTree::new(&self.game, moves);
        let (found, stats) =
            mate_search_with_stats(&mut self.game, moves, &mut tree, &self.config.limits)?;

        if found {
            writeln!(output, "{}", tree.render()?)?;
        } else {
            writeln!(output, "no mate in {moves}")?;
        }
        writeln!(output, "info nodes {}", stats.nodes)?;
        self.last_tree = Some(tree);
        Ok(())
    }

    fn handle_go<W: Write>(&mut self, params: GoParams, output: &mut W) -> Result<(), CliError> {
        let limits = self.config.limits;
        let depth = params
            .depth
            .unwrap_or_else(|| DEFAULT_GO_DEPTH.min(limits.max_depth));

        let maximizing = self.game.turn() == Color::White;
        let (score, ab_stats) = alpha_beta_with_stats(
            &mut self.game,
            depth,
            Score::NEG_INF,
            Score::INF,
            maximizing,
            &limits,
        )?;
        let (_, best, mm_stats) =
            minimax_with_stats(&mut self.game, depth, Score::NEG_INF, Score::INF, &limits)?;

        writeln!(
            output,
            "info depth {depth} score {score} nodes {}",
            ab_stats.nodes + mm_stats.nodes
        )?;
        match best {
            Some(mv) => writeln!(output, "bestmove {mv}")?,
            None => writeln!(output, "bestmove 0000")?,
        }
        Ok(())
    }

    fn handle_display<W: Write>(&self, output: &mut W) -> Result<(), CliError> {
        write!(output, "{}", self.game.draw())?;
        writeln!(output, "fen: {}", self.game.fen())?;
        writeln!(output, "status: {:?}", self.game.method())?;
        let turn = match self.game.turn() {
            Color::White => "white",
            Color::Black => "black",
        };
        writeln!(output, "turn: {turn}")?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
