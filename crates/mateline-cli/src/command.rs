//! Command parsing.

use mateline_core::ChessGame;

use crate::error::CliError;

/// Highest value accepted for the `MaxDepth` option.
pub const MAX_DEPTH_OPTION: u8 = 16;

/// Highest value accepted for the `MaxMateMoves` option.
pub const MAX_MATE_MOVES_OPTION: u8 = 10;

/// Parameters for the `go` command.
#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Search to this depth only.
    pub depth: Option<u8>,
}

/// A session option set through `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Deepest adversarial search, in plies.
    MaxDepth(u8),
    /// Longest mate searched for, in full moves.
    MaxMateMoves(u8),
}

/// A parsed command.
#[derive(Debug)]
pub enum Command {
    /// `uci` -- identify the program and its options.
    Uci,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `ucinewgame` -- back to the starting position.
    NewGame,
    /// `position` -- set up a position with optional moves applied.
    Position(ChessGame),
    /// `mate <n>` -- search for a forced mate in `n` moves.
    Mate(u8),
    /// `go` -- adversarial search.
    Go(GoParams),
    /// `eval` -- static evaluation of the current position.
    Eval,
    /// `d` -- show the board and its status.
    Display,
    /// `tree` -- dump the last mate proof tree.
    Tree,
    /// `setoption name <name> value <value>`.
    SetOption(SessionOption),
    /// `quit` -- leave the session.
    Quit,
    /// Unrecognized command, ignored.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::NewGame),
        "eval" => Ok(Command::Eval),
        "d" => Ok(Command::Display),
        "tree" => Ok(Command::Tree),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(&tokens[1..]),
        "mate" => Ok(Command::Mate(parse_int(tokens.get(1), "mate")?)),
        "go" => parse_go(&tokens[1..]),
        "setoption" => parse_setoption(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 d7d5 ...]`
/// - `position fen <fen-string> [moves e2e4 d7d5 ...]`
fn parse_position(tokens: &[&str]) -> Result<Command, CliError> {
    if tokens.is_empty() {
        return Err(CliError::MalformedPosition);
    }

    let (mut game, rest) = if tokens[0] == "startpos" {
        (ChessGame::new(), &tokens[1..])
    } else if tokens[0] == "fen" {
        // FEN is 6 space-separated fields
        if tokens.len() < 7 {
            return Err(CliError::InvalidFen {
                fen: tokens[1..].join(" "),
            });
        }
        let fen = tokens[1..7].join(" ");
        let game: ChessGame = fen
            .parse()
            .map_err(|_| CliError::InvalidFen { fen: fen.clone() })?;
        (game, &tokens[7..])
    } else {
        return Err(CliError::MalformedPosition);
    };

    if !rest.is_empty() && rest[0] == "moves" {
        for uci in &rest[1..] {
            game.apply_uci(uci).map_err(|_| CliError::InvalidMove {
                uci_move: uci.to_string(),
            })?;
        }
    }

    Ok(Command::Position(game))
}

/// Parse the `go` command arguments. Unknown tokens are skipped.
fn parse_go(tokens: &[&str]) -> Result<Command, CliError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                params.depth = Some(parse_int(tokens.get(i + 1), "depth")?);
                i += 2;
            }
            _ => i += 1,
        }
    }

    Ok(Command::Go(params))
}

/// Parse `setoption name <name> value <value>`.
fn parse_setoption(tokens: &[&str]) -> Result<Command, CliError> {
    let name_at = tokens.iter().position(|&t| t == "name");
    let value_at = tokens.iter().position(|&t| t == "value");

    let (Some(n), Some(v)) = (name_at, value_at) else {
        return Err(CliError::MissingValue {
            param: "setoption".to_string(),
        });
    };
    if v <= n + 1 {
        return Err(CliError::MissingValue {
            param: "name".to_string(),
        });
    }
    let name = tokens[n + 1..v].join(" ");
    let value = tokens.get(v + 1);

    let option = match name.to_ascii_lowercase().as_str() {
        "maxdepth" => SessionOption::MaxDepth(parse_bounded(value, "MaxDepth", MAX_DEPTH_OPTION)?),
        "maxmatemoves" => SessionOption::MaxMateMoves(parse_bounded(
            value,
            "MaxMateMoves",
            MAX_MATE_MOVES_OPTION,
        )?),
        _ => return Err(CliError::UnknownOption { name }),
    };
    Ok(Command::SetOption(option))
}

/// Parse an integer in `1..=max`.
fn parse_bounded(token: Option<&&str>, param: &str, max: u8) -> Result<u8, CliError> {
    let value: u8 = parse_int(token, param)?;
    if value == 0 || value > max {
        return Err(CliError::InvalidValue {
            param: param.to_string(),
            value: value.to_string(),
        });
    }
    Ok(value)
}

/// Parse an integer value from a token.
fn parse_int<T: std::str::FromStr>(token: Option<&&str>, param: &str) -> Result<T, CliError> {
    let value = token.ok_or_else(|| CliError::MissingValue {
        param: param.to_string(),
    })?;
    value.parse().map_err(|_| CliError::InvalidValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use mateline_core::Game;

    use super::*;

    #[test]
    fn parse_uci() {
        assert!(matches!(parse_command("uci").unwrap(), Command::Uci));
    }

    #[test]
    fn parse_isready() {
        assert!(matches!(parse_command("isready").unwrap(), Command::IsReady));
    }

    #[test]
    fn parse_quit() {
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_simple_queries() {
        assert!(matches!(parse_command("eval").unwrap(), Command::Eval));
        assert!(matches!(parse_command("d").unwrap(), Command::Display));
        assert!(matches!(parse_command("tree").unwrap(), Command::Tree));
        assert!(matches!(parse_command("ucinewgame").unwrap(), Command::NewGame));
    }

    #[test]
    fn parse_position_startpos_with_moves() {
        match parse_command("position startpos moves e2e4 e7e5").unwrap() {
            Command::Position(game) => {
                assert_eq!(game.ply_count(), 2);
                assert_eq!(
                    game.fen(),
                    "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2"
                );
            }
            _ => panic!("expected Position"),
        }
    }

    #[test]
    fn parse_position_fen() {
        let cmd = parse_command("position fen 6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        match cmd {
            Command::Position(game) => assert_eq!(game.fen(), "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1"),
            _ => panic!("expected Position"),
        }
    }

    #[test]
    fn parse_position_illegal_move() {
        let err = parse_command("position startpos moves e2e5").unwrap_err();
        assert!(matches!(err, CliError::InvalidMove { uci_move } if uci_move == "e2e5"));
    }

    #[test]
    fn parse_position_missing_keyword() {
        assert!(matches!(
            parse_command("position"),
            Err(CliError::MalformedPosition)
        ));
    }

    #[test]
    fn parse_position_invalid_fen() {
        assert!(matches!(
            parse_command("position fen invalid"),
            Err(CliError::InvalidFen { .. })
        ));
    }

    #[test]
    fn parse_mate() {
        assert!(matches!(parse_command("mate 3").unwrap(), Command::Mate(3)));
        assert!(matches!(
            parse_command("mate"),
            Err(CliError::MissingValue { .. })
        ));
        assert!(matches!(
            parse_command("mate x"),
            Err(CliError::InvalidValue { .. })
        ));
    }

    #[test]
    fn parse_go_depth() {
        match parse_command("go depth 6").unwrap() {
            Command::Go(params) => assert_eq!(params.depth, Some(6)),
            _ => panic!("expected Go"),
        }
    }

    #[test]
    fn parse_go_bare_defaults() {
        match parse_command("go").unwrap() {
            Command::Go(params) => assert!(params.depth.is_none()),
            _ => panic!("expected Go"),
        }
    }

    #[test]
    fn parse_go_invalid_depth_value() {
        assert!(parse_command("go depth abc").is_err());
    }

    #[test]
    fn parse_setoption() {
        assert!(matches!(
            parse_command("setoption name MaxDepth value 5").unwrap(),
            Command::SetOption(SessionOption::MaxDepth(5))
        ));
        assert!(matches!(
            parse_command("setoption name MaxMateMoves value 4").unwrap(),
            Command::SetOption(SessionOption::MaxMateMoves(4))
        ));
    }

    #[test]
    fn parse_setoption_rejects_bad_input() {
        assert!(matches!(
            parse_command("setoption name Hash value 16"),
            Err(CliError::UnknownOption { .. })
        ));
        assert!(matches!(
            parse_command("setoption name MaxDepth value 0"),
            Err(CliError::InvalidValue { .. })
        ));
        assert!(matches!(
            parse_command("setoption name MaxDepth"),
            Err(CliError::MissingValue { .. })
        ));
    }

    #[test]
    fn parse_unknown_command() {
        assert!(matches!(
            parse_command("foobar").unwrap(),
            Command::Unknown(_)
        ));
    }

    #[test]
    fn parse_empty_line() {
        assert!(matches!(parse_command("").unwrap(), Command::Unknown(_)));
    }
}
