//! Line-oriented command protocol for mateline.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, GoParams, SessionOption, parse_command};
pub use error::CliError;
pub use session::{Session, SessionConfig};
