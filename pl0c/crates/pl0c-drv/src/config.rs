//! Command-line configuration for the pl0c driver.

use std::path::PathBuf;

use clap::Parser;

/// Usage line printed when the arguments are wrong.
pub const USAGE: &str = "Usage: pl0c <file>";

/// pl0c - PL/0 tokenizer
///
/// Reads a `.pl0` source file and prints one line per token.
#[derive(Parser, Debug)]
#[command(name = "pl0c")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize a PL/0 source file", long_about = None)]
pub struct Cli {
    /// Source file, must end in `.pl0`
    pub file: PathBuf,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, env = "PL0C_VERBOSE")]
    pub verbose: bool,

    /// Disable color in log output
    #[arg(long, env = "PL0C_NO_COLOR")]
    pub no_color: bool,

    /// List tokens past a `.` up to the end of the file
    #[arg(long)]
    pub all: bool,
}

/// Where the token listing stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopAt {
    /// At the first `DOT` token, whether a literal `.` or the end of input.
    #[default]
    FirstDot,
    /// Only at the end of input.
    EndOfInput,
}

/// Driver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source file to tokenize.
    pub input: PathBuf,
    /// Debug-level logging.
    pub verbose: bool,
    /// Plain (non-ANSI) log output.
    pub no_color: bool,
    /// Where the listing stops.
    pub stop_at: StopAt,
}

impl Config {
    /// Configuration with defaults for `input`.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            verbose: false,
            no_color: false,
            stop_at: StopAt::default(),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.file,
            verbose: cli.verbose,
            no_color: cli.no_color,
            stop_at: if cli.all {
                StopAt::EndOfInput
            } else {
                StopAt::FirstDot
            },
        }
    }
}
