//! pl0c-drv - Tokenizer Driver
//!
//! Loads a `.pl0` file, runs the lexer over it and prints the token listing.
//!
//! ```text
//! 1:	CONST, const
//! 1:	IDENT, max
//! 1:	EQUAL, =
//! ...
//! done
//! ```
//!
//! Each line is `<line>:\t<KIND>, <text>`. A successful run ends with
//! `done`. The first error aborts the run with a single diagnostic.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod source;

use std::io::{self, BufWriter, Write};

use pl0c_lex::{Lexer, TokenKind};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use config::{Cli, Config, StopAt, USAGE};
pub use error::{DriverError, Result};
pub use source::{check_extension, read_source};

/// Marker printed after the last token of a successful listing.
pub const DONE: &str = "done";

/// Writes the token listing for `source` to `out`.
///
/// With [`StopAt::FirstDot`] the listing ends at the first `DOT` token,
/// which is either a literal `.` or the end of input. With
/// [`StopAt::EndOfInput`] only the end of input ends it. The stopping
/// token is printed too. Returns the number of tokens written.
///
/// Nothing after the failing token is written if the lexer errors; the
/// caller decides how to report it.
pub fn list_tokens<W: Write>(source: &str, out: &mut W, stop_at: StopAt) -> Result<usize> {
    let mut lexer = Lexer::new(source);
    let mut count = 0;

    loop {
        let token = lexer.next_token()?;
        writeln!(out, "{}:\t{}", token.line, token)?;
        count += 1;

        let stop = match stop_at {
            StopAt::FirstDot => token.kind == TokenKind::Dot,
            StopAt::EndOfInput => token.is_end_of_input(),
        };
        if stop {
            break;
        }
    }

    writeln!(out, "{DONE}")?;
    Ok(count)
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise `verbose` selects `debug`,
/// and the default is `warn` so a normal run prints only the listing.
pub fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))?;

    Ok(())
}

/// Tokenizes `config.input` and prints the listing on stdout.
pub fn run(config: &Config) -> Result<usize> {
    info!(input = %config.input.display(), "tokenizing");
    let source = read_source(&config.input)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = list_tokens(&source, &mut out, config.stop_at);

    // Tokens listed before an error still reach stdout.
    out.flush()?;
    let count = result?;

    debug!(tokens = count, "listing complete");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pl0c_lex::LexError;

    fn listing(source: &str, stop_at: StopAt) -> (Result<usize>, String) {
        let mut out = Vec::new();
        let result = list_tokens(source, &mut out, stop_at);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_list_const_var() {
        let (result, text) = listing("const x = 1;\nvar y;", StopAt::FirstDot);
        assert_eq!(result.unwrap(), 9);
        assert_eq!(
            text,
            "1:\tCONST, const\n\
             1:\tIDENT, x\n\
             1:\tEQUAL, =\n\
             1:\tNUMBER, 1\n\
             1:\tSEMICOLON, ;\n\
             2:\tVAR, var\n\
             2:\tIDENT, y\n\
             2:\tSEMICOLON, ;\n\
             2:\tDOT, \n\
             done\n"
        );
    }

    #[test]
    fn test_list_stops_at_first_dot() {
        let (result, text) = listing("begin end. var x", StopAt::FirstDot);
        assert_eq!(result.unwrap(), 3);
        assert!(text.ends_with("1:\tDOT, .\ndone\n"));
        assert!(!text.contains("VAR"));
    }

    #[test]
    fn test_list_all_continues_past_dot() {
        let (result, text) = listing("begin end. var x", StopAt::EndOfInput);
        assert_eq!(result.unwrap(), 6);
        assert!(text.contains("1:\tDOT, .\n1:\tVAR, var\n"));
        assert!(text.ends_with("1:\tDOT, \ndone\n"));
    }

    #[test]
    fn test_list_empty_source() {
        let (result, text) = listing("", StopAt::FirstDot);
        assert_eq!(result.unwrap(), 1);
        assert_eq!(text, "1:\tDOT, \ndone\n");
    }

    #[test]
    fn test_list_keeps_tokens_before_error() {
        let (result, text) = listing("var x;\n!", StopAt::FirstDot);
        assert!(matches!(
            result,
            Err(DriverError::Lex(LexError::UnknownToken { line: 2, found: '!' }))
        ));
        assert_eq!(text, "1:\tVAR, var\n1:\tIDENT, x\n1:\tSEMICOLON, ;\n");
    }

    #[test]
    fn test_list_unterminated_comment() {
        let (result, text) = listing("{ never\nclosed", StopAt::FirstDot);
        let err = result.unwrap_err();
        assert_eq!(err.diagnostic(), "pl0c: error: 2: Unterminated comment");
        assert!(text.is_empty());
    }

    #[test]
    fn test_run_rejects_extension() {
        let err = run(&Config::new("prog.txt")).unwrap_err();
        assert!(matches!(err, DriverError::FileExtension(_)));
    }
}
