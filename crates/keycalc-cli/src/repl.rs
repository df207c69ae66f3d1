//! Line-oriented interactive loop
//!
//! Each input line is a key sequence. After every line the display (or
//! `Error`) is written on its own line.

use crate::error::CliResult;
use crate::output::{display_line, render_warnings};
use crate::session::Session;
use keycalc::parse_keys;
use std::io::{BufRead, Write};
use tracing::warn;

const QUIT_COMMANDS: [&str; 3] = ["q", "quit", "exit"];

/// Runs the loop until end of input or a quit command
///
/// Lines with unknown characters are skipped with a warning; nothing
/// from that line is pressed.
pub fn run<R, W, E>(
    session: &mut Session,
    input: R,
    out: &mut W,
    err: &mut E,
    quiet: bool,
) -> CliResult<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    for line in input.lines() {
        let line = line?;
        let keys = line.trim();
        if QUIT_COMMANDS.contains(&keys) {
            break;
        }
        if keys.is_empty() {
            continue;
        }

        let parsed = match parse_keys(keys) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "line skipped");
                if !quiet {
                    writeln!(err, "warning: {e}, line ignored")?;
                }
                continue;
            }
        };

        let report = session.press_all(parsed);
        if !quiet {
            for warning in render_warnings(&report, session.engine()) {
                writeln!(err, "{warning}")?;
            }
        }
        writeln!(out, "{}", display_line(&report, session.engine()))?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::CliConfig;

    fn repl(input: &str) -> (String, String) {
        let mut session = Session::open(&CliConfig::new()).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        run(&mut session, input.as_bytes(), &mut out, &mut err, false).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_lines_share_state() {
        let (out, _) = repl("2+\n3*\n4=\n");
        assert_eq!(out, "2\n5\n20\n");
    }

    #[test]
    fn test_quit_stops_reading() {
        let (out, _) = repl("1+1=\nquit\n5\n");
        assert_eq!(out, "2\n");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let (out, _) = repl("\n   \n7\n");
        assert_eq!(out, "7\n");
    }

    #[test]
    fn test_error_line() {
        let (out, err) = repl("8/0=\n");
        assert_eq!(out, "Error\n");
        assert!(err.contains("Cannot divide by zero"));
    }

    #[test]
    fn test_unknown_key_line_ignored() {
        let (out, err) = repl("12\n3(4\n+1=\n");
        assert_eq!(out, "12\n13\n");
        assert!(err.contains("Invalid key: '('"));
    }
}
