//! Command strings for the Run dialog.
//!
//! Statements are separated by newlines. Each one is wrapped in
//! parentheses, they are joined with ` ; ` and the whole thing is
//! prefixed with the runner program:
//!
//! ```text
//! "A\nB\nC"  ->  "powershell (A) ; (B) ; (C)"
//! ```
//!
//! Nothing here runs anything; the result is typed by the caller.

use core::fmt::Write;
use heapless::String;

use crate::config;
use crate::error::Error;

/// Statement separator in the generated command.
pub const SEPARATOR: &str = " ; ";

/// Build `"<runner> (stmt1) ; (stmt2) ..."` from newline-separated `scripts`.
///
/// A trailing `\r` on a line is dropped and blank lines are skipped.
pub fn wrap_statements<const N: usize>(runner: &str, scripts: &str) -> Result<String<N>, Error> {
    let mut out: String<N> = String::new();
    out.push_str(runner).map_err(|_| Error::BufferOverflow)?;
    out.push(' ').map_err(|_| Error::BufferOverflow)?;

    let mut count = 0usize;
    for statement in scripts
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
    {
        let sep = if count == 0 { "" } else { SEPARATOR };
        write!(out, "{}({})", sep, statement).map_err(|_| Error::BufferOverflow)?;
        count += 1;
    }

    if count == 0 {
        return Err(Error::EmptyCommand);
    }
    Ok(out)
}

/// [`wrap_statements`] with the configured PowerShell runner.
pub fn powershell_command<const N: usize>(scripts: &str) -> Result<String<N>, Error> {
    wrap_statements(config::SHELL_RUNNER, scripts)
}
