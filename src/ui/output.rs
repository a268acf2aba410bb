//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Status lines respect the quiet flag. Requested data (`show`, `keys`)
//! is always written, since suppressing it would make the command useless.

use std::fmt::Display;
use std::io::{self, Write};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a status message (respects quiet mode).
pub fn status(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error and its cause chain (chain only in debug mode).
pub fn error(err: &anyhow::Error, verbosity: Verbosity) {
    eprintln!("error: {}", err);
    if verbosity == Verbosity::Debug {
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {}", cause);
        }
    }
}

/// Write raw bytes to stdout, optionally followed by a newline.
pub fn raw(bytes: &[u8], newline: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(bytes)?;
    if newline {
        out.write_all(b"\n")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }
}
