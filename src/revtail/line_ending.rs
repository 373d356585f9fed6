use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::revtail::constants::{LF, NUL};

/// Line terminator convention used while scanning backward.
///
/// The scanner never inspects the host platform on its own; callers that
/// want the host convention ask for [`LineEnding::native`] explicitly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`; the carriage return is skipped together with the `\n`.
    Crlf,
    /// `\0`, for zero-terminated records.
    Nul,
}

impl LineEnding {
    pub fn native() -> Self {
        if cfg!(windows) {
            LineEnding::Crlf
        } else {
            LineEnding::Lf
        }
    }

    /// Byte that separates lines, both in the file and in scan results.
    pub fn separator(self) -> u8 {
        match self {
            LineEnding::Lf | LineEnding::Crlf => LF,
            LineEnding::Nul => NUL,
        }
    }

    /// Bytes to step back past a line boundary once the separator is found.
    pub fn boundary_len(self) -> u64 {
        match self {
            LineEnding::Crlf => 2,
            LineEnding::Lf | LineEnding::Nul => 1,
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineEnding::Lf => write!(f, "lf"),
            LineEnding::Crlf => write!(f, "crlf"),
            LineEnding::Nul => write!(f, "nul"),
        }
    }
}

impl FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lf" | "unix" => Ok(LineEnding::Lf),
            "crlf" | "windows" => Ok(LineEnding::Crlf),
            "nul" | "zero" => Ok(LineEnding::Nul),
            "native" => Ok(LineEnding::native()),
            other => Err(format!("unknown line ending '{}'", other)),
        }
    }
}
