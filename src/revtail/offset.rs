use std::fmt;
use std::str::FromStr;

use crate::revtail::error::{Result, TailError};

/// End-relative cursor into a file.
///
/// A scan starts at an `Offset` and hands back the `Offset` to resume from,
/// so that paging backward through a file never repeats or skips a line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Offset {
    /// Start from the last byte of the file.
    #[default]
    End,
    /// The next byte to examine sits `k` bytes before end of file.
    /// `Before(0)` and `Before(1)` both mean the last byte.
    Before(u64),
    /// Start of file reached; nothing earlier is left to read.
    Exhausted,
}

impl Offset {
    /// Interprets a raw end-relative offset: `0` means end of file and `-k`
    /// means `k` bytes before it.
    pub fn from_raw(raw: i64) -> Result<Self> {
        match raw {
            0 => Ok(Offset::End),
            r if r < 0 => Ok(Offset::Before(r.unsigned_abs())),
            r => Err(TailError::InvalidOffset(r)),
        }
    }

    /// Raw end-relative value. `End` and `Exhausted` both map to `0`.
    pub fn to_raw(self) -> i64 {
        match self {
            Offset::End | Offset::Exhausted => 0,
            Offset::Before(k) => i64::try_from(k).map_or(i64::MIN, |k| -k),
        }
    }

    pub fn is_exhausted(self) -> bool {
        matches!(self, Offset::Exhausted)
    }

    /// Absolute index of the first byte a scan examines in a file of `size`
    /// bytes, or `None` when that position lies before the start.
    pub(crate) fn start_index(self, size: u64) -> Option<u64> {
        match self {
            Offset::End => size.checked_sub(1),
            Offset::Before(k) => size.checked_sub(k.max(1)),
            Offset::Exhausted => None,
        }
    }

    pub(crate) fn from_index(index: Option<u64>, size: u64) -> Self {
        match index {
            Some(i) => Offset::Before(size - i),
            None => Offset::Exhausted,
        }
    }
}

impl TryFrom<i64> for Offset {
    type Error = TailError;

    fn try_from(raw: i64) -> Result<Self> {
        Offset::from_raw(raw)
    }
}

/// Token printed for, and accepted as, [`Offset::Exhausted`].
pub const EXHAUSTED: &str = "exhausted";

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::Exhausted => write!(f, "{}", EXHAUSTED),
            _ => write!(f, "{}", self.to_raw()),
        }
    }
}

/// Parses what `Display` prints: a raw end-relative value or `exhausted`.
impl FromStr for Offset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(EXHAUSTED) {
            return Ok(Offset::Exhausted);
        }
        let raw = s
            .parse::<i64>()
            .map_err(|e| format!("invalid offset '{}': {}", s, e))?;
        Offset::from_raw(raw).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_zero_is_end() {
        assert_eq!(Offset::from_raw(0).unwrap(), Offset::End);
        assert_eq!(Offset::from_raw(-7).unwrap(), Offset::Before(7));
    }

    #[test]
    fn positive_raw_is_rejected() {
        assert!(matches!(
            Offset::from_raw(3),
            Err(TailError::InvalidOffset(3))
        ));
    }

    #[test]
    fn raw_values_stay_end_relative() {
        assert_eq!(Offset::Before(5).to_raw(), -5);
        assert_eq!(Offset::Exhausted.to_raw(), 0);
        assert_eq!(Offset::End.to_raw(), 0);
        assert_eq!(Offset::Before(u64::MAX).to_raw(), i64::MIN);
    }

    #[test]
    fn display_parses_back() {
        for offset in [Offset::End, Offset::Before(42), Offset::Exhausted] {
            assert_eq!(offset.to_string().parse::<Offset>(), Ok(offset));
        }
        assert_eq!(Offset::Exhausted.to_string(), "exhausted");
        assert_eq!("0".parse::<Offset>(), Ok(Offset::End));
        assert!("5".parse::<Offset>().is_err());
        assert!("soon".parse::<Offset>().is_err());
    }

    #[test]
    fn start_index_clamps_to_file() {
        assert_eq!(Offset::End.start_index(5), Some(4));
        assert_eq!(Offset::Before(0).start_index(5), Some(4));
        assert_eq!(Offset::Before(5).start_index(5), Some(0));
        assert_eq!(Offset::Before(6).start_index(5), None);
        assert_eq!(Offset::End.start_index(0), None);
        assert_eq!(Offset::Exhausted.start_index(5), None);
    }
}
