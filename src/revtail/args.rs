use std::path::PathBuf;

use clap::Parser;

use crate::revtail::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_LINES};
use crate::revtail::line_ending::LineEnding;
use crate::revtail::offset::Offset;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const ABOUT: &str = "Print the last lines of files, reading them backward from the end.";
const USAGE: &str = "\n  revtail [OPTIONS] <FILENAME>...\n";
const EXAMPLES: &str = "\n\x1b[1;4mEXAMPLES:\x1b[0m\n  revtail -n 20 file.txt\n  revtail -n 20 --show-offset app.log\n  revtail -n 20 --offset -5120 app.log\n  revtail -n 20 --offset exhausted app.log\n  revtail --all -n 100 --line-ending crlf build.log\n";

#[derive(Parser, Debug)]
#[command(version = VERSION, about = ABOUT,
    override_usage = format!("{}{}", USAGE, EXAMPLES))]
pub struct Args {
    #[arg(required = true)]
    pub filename: Vec<PathBuf>,

    /// Output the last NUM lines
    #[arg(short = 'n', long = "lines", default_value_t = DEFAULT_LINES,
        value_parser = parse_line_count)]
    pub num_lines: usize,

    /// Resume from this end-relative byte offset (0 or negative), or from
    /// `exhausted`, exactly as printed by --show-offset
    #[arg(short, long, default_value_t = Offset::End, allow_negative_numbers = true)]
    pub offset: Offset,

    /// Line ending convention [default: the host's]
    #[arg(short = 'e', long, value_enum, conflicts_with = "zero_terminated")]
    pub line_ending: Option<LineEnding>,

    /// The line delimiter is NUL, not newline
    #[arg(short = 'z', long, default_value_t = false)]
    pub zero_terminated: bool,

    /// Print the offset to resume from on standard error after each file
    #[arg(short, long, default_value_t = false)]
    pub show_offset: bool,

    /// Keep reading backward, NUM lines per page, until the start of the file
    #[arg(short, long, default_value_t = false)]
    pub all: bool,

    /// Bytes read per backward seek
    #[arg(short, long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Always output headers giving file names
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    /// Do not output headers giving file names
    #[arg(short = 'q', long = "quiet", alias = "silent", default_value_t = false)]
    pub quiet: bool,
}

fn parse_line_count(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("number of lines must be greater than zero".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid number of lines '{}': {}", s, e)),
    }
}

impl Args {
    pub fn line_ending(&self) -> LineEnding {
        if self.zero_terminated {
            LineEnding::Nul
        } else {
            self.line_ending.unwrap_or_else(LineEnding::native)
        }
    }

    pub fn show_headers(&self) -> bool {
        (self.filename.len() > 1 || self.verbose) && !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["revtail", "app.log"]).unwrap();
        assert_eq!(args.num_lines, DEFAULT_LINES);
        assert_eq!(args.offset, Offset::End);
        assert_eq!(args.line_ending(), LineEnding::native());
        assert!(!args.show_headers());
    }

    #[test]
    fn negative_offset_and_crlf() {
        let args =
            Args::try_parse_from(["revtail", "-n", "3", "-o", "-42", "-e", "crlf", "a", "b"])
                .unwrap();
        assert_eq!(args.num_lines, 3);
        assert_eq!(args.offset, Offset::Before(42));
        assert_eq!(args.line_ending(), LineEnding::Crlf);
        assert!(args.show_headers());
    }

    #[test]
    fn reported_exhausted_offset_is_accepted_back() {
        let reported = Offset::Exhausted.to_string();
        let args = Args::try_parse_from(["revtail", "-o", reported.as_str(), "a"]).unwrap();
        assert_eq!(args.offset, Offset::Exhausted);
    }

    #[test]
    fn positive_offset_rejected_while_parsing() {
        assert!(Args::try_parse_from(["revtail", "-o", "12", "a"]).is_err());
    }

    #[test]
    fn zero_lines_rejected() {
        assert!(Args::try_parse_from(["revtail", "-n", "0", "a"]).is_err());
    }

    #[test]
    fn zero_terminated_selects_nul() {
        let args = Args::try_parse_from(["revtail", "-z", "-q", "a", "b"]).unwrap();
        assert_eq!(args.line_ending(), LineEnding::Nul);
        assert!(!args.show_headers());
    }
}
