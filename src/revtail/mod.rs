mod adapters;
mod args;
mod constants;
mod error;
mod line_ending;
mod offset;
mod pages;
mod scanner;
mod write_std_out;

// Re-export modules
pub use adapters::{tail, tail_at, tail_at_lines, tail_at_string, tail_at_string_lines, tail_lines};
pub use args::Args;
pub use constants::{DEFAULT_CHUNK_SIZE, DEFAULT_LINES};
pub use error::{Result, TailError};
pub use line_ending::LineEnding;
pub use offset::Offset;
pub use pages::TailPages;
pub use scanner::{ReverseLineScanner, Tail};
pub use write_std_out::{write_header, write_out};
