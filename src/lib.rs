//! Read the last lines of a file by scanning backward from its end.
//!
//! ```no_run
//! use std::fs::File;
//!
//! use revtail::{LineEnding, Offset, ReverseLineScanner};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut file = File::open("app.log")?;
//! let scanner = ReverseLineScanner::new(LineEnding::Lf);
//!
//! let latest = scanner.scan(&mut file, 10, Offset::End)?;
//! // Ten lines further back, right before the ones already read.
//! let earlier = scanner.scan(&mut file, 10, latest.offset())?;
//! # let _ = earlier;
//! # Ok(())
//! # }
//! ```

mod revtail;

pub use revtail::*;
