//! Convenience wrappers over [`ReverseLineScanner`] with `\n` line endings.
use std::io::{Read, Seek};

use crate::revtail::error::Result;
use crate::revtail::offset::Offset;
use crate::revtail::scanner::{ReverseLineScanner, Tail};

/// Last `n` lines of the file.
pub fn tail<R: Read + Seek>(file: &mut R, n: usize) -> Result<Vec<u8>> {
    let (content, _) = tail_at(file, n, Offset::End)?;
    Ok(content)
}

/// Last `n` lines of the file, one entry per line.
pub fn tail_lines<R: Read + Seek>(file: &mut R, n: usize) -> Result<Vec<Vec<u8>>> {
    let (lines, _) = tail_at_lines(file, n, Offset::End)?;
    Ok(lines)
}

/// Up to `n` lines before `offset`, and the offset to continue from.
pub fn tail_at<R: Read + Seek>(file: &mut R, n: usize, offset: Offset) -> Result<(Vec<u8>, Offset)> {
    Ok(ReverseLineScanner::default().scan(file, n, offset)?.into_parts())
}

pub fn tail_at_lines<R: Read + Seek>(
    file: &mut R,
    n: usize,
    offset: Offset,
) -> Result<(Vec<Vec<u8>>, Offset)> {
    let tail = ReverseLineScanner::default().scan(file, n, offset)?;
    Ok((split_lines(&tail), tail.offset()))
}

/// Like [`tail_at`], failing with [`TailError::Utf8`](crate::TailError::Utf8)
/// if the lines are not valid UTF-8.
pub fn tail_at_string<R: Read + Seek>(
    file: &mut R,
    n: usize,
    offset: Offset,
) -> Result<(String, Offset)> {
    let tail = ReverseLineScanner::default().scan(file, n, offset)?;
    let offset = tail.offset();
    Ok((tail.into_string()?, offset))
}

pub fn tail_at_string_lines<R: Read + Seek>(
    file: &mut R,
    n: usize,
    offset: Offset,
) -> Result<(Vec<String>, Offset)> {
    let (lines, offset) = tail_at_lines(file, n, offset)?;
    let lines = lines
        .into_iter()
        .map(String::from_utf8)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok((lines, offset))
}

fn split_lines(tail: &Tail) -> Vec<Vec<u8>> {
    tail.lines().map(<[u8]>::to_vec).collect()
}
