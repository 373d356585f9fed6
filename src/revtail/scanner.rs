use std::borrow::Cow;
use std::io::{Read, Seek, SeekFrom};

use log::{debug, trace};
use memchr::memrchr;

use crate::revtail::constants::DEFAULT_CHUNK_SIZE;
use crate::revtail::error::{Result, TailError};
use crate::revtail::line_ending::LineEnding;
use crate::revtail::offset::Offset;
use crate::revtail::pages::TailPages;

/// Reads lines backward from an end-relative [`Offset`].
///
/// The scanner is plain configuration; it holds no state between calls.
/// Each [`scan`](Self::scan) hands back the offset to resume from, so a
/// caller can keep paging toward the start of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReverseLineScanner {
    line_ending: LineEnding,
    chunk_size: usize,
}

impl Default for ReverseLineScanner {
    fn default() -> Self {
        Self::new(LineEnding::default())
    }
}

impl ReverseLineScanner {
    pub fn new(line_ending: LineEnding) -> Self {
        Self {
            line_ending,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Number of bytes fetched per backward read. A chunk size of 1 reads the
    /// file one byte per seek; results are identical for every size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns up to `n` lines that end right before `offset`, in file order,
    /// together with the offset that resumes in front of them.
    ///
    /// Fewer than `n` lines come back when the start of the file is reached
    /// first; the returned offset is then [`Offset::Exhausted`]. The handle's
    /// position is left unspecified.
    pub fn scan<R: Read + Seek>(&self, file: &mut R, n: usize, offset: Offset) -> Result<Tail> {
        if n == 0 {
            return Err(TailError::InvalidLineCount(n));
        }
        let separator = self.line_ending.separator();
        if offset.is_exhausted() {
            return Ok(Tail {
                bytes: Vec::new(),
                offset,
                separator,
            });
        }

        let size = file.seek(SeekFrom::End(0)).map_err(TailError::SizeQuery)?;
        let mut cursor = offset.start_index(size);

        debug!(
            "scanning {} line(s) from offset {} (size {}, {})",
            n, offset, size, self.line_ending
        );

        let mut chunks = BackwardChunks::new(file, self.chunk_size);
        // Filled back to front, reversed once at the end.
        let mut content: Vec<u8> = Vec::with_capacity(n);
        let mut remaining = n;

        while remaining > 0 {
            while let Some(pos) = cursor {
                let (start, chunk) = chunks.ending_at(pos)?;
                match memrchr(separator, chunk) {
                    Some(idx) => {
                        content.extend(chunk[idx + 1..].iter().rev());
                        cursor = Some(start + idx as u64);
                        break;
                    }
                    None => {
                        content.extend(chunk.iter().rev());
                        cursor = start.checked_sub(1);
                    }
                }
            }

            // Step over the boundary just found; None stays None.
            cursor = cursor.and_then(|pos| pos.checked_sub(self.line_ending.boundary_len()));
            remaining -= 1;

            if cursor.is_none() {
                break;
            }
            if remaining > 0 {
                content.push(separator);
            }
        }

        content.reverse();
        let offset = Offset::from_index(cursor, size);

        debug!(
            "scan returned {} byte(s), resume offset {}",
            content.len(),
            offset
        );

        Ok(Tail {
            bytes: content,
            offset,
            separator,
        })
    }

    /// Successive scans of `n` lines each, from the end of the file back to
    /// its start.
    pub fn pages<'a, R: Read + Seek>(&self, file: &'a mut R, n: usize) -> TailPages<'a, R> {
        TailPages::new(*self, file, n)
    }
}

/// Window over the file that only ever moves toward its start.
struct BackwardChunks<'a, R> {
    file: &'a mut R,
    chunk_size: usize,
    buf: Vec<u8>,
    start: u64,
}

impl<'a, R: Read + Seek> BackwardChunks<'a, R> {
    fn new(file: &'a mut R, chunk_size: usize) -> Self {
        Self {
            file,
            chunk_size,
            buf: Vec::new(),
            start: 0,
        }
    }

    /// Bytes from the start of the buffered chunk up to and including `pos`,
    /// along with the absolute index of the first of them.
    fn ending_at(&mut self, pos: u64) -> Result<(u64, &[u8])> {
        let end = self.start + self.buf.len() as u64;
        if pos < self.start || pos >= end {
            self.fill(pos)?;
        }
        let len = (pos - self.start) as usize + 1;
        Ok((self.start, &self.buf[..len]))
    }

    fn fill(&mut self, pos: u64) -> Result<()> {
        let start = (pos + 1).saturating_sub(self.chunk_size as u64);
        let len = (pos + 1 - start) as usize;

        self.file
            .seek(SeekFrom::Start(start))
            .map_err(|source| TailError::Seek {
                position: start,
                source,
            })?;

        self.buf.resize(len, 0);
        self.file
            .read_exact(&mut self.buf)
            .map_err(|source| TailError::Read {
                position: start,
                len,
                source,
            })?;
        self.start = start;

        trace!("read {} byte(s) at {}", len, start);
        Ok(())
    }
}

/// Lines read by one scan, and where to resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tail {
    bytes: Vec<u8>,
    offset: Offset,
    separator: u8,
}

impl Tail {
    /// Lines joined by the separator, without a trailing one.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn separator(&self) -> u8 {
        self.separator
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.offset.is_exhausted()
    }

    /// Splits the bytes on the separator. An empty tail has no lines.
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        let separator = self.separator;
        (!self.bytes.is_empty())
            .then(|| self.bytes.split(move |b| *b == separator))
            .into_iter()
            .flatten()
    }

    pub fn into_parts(self) -> (Vec<u8>, Offset) {
        (self.bytes, self.offset)
    }

    pub fn into_string(self) -> Result<String> {
        Ok(String::from_utf8(self.bytes)?)
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}
