use std::io::{Read, Seek};

use log::debug;

use crate::revtail::error::Result;
use crate::revtail::offset::Offset;
use crate::revtail::scanner::{ReverseLineScanner, Tail};

/// Iterator over successive backward scans of `n` lines, most recent page
/// first, until the start of the file is reached.
///
/// Each page resumes exactly where the previous one stopped. After an error
/// the iterator yields nothing more.
pub struct TailPages<'a, R> {
    scanner: ReverseLineScanner,
    file: &'a mut R,
    lines: usize,
    offset: Option<Offset>,
}

impl<'a, R: Read + Seek> TailPages<'a, R> {
    pub fn new(scanner: ReverseLineScanner, file: &'a mut R, lines: usize) -> Self {
        Self {
            scanner,
            file,
            lines,
            offset: Some(Offset::End),
        }
    }

    /// Starts paging from `offset` instead of the end of the file.
    pub fn starting_at(mut self, offset: Offset) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Offset the next page will start from, `None` once paging is over.
    pub fn offset(&self) -> Option<Offset> {
        self.offset
    }
}

impl<R: Read + Seek> Iterator for TailPages<'_, R> {
    type Item = Result<Tail>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.offset.take()?;
        if offset.is_exhausted() {
            return None;
        }

        match self.scanner.scan(self.file, self.lines, offset) {
            Ok(tail) => {
                self.offset = Some(tail.offset());
                Some(Ok(tail))
            }
            Err(e) => {
                debug!("paging stopped at offset {}: {}", offset, e);
                Some(Err(e))
            }
        }
    }
}

impl<R: Read + Seek> std::iter::FusedIterator for TailPages<'_, R> {}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::revtail::line_ending::LineEnding;

    fn collect_pages(content: &str, scanner: ReverseLineScanner, n: usize) -> Vec<String> {
        let mut file = Cursor::new(content.as_bytes().to_vec());
        scanner
            .pages(&mut file, n)
            .map(|page| page.unwrap().into_string().unwrap())
            .collect()
    }

    #[test]
    fn pages_walk_back_to_start() {
        let pages = collect_pages("1\n2\n3\n4\n5", ReverseLineScanner::default(), 2);
        assert_eq!(pages, vec!["4\n5", "2\n3", "1"]);
    }

    #[test]
    fn pages_reassemble_file_without_gaps() {
        let content = "alpha\nbeta\ngamma\ndelta\nepsilon\nzeta\neta";
        for n in 1..=8 {
            for chunk_size in [1, 3, 64] {
                let scanner = ReverseLineScanner::default().with_chunk_size(chunk_size);
                let mut pages = collect_pages(content, scanner, n);
                pages.reverse();
                assert_eq!(pages.join("\n"), content, "n={} chunk={}", n, chunk_size);
            }
        }
    }

    #[test]
    fn crlf_pages_drop_carriage_returns() {
        let scanner = ReverseLineScanner::new(LineEnding::Crlf);
        let pages = collect_pages("a\r\nb\r\nc\r\nd", scanner, 3);
        assert_eq!(pages, vec!["b\nc\nd", "a"]);
    }

    #[test]
    fn empty_file_yields_one_empty_page() {
        let pages = collect_pages("", ReverseLineScanner::default(), 4);
        assert_eq!(pages, vec![String::new()]);
    }

    #[test]
    fn starting_at_exhausted_yields_nothing() {
        let mut file = Cursor::new(b"a\nb".to_vec());
        let mut pages = ReverseLineScanner::default()
            .pages(&mut file, 1)
            .starting_at(Offset::Exhausted);
        assert!(pages.next().is_none());
        assert_eq!(pages.offset(), None);
    }

    #[test]
    fn error_ends_paging() {
        let mut file = Cursor::new(b"a\nb".to_vec());
        let mut pages = ReverseLineScanner::default().pages(&mut file, 0);
        assert!(pages.next().unwrap().is_err());
        assert!(pages.next().is_none());
    }
}
