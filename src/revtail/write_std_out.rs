use std::io::Write;

use crate::revtail::scanner::Tail;

/// Writes the lines of `tail` to `out` as UTF-8, replacing invalid
/// sequences, terminated by the tail's separator. An empty tail writes
/// nothing.
pub fn write_out<W: Write>(out: &mut W, tail: &Tail) -> std::io::Result<()> {
    if tail.is_empty() {
        return Ok(());
    }

    out.write_all(tail.to_string_lossy().as_bytes())?;
    out.write_all(&[tail.separator()])?;
    out.flush()
}

/// Writes the `==> name <==` header shown when several files are tailed.
pub fn write_header<W: Write>(out: &mut W, name: &str, first: bool) -> std::io::Result<()> {
    let pre_new_line: &str = if first { "" } else { "\n" };
    writeln!(out, "{}==> {} <==", pre_new_line, name)
}
