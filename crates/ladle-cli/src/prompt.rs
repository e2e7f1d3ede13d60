//! Terminal prompt helpers
//!
//! All operation input flows through these so the command modules can be
//! driven by a `Cursor` in tests.

use std::io::{self, BufRead, Write};

/// Print a prompt and read one trimmed line. Returns `None` at EOF.
pub fn read_line<R: BufRead>(input: &mut R, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Like [`read_line`], but EOF mid-operation is an error so the operation
/// aborts instead of looping on empty input.
pub fn read_required_line<R: BufRead>(input: &mut R, label: &str) -> io::Result<String> {
    read_line(input, label)?.ok_or_else(|| {
        io::Error::new(io::ErrorKind::UnexpectedEof, "input ended mid-operation")
    })
}
