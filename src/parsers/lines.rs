use std::io::{self, BufRead, Read};

/// Initial capacity of the line buffer: 1MB
const INITIAL_BUFFER_BYTES: usize = 1024 * 1024;

/// Sequential reader over newline-delimited records with a hard cap on line length.
///
/// Lines are returned as raw bytes without the trailing `\n` or `\r\n`. The
/// internal buffer is reused between calls, so each line borrows the reader.
pub struct JsonlLines<R> {
    reader: R,
    buf: Vec<u8>,
    max_line_bytes: usize,
    line_number: usize,
}

impl<R: BufRead> JsonlLines<R> {
    pub fn new(reader: R, max_line_bytes: usize) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(INITIAL_BUFFER_BYTES.min(max_line_bytes)),
            max_line_bytes,
            line_number: 0,
        }
    }

    /// Number of lines returned so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line, or `None` at end of input.
    ///
    /// A line longer than the configured maximum fails with
    /// [`io::ErrorKind::InvalidData`]; the remainder of the input is not read.
    pub fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.buf.clear();

        // Room for the longest allowed line plus its newline
        let limit = self.max_line_bytes as u64 + 1;
        let read = self.reader.by_ref().take(limit).read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        } else if self.buf.len() as u64 == limit {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "line {} exceeds the maximum length of {} bytes",
                    self.line_number + 1,
                    self.max_line_bytes
                ),
            ));
        }

        self.line_number += 1;
        Ok(Some(self.buf.as_slice()))
    }
}
