//! Terminal
//!
//! `Console` over any buffered reader and writer pair.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use super::Console;

/// Console backed by a reader/writer pair
pub struct Terminal<R, W> {
    /// Line source (buffered so whole lines can be read)
    reader: R,

    /// Output sink, flushed after every write
    writer: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Take back the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// Console on the process's standard input and output
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }

        if raw.ends_with(b"\n") {
            raw.pop();
            if raw.ends_with(b"\r") {
                raw.pop();
            }
        }

        // The whole line is consumed either way, so the caller can ask again
        String::from_utf8(raw)
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        // Prompts have no newline and must show before the next read blocks
        self.writer.flush()
    }
}
