//! Console Module
//!
//! The two capabilities the commands need from the outside world: read one
//! line, write some text. Commands are generic over `Console`, so the binary
//! runs them on stdin/stdout and tests run them on in-memory buffers.

mod prompt;
mod terminal;

use std::io;

pub use prompt::{prompt, prompt_age, prompt_id, prompt_name, Prompt};
pub use terminal::Terminal;

/// True for the error `Console::read_line` returns on a non-UTF-8 line
///
/// The line has already been skipped, so reading can continue.
pub fn is_undecodable(error: &io::Error) -> bool {
    error.kind() == io::ErrorKind::InvalidData
}

/// Line-oriented text input and output
pub trait Console {
    /// Read one line without its line ending
    ///
    /// Returns `Ok(None)` once the input stream is closed. A line that is not
    /// valid UTF-8 is consumed and reported as `ErrorKind::InvalidData`; see
    /// `is_undecodable`.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write `text` as-is and make it visible immediately
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Write `text` followed by a newline
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write_str(text)?;
        self.write_str("\n")
    }
}
