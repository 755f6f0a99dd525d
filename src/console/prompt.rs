//! Retrying prompts
//!
//! Ask, validate, and ask again until the input is valid or the input stream
//! closes.

use std::io;

use crate::error::ValidationError;
use crate::record::{Age, StudentId, StudentName};
use crate::validate::{self, Field};

use super::{is_undecodable, Console};

/// Outcome of a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt<T> {
    /// Valid input was entered
    Value(T),

    /// The input stream closed before valid input arrived
    Closed,
}

/// Show `message`, read a line and run `check` on it, repeating on rejection
///
/// Each rejection prints the validation error before asking again. Lines that
/// are not valid UTF-8 are rejected the same way. Only console failures are
/// returned as errors.
pub fn prompt<C, T, F>(console: &mut C, message: &str, check: F) -> io::Result<Prompt<T>>
where
    C: Console + ?Sized,
    F: Fn(&str) -> Result<T, ValidationError>,
{
    loop {
        console.write_str(message)?;

        let line = match console.read_line() {
            Ok(Some(line)) => line,
            Ok(None) => {
                console.write_line("Input aborted.")?;
                return Ok(Prompt::Closed);
            }
            Err(e) if is_undecodable(&e) => {
                tracing::debug!("Rejected undecodable input: {}", e);
                console.write_line(&ValidationError::InvalidEncoding.to_string())?;
                continue;
            }
            Err(e) => return Err(e),
        };

        match check(&line) {
            Ok(value) => return Ok(Prompt::Value(value)),
            Err(e) => {
                tracing::debug!("Rejected input {:?}: {}", line, e);
                console.write_line(&e.to_string())?;
            }
        }
    }
}

/// Ask for an age; with `allow_empty` a blank line means "keep current"
pub fn prompt_age<C: Console + ?Sized>(
    console: &mut C,
    message: &str,
    allow_empty: bool,
) -> io::Result<Prompt<Field<Age>>> {
    prompt(console, message, |text| validate::validate_age(text, allow_empty))
}

/// Ask for a name; with `allow_empty` a blank line means "keep current"
pub fn prompt_name<C: Console + ?Sized>(
    console: &mut C,
    message: &str,
    allow_empty: bool,
) -> io::Result<Prompt<Field<StudentName>>> {
    prompt(console, message, |text| validate::validate_name(text, allow_empty))
}

/// Ask for a student id
pub fn prompt_id<C: Console + ?Sized>(console: &mut C) -> io::Result<Prompt<StudentId>> {
    prompt(console, "Enter ID: ", validate::validate_id)
}
