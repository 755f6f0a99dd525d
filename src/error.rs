//! Error types for studentdb
//!
//! Provides a unified error type for store and console operations, plus the
//! validation error raised while parsing user input.

use thiserror::Error;

/// Result type alias using StudentDbError
pub type Result<T> = std::result::Result<T, StudentDbError>;

/// Unified error type for studentdb operations
#[derive(Debug, Error)]
pub enum StudentDbError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Corrupt record at offset {offset}: {reason}")]
    CorruptRecord { offset: u64, reason: String },

    #[error("ID limit reached")]
    IdSpaceExhausted,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

/// The input field a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Age,
    Name,
    Id,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Age => f.write_str("Age"),
            FieldKind::Name => f.write_str("Name"),
            FieldKind::Id => f.write_str("ID"),
        }
    }
}

/// Rejected field input
///
/// The `Display` text is what the user sees before being asked again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty.")]
    Empty { field: FieldKind },

    #[error("Please enter a whole number.")]
    NotANumber,

    #[error("Please enter a number between {min} and {max}.")]
    OutOfRange { min: u32, max: u32 },

    #[error("Please enter a positive integer.")]
    InvalidId,

    #[error("Name must be at most {max} characters.")]
    NameTooLong { max: usize },

    #[error("Name cannot contain NUL characters.")]
    InvalidCharacter,

    #[error("Input is not valid UTF-8 text.")]
    InvalidEncoding,
}
