//! Student record definitions
//!
//! Each field type can only be built through a checked constructor, so a
//! `Student` in memory always satisfies the store invariants.

use std::fmt;
use std::num::NonZeroU32;

use crate::error::{FieldKind, ValidationError};

/// Youngest accepted age
pub const AGE_MIN: u8 = 5;

/// Oldest accepted age
pub const AGE_MAX: u8 = 75;

/// Maximum name length in bytes (the stored field adds one terminator byte)
pub const NAME_MAX_LEN: usize = 32;

// =============================================================================
// StudentId
// =============================================================================

/// Unique, never-zero student identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(NonZeroU32);

impl StudentId {
    /// The id given to the first student ever created
    pub const FIRST: StudentId = StudentId(NonZeroU32::MIN);

    /// Largest assignable id
    pub const MAX: StudentId = StudentId(NonZeroU32::MAX);

    /// Wrap a raw id, rejecting zero
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// Raw numeric value
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The id following this one, or `None` once the id space is used up
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Age
// =============================================================================

/// Student age, always within `AGE_MIN..=AGE_MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(u8);

impl Age {
    /// Range-checked constructor
    pub fn new(years: u8) -> Option<Self> {
        (AGE_MIN..=AGE_MAX).contains(&years).then_some(Self(years))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pass the formatter through so width/alignment flags apply
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// StudentName
// =============================================================================

/// Trimmed, non-empty name of at most `NAME_MAX_LEN` bytes
///
/// Over-long input is rejected rather than truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentName(String);

impl StudentName {
    /// Trim surrounding whitespace and check length and content
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: FieldKind::Name,
            });
        }
        if trimmed.len() > NAME_MAX_LEN {
            return Err(ValidationError::NameTooLong { max: NAME_MAX_LEN });
        }
        // A NUL would end the name early once stored
        if trimmed.contains('\0') {
            return Err(ValidationError::InvalidCharacter);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for StudentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

// =============================================================================
// Student
// =============================================================================

/// A single student record
///
/// `age` and `name` are freely replaceable; the id is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: StudentId,
    pub age: Age,
    pub name: StudentName,
}

impl Student {
    pub fn new(id: StudentId, age: Age, name: StudentName) -> Self {
        Self { id, age, name }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }
}
