//! Field Validators
//!
//! Pure functions turning one line of user text into a typed field value.
//!
//! ## Responsibilities
//! - Whole-string unsigned integer parsing with range checks
//! - Age, name and id rules, including the optional "press ENTER to keep"
//!   form used when editing
//!
//! Validators never print or retry; the prompt loop in `console` does that.

use crate::error::{FieldKind, ValidationError};
use crate::record::{Age, StudentId, StudentName, AGE_MAX, AGE_MIN};

/// Result of validating a field that may be left blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// The user entered a valid value
    Provided(T),

    /// The user entered nothing and the field is optional
    Skipped,
}

impl<T> Field<T> {
    /// `Some(value)` when provided
    pub fn provided(self) -> Option<T> {
        match self {
            Field::Provided(value) => Some(value),
            Field::Skipped => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Field::Skipped)
    }

    /// Treat a skipped field as an empty required one
    pub fn require(self, field: FieldKind) -> Result<T, ValidationError> {
        self.provided().ok_or(ValidationError::Empty { field })
    }
}

/// Parse `text` as an unsigned integer within `min..=max`
///
/// The whole string must be ASCII digits: no sign, no surrounding
/// whitespace, no trailing characters.
pub fn parse_bounded_integer(text: &str, min: u32, max: u32) -> Result<u32, ValidationError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotANumber);
    }

    // Only digits remain, so the only parse failure is overflow
    let value: u32 = text
        .parse()
        .map_err(|_| ValidationError::OutOfRange { min, max })?;

    if value < min || value > max {
        return Err(ValidationError::OutOfRange { min, max });
    }

    Ok(value)
}

/// Validate an age entry
pub fn validate_age(text: &str, allow_empty: bool) -> Result<Field<Age>, ValidationError> {
    if text.is_empty() {
        return empty_field(FieldKind::Age, allow_empty);
    }

    let out_of_range = ValidationError::OutOfRange {
        min: AGE_MIN as u32,
        max: AGE_MAX as u32,
    };

    let value = parse_bounded_integer(text, AGE_MIN as u32, AGE_MAX as u32)
        .map_err(|_| out_of_range.clone())?;

    // Bounds above keep the value inside u8 and inside the Age range
    u8::try_from(value)
        .ok()
        .and_then(Age::new)
        .map(Field::Provided)
        .ok_or(out_of_range)
}

/// Validate a name entry; surrounding whitespace is dropped first
pub fn validate_name(text: &str, allow_empty: bool) -> Result<Field<StudentName>, ValidationError> {
    if text.trim().is_empty() {
        return empty_field(FieldKind::Name, allow_empty);
    }

    StudentName::new(text).map(Field::Provided)
}

/// Validate a student id entry (always required)
pub fn validate_id(text: &str) -> Result<StudentId, ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::Empty {
            field: FieldKind::Id,
        });
    }

    parse_bounded_integer(text, 1, u32::MAX)
        .ok()
        .and_then(StudentId::new)
        .ok_or(ValidationError::InvalidId)
}

fn empty_field<T>(field: FieldKind, allow_empty: bool) -> Result<Field<T>, ValidationError> {
    if allow_empty {
        Ok(Field::Skipped)
    } else {
        Err(ValidationError::Empty { field })
    }
}
