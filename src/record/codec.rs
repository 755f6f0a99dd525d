//! Record codec
//!
//! Encoding and decoding of the fixed-width record layout.

use crate::error::{Result, StudentDbError};

use super::{Age, Student, StudentId, StudentName, NAME_MAX_LEN};

/// Name field width: `NAME_MAX_LEN` usable bytes + terminator
pub const NAME_FIELD_SIZE: usize = NAME_MAX_LEN + 1;

/// Record size: ID (4) + Age (1) + Name (33) = 38 bytes
pub const RECORD_SIZE: usize = 4 + 1 + NAME_FIELD_SIZE;

const AGE_OFFSET: usize = 4;
const NAME_OFFSET: usize = 5;

/// Encode a student to its on-disk form
pub fn encode_record(student: &Student) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];

    buf[..AGE_OFFSET].copy_from_slice(&student.id().get().to_le_bytes());
    buf[AGE_OFFSET] = student.age.get();

    // StudentName guarantees len <= NAME_MAX_LEN, so the last byte stays zero
    let name = student.name.as_bytes();
    buf[NAME_OFFSET..NAME_OFFSET + name.len()].copy_from_slice(name);

    buf
}

/// Decode one record read from `offset` in the store
///
/// Any field that could not have been written by `encode_record` is reported
/// as `CorruptRecord`.
pub fn decode_record(bytes: &[u8; RECORD_SIZE], offset: u64) -> Result<Student> {
    let corrupt = |reason: String| StudentDbError::CorruptRecord { offset, reason };

    let raw_id = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let id = StudentId::new(raw_id).ok_or_else(|| corrupt("student id is zero".to_string()))?;

    let raw_age = bytes[AGE_OFFSET];
    let age = Age::new(raw_age).ok_or_else(|| corrupt(format!("age {} out of range", raw_age)))?;

    let field = &bytes[NAME_OFFSET..];
    let name_len = field
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| corrupt("name is not terminated".to_string()))?;

    let text = std::str::from_utf8(&field[..name_len])
        .map_err(|e| corrupt(format!("name is not valid UTF-8: {}", e)))?;
    let name = StudentName::new(text).map_err(|e| corrupt(format!("invalid name: {}", e)))?;

    Ok(Student::new(id, age, name))
}
