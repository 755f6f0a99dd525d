//! Record Module
//!
//! The student record and its fixed-width on-disk encoding.
//!
//! ## Responsibilities
//! - Typed field values that cannot hold out-of-range data
//! - Encode/decode one record to exactly `RECORD_SIZE` bytes
//!
//! ## Record Format
//! ```text
//! ┌──────────┬─────────┬──────────────────────────────────┐
//! │ ID (4)   │ Age (1) │ Name (33, NUL padded)            │
//! └──────────┴─────────┴──────────────────────────────────┘
//! ```
//! ID is little-endian. The name field always holds at least one
//! terminating zero byte. Records are stored back to back with no header.

mod codec;
mod student;

pub use codec::{decode_record, encode_record, NAME_FIELD_SIZE, RECORD_SIZE};
pub use student::{Age, Student, StudentId, StudentName, AGE_MAX, AGE_MIN, NAME_MAX_LEN};
