//! Store Iterator
//!
//! Sequential iteration over every record in the store file.

use std::fs::File;
use std::io::{self, BufReader, Read};

use crate::error::{Result, StudentDbError};
use crate::record::{decode_record, Student, RECORD_SIZE};

/// Iterator over stored records in file order
///
/// Yields `Err` at most once; iteration ends after the first error.
pub struct Scan {
    /// `None` once exhausted, or from the start when the store is absent
    reader: Option<BufReader<File>>,
    /// Offset of the next record to read
    offset: u64,
}

impl Scan {
    pub(super) fn new(file: File) -> Self {
        Self {
            reader: Some(BufReader::new(file)),
            offset: 0,
        }
    }

    /// Scan over a store that does not exist yet
    pub(super) fn empty() -> Self {
        Self {
            reader: None,
            offset: 0,
        }
    }
}

impl Iterator for Scan {
    type Item = Result<Student>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;

        let mut buf = [0u8; RECORD_SIZE];
        let item = match read_record(reader, &mut buf) {
            Ok(0) => None,
            Ok(RECORD_SIZE) => Some(decode_record(&buf, self.offset)),
            Ok(n) => Some(Err(truncated(self.offset, n))),
            Err(e) => Some(Err(StudentDbError::Io(e))),
        };

        match item {
            Some(Ok(_)) => self.offset += RECORD_SIZE as u64,
            // End or first error: release the file and stop
            _ => self.reader = None,
        }

        item
    }
}

/// Fill `buf` with the next record
///
/// Returns the number of bytes read: `0` at a clean end of file,
/// `RECORD_SIZE` for a whole record, anything between for a cut-off tail.
pub(super) fn read_record<R: Read>(reader: &mut R, buf: &mut [u8; RECORD_SIZE]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < RECORD_SIZE {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

pub(super) fn truncated(offset: u64, len: usize) -> StudentDbError {
    tracing::warn!("Truncated record at offset {} ({} of {} bytes)", offset, len, RECORD_SIZE);
    StudentDbError::CorruptRecord {
        offset,
        reason: format!("truncated record ({} of {} bytes)", len, RECORD_SIZE),
    }
}
