//! Record Store
//!
//! Owns the store file. Every call opens the file, does its work and drops
//! the handle before returning, on success and on error alike.

use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, StudentDbError};
use crate::record::{decode_record, encode_record, Age, Student, StudentId, StudentName, RECORD_SIZE};

use super::iterator::{read_record, truncated, Scan};

/// File-backed store of fixed-size student records
#[derive(Debug, Clone)]
pub struct RecordStore {
    /// Location of the store file
    path: PathBuf,

    /// fsync after every append or rewrite
    sync_writes: bool,
}

impl RecordStore {
    /// Create a store handle for `path`
    ///
    /// Nothing is touched on disk until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sync_writes: true,
        }
    }

    /// Create a store handle from a validated config
    pub fn open(config: &Config) -> Result<Self> {
        config.validate()?;
        tracing::debug!("Using store file {}", config.store_path.display());

        Ok(Self {
            path: config.store_path.clone(),
            sync_writes: config.sync_writes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open for reading; `None` when the store does not exist yet
    fn open_read(&self) -> Result<Option<File>> {
        match File::open(&self.path) {
            Ok(file) => Ok(Some(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Iterate over every record in file order
    ///
    /// A missing store yields nothing.
    pub fn scan_all(&self) -> Result<Scan> {
        match self.open_read()? {
            Some(file) => {
                tracing::debug!("Scanning {}", self.path.display());
                Ok(Scan::new(file))
            }
            None => Ok(Scan::empty()),
        }
    }

    /// First record with `id`, scanning from the start of the file
    pub fn find_by_id(&self, id: StudentId) -> Result<Option<Student>> {
        for student in self.scan_all()? {
            let student = student?;
            if student.id() == id {
                return Ok(Some(student));
            }
        }
        Ok(None)
    }

    /// Number of records, derived from the file length
    pub fn len(&self) -> Result<u64> {
        match self.open_read()? {
            Some(file) => Ok(file.metadata()?.len() / RECORD_SIZE as u64),
            None => Ok(0),
        }
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Id for the next new record: one past the largest id on disk
    ///
    /// Fails with `IdSpaceExhausted` once `u32::MAX` has been handed out.
    pub fn next_id(&self) -> Result<StudentId> {
        let mut max_id: Option<StudentId> = None;
        for student in self.scan_all()? {
            let id = student?.id();
            max_id = Some(max_id.map_or(id, |max| max.max(id)));
        }

        match max_id {
            None => Ok(StudentId::FIRST),
            Some(max) => max.next().ok_or_else(|| {
                tracing::warn!("Student id space exhausted in {}", self.path.display());
                StudentDbError::IdSpaceExhausted
            }),
        }
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Append one record at the end of the store, creating the file if needed
    ///
    /// Refused with `CorruptRecord` when the file ends in a partial record.
    pub fn append(&self, student: &Student) -> Result<()> {
        let encoded = encode_record(student);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // A cut-off tail would shift this and every later record off the grid
        let len = file.metadata()?.len();
        let tail = len % RECORD_SIZE as u64;
        if tail != 0 {
            return Err(truncated(len - tail, tail as usize));
        }

        file.write_all(&encoded)?;
        self.finish_write(&mut file)?;

        tracing::debug!("Appended student {} to {}", student.id(), self.path.display());
        Ok(())
    }

    /// Assign the next id to a new record and append it
    pub fn create(&self, age: Age, name: StudentName) -> Result<Student> {
        let id = self.next_id()?;
        let student = Student::new(id, age, name);
        self.append(&student)?;
        Ok(student)
    }

    /// Find the record with `id`, let `mutator` change it, and rewrite it at
    /// the same offset
    ///
    /// Returns the record as stored afterwards, or `None` when no record has
    /// `id` (including when the store does not exist). When the mutator leaves
    /// the record as it was, the file is not written.
    pub fn update_in_place<F>(&self, id: StudentId, mutator: F) -> Result<Option<Student>>
    where
        F: FnOnce(&mut Student),
    {
        let mut file = match OpenOptions::new().read(true).write(true).open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut buf = [0u8; RECORD_SIZE];
        let mut offset = 0u64;

        loop {
            match read_record(&mut file, &mut buf)? {
                0 => return Ok(None),
                RECORD_SIZE => {}
                n => return Err(truncated(offset, n)),
            }

            let current = decode_record(&buf, offset)?;
            if current.id() == id {
                let mut edited = current.clone();
                mutator(&mut edited);
                // The id is fixed even if the mutator swapped in a whole record
                let edited = Student::new(id, edited.age, edited.name);

                if edited == current {
                    tracing::debug!("Student {} unchanged, skipping rewrite", id);
                    return Ok(Some(edited));
                }

                let encoded = encode_record(&edited);
                file.seek(SeekFrom::Current(-(RECORD_SIZE as i64)))?;
                file.write_all(&encoded)?;
                self.finish_write(&mut file)?;

                tracing::debug!("Rewrote student {} at offset {}", id, offset);
                return Ok(Some(edited));
            }

            offset += RECORD_SIZE as u64;
        }
    }

    fn finish_write(&self, file: &mut File) -> Result<()> {
        file.flush()?;
        if self.sync_writes {
            file.sync_data()?;
        }
        Ok(())
    }
}
