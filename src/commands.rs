//! Command Operations
//!
//! The four menu actions, each one complete interactive transaction:
//! prompt for input, touch the store, report the result.
//!
//! ## Error Policy
//! - Invalid input is re-prompted inside the prompt loop
//! - Store faults are printed with their cause and end the action
//! - A closed input stream ends the action without touching the store
//!
//! Only console failures are returned as `Err`.

use crate::console::{prompt, prompt_age, prompt_id, prompt_name, Console, Prompt};
use crate::error::{FieldKind, Result, StudentDbError};
use crate::record::{Student, StudentId};
use crate::storage::RecordStore;
use crate::validate::{validate_age, validate_name};

/// Column header printed above student rows
pub const TABLE_HEADER: &str = "ID    | Name                             | Age";

/// Separator under the header
pub const TABLE_RULE: &str = "-------------------------------------------------";

/// What a command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Printed `count` students
    Listed { count: usize },

    /// The store holds no students
    StoreEmpty,

    /// A new student was stored
    Created(Student),

    /// A student was looked up and printed
    Found(Student),

    /// No student has this id
    NotFound(StudentId),

    /// A student was rewritten
    Updated(Student),

    /// Edit finished without any field entered
    NoChanges,

    /// A store fault was reported and the action abandoned
    Failed,

    /// The input stream closed mid-action
    InputClosed,
}

/// One table row for `student`
pub fn format_student(student: &Student) -> String {
    format!("{:<5} | {:<32} | {:>3}", student.id(), student.name, student.age)
}

// =============================================================================
// List
// =============================================================================

/// Print every stored student under a single header
pub fn list_students<C: Console + ?Sized>(store: &RecordStore, console: &mut C) -> Result<CommandOutcome> {
    let scan = match store.scan_all() {
        Ok(scan) => scan,
        Err(e) => return report_failure(console, "Failed to open student file", e),
    };

    let mut count = 0;
    for student in scan {
        let student = match student {
            Ok(student) => student,
            Err(e) => return report_failure(console, "Failed to read student file", e),
        };

        if count == 0 {
            console.write_line("")?;
            write_header(console)?;
        }
        console.write_line(&format_student(&student))?;
        count += 1;
    }

    if count == 0 {
        console.write_line("No students stored yet.")?;
        return Ok(CommandOutcome::StoreEmpty);
    }

    Ok(CommandOutcome::Listed { count })
}

// =============================================================================
// Create
// =============================================================================

/// Ask for age and name, then store a new student under the next free id
///
/// Nothing is written unless both fields are valid and an id is available.
pub fn create_student<C: Console + ?Sized>(store: &RecordStore, console: &mut C) -> Result<CommandOutcome> {
    let age = match prompt(console, "Enter age (5-75): ", |text| {
        validate_age(text, false)?.require(FieldKind::Age)
    })? {
        Prompt::Value(age) => age,
        Prompt::Closed => return Ok(CommandOutcome::InputClosed),
    };

    let name = match prompt(console, "Enter name (max 32 chars): ", |text| {
        validate_name(text, false)?.require(FieldKind::Name)
    })? {
        Prompt::Value(name) => name,
        Prompt::Closed => return Ok(CommandOutcome::InputClosed),
    };

    let student = match store.create(age, name) {
        Ok(student) => student,
        Err(StudentDbError::IdSpaceExhausted) => {
            console.write_line("ID limit reached.")?;
            return Ok(CommandOutcome::Failed);
        }
        Err(e) => return report_failure(console, "Failed to store student", e),
    };

    tracing::info!("Created student {} ({})", student.id(), student.name);
    console.write_line(&format!("Student created with ID {}.", student.id()))?;
    Ok(CommandOutcome::Created(student))
}

// =============================================================================
// Find
// =============================================================================

/// Ask for an id and print the matching student
pub fn find_student<C: Console + ?Sized>(store: &RecordStore, console: &mut C) -> Result<CommandOutcome> {
    let id = match prompt_id(console)? {
        Prompt::Value(id) => id,
        Prompt::Closed => return Ok(CommandOutcome::InputClosed),
    };

    match store.find_by_id(id) {
        Ok(Some(student)) => {
            console.write_line("")?;
            write_header(console)?;
            console.write_line(&format_student(&student))?;
            Ok(CommandOutcome::Found(student))
        }
        Ok(None) => report_missing(store, console, id),
        Err(e) => report_failure(console, "Failed to read student file", e),
    }
}

// =============================================================================
// Edit
// =============================================================================

/// Ask for an id, show the student, and rewrite whichever fields were entered
///
/// A blank answer keeps the current value; if both are blank nothing is
/// written.
pub fn edit_student<C: Console + ?Sized>(store: &RecordStore, console: &mut C) -> Result<CommandOutcome> {
    let id = match prompt_id(console)? {
        Prompt::Value(id) => id,
        Prompt::Closed => return Ok(CommandOutcome::InputClosed),
    };

    let current = match store.find_by_id(id) {
        Ok(Some(student)) => student,
        Ok(None) => return report_missing(store, console, id),
        Err(e) => return report_failure(console, "Failed to read student file", e),
    };

    console.write_line(&format!(
        "Editing student {} ({}, {} years old)",
        current.id(),
        current.name,
        current.age
    ))?;

    let new_age = match prompt_age(console, "Enter new age (5-75) or press ENTER to keep current: ", true)? {
        Prompt::Value(field) => field.provided(),
        Prompt::Closed => return Ok(CommandOutcome::InputClosed),
    };

    let new_name = match prompt_name(
        console,
        "Enter new name (max 32 chars) or press ENTER to keep current: ",
        true,
    )? {
        Prompt::Value(field) => field.provided(),
        Prompt::Closed => return Ok(CommandOutcome::InputClosed),
    };

    if new_age.is_none() && new_name.is_none() {
        console.write_line("No changes entered.")?;
        return Ok(CommandOutcome::NoChanges);
    }

    let updated = store.update_in_place(id, |student| {
        if let Some(age) = new_age {
            student.age = age;
        }
        if let Some(name) = new_name {
            student.name = name;
        }
    });

    match updated {
        Ok(Some(student)) => {
            tracing::info!("Updated student {}", student.id());
            console.write_line("Student updated.")?;
            Ok(CommandOutcome::Updated(student))
        }
        Ok(None) => report_not_found(console, id),
        Err(e) => report_failure(console, "Failed to update student", e),
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn write_header<C: Console + ?Sized>(console: &mut C) -> Result<()> {
    console.write_line(TABLE_HEADER)?;
    console.write_line(TABLE_RULE)?;
    Ok(())
}

/// Explain a lookup miss: an empty store, or just no record with `id`
fn report_missing<C: Console + ?Sized>(
    store: &RecordStore,
    console: &mut C,
    id: StudentId,
) -> Result<CommandOutcome> {
    match store.is_empty() {
        Ok(true) => {
            console.write_line("No students stored yet.")?;
            Ok(CommandOutcome::StoreEmpty)
        }
        Ok(false) => report_not_found(console, id),
        Err(e) => report_failure(console, "Failed to read student file", e),
    }
}

fn report_not_found<C: Console + ?Sized>(console: &mut C, id: StudentId) -> Result<CommandOutcome> {
    console.write_line(&format!("No student found with ID {}.", id))?;
    Ok(CommandOutcome::NotFound(id))
}

fn report_failure<C: Console + ?Sized>(
    console: &mut C,
    context: &str,
    error: StudentDbError,
) -> Result<CommandOutcome> {
    tracing::error!("{}: {}", context, error);
    console.write_line(&format!("{}: {}", context, error))?;
    Ok(CommandOutcome::Failed)
}
