//! Menu Shell
//!
//! Interactive loop: print the menu, read a choice, dispatch to a command.

use crate::commands::{self, CommandOutcome};
use crate::console::{is_undecodable, Console};
use crate::error::Result;
use crate::storage::RecordStore;

const MENU: &str = "\
A) Print All Students
C) Create A Student
P) Print A Student
E) Edit A Student
Q) Quit
";

/// Menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListAll,
    Create,
    Find,
    Edit,
    Quit,
}

impl MenuChoice {
    /// Pick an action from the first character of `input`, ignoring case
    pub fn parse(input: &str) -> Option<Self> {
        match input.chars().next()?.to_ascii_uppercase() {
            'A' => Some(MenuChoice::ListAll),
            'C' => Some(MenuChoice::Create),
            'P' => Some(MenuChoice::Find),
            'E' => Some(MenuChoice::Edit),
            'Q' => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Run the menu until the user quits or the input stream closes
///
/// Returns `Err` only when the console itself fails.
pub fn run<C: Console + ?Sized>(store: &RecordStore, console: &mut C) -> Result<()> {
    console.write_line("Student Records")?;

    loop {
        console.write_line("")?;
        console.write_line(MENU)?;
        console.write_str("Select an option: ")?;

        let input = match console.read_line() {
            Ok(Some(input)) => input,
            Ok(None) => return close(console),
            Err(e) if is_undecodable(&e) => {
                console.write_line("Invalid option. Please try again.")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if input.is_empty() {
            console.write_line("Please choose an option.")?;
            continue;
        }

        let Some(choice) = MenuChoice::parse(&input) else {
            console.write_line("Invalid option. Please try again.")?;
            continue;
        };

        tracing::debug!("Menu choice {:?}", choice);

        let outcome = match choice {
            MenuChoice::ListAll => commands::list_students(store, console)?,
            MenuChoice::Create => commands::create_student(store, console)?,
            MenuChoice::Find => commands::find_student(store, console)?,
            MenuChoice::Edit => commands::edit_student(store, console)?,
            MenuChoice::Quit => {
                console.write_line("Goodbye!")?;
                return Ok(());
            }
        };

        if outcome == CommandOutcome::InputClosed {
            tracing::warn!("Input closed during {:?}", choice);
            return close(console);
        }
    }
}

fn close<C: Console + ?Sized>(console: &mut C) -> Result<()> {
    console.write_line("")?;
    console.write_line("Input stream closed. Exiting.")?;
    Ok(())
}
