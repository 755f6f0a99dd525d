//! Storage Module
//!
//! Flat-file record store.
//!
//! ## Responsibilities
//! - Sequential scans in file order
//! - Append new records at the end of the file
//! - Locate a record by id and rewrite it at its original offset
//! - Derive the next free id from the largest id on disk
//!
//! ## File Layout
//! ```text
//! ┌──────────────┬──────────────┬──────────────┬─────
//! │ Record 0 (38)│ Record 1 (38)│ Record 2 (38)│ ...
//! └──────────────┴──────────────┴──────────────┴─────
//! ```
//! No header, no count, no index. File length is `count * RECORD_SIZE`.
//! A missing file is an empty store.
//!
//! Every lookup is a linear scan. Stores stay small enough at CLI scale that
//! an index would only complicate the format.

mod iterator;
mod store;

pub use iterator::Scan;
pub use store::RecordStore;
