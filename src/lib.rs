//! # studentdb
//!
//! An interactive student record manager with:
//! - A flat file of fixed-size binary records as the only storage
//! - Sequential ids assigned from the largest id on disk
//! - In-place edits by seeking back over the matching record
//! - Retrying, range-checked prompts for every field
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Menu Shell                            │
//! │                 (A / C / P / E / Q loop)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Command Operations                         │
//! │              (list / create / find / edit)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Console   │          │ RecordStore │
//!   │  (prompts)  │          │ (flat file) │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │
//!          ▼                        ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Validators  │          │ Record codec│
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod validate;
pub mod storage;
pub mod console;
pub mod commands;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, StudentDbError, ValidationError};
pub use config::Config;
pub use record::{Age, Student, StudentId, StudentName};
pub use storage::RecordStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of studentdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
