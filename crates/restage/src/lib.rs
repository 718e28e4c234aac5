//! Build-support staging utilities.
//!
//! During asset staging a build needs exactly two filesystem verbs: make a
//! destination path into a copy of a source path, and make sure nothing is
//! left at a path. This crate provides both as library operations
//! ([`replace`] and [`remove`]) and as the standalone `replace` and `remove`
//! binaries invoked by build scripts.

#[macro_use]
extern crate log;
#[macro_use]
extern crate static_assertions;

pub mod entry;
pub mod error;
pub mod logging;
pub mod ops;

pub use entry::Entry;
pub use error::{StageError, StageResult};
pub use ops::{remove, replace};
