//! Scheme-based filename generation engine.
//!
//! Compiles a naming scheme once, resolves it per file against that file's
//! metadata, sanitizes the result, and commits renames with best-effort,
//! non-transactional semantics. Per-file failures are logged and skipped;
//! they never abort the surrounding batch.
//!
//! Execution is single-threaded and fully synchronous: every metadata
//! lookup, sanitization, and rename runs to completion before the next batch
//! item, in input order. There is no cancellation and no timeout.

pub mod error;
mod execute;
mod generate;
mod plan;
mod renamer;

pub use crate::execute::execute;
pub use crate::plan::RenamePlan;
pub use crate::renamer::{DEFAULT_SUBSTITUTION, Renamer};
