//! Repository layer for locally persisted settings.
//!
//! # Responsibility
//! - Define the preference persistence contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Reads never fail: missing or corrupt rows fall back to defaults.
//! - Write failures are returned to the caller, never swallowed.

pub mod preference_repo;
