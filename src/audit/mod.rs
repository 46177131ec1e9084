//! Audit logging for StressGauge
//!
//! Every change to the household profile (snapshot edits, goal create, edit
//! and delete, strategies, optimizations, subsidies) is appended to a
//! line-delimited JSON log with before and after values.
//!
//! - `AuditEntry`: one recorded change
//! - `AuditLogger`: appends entries to `audit.log` and reads them back
//! - `generate_diff`: one-line summary of changed fields

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
