//! Service layer for StressGauge
//!
//! Services sit between the CLI and storage. They validate input, apply the
//! change to the profile, persist it and write the audit entry.

pub mod goal;
pub mod profile;

pub use goal::{GoalService, GoalUpdate};
pub use profile::ProfileService;
