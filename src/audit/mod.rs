//! Audit logging system for Wealth Advisor
//!
//! Records every profile change (creation, each recalculated section,
//! deletion) and every export in an append-only JSONL log.
//!
//! - `AuditEntry`: one entry with timestamp, operation, entity, and optional
//!   before/after snapshots.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//! - `generate_diff`: summarizes what changed between two snapshots.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
