//! CLI command for the audit history

use crate::error::AdvisorResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(
    storage: &Storage,
    limit: usize,
    profile: Option<&str>,
) -> AdvisorResult<()> {
    let Some(logger) = storage.audit_logger() else {
        println!("Audit logging is disabled.");
        return Ok(());
    };

    let entries = logger.read_recent(limit, profile)?;
    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
