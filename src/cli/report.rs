//! CLI commands for reports
//!
//! Writes the text report for the active profile to the reports directory,
//! or prints it.

use std::path::PathBuf;

use crate::audit::EntityType;
use crate::config::Settings;
use crate::error::AdvisorResult;
use crate::reports::ProfileReport;
use crate::session::Session;
use crate::storage::Storage;

/// Handle the report command
///
/// With `print` the report goes to stdout only. With `output` it is written
/// there instead of `<reports>/<name>_report.txt`.
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    session: &Session,
    print: bool,
    output: Option<PathBuf>,
) -> AdvisorResult<()> {
    let report = ProfileReport::generate(session.profile()?, session.mode)
        .with_currency(settings.currency_symbol.clone());

    if print {
        print!("{}", report.format_text());
        return Ok(());
    }

    let path = match output {
        Some(path) => {
            report.write_to(&path)?;
            storage.log_export(
                EntityType::Report,
                report.profile.name.clone(),
                path.display().to_string(),
            )?;
            path
        }
        None => report.export(storage)?,
    };

    println!("Report saved to: {}", path.display());
    Ok(())
}
