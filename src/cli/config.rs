//! CLI commands for settings
//!
//! Explanation mode and the configuration overview.

use crate::config::Settings;
use crate::error::{AdvisorError, AdvisorResult};
use crate::models::ExplanationMode;
use crate::storage::Storage;

/// Show the explanation mode, or set it when `mode` is given
pub fn handle_mode_command(
    storage: &Storage,
    settings: &mut Settings,
    mode: Option<String>,
) -> AdvisorResult<()> {
    let Some(raw) = mode else {
        println!("Explanation mode: {}", settings.explanation_mode);
        return Ok(());
    };

    let mode = ExplanationMode::parse(&raw).ok_or_else(|| {
        AdvisorError::Validation(format!(
            "Invalid mode: '{}'. Valid modes: beginner, intermediate, advanced",
            raw
        ))
    })?;

    settings.explanation_mode = mode;
    settings.save(storage.paths())?;
    println!("Mode set to {}", mode);
    Ok(())
}

/// Print paths and settings
pub fn handle_config_command(storage: &Storage, settings: &Settings) -> AdvisorResult<()> {
    let paths = storage.paths();

    println!("Wealth Advisor Configuration");
    println!("============================");
    println!("Base directory:     {}", paths.base_dir().display());
    println!("Profiles directory: {}", paths.profiles_dir().display());
    println!("Reports directory:  {}", paths.reports_dir().display());
    println!("Settings file:      {}", paths.settings_file().display());
    println!("Audit log:          {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Explanation mode: {}", settings.explanation_mode);
    println!(
        "  Active profile:   {}",
        settings.active_profile.as_deref().unwrap_or("(none)")
    );
    println!("  Currency symbol:  {}", settings.currency_symbol);
    println!(
        "  Audit log:        {}",
        if settings.audit_enabled { "enabled" } else { "disabled" }
    );
    Ok(())
}
