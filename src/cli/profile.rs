//! Profile CLI commands
//!
//! Implements CLI commands for profile management, export and import.

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::audit::EntityType;
use crate::config::Settings;
use crate::display::{format_profile_details, format_profile_list};
use crate::error::{AdvisorError, AdvisorResult};
use crate::export::{export_profile, read_profile_export, ExportFormat};
use crate::models::FinancialInputs;
use crate::services::ProfileService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// JSON (exact numbers)
    Json,
    /// YAML (human-readable)
    Yaml,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Yaml => ExportFormat::Yaml,
        }
    }
}

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Create a new profile and make it active
    Create {
        /// Profile name
        name: String,
        /// Age in years (13 or older)
        #[arg(long, default_value_t = 22)]
        age: u32,
        /// Monthly income
        #[arg(long, default_value_t = 3500.0)]
        income: f64,
        /// Monthly expenses
        #[arg(long, default_value_t = 2500.0)]
        expenses: f64,
        /// Cash savings
        #[arg(long, default_value_t = 500.0)]
        savings: f64,
        /// Total debt
        #[arg(long, default_value_t = 0.0)]
        debt: f64,
        /// Average debt APR in percent
        #[arg(long, default_value_t = 0.0)]
        apr: f64,
        /// Replace an existing profile with the same name
        #[arg(long)]
        force: bool,
    },
    /// Make a saved profile the active one
    Load {
        /// Profile name
        name: String,
    },
    /// Show a profile and its latest results
    Show {
        /// Profile name (defaults to the active profile)
        name: Option<String>,
    },
    /// List saved profiles
    List,
    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },
    /// Export a profile to JSON or YAML
    Export {
        /// Profile name
        name: String,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: FormatArg,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import a profile from a JSON or YAML export
    Import {
        /// Export file (.yaml/.yml is read as YAML, anything else as JSON)
        file: PathBuf,
        /// Replace an existing profile with the same name
        #[arg(long)]
        force: bool,
    },
}

/// Handle a profile command
pub fn handle_profile_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: ProfileCommands,
) -> AdvisorResult<()> {
    let service = ProfileService::new(storage);
    let symbol = settings.currency_symbol.clone();

    match cmd {
        ProfileCommands::Create {
            name,
            age,
            income,
            expenses,
            savings,
            debt,
            apr,
            force,
        } => {
            let finances = FinancialInputs {
                monthly_income: income,
                monthly_expenses: expenses,
                cash_savings: savings,
                total_debt: debt,
                debt_apr: apr,
            };

            let profile = service.create(&name, age, finances, force)?;
            settings.active_profile = Some(profile.name.clone());
            settings.save(storage.paths())?;

            println!("Saved profile: {}", profile.name);
            print!("{}", format_profile_details(&profile, &symbol));
        }

        ProfileCommands::Load { name } => {
            let profile = match service.get(&name) {
                Ok(profile) => profile,
                Err(e) if e.is_not_found() => {
                    let names = storage.profiles.names()?;
                    if !names.is_empty() {
                        eprintln!("Saved profiles: {}", names.join(", "));
                    }
                    return Err(e);
                }
                Err(e) => return Err(e),
            };

            settings.active_profile = Some(profile.name.clone());
            settings.save(storage.paths())?;
            println!("Loaded {}", profile.name);
        }

        ProfileCommands::Show { name } => {
            let name = name
                .or_else(|| settings.active_profile.clone())
                .ok_or(AdvisorError::MissingProfile)?;
            let profile = service.get(&name)?;
            print!("{}", format_profile_details(&profile, &symbol));
        }

        ProfileCommands::List => {
            let profiles = service.list()?;
            print!(
                "{}",
                format_profile_list(&profiles, settings.active_profile.as_deref(), &symbol)
            );
        }

        ProfileCommands::Delete { name } => {
            let profile = service.get(&name)?;
            service.delete(&profile.name)?;

            if settings
                .active_profile
                .as_deref()
                .is_some_and(|active| active.eq_ignore_ascii_case(&profile.name))
            {
                settings.active_profile = None;
                settings.save(storage.paths())?;
            }

            println!("Deleted profile: {}", profile.name);
        }

        ProfileCommands::Export {
            name,
            format,
            output,
        } => {
            let profile = service.get(&name)?;
            let format = ExportFormat::from(format);

            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        AdvisorError::Export(format!("Failed to create {}: {}", path.display(), e))
                    })?;
                    let mut writer = BufWriter::new(file);
                    export_profile(&profile, format, &mut writer)?;
                    writer
                        .flush()
                        .map_err(|e| AdvisorError::Export(e.to_string()))?;

                    storage.log_export(
                        EntityType::Profile,
                        profile.name.clone(),
                        path.display().to_string(),
                    )?;
                    println!(
                        "Exported {} as {} to {}",
                        profile.name,
                        format,
                        path.display()
                    );
                }
                None => {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    export_profile(&profile, format, &mut handle)?;
                }
            }
        }

        ProfileCommands::Import { file, force } => {
            let export = read_profile_export(&file)?;
            let profile = service.store_new(export.profile, force)?;

            println!(
                "Imported profile: {} (exported {} by version {})",
                profile.name,
                export.exported_at.format("%Y-%m-%d"),
                export.app_version
            );
        }
    }

    Ok(())
}
