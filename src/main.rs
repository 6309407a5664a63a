use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use wealth_advisor::cli::{
    handle_config_command, handle_goal_command, handle_history_command, handle_mode_command,
    handle_plan_command, handle_profile_command, handle_report_command, handle_risk_command,
    handle_simulate_command, GoalArgs, Menu, ProfileCommands, Prompter, RiskArgs, SimulateArgs,
};
use wealth_advisor::config::{AdvisorPaths, Settings};
use wealth_advisor::session::Session;
use wealth_advisor::storage::Storage;

#[derive(Parser)]
#[command(
    name = "advisor",
    version,
    about = "Personal finance planning from the terminal",
    long_about = "Wealth Advisor builds a simple financial picture from a few numbers: \
                  a risk questionnaire, a budget plan, a growth simulation and a savings \
                  goal, saved per profile and summarized in a text report. \
                  Educational only, not financial advice."
)]
struct Cli {
    /// Profile to use instead of the active one
    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile management commands
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Take the risk quiz
    Risk(RiskArgs),

    /// Build a mini financial plan
    Plan,

    /// Run the portfolio growth simulator
    #[command(alias = "sim")]
    Simulate(SimulateArgs),

    /// Work out the monthly savings for a goal
    Goal(GoalArgs),

    /// Export the text report
    Report {
        /// Print the report instead of writing it
        #[arg(long)]
        print: bool,

        /// Write the report to this file instead of the reports directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or set the explanation mode (beginner, intermediate, advanced)
    Mode {
        /// New mode
        mode: Option<String>,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,

    /// Open the interactive menu (the default)
    #[command(alias = "interactive")]
    Menu,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = AdvisorPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths)?;
    if !settings.audit_enabled {
        storage = storage.without_audit();
    }
    storage.load_all()?;

    let symbol = settings.currency_symbol.clone();
    let profile = cli.profile.as_deref();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Profile(cmd) => {
            handle_profile_command(&storage, &mut settings, cmd)?;
        }
        Commands::Risk(args) => {
            let mut session = Session::resolve(&storage, &settings, profile)?;
            let mut prompter = Prompter::stdio();
            handle_risk_command(&storage, &mut session, &mut prompter, args)?;
        }
        Commands::Plan => {
            let mut session = Session::resolve(&storage, &settings, profile)?;
            handle_plan_command(&storage, &mut session, &symbol)?;
        }
        Commands::Simulate(args) => {
            let mut session = Session::resolve(&storage, &settings, profile)?;
            handle_simulate_command(&storage, &mut session, args, &symbol)?;
        }
        Commands::Goal(args) => {
            let mut session = Session::resolve(&storage, &settings, profile)?;
            handle_goal_command(&storage, &mut session, args, &symbol)?;
        }
        Commands::Report { print, output } => {
            let session = Session::resolve(&storage, &settings, profile)?;
            handle_report_command(&storage, &settings, &session, print, output)?;
        }
        Commands::Mode { mode } => {
            handle_mode_command(&storage, &mut settings, mode)?;
        }
        Commands::History { limit } => {
            handle_history_command(&storage, limit, profile)?;
        }
        Commands::Config => {
            handle_config_command(&storage, &settings)?;
        }
        Commands::Menu => {
            let mut session = Session::resolve(&storage, &settings, profile)?;
            let mut prompter = Prompter::stdio();
            Menu::new(&storage, &mut settings, &mut session, &mut prompter).run()?;
        }
    }

    Ok(())
}
