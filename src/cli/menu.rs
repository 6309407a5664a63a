//! Interactive menu
//!
//! The numbered main menu: create or load a profile, pick an explanation
//! mode, run each calculation, export the report.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{
    format_goal, format_header, format_plan, format_risk_result, format_simulation,
};
use crate::error::{AdvisorError, AdvisorResult};
use crate::models::{
    ExplanationMode, FinancialInputs, Profile, Scenario, SimulationInput, MAX_YEARS, MIN_AGE,
    SUGGESTED_GOAL_TYPES,
};
use crate::reports::ProfileReport;
use crate::services::ProfileService;
use crate::session::Session;
use crate::storage::Storage;

use super::analysis::{collect_risk_answers, RiskArgs};
use super::prompt::Prompter;

/// Shown once when the menu starts
pub const DISCLAIMER: &str = "DISCLAIMER: This tool is for educational purposes only and is NOT financial advice.\n\
Always do your own research or talk to a licensed advisor.";

const MENU_ITEMS: &[&str] = &[
    "Create Profile",
    "Load Profile",
    "Set Explanation Mode",
    "Run Risk Quiz",
    "Build Mini Financial Plan",
    "Run Portfolio Simulator",
    "Goal Planner",
    "Export Report",
    "Exit",
];

/// Everything a menu action needs
pub struct Menu<'a, R, W> {
    storage: &'a Storage,
    settings: &'a mut Settings,
    session: &'a mut Session,
    prompter: &'a mut Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu over the given storage, settings and session
    pub fn new(
        storage: &'a Storage,
        settings: &'a mut Settings,
        session: &'a mut Session,
        prompter: &'a mut Prompter<R, W>,
    ) -> Self {
        Self {
            storage,
            settings,
            session,
            prompter,
        }
    }

    /// Run until the user picks Exit
    ///
    /// Action errors are shown and the menu continues; I/O errors (including
    /// end of input) end the loop.
    pub fn run(&mut self) -> AdvisorResult<()> {
        self.header("Wealth Advisor")?;
        self.prompter.say(&format!("\n{}\n", DISCLAIMER))?;
        if let Some(name) = self.session.profile_name() {
            let line = format!("Active profile: {}", name);
            self.prompter.say(&line)?;
        }

        loop {
            self.header("MAIN MENU")?;
            for (i, item) in MENU_ITEMS.iter().enumerate() {
                self.prompter.say(&format!("{}) {}", i + 1, item))?;
            }

            let choice = self.prompter.ask_text("Pick a number", "")?;
            let outcome = match choice.as_str() {
                "1" => self.create_profile(),
                "2" => self.load_profile(),
                "3" => self.set_mode(),
                "4" => self.risk_quiz(),
                "5" => self.plan(),
                "6" => self.simulate(),
                "7" => self.goal(),
                "8" => self.export_report(),
                "9" => {
                    self.prompter.say("Goodbye!")?;
                    return Ok(());
                }
                _ => self.prompter.say("Pick a valid number (1-9)."),
            };

            match outcome {
                Ok(()) => {}
                Err(e @ AdvisorError::Io(_)) => return Err(e),
                Err(AdvisorError::MissingProfile) => {
                    self.prompter.say("Create or load a profile first.")?
                }
                Err(e) => self.prompter.say(&format!("Error: {}", e))?,
            }

            self.prompter.pause()?;
        }
    }

    fn header(&mut self, title: &str) -> AdvisorResult<()> {
        self.prompter
            .say(&format!("\n{}", format_header(title).trim_end()))
    }

    fn symbol(&self) -> String {
        self.settings.currency_symbol.clone()
    }

    fn activate(&mut self, profile: Profile) -> AdvisorResult<()> {
        self.settings.active_profile = Some(profile.name.clone());
        self.settings.save(self.storage.paths())?;
        self.session.set_profile(profile);
        Ok(())
    }

    fn create_profile(&mut self) -> AdvisorResult<()> {
        self.header("Create Profile")?;

        let name = self.prompter.ask_text("Name", "")?;
        let name = if name.is_empty() { "User".to_string() } else { name };
        let age = self.prompter.ask_whole("Age", 22, MIN_AGE, u32::MAX)?;

        let defaults = FinancialInputs::default();
        let p = &mut *self.prompter;
        let finances = FinancialInputs {
            monthly_income: p.ask_number("Monthly income ($)", defaults.monthly_income, Some(0.0))?,
            monthly_expenses: p.ask_number("Monthly expenses ($)", defaults.monthly_expenses, Some(0.0))?,
            cash_savings: p.ask_number("Cash savings ($)", defaults.cash_savings, Some(0.0))?,
            total_debt: p.ask_number("Total debt ($)", defaults.total_debt, Some(0.0))?,
            debt_apr: p.ask_number("Average debt APR (%)", defaults.debt_apr, Some(0.0))?,
        };

        if self.storage.profiles.exists(&name)? {
            let question = format!("Profile '{}' already exists. Overwrite?", name);
            if !self.prompter.ask_yes_no(&question, false)? {
                return self.prompter.say("Kept the existing profile.");
            }
        }

        let profile = ProfileService::new(self.storage).create(&name, age, finances, true)?;
        let line = format!("Saved profile: {}", profile.name);
        self.activate(profile)?;
        self.prompter.say(&line)
    }

    fn load_profile(&mut self) -> AdvisorResult<()> {
        self.header("Load Profile")?;

        let name = self.prompter.ask_text("Type profile name", "")?;
        match ProfileService::new(self.storage).get(&name) {
            Ok(profile) => {
                let line = format!("Loaded {}", profile.name);
                self.activate(profile)?;
                self.prompter.say(&line)
            }
            Err(e) if e.is_not_found() => {
                let names = self.storage.profiles.names()?;
                self.prompter.say("Profile not found.")?;
                self.prompter
                    .say(&format!("Saved profiles: {}", names.join(", ")))
            }
            Err(e) => Err(e),
        }
    }

    fn set_mode(&mut self) -> AdvisorResult<()> {
        let mode = *self
            .prompter
            .pick("Choose explanation mode", ExplanationMode::all())?;

        self.session.mode = mode;
        self.settings.explanation_mode = mode;
        self.settings.save(self.storage.paths())?;
        self.prompter.say(&format!("Mode set to {}", mode))
    }

    fn risk_quiz(&mut self) -> AdvisorResult<()> {
        self.session.profile()?;
        self.header("Risk Quiz")?;

        let answers = collect_risk_answers(self.prompter, &RiskArgs::default())?;
        let result =
            ProfileService::new(self.storage).assess_risk(self.session.profile_mut()?, &answers)?;

        let text = format_risk_result(&result, self.session.mode);
        self.prompter.say(text.trim_end())
    }

    fn plan(&mut self) -> AdvisorResult<()> {
        self.session.profile()?;
        self.header("Mini Financial Plan")?;

        let plan = ProfileService::new(self.storage).build_plan(self.session.profile_mut()?)?;

        let text = format_plan(&plan, self.session.mode, &self.symbol());
        self.prompter.say(text.trim_end())
    }

    fn simulate(&mut self) -> AdvisorResult<()> {
        self.session.profile()?;
        self.header("Portfolio Growth Simulator")?;

        let p = &mut *self.prompter;
        let years = p.ask_whole("How many years do you want to invest?", 10, 1, MAX_YEARS)?;
        let monthly_contribution = p.ask_number("Monthly contribution ($)", 200.0, Some(0.0))?;
        let starting_balance = p.ask_number("Starting balance ($)", 0.0, Some(0.0))?;
        let scenario = *p.pick("Choose a market scenario", Scenario::all())?;

        let input = SimulationInput {
            years,
            monthly_contribution,
            starting_balance,
            scenario,
        };
        let result = ProfileService::new(self.storage).simulate(self.session.profile_mut()?, &input)?;

        let text = format_simulation(&result, self.session.mode, &self.symbol());
        self.prompter.say(text.trim_end())
    }

    fn goal(&mut self) -> AdvisorResult<()> {
        self.session.profile()?;
        self.header("Goal-Based Planning")?;

        let p = &mut *self.prompter;
        let mut goal_type = p.pick("Choose a goal type", SUGGESTED_GOAL_TYPES)?.to_string();
        if goal_type == "Custom" {
            goal_type = p.ask_text("Describe your goal", "Custom")?;
        }
        let target = p.ask_number("Goal target amount ($)", 10000.0, Some(0.0))?;
        let years = p.ask_whole("How many years to reach it?", 3, 1, MAX_YEARS)?;

        let goal = ProfileService::new(self.storage).plan_goal(
            self.session.profile_mut()?,
            &goal_type,
            target,
            years,
        )?;

        let text = format_goal(&goal, self.session.mode, &self.symbol());
        self.prompter.say(text.trim_end())
    }

    fn export_report(&mut self) -> AdvisorResult<()> {
        let report = ProfileReport::generate(self.session.profile()?, self.session.mode)
            .with_currency(self.symbol());
        self.header("Export Report")?;

        let path = report.export(self.storage)?;
        self.prompter
            .say(&format!("Report saved to: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::AdvisorPaths;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = AdvisorPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn run_script(storage: &Storage, settings: &mut Settings, script: &str) -> (AdvisorResult<()>, String) {
        let mut session = Session::new(settings.explanation_mode);
        let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let result = Menu::new(storage, settings, &mut session, &mut prompter).run();
        (result, String::from_utf8(prompter.into_output()).unwrap())
    }

    #[test]
    fn test_create_then_plan() {
        let (_temp, storage) = create_test_storage();
        let mut settings = Settings::default();

        // create with defaults, pause, plan, pause, exit
        let script = "1\nAlice\n30\n\n\n\n\n\n\n5\n\n9\n";
        let (result, output) = run_script(&storage, &mut settings, script);

        result.unwrap();
        assert!(output.contains("Saved profile: Alice"));
        assert!(output.contains("Monthly Surplus: $1,000.00"));
        assert!(output.contains("Goodbye!"));
        assert_eq!(settings.active_profile.as_deref(), Some("Alice"));

        let stored = storage.profiles.get("Alice").unwrap().unwrap();
        assert!(stored.latest_plan.is_some());
    }

    #[test]
    fn test_actions_need_a_profile() {
        let (_temp, storage) = create_test_storage();
        let mut settings = Settings::default();

        let (result, output) = run_script(&storage, &mut settings, "4\n\n8\n\n9\n");

        result.unwrap();
        assert_eq!(output.matches("Create or load a profile first.").count(), 2);
        assert!(!output.contains(crate::models::DrawdownReaction::QUESTION));
    }

    #[test]
    fn test_quiz_simulation_goal_and_report() {
        let (temp, storage) = create_test_storage();
        let mut settings = Settings::default();

        let script = concat!(
            "1\nBob\n\n\n\n\n\n\n\n",   // create with defaults
            "3\n3\n\n",                 // advanced mode
            "4\n4\n4\n3\n\n",           // buy more, 15+, stable
            "6\n1\n100\n0\n2\n\n",      // 1 year, 100/month, base
            "7\n3\n12000\n2\n\n",       // car
            "8\n\n",
            "9\n"
        );
        let (result, output) = run_script(&storage, &mut settings, script);

        result.unwrap();
        assert!(output.contains("Your risk style: Growth"));
        assert!(output.contains("Ending Balance (normal): $1,245.03"));
        assert!(output.contains("Monthly needed (simple): $500.00"));
        assert_eq!(settings.explanation_mode, ExplanationMode::Advanced);

        let report = temp.path().join("reports").join("Bob_report.txt");
        let text = std::fs::read_to_string(report).unwrap();
        assert!(text.contains("Mode: Advanced"));
        assert!(text.contains("LATEST GOAL:"));
    }

    #[test]
    fn test_simulation_years_are_bounded() {
        let (_temp, storage) = create_test_storage();
        let mut settings = Settings::default();

        let script = concat!(
            "1\nAmy\n\n\n\n\n\n\n\n",
            "6\n5000\n40\n\n\n2\n\n",  // too long, then 40 years on base
            "9\n"
        );
        let (result, output) = run_script(&storage, &mut settings, script);

        result.unwrap();
        assert!(output.contains("Must be at most 100."));
        let stored = storage.profiles.get("Amy").unwrap().unwrap();
        assert_eq!(stored.latest_simulation.map(|s| s.years), Some(40));
    }

    #[test]
    fn test_load_unknown_profile() {
        let (_temp, storage) = create_test_storage();
        let mut settings = Settings::default();

        let (result, output) = run_script(&storage, &mut settings, "2\nGhost\n\n9\n");

        result.unwrap();
        assert!(output.contains("Profile not found."));
    }

    #[test]
    fn test_invalid_choice_and_eof() {
        let (_temp, storage) = create_test_storage();
        let mut settings = Settings::default();

        let (result, output) = run_script(&storage, &mut settings, "42\n\n");

        assert!(output.contains("Pick a valid number (1-9)."));
        assert!(matches!(result, Err(AdvisorError::Io(_))));
    }
}
