//! Profile service
//!
//! Applies the calculators to a profile, writes each result back as a named
//! section, persists the profile and records the change in the audit log.

use crate::audit::{generate_diff, EntityType};
use crate::error::{AdvisorError, AdvisorResult};
use crate::models::{
    FinancialInputs, GoalResult, PlanResult, Profile, RiskAnswers, RiskResult, SimulationInput,
    SimulationResult, MAX_YEARS,
};
use crate::storage::Storage;

use super::{budget, goal, growth, risk};

/// Service for profile management and calculations
pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    /// Create a new profile service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create and save a new profile
    ///
    /// Fails with `Duplicate` if the name is taken, unless `overwrite` is set.
    pub fn create(
        &self,
        name: &str,
        age: u32,
        finances: FinancialInputs,
        overwrite: bool,
    ) -> AdvisorResult<Profile> {
        let name = name.trim();
        let name = if name.is_empty() { "User" } else { name };
        let profile = Profile::new(name, age, finances);
        self.store_new(profile, overwrite)
    }

    /// Save an externally built profile (e.g. an import) as a new profile
    pub fn store_new(&self, profile: Profile, overwrite: bool) -> AdvisorResult<Profile> {
        profile
            .validate()
            .map_err(|e| AdvisorError::Validation(e.to_string()))?;

        let existing = self.storage.profiles.get(&profile.name)?;
        if existing.is_some() && !overwrite {
            return Err(AdvisorError::profile_exists(&profile.name));
        }

        self.storage.profiles.upsert(profile.clone())?;
        self.storage.profiles.save(&profile.name)?;

        match existing {
            Some(before) => {
                let diff = snapshot_diff(&before, &profile);
                self.storage.log_update(
                    EntityType::Profile,
                    profile.name.clone(),
                    Some("replaced".to_string()),
                    &before,
                    &profile,
                    diff,
                )?;
            }
            None => {
                self.storage
                    .log_create(EntityType::Profile, profile.name.clone(), None, &profile)?;
            }
        }

        Ok(profile)
    }

    /// Get a profile by name (case-insensitive fallback)
    pub fn get(&self, name: &str) -> AdvisorResult<Profile> {
        self.storage
            .profiles
            .find(name)?
            .ok_or_else(|| AdvisorError::profile_not_found(name))
    }

    /// All stored profiles, ordered by name
    pub fn list(&self) -> AdvisorResult<Vec<Profile>> {
        self.storage.profiles.get_all()
    }

    /// Delete a profile; returns false if it didn't exist
    pub fn delete(&self, name: &str) -> AdvisorResult<bool> {
        let Some(profile) = self.storage.profiles.find(name)? else {
            return Ok(false);
        };

        self.storage.profiles.delete(&profile.name)?;
        self.storage
            .log_delete(EntityType::Profile, profile.name.clone(), None, &profile)?;

        Ok(true)
    }

    /// Score the risk questionnaire and store the result
    pub fn assess_risk(
        &self,
        profile: &mut Profile,
        answers: &RiskAnswers,
    ) -> AdvisorResult<RiskResult> {
        let result = risk::assess_risk(answers);
        let mut after = profile.clone();
        after.set_risk(result);
        self.commit(
            profile,
            after,
            EntityType::Risk,
            format!("{} ({})", result.style, result.score),
        )?;
        Ok(result)
    }

    /// Build a plan from the profile's figures and store it
    pub fn build_plan(&self, profile: &mut Profile) -> AdvisorResult<PlanResult> {
        let plan = budget::build_plan(&profile.finances, profile.effective_risk_style());
        let mut after = profile.clone();
        after.set_plan(plan.clone());
        self.commit(
            profile,
            after,
            EntityType::Plan,
            format!("{} warning(s)", plan.warnings.len()),
        )?;
        Ok(plan)
    }

    /// Run a growth simulation and store it
    pub fn simulate(
        &self,
        profile: &mut Profile,
        input: &SimulationInput,
    ) -> AdvisorResult<SimulationResult> {
        check_years(input.years)?;
        check_amount("Monthly contribution", input.monthly_contribution)?;
        check_amount("Starting balance", input.starting_balance)?;

        let result = growth::simulate(input);
        let mut after = profile.clone();
        after.set_simulation(result.clone());
        self.commit(
            profile,
            after,
            EntityType::Simulation,
            format!("{} scenario, {} years", result.scenario, result.years),
        )?;
        Ok(result)
    }

    /// Compute a savings goal and store it
    pub fn plan_goal(
        &self,
        profile: &mut Profile,
        goal_type: &str,
        target: f64,
        years: u32,
    ) -> AdvisorResult<GoalResult> {
        check_years(years)?;
        check_amount("Goal target", target)?;

        let goal_type = match goal_type.trim() {
            "" => "Custom",
            label => label,
        };
        let result = goal::plan_goal(goal_type, target, years);
        let mut after = profile.clone();
        after.set_goal(result.clone());
        let label = result.goal_type.clone();
        self.commit(profile, after, EntityType::Goal, label)?;
        Ok(result)
    }

    /// Validate, save and audit `after`, then make it the caller's profile
    ///
    /// `profile` is left untouched if any step fails.
    fn commit(
        &self,
        profile: &mut Profile,
        after: Profile,
        entity_type: EntityType,
        label: String,
    ) -> AdvisorResult<()> {
        after
            .validate()
            .map_err(|e| AdvisorError::Validation(format!("Result not saved: {}", e)))?;

        let previous = self.storage.profiles.get(&after.name)?;
        self.storage.profiles.upsert(after.clone())?;
        if let Err(e) = self.storage.profiles.save(&after.name) {
            match previous {
                Some(previous) => self.storage.profiles.upsert(previous)?,
                None => {
                    self.storage.profiles.delete(&after.name)?;
                }
            }
            return Err(e);
        }

        self.storage.log_update(
            entity_type,
            after.name.clone(),
            Some(label),
            &*profile,
            &after,
            snapshot_diff(profile, &after),
        )?;

        *profile = after;
        Ok(())
    }
}

fn snapshot_diff(before: &Profile, after: &Profile) -> Option<String> {
    let before = serde_json::to_value(before).ok()?;
    let after = serde_json::to_value(after).ok()?;
    generate_diff(&before, &after)
}

fn check_years(years: u32) -> AdvisorResult<()> {
    if years == 0 {
        return Err(AdvisorError::Validation(
            "Years must be at least 1".to_string(),
        ));
    }
    if years > MAX_YEARS {
        return Err(AdvisorError::Validation(format!(
            "Years must be at most {} (got {})",
            MAX_YEARS, years
        )));
    }
    Ok(())
}

fn check_amount(label: &str, value: f64) -> AdvisorResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AdvisorError::Validation(format!(
            "{} must be a non-negative number (got {})",
            label, value
        )));
    }
    Ok(())
}
