//! Profile repository for JSON storage
//!
//! Each profile lives in its own file, `<profiles_dir>/<name>.json`.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::AdvisorError;
use crate::models::Profile;

use super::file_io::{read_json_required, write_json_atomic};

/// Turn a profile name into a safe file stem
///
/// Letters, digits, spaces, `-` and `_` are kept; everything else becomes
/// `_`. An empty name maps to "User".
pub fn file_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() {
        "User".to_string()
    } else {
        stem
    }
}

/// Repository for profile persistence
pub struct ProfileRepository {
    dir: PathBuf,
    data: RwLock<BTreeMap<String, Profile>>,
}

impl ProfileRepository {
    /// Create a new profile repository rooted at `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(name)))
    }

    /// Load every profile file from disk
    pub fn load(&self) -> Result<(), AdvisorError> {
        let mut loaded = BTreeMap::new();

        if self.dir.exists() {
            let entries = fs::read_dir(&self.dir).map_err(|e| {
                AdvisorError::Storage(format!("Failed to read {}: {}", self.dir.display(), e))
            })?;

            for entry in entries {
                let path = entry
                    .map_err(|e| AdvisorError::Storage(format!("Failed to read entry: {}", e)))?
                    .path();
                if path.extension().and_then(|e| e.to_str()) != Some("json") {
                    continue;
                }
                let profile: Profile = read_json_required(&path)?;
                loaded.insert(file_stem(&profile.name), profile);
            }
        }

        let mut data = self.data.write().map_err(|e| {
            AdvisorError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = loaded;

        Ok(())
    }

    /// Write one profile to disk
    pub fn save(&self, name: &str) -> Result<(), AdvisorError> {
        let data = self.data.read().map_err(|e| {
            AdvisorError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let profile = data
            .get(&file_stem(name))
            .ok_or_else(|| AdvisorError::profile_not_found(name))?;

        write_json_atomic(self.path_for(name), profile)
    }

    /// Get a profile by name
    pub fn get(&self, name: &str) -> Result<Option<Profile>, AdvisorError> {
        let data = self.data.read().map_err(|e| {
            AdvisorError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&file_stem(name)).cloned())
    }

    /// Get a profile by name, ignoring case
    pub fn find(&self, name: &str) -> Result<Option<Profile>, AdvisorError> {
        if let Some(profile) = self.get(name)? {
            return Ok(Some(profile));
        }

        let data = self.data.read().map_err(|e| {
            AdvisorError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let wanted = file_stem(name).to_lowercase();
        Ok(data
            .iter()
            .find(|(stem, _)| stem.to_lowercase() == wanted)
            .map(|(_, profile)| profile.clone()))
    }

    /// All profiles, ordered by name
    pub fn get_all(&self) -> Result<Vec<Profile>, AdvisorError> {
        let data = self.data.read().map_err(|e| {
            AdvisorError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.values().cloned().collect())
    }

    /// Names of all stored profiles, ordered
    pub fn names(&self) -> Result<Vec<String>, AdvisorError> {
        Ok(self.get_all()?.into_iter().map(|p| p.name).collect())
    }

    /// Insert or update a profile (in memory; call `save` to persist)
    pub fn upsert(&self, profile: Profile) -> Result<(), AdvisorError> {
        let mut data = self.data.write().map_err(|e| {
            AdvisorError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(file_stem(&profile.name), profile);
        Ok(())
    }

    /// Remove a profile from memory and disk
    pub fn delete(&self, name: &str) -> Result<Option<Profile>, AdvisorError> {
        let mut data = self.data.write().map_err(|e| {
            AdvisorError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let removed = data.remove(&file_stem(name));
        if removed.is_some() {
            let path = self.path_for(name);
            if path.exists() {
                fs::remove_file(&path).map_err(|e| {
                    AdvisorError::Storage(format!("Failed to delete {}: {}", path.display(), e))
                })?;
            }
        }

        Ok(removed)
    }

    /// Check if a profile name is already taken
    pub fn exists(&self, name: &str) -> Result<bool, AdvisorError> {
        Ok(self.get(name)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinancialInputs, RiskResult, RiskStyle, Scenario, SimulationInput};
    use crate::services::{budget, goal, growth};
    use tempfile::TempDir;

    fn create_repo() -> (TempDir, ProfileRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ProfileRepository::new(temp_dir.path().join("profiles"));
        (temp_dir, repo)
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("Alice"), "Alice");
        assert_eq!(file_stem("  Mary Jane "), "Mary Jane");
        assert_eq!(file_stem("../etc/passwd"), "___etc_passwd");
        assert_eq!(file_stem(""), "User");
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp, repo) = create_repo();
        repo.upsert(Profile::new("Alice", 30, FinancialInputs::default()))
            .unwrap();

        assert!(repo.get("Alice").unwrap().is_some());
        assert!(repo.get("alice").unwrap().is_none());
        assert!(repo.find("alice").unwrap().is_some());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (temp, repo) = create_repo();

        let mut profile = Profile::new(
            "Alice",
            30,
            FinancialInputs {
                monthly_income: 4321.09,
                monthly_expenses: 2987.65,
                cash_savings: 0.1 + 0.2,
                total_debt: 12000.0,
                debt_apr: 19.99,
            },
        );
        profile.set_risk(RiskResult {
            score: 5,
            style: RiskStyle::Balanced,
        });
        profile.set_plan(budget::build_plan(&profile.finances, RiskStyle::Balanced));
        profile.set_simulation(growth::simulate(&SimulationInput {
            years: 10,
            monthly_contribution: 200.0,
            starting_balance: 1000.0,
            scenario: Scenario::Base,
        }));
        profile.set_goal(goal::plan_goal("Car", 10000.0, 3));

        repo.upsert(profile.clone()).unwrap();
        repo.save("Alice").unwrap();
        assert!(temp.path().join("profiles").join("Alice.json").exists());

        let reloaded = ProfileRepository::new(temp.path().join("profiles"));
        reloaded.load().unwrap();
        let loaded = reloaded.get("Alice").unwrap().unwrap();

        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_names_sorted() {
        let (_temp, repo) = create_repo();
        for name in ["Carol", "Alice", "Bob"] {
            repo.upsert(Profile::new(name, 40, FinancialInputs::default()))
                .unwrap();
        }
        assert_eq!(repo.names().unwrap(), vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_delete_removes_file() {
        let (temp, repo) = create_repo();
        repo.upsert(Profile::new("Alice", 30, FinancialInputs::default()))
            .unwrap();
        repo.save("Alice").unwrap();

        let removed = repo.delete("Alice").unwrap();
        assert!(removed.is_some());
        assert!(!temp.path().join("profiles").join("Alice.json").exists());
        assert!(repo.delete("Alice").unwrap().is_none());
    }

    #[test]
    fn test_load_ignores_other_files() {
        let (temp, repo) = create_repo();
        let dir = temp.path().join("profiles");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("notes.txt"), "hello").unwrap();

        repo.load().unwrap();
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_unknown_profile_fails() {
        let (_temp, repo) = create_repo();
        assert!(repo.save("Nobody").unwrap_err().is_not_found());
    }
}
