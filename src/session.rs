//! Session context
//!
//! Holds the active profile and explanation mode for one run of the
//! program. Commands and the interactive menu receive it by reference.

use crate::config::Settings;
use crate::error::{AdvisorError, AdvisorResult};
use crate::models::{ExplanationMode, Profile};
use crate::services::ProfileService;
use crate::storage::Storage;

/// Active profile and explanation mode
#[derive(Debug, Clone, Default)]
pub struct Session {
    profile: Option<Profile>,
    pub mode: ExplanationMode,
}

impl Session {
    /// Empty session in the given mode
    pub fn new(mode: ExplanationMode) -> Self {
        Self {
            profile: None,
            mode,
        }
    }

    /// Build a session from saved settings
    ///
    /// An explicit `profile` name must exist. Otherwise the settings'
    /// active profile is used if it is still on disk.
    pub fn resolve(
        storage: &Storage,
        settings: &Settings,
        profile: Option<&str>,
    ) -> AdvisorResult<Self> {
        let service = ProfileService::new(storage);
        let mut session = Self::new(settings.explanation_mode);

        session.profile = match (profile, settings.active_profile.as_deref()) {
            (Some(name), _) => Some(service.get(name)?),
            (None, Some(active)) => storage.profiles.find(active)?,
            (None, None) => None,
        };

        Ok(session)
    }

    /// Make `profile` the active one
    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = Some(profile);
    }

    /// Name of the active profile, if any
    pub fn profile_name(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.name.as_str())
    }

    /// The active profile, or `MissingProfile`
    pub fn profile(&self) -> AdvisorResult<&Profile> {
        self.profile.as_ref().ok_or(AdvisorError::MissingProfile)
    }

    /// The active profile for modification, or `MissingProfile`
    pub fn profile_mut(&mut self) -> AdvisorResult<&mut Profile> {
        self.profile.as_mut().ok_or(AdvisorError::MissingProfile)
    }
}
