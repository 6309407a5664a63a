//! Storage layer for Wealth Advisor
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit log every change is recorded in.

pub mod file_io;
pub mod profiles;

pub use file_io::{read_json, read_json_required, write_json_atomic, write_text_atomic};
pub use profiles::{file_stem, ProfileRepository};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::AdvisorPaths;
use crate::error::AdvisorError;

/// Main storage coordinator
pub struct Storage {
    paths: AdvisorPaths,
    pub profiles: ProfileRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with audit logging enabled
    pub fn new(paths: AdvisorPaths) -> Result<Self, AdvisorError> {
        paths.ensure_directories()?;

        Ok(Self {
            profiles: ProfileRepository::new(paths.profiles_dir()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Turn audit logging off (e.g. when settings disable it)
    pub fn without_audit(mut self) -> Self {
        self.audit = None;
        self
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &AdvisorPaths {
        &self.paths
    }

    /// The audit logger, if auditing is enabled
    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), AdvisorError> {
        self.profiles.load()
    }

    fn log(&self, entry: AuditEntry) -> Result<(), AdvisorError> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }

    /// Record a create operation
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), AdvisorError> {
        self.log(AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update operation
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), AdvisorError> {
        self.log(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    /// Record a delete operation
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), AdvisorError> {
        self.log(AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    /// Record an export
    pub fn log_export(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        destination: impl Into<String>,
    ) -> Result<(), AdvisorError> {
        self.log(AuditEntry::export(entity_type, entity_id, destination))
    }
}
