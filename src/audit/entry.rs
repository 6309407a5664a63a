//! One line of the audit log
//!
//! Each entry records what happened (`Operation`) to which part of a profile
//! (`EntityType`), keyed by the profile name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
    /// Written out to a file (report or export)
    Export,
}

impl Operation {
    fn label(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Export => "EXPORT",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The profile itself or one of its result sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Profile,
    Risk,
    Plan,
    Simulation,
    Goal,
    Report,
}

impl EntityType {
    fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Risk => "Risk",
            Self::Plan => "Plan",
            Self::Simulation => "Simulation",
            Self::Goal => "Goal",
            Self::Report => "Report",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Serialized as one JSON object per line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Profile name
    pub entity_id: String,

    /// Short note such as "Growth (8)" or "Base scenario, 10 years"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Profile snapshot before an update or delete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Profile snapshot after a create or update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Field-level changes, or the destination of an export
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

fn snapshot<T: Serialize>(value: &T) -> Option<serde_json::Value> {
    serde_json::to_value(value).ok()
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            after: snapshot(entity),
            ..Self::new(Operation::Create, entity_type, entity_id, entity_name)
        }
    }

    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            before: snapshot(before),
            after: snapshot(after),
            diff_summary,
            ..Self::new(Operation::Update, entity_type, entity_id, entity_name)
        }
    }

    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            before: snapshot(entity),
            ..Self::new(Operation::Delete, entity_type, entity_id, entity_name)
        }
    }

    /// No snapshots; the destination goes in `diff_summary`
    pub fn export(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            diff_summary: Some(format!("written to {}", destination.into())),
            ..Self::new(Operation::Export, entity_type, entity_id, None)
        }
    }

    /// `[time] OPERATION Entity profile (note)` plus an indented changes line
    pub fn format_human_readable(&self) -> String {
        let mut line = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );
        if let Some(note) = &self.entity_name {
            line.push_str(&format!(" ({})", note));
        }
        if let Some(changes) = &self.diff_summary {
            line.push_str(&format!("\n  Changes: {}", changes));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Export.to_string(), "EXPORT");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"name": "Alice", "age": 30});
        let entry = AuditEntry::create(EntityType::Profile, "Alice", None, &data);

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Profile);
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_update_entry() {
        let before = json!({"risk_score": 2});
        let after = json!({"risk_score": 7});

        let entry = AuditEntry::update(
            EntityType::Risk,
            "Alice",
            Some("Growth".to_string()),
            &before,
            &after,
            Some("risk_score: 2 -> 7".to_string()),
        );

        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_some());
        assert!(entry.after.is_some());
        assert_eq!(entry.diff_summary.as_deref(), Some("risk_score: 2 -> 7"));
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(EntityType::Profile, "Alice", None, &json!({}));
        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_export_entry() {
        let entry = AuditEntry::export(EntityType::Report, "Alice", "/tmp/Alice_report.txt");
        assert_eq!(entry.operation, Operation::Export);
        assert!(entry
            .diff_summary
            .unwrap()
            .contains("/tmp/Alice_report.txt"));
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(EntityType::Goal, "Alice", None, &json!({"target": 1}));

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"entity_type\":\"goal\""));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.entity_type, EntityType::Goal);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::create(
            EntityType::Simulation,
            "Alice",
            Some("Base, 10 years".to_string()),
            &json!({}),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE"));
        assert!(formatted.contains("Simulation"));
        assert!(formatted.contains("Alice"));
        assert!(formatted.contains("Base, 10 years"));
    }
}
