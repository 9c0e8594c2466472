use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{NewProject, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CaptureSource {
    #[default]
    Manual,
    Hotkey,
}

/// Triage decision together with the data that decision needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum TriageOutcome {
    /// Promote the capture to a full project.
    Project { project: NewProject },
    /// Small enough to do without a project.
    QuickTask { title: String },
    /// Hand off somewhere else (another tool, a person).
    Routed { destination: String },
    Deleted,
}

impl TriageOutcome {
    pub fn decision(&self) -> &'static str {
        match self {
            TriageOutcome::Project { .. } => "project",
            TriageOutcome::QuickTask { .. } => "quick_task",
            TriageOutcome::Routed { .. } => "routed",
            TriageOutcome::Deleted => "deleted",
        }
    }
}

/// A stray thought captured during focus, waiting for triage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureItem {
    pub id: Uuid,
    pub text: String,
    pub source: CaptureSource,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub triaged_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub outcome: Option<TriageOutcome>,
    #[serde(default)]
    pub resulting_project_id: Option<Uuid>,
}

impl CaptureItem {
    pub fn is_triaged(&self) -> bool {
        self.triaged_at.is_some()
    }
}

impl Record for CaptureItem {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_tagged_by_decision() {
        let outcome = TriageOutcome::Routed {
            destination: "inbox".into(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["decision"], "routed");
        assert_eq!(json["destination"], "inbox");

        let parsed: TriageOutcome = serde_json::from_str(r#"{"decision":"deleted"}"#).unwrap();
        assert_eq!(parsed, TriageOutcome::Deleted);
    }
}
