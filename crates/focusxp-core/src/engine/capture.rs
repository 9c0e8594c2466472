use tracing::{debug, warn};
use uuid::Uuid;

use super::FocusEngine;
use crate::clock::Clock;
use crate::error::{Result, ValidationError};
use crate::model::{CaptureItem, CaptureSource, TriageOutcome};
use crate::storage::{Table, TableStore};

impl<S: TableStore, C: Clock> FocusEngine<S, C> {
    /// Park a thought for later triage.
    pub fn capture(&mut self, text: &str, source: CaptureSource) -> Result<CaptureItem> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "text".into(),
                message: "capture text is empty".into(),
            }
            .into());
        }

        let item = CaptureItem {
            id: Uuid::new_v4(),
            text: text.to_string(),
            source,
            created_at: self.now_utc(),
            triaged_at: None,
            outcome: None,
            resulting_project_id: None,
        };
        debug!(capture = %item.id, "captured");
        self.tables.append(Table::CaptureItems, item)
    }

    pub fn captures(&self) -> Vec<CaptureItem> {
        self.tables.read(Table::CaptureItems)
    }

    /// Captures still waiting for a decision, oldest first.
    pub fn untriaged(&self) -> Vec<CaptureItem> {
        self.captures()
            .into_iter()
            .filter(|c| !c.is_triaged())
            .collect()
    }

    /// Record the decision for a capture.
    ///
    /// Promoting to a project creates it and links it back. A capture that
    /// was already triaged is returned unchanged. Returns `None` when the
    /// capture does not exist.
    pub fn triage(&mut self, id: Uuid, outcome: TriageOutcome) -> Result<Option<CaptureItem>> {
        let Some(item) = self.tables.find::<CaptureItem>(Table::CaptureItems, id) else {
            warn!(capture = %id, "triage for unknown capture ignored");
            return Ok(None);
        };
        if item.is_triaged() {
            warn!(capture = %id, "capture already triaged");
            return Ok(Some(item));
        }

        let resulting_project_id = match &outcome {
            TriageOutcome::Project { project } => Some(self.create_project(project.clone())?.id),
            _ => None,
        };
        let now_utc = self.now_utc();
        debug!(capture = %id, decision = outcome.decision(), "capture triaged");

        self.tables.update(Table::CaptureItems, id, |c: &mut CaptureItem| {
            c.triaged_at = Some(now_utc);
            c.outcome = Some(outcome);
            c.resulting_project_id = resulting_project_id;
        })
    }
}
