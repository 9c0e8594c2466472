use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;

/// The day's commitment: how many sessions of what length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyObjective {
    pub id: Uuid,
    pub date: NaiveDate,
    pub session_count: u32,
    pub session_duration: u32,
    pub created_at: DateTime<Utc>,
    pub completed_sessions: u32,
    pub total_minutes_planned: u32,
    pub total_minutes_actual: u32,
}

impl DailyObjective {
    pub fn is_met(&self) -> bool {
        self.completed_sessions >= self.session_count
    }
}

impl Record for DailyObjective {
    fn id(&self) -> Uuid {
        self.id
    }
}
