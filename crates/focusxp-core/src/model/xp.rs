use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XpSource {
    Session,
    Completion,
}

/// Multipliers that produced a session award.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XpMultipliers {
    pub difficulty: f64,
    pub daily_position: f64,
    pub bonus: f64,
}

/// One append-only ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XpLogEntry {
    pub id: Uuid,
    pub points_earned: u32,
    pub source: XpSource,
    pub source_id: Uuid,
    #[serde(default)]
    pub multipliers: Option<XpMultipliers>,
    pub earned_at: DateTime<Utc>,
    pub week_number: u32,
    pub week_year: i32,
}

impl Record for XpLogEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}
