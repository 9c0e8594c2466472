use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Category of activity a streak counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakType {
    /// At least one completed focus session per day.
    DailySessions,
}

impl StreakType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreakType::DailySessions => "daily_sessions",
        }
    }
}

impl fmt::Display for StreakType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StreakType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily_sessions" => Ok(StreakType::DailySessions),
            other => Err(ValidationError::UnknownVariant {
                field: "streak type",
                value: other.to_string(),
                expected: "daily_sessions",
            }),
        }
    }
}

/// Persisted streak counters, one per streak type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRecord {
    pub streak_type: StreakType,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub streak_start_date: NaiveDate,
    pub last_activity_date: NaiveDate,
}
