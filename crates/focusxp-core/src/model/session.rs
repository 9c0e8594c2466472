//! Focus sessions and the self-reported inputs that score them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;
use crate::error::ValidationError;

/// Pre-session willpower check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WillpowerLevel {
    High,
    Medium,
    Low,
}

impl WillpowerLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WillpowerLevel::High => "high",
            WillpowerLevel::Medium => "medium",
            WillpowerLevel::Low => "low",
        }
    }
}

impl fmt::Display for WillpowerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WillpowerLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(WillpowerLevel::High),
            "medium" => Ok(WillpowerLevel::Medium),
            "low" => Ok(WillpowerLevel::Low),
            other => Err(ValidationError::UnknownVariant {
                field: "willpower",
                value: other.to_string(),
                expected: "high, medium, low",
            }),
        }
    }
}

/// Session length chosen when committing to a session.
///
/// `Mixed` is accepted for daily objectives but scores as a 60 minute block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionLength {
    Short,
    Standard,
    Long,
    Mixed,
}

impl SessionLength {
    pub fn minutes(&self) -> u32 {
        match self {
            SessionLength::Short => 25,
            SessionLength::Standard | SessionLength::Mixed => 60,
            SessionLength::Long => 90,
        }
    }
}

impl FromStr for SessionLength {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "25" | "short" => Ok(SessionLength::Short),
            "60" | "standard" => Ok(SessionLength::Standard),
            "90" | "long" => Ok(SessionLength::Long),
            "mixed" => Ok(SessionLength::Mixed),
            other => Err(ValidationError::UnknownVariant {
                field: "duration",
                value: other.to_string(),
                expected: "25, 60, 90, mixed",
            }),
        }
    }
}

/// Post-session quality self-assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityRating {
    Excellent,
    Good,
    Average,
    Challenging,
    Bad,
}

impl QualityRating {
    /// Flat XP bonus added before multipliers.
    pub fn bonus(&self) -> u32 {
        match self {
            QualityRating::Excellent => 10,
            QualityRating::Good => 5,
            QualityRating::Challenging => 2,
            QualityRating::Average | QualityRating::Bad => 0,
        }
    }

    /// Numeric score used for averages (excellent 5 .. bad 1).
    pub fn score(&self) -> u32 {
        match self {
            QualityRating::Excellent => 5,
            QualityRating::Good => 4,
            QualityRating::Average => 3,
            QualityRating::Challenging => 2,
            QualityRating::Bad => 1,
        }
    }
}

impl FromStr for QualityRating {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excellent" => Ok(QualityRating::Excellent),
            "good" => Ok(QualityRating::Good),
            "average" => Ok(QualityRating::Average),
            "challenging" => Ok(QualityRating::Challenging),
            "bad" => Ok(QualityRating::Bad),
            other => Err(ValidationError::UnknownVariant {
                field: "quality",
                value: other.to_string(),
                expected: "excellent, good, average, challenging, bad",
            }),
        }
    }
}

/// Post-session energy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    FiredUp,
    NeedBreak,
    Spent,
}

impl FromStr for EnergyLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fired_up" => Ok(EnergyLevel::FiredUp),
            "need_break" => Ok(EnergyLevel::NeedBreak),
            "spent" => Ok(EnergyLevel::Spent),
            other => Err(ValidationError::UnknownVariant {
                field: "energy",
                value: other.to_string(),
                expected: "fired_up, need_break, spent",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    Completed,
    Interrupted,
}

/// Coarse bucket of the hour a session started in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn of<T: Timelike>(at: &T) -> Self {
        Self::from_hour(at.hour())
    }
}

/// A recorded focus session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusSession {
    pub id: Uuid,
    pub project_id: Uuid,
    #[serde(default)]
    pub daily_objective_id: Option<Uuid>,
    /// Planned minutes.
    pub planned_duration: u32,
    /// Minutes actually spent.
    pub actual_duration: u32,
    pub willpower_level: WillpowerLevel,
    #[serde(default)]
    pub energy_level: Option<EnergyLevel>,
    #[serde(default)]
    pub quality_rating: Option<QualityRating>,
    pub difficulty_label: String,
    #[serde(default)]
    pub difficulty_multiplier: Option<f64>,
    /// 1-based ordinal among sessions started the same calendar day.
    pub session_number_today: u32,
    pub completion_status: CompletionStatus,
    #[serde(default)]
    pub interruption_reason: Option<String>,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub time_of_day: TimeOfDay,
    /// 0 = Sunday.
    pub day_of_week: u32,
    pub week_number: u32,
}

impl FocusSession {
    pub fn is_completed(&self) -> bool {
        self.completion_status == CompletionStatus::Completed
    }
}

impl Record for FocusSession {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Input for recording a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSession {
    pub project_id: Uuid,
    pub planned_duration: u32,
    pub actual_duration: u32,
    pub willpower_level: WillpowerLevel,
    pub quality_rating: Option<QualityRating>,
    pub energy_level: Option<EnergyLevel>,
    pub completion_status: CompletionStatus,
    pub interruption_reason: Option<String>,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}

/// An in-flight session between `start_session` and `end_session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHandle {
    pub id: Uuid,
    pub project_id: Uuid,
    pub planned_duration: u32,
    pub willpower_level: WillpowerLevel,
    pub started_at: DateTime<Utc>,
}

impl SessionHandle {
    /// Minutes elapsed since the session started.
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> i64 {
        now.signed_duration_since(self.started_at).num_minutes()
    }
}

impl Record for SessionHandle {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// What ending a session produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// `None` when the session could not be recorded.
    pub session: Option<FocusSession>,
    pub xp_awarded: u32,
    pub weekly_total: u64,
}
