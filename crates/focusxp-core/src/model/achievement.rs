use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ProjectCategory, Record, StreakType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    Consistency,
    CategoryMaster,
    DifficultyChampion,
    Strategic,
}

/// What it takes to earn an achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Requirement {
    /// Reach `days` on the given streak.
    ConsecutiveDays { streak: StreakType, days: u32 },
    /// Log `hours` of completed focus in projects of one category.
    CategoryHours { category: ProjectCategory, hours: u32 },
    /// Complete `sessions` sessions whose difficulty label matches.
    DifficultySessions { label: String, sessions: u32 },
    /// Complete `projects` projects worth at least `min_value` (cost × benefit).
    StrategicCompletions { min_value: u32, projects: u32 },
}

impl Requirement {
    pub fn kind(&self) -> AchievementKind {
        match self {
            Requirement::ConsecutiveDays { .. } => AchievementKind::Consistency,
            Requirement::CategoryHours { .. } => AchievementKind::CategoryMaster,
            Requirement::DifficultySessions { .. } => AchievementKind::DifficultyChampion,
            Requirement::StrategicCompletions { .. } => AchievementKind::Strategic,
        }
    }

    pub fn target(&self) -> u32 {
        match self {
            Requirement::ConsecutiveDays { days, .. } => *days,
            Requirement::CategoryHours { hours, .. } => *hours,
            Requirement::DifficultySessions { sessions, .. } => *sessions,
            Requirement::StrategicCompletions { projects, .. } => *projects,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub requirement: Requirement,
    pub points_value: u32,
    #[serde(default)]
    pub icon: Option<String>,
    /// Set once, when earned.
    #[serde(default)]
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Achievement {
    pub fn kind(&self) -> AchievementKind {
        self.requirement.kind()
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }
}

impl Record for Achievement {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Read-only progress snapshot towards an achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementProgress {
    pub name: String,
    pub kind: AchievementKind,
    pub current: u32,
    pub target: u32,
    pub unlocked: bool,
}
