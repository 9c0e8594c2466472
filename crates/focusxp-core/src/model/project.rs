//! Projects and their status audit trail.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;
use crate::error::ValidationError;

/// Lower bound for cost and benefit scores.
pub const MIN_SCORE: u8 = 1;
/// Upper bound for cost and benefit scores.
pub const MAX_SCORE: u8 = 10;

/// Clamp a cost or benefit score into `[MIN_SCORE, MAX_SCORE]`.
pub fn clamp_score(value: u8) -> u8 {
    value.clamp(MIN_SCORE, MAX_SCORE)
}

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Active,
    Inactive,
    ParkingLot,
    Completed,
    Graveyard,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Inactive => "inactive",
            ProjectStatus::ParkingLot => "parking_lot",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Graveyard => "graveyard",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProjectStatus::Active),
            "inactive" => Ok(ProjectStatus::Inactive),
            "parking_lot" => Ok(ProjectStatus::ParkingLot),
            "completed" => Ok(ProjectStatus::Completed),
            "graveyard" => Ok(ProjectStatus::Graveyard),
            other => Err(ValidationError::UnknownVariant {
                field: "status",
                value: other.to_string(),
                expected: "active, inactive, parking_lot, completed, graveyard",
            }),
        }
    }
}

/// Life area a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    #[default]
    Work,
    Growth,
    Projects,
    Life,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Work => "work",
            ProjectCategory::Growth => "growth",
            ProjectCategory::Projects => "projects",
            ProjectCategory::Life => "life",
        }
    }
}

impl FromStr for ProjectCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(ProjectCategory::Work),
            "growth" => Ok(ProjectCategory::Growth),
            "projects" => Ok(ProjectCategory::Projects),
            "life" => Ok(ProjectCategory::Life),
            other => Err(ValidationError::UnknownVariant {
                field: "category",
                value: other.to_string(),
                expected: "work, growth, projects, life",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectPriority {
    MustDo,
    #[default]
    ShouldDo,
    NiceToHave,
}

impl FromStr for ProjectPriority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "must_do" => Ok(ProjectPriority::MustDo),
            "should_do" => Ok(ProjectPriority::ShouldDo),
            "nice_to_have" => Ok(ProjectPriority::NiceToHave),
            other => Err(ValidationError::UnknownVariant {
                field: "priority",
                value: other.to_string(),
                expected: "must_do, should_do, nice_to_have",
            }),
        }
    }
}

/// A project that focus sessions are booked against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub cost: u8,
    pub benefit: u8,
    pub priority: ProjectPriority,
    pub status: ProjectStatus,
    pub category: ProjectCategory,
    #[serde(default)]
    pub custom_tags: Vec<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completion_week: Option<u32>,
    /// Year `completion_week` counts from.
    #[serde(default)]
    pub completion_year: Option<i32>,
    /// Accumulated minutes of completed sessions.
    pub total_focus_time: u32,
    pub session_count: u32,
    #[serde(default)]
    pub lessons_learned: Option<String>,
}

impl Project {
    /// Cost × benefit, the basis of completion XP.
    pub fn strategic_value(&self) -> u32 {
        u32::from(self.cost) * u32::from(self.benefit)
    }
}

impl Record for Project {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Input for creating a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub cost: u8,
    pub benefit: u8,
    #[serde(default)]
    pub priority: ProjectPriority,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub category: ProjectCategory,
    #[serde(default)]
    pub custom_tags: Vec<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

impl NewProject {
    pub fn new(title: impl Into<String>, cost: u8, benefit: u8) -> Self {
        Self {
            title: title.into(),
            description: None,
            cost,
            benefit,
            priority: ProjectPriority::default(),
            status: ProjectStatus::default(),
            category: ProjectCategory::default(),
            custom_tags: Vec::new(),
            due_date: None,
        }
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(mut self, category: ProjectCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_priority(mut self, priority: ProjectPriority) -> Self {
        self.priority = priority;
        self
    }

    pub(crate) fn into_project(self, now: DateTime<Utc>) -> Project {
        Project {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            cost: clamp_score(self.cost),
            benefit: clamp_score(self.benefit),
            priority: self.priority,
            status: self.status,
            category: self.category,
            custom_tags: self.custom_tags,
            due_date: self.due_date,
            created_at: now,
            updated_at: now,
            completed_at: None,
            completion_week: None,
            completion_year: None,
            total_focus_time: 0,
            session_count: 0,
            lessons_learned: None,
        }
    }
}

/// Partial update for a project. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub cost: Option<u8>,
    pub benefit: Option<u8>,
    pub priority: Option<ProjectPriority>,
    pub status: Option<ProjectStatus>,
    pub category: Option<ProjectCategory>,
    pub custom_tags: Option<Vec<String>>,
    pub due_date: Option<DateTime<Utc>>,
    pub lessons_learned: Option<String>,
}

impl ProjectUpdate {
    pub fn status(status: ProjectStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Apply every field except `status`, which the caller handles because
    /// status changes carry side effects.
    pub(crate) fn apply_fields(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = Some(description);
        }
        if let Some(cost) = self.cost {
            project.cost = clamp_score(cost);
        }
        if let Some(benefit) = self.benefit {
            project.benefit = clamp_score(benefit);
        }
        if let Some(priority) = self.priority {
            project.priority = priority;
        }
        if let Some(category) = self.category {
            project.category = category;
        }
        if let Some(tags) = self.custom_tags {
            project.custom_tags = tags;
        }
        if let Some(due) = self.due_date {
            project.due_date = Some(due);
        }
        if let Some(lessons) = self.lessons_learned {
            project.lessons_learned = Some(lessons);
        }
    }
}

/// Immutable audit entry written on creation and every status change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTransition {
    pub id: Uuid,
    pub project_id: Uuid,
    pub from_status: Option<ProjectStatus>,
    pub to_status: ProjectStatus,
    pub transitioned_at: DateTime<Utc>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl Record for ProjectTransition {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_are_clamped_on_creation() {
        let project = NewProject::new("Thesis", 0, 42).into_project(Utc::now());
        assert_eq!(project.cost, 1);
        assert_eq!(project.benefit, 10);
        assert_eq!(project.total_focus_time, 0);
        assert_eq!(project.session_count, 0);
    }

    #[test]
    fn update_clamps_and_skips_status() {
        let mut project = NewProject::new("Thesis", 5, 5).into_project(Utc::now());
        let update = ProjectUpdate {
            cost: Some(11),
            status: Some(ProjectStatus::Completed),
            title: Some("Dissertation".into()),
            ..Default::default()
        };
        update.apply_fields(&mut project);
        assert_eq!(project.cost, 10);
        assert_eq!(project.title, "Dissertation");
        assert_eq!(project.status, ProjectStatus::Active);
    }

    #[test]
    fn status_parses_snake_case() {
        assert_eq!(
            "parking_lot".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::ParkingLot
        );
        assert!("archived".parse::<ProjectStatus>().is_err());
        assert_eq!(ProjectStatus::Graveyard.to_string(), "graveyard");
    }

    #[test]
    fn status_serializes_as_snake_case() {
        let json = serde_json::to_string(&ProjectStatus::ParkingLot).unwrap();
        assert_eq!(json, "\"parking_lot\"");
    }
}
