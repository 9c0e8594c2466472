//! Persisted entities.

mod achievement;
mod capture;
mod objective;
mod project;
mod session;
mod streak;
mod xp;

use uuid::Uuid;

pub use achievement::{Achievement, AchievementKind, AchievementProgress, Requirement};
pub use capture::{CaptureItem, CaptureSource, TriageOutcome};
pub use objective::DailyObjective;
pub use project::{
    clamp_score, NewProject, Project, ProjectCategory, ProjectPriority, ProjectStatus,
    ProjectTransition, ProjectUpdate, MAX_SCORE, MIN_SCORE,
};
pub use session::{
    CompletionStatus, EnergyLevel, FocusSession, NewSession, QualityRating, SessionHandle,
    SessionLength, SessionOutcome, TimeOfDay, WillpowerLevel,
};
pub use streak::{StreakRecord, StreakType};
pub use xp::{XpLogEntry, XpMultipliers, XpSource};

/// A row that can be addressed by id inside a table.
pub trait Record {
    fn id(&self) -> Uuid;
}
