//! Achievement catalogue and unlock evaluation.
//!
//! Unlocking is one-way: `unlocked_at` is written once and never cleared.
//! Only consecutive-day rules unlock in this version; the other catalogue
//! entries report progress but stay locked.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::model::{
    Achievement, AchievementProgress, FocusSession, Project, ProjectCategory, ProjectStatus,
    Requirement, StreakType,
};
use crate::streak::StreakTracker;

/// The achievements seeded into an empty store.
pub fn default_catalogue() -> Vec<Achievement> {
    vec![
        Achievement {
            id: Uuid::new_v4(),
            name: "Iron Will".into(),
            description: "21 consecutive days of focus sessions".into(),
            requirement: Requirement::ConsecutiveDays {
                streak: StreakType::DailySessions,
                days: 21,
            },
            points_value: 500,
            icon: Some("🏆".into()),
            unlocked_at: None,
        },
        Achievement {
            id: Uuid::new_v4(),
            name: "Career Climber".into(),
            description: "100 hours in Work category".into(),
            requirement: Requirement::CategoryHours {
                category: ProjectCategory::Work,
                hours: 100,
            },
            points_value: 1000,
            icon: Some("💼".into()),
            unlocked_at: None,
        },
        Achievement {
            id: Uuid::new_v4(),
            name: "Balls of Steel Legend".into(),
            description: "25 sessions at highest difficulty".into(),
            requirement: Requirement::DifficultySessions {
                label: "Balls of Steel".into(),
                sessions: 25,
            },
            points_value: 750,
            icon: Some("⚪".into()),
            unlocked_at: None,
        },
    ]
}

/// Derived state the rules are checked against.
#[derive(Debug, Clone, Default)]
pub struct AchievementSnapshot {
    streaks: HashMap<StreakType, u32>,
    category_minutes: HashMap<ProjectCategory, u32>,
    difficulty_sessions: HashMap<String, u32>,
    completed_values: Vec<u32>,
}

impl AchievementSnapshot {
    pub fn new(streaks: &StreakTracker, projects: &[Project], sessions: &[FocusSession]) -> Self {
        let streaks = streaks
            .records()
            .iter()
            .map(|r| (r.streak_type, r.current_streak))
            .collect();

        let mut category_minutes = HashMap::new();
        for project in projects {
            *category_minutes.entry(project.category).or_insert(0) += project.total_focus_time;
        }

        let mut difficulty_sessions = HashMap::new();
        for session in sessions.iter().filter(|s| s.is_completed()) {
            *difficulty_sessions
                .entry(session.difficulty_label.clone())
                .or_insert(0) += 1;
        }

        let completed_values = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .map(Project::strategic_value)
            .collect();

        Self {
            streaks,
            category_minutes,
            difficulty_sessions,
            completed_values,
        }
    }

    /// Current value measured in the requirement's own unit.
    pub fn current(&self, requirement: &Requirement) -> u32 {
        match requirement {
            Requirement::ConsecutiveDays { streak, .. } => {
                self.streaks.get(streak).copied().unwrap_or(0)
            }
            Requirement::CategoryHours { category, .. } => {
                self.category_minutes.get(category).copied().unwrap_or(0) / 60
            }
            Requirement::DifficultySessions { label, .. } => {
                self.difficulty_sessions.get(label).copied().unwrap_or(0)
            }
            Requirement::StrategicCompletions { min_value, .. } => self
                .completed_values
                .iter()
                .filter(|v| **v >= *min_value)
                .count() as u32,
        }
    }
}

fn unlocks(requirement: &Requirement) -> bool {
    matches!(requirement, Requirement::ConsecutiveDays { .. })
}

/// Checks a catalogue against a snapshot.
pub struct AchievementEvaluator<'a> {
    snapshot: &'a AchievementSnapshot,
}

impl<'a> AchievementEvaluator<'a> {
    pub fn new(snapshot: &'a AchievementSnapshot) -> Self {
        Self { snapshot }
    }

    /// Unlock every locked achievement whose rule is satisfied.
    ///
    /// Returns only the newly unlocked entries.
    pub fn evaluate(&self, catalogue: &mut [Achievement], now: DateTime<Utc>) -> Vec<Achievement> {
        let mut unlocked = Vec::new();
        for achievement in catalogue.iter_mut().filter(|a| !a.is_unlocked()) {
            let requirement = &achievement.requirement;
            if unlocks(requirement) && self.snapshot.current(requirement) >= requirement.target() {
                achievement.unlocked_at = Some(now);
                info!(name = %achievement.name, points = achievement.points_value, "achievement unlocked");
                unlocked.push(achievement.clone());
            }
        }
        unlocked
    }

    pub fn progress(&self, catalogue: &[Achievement]) -> Vec<AchievementProgress> {
        catalogue
            .iter()
            .map(|a| AchievementProgress {
                name: a.name.clone(),
                kind: a.kind(),
                current: self.snapshot.current(&a.requirement),
                target: a.requirement.target(),
                unlocked: a.is_unlocked(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tracker_with_streak(days: u32) -> StreakTracker {
        let mut tracker = StreakTracker::default();
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        for offset in 0..days {
            tracker.advance(
                StreakType::DailySessions,
                start + chrono::Duration::days(i64::from(offset)),
            );
        }
        tracker
    }

    #[test]
    fn catalogue_has_three_locked_entries() {
        let catalogue = default_catalogue();
        assert_eq!(catalogue.len(), 3);
        assert!(catalogue.iter().all(|a| !a.is_unlocked()));
        assert_eq!(catalogue[0].name, "Iron Will");
    }

    #[test]
    fn iron_will_needs_twenty_one_days() {
        let mut catalogue = default_catalogue();

        let snapshot = AchievementSnapshot::new(&tracker_with_streak(20), &[], &[]);
        let unlocked = AchievementEvaluator::new(&snapshot).evaluate(&mut catalogue, Utc::now());
        assert!(unlocked.is_empty());

        let snapshot = AchievementSnapshot::new(&tracker_with_streak(21), &[], &[]);
        let evaluator = AchievementEvaluator::new(&snapshot);
        let unlocked = evaluator.evaluate(&mut catalogue, Utc::now());
        assert_eq!(unlocked.len(), 1);
        assert_eq!(unlocked[0].name, "Iron Will");

        let first_unlock = catalogue[0].unlocked_at;
        assert!(evaluator.evaluate(&mut catalogue, Utc::now()).is_empty());
        assert_eq!(catalogue[0].unlocked_at, first_unlock);
    }

    #[test]
    fn progress_reports_every_entry() {
        let catalogue = default_catalogue();
        let snapshot = AchievementSnapshot::new(&tracker_with_streak(5), &[], &[]);
        let progress = AchievementEvaluator::new(&snapshot).progress(&catalogue);
        assert_eq!(progress.len(), 3);
        assert_eq!(progress[0].current, 5);
        assert_eq!(progress[0].target, 21);
        assert_eq!(progress[1].current, 0);
        assert_eq!(progress[2].target, 25);
    }

    #[test]
    fn strategic_completions_count_valuable_projects() {
        let now = Utc::now();
        let mut big = crate::model::NewProject::new("Big", 8, 9).into_project(now);
        big.status = ProjectStatus::Completed;
        let mut small = crate::model::NewProject::new("Small", 2, 2).into_project(now);
        small.status = ProjectStatus::Completed;
        let open = crate::model::NewProject::new("Open", 9, 9).into_project(now);

        let snapshot = AchievementSnapshot::new(&StreakTracker::default(), &[big, small, open], &[]);
        let requirement = Requirement::StrategicCompletions {
            min_value: 50,
            projects: 3,
        };
        assert_eq!(snapshot.current(&requirement), 1);
        assert_eq!(requirement.kind(), crate::model::AchievementKind::Strategic);
    }
}
