use tracing::{info, warn};
use uuid::Uuid;

use super::FocusEngine;
use crate::clock::Clock;
use crate::error::Result;
use crate::model::{
    NewProject, Project, ProjectStatus, ProjectTransition, ProjectUpdate, XpLogEntry,
};
use crate::scoring::WeekTag;
use crate::storage::{Table, TableStore};

impl<S: TableStore, C: Clock> FocusEngine<S, C> {
    /// Create a project and log its initial status.
    ///
    /// Creating a project directly as `completed` awards nothing; completion
    /// XP is tied to the status change.
    pub fn create_project(&mut self, input: NewProject) -> Result<Project> {
        let project = input.into_project(self.now_utc());
        self.tables
            .check::<ProjectTransition>(Table::ProjectTransitions)?;
        self.tables.append(Table::Projects, project.clone())?;
        self.track_transition(project.id, None, project.status)?;
        Ok(project)
    }

    /// Apply a partial update.
    ///
    /// A status change logs a transition. Moving into `completed` also stamps
    /// the completion time, week and year and awards completion XP based on the
    /// cost and benefit the project had before this update.
    /// Returns `None` when the project does not exist.
    pub fn update_project(&mut self, id: Uuid, update: ProjectUpdate) -> Result<Option<Project>> {
        let Some(old) = self.project(id) else {
            warn!(project = %id, "update for unknown project ignored");
            return Ok(None);
        };

        let now = self.now();
        let now_utc = self.now_utc();
        let new_status = update.status.filter(|s| *s != old.status);

        if new_status.is_some() {
            self.tables
                .check::<ProjectTransition>(Table::ProjectTransitions)?;
        }
        if new_status == Some(ProjectStatus::Completed) {
            self.tables.check::<XpLogEntry>(Table::XpLogs)?;
        }

        if let Some(status) = new_status {
            self.track_transition(id, Some(old.status), status)?;
            if status == ProjectStatus::Completed {
                self.award_completion_xp(&old)?;
                info!(project = %id, title = %old.title, "project completed");
            }
        }

        self.tables.update(Table::Projects, id, |p: &mut Project| {
            update.apply_fields(p);
            if let Some(status) = new_status {
                p.status = status;
                if status == ProjectStatus::Completed {
                    p.completed_at = Some(now_utc);
                    let week = WeekTag::of(now);
                    p.completion_week = Some(week.week);
                    p.completion_year = Some(week.year);
                }
            }
            p.updated_at = now_utc;
        })
    }

    pub fn update_project_status(
        &mut self,
        id: Uuid,
        status: ProjectStatus,
    ) -> Result<Option<Project>> {
        self.update_project(id, ProjectUpdate::status(status))
    }

    /// Remove a project. Its sessions, transitions and XP stay.
    pub fn delete_project(&mut self, id: Uuid) -> Result<bool> {
        self.tables.delete::<Project>(Table::Projects, id)
    }

    pub fn project(&self, id: Uuid) -> Option<Project> {
        self.tables.find(Table::Projects, id)
    }

    /// All projects, optionally filtered by status.
    pub fn projects(&self, status: Option<ProjectStatus>) -> Vec<Project> {
        let projects: Vec<Project> = self.tables.read(Table::Projects);
        match status {
            Some(status) => projects.into_iter().filter(|p| p.status == status).collect(),
            None => projects,
        }
    }

    pub fn active_projects(&self) -> Vec<Project> {
        self.projects(Some(ProjectStatus::Active))
    }

    /// Status history of a project, oldest first.
    pub fn project_transitions(&self, project_id: Uuid) -> Vec<ProjectTransition> {
        self.tables
            .read::<ProjectTransition>(Table::ProjectTransitions)
            .into_iter()
            .filter(|t| t.project_id == project_id)
            .collect()
    }

    fn track_transition(
        &mut self,
        project_id: Uuid,
        from_status: Option<ProjectStatus>,
        to_status: ProjectStatus,
    ) -> Result<()> {
        let transition = ProjectTransition {
            id: Uuid::new_v4(),
            project_id,
            from_status,
            to_status,
            transitioned_at: self.now_utc(),
            reason: None,
        };
        self.tables.append(Table::ProjectTransitions, transition)?;
        Ok(())
    }

    /// Add a completed session's minutes to its project's aggregates.
    pub(super) fn record_focus(&mut self, project_id: Uuid, minutes: u32) -> Result<Option<Project>> {
        let now_utc = self.now_utc();
        self.tables.update(Table::Projects, project_id, |p: &mut Project| {
            p.total_focus_time = p.total_focus_time.saturating_add(minutes);
            p.session_count = p.session_count.saturating_add(1);
            p.updated_at = now_utc;
        })
    }
}
