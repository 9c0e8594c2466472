use chrono::{Datelike, Local, NaiveDate};
use tracing::{debug, warn};
use uuid::Uuid;

use super::FocusEngine;
use crate::clock::Clock;
use crate::error::{CoreError, Result};
use crate::model::{
    CompletionStatus, EnergyLevel, FocusSession, NewSession, QualityRating, SessionHandle,
    SessionLength, SessionOutcome, StreakType, TimeOfDay, WillpowerLevel, XpLogEntry,
};
use crate::scoring::{resolve, week_number};
use crate::storage::{Table, TableStore};

impl<S: TableStore, C: Clock> FocusEngine<S, C> {
    /// Begin a session against an existing project.
    ///
    /// The handle is persisted so a later process can end it. Starting a new
    /// session replaces any session still in flight.
    pub fn start_session(
        &mut self,
        project_id: Uuid,
        length: SessionLength,
        willpower: WillpowerLevel,
    ) -> Result<SessionHandle> {
        if self.project(project_id).is_none() {
            return Err(CoreError::not_found("project", project_id));
        }
        if let Some(previous) = self.active_session() {
            warn!(session = %previous.id, "replacing session still in flight");
        }

        let handle = SessionHandle {
            id: Uuid::new_v4(),
            project_id,
            planned_duration: length.minutes(),
            willpower_level: willpower,
            started_at: self.now_utc(),
        };
        self.tables
            .write(Table::ActiveSession, std::slice::from_ref(&handle))?;
        debug!(session = %handle.id, planned = handle.planned_duration, "session started");
        Ok(handle)
    }

    /// The session currently in flight, if any.
    pub fn active_session(&self) -> Option<SessionHandle> {
        self.tables
            .read::<SessionHandle>(Table::ActiveSession)
            .into_iter()
            .next()
    }

    /// Finish a session as completed and score it.
    pub fn end_session(
        &mut self,
        handle: &SessionHandle,
        quality: Option<QualityRating>,
        energy: Option<EnergyLevel>,
    ) -> Result<SessionOutcome> {
        self.finish_session(handle, CompletionStatus::Completed, quality, energy, None)
    }

    /// Finish a session as interrupted. Interrupted sessions earn nothing and
    /// do not advance streaks.
    pub fn interrupt_session(
        &mut self,
        handle: &SessionHandle,
        reason: Option<String>,
    ) -> Result<SessionOutcome> {
        self.finish_session(handle, CompletionStatus::Interrupted, None, None, reason)
    }

    fn finish_session(
        &mut self,
        handle: &SessionHandle,
        completion_status: CompletionStatus,
        quality_rating: Option<QualityRating>,
        energy_level: Option<EnergyLevel>,
        interruption_reason: Option<String>,
    ) -> Result<SessionOutcome> {
        let ended_at = self.now_utc();
        let actual_duration = ended_at
            .signed_duration_since(handle.started_at)
            .num_minutes()
            .max(0) as u32;

        let outcome = self.log_session(NewSession {
            project_id: handle.project_id,
            planned_duration: handle.planned_duration,
            actual_duration,
            willpower_level: handle.willpower_level,
            quality_rating,
            energy_level,
            completion_status,
            interruption_reason,
            started_at: handle.started_at,
            ended_at,
        })?;

        // Cleared only after the session is recorded.
        if self.active_session().is_some_and(|a| a.id == handle.id) {
            self.tables
                .write::<SessionHandle>(Table::ActiveSession, &[])?;
        }
        Ok(outcome)
    }

    /// Record a finished session.
    ///
    /// Difficulty, the day's ordinal and the analytics tags are fixed here.
    /// A completed session also updates its project's totals, earns XP,
    /// advances the `daily_sessions` streak and counts towards the day's
    /// objective. A session for an unknown project is not recorded, and nothing
    /// is written if the XP ledger cannot be read back.
    pub fn log_session(&mut self, input: NewSession) -> Result<SessionOutcome> {
        if self.project(input.project_id).is_none() {
            warn!(project = %input.project_id, "session for unknown project not recorded");
            return Ok(SessionOutcome {
                session: None,
                xp_awarded: 0,
                weekly_total: self.weekly_xp(),
            });
        }

        if input.completion_status == CompletionStatus::Completed {
            self.tables.check::<XpLogEntry>(Table::XpLogs)?;
        }

        let started = input.started_at.with_timezone(&Local);
        let day = started.date_naive();
        let difficulty = resolve(input.willpower_level, input.planned_duration);

        let session = FocusSession {
            id: Uuid::new_v4(),
            project_id: input.project_id,
            daily_objective_id: self.objective_for(day).map(|o| o.id),
            planned_duration: input.planned_duration,
            actual_duration: input.actual_duration,
            willpower_level: input.willpower_level,
            energy_level: input.energy_level,
            quality_rating: input.quality_rating,
            difficulty_label: difficulty.label.to_string(),
            difficulty_multiplier: Some(difficulty.multiplier),
            session_number_today: self.sessions_started_on(day).len() as u32 + 1,
            completion_status: input.completion_status,
            interruption_reason: input.interruption_reason,
            started_at: input.started_at,
            ended_at: input.ended_at,
            time_of_day: TimeOfDay::of(&started),
            day_of_week: started.weekday().num_days_from_sunday(),
            week_number: week_number(started),
        };
        self.tables.append(Table::FocusSessions, session.clone())?;

        let mut xp_awarded = 0;
        if session.is_completed() {
            self.record_focus(session.project_id, session.actual_duration)?;
            xp_awarded = self.award_session_xp(&session)?.points_earned;
            self.advance_streak(StreakType::DailySessions)?;
            self.record_objective_progress(day, session.actual_duration)?;
        }

        Ok(SessionOutcome {
            session: Some(session),
            xp_awarded,
            weekly_total: self.weekly_xp(),
        })
    }

    /// Fill in post-session quality and energy.
    ///
    /// XP already awarded is not recomputed. Returns `None` for an unknown
    /// session.
    pub fn rate_session(
        &mut self,
        id: Uuid,
        quality: Option<QualityRating>,
        energy: Option<EnergyLevel>,
    ) -> Result<Option<FocusSession>> {
        let updated = self
            .tables
            .update(Table::FocusSessions, id, |s: &mut FocusSession| {
                if quality.is_some() {
                    s.quality_rating = quality;
                }
                if energy.is_some() {
                    s.energy_level = energy;
                }
            })?;
        if updated.is_none() {
            warn!(session = %id, "rating for unknown session ignored");
        }
        Ok(updated)
    }

    pub fn session(&self, id: Uuid) -> Option<FocusSession> {
        self.tables.find(Table::FocusSessions, id)
    }

    pub fn sessions(&self) -> Vec<FocusSession> {
        self.tables.read(Table::FocusSessions)
    }

    pub fn project_sessions(&self, project_id: Uuid) -> Vec<FocusSession> {
        self.sessions()
            .into_iter()
            .filter(|s| s.project_id == project_id)
            .collect()
    }

    /// Sessions started today, completed or not.
    pub fn todays_sessions(&self) -> Vec<FocusSession> {
        self.sessions_started_on(self.today())
    }

    fn sessions_started_on(&self, day: NaiveDate) -> Vec<FocusSession> {
        self.sessions()
            .into_iter()
            .filter(|s| s.started_at.with_timezone(&Local).date_naive() == day)
            .collect()
    }
}
