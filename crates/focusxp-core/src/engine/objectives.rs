use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use super::FocusEngine;
use crate::clock::Clock;
use crate::error::{Result, ValidationError};
use crate::model::DailyObjective;
use crate::storage::{Table, TableStore};

impl<S: TableStore, C: Clock> FocusEngine<S, C> {
    /// Set today's objective, replacing the targets of an existing one.
    ///
    /// Progress already recorded today is kept.
    pub fn set_daily_objective(
        &mut self,
        session_count: u32,
        session_duration: u32,
    ) -> Result<DailyObjective> {
        if session_count == 0 {
            return Err(ValidationError::InvalidValue {
                field: "session_count".into(),
                message: "must be at least 1".into(),
            }
            .into());
        }
        if session_duration == 0 {
            return Err(ValidationError::InvalidValue {
                field: "session_duration".into(),
                message: "must be at least 1 minute".into(),
            }
            .into());
        }

        let today = self.today();
        let planned = session_count.saturating_mul(session_duration);
        if let Some(existing) = self.objective_for(today) {
            let updated = self
                .tables
                .update(Table::DailyObjectives, existing.id, |o: &mut DailyObjective| {
                    o.session_count = session_count;
                    o.session_duration = session_duration;
                    o.total_minutes_planned = planned;
                })?;
            if let Some(updated) = updated {
                return Ok(updated);
            }
        }

        let objective = DailyObjective {
            id: Uuid::new_v4(),
            date: today,
            session_count,
            session_duration,
            created_at: self.now_utc(),
            completed_sessions: 0,
            total_minutes_planned: planned,
            total_minutes_actual: 0,
        };
        debug!(date = %today, sessions = session_count, "daily objective set");
        self.tables.append(Table::DailyObjectives, objective)
    }

    pub fn today_objective(&self) -> Option<DailyObjective> {
        self.objective_for(self.today())
    }

    pub fn objectives(&self) -> Vec<DailyObjective> {
        self.tables.read(Table::DailyObjectives)
    }

    pub(super) fn objective_for(&self, date: NaiveDate) -> Option<DailyObjective> {
        self.objectives().into_iter().find(|o| o.date == date)
    }

    /// Count a completed session towards the objective of `date`, if one is set.
    pub(super) fn record_objective_progress(
        &mut self,
        date: NaiveDate,
        minutes: u32,
    ) -> Result<Option<DailyObjective>> {
        let Some(objective) = self.objective_for(date) else {
            return Ok(None);
        };
        self.tables
            .update(Table::DailyObjectives, objective.id, |o: &mut DailyObjective| {
                o.completed_sessions = o.completed_sessions.saturating_add(1);
                o.total_minutes_actual = o.total_minutes_actual.saturating_add(minutes);
            })
    }
}
