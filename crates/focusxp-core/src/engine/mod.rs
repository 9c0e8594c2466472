//! The engine facade.
//!
//! [`FocusEngine`] owns a table store and a clock and runs every compound
//! operation (end a session → update project → append XP → advance streak)
//! to completion before returning.

mod capture;
mod objectives;
mod projects;
mod sessions;

use chrono::{DateTime, Local, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::achievements::{default_catalogue, AchievementEvaluator, AchievementSnapshot};
use crate::clock::Clock;
use crate::error::Result;
use crate::ledger::{self, XpLedger};
use crate::model::{
    Achievement, AchievementProgress, FocusSession, Project, StreakRecord, StreakType, XpLogEntry,
};
use crate::scoring::WeekTag;
use crate::stats::SessionStats;
use crate::storage::{Table, TableStore, Tables};
use crate::streak::{StreakAdvance, StreakTracker};

/// Scoring and state-tracking engine over an injected store and clock.
pub struct FocusEngine<S, C> {
    tables: Tables<S>,
    clock: C,
}

impl<S: TableStore, C: Clock> FocusEngine<S, C> {
    /// Wrap a store, seeding the achievement catalogue if it is empty.
    ///
    /// # Errors
    /// Returns an error if seeding cannot be written.
    pub fn new(store: S, clock: C) -> Result<Self> {
        let mut engine = Self {
            tables: Tables::new(store),
            clock,
        };
        engine.seed_achievements()?;
        Ok(engine)
    }

    fn seed_achievements(&mut self) -> Result<()> {
        let existing: Vec<Achievement> = match self.tables.try_read(Table::Achievements) {
            Ok(existing) => existing,
            Err(e) => {
                warn!(error = %e, "achievement catalogue unreadable, not seeding");
                return Ok(());
            }
        };
        if existing.is_empty() {
            debug!("seeding achievement catalogue");
            self.tables
                .write(Table::Achievements, &default_catalogue())?;
        }
        Ok(())
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn store(&self) -> &S {
        self.tables.store()
    }

    pub fn into_store(self) -> S {
        self.tables.into_store()
    }

    fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    fn now_utc(&self) -> DateTime<Utc> {
        self.now().with_timezone(&Utc)
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    // === XP ===

    fn xp_entries(&self) -> Vec<XpLogEntry> {
        self.tables.read(Table::XpLogs)
    }

    /// XP earned in the current week.
    pub fn weekly_xp(&self) -> u64 {
        XpLedger::new(&self.xp_entries()).weekly_total(WeekTag::of(self.now()))
    }

    /// XP earned ever.
    pub fn total_xp(&self) -> u64 {
        XpLedger::new(&self.xp_entries()).total()
    }

    /// The full ledger in append order.
    pub fn xp_log(&self) -> Vec<XpLogEntry> {
        self.xp_entries()
    }

    fn award_session_xp(&mut self, session: &FocusSession) -> Result<XpLogEntry> {
        let entry = ledger::session_entry(session, self.now());
        debug!(session = %session.id, points = entry.points_earned, "session xp awarded");
        self.tables.append(Table::XpLogs, entry)
    }

    fn award_completion_xp(&mut self, project: &Project) -> Result<XpLogEntry> {
        let entry = ledger::completion_entry(project, self.now());
        debug!(project = %project.id, points = entry.points_earned, "completion xp awarded");
        self.tables.append(Table::XpLogs, entry)
    }

    // === Streaks ===

    fn streaks(&self) -> StreakTracker {
        StreakTracker::new(self.tables.read(Table::StreakTracking))
    }

    /// Current run of `streak_type`, 0 if it never started.
    pub fn current_streak(&self, streak_type: StreakType) -> u32 {
        self.streaks().current(streak_type)
    }

    pub fn longest_streak(&self, streak_type: StreakType) -> u32 {
        self.streaks().longest(streak_type)
    }

    pub fn streak(&self, streak_type: StreakType) -> Option<StreakRecord> {
        self.streaks().get(streak_type).cloned()
    }

    /// Advance a streak and persist the records if anything changed.
    ///
    /// An unreadable streak table is left untouched and the advance is
    /// reported as rejected.
    fn advance_streak(&mut self, streak_type: StreakType) -> Result<StreakAdvance> {
        let stored: Vec<StreakRecord> = match self.tables.try_read(Table::StreakTracking) {
            Ok(records) => records,
            Err(e) => {
                warn!(streak = %streak_type, error = %e, "streak state unreadable, left unchanged");
                return Ok(StreakAdvance::Rejected);
            }
        };
        let mut tracker = StreakTracker::new(stored.clone());
        let outcome = tracker.advance(streak_type, self.today());
        // Same-day advances can still repair a record.
        if tracker.records() != stored.as_slice() {
            self.tables
                .write(Table::StreakTracking, tracker.records())?;
        }
        Ok(outcome)
    }

    // === Achievements ===

    pub fn achievements(&self) -> Vec<Achievement> {
        self.tables.read(Table::Achievements)
    }

    fn achievement_snapshot(&self) -> AchievementSnapshot {
        let projects: Vec<Project> = self.tables.read(Table::Projects);
        let sessions: Vec<FocusSession> = self.tables.read(Table::FocusSessions);
        AchievementSnapshot::new(&self.streaks(), &projects, &sessions)
    }

    /// Unlock achievements whose rules are now satisfied.
    ///
    /// Returns only the newly unlocked entries; calling again without a state
    /// change returns nothing.
    pub fn check_achievements(&mut self) -> Result<Vec<Achievement>> {
        let snapshot = self.achievement_snapshot();
        let mut catalogue: Vec<Achievement> = self.tables.try_read(Table::Achievements)?;
        let unlocked = AchievementEvaluator::new(&snapshot).evaluate(&mut catalogue, self.now_utc());
        if !unlocked.is_empty() {
            self.tables.write(Table::Achievements, &catalogue)?;
        }
        Ok(unlocked)
    }

    pub fn achievement_progress(&self) -> Vec<AchievementProgress> {
        let snapshot = self.achievement_snapshot();
        AchievementEvaluator::new(&snapshot).progress(&self.achievements())
    }

    // === Statistics ===

    pub fn session_stats(&self) -> SessionStats {
        SessionStats::from_sessions(&self.sessions(), self.today())
    }
}
