//! Append-only XP ledger.
//!
//! Entries are built here and appended by the engine; nothing ever updates
//! or removes one. Totals are recomputed from the full ledger on each call.

use chrono::{DateTime, Local, Utc};
use uuid::Uuid;

use crate::model::{FocusSession, Project, XpLogEntry, XpSource};
use crate::scoring::{completion_xp, session_xp, WeekTag};

/// Build the ledger entry for a completed session.
pub fn session_entry(session: &FocusSession, now: DateTime<Local>) -> XpLogEntry {
    let score = session_xp(session);
    let week = WeekTag::of(now);
    XpLogEntry {
        id: Uuid::new_v4(),
        points_earned: score.points,
        source: XpSource::Session,
        source_id: session.id,
        multipliers: Some(score.multipliers),
        earned_at: now.with_timezone(&Utc),
        week_number: week.week,
        week_year: week.year,
    }
}

/// Build the ledger entry for a project moving into `completed`.
pub fn completion_entry(project: &Project, now: DateTime<Local>) -> XpLogEntry {
    let week = WeekTag::of(now);
    XpLogEntry {
        id: Uuid::new_v4(),
        points_earned: completion_xp(project),
        source: XpSource::Completion,
        source_id: project.id,
        multipliers: None,
        earned_at: now.with_timezone(&Utc),
        week_number: week.week,
        week_year: week.year,
    }
}

/// Read-only aggregation over ledger entries.
#[derive(Debug, Clone, Copy)]
pub struct XpLedger<'a> {
    entries: &'a [XpLogEntry],
}

impl<'a> XpLedger<'a> {
    pub fn new(entries: &'a [XpLogEntry]) -> Self {
        Self { entries }
    }

    /// Entries in append order.
    pub fn entries(&self) -> &'a [XpLogEntry] {
        self.entries
    }

    /// Sum of every entry ever appended.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.points_earned)).sum()
    }

    /// Sum of entries tagged with the given week.
    pub fn weekly_total(&self, week: WeekTag) -> u64 {
        self.entries
            .iter()
            .filter(|e| e.week_number == week.week && e.week_year == week.year)
            .map(|e| u64::from(e.points_earned))
            .sum()
    }

    pub fn by_source(&self, source: XpSource) -> u64 {
        self.entries
            .iter()
            .filter(|e| e.source == source)
            .map(|e| u64::from(e.points_earned))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(points: u32, week: u32, year: i32, source: XpSource) -> XpLogEntry {
        XpLogEntry {
            id: Uuid::new_v4(),
            points_earned: points,
            source,
            source_id: Uuid::new_v4(),
            multipliers: None,
            earned_at: Utc::now(),
            week_number: week,
            week_year: year,
        }
    }

    #[test]
    fn total_sums_everything() {
        let entries = vec![
            entry(12, 3, 2026, XpSource::Session),
            entry(560, 4, 2026, XpSource::Completion),
            entry(32, 4, 2026, XpSource::Session),
        ];
        let ledger = XpLedger::new(&entries);
        assert_eq!(ledger.total(), 604);
        assert_eq!(ledger.by_source(XpSource::Session), 44);
    }

    #[test]
    fn weekly_total_excludes_other_weeks_and_years() {
        let entries = vec![
            entry(10, 0, 2025, XpSource::Session),
            entry(20, 0, 2026, XpSource::Session),
            entry(40, 1, 2026, XpSource::Session),
        ];
        let ledger = XpLedger::new(&entries);
        assert_eq!(ledger.weekly_total(WeekTag { year: 2026, week: 0 }), 20);
        assert_eq!(ledger.weekly_total(WeekTag { year: 2026, week: 2 }), 0);
    }

    #[test]
    fn empty_ledger_is_zero() {
        let ledger = XpLedger::new(&[]);
        assert_eq!(ledger.total(), 0);
    }
}
