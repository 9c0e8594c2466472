//! Consecutive-day streak tracking.
//!
//! A streak advances at most once per local calendar day. Missing a whole
//! day resets the current run to 1; the longest run is never reset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::{StreakRecord, StreakType};

/// What an `advance` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakAdvance {
    /// First activity ever for this streak type.
    Started,
    /// Already advanced today.
    Unchanged,
    /// Activity on the day after the last one.
    Extended,
    /// Gap of two or more days; the run restarted at 1.
    Reset,
    /// Stored state is unusable: unreadable, or last activity in the future.
    Rejected,
}

impl StreakRecord {
    pub fn start(streak_type: StreakType, today: NaiveDate) -> Self {
        Self {
            streak_type,
            current_streak: 1,
            longest_streak: 1,
            streak_start_date: today,
            last_activity_date: today,
        }
    }

    /// Apply one day of activity.
    pub fn advance(&mut self, today: NaiveDate) -> StreakAdvance {
        if self.current_streak > self.longest_streak {
            warn!(
                streak = %self.streak_type,
                current = self.current_streak,
                longest = self.longest_streak,
                "current streak exceeds longest, repairing"
            );
            self.longest_streak = self.current_streak;
        }

        let days_since = today
            .signed_duration_since(self.last_activity_date)
            .num_days();
        match days_since {
            0 => StreakAdvance::Unchanged,
            1 => {
                self.current_streak += 1;
                self.longest_streak = self.longest_streak.max(self.current_streak);
                self.last_activity_date = today;
                StreakAdvance::Extended
            }
            d if d >= 2 => {
                self.current_streak = 1;
                self.streak_start_date = today;
                self.last_activity_date = today;
                StreakAdvance::Reset
            }
            _ => StreakAdvance::Rejected,
        }
    }
}

/// In-memory view over all streak records.
#[derive(Debug, Clone, Default)]
pub struct StreakTracker {
    records: Vec<StreakRecord>,
}

impl StreakTracker {
    pub fn new(records: Vec<StreakRecord>) -> Self {
        Self { records }
    }

    pub fn get(&self, streak_type: StreakType) -> Option<&StreakRecord> {
        self.records.iter().find(|r| r.streak_type == streak_type)
    }

    /// Current run length, 0 when the streak was never started.
    pub fn current(&self, streak_type: StreakType) -> u32 {
        self.get(streak_type).map_or(0, |r| r.current_streak)
    }

    pub fn longest(&self, streak_type: StreakType) -> u32 {
        self.get(streak_type).map_or(0, |r| r.longest_streak)
    }

    /// Record activity for `streak_type` on `today`.
    pub fn advance(&mut self, streak_type: StreakType, today: NaiveDate) -> StreakAdvance {
        let outcome = match self
            .records
            .iter()
            .position(|r| r.streak_type == streak_type)
        {
            Some(idx) => self.records[idx].advance(today),
            None => {
                self.records.push(StreakRecord::start(streak_type, today));
                StreakAdvance::Started
            }
        };

        match outcome {
            StreakAdvance::Rejected => warn!(
                streak = %streak_type,
                %today,
                "last activity lies in the future, streak left unchanged"
            ),
            other => debug!(
                streak = %streak_type,
                outcome = ?other,
                current = self.current(streak_type),
                "streak advanced"
            ),
        }
        outcome
    }

    pub fn records(&self) -> &[StreakRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<StreakRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn first_advance_starts_at_one() {
        let mut tracker = StreakTracker::default();
        assert_eq!(tracker.current(StreakType::DailySessions), 0);
        assert_eq!(
            tracker.advance(StreakType::DailySessions, day(1)),
            StreakAdvance::Started
        );
        assert_eq!(tracker.current(StreakType::DailySessions), 1);
        assert_eq!(tracker.longest(StreakType::DailySessions), 1);
    }

    #[test]
    fn same_day_is_idempotent() {
        let mut tracker = StreakTracker::default();
        tracker.advance(StreakType::DailySessions, day(1));
        tracker.advance(StreakType::DailySessions, day(2));
        assert_eq!(
            tracker.advance(StreakType::DailySessions, day(2)),
            StreakAdvance::Unchanged
        );
        assert_eq!(tracker.current(StreakType::DailySessions), 2);
    }

    #[test]
    fn gap_resets_but_keeps_longest() {
        let mut tracker = StreakTracker::default();
        for d in 1..=4 {
            tracker.advance(StreakType::DailySessions, day(d));
        }
        assert_eq!(tracker.current(StreakType::DailySessions), 4);

        assert_eq!(
            tracker.advance(StreakType::DailySessions, day(6)),
            StreakAdvance::Reset
        );
        let record = tracker.get(StreakType::DailySessions).unwrap();
        assert_eq!(record.current_streak, 1);
        assert_eq!(record.longest_streak, 4);
        assert_eq!(record.streak_start_date, day(6));
    }

    #[test]
    fn future_last_activity_is_rejected() {
        let mut record = StreakRecord::start(StreakType::DailySessions, day(10));
        assert_eq!(record.advance(day(9)), StreakAdvance::Rejected);
        assert_eq!(record.current_streak, 1);
        assert_eq!(record.last_activity_date, day(10));
    }

    #[test]
    fn inconsistent_longest_is_repaired() {
        let mut record = StreakRecord {
            streak_type: StreakType::DailySessions,
            current_streak: 5,
            longest_streak: 2,
            streak_start_date: day(1),
            last_activity_date: day(5),
        };
        record.advance(day(6));
        assert_eq!(record.current_streak, 6);
        assert_eq!(record.longest_streak, 6);
        assert!(record.current_streak <= record.longest_streak);
    }

    #[test]
    fn same_day_advance_still_repairs_longest() {
        let mut record = StreakRecord {
            streak_type: StreakType::DailySessions,
            current_streak: 5,
            longest_streak: 2,
            streak_start_date: day(1),
            last_activity_date: day(5),
        };
        assert_eq!(record.advance(day(5)), StreakAdvance::Unchanged);
        assert_eq!(record.longest_streak, 5);
    }
}
