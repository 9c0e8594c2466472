//! Elapsed-week index used to bucket the XP ledger.
//!
//! The index is `floor((t - Jan 1 00:00 local) / 7 days)`. It is not an ISO
//! week: it restarts at 0 every January 1st and the last index of a year
//! (52) covers only one or two days.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

const WEEK_MILLIS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Week index plus the calendar year it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekTag {
    pub year: i32,
    pub week: u32,
}

impl WeekTag {
    pub fn of(at: DateTime<Local>) -> Self {
        Self {
            year: at.year(),
            week: week_number(at),
        }
    }
}

/// Elapsed whole weeks since midnight on January 1st of `at`'s year.
pub fn week_number(at: DateTime<Local>) -> u32 {
    let Some(jan1) = NaiveDate::from_ymd_opt(at.year(), 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
    else {
        return 0;
    };
    let elapsed = match Local.from_local_datetime(&jan1).earliest() {
        Some(start) => at.signed_duration_since(start),
        // Midnight skipped by a DST change; fall back to wall-clock distance.
        None => at.naive_local().signed_duration_since(jan1),
    };
    (elapsed.num_milliseconds().max(0) / WEEK_MILLIS) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local(y: i32, m: u32, d: u32, h: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn first_week_is_zero() {
        assert_eq!(week_number(local(2026, 1, 1, 0)), 0);
        assert_eq!(week_number(local(2026, 1, 7, 23)), 0);
        assert_eq!(week_number(local(2026, 1, 8, 0)), 1);
    }

    #[test]
    fn year_end_fragment_and_reset() {
        assert_eq!(week_number(local(2026, 12, 30, 12)), 51);
        assert_eq!(week_number(local(2026, 12, 31, 12)), 52);
        // Leap year: December 31st is day 365, still index 52.
        assert_eq!(week_number(local(2024, 12, 31, 12)), 52);

        let new_year = WeekTag::of(local(2027, 1, 1, 12));
        assert_eq!(new_year, WeekTag { year: 2027, week: 0 });
    }
}
