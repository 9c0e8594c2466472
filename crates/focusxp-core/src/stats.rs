//! Session statistics for the analytics views.

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::FocusSession;

/// Number of trailing days covered by [`SessionStats::daily_minutes`].
pub const HEATMAP_DAYS: i64 = 14;

/// Completed focus on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub sessions: u32,
    pub minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_sessions: u32,
    pub completed_sessions: u32,
    /// Percentage of sessions that were completed, 0 when there are none.
    pub completion_rate: u32,
    /// Mean actual minutes of completed sessions.
    pub average_duration: u32,
    /// Mean quality score (1.0–5.0) over rated sessions.
    pub average_quality: Option<f64>,
    pub quality_label: Option<String>,
    /// Oldest first, ending today.
    pub daily_minutes: Vec<DayActivity>,
}

fn quality_label(score: f64) -> &'static str {
    if score >= 4.5 {
        "Excellent"
    } else if score >= 3.5 {
        "Good"
    } else if score >= 2.5 {
        "Average"
    } else {
        "Challenging"
    }
}

impl SessionStats {
    pub fn from_sessions(sessions: &[FocusSession], today: NaiveDate) -> Self {
        let total_sessions = sessions.len() as u32;
        let completed: Vec<&FocusSession> = sessions.iter().filter(|s| s.is_completed()).collect();
        let completed_sessions = completed.len() as u32;

        let completion_rate = if total_sessions == 0 {
            0
        } else {
            (f64::from(completed_sessions) * 100.0 / f64::from(total_sessions)).round() as u32
        };

        let average_duration = if completed.is_empty() {
            0
        } else {
            let minutes: u32 = completed.iter().map(|s| s.actual_duration).sum();
            (f64::from(minutes) / completed.len() as f64).round() as u32
        };

        let ratings: Vec<u32> = sessions
            .iter()
            .filter_map(|s| s.quality_rating.map(|q| q.score()))
            .collect();
        let average_quality = if ratings.is_empty() {
            None
        } else {
            Some(f64::from(ratings.iter().sum::<u32>()) / ratings.len() as f64)
        };

        let daily_minutes = (0..HEATMAP_DAYS)
            .rev()
            .map(|back| {
                let date = today - Duration::days(back);
                let on_day = completed
                    .iter()
                    .filter(|s| s.started_at.with_timezone(&Local).date_naive() == date);
                let (sessions, minutes) =
                    on_day.fold((0, 0), |(n, m), s| (n + 1, m + s.actual_duration));
                DayActivity {
                    date,
                    sessions,
                    minutes,
                }
            })
            .collect();

        Self {
            total_sessions,
            completed_sessions,
            completion_rate,
            average_duration,
            average_quality,
            quality_label: average_quality.map(|q| quality_label(q).to_string()),
            daily_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let stats = SessionStats::from_sessions(&[], today);
        assert_eq!(stats.total_sessions, 0);
        assert_eq!(stats.completion_rate, 0);
        assert!(stats.average_quality.is_none());
        assert_eq!(stats.daily_minutes.len(), 14);
        assert_eq!(stats.daily_minutes.last().unwrap().date, today);
    }

    #[test]
    fn quality_labels() {
        assert_eq!(quality_label(4.6), "Excellent");
        assert_eq!(quality_label(3.8), "Good");
        assert_eq!(quality_label(2.5), "Average");
        assert_eq!(quality_label(1.0), "Challenging");
    }
}
