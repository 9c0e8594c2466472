//! XP scoring rules.
//!
//! Session XP is
//!
//! ```text
//! round((10 + floor(actual_minutes / 10) + quality_bonus) × difficulty × decay)
//! ```
//!
//! and completing a project pays `cost × benefit × 10`.

mod decay;
mod difficulty;
mod week;

pub use decay::decay;
pub use difficulty::{resolve, Difficulty, STANDARD_SESSION};
pub use week::{week_number, WeekTag};

use crate::model::{FocusSession, Project, QualityRating, XpMultipliers};

/// Flat XP every completed session starts from.
pub const BASE_SESSION_XP: u32 = 10;
/// Completion XP per point of cost × benefit.
pub const COMPLETION_XP_FACTOR: u32 = 10;

/// Points for a session plus the multipliers that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionScore {
    pub points: u32,
    pub multipliers: XpMultipliers,
}

/// Score a session from its raw inputs.
pub fn score_session(
    actual_minutes: u32,
    quality: Option<QualityRating>,
    difficulty_multiplier: f64,
    session_number_today: u32,
) -> SessionScore {
    let quality_bonus = quality.map(|q| q.bonus()).unwrap_or(0);
    let base = BASE_SESSION_XP + actual_minutes / 10 + quality_bonus;
    let daily_position = decay(session_number_today);
    let raw = f64::from(base) * difficulty_multiplier * daily_position;

    SessionScore {
        points: raw.round().max(0.0) as u32,
        multipliers: XpMultipliers {
            difficulty: difficulty_multiplier,
            daily_position,
            bonus: 1.0,
        },
    }
}

/// Score a recorded session. A missing stored multiplier counts as 1.0.
pub fn session_xp(session: &FocusSession) -> SessionScore {
    score_session(
        session.actual_duration,
        session.quality_rating,
        session.difficulty_multiplier.unwrap_or(1.0),
        session.session_number_today,
    )
}

/// XP paid when a project moves into `completed`.
pub fn completion_xp(project: &Project) -> u32 {
    project.strategic_value() * COMPLETION_XP_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewProject, WillpowerLevel};
    use chrono::Utc;
    use proptest::prelude::*;

    #[test]
    fn second_medium_hour_with_good_quality() {
        let difficulty = resolve(WillpowerLevel::Medium, 60);
        let score = score_session(65, Some(QualityRating::Good), difficulty.multiplier, 2);
        // (10 + 6 + 5) × 2.0 × 0.75 = 31.5
        assert_eq!(score.points, 32);
        assert_eq!(score.multipliers.difficulty, 2.0);
        assert_eq!(score.multipliers.daily_position, 0.75);
    }

    #[test]
    fn unrated_session_gets_no_bonus() {
        let score = score_session(25, None, 1.0, 1);
        assert_eq!(score.points, 12);
        let average = score_session(25, Some(QualityRating::Average), 1.0, 1);
        assert_eq!(average.points, score.points);
    }

    #[test]
    fn completion_is_cost_times_benefit_times_ten() {
        let project = NewProject::new("Launch", 7, 8).into_project(Utc::now());
        assert_eq!(completion_xp(&project), 560);
    }

    fn quality() -> impl Strategy<Value = Option<QualityRating>> {
        prop_oneof![
            Just(None),
            Just(Some(QualityRating::Excellent)),
            Just(Some(QualityRating::Good)),
            Just(Some(QualityRating::Average)),
            Just(Some(QualityRating::Challenging)),
            Just(Some(QualityRating::Bad)),
        ]
    }

    proptest! {
        #[test]
        fn scoring_is_deterministic(
            minutes in 0u32..600,
            q in quality(),
            mult in prop::sample::select(vec![0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0]),
            n in 1u32..8,
        ) {
            prop_assert_eq!(score_session(minutes, q, mult, n), score_session(minutes, q, mult, n));
        }

        #[test]
        fn more_minutes_never_pay_less(
            minutes in 0u32..600,
            extra in 0u32..120,
            q in quality(),
            mult in prop::sample::select(vec![0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0]),
            n in 1u32..8,
        ) {
            let shorter = score_session(minutes, q, mult, n).points;
            let longer = score_session(minutes + extra, q, mult, n).points;
            prop_assert!(longer >= shorter);
        }
    }
}
