//! Willpower × planned-duration difficulty table.

use serde::Serialize;

use crate::model::WillpowerLevel;

/// Multiplier and display label for a session's difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Difficulty {
    pub multiplier: f64,
    pub label: &'static str,
}

/// Used for any combination outside the table.
pub const STANDARD_SESSION: Difficulty = Difficulty {
    multiplier: 1.0,
    label: "Standard Session",
};

/// Look up the difficulty of a session.
///
/// Lower willpower and longer sessions are harder and pay more. Durations
/// other than 25, 60 and 90 minutes resolve to [`STANDARD_SESSION`].
pub fn resolve(willpower: WillpowerLevel, planned_minutes: u32) -> Difficulty {
    use WillpowerLevel::{High, Low, Medium};

    let (multiplier, label) = match (willpower, planned_minutes) {
        (High, 25) => (0.5, "Piece of Cake"),
        (High, 60) => (1.5, "Bring It On"),
        (High, 90) => (2.5, "Crunch Time"),
        (Medium, 25) => (1.0, "Hey, Not Too Rough"),
        (Medium, 60) => (2.0, "Come Get Some"),
        (Medium, 90) => (3.0, "Balls of Steel"),
        (Low, 25) => (2.0, "Damn I'm Good"),
        (Low, 60) => (3.5, "Nightmare Deadline"),
        (Low, 90) => (4.0, "Hail to the King"),
        _ => return STANDARD_SESSION,
    };
    Difficulty { multiplier, label }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SessionLength;

    const LEVELS: [WillpowerLevel; 3] = [
        WillpowerLevel::High,
        WillpowerLevel::Medium,
        WillpowerLevel::Low,
    ];

    #[test]
    fn table_is_exhaustive_and_in_range() {
        for level in LEVELS {
            for minutes in [25, 60, 90] {
                let d = resolve(level, minutes);
                assert!((0.5..=4.0).contains(&d.multiplier), "{level} {minutes}");
                assert!(!d.label.is_empty());
                assert_ne!(d, STANDARD_SESSION);
                assert_eq!(d, resolve(level, minutes));
            }
        }
    }

    #[test]
    fn corners_of_the_table() {
        assert_eq!(resolve(WillpowerLevel::High, 25).label, "Piece of Cake");
        assert_eq!(resolve(WillpowerLevel::Low, 90).multiplier, 4.0);
        assert_eq!(resolve(WillpowerLevel::Medium, 90).label, "Balls of Steel");
    }

    #[test]
    fn unknown_duration_falls_back() {
        assert_eq!(resolve(WillpowerLevel::Low, 45), STANDARD_SESSION);
        assert_eq!(resolve(WillpowerLevel::High, 0), STANDARD_SESSION);
    }

    #[test]
    fn mixed_length_uses_the_hour_row() {
        let mixed = resolve(WillpowerLevel::Medium, SessionLength::Mixed.minutes());
        assert_eq!(mixed.label, "Come Get Some");
        assert_eq!(mixed.multiplier, 2.0);
    }
}
