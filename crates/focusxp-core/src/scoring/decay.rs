/// Multiplier applied to the n-th session of a calendar day.
///
/// Repeats within a day pay progressively less but never nothing.
/// An ordinal of 0 is treated as the first session.
pub fn decay(session_number_today: u32) -> f64 {
    match session_number_today {
        0 | 1 => 1.0,
        2 => 0.75,
        3 => 0.5,
        _ => 0.25,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_four_positions() {
        assert_eq!(decay(1), 1.0);
        assert_eq!(decay(2), 0.75);
        assert_eq!(decay(3), 0.5);
        assert_eq!(decay(4), 0.25);
        assert_eq!(decay(12), 0.25);
    }

    proptest! {
        #[test]
        fn never_increases(n in 1u32..10_000) {
            prop_assert!(decay(n + 1) <= decay(n));
            prop_assert!(decay(n) > 0.0);
        }
    }
}
