//! Remainder arithmetic for the launch countdown.
//!
//! Kept free of timers and DOM access so it can be unit tested; the launch
//! page owns the 1 s interval that recomputes this every tick.

use chrono::NaiveDateTime;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;

/// Decomposed time left until launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remainder {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remainder {
    pub fn total_seconds(&self) -> i64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

/// Countdown state at a given instant. `Expired` is terminal: once the
/// launch instant passes, every later recomputation stays `Expired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Pending(Remainder),
    Expired,
}

impl Countdown {
    /// Remainder of `target - now`, floor-divided into whole days, hours
    /// mod 24, minutes mod 60 and seconds mod 60.
    pub fn at(target: NaiveDateTime, now: NaiveDateTime) -> Countdown {
        let difference = target.signed_duration_since(now).num_milliseconds();
        if difference <= 0 {
            return Countdown::Expired;
        }

        let total = difference / 1_000;
        Countdown::Pending(Remainder {
            days: total / SECONDS_PER_DAY,
            hours: (total / SECONDS_PER_HOUR) % 24,
            minutes: (total / SECONDS_PER_MINUTE) % 60,
            seconds: total % 60,
        })
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Countdown::Expired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn target() -> NaiveDateTime {
        at(2026, 2, 2, 0, 0, 0)
    }

    // =====================================================================
    // Decomposition
    // =====================================================================

    #[test]
    fn test_one_hour_before_launch() {
        let countdown = Countdown::at(target(), at(2026, 2, 1, 23, 0, 0));
        assert_eq!(
            countdown,
            Countdown::Pending(Remainder {
                days: 0,
                hours: 1,
                minutes: 0,
                seconds: 0,
            })
        );
    }

    #[test]
    fn test_remainder_fields_stay_in_range() {
        let countdown = Countdown::at(target(), at(2025, 12, 30, 7, 41, 59));
        let Countdown::Pending(remainder) = countdown else {
            panic!("expected a pending countdown");
        };
        assert!(remainder.days >= 0);
        assert!((0..24).contains(&remainder.hours));
        assert!((0..60).contains(&remainder.minutes));
        assert!((0..60).contains(&remainder.seconds));
    }

    #[test]
    fn test_total_seconds_matches_floor_of_difference() {
        let instants = [
            at(2025, 11, 3, 12, 30, 15),
            at(2026, 1, 31, 23, 59, 59),
            at(2026, 2, 1, 0, 0, 1),
        ];
        for now in instants {
            let expected = target().signed_duration_since(now).num_seconds();
            let Countdown::Pending(remainder) = Countdown::at(target(), now) else {
                panic!("expected a pending countdown at {now}");
            };
            assert_eq!(remainder.total_seconds(), expected);
        }
    }

    // =====================================================================
    // Monotonicity
    // =====================================================================

    #[test]
    fn test_remainder_never_increases_as_time_advances() {
        let mut previous = i64::MAX;
        for offset in 0..120 {
            let now = at(2026, 2, 1, 23, 58, 0) + chrono::Duration::seconds(offset);
            match Countdown::at(target(), now) {
                Countdown::Pending(remainder) => {
                    assert!(remainder.total_seconds() <= previous);
                    previous = remainder.total_seconds();
                }
                Countdown::Expired => previous = 0,
            }
        }
    }

    // =====================================================================
    // Expiry
    // =====================================================================

    #[test]
    fn test_expired_at_exact_launch_instant() {
        assert_eq!(Countdown::at(target(), target()), Countdown::Expired);
    }

    #[test]
    fn test_expired_after_launch() {
        let countdown = Countdown::at(target(), at(2026, 2, 2, 0, 0, 1));
        assert!(countdown.is_expired());
    }

    #[test]
    fn test_still_pending_just_before_launch() {
        let countdown = Countdown::at(target(), at(2026, 2, 1, 23, 59, 59));
        assert_eq!(
            countdown,
            Countdown::Pending(Remainder {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 1,
            })
        );
    }
}
