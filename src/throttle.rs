//! Login Throttle
//!
//! Escalating cooldown after repeated failed logins. Held in component state
//! only, so a reload resets it; it deters casual guessing and nothing more.

use chrono::{DateTime, Duration, Utc};

/// Failures tolerated before the first cooldown
pub const FREE_ATTEMPTS: u32 = 2;

/// Lockout length for a given failure count
pub fn cooldown_for(failures: u32) -> Option<Duration> {
    let hours = match failures {
        0..=FREE_ATTEMPTS => return None,
        3..=5 => 1,
        6..=8 => 5,
        9 => 24,
        _ => 240,
    };
    Some(Duration::hours(hours))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginThrottle {
    failures: u32,
    cooldown_until: Option<DateTime<Utc>>,
}

impl LoginThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Count a failed attempt and arm the cooldown it earns
    pub fn record_failure(&mut self, now: DateTime<Utc>) {
        self.failures += 1;
        if let Some(lock) = cooldown_for(self.failures) {
            self.cooldown_until = Some(now + lock);
        }
    }

    /// Successful login forgets past failures
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        self.cooldown_until.is_some_and(|until| now < until)
    }

    /// Whole seconds left, rounded up; zero once elapsed
    pub fn remaining(&self, now: DateTime<Utc>) -> u64 {
        let Some(until) = self.cooldown_until else {
            return 0;
        };
        let millis = (until - now).num_milliseconds();
        if millis <= 0 {
            0
        } else {
            (millis as u64).div_ceil(1000)
        }
    }

    /// Drop an elapsed cooldown; returns true while still locked
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_locked(now) {
            true
        } else {
            self.cooldown_until = None;
            false
        }
    }
}

/// `1h 5m 9s`
pub fn format_remaining(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{}h {}m {}s", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn fail(throttle: &mut LoginThrottle, times: u32, now: DateTime<Utc>) {
        for _ in 0..times {
            throttle.record_failure(now);
        }
    }

    #[test]
    fn test_two_failures_do_not_lock() {
        let mut t = LoginThrottle::new();
        fail(&mut t, 2, at(0));
        assert!(!t.is_locked(at(0)));
        assert_eq!(t.remaining(at(0)), 0);
    }

    #[test]
    fn test_third_failure_locks_for_an_hour() {
        let mut t = LoginThrottle::new();
        fail(&mut t, 3, at(0));
        assert!(t.is_locked(at(0)));
        assert_eq!(t.remaining(at(0)), 3600);
        assert!(t.is_locked(at(3599)));
        assert!(!t.is_locked(at(3600)));
    }

    #[test]
    fn test_thresholds_escalate() {
        assert_eq!(cooldown_for(3), Some(Duration::hours(1)));
        assert_eq!(cooldown_for(5), Some(Duration::hours(1)));
        assert_eq!(cooldown_for(6), Some(Duration::hours(5)));
        assert_eq!(cooldown_for(9), Some(Duration::hours(24)));
        assert_eq!(cooldown_for(10), Some(Duration::hours(240)));

        let mut previous = Duration::zero();
        for n in 0..20 {
            let lock = cooldown_for(n).unwrap_or_else(Duration::zero);
            assert!(lock >= previous, "cooldown shrank at {} failures", n);
            previous = lock;
        }
    }

    #[test]
    fn test_countdown_strictly_decreases_to_zero() {
        let mut t = LoginThrottle::new();
        fail(&mut t, 3, at(0));

        let mut last = t.remaining(at(0));
        for step in 1..=3600 {
            let now = at(step);
            let left = t.remaining(now);
            assert!(left < last);
            last = left;
        }
        assert_eq!(last, 0);
        assert!(!t.tick(at(3600)));
        assert!(!t.is_locked(at(3600)));
    }

    #[test]
    fn test_remaining_rounds_up() {
        let mut t = LoginThrottle::new();
        fail(&mut t, 3, at(0));
        let now = at(0) + Duration::milliseconds(1500);
        assert_eq!(t.remaining(now), 3599);
    }

    #[test]
    fn test_reset() {
        let mut t = LoginThrottle::new();
        fail(&mut t, 4, at(0));
        t.reset();
        assert_eq!(t.failures(), 0);
        assert!(!t.is_locked(at(0)));
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(3600), "1h 0m 0s");
        assert_eq!(format_remaining(3725), "1h 2m 5s");
        assert_eq!(format_remaining(0), "0h 0m 0s");
    }
}
