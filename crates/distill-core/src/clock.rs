use chrono::{DateTime, Utc};

/// Source of the synthesis instant stamped into each echo trace.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant. Useful for reproducible traces.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Render an instant the way traces hash it: naive ISO-8601, microsecond precision.
pub fn synthesis_stamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_is_stable() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 14, 30, 0).unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now(), at);
    }

    #[test]
    fn test_synthesis_stamp_format() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 14, 30, 5).unwrap();
        assert_eq!(synthesis_stamp(at), "2024-01-02T14:30:05.000000");

        let at = at + chrono::Duration::microseconds(1234);
        assert_eq!(synthesis_stamp(at), "2024-01-02T14:30:05.001234");
    }
}
