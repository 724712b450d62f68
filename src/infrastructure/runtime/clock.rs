use crate::domain::ports::Clock;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Wall clock evaluated in the agency's timezone, so "today" flips at local
/// midnight rather than UTC midnight.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn test_system_clock_is_within_a_day_of_utc() {
        let clock = SystemClock::new("Pacific/Kiritimati".parse().unwrap());
        let utc_today = Utc::now().date_naive();
        let diff = (clock.today() - utc_today).num_days().abs();
        assert!(diff <= 1);
    }
}
