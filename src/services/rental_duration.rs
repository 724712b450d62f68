//! Rental day arithmetic shared by the quote, the validator and the booking
//! forms.

use chrono::NaiveDate;

/// Shortest rental the business accepts, in days.
pub const MINIMUM_RENTAL_DAYS: u32 = 2;

/// Returning more than this many minutes later in the day than the pickup
/// time is billed as an extra day.
pub const LATE_RETURN_GRACE_MINUTES: i64 = 60;

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Parses an `HH:MM` time of day into minutes after midnight.
///
/// Returns `None` when either component is not a number or out of range.
pub fn parse_time_of_day(value: &str) -> Option<i64> {
    let (hours, minutes) = value.trim().split_once(':')?;
    let hours: i64 = hours.parse().ok()?;
    let minutes: i64 = minutes.parse().ok()?;

    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }

    Some(hours * 60 + minutes)
}

/// Absolute number of calendar days between two dates.
pub fn calendar_days(pickup_date: NaiveDate, return_date: NaiveDate) -> u32 {
    let days = (return_date - pickup_date).num_days().unsigned_abs();
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Calendar days plus the late-return adjustment, without the minimum floor.
pub fn adjusted_days(
    pickup_date: NaiveDate,
    return_date: NaiveDate,
    pickup_time: Option<&str>,
    return_time: Option<&str>,
) -> u32 {
    let mut days = calendar_days(pickup_date, return_date);

    let pickup_minutes = pickup_time.and_then(parse_time_of_day);
    let return_minutes = return_time.and_then(parse_time_of_day);

    if let (Some(pickup), Some(ret)) = (pickup_minutes, return_minutes) {
        if ret - pickup > LATE_RETURN_GRACE_MINUTES {
            days = days.saturating_add(1);
        }
    }

    days
}

/// Billable rental days for a pickup/return pair.
///
/// Malformed times are ignored and the result is never below
/// [`MINIMUM_RENTAL_DAYS`].
pub fn compute_days(
    pickup_date: NaiveDate,
    return_date: NaiveDate,
    pickup_time: Option<&str>,
    return_time: Option<&str>,
) -> u32 {
    adjusted_days(pickup_date, return_date, pickup_time, return_time).max(MINIMUM_RENTAL_DAYS)
}

/// [`compute_days`] over raw form strings. Empty times count as absent.
///
/// Returns `None` when either date does not parse.
pub fn compute_days_from_strings(
    pickup_date: &str,
    return_date: &str,
    pickup_time: Option<&str>,
    return_time: Option<&str>,
) -> Option<u32> {
    let pickup = parse_date(pickup_date)?;
    let ret = parse_date(return_date)?;
    let pickup_time = pickup_time.filter(|t| !t.trim().is_empty());
    let return_time = return_time.filter(|t| !t.trim().is_empty());

    Some(compute_days(pickup, ret, pickup_time, return_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!(parse_time_of_day("00:00"), Some(0));
        assert_eq!(parse_time_of_day("10:30"), Some(630));
        assert_eq!(parse_time_of_day("23:59"), Some(1439));
        assert_eq!(parse_time_of_day("24:00"), None);
        assert_eq!(parse_time_of_day("10:60"), None);
        assert_eq!(parse_time_of_day("ten:30"), None);
        assert_eq!(parse_time_of_day("1030"), None);
    }

    #[test]
    fn test_late_return_adds_a_day() {
        let days = compute_days(date("2025-06-01"), date("2025-06-03"), Some("10:00"), Some("12:00"));
        assert_eq!(days, 3);
    }

    #[test]
    fn test_return_within_grace_period_adds_nothing() {
        let days = compute_days(date("2025-06-01"), date("2025-06-03"), Some("10:00"), Some("10:30"));
        assert_eq!(days, 2);
    }

    #[test]
    fn test_exactly_one_hour_late_is_not_billed() {
        let days = compute_days(date("2025-06-01"), date("2025-06-05"), Some("10:00"), Some("11:00"));
        assert_eq!(days, 4);
    }

    #[test]
    fn test_floor_applies_to_short_and_reversed_ranges() {
        assert_eq!(compute_days(date("2025-06-01"), date("2025-06-01"), None, None), 2);
        assert_eq!(compute_days(date("2025-06-01"), date("2025-06-02"), None, None), 2);
        assert_eq!(compute_days(date("2025-06-10"), date("2025-06-01"), None, None), 9);
    }

    #[test]
    fn test_malformed_time_is_ignored() {
        let days = compute_days(date("2025-06-01"), date("2025-06-04"), Some("10:00"), Some("noon"));
        assert_eq!(days, 3);
    }

    #[test]
    fn test_adjusted_days_has_no_floor() {
        assert_eq!(adjusted_days(date("2025-06-01"), date("2025-06-02"), None, None), 1);
        assert_eq!(
            adjusted_days(date("2025-06-01"), date("2025-06-02"), Some("08:00"), Some("18:00")),
            2
        );
    }

    #[test]
    fn test_compute_days_from_strings() {
        assert_eq!(
            compute_days_from_strings("2025-06-01", "2025-06-08", Some(""), Some("")),
            Some(7)
        );
        assert_eq!(compute_days_from_strings("01/06/2025", "2025-06-08", None, None), None);
    }
}
