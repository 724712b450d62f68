// Backend wording for a same-day overlap, e.g.
// "Same-day conflicts: vehicle must start after 14:30:00 on 2025-07-04"

use crate::services::rental_duration::parse_date;
use crate::shared::Locale;
use regex::Regex;
use std::sync::OnceLock;

pub const SAME_DAY_CONFLICT_MARKER: &str = "Same-day conflicts:";

/// Earliest slot the backend will accept after a same-day conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SameDayConflict {
    /// `HH:MM`, seconds dropped
    pub available_from: String,
    pub date: chrono::NaiveDate,
}

impl SameDayConflict {
    pub fn message(&self, locale: Locale) -> String {
        let date = locale.format_date(self.date);
        match locale {
            Locale::En => format!(
                "Vehicle is not available at that time. Please select {} or later on {}.",
                self.available_from, date
            ),
            Locale::Fr => format!(
                "Le véhicule n'est pas disponible à cette heure. Veuillez sélectionner {} ou plus tard le {}.",
                self.available_from, date
            ),
        }
    }
}

fn conflict_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"start after (?P<time>\d{2}:\d{2}):\d{2} on (?P<date>\d{4}-\d{2}-\d{2})")
            .expect("valid conflict regex")
    })
}

impl std::str::FromStr for SameDayConflict {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.contains(SAME_DAY_CONFLICT_MARKER) {
            return Err(());
        }

        let caps = conflict_pattern().captures(s).ok_or(())?;
        let date = parse_date(&caps["date"]).ok_or(())?;

        Ok(Self {
            available_from: caps["time"].to_string(),
            date,
        })
    }
}

/// Rewrites a same-day conflict error into a user-facing sentence.
///
/// Any other message, or a conflict message that does not match the expected
/// shape, is returned unchanged.
pub fn parse_conflict(raw_message: &str, locale: Locale) -> String {
    match raw_message.parse::<SameDayConflict>() {
        Ok(conflict) => conflict.message(locale),
        Err(()) => raw_message.to_string(),
    }
}
