use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Languages the site is published in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// Picks the first supported language from an `Accept-Language` header,
    /// honouring q-weights.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        let mut candidates: Vec<(Locale, f32)> = header
            .split(',')
            .filter_map(|part| {
                let mut pieces = part.trim().split(';');
                let tag = pieces.next()?.trim();
                let quality = pieces
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.parse::<f32>().ok())
                    .unwrap_or(1.0);
                // q=0 marks the language as not acceptable
                if quality <= 0.0 {
                    return None;
                }
                let primary = tag.split('-').next()?;
                primary.parse::<Locale>().ok().map(|locale| (locale, quality))
            })
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.first().map(|(locale, _)| *locale)
    }

    /// Short numeric date the way each locale writes it: `7/4/2025` in
    /// English, `04/07/2025` in French.
    pub fn format_date(&self, date: NaiveDate) -> String {
        match self {
            Locale::En => format!("{}/{}/{}", date.month(), date.day(), date.year()),
            Locale::Fr => format!("{:02}/{:02}/{}", date.day(), date.month(), date.year()),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Fr => write!(f, "fr"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            _ => Err(format!("Unsupported locale: {}", s)),
        }
    }
}
