//! Date helper functions

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::i18n::I18n;

/// Parse a content date string in the formats the CMS emits.
///
/// Returns `None` for empty or unparseable input.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 / ISO 8601 with offset: keep the wall-clock date the author wrote
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    None
}

/// Renders content dates as "day month year" in the site language
#[derive(Debug, Clone)]
pub struct DateFormatter {
    months: [String; 12],
    unspecified: String,
}

impl DateFormatter {
    /// Build a formatter from the labels of an i18n table
    pub fn new(i18n: &I18n) -> Self {
        let months = std::array::from_fn(|i| i18n.month_name(i as u32 + 1));
        Self {
            months,
            unspecified: i18n.get("date.unspecified"),
        }
    }

    /// Format a date for display.
    ///
    /// Absent (or blank) input yields the "date unspecified" label; input
    /// that does not parse is returned unchanged.
    pub fn format(&self, date: Option<&str>) -> String {
        let Some(raw) = date.filter(|d| !d.trim().is_empty()) else {
            return self.unspecified.clone();
        };

        match parse_date(raw) {
            Some(dt) => format!(
                "{} {} {}",
                dt.day(),
                self.months[dt.month0() as usize],
                dt.year()
            ),
            None => raw.to_string(),
        }
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(&I18n::default())
    }
}
