//! Locale-aware rendering of ISO-8601 date strings for display.
//!
//! Only day-first numeric locales are supported: zero-padded day and month,
//! numeric year, and a 24-hour `HH:MM` time.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};

/// Returned in place of a formatted value when the input is not a date.
pub const INVALID_DATE: &str = "Invalid Date";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLocale {
    pub tag: &'static str,
    pub date_separator: char,
    /// Placed between the date and the time.
    pub date_time_joiner: &'static str,
}

impl Default for DisplayLocale {
    fn default() -> Self {
        Self {
            tag: "es-ES",
            date_separator: '/',
            date_time_joiner: ", ",
        }
    }
}

impl DisplayLocale {
    pub fn for_tag(tag: &str) -> Option<Self> {
        let locale = match tag.trim().to_ascii_lowercase().as_str() {
            "es" | "es-es" => Self::default(),
            "en-gb" => Self {
                tag: "en-GB",
                ..Self::default()
            },
            "pt" | "pt-pt" => Self {
                tag: "pt-PT",
                ..Self::default()
            },
            "it" | "it-it" => Self {
                tag: "it-IT",
                ..Self::default()
            },
            "fr" | "fr-fr" => Self {
                tag: "fr-FR",
                date_separator: '/',
                date_time_joiner: " ",
            },
            "de" | "de-de" => Self {
                tag: "de-DE",
                date_separator: '.',
                date_time_joiner: ", ",
            },
            _ => return None,
        };
        Some(locale)
    }
}

/// Parses the forms a browser date constructor accepts for ISO input:
/// RFC 3339 with offset, a date-time without offset (read in `tz`), or a bare
/// date (read as UTC midnight).
pub fn parse_iso<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(tz));
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, pattern) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)).with_timezone(tz))
}

#[derive(Debug, Clone)]
pub struct DateFormatter<Tz: TimeZone> {
    locale: DisplayLocale,
    tz: Tz,
}

impl<Tz: TimeZone> DateFormatter<Tz> {
    pub fn new(locale: DisplayLocale, tz: Tz) -> Self {
        Self { locale, tz }
    }

    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    /// `dd/mm/yyyy` with the locale's separator, or [`INVALID_DATE`].
    pub fn format_date(&self, iso: &str) -> String {
        self.try_format_date(iso)
            .unwrap_or_else(|_| INVALID_DATE.to_string())
    }

    /// Date followed by `HH:MM`, or [`INVALID_DATE`].
    pub fn format_date_time(&self, iso: &str) -> String {
        self.try_format_date_time(iso)
            .unwrap_or_else(|_| INVALID_DATE.to_string())
    }

    pub fn try_format_date(&self, iso: &str) -> Result<String, FormatError> {
        self.parse(iso).map(|dt| self.render_date(&dt))
    }

    pub fn try_format_date_time(&self, iso: &str) -> Result<String, FormatError> {
        self.parse(iso).map(|dt| self.render_date_time(&dt))
    }

    pub fn render_date<T: TimeZone>(&self, dt: &DateTime<T>) -> String {
        let local = dt.with_timezone(&self.tz);
        let sep = self.locale.date_separator;
        format!(
            "{:02}{sep}{:02}{sep}{}",
            local.day(),
            local.month(),
            local.year()
        )
    }

    pub fn render_date_time<T: TimeZone>(&self, dt: &DateTime<T>) -> String {
        let local = dt.with_timezone(&self.tz);
        format!(
            "{}{}{:02}:{:02}",
            self.render_date(&local),
            self.locale.date_time_joiner,
            local.hour(),
            local.minute()
        )
    }

    fn parse(&self, iso: &str) -> Result<DateTime<Tz>, FormatError> {
        parse_iso(iso, &self.tz).ok_or_else(|| FormatError::InvalidDate(iso.to_string()))
    }
}
