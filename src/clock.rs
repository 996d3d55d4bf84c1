//! Date and time formatting for the `{year}`, `{date}` and `{datetime}` placeholders.

use chrono::{DateTime, FixedOffset, Local};
use log::warn;
use std::fmt::{Display, Write};

/// Source of the current time, rendered through a strftime-style format string.
pub trait Clock {
    /// Formats the current time with `format`.
    ///
    /// An invalid format string never panics; implementations log it and
    /// return the format string unchanged.
    fn format(&self, format: &str) -> String;
}

/// Wall clock in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn format(&self, format: &str) -> String {
        format_time(&Local::now(), format)
    }
}

/// A clock frozen at one instant. Useful for reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self { at }
    }

    /// Parses an RFC 3339 timestamp such as `2009-03-14T10:20:30+01:00`.
    pub fn parse(rfc3339: &str) -> crate::error::Result<Self> {
        let at = DateTime::parse_from_rfc3339(rfc3339).map_err(|e| {
            anyhow::anyhow!("Invalid timestamp '{rfc3339}': {e}")
        })?;
        Ok(Self { at })
    }
}

impl Clock for FixedClock {
    fn format(&self, format: &str) -> String {
        format_time(&self.at, format)
    }
}

fn format_time<Tz>(at: &DateTime<Tz>, format: &str) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: Display,
{
    // `to_string()` on a bad format panics; `write!` reports it instead.
    let mut out = String::new();
    match write!(out, "{}", at.format(format)) {
        Ok(()) => out,
        Err(_) => {
            warn!("Invalid date format '{format}', using it verbatim");
            format.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> FixedClock {
        FixedClock::parse("2009-03-14T10:20:30+01:00").unwrap()
    }

    #[test]
    fn formats_fixed_instant() {
        let clock = clock();
        assert_eq!(clock.format("%Y"), "2009");
        assert_eq!(clock.format("%Y-%m-%d"), "2009-03-14");
        assert_eq!(clock.format("%d.%m.%Y %H:%M:%S"), "14.03.2009 10:20:30");
    }

    #[test]
    fn invalid_format_is_returned_verbatim() {
        assert_eq!(clock().format("%Q broken"), "%Q broken");
    }

    #[test]
    fn plain_text_format_passes_through() {
        assert_eq!(clock().format("release"), "release");
    }

    #[test]
    fn rejects_bad_timestamp() {
        assert!(FixedClock::parse("yesterday").is_err());
    }
}
