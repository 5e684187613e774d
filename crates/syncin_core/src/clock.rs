//! Creation-time snapshot formatting.
//!
//! # Responsibility
//! - Capture the current instant as display-ready date and time strings.
//! - Keep the snapshot format stable across page headers and the page list.
//!
//! # Invariants
//! - Date renders as `Monday, January 1, 2024` (weekday, long month, day, year).
//! - Time renders as `3:00 PM` (12-hour clock, two-digit minutes).
//! - A snapshot is frozen at capture; it records creation, not last edit.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%A, %B %-d, %Y";
const TIME_FORMAT: &str = "%-I:%M %p";

/// Display-ready creation instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSnapshot {
    /// Formatted calendar date, e.g. `Monday, January 1, 2024`.
    pub date: String,
    /// Formatted wall-clock time, e.g. `3:00 PM`.
    pub time: String,
}

impl TimeSnapshot {
    /// Captures the current local instant.
    pub fn now() -> Self {
        Self::from_datetime(Local::now())
    }

    /// Formats a caller-provided instant.
    ///
    /// Used by tests and import paths where the instant already exists.
    pub fn from_datetime(instant: DateTime<Local>) -> Self {
        Self {
            date: instant.format(DATE_FORMAT).to_string(),
            time: instant.format(TIME_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TimeSnapshot;
    use chrono::{Local, TimeZone};

    #[test]
    fn date_uses_weekday_long_month_day_year() {
        let instant = Local
            .with_ymd_and_hms(2024, 1, 1, 15, 0, 0)
            .single()
            .expect("unambiguous local instant");
        let snapshot = TimeSnapshot::from_datetime(instant);
        assert_eq!(snapshot.date, "Monday, January 1, 2024");
    }

    #[test]
    fn time_uses_twelve_hour_clock_with_padded_minutes() {
        let afternoon = Local
            .with_ymd_and_hms(2024, 1, 1, 15, 0, 0)
            .single()
            .expect("unambiguous local instant");
        assert_eq!(TimeSnapshot::from_datetime(afternoon).time, "3:00 PM");

        let morning = Local
            .with_ymd_and_hms(2024, 6, 9, 9, 5, 0)
            .single()
            .expect("unambiguous local instant");
        assert_eq!(TimeSnapshot::from_datetime(morning).time, "9:05 AM");
    }

    #[test]
    fn day_of_month_is_not_zero_padded() {
        let instant = Local
            .with_ymd_and_hms(2026, 8, 6, 0, 30, 0)
            .single()
            .expect("unambiguous local instant");
        let snapshot = TimeSnapshot::from_datetime(instant);
        assert_eq!(snapshot.date, "Thursday, August 6, 2026");
        assert_eq!(snapshot.time, "12:30 AM");
    }
}
