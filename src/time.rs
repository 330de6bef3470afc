use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// Output format expected by the visualizer: 12-hour clock with AM/PM marker.
const OUTPUT_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

// ---------------------------------------------------------------------------
// Step size
// ---------------------------------------------------------------------------

/// A structured duration between consecutive time steps.
///
/// All fields default to zero, so a single-unit step can come straight from a
/// JSON config like `{"hours": 1}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepSize {
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub microseconds: i64,
}

impl StepSize {
    pub fn weeks(n: i64) -> Self {
        StepSize {
            weeks: n,
            ..Default::default()
        }
    }

    pub fn days(n: i64) -> Self {
        StepSize {
            days: n,
            ..Default::default()
        }
    }

    pub fn hours(n: i64) -> Self {
        StepSize {
            hours: n,
            ..Default::default()
        }
    }

    pub fn minutes(n: i64) -> Self {
        StepSize {
            minutes: n,
            ..Default::default()
        }
    }

    pub fn seconds(n: i64) -> Self {
        StepSize {
            seconds: n,
            ..Default::default()
        }
    }

    /// Collapse the unit fields into a single `chrono` duration.
    pub fn to_duration(self) -> Duration {
        Duration::weeks(self.weeks)
            + Duration::days(self.days)
            + Duration::hours(self.hours)
            + Duration::minutes(self.minutes)
            + Duration::seconds(self.seconds)
            + Duration::microseconds(self.microseconds)
    }
}

// ---------------------------------------------------------------------------
// Start-time parsing
// ---------------------------------------------------------------------------

// Month/day/year family first (the visualizer's documented input style),
// then ISO fallbacks.
const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

/// Parse a start-time string into a naive (zone-less) timestamp.
///
/// Date-only inputs resolve to midnight; a bare `"M/YYYY"` resolves to the
/// first of the month.
fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    // Hour-only clock ("1/1/2010 11 AM"): chrono insists on minutes, so give
    // it an explicit :00.
    let tokens: Vec<&str> = s.split_whitespace().collect();
    if tokens.len() == 3 && tokens[1].chars().all(|c| c.is_ascii_digit()) {
        let rebuilt = format!("{} {}:00 {}", tokens[0], tokens[1], tokens[2]);
        if let Ok(dt) = NaiveDateTime::parse_from_str(&rebuilt, "%m/%d/%Y %I:%M %p") {
            return Some(dt);
        }
    }
    // "M/YYYY" month-and-year shorthand.
    if let Some((m, y)) = s.split_once('/') {
        if y.len() == 4 {
            if let (Ok(month), Ok(year)) = (m.parse::<u32>(), y.parse::<i32>()) {
                return NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0);
            }
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Time-series generation
// ---------------------------------------------------------------------------

/// Generate `num_steps` equally spaced, formatted UTC timestamps.
///
/// `start_time` is interpreted in the system-local time zone and converted to
/// UTC; `None` starts at the current UTC time. Each output string is exactly
/// one `step` after its predecessor, formatted `MM/DD/YYYY HH:MM:SS AM/PM`.
///
/// Ambiguous or nonexistent local times (DST transitions) are rejected as
/// parse errors rather than resolved arbitrarily.
pub fn generate_utc_times(
    num_steps: usize,
    step: StepSize,
    start_time: Option<&str>,
) -> Result<Vec<String>> {
    let start = match start_time {
        None => Utc::now(),
        Some(s) => {
            let naive = parse_naive(s).ok_or_else(|| Error::StartTime(s.to_string()))?;
            Local
                .from_local_datetime(&naive)
                .single()
                .ok_or_else(|| Error::StartTime(s.to_string()))?
                .with_timezone(&Utc)
        }
    };
    Ok(generate_utc_times_from(start, num_steps, step))
}

/// Deterministic core of [`generate_utc_times`]: step from a known UTC
/// instant, no string parsing or local-zone lookup involved.
pub fn generate_utc_times_from(
    start: DateTime<Utc>,
    num_steps: usize,
    step: StepSize,
) -> Vec<String> {
    let step = step.to_duration();
    let mut out = Vec::with_capacity(num_steps);
    let mut current = start;
    for _ in 0..num_steps {
        out.push(current.format(OUTPUT_FORMAT).to_string());
        current += step;
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_series_from_known_start() {
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let times = generate_utc_times_from(start, 5, StepSize::hours(1));
        assert_eq!(
            times,
            vec![
                "01/01/2020 12:00:00 AM",
                "01/01/2020 01:00:00 AM",
                "01/01/2020 02:00:00 AM",
                "01/01/2020 03:00:00 AM",
                "01/01/2020 04:00:00 AM",
            ]
        );
    }

    #[test]
    fn afternoon_times_use_pm() {
        let start = Utc.with_ymd_and_hms(2020, 6, 15, 23, 30, 0).unwrap();
        let times = generate_utc_times_from(start, 2, StepSize::minutes(45));
        assert_eq!(times[0], "06/15/2020 11:30:00 PM");
        // Steps across midnight roll the date.
        assert_eq!(times[1], "06/16/2020 12:15:00 AM");
    }

    #[test]
    fn zero_steps_yields_empty() {
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert!(generate_utc_times_from(start, 0, StepSize::days(1)).is_empty());
    }

    #[test]
    fn composite_step_sums_units() {
        let step = StepSize {
            days: 1,
            hours: 2,
            minutes: 30,
            ..Default::default()
        };
        assert_eq!(step.to_duration(), Duration::minutes(24 * 60 + 150));
    }

    #[test]
    fn parses_documented_formats() {
        let cases = [
            ("1/1/2010 11:00:00 PM", (2010, 1, 1, 23, 0, 0)),
            ("1/1/2010 11:30 AM", (2010, 1, 1, 11, 30, 0)),
            ("1/1/2010 11 AM", (2010, 1, 1, 11, 0, 0)),
            ("1/1/2010 11 am", (2010, 1, 1, 11, 0, 0)),
            ("1/1/2020 12:00 AM", (2020, 1, 1, 0, 0, 0)),
            ("1/1/2010 23:15", (2010, 1, 1, 23, 15, 0)),
            ("1/1/2000", (2000, 1, 1, 0, 0, 0)),
            ("1/2000", (2000, 1, 1, 0, 0, 0)),
            ("2000-01-02", (2000, 1, 2, 0, 0, 0)),
            ("2000-01-02 03:04:05", (2000, 1, 2, 3, 4, 5)),
        ];
        for (input, (y, mo, d, h, mi, s)) in cases {
            let parsed = parse_naive(input).unwrap_or_else(|| panic!("failed on '{input}'"));
            let expected = NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, s)
                .unwrap();
            assert_eq!(parsed, expected, "input '{input}'");
        }
    }

    #[test]
    fn rejects_malformed_start_time() {
        assert!(parse_naive("not a date").is_none());
        assert!(parse_naive("13/2010x").is_none());
        let err = generate_utc_times(3, StepSize::hours(1), Some("garbage")).unwrap_err();
        assert!(matches!(err, Error::StartTime(_)));
    }

    #[test]
    fn step_size_from_json() {
        let step: StepSize = serde_json::from_str(r#"{"hours": 1}"#).unwrap();
        assert_eq!(step, StepSize::hours(1));
        let step: StepSize = serde_json::from_str(r#"{"weeks": 2, "seconds": 5}"#).unwrap();
        assert_eq!(step.to_duration(), Duration::weeks(2) + Duration::seconds(5));
    }
}
