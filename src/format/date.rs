use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::models::Language;

/// Length of `YYYY-MM-DDTHH:MM:SS`.
const TIMESTAMP_LEN: usize = 19;

/// Length of `YYYY-MM-DD HH:MM`, used when a timestamp cannot be parsed.
const RAW_FALLBACK_LEN: usize = 16;

struct TimestampFormat {
    pattern: &'static str,
    normalize: fn(&str) -> String,
}

/// Tried in order, first match wins.
const TIMESTAMP_FORMATS: &[TimestampFormat] = &[
    TimestampFormat {
        pattern: "%Y-%m-%dT%H:%M:%S",
        normalize: iso_prefix,
    },
    TimestampFormat {
        pattern: "%Y-%m-%d %H:%M:%S",
        normalize: space_separated,
    },
];

fn iso_prefix(raw: &str) -> String {
    take_chars(raw, TIMESTAMP_LEN)
}

fn space_separated(raw: &str) -> String {
    take_chars(&raw.replace('T', " "), TIMESTAMP_LEN)
}

fn take_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Parses a backend timestamp. The source zone is always UTC; any suffix
/// past the seconds field (fractions, `Z`, offsets) is ignored.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    TIMESTAMP_FORMATS.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(&(fmt.normalize)(raw), fmt.pattern)
            .ok()
            .map(|naive| naive.and_utc())
    })
}

/// `DD Mon, HH:MM` in `tz`. Unparseable input degrades to its first 16
/// characters with `T` shown as a space.
pub fn format_trade_time(raw: &str, tz: &Tz, language: Language) -> String {
    match parse_timestamp(raw) {
        Some(ts) => {
            let local = ts.with_timezone(tz);
            format!(
                "{:02} {}, {:02}:{:02}",
                local.day(),
                language.month_abbrev(local.month()),
                local.hour(),
                local.minute()
            )
        }
        None => {
            debug!(raw, "timestamp not parseable, showing raw text");
            take_chars(raw, RAW_FALLBACK_LEN).replace('T', " ")
        }
    }
}

/// `DD Mon`.
pub fn format_day_month(date: NaiveDate, language: Language) -> String {
    format!("{:02} {}", date.day(), language.month_abbrev(date.month()))
}

/// Header of the weekly stats block, e.g. `08 Jan - 15 Jan`.
pub fn week_range_label(now: DateTime<Utc>, tz: &Tz, language: Language) -> String {
    let end = now.with_timezone(tz).date_naive();
    let start = (now - Duration::days(7)).with_timezone(tz).date_naive();
    format!(
        "{} - {}",
        format_day_month(start, language),
        format_day_month(end, language)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_iso_form() {
        let ts = parse_timestamp("2025-01-15T10:30:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn parses_space_form_and_ignores_suffix() {
        let expected = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2025-01-15 10:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2025-01-15T10:30:00.000Z").unwrap(), expected);
        assert_eq!(parse_timestamp("2025-01-15 10:30:00.123456").unwrap(), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("not-a-date").is_none());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("2025-13-40T99:00:00").is_none());
    }

    #[test]
    fn formats_in_utc() {
        assert_eq!(
            format_trade_time("2025-01-15T10:30:00", &Tz::UTC, Language::English),
            "15 Jan, 10:30"
        );
    }

    #[test]
    fn converts_to_local_zone() {
        // Jakarta is UTC+7 year-round
        assert_eq!(
            format_trade_time("2025-01-15T20:30:00", &chrono_tz::Asia::Jakarta, Language::English),
            "16 Jan, 03:30"
        );
        assert_eq!(
            format_trade_time("2025-05-01 01:05:00", &chrono_tz::Asia::Jakarta, Language::Indonesian),
            "01 Mei, 08:05"
        );
    }

    #[test]
    fn unparseable_degrades_to_raw_prefix() {
        assert_eq!(
            format_trade_time("not-a-date", &Tz::UTC, Language::English),
            "not-a-date"
        );
        assert_eq!(
            format_trade_time("15/01/2025T10:30:00 UTC", &Tz::UTC, Language::English),
            "15/01/2025 10:30"
        );
    }

    #[test]
    fn day_month() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(format_day_month(date, Language::English), "04 Mar");
    }

    #[test]
    fn week_range() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(
            week_range_label(now, &Tz::UTC, Language::English),
            "08 Jan - 15 Jan"
        );
    }
}
