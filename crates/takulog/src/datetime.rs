//! Timestamp parsing and the fixed ja-JP display format.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc, Weekday};

/// Session times are shown in JST regardless of the viewer's locale.
fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("JST is a valid offset")
}

/// Parses an RFC 3339 timestamp, `None` on anything invalid.
///
/// Invalid dates are filtered out by callers rather than rendered, so a
/// renderable "Invalid Date" can never reach the page.
pub fn parse_start(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn weekday_ja(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "日",
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
    }
}

/// `2025/08/05` in JST.
pub fn format_date(dt: DateTime<Utc>) -> String {
    let local = dt.with_timezone(&jst());
    format!("{:04}/{:02}/{:02}", local.year(), local.month(), local.day())
}

/// `2025/08/05(火) 19:00` in JST.
pub fn format_date_time(dt: DateTime<Utc>) -> String {
    let local = dt.with_timezone(&jst());
    format!(
        "{:04}/{:02}/{:02}({}) {:02}:{:02}",
        local.year(),
        local.month(),
        local.day(),
        weekday_ja(local.weekday()),
        local.hour(),
        local.minute()
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_rfc3339() {
        let dt = parse_start("2999-01-01T00:00:00Z").unwrap();
        assert_eq!(dt.year(), 2999);
    }

    #[test]
    fn invalid_input_is_none() {
        assert_eq!(parse_start(""), None);
        assert_eq!(parse_start("not a date"), None);
        assert_eq!(parse_start("2025-13-40T99:99:99Z"), None);
    }

    #[test]
    fn formats_in_jst() {
        // 2025-08-05T10:30:00Z is 19:30 on the same Tuesday in JST
        let dt = parse_start("2025-08-05T10:30:00Z").unwrap();
        assert_eq!(format_date(dt), "2025/08/05");
        assert_eq!(format_date_time(dt), "2025/08/05(火) 19:30");
    }

    #[test]
    fn date_rolls_over_at_jst_midnight() {
        let dt = parse_start("2025-08-05T15:30:00Z").unwrap();
        assert_eq!(format_date(dt), "2025/08/06");
    }
}
