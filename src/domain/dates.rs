use chrono::{Datelike, FixedOffset, NaiveDate, Utc};

const WEEKDAYS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Current calendar date at the given UTC offset (in hours).
///
/// The app runs on the user's device, so "today" is a local wall-clock date.
/// An out-of-range offset falls back to UTC.
pub fn today_in(offset_hours: i32) -> NaiveDate {
    match FixedOffset::east_opt(offset_hours * 3600) {
        Some(offset) => Utc::now().with_timezone(&offset).date_naive(),
        None => {
            tracing::warn!(offset_hours, "Invalid UTC offset, using UTC");
            Utc::now().date_naive()
        }
    }
}

/// `YYYYMMDD`, the day component of every seed.
pub fn today_stamp(today: NaiveDate) -> String {
    today.format("%Y%m%d").to_string()
}

/// Parses a stamp produced by [`today_stamp`].
pub fn parse_stamp(stamp: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(stamp, "%Y%m%d").ok()
}

/// e.g. "2026년 1월 28일 수요일"
pub fn formatted_display_date(today: NaiveDate) -> String {
    let weekday = WEEKDAYS[today.weekday().num_days_from_sunday() as usize];
    format!(
        "{}년 {}월 {}일 {}요일",
        today.year(),
        today.month(),
        today.day(),
        weekday
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_today_stamp_is_zero_padded() {
        assert_eq!(today_stamp(date(2025, 1, 1)), "20250101");
        assert_eq!(today_stamp(date(2026, 10, 19)), "20261019");
    }

    #[test]
    fn test_parse_stamp() {
        assert_eq!(parse_stamp("20240229"), Some(date(2024, 2, 29)));
        assert_eq!(parse_stamp("20230229"), None);
        assert_eq!(parse_stamp("garbage"), None);
    }

    #[test]
    fn test_formatted_display_date() {
        assert_eq!(formatted_display_date(date(2026, 1, 28)), "2026년 1월 28일 수요일");
        assert_eq!(formatted_display_date(date(2025, 1, 5)), "2025년 1월 5일 일요일");
        assert_eq!(formatted_display_date(date(2025, 1, 11)), "2025년 1월 11일 토요일");
    }

    #[test]
    fn test_today_in_tracks_offset() {
        let kst = today_in(9);
        let utc = Utc::now().date_naive();
        assert!((kst - utc).num_days().abs() <= 1);
    }
}
