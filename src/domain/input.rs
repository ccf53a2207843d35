use chrono::{Datelike, NaiveDate};
use thiserror::Error;

const MIN_BIRTH_YEAR: i32 = 1900;

/// Rejections shown next to the form fields; the message is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("이름을 입력해주세요")]
    EmptyName,
    #[error("생년월일을 입력해주세요")]
    EmptyBirth,
    #[error("올바른 형식으로 입력해주세요 (YYYY-MM-DD)")]
    Format,
    #[error("올바른 연도를 입력해주세요")]
    Year,
    #[error("올바른 월을 입력해주세요 (01-12)")]
    Month,
    #[error("올바른 일을 입력해주세요")]
    Day,
    #[error("미래 날짜는 입력할 수 없습니다")]
    Future,
}

pub fn validate_name(raw: &str) -> Result<String, InputError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }
    Ok(name.to_string())
}

/// Reformats keystrokes as `YYYY-MM-DD`, inserting hyphens as digits arrive.
pub fn format_birth_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(8).collect();

    let mut formatted = String::with_capacity(10);
    for (i, c) in digits.chars().enumerate() {
        if i == 4 || i == 6 {
            formatted.push('-');
        }
        formatted.push(c);
    }
    formatted
}

/// Checks a `YYYY-MM-DD` birthdate is a real day between 1900-01-01 and `today`.
pub fn validate_birth(value: &str, today: NaiveDate) -> Result<NaiveDate, InputError> {
    if value.is_empty() {
        return Err(InputError::EmptyBirth);
    }

    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_formed {
        return Err(InputError::Format);
    }

    let year: i32 = value[0..4].parse().map_err(|_| InputError::Format)?;
    let month: u32 = value[5..7].parse().map_err(|_| InputError::Format)?;
    let day: u32 = value[8..10].parse().map_err(|_| InputError::Format)?;

    if year < MIN_BIRTH_YEAR || year > today.year() {
        return Err(InputError::Year);
    }
    if !(1..=12).contains(&month) {
        return Err(InputError::Month);
    }

    let birth = NaiveDate::from_ymd_opt(year, month, day).ok_or(InputError::Day)?;
    if birth > today {
        return Err(InputError::Future);
    }
    Ok(birth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 28).unwrap()
    }

    #[test]
    fn test_format_birth_input_as_typed() {
        assert_eq!(format_birth_input(""), "");
        assert_eq!(format_birth_input("199"), "199");
        assert_eq!(format_birth_input("1990"), "1990");
        assert_eq!(format_birth_input("19900"), "1990-0");
        assert_eq!(format_birth_input("1990051"), "1990-05-1");
        assert_eq!(format_birth_input("19900512"), "1990-05-12");
    }

    #[test]
    fn test_format_birth_input_cleans_pastes() {
        assert_eq!(format_birth_input("1990.05.12"), "1990-05-12");
        assert_eq!(format_birth_input("1990/05/12 생"), "1990-05-12");
        assert_eq!(format_birth_input("1990051299"), "1990-05-12");
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("  홍길동 "), Ok("홍길동".to_string()));
        assert_eq!(validate_name("   "), Err(InputError::EmptyName));
    }

    #[test]
    fn test_validate_birth_accepts_real_dates() {
        assert_eq!(
            validate_birth("1990-05-12", today()),
            Ok(NaiveDate::from_ymd_opt(1990, 5, 12).unwrap())
        );
        assert!(validate_birth("2000-02-29", today()).is_ok());
        assert!(validate_birth("1900-01-01", today()).is_ok());
        assert!(validate_birth("2026-01-28", today()).is_ok());
    }

    #[test]
    fn test_validate_birth_rejections() {
        assert_eq!(validate_birth("", today()), Err(InputError::EmptyBirth));
        assert_eq!(validate_birth("19900512", today()), Err(InputError::Format));
        assert_eq!(validate_birth("1990-5-12", today()), Err(InputError::Format));
        assert_eq!(validate_birth("1899-12-31", today()), Err(InputError::Year));
        assert_eq!(validate_birth("2027-01-01", today()), Err(InputError::Year));
        assert_eq!(validate_birth("1990-13-01", today()), Err(InputError::Month));
        assert_eq!(validate_birth("1990-00-10", today()), Err(InputError::Month));
        assert_eq!(validate_birth("2001-02-29", today()), Err(InputError::Day));
        assert_eq!(validate_birth("1990-04-31", today()), Err(InputError::Day));
        assert_eq!(validate_birth("1990-04-00", today()), Err(InputError::Day));
        assert_eq!(validate_birth("2026-01-29", today()), Err(InputError::Future));
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(InputError::Future.to_string(), "미래 날짜는 입력할 수 없습니다");
        assert_eq!(
            InputError::Format.to_string(),
            "올바른 형식으로 입력해주세요 (YYYY-MM-DD)"
        );
    }
}
