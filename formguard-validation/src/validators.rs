// Field value predicates

use chrono::{Local, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

// reference: https://stackoverflow.com/a/46181
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .unwrap()
});

// ASCII letters, Hangul syllables, and spaces
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z가-힣 ]+$").unwrap());

static ENGLISH_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").unwrap());

static KOREAN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[가-힣]+$").unwrap());

/// Earliest accepted birth date, exclusive.
static BIRTH_FLOOR: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(1900, 1, 1).unwrap());

/// Value has at least `len` characters.
pub fn min_length(value: &str, len: usize) -> bool {
    value.chars().count() >= len
}

/// Value has at most `len` characters.
pub fn max_length(value: &str, len: usize) -> bool {
    value.chars().count() <= len
}

/// Value has exactly `len` characters.
pub fn equals_length(value: &str, len: usize) -> bool {
    value.chars().count() == len
}

/// Value parses as a number that is at least `min`. Fails closed on parse
/// errors.
pub fn min_number(value: &str, min: f64) -> bool {
    value.trim().parse::<f64>().map(|n| n >= min).unwrap_or(false)
}

/// Value parses as a number that is at most `max`. Fails closed on parse
/// errors.
pub fn max_number(value: &str, max: f64) -> bool {
    value.trim().parse::<f64>().map(|n| n <= max).unwrap_or(false)
}

/// Value consists only of ASCII digits.
pub fn is_digit(value: &str) -> bool {
    DIGIT_REGEX.is_match(value)
}

/// Value looks like an email address.
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Value is a personal name: ASCII letters, Hangul syllables, and spaces.
pub fn is_name(value: &str) -> bool {
    NAME_REGEX.is_match(value)
}

/// Value consists only of ASCII letters and spaces.
pub fn is_english(value: &str) -> bool {
    ENGLISH_REGEX.is_match(value)
}

/// Value consists only of Hangul syllables.
pub fn is_korean(value: &str) -> bool {
    KOREAN_REGEX.is_match(value)
}

/// Boolean coercion of a raw value: any non-empty string is truthy.
pub fn is_truthy(value: &str) -> bool {
    !value.is_empty()
}

/// Value is a calendar date strictly after 1900-01-01 and strictly before
/// now.
pub fn is_valid_birth(value: &str) -> bool {
    let Some(date) = parse_date(value) else {
        return false;
    };
    date > *BIRTH_FLOOR && date.and_time(NaiveTime::MIN) < Local::now().naive_local()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y%m%d", "%Y/%m/%d"];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_boundary() {
        assert!(min_length("12345", 5));
        assert!(!min_length("1234", 5));
    }

    #[test]
    fn test_max_length_boundary() {
        assert!(max_length("12345", 5));
        assert!(!max_length("123456", 5));
    }

    #[test]
    fn test_equals_length() {
        assert!(equals_length("abcd", 4));
        assert!(!equals_length("abc", 4));
        assert!(!equals_length("abcde", 4));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(equals_length("홍길동", 3));
    }

    #[test]
    fn test_min_number() {
        assert!(min_number("10", 10.0));
        assert!(min_number("10.5", 10.0));
        assert!(!min_number("9", 10.0));
    }

    #[test]
    fn test_max_number() {
        assert!(max_number("10", 10.0));
        assert!(!max_number("10.5", 10.0));
    }

    #[test]
    fn test_numeric_rules_fail_closed_on_garbage() {
        assert!(!min_number("abc", 0.0));
        assert!(!max_number("12a", 100.0));
    }

    #[test]
    fn test_is_digit() {
        assert!(is_digit("1234"));
        assert!(!is_digit("12a3"));
        assert!(!is_digit(""));
    }

    #[test]
    fn test_is_email() {
        assert!(is_email("user@example.com"));
        assert!(is_email("user.name+tag@example.co.uk"));
        assert!(!is_email("invalid"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@"));
    }

    #[test]
    fn test_is_name() {
        assert!(is_name("John Doe"));
        assert!(is_name("홍길동"));
        assert!(is_name("John 홍"));
        assert!(!is_name("John3"));
        assert!(!is_name("john@doe"));
    }

    #[test]
    fn test_is_english() {
        assert!(is_english("hello world"));
        assert!(!is_english("hello1"));
        assert!(!is_english("안녕"));
    }

    #[test]
    fn test_is_korean() {
        assert!(is_korean("안녕하세요"));
        assert!(!is_korean("안녕 하세요"));
        assert!(!is_korean("hello"));
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy("anything"));
        assert!(is_truthy("0"));
        assert!(!is_truthy(""));
    }

    #[test]
    fn test_is_valid_birth() {
        assert!(is_valid_birth("1990-05-01"));
        assert!(is_valid_birth("19900501"));
        assert!(!is_valid_birth("1850-01-01"));
        assert!(!is_valid_birth("1900-01-01"));
        assert!(!is_valid_birth("2999-01-01"));
        assert!(!is_valid_birth("not a date"));
    }
}
