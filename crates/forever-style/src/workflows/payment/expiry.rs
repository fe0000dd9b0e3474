use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::error;

/// Two ASCII digits, a slash, two ASCII digits.
const EXPIRY_PATTERN: &str = r"^([0-9]{2})/([0-9]{2})$";

fn expiry_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| match Regex::new(EXPIRY_PATTERN) {
            Ok(pattern) => Some(pattern),
            Err(error) => {
                error!(pattern = EXPIRY_PATTERN, %error, "expiry pattern failed to compile");
                None
            }
        })
        .as_ref()
}

/// Parse `MM/YY` into `(month, four-digit year)`.
pub fn parse_expiry(raw: &str) -> Option<(u32, i32)> {
    let captures = expiry_pattern()?.captures(raw)?;
    let month: u32 = captures[1].parse().ok()?;
    let year: i32 = captures[2].parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some((month, 2000 + year))
}

/// A card stays valid through the end of its printed month.
pub fn is_valid_expiry(raw: &str, today: NaiveDate) -> bool {
    match parse_expiry(raw) {
        Some((month, year)) => (year, month) >= (today.year(), today.month()),
        None => false,
    }
}

/// Shape typed digits into `MM/YY`, inserting the slash once the month is
/// complete. Extra digits beyond four are dropped.
pub fn format_expiry_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(4).collect();
    if digits.len() > 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Live state of the expiry field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiryInput {
    pub digits: String,
    pub formatted: String,
    pub is_valid: bool,
}

impl ExpiryInput {
    pub fn from_raw(raw: &str, today: NaiveDate) -> Self {
        let formatted = format_expiry_input(raw);
        let digits = formatted.chars().filter(char::is_ascii_digit).collect();
        let is_valid = is_valid_expiry(&formatted, today);

        Self {
            digits,
            formatted,
            is_valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_first_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
    }

    #[test]
    fn rejects_month_out_of_range_for_any_date() {
        for today in [
            june_first_2025(),
            NaiveDate::from_ymd_opt(1999, 1, 1).expect("valid date"),
            NaiveDate::from_ymd_opt(2099, 12, 31).expect("valid date"),
        ] {
            assert!(!is_valid_expiry("13/25", today));
            assert!(!is_valid_expiry("00/25", today));
        }
    }

    #[test]
    fn compares_against_the_current_month() {
        let today = june_first_2025();
        assert!(!is_valid_expiry("01/20", today));
        assert!(!is_valid_expiry("05/25", today));
        assert!(is_valid_expiry("06/25", today));
        assert!(is_valid_expiry("07/25", today));
        assert!(is_valid_expiry("01/26", today));
    }

    #[test]
    fn last_day_of_month_is_still_valid() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date");
        assert!(is_valid_expiry("06/25", today));
    }

    #[test]
    fn requires_exact_mm_slash_yy_shape() {
        let today = june_first_2025();
        for raw in ["6/25", "06/2025", "0625", "06-25", " 06/25", "06/25 ", "ab/cd", ""] {
            assert!(!is_valid_expiry(raw, today), "{raw:?} should be invalid");
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        let today = june_first_2025();
        assert!(expiry_pattern().is_some());
        for raw in ["٠٦/٢٥", "０６/２５", "०६/२५", "06/٢٥"] {
            assert_eq!(parse_expiry(raw), None, "{raw:?} should not parse");
            assert!(!is_valid_expiry(raw, today), "{raw:?} should be invalid");
        }
        assert!(is_valid_expiry("06/25", today));
    }

    #[test]
    fn formats_typed_digits() {
        assert_eq!(format_expiry_input("0"), "0");
        assert_eq!(format_expiry_input("07"), "07");
        assert_eq!(format_expiry_input("072"), "07/2");
        assert_eq!(format_expiry_input("07/25"), "07/25");
        assert_eq!(format_expiry_input("072599"), "07/25");
    }

    #[test]
    fn input_bundles_digits_format_and_validity() {
        let input = ExpiryInput::from_raw("0725", june_first_2025());
        assert_eq!(input.digits, "0725");
        assert_eq!(input.formatted, "07/25");
        assert!(input.is_valid);

        let partial = ExpiryInput::from_raw("07", june_first_2025());
        assert!(!partial.is_valid);
    }
}
