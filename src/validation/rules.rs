//! Field predicates used by the form rule sets. Every format predicate is
//! vacuously true on empty or absent input; only [`required`] enforces
//! presence. This lets a rule set mark a field optional simply by leaving
//! `required` out while still checking the format of whatever was typed.

use chrono::{Local, NaiveDate};
use regex::Regex;

/// Strips the absent/empty cases that format predicates treat as valid.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Present and non-empty after trimming.
#[must_use]
pub fn required(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Loose email shape: something at something dot something, no whitespace.
#[must_use]
pub fn email(value: Option<&str>) -> bool {
    let Some(value) = present(value) else {
        return true;
    };
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").is_ok_and(|regex| regex.is_match(value))
}

/// Phone number after stripping spaces, hyphens, and parentheses: optional
/// leading `+`, then a non-zero digit and up to 15 more digits.
#[must_use]
pub fn phone(value: Option<&str>) -> bool {
    let Some(value) = present(value) else {
        return true;
    };
    let cleaned: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    Regex::new(r"^\+?[1-9]\d{0,15}$").is_ok_and(|regex| regex.is_match(&cleaned))
}

/// Present with at least `min` characters. Unlike the other format checks
/// this fails on empty input, so pair it with `required` for clear messages.
#[must_use]
pub fn min_length(value: Option<&str>, min: usize) -> bool {
    present(value).is_some_and(|v| v.chars().count() >= min)
}

/// At most `max` characters; empty input passes.
#[must_use]
pub fn max_length(value: Option<&str>, max: usize) -> bool {
    present(value).is_none_or(|v| v.chars().count() <= max)
}

/// Letters and spaces only.
#[must_use]
pub fn name(value: Option<&str>) -> bool {
    let Some(value) = present(value) else {
        return true;
    };
    Regex::new(r"^[a-zA-Z\s]+$").is_ok_and(|regex| regex.is_match(value))
}

/// A real `yyyy-mm-dd` calendar date that is not in the future. Date
/// portions only; the comparison ignores time of day.
#[must_use]
pub fn dob(value: Option<&str>) -> bool {
    let Some(value) = present(value) else {
        return true;
    };
    let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") else {
        return false;
    };
    date <= Local::now().date_naive()
}

/// One of the selectable gender options, exact case.
#[must_use]
pub fn gender(value: Option<&str>) -> bool {
    let Some(value) = present(value) else {
        return true;
    };
    matches!(value, "Male" | "Female" | "Other")
}

/// City name: letters, spaces, and common punctuation, 1 to 100 characters.
#[must_use]
pub fn city(value: Option<&str>) -> bool {
    let Some(value) = present(value) else {
        return true;
    };
    Regex::new(r"^[a-zA-Z\s,.'-]{1,100}$").is_ok_and(|regex| regex.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn required_rejects_absent_empty_and_whitespace() {
        assert!(!required(None));
        assert!(!required(Some("")));
        assert!(!required(Some("   ")));
        assert!(required(Some("x")));
        assert!(required(Some("  x  ")));
    }

    #[test]
    fn format_checks_are_vacuous_on_empty_input() {
        assert!(email(None));
        assert!(email(Some("")));
        assert!(phone(None));
        assert!(phone(Some("")));
        assert!(name(Some("")));
        assert!(dob(None));
        assert!(gender(Some("")));
        assert!(city(None));
        assert!(max_length(Some(""), 3));
    }

    #[test]
    fn email_requires_local_domain_and_dot() {
        assert!(email(Some("a@b.co")));
        assert!(email(Some("first.last@sub.example.com")));
        assert!(!email(Some("plainaddress")));
        assert!(!email(Some("no@dot")));
        assert!(!email(Some("spaces in@example.com")));
        assert!(!email(Some("two@@example.com")));
    }

    #[test]
    fn phone_strips_formatting_before_matching() {
        assert!(phone(Some("+1 (555) 123-4567")));
        assert!(phone(Some("9876543210")));
        assert!(!phone(Some("0123456789"))); // leading zero
        assert!(!phone(Some("+0 555")));
        assert!(!phone(Some("555-CALL-NOW")));
        assert!(!phone(Some("   "))); // non-empty input, digits required
    }

    #[test]
    fn phone_caps_at_sixteen_digits_total() {
        assert!(phone(Some("1234567890123456"))); // 16 digits
        assert!(!phone(Some("12345678901234567"))); // 17 digits
    }

    #[test]
    fn min_length_counts_characters_and_needs_presence() {
        assert!(!min_length(None, 2));
        assert!(!min_length(Some(""), 2));
        assert!(!min_length(Some("a"), 2));
        assert!(min_length(Some("ab"), 2));
        assert!(min_length(Some("héllo"), 5));
    }

    #[test]
    fn max_length_boundary() {
        assert!(max_length(Some("abc"), 3));
        assert!(!max_length(Some("abcd"), 3));
        assert!(max_length(None, 0));
    }

    #[test]
    fn name_allows_letters_and_spaces_only() {
        assert!(name(Some("Ada Lovelace")));
        assert!(!name(Some("Ada99")));
        assert!(!name(Some("O'Brien")));
    }

    #[test]
    fn dob_accepts_today_and_rejects_future_or_garbage() {
        let today = Local::now().date_naive();
        let tomorrow = today + Duration::days(1);
        let long_ago = today - Duration::days(365 * 20);

        assert!(dob(Some(&today.format("%Y-%m-%d").to_string())));
        assert!(dob(Some(&long_ago.format("%Y-%m-%d").to_string())));
        assert!(!dob(Some(&tomorrow.format("%Y-%m-%d").to_string())));
        assert!(!dob(Some("not-a-date")));
        assert!(!dob(Some("2023-02-30")));
    }

    #[test]
    fn gender_is_case_sensitive_membership() {
        assert!(gender(Some("Male")));
        assert!(gender(Some("Female")));
        assert!(gender(Some("Other")));
        assert!(!gender(Some("male")));
        assert!(!gender(Some("Unknown")));
    }

    #[test]
    fn city_allows_punctuation_within_length_limit() {
        assert!(city(Some("St. John's, Newfoundland")));
        assert!(city(Some("Winston-Salem")));
        assert!(!city(Some("City123")));
        assert!(city(Some(&"a".repeat(100))));
        assert!(!city(Some(&"a".repeat(101))));
    }
}
