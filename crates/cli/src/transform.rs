//! Roster field normalization rules
//!
//! Pure mapping functions used by the `create-csv` workflow to turn legacy
//! roster exports into values the PCO import accepts.

use chrono::NaiveDate;

/// Year used when no real birth/anniversary year is known; far enough back
/// to be obviously a placeholder.
const PLACEHOLDER_YEAR: i32 = 1885;

/// Format a raw phone number as `(123) 456-7890` when it carries exactly
/// ten digits; anything else passes through verbatim.
pub fn format_phone(phone: &str) -> String {
    if phone.is_empty() {
        return String::new();
    }
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        phone.to_string()
    }
}

/// Map yes/no answers onto the import's TRUE/FALSE literals; anything else
/// becomes empty.
pub fn yes_no_to_true_false(value: &str) -> &'static str {
    match value.to_ascii_lowercase().as_str() {
        "yes" => "TRUE",
        "no" => "FALSE",
        _ => "",
    }
}

/// Map a free-text grade description onto the numeric grade the import
/// expects: kindergarten is 0, pre-school is -1, graduated and anything
/// unrecognized map to nothing.
pub fn map_grade(grade: &str) -> Option<i32> {
    if grade.is_empty() {
        return None;
    }
    let lower = grade.to_ascii_lowercase();
    if lower.contains("graduated") {
        return None;
    }
    if lower.contains("pre-school") || lower.contains("pre-k") {
        return Some(-1);
    }
    const NAMES: [(&str, i32); 13] = [
        ("kindergarten", 0),
        ("first", 1),
        ("second", 2),
        ("third", 3),
        ("fourth", 4),
        ("fifth", 5),
        ("sixth", 6),
        ("seventh", 7),
        ("eighth", 8),
        ("ninth", 9),
        ("tenth", 10),
        ("eleventh", 11),
        ("twelfth", 12),
    ];
    for (name, value) in NAMES {
        if lower.contains(name) {
            return Some(value);
        }
    }
    let digits: String = grade.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.parse::<i32>() {
        Ok(n) if (1..=12).contains(&n) => Some(n),
        _ => None,
    }
}

/// Derive the import's Status and Membership columns from the legacy
/// member-status answer.
pub fn status_and_membership(member_status: &str) -> (&'static str, &'static str) {
    if member_status.is_empty() || member_status.eq_ignore_ascii_case("no") {
        ("Inactive", "")
    } else {
        ("Active", "Member")
    }
}

/// Reconstruct a full birthdate from a month/day string and an age.
///
/// The birth year is `current_year - age` when the age is numeric,
/// otherwise the placeholder year. Unparseable input yields empty.
pub fn format_birthdate(birth_month_day: &str, age: &str, current_year: i32) -> String {
    let Some((month, day)) = parse_month_day(birth_month_day) else {
        return String::new();
    };
    let birth_year = age.parse::<i32>().map_or(PLACEHOLDER_YEAR, |a| current_year - a);
    NaiveDate::from_ymd_opt(birth_year, month, day)
        .map(|d| d.format("%m/%d/%Y").to_string())
        .unwrap_or_default()
}

/// Reconstruct an anniversary date from a month/day string, pinned to the
/// placeholder year.
pub fn format_anniversary(wedding_month_day: &str) -> String {
    let Some((month, day)) = parse_month_day(wedding_month_day) else {
        return String::new();
    };
    NaiveDate::from_ymd_opt(PLACEHOLDER_YEAR, month, day)
        .map(|d| d.format("%m/%d/%Y").to_string())
        .unwrap_or_default()
}

fn parse_month_day(value: &str) -> Option<(u32, u32)> {
    let (month, day) = value.split_once('/')?;
    let month: u32 = month.trim().parse().ok()?;
    let day: u32 = day.trim().parse().ok()?;
    // Validated against a non-leap year, so 02/29 never parses.
    NaiveDate::from_ymd_opt(1900, month, day)?;
    Some((month, day))
}
