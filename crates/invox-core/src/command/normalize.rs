//! Per-field value normalization: spoken email reconstruction, natural
//! date parsing, and numeric coercion.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::models::command::ValueKind;

lazy_static! {
    // Spoken email tokens, whitespace-delimited
    static ref SPOKEN_AT: Regex = Regex::new(r"\s+at\s+").unwrap();
    static ref SPOKEN_DOT: Regex = Regex::new(r"\s+dot\s+").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref AT_RUN: Regex = Regex::new(r"@+").unwrap();
    static ref DOT_RUN: Regex = Regex::new(r"\.{2,}").unwrap();

    // Ordinal day suffixes: "10th october" -> "10 october"
    static ref ORDINAL_SUFFIX: Regex = Regex::new(r"(\d+)(?:st|nd|rd|th)").unwrap();

    // First number in a value, integer or decimal
    static ref FIRST_NUMBER: Regex = Regex::new(r"\d+(?:\.\d+)?").unwrap();
}

/// Date formats accepted for spoken or typed dates. Month names parse
/// case-insensitively; commas are removed before matching.
const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %B %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%b %d %Y",
    "%m/%d/%Y",
    "%d.%m.%Y",
];

/// Normalize a cleaned value according to its destination's kind.
///
/// `Number` values pass through unchanged here; numeric coercion
/// happens at item assembly where the target type is known.
pub fn normalize(kind: ValueKind, value: &str) -> String {
    match kind {
        ValueKind::Email => normalize_email(value),
        ValueKind::Date => normalize_date(value),
        ValueKind::Text | ValueKind::Number => value.to_string(),
    }
}

/// Rebuild an email address from its spoken form.
///
/// " at " becomes "@", " dot " becomes ".", remaining whitespace is
/// removed, and repeated separators are collapsed. Spoken digit words
/// are left alone: "jay one two at gmail dot com" yields
/// "jayonetwo@gmail.com".
pub fn normalize_email(value: &str) -> String {
    let value = SPOKEN_AT.replace_all(value, "@");
    let value = SPOKEN_DOT.replace_all(&value, ".");
    let value = WHITESPACE_RUN.replace_all(&value, "");
    let value = value.to_lowercase();
    let value = AT_RUN.replace_all(&value, "@");
    let value = DOT_RUN.replace_all(&value, ".");
    value.into_owned()
}

/// Normalize a date expression to ISO `YYYY-MM-DD`.
///
/// Ordinal suffixes are stripped before parsing ("10th october 2024"
/// parses as "10 october 2024"). When no accepted format matches, the
/// value is returned verbatim; an unparsed date string is still a
/// usable field value.
pub fn normalize_date(value: &str) -> String {
    let cleaned = ORDINAL_SUFFIX.replace_all(value, "$1");
    match parse_natural_date(&cleaned) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => value.to_string(),
    }
}

fn parse_natural_date(value: &str) -> Option<NaiveDate> {
    let cleaned = value.replace(',', " ");
    let cleaned = WHITESPACE_RUN.replace_all(cleaned.trim(), " ");

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&cleaned, format).ok())
}

/// Coerce a value to a number: the first `\d+(\.\d+)?` substring wins,
/// anything else is 0.
pub fn parse_number(value: &str) -> f64 {
    FIRST_NUMBER
        .find(value)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}
