//! Value extraction: slice the text between consecutive trigger
//! matches and clean each slice up.

use lazy_static::lazy_static;
use regex::Regex;

use super::matcher::TriggerMatch;
use super::rules::Destination;

lazy_static! {
    // Leading separators speech-to-text leaves between label and value
    static ref LEADING_SEPARATORS: Regex = Regex::new(r"^[:\-\s=]+").unwrap();

    // Copula between label and value: "due date is tomorrow"
    static ref LEADING_COPULA: Regex = Regex::new(r"^(?:is|equal to|equals)\s+").unwrap();

    // Sentence-final periods from speech-to-text punctuation
    static ref TRAILING_PERIODS: Regex = Regex::new(r"\.+$").unwrap();
}

/// Clean one raw value slice: trim, drop leading separator runs and a
/// leading copula, drop trailing periods.
pub fn clean_value(raw: &str) -> String {
    let value = raw.trim();
    let value = LEADING_SEPARATORS.replace(value, "");
    let value = LEADING_COPULA.replace(&value, "");
    let value = TRAILING_PERIODS.replace(&value, "");
    value.into_owned()
}

/// Extract the value for each trigger match.
///
/// The value span of match *i* runs from the end of its phrase to the
/// start of match *i+1* (or to the end of the segment for the last
/// match). Values that clean up to nothing are omitted entirely, so a
/// trailing "client email" with nothing after it produces no entry.
/// Later matches for the same destination overwrite earlier ones when
/// the caller folds the pairs into a map.
pub fn extract_values<D: Destination>(
    text: &str,
    matches: &[TriggerMatch<D>],
) -> Vec<(D, String)> {
    let mut values = Vec::new();

    for (i, m) in matches.iter().enumerate() {
        let span_end = matches.get(i + 1).map_or(text.len(), |next| next.start);
        let raw = &text[m.end()..span_end];

        let value = clean_value(raw);
        if !value.is_empty() {
            values.push((m.destination, value));
        }
    }

    values
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::command::matcher::match_triggers;
    use crate::command::rules::global_rules;
    use crate::models::command::FieldPath;

    fn extract(text: &str) -> Vec<(FieldPath, String)> {
        extract_values(text, &match_triggers(text, global_rules()))
    }

    #[test]
    fn test_clean_value_strips_separators_and_copula() {
        assert_eq!(clean_value(": jay12@gmail.com"), "jay12@gmail.com");
        assert_eq!(clean_value(" - acme corp"), "acme corp");
        assert_eq!(clean_value("= 42"), "42");
        assert_eq!(clean_value("is tomorrow"), "tomorrow");
        assert_eq!(clean_value("equal to 500"), "500");
        assert_eq!(clean_value("equals 500"), "500");
    }

    #[test]
    fn test_copula_needs_following_whitespace() {
        // A value that simply starts with "is" stays intact.
        assert_eq!(clean_value("island traders"), "island traders");
        assert_eq!(clean_value("is"), "is");
    }

    #[test]
    fn test_trailing_periods_stripped() {
        assert_eq!(clean_value("acme corp."), "acme corp");
        assert_eq!(clean_value("acme corp..."), "acme corp");
    }

    #[test]
    fn test_value_spans_between_matches() {
        let values = extract("client name acme corp due date tomorrow");
        assert_eq!(
            values,
            vec![
                (FieldPath::ClientName, "acme corp".to_string()),
                (FieldPath::MetaDueDate, "tomorrow".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_value_omitted() {
        // Trigger with nothing following it yields no entry at all.
        assert!(extract("client email").is_empty());
        assert!(extract("client email   ").is_empty());
        assert!(extract("client email:").is_empty());
    }

    #[test]
    fn test_last_match_value_runs_to_end_of_text() {
        let values = extract("discount 10 percent");
        assert_eq!(
            values,
            vec![(FieldPath::GlobalDiscount, "10 percent".to_string())]
        );
    }
}
