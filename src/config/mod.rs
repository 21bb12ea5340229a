//! Parsing of the `labels` input into an ordered rule set.
//!
//! Two formats are accepted. A JSON array is tried first because it is
//! unambiguous and can carry numeric values; anything that is not valid JSON
//! is read as comma-separated lines.

pub mod entry;
pub mod parse;
pub mod rule;

pub use rule::{LabelRule, LabelValue, RuleSet};

/// Errors that make the `labels` input unusable.
///
/// Display strings are part of the action's failure message and are kept
/// stable for workflows that grep step logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Input can't be null")]
    EmptyInput,
    #[error("JSON Input must be an array")]
    NotAnArray,
    #[error("No labelName in json input")]
    MissingLabelName { index: usize },
    #[error("invalid item at index {index} in json input: {reason}")]
    InvalidEntry { index: usize, reason: &'static str },
}

/// Rules retained from the input together with the diagnostics for entries
/// that were dropped along the way.
#[derive(Debug, Default, PartialEq)]
pub struct ParsedRules {
    pub rules: RuleSet,
    pub warnings: Vec<String>,
}

/// Parse the raw `labels` input.
///
/// # Examples
///
/// ```
/// use strongest_label::config::parse_rules;
///
/// let parsed = parse_rules("bump:major, major\nbump:minor, minor").unwrap();
/// assert_eq!(parsed.rules.len(), 2);
/// assert_eq!(parsed.rules[0].label_name.as_str(), "bump:major");
/// assert_eq!(parsed.rules[1].value.to_string(), "minor");
/// ```
pub fn parse_rules(input: &str) -> Result<ParsedRules, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    match serde_json::from_str::<serde_json::Value>(input) {
        Ok(json) => parse::json::parse_rules(&json),
        // Not JSON: fall back to the line format.
        Err(_) => Ok(ParsedRules {
            rules: parse::multiline::parse_rules(input),
            warnings: Vec::new(),
        }),
    }
}
