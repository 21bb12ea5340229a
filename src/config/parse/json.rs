use serde_json::Value;

use crate::config::entry::RuleEntry;
use crate::config::rule::{LabelRule, LabelValue};
use crate::config::{ParseError, ParsedRules};
use crate::domain::LabelName;

/// Convert a parsed JSON document into rules.
///
/// The document must be an array. Falsy items, empty lists and entries
/// whose label name is blank are dropped with a warning; every other
/// malformed item aborts parsing.
pub(crate) fn parse_rules(json: &Value) -> Result<ParsedRules, ParseError> {
    let items = json.as_array().ok_or(ParseError::NotAnArray)?;

    let mut parsed = ParsedRules::default();
    for (index, item) in items.iter().enumerate() {
        let (name, value) = match RuleEntry::classify(index, item)? {
            RuleEntry::Falsy => {
                parsed
                    .warnings
                    .push("there is falsy item in the json input array".to_string());
                continue;
            }
            RuleEntry::EmptyList => {
                parsed
                    .warnings
                    .push("there is empty item in the json input array".to_string());
                continue;
            }
            RuleEntry::List { name, value } => (name, value),
            RuleEntry::Object { label_name, value } => (label_name, value),
        };

        let raw_name = name.as_str().ok_or(ParseError::InvalidEntry {
            index,
            reason: "label name must be a string",
        })?;
        let Some(label_name) = LabelName::new(raw_name) else {
            parsed.warnings.push(format!(
                "there is blank label name at index {index} in the json input array"
            ));
            continue;
        };

        let rule = match value {
            None => LabelRule::named(label_name),
            Some(v) => LabelRule::new(label_name, parse_value(index, v)?),
        };
        parsed.rules.push(rule);
    }
    Ok(parsed)
}

fn parse_value(index: usize, value: &Value) -> Result<LabelValue, ParseError> {
    match value {
        Value::String(s) => Ok(LabelValue::Text(s.trim().to_string())),
        Value::Number(n) => Ok(LabelValue::Number(n.clone())),
        _ => Err(ParseError::InvalidEntry {
            index,
            reason: "value must be a string or a number",
        }),
    }
}
