use serde_json::Number;

use crate::domain::LabelName;

/// A parsed priority rule: the label to look for and the value to emit.
///
/// Created from one entry of the `labels` input, e.g. `["bump:minor", "minor"]`
/// or the multiline line `bump:minor, minor`.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRule {
    pub label_name: LabelName,
    pub value: LabelValue,
}

/// The payload reported as `strongestLabelValue` when a rule matches.
///
/// JSON input may carry numbers (`["bump:major", 3]`); everything else is text.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelValue {
    Text(String),
    Number(Number),
}

/// Ordered rules. Position is priority: the first entry is the strongest.
pub type RuleSet = Vec<LabelRule>;

impl LabelRule {
    /// Build a rule whose value is its own label name.
    pub fn named(label_name: LabelName) -> Self {
        let value = LabelValue::Text(label_name.as_str().to_string());
        LabelRule { label_name, value }
    }

    pub fn new(label_name: LabelName, value: LabelValue) -> Self {
        LabelRule { label_name, value }
    }
}

impl From<&str> for LabelValue {
    fn from(s: &str) -> Self {
        LabelValue::Text(s.to_string())
    }
}

impl std::fmt::Display for LabelValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelValue::Text(s) => write!(f, "{s}"),
            LabelValue::Number(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_rule_uses_label_as_value() {
        let rule = LabelRule::named(LabelName::new("bump:patch").unwrap());
        assert_eq!(rule.value, LabelValue::from("bump:patch"));
    }

    #[test]
    fn number_value_displays_without_quotes() {
        let value = LabelValue::Number(Number::from(3));
        assert_eq!(value.to_string(), "3");
    }

    #[test]
    fn text_value_displays_verbatim() {
        assert_eq!(LabelValue::from("minor").to_string(), "minor");
    }
}
