//! Classification of JSON array items into the accepted rule forms.
//!
//! Every item is mapped to one [`RuleEntry`] variant before any rule is
//! built, so conversion in [`crate::config::parse::json`] never has to
//! inspect raw JSON shapes.

use serde_json::Value;

use super::ParseError;

/// One item of the JSON `labels` array, by shape.
#[derive(Debug, PartialEq)]
pub enum RuleEntry<'a> {
    /// `null`, `false`, `0` or `""`. Dropped with a warning.
    Falsy,
    /// `[]`. Dropped with a warning.
    EmptyList,
    /// `["name"]` or `["name", value, ...]`.
    List {
        name: &'a Value,
        value: Option<&'a Value>,
    },
    /// `{"labelName": name, "value": value}`; `value` is optional.
    Object {
        label_name: &'a Value,
        value: Option<&'a Value>,
    },
}

impl<'a> RuleEntry<'a> {
    /// Classify the item at `index`.
    ///
    /// Objects without `labelName` and shapes outside the accepted forms
    /// (bare strings, `true`, non-zero numbers) are errors.
    pub fn classify(index: usize, item: &'a Value) -> Result<Self, ParseError> {
        match item {
            Value::Null | Value::Bool(false) => Ok(RuleEntry::Falsy),
            Value::Number(n) if n.as_f64() == Some(0.0) => Ok(RuleEntry::Falsy),
            Value::String(s) if s.is_empty() => Ok(RuleEntry::Falsy),
            Value::Array(items) => match items.split_first() {
                None => Ok(RuleEntry::EmptyList),
                Some((name, rest)) => Ok(RuleEntry::List {
                    name,
                    value: rest.first(),
                }),
            },
            Value::Object(map) => {
                let label_name = map
                    .get("labelName")
                    .ok_or(ParseError::MissingLabelName { index })?;
                Ok(RuleEntry::Object {
                    label_name,
                    value: map.get("value"),
                })
            }
            Value::Bool(true) | Value::Number(_) | Value::String(_) => {
                Err(ParseError::InvalidEntry {
                    index,
                    reason: "expected an array or an object",
                })
            }
        }
    }
}
