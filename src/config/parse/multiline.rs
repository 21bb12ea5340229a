use crate::config::rule::{LabelRule, LabelValue, RuleSet};
use crate::domain::LabelName;

/// Parse the line format: one rule per line, `name[, value]`.
///
/// Blank lines and lines whose name is blank are skipped without a
/// diagnostic. Anything after the second comma is ignored.
pub(crate) fn parse_rules(input: &str) -> RuleSet {
    input.split('\n').filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<LabelRule> {
    let mut tokens = line.split(',');
    let label_name = LabelName::new(tokens.next()?)?;
    Some(match tokens.next() {
        Some(value) => LabelRule::new(label_name, LabelValue::from(value.trim())),
        None => LabelRule::named(label_name),
    })
}
