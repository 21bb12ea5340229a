use crate::config::LabelRule;

pub(super) const NOT_A_PULL_REQUEST: &str = "Not a pull request";

pub(super) const NO_WANTED_LABEL: &str = "pull request labels don't contain one of your labels";

pub(super) const OUTPUT_USAGE: &str = "You can use this output as 'steps.<step id>.outputs.strongestLabelName' or 'steps.<step id>.outputs.strongestLabelValue'";

/// Step log line announcing the matched rule.
pub(super) fn matched_summary(rule: &LabelRule) -> String {
    format!(
        "What is the strongest label in the 'pull_request'?: {} which is {}",
        rule.label_name, rule.value
    )
}
