/// Output carrying the outcome code.
pub const ERROR_OUTPUT: &str = "error";
/// Output carrying the matched label name.
pub const LABEL_NAME_OUTPUT: &str = "strongestLabelName";
/// Output carrying the matched rule's value.
pub const LABEL_VALUE_OUTPUT: &str = "strongestLabelValue";

/// Value of the `error` output.
///
/// Only the non-fatal outcomes have codes; fatal errors fail the step instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NoError = 0,
    NoPullRequest = 1,
    NoWantedLabel = 2,
}

impl ErrorCode {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
