/// A trimmed, non-empty label name.
///
/// Constructed from a raw string; surrounding whitespace is stripped so
/// `" bump:minor "` and `"bump:minor"` both produce `LabelName("bump:minor")`.
/// Comparison against pull request labels is exact after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelName(pub(crate) String);

impl LabelName {
    /// Create from a raw label string.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(LabelName(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LabelName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LabelName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for LabelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
