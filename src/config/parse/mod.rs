pub mod json;
pub mod multiline;
