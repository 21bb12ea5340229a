//! GitHub Actions workflow commands and environment-file entries.
//!
//! Workflow commands are lines of the form `::name key=value::message`
//! printed to stdout. Output values go to the `$GITHUB_OUTPUT` file in the
//! multi-line `name<<delimiter` form so values may contain newlines.

/// Build a workflow command line without a trailing newline.
pub fn workflow_command(name: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{name}");
    if !properties.is_empty() {
        let props: Vec<String> = properties
            .iter()
            .map(|(key, value)| format!("{key}={}", escape_property(value)))
            .collect();
        line.push(' ');
        line.push_str(&props.join(","));
    }
    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}

/// Escape a command message.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property value (also reserves `:` and `,`).
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

/// Format one `$GITHUB_OUTPUT` entry, newline-terminated.
///
/// Returns `None` if the delimiter occurs in the name or value, which would
/// let the value terminate its own block.
pub fn file_command_entry(name: &str, value: &str, delimiter: &str) -> Option<String> {
    if name.contains(delimiter) || value.contains(delimiter) {
        return None;
    }
    Some(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}
