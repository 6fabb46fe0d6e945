//! Splitting raw input lines into command name and arguments.

use std::collections::BTreeMap;

/// A non-blank input line split into its parts.
///
/// Nothing here is validated yet; see [`super::Command`] for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// The first token.
    pub command: String,
    /// The last token without a `=`.
    pub positional: Option<String>,
    /// Earlier tokens without a `=`, overridden by `positional`.
    pub superseded: Vec<String>,
    /// `key=value` tokens; a repeated key keeps its last value.
    pub options: BTreeMap<String, String>,
}

/// Removes a trailing `#` comment and surrounding whitespace.
///
/// `\#` stands for a literal `#` and does not start a comment.
pub fn strip_comment(line: &str) -> String {
    let mut stripped = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'#') => {
                stripped.push('#');
                chars.next();
            }
            '#' => break,
            _ => stripped.push(c),
        }
    }
    stripped.trim().to_string()
}

/// Splits a line into command and arguments, or `None` for blank and
/// comment-only lines.
///
/// # Example
///
/// ```
/// use arbeitszeit::interpreter::tokenize;
///
/// let line = tokenize("work 08:00/16:30 lunch=PT30M  # short day").unwrap();
/// assert_eq!(line.command, "work");
/// assert_eq!(line.positional.as_deref(), Some("08:00/16:30"));
/// assert_eq!(line.options["lunch"], "PT30M");
/// ```
pub fn tokenize(line: &str) -> Option<RawLine> {
    let stripped = strip_comment(line);
    let mut tokens = stripped.split_whitespace();
    let command = tokens.next()?.to_string();

    let mut positional: Option<String> = None;
    let mut superseded = Vec::new();
    let mut options = BTreeMap::new();
    for token in tokens {
        match token.split_once('=') {
            Some((key, value)) => {
                options.insert(key.to_string(), value.to_string());
            }
            None => {
                if let Some(previous) = positional.replace(token.to_string()) {
                    superseded.push(previous);
                }
            }
        }
    }

    Some(RawLine {
        command,
        positional,
        superseded,
        options,
    })
}
