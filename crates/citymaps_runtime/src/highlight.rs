//! Input highlighting for the REPL.

use std::borrow::Cow;

/// Highlighter for REPL commands, paths, route names and numbers.
pub struct CommandHighlighter {}

impl CommandHighlighter {
    /// Creates a new highlighter.
    pub const fn new() -> Self {
        Self {}
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim().is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut rest = line;
        while !rest.is_empty() {
            let start = rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len());
            result.push_str(&rest[..start]);
            rest = &rest[start..];
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..end];
            match word_color(word) {
                Some(color) => {
                    result.push_str(color);
                    result.push_str(word);
                    result.push_str("\x1b[0m");
                }
                None => result.push_str(word),
            }
            rest = &rest[end..];
        }
        Cow::Owned(result)
    }
}

impl Default for CommandHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

fn word_color(word: &str) -> Option<&'static str> {
    if word.starts_with(':') {
        // Commands
        Some("\x1b[36m")
    } else if word.starts_with('/') {
        // Paths
        Some("\x1b[33m")
    } else if word.parse::<f64>().is_ok() {
        // Numbers
        Some("\x1b[35m")
    } else if word.contains('_')
        && word
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    {
        // Route names
        Some("\x1b[32m")
    } else {
        None
    }
}
