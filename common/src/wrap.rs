//! Paper title wrapping
//!
//! Titles that fit on one line use the single-line template; longer titles
//! are greedily wrapped at word boundaries and use the two-line template.

use serde::{Deserialize, Serialize};

/// Which background template a row uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutVariant {
    Single,
    Two,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedTitle {
    pub lines: Vec<String>,
    pub variant: LayoutVariant,
}

/// Wrap `title` into lines of at most `max_width` characters
///
/// A word longer than `max_width` is kept whole on its own line.
pub fn wrap_title(title: &str, max_width: usize) -> WrappedTitle {
    if title.trim().is_empty() {
        return WrappedTitle {
            lines: vec![String::new()],
            variant: LayoutVariant::Single,
        };
    }
    if title.chars().count() <= max_width {
        return WrappedTitle {
            lines: vec![title.to_string()],
            variant: LayoutVariant::Single,
        };
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in title.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > max_width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    WrappedTitle {
        lines,
        variant: LayoutVariant::Two,
    }
}
