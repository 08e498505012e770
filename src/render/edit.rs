use similar::{ChangeTag, TextDiff};
use std::borrow::Cow;

use super::style::Palette;
use crate::input::EditPayload;

/// The line diff needs every line terminated, including the last.
fn terminate(text: &str) -> Cow<'_, str> {
    if text.is_empty() || text.ends_with('\n') {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(format!("{}\n", text))
    }
}

fn colorize_line(line: &str, palette: &Palette) -> String {
    if line.starts_with("---") || line.starts_with("+++") {
        palette.accent(line)
    } else if line.starts_with('-') {
        palette.removed(line)
    } else if line.starts_with('+') {
        palette.added(line)
    } else if line.starts_with("@@") {
        palette.accent(line)
    } else {
        line.to_string()
    }
}

/// Render an edit as a colorized unified diff.
/// Returns None when there is nothing to show.
pub fn render(
    payload: &EditPayload<'_>,
    context_lines: usize,
    palette: &Palette,
) -> Option<String> {
    if payload.old_string.is_empty() && payload.new_string.is_empty() {
        return None;
    }

    let old = terminate(payload.old_string);
    let new = terminate(payload.new_string);

    let diff = TextDiff::from_lines(&*old, &*new);
    let mut unified = diff.unified_diff();
    unified.context_radius(context_lines);

    // Lines may end in a bare '\r', so each change is colored on its own
    // rather than re-splitting rendered text on '\n'.
    let mut out = String::new();
    for hunk in unified.iter_hunks() {
        if out.is_empty() {
            out.push_str(&palette.accent(&format!("--- {}\n", payload.file)));
            out.push_str(&palette.accent(&format!("+++ {}\n", payload.file)));
        }
        out.push_str(&palette.accent(&format!("{}\n", hunk.header())));
        for change in hunk.iter_changes() {
            let sign = match change.tag() {
                ChangeTag::Delete => '-',
                ChangeTag::Insert => '+',
                ChangeTag::Equal => ' ',
            };
            out.push_str(&colorize_line(&format!("{}{}", sign, change.value()), palette));
        }
    }

    // No hunks means nothing changed
    if out.is_empty() {
        return None;
    }
    Some(out)
}
