use super::style::Palette;
use crate::input::WritePayload;

/// Render a write as a header plus a numbered preview of the first
/// `preview_lines` lines. Returns None for empty content.
pub fn render(
    payload: &WritePayload<'_>,
    preview_lines: usize,
    palette: &Palette,
) -> Option<String> {
    if payload.content.is_empty() {
        return None;
    }

    let lines: Vec<&str> = payload.content.lines().collect();
    let total = lines.len();

    let mut out = String::new();
    out.push_str(&palette.accent(&format!("+++ {}", payload.file)));
    out.push('\n');
    out.push_str(&palette.dim(&format!("{} lines", total)));
    out.push('\n');

    let width = total.min(preview_lines).to_string().len();
    let mut body: Vec<String> = lines
        .iter()
        .take(preview_lines)
        .enumerate()
        .map(|(i, line)| {
            format!(
                "{}  {}",
                palette.dim(&format!("{:>width$}", i + 1, width = width)),
                palette.added(line)
            )
        })
        .collect();

    if total > preview_lines {
        body.push(palette.dim(&format!("... {} more lines", total - preview_lines)));
    }

    out.push_str(&body.join("\n"));
    out.push('\n');
    Some(out)
}
