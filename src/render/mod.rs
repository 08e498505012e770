pub mod edit;
pub mod style;
pub mod write;

use crate::config::HookfmtConfig;
use crate::input::{ToolEvent, ToolKind};
use style::Palette;

/// Render the preview for a tool call, or None if there is nothing to show.
pub fn render(event: &ToolEvent, kind: ToolKind, config: &HookfmtConfig) -> Option<String> {
    let palette = Palette::new(config.color);

    match kind {
        ToolKind::Edit => edit::render(&event.edit_payload(), config.context_lines, &palette),
        ToolKind::Write => write::render(&event.write_payload(), config.preview_lines, &palette),
        ToolKind::Other => None,
    }
}
