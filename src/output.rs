use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// Output JSON for the Claude Code PreToolUse hook
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: &'static str,
    pub permission_decision_reason: String,
}

impl ResponseEnvelope {
    pub fn pre_tool_use(rendered: &str) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: "PreToolUse",
                // Leading newline keeps the preview off the prompt's first line
                permission_decision_reason: format!("\n{}", rendered),
            },
        }
    }

    /// Write the envelope as a single JSON document, without a trailing newline.
    pub fn emit<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer(&mut writer, self).context("Failed to write hook output")?;
        writer.flush().context("Failed to flush hook output")?;
        Ok(())
    }
}
