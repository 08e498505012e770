use anyhow::{Context, Result};
use std::io::{self, Read};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

mod config;
mod input;
mod output;
mod render;

use input::ToolEvent;
use output::ResponseEnvelope;

/// Logs go to stderr and are silent unless HOOKFMT_LOG asks for them,
/// e.g. `HOOKFMT_LOG=debug`.
fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(
            EnvFilter::builder()
                .with_env_var("HOOKFMT_LOG")
                .with_default_directive(LevelFilter::ERROR.into())
                .from_env_lossy(),
        )
        .try_init();
}

fn main() -> Result<()> {
    init_logging();

    let event = read_input()?;
    let config = config::load_or_default(&config::config_path());

    let kind = event.kind(config.match_mode);
    tracing::debug!(
        event = ?event.hook_event_name,
        session = ?event.session_id,
        tool = %event.tool_name,
        kind = kind.name(),
        "classified tool call"
    );

    let Some(rendered) = render::render(&event, kind, &config) else {
        tracing::debug!("nothing to render");
        return Ok(());
    };

    tracing::debug!(bytes = rendered.len(), "emitting preview");
    ResponseEnvelope::pre_tool_use(&rendered).emit(io::stdout().lock())
}

fn read_input() -> Result<ToolEvent> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read hook input")?;
    let event: ToolEvent = serde_json::from_str(&buffer).context("Failed to parse hook input")?;
    Ok(event)
}
