use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.yaml";

/// Content lines shown before a write preview is truncated
pub const DEFAULT_PREVIEW_LINES: usize = 30;
/// Unchanged lines kept around each diff hunk
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// How tool names are matched against the file tools
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Tool name contains `edit_file` / `write_file` anywhere
    #[default]
    Substring,
    /// Tool name is the bare tool or ends with `__<tool>`
    Exact,
}

/// Raw configuration structure (as parsed from YAML)
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct HookfmtConfigRaw {
    preview_lines: Option<usize>,
    context_lines: Option<usize>,
    color: Option<bool>,
    match_mode: Option<MatchMode>,
}

/// Resolved configuration (defaults filled in)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookfmtConfig {
    pub preview_lines: usize,
    pub context_lines: usize,
    pub color: bool,
    pub match_mode: MatchMode,
}

impl Default for HookfmtConfig {
    fn default() -> Self {
        Self {
            preview_lines: DEFAULT_PREVIEW_LINES,
            context_lines: DEFAULT_CONTEXT_LINES,
            color: true,
            match_mode: MatchMode::default(),
        }
    }
}

/// Get the expected path of the config file in XDG config
pub fn config_path() -> PathBuf {
    let xdg_config = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });

    xdg_config.join("hookfmt").join(CONFIG_FILENAME)
}

/// Loads and validates a config file. A missing file yields defaults.
pub fn load_config(config_path: &Path) -> Result<HookfmtConfig> {
    if !config_path.exists() {
        return Ok(HookfmtConfig::default());
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

    // An empty YAML document parses as null
    let parsed: HookfmtConfigRaw = if content.trim().is_empty() {
        HookfmtConfigRaw::default()
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))?
    };

    if parsed.preview_lines == Some(0) {
        bail!(
            "Invalid config at {}: 'preview_lines' must be at least 1",
            config_path.display()
        );
    }

    let defaults = HookfmtConfig::default();
    Ok(HookfmtConfig {
        preview_lines: parsed.preview_lines.unwrap_or(defaults.preview_lines),
        context_lines: parsed.context_lines.unwrap_or(defaults.context_lines),
        color: parsed.color.unwrap_or(defaults.color),
        match_mode: parsed.match_mode.unwrap_or(defaults.match_mode),
    })
}

/// Loads the config, falling back to defaults if it cannot be used.
/// A broken config file must never stop the permission prompt.
pub fn load_or_default(config_path: &Path) -> HookfmtConfig {
    match load_config(config_path) {
        Ok(config) => {
            tracing::debug!(path = %config_path.display(), ?config, "loaded config");
            config
        }
        Err(err) => {
            tracing::warn!("{:#}; using defaults", err);
            HookfmtConfig::default()
        }
    }
}
