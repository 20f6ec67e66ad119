//! Data directory resolution and `config.toml` loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AppError, OutputFormat, RenderOptions, TargetSelection};
use crate::services::USER_PRESETS_KEY;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "VPROMPT_HOME";

/// Directory name under `$HOME` when no override is set.
pub const DATA_DIR_NAME: &str = ".vprompt";

/// Config file name inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VpromptConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Storage key holding the user preset collection.
    #[serde(default = "default_presets_key")]
    pub presets_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { presets_key: default_presets_key() }
    }
}

fn default_presets_key() -> String {
    USER_PRESETS_KEY.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub target: TargetSelection,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: OutputFormat::default(), target: TargetSelection::default(), pretty: true }
    }
}

fn default_pretty() -> bool {
    true
}

impl OutputConfig {
    /// Render options with optional command-line overrides applied.
    pub fn render_options(
        &self,
        format: Option<OutputFormat>,
        target: Option<TargetSelection>,
    ) -> RenderOptions {
        RenderOptions {
            format: format.unwrap_or(self.format),
            targets: target.unwrap_or(self.target),
            pretty: self.pretty,
        }
    }
}

impl VpromptConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.storage.presets_key.trim().is_empty() {
            return Err(AppError::config_error("storage.presets_key must not be empty"));
        }
        Ok(())
    }
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<VpromptConfig, AppError> {
    let config: VpromptConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load `<data_dir>/config.toml`, falling back to defaults when absent.
pub fn load_config(data_dir: &Path) -> Result<VpromptConfig, AppError> {
    let path = data_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(VpromptConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    parse_config_content(&content).map_err(|err| match err {
        AppError::TomlParseError(inner) => {
            AppError::config_error(format!("Invalid {}: {}", path.display(), inner))
        }
        other => other,
    })
}

/// Resolve the data directory from `VPROMPT_HOME`, then `$HOME/.vprompt`.
///
/// Returns `None` when neither variable is set.
pub fn resolve_data_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    std::env::var_os("HOME")
        .filter(|value| !value.is_empty())
        .map(|home| PathBuf::from(home).join(DATA_DIR_NAME))
}
