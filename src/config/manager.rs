use anyhow::{Context, Result, bail};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::editor::DEFAULT_EDITOR;
use crate::generation::DEFAULT_ENDPOINT;
use crate::paths;
use crate::ui::Style;

/// Settings in the `[mateai]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MateConfig {
    /// Base URL of the text-generation endpoint.
    pub endpoint: Option<String>,
    /// Editor command used by `/vscode` and `--vscode`.
    pub editor: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/mateai/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub mateai: MateConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// The API endpoint URL.
    pub endpoint: String,
    /// The editor command line.
    pub editor: String,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Endpoint override.
    pub endpoint: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over built-in defaults.
///
/// # Errors
///
/// Returns an error if the endpoint is not an absolute http(s) URL or the
/// editor command is blank.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.mateai.endpoint.as_ref())
        .map_or(DEFAULT_ENDPOINT, String::as_str)
        .trim()
        .to_string();

    let url = Url::parse(&endpoint).map_err(|e| {
        anyhow::anyhow!(
            "Invalid endpoint '{endpoint}': {e}\n\n\
             Please provide it via:\n  \
             - CLI option: mateai --endpoint <url>\n  \
             - Config file: ~/.config/mateai/config.toml"
        )
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "Invalid endpoint '{endpoint}': only http and https URLs are supported"
        );
    }

    let editor = config_file
        .mateai
        .editor
        .as_deref()
        .unwrap_or(DEFAULT_EDITOR)
        .trim()
        .to_string();

    if editor.is_empty() {
        bail!(
            "Invalid configuration: 'editor' is empty\n\n\
             Set it in ~/.config/mateai/config.toml, e.g. editor = \"{DEFAULT_EDITOR}\""
        );
    }

    Ok(ResolvedConfig { endpoint, editor })
}

/// Loads the config file from its default location and resolves it.
pub fn load_resolved(options: &ResolveOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    resolve_config(options, &manager.load_or_default())
}

/// Manages loading configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/mateai/config.toml`
    /// or `~/.config/mateai/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager reading an explicit file.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the config file, falling back to defaults.
    ///
    /// A missing file is silent; a file that exists but cannot be read or
    /// parsed produces a warning.
    pub fn load_or_default(&self) -> ConfigFile {
        if !self.config_path.exists() {
            return ConfigFile::default();
        }

        self.load().unwrap_or_else(|e| {
            crate::warn!(
                "{} {e:#}\nUsing default settings.",
                Style::warning("Warning:")
            );
            ConfigFile::default()
        })
    }
}
