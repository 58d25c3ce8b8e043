//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/teamtree/teamtree.toml`
//! 3. Explicit config file: `--config <FILE>` / `TEAMTREE_CONFIG`
//! 4. Environment variables: `TEAMTREE_*` prefix, `__` between sections

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, IoResultExt};
use crate::domain::Layout;

/// Prefix for environment variable overrides, e.g. `TEAMTREE_DISPLAY__STYLE=tree`.
pub const ENV_PREFIX: &str = "TEAMTREE";

/// How the team structure is printed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// One line per employee, indented by depth
    #[default]
    Indent,
    /// Box-drawing tree with L/R slot tags
    Tree,
}

/// Display settings for "Print Team Structure".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Spaces added per depth level
    pub indent_width: usize,
    /// Leader printed before each name
    pub marker: String,
    pub style: DisplayStyle,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        let layout = Layout::default();
        Self {
            indent_width: layout.indent_width,
            marker: layout.marker,
            style: DisplayStyle::default(),
        }
    }
}

/// Unified configuration for teamtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Colored terminal output (NO_COLOR is honored regardless)
    pub color: bool,
    pub display: DisplaySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            display: DisplaySettings::default(),
        }
    }
}

/// Get the XDG config directory for teamtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "teamtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("teamtree.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a user supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist when given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), config_file, ENV_PREFIX)
    }

    /// Load settings from explicit locations.
    ///
    /// The global file is optional, the explicit file is required.
    #[instrument(level = "debug")]
    pub fn load_from(
        global: Option<&Path>,
        config_file: Option<&Path>,
        env_prefix: &str,
    ) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("color", defaults.color)
            .map_err(config_err)?
            .set_default("display.indent_width", defaults.display.indent_width as i64)
            .map_err(config_err)?
            .set_default("display.marker", defaults.display.marker.clone())
            .map_err(config_err)?
            .set_default("display.style", "indent")
            .map_err(config_err)?;

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(path) = config_file {
            let path = expand_path(path);
            debug!("config file: {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Outline layout derived from the display settings.
    pub fn layout(&self) -> Layout {
        Layout::new(self.display.indent_width, self.display.marker.clone())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Write the commented template to `path`, refusing to clobber unless `force`.
    pub fn write_template(path: &Path, force: bool) -> Result<(), ApplicationError> {
        if path.exists() && !force {
            return Err(ApplicationError::Config {
                message: format!("{} already exists (use --force)", path.display()),
            });
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_path_context("create config dir", parent)?;
        }
        fs::write(path, Self::template()).with_path_context("write config", path)
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# teamtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/teamtree/teamtree.toml
#   Explicit: --config <FILE> or TEAMTREE_CONFIG
#   Env:      TEAMTREE_* variables, e.g. TEAMTREE_DISPLAY__STYLE=tree

# Colored output (NO_COLOR always wins)
# color = true

[display]
# Spaces per hierarchy level
# indent_width = 4

# Leader printed before each name
# marker = "- "

# "indent" for an outline, "tree" for box-drawing lines
# style = "indent"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
