//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/teamtree/teamtree.toml`
//! 3. Explicit config: file given with `--config`
//! 4. Environment variables: `TEAMTREE_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::IndentLayout;

/// Largest accepted `indent`, in spaces per level.
pub const MAX_INDENT: usize = 16;

/// How the team structure is printed.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// One line per employee, indented by depth
    #[default]
    Indented,
    /// Box-drawing branches
    Tree,
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "indented" => Ok(Style::Indented),
            "tree" => Ok(Style::Tree),
            other => Err(format!("unknown style: {other}")),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Indented => f.write_str("indented"),
            Style::Tree => f.write_str("tree"),
        }
    }
}

/// Unified configuration for teamtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Output style (default: indented)
    pub style: Style,
    /// Spaces per depth level in indented style (default: 2)
    pub indent: usize,
    /// Marker before each name in indented style (default: "-")
    pub bullet: String,
    /// Printed for a tree without a team lead (default: "(empty)")
    pub empty_label: String,
}

impl Default for Settings {
    fn default() -> Self {
        let layout = IndentLayout::default();
        Self {
            style: Style::default(),
            indent: layout.indent,
            bullet: layout.bullet,
            empty_label: layout.empty_label,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub style: Option<Style>,
    pub indent: Option<usize>,
    pub bullet: Option<String>,
    pub empty_label: Option<String>,
}

/// Get the XDG config directory for teamtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "teamtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("teamtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Layout for the indented listing.
    pub fn layout(&self) -> IndentLayout {
        IndentLayout {
            indent: self.indent,
            bullet: self.bullet.clone(),
            empty_label: self.empty_label.clone(),
        }
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            style: overlay.style.unwrap_or(self.style),
            indent: overlay.indent.unwrap_or(self.indent),
            bullet: overlay.bullet.clone().unwrap_or_else(|| self.bullet.clone()),
            empty_label: overlay
                .empty_label
                .clone()
                .unwrap_or_else(|| self.empty_label.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file; unlike the global file it must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layers(global_config_path().as_deref(), explicit)
    }

    /// Load settings from the given layers, then apply `TEAMTREE_*` overrides.
    pub fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, skipped when absent
        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        // 3. Explicit config, required
        if let Some(path) = explicit {
            debug!("loading config: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables
        Self::apply_env_overrides(current)?.validated()
    }

    /// Reject values that cannot produce a sensible listing.
    fn validated(self) -> Result<Self, ApplicationError> {
        if self.indent > MAX_INDENT {
            return Err(ApplicationError::Config {
                message: format!("indent must be at most {MAX_INDENT}, got {}", self.indent),
            });
        }
        Ok(self)
    }

    /// Apply TEAMTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("TEAMTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("style") {
            settings.style = val.parse().map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_string("indent") {
            settings.indent = val.trim().parse().map_err(|_| ApplicationError::Config {
                message: format!("TEAMTREE_INDENT must be a non-negative integer, got {val:?}"),
            })?;
        }
        if let Ok(val) = config.get_string("bullet") {
            settings.bullet = val;
        }
        if let Ok(val) = config.get_string("empty_label") {
            settings.empty_label = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# teamtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/teamtree/teamtree.toml
#   Explicit: file passed with --config
#   Env:      TEAMTREE_* environment variables (e.g. TEAMTREE_INDENT=4)

# Output style: "indented" or "tree"
# style = "indented"

# Spaces per level in indented style (at most 16)
# indent = 2

# Marker printed before each name in indented style
# bullet = "-"

# Shown when no team lead exists yet
# empty_label = "(empty)"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
