//! Configuration file loading for qinvest.
//!
//! Discovers and loads `qinvest.toml` from the project root.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "qinvest.toml";

/// Top-level configuration from qinvest.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QinvestConfig {
    /// Default plan request.
    pub plan: PlanConfig,

    /// Markdown rendering settings.
    pub render: RenderConfig,
}

/// Plan section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Restrict planning to this package subtree.
    pub base_package: Option<String>,

    /// Remediation budget in minutes.
    pub budget_minutes: Option<i64>,
}

/// Render section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Extension used when showing the source file of an artefact.
    pub source_extension: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            source_extension: "java".to_string(),
        }
    }
}

/// Discover the qinvest.toml config file.
///
/// Returns `None` if no config file is found in `root`.
pub fn discover_config(root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a qinvest.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<QinvestConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<QinvestConfig> {
    let config: QinvestConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from the root, or return default if not found.
pub fn load_or_default(root: &Utf8Path) -> anyhow::Result<QinvestConfig> {
    match discover_config(root) {
        Some(path) => load_config(&path),
        None => Ok(QinvestConfig::default()),
    }
}

/// Config file values with CLI arguments applied on top.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
    /// Empty means the whole project.
    pub base_package: String,

    /// `None` when neither the CLI nor the config file names a budget.
    pub budget_minutes: Option<i64>,

    pub source_extension: String,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: QinvestConfig,
}

impl ConfigMerger {
    pub fn new(config: QinvestConfig) -> Self {
        Self { config }
    }

    /// Merge with plan command CLI arguments. A value given on the CLI replaces the file's.
    pub fn merge_plan_args(
        self,
        cli_base_package: Option<&str>,
        cli_budget_minutes: Option<i64>,
    ) -> MergedConfig {
        let base_package = cli_base_package
            .map(str::to_string)
            .or(self.config.plan.base_package)
            .unwrap_or_default();

        MergedConfig {
            base_package,
            budget_minutes: cli_budget_minutes.or(self.config.plan.budget_minutes),
            source_extension: self.config.render.source_extension,
        }
    }
}
