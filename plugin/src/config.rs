//! Generator configuration.
//!
//! Defines the YAML-serializable configuration that fixes, for one whole
//! generation run, where generated sources land and whether signatures use
//! the per-table criteria type.
//!
//! # Example YAML
//!
//! ```yaml
//! target_dir: src/generated
//! target_module: crate::repo
//! use_criteria: true
//! author: schema-tools
//! ```

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Result;

static MODULE_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("static regex must compile")
});

/// Problems found in a [`GeneratorConfig`].
///
/// Configuration problems never abort a run: the synthesizer and binder
/// skip their work and the per-table traits pass through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigIssue {
    /// Target module path is empty.
    #[error("target module cannot be empty")]
    EmptyTargetModule,
    /// Target module is not a `::`-separated identifier path.
    #[error("invalid target module path: {0}")]
    InvalidTargetModule(String),
    /// Target directory is empty.
    #[error("target directory cannot be empty")]
    EmptyTargetDir,
}

/// Configuration for one generation run.
///
/// The criteria switch is read once at run construction and fixes the
/// generic arity of the base trait for the whole run; an absent value
/// deserializes to disabled.
///
/// # Examples
///
/// ```
/// use repogen_plugin::GeneratorConfig;
///
/// let config: GeneratorConfig =
///     serde_yaml::from_str("target_dir: out\ntarget_module: crate::repo\n").unwrap();
/// assert!(!config.criteria_enabled());
/// assert!(config.validate().is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Root directory generated sources are written under.
    pub target_dir: PathBuf,
    /// Module path the repository traits are generated into
    /// (e.g. `"crate::repo"`).
    pub target_module: String,
    /// Whether generated signatures use the per-table criteria type.
    #[serde(default)]
    pub use_criteria: bool,
    /// Author stamped into generated doc headers.
    #[serde(default)]
    pub author: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from("src/generated"),
            target_module: "crate::repo".to_string(),
            use_criteria: false,
            author: None,
        }
    }
}

impl GeneratorConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::GenError::IoError) if the file cannot be
    /// read, or [`YamlError`](crate::GenError::YamlError) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::GenError::IoError) if the file cannot be
    /// written, or [`YamlError`](crate::GenError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Returns whether criteria generics are enabled for this run.
    pub fn criteria_enabled(&self) -> bool {
        self.use_criteria
    }

    /// Checks the fields the synthesizer and binder depend on.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.target_module.trim().is_empty() {
            issues.push(ConfigIssue::EmptyTargetModule);
        } else if !MODULE_PATH_RE.is_match(&self.target_module) {
            issues.push(ConfigIssue::InvalidTargetModule(self.target_module.clone()));
        }

        if self.target_dir.as_os_str().is_empty() {
            issues.push(ConfigIssue::EmptyTargetDir);
        }

        issues
    }

    /// Directory the target module maps to under `target_dir`.
    ///
    /// A leading `crate` segment names the generated crate root and adds
    /// no directory level.
    pub fn module_dir(&self) -> PathBuf {
        let mut dir = self.target_dir.clone();
        for segment in self.target_module.split("::") {
            if segment == "crate" {
                continue;
            }
            dir.push(segment);
        }
        dir
    }
}
