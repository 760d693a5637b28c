//! Registry configuration.
//!
//! Read from `docs.toml` in a config directory:
//!
//! ```toml
//! label = "core::default::Default"
//! duplicate-policy = "first-wins"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::builtins::DEFAULT_TRAIT;
use crate::registry::DuplicatePolicy;

/// File name looked up by [`load_config_from_dir`].
pub const CONFIG_FILE: &str = "docs.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid config: {0}")]
	Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct DocsConfig {
	/// Trait the registry indexes; used to tag log output and errors.
	pub label: String,
	pub duplicate_policy: DuplicatePolicy,
}

impl Default for DocsConfig {
	fn default() -> Self {
		Self {
			label: DEFAULT_TRAIT.to_string(),
			duplicate_policy: DuplicatePolicy::default(),
		}
	}
}

impl DocsConfig {
	pub fn from_toml_str(content: &str) -> Result<Self> {
		Ok(toml::from_str(content)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&content)
	}
}

/// Outcome of [`load_config_from_dir`].
#[derive(Debug, Default)]
pub struct ConfigLoadReport {
	/// Parsed config, if the file existed and was valid.
	pub config: Option<DocsConfig>,
	/// Read or parse errors keyed by file path.
	pub errors: Vec<(PathBuf, String)>,
}

impl ConfigLoadReport {
	/// The loaded config, or defaults.
	pub fn config_or_default(&self) -> DocsConfig {
		self.config.clone().unwrap_or_default()
	}
}

/// Loads `docs.toml` from `config_dir`.
///
/// A missing file is not an error: the report is simply empty.
pub fn load_config_from_dir(config_dir: &Path) -> ConfigLoadReport {
	let mut report = ConfigLoadReport::default();
	let path = config_dir.join(CONFIG_FILE);
	if !path.exists() {
		return report;
	}

	match DocsConfig::from_path(&path) {
		Ok(config) => report.config = Some(config),
		Err(error) => {
			tracing::warn!(path = %path.display(), %error, "failed to load docs config");
			report.errors.push((path, error.to_string()));
		}
	}
	report
}
