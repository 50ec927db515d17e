//! `config.toml` loading.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use vitrine_search::SearchOptions;
use vitrine_storefront::StorefrontConfig;

/// Environment variable overriding `storefront.access_token`.
pub const TOKEN_ENV: &str = "VITRINE_STOREFRONT_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("I/O error reading {path}: {error}")]
	Io { path: PathBuf, error: std::io::Error },

	#[error("invalid config {path}: {error}")]
	Parse { path: PathBuf, error: toml::de::Error },

	#[error("missing required field: {0}")]
	MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
	pub storefront: StorefrontConfig,
	pub search: SearchOptions,
}

impl AppConfig {
	/// `$XDG_CONFIG_HOME/vitrine/config.toml` or the platform equivalent.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join("vitrine").join("config.toml"))
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		toml::from_str(&content).map_err(|error| ConfigError::Parse {
			path: path.to_path_buf(),
			error,
		})
	}

	/// Loads `explicit` if given, otherwise the default file if it exists,
	/// otherwise built-in defaults.
	pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
		if let Some(path) = explicit {
			return Self::load(path);
		}
		match Self::default_path().filter(|path| path.is_file()) {
			Some(path) => Self::load(path),
			None => Ok(Self::default()),
		}
	}

	/// A non-empty `token` replaces the configured access token.
	pub fn with_token_override(mut self, token: Option<String>) -> Self {
		if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
			self.storefront.access_token = Some(token);
		}
		self
	}

	pub fn validate(&self) -> Result<()> {
		if self.storefront.store_domain.trim().is_empty() {
			return Err(ConfigError::MissingField("storefront.store_domain"));
		}
		Ok(())
	}
}
