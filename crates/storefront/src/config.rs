use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{Result, StorefrontError};

/// Default Storefront API version.
pub const DEFAULT_API_VERSION: &str = "2024-07";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Connection settings for one store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
	/// Store domain, e.g. `example.myshopify.com`. A scheme prefix is tolerated.
	pub store_domain: String,
	/// Versioned API path segment.
	pub api_version: String,
	/// Public Storefront API access token.
	pub access_token: Option<String>,
	/// Request timeout in milliseconds.
	pub timeout_ms: u64,
}

impl Default for StorefrontConfig {
	fn default() -> Self {
		Self {
			store_domain: String::new(),
			api_version: DEFAULT_API_VERSION.to_string(),
			access_token: None,
			timeout_ms: DEFAULT_TIMEOUT_MS,
		}
	}
}

impl StorefrontConfig {
	/// Returns the GraphQL endpoint for the configured store.
	pub fn endpoint(&self) -> Result<Url> {
		let domain = self
			.store_domain
			.trim()
			.trim_start_matches("https://")
			.trim_start_matches("http://")
			.trim_end_matches('/');
		if domain.is_empty() {
			return Err(StorefrontError::InvalidInput("store_domain is not configured".into()));
		}
		if self.api_version.trim().is_empty() {
			return Err(StorefrontError::InvalidInput("api_version is empty".into()));
		}

		let raw = format!("https://{domain}/api/{}/graphql.json", self.api_version.trim());
		Url::parse(&raw).map_err(|e| StorefrontError::InvalidInput(format!("{raw}: {e}")))
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.timeout_ms)
	}
}
