use std::time::Duration;

use serde::Deserialize;
use vitrine_storefront::DEFAULT_PREDICTIVE_LIMIT;

use crate::debounce::DEFAULT_DEBOUNCE;

/// Tuning for a predictive search session (`[search]` table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchOptions {
	/// Quiet period before a typed term is searched.
	pub debounce_ms: u64,
	/// Results per entity group.
	pub limit: u32,
}

impl Default for SearchOptions {
	fn default() -> Self {
		Self {
			debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
			limit: DEFAULT_PREDICTIVE_LIMIT,
		}
	}
}

impl SearchOptions {
	pub fn debounce(&self) -> Duration {
		Duration::from_millis(self.debounce_ms)
	}
}
