//! HTTP transport for Storefront API operations.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use crate::queries::Operation;

/// Header carrying the public Storefront API token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// A single GraphQL error entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphQlError {
	pub message: String,
}

/// Raw GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
	pub data: Option<T>,
	#[serde(default)]
	pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
	/// Joins all error messages with `", "`, or `None` when there are none.
	pub fn joined_errors(&self) -> Option<String> {
		if self.errors.is_empty() {
			return None;
		}
		Some(self.errors.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join(", "))
	}
}

#[derive(Serialize)]
struct GraphQlRequest<'a, V> {
	query: &'a str,
	variables: &'a V,
}

/// Storefront API client.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
	http: Client,
	endpoint: Url,
	access_token: Option<String>,
	timeout: Duration,
}

impl StorefrontClient {
	/// Builds a client from configuration.
	pub fn new(config: &StorefrontConfig) -> Result<Self> {
		Ok(Self {
			http: Client::new(),
			endpoint: config.endpoint()?,
			access_token: config.access_token.clone().filter(|t| !t.is_empty()),
			timeout: config.timeout(),
		})
	}

	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	/// Executes `operation` with `variables` and decodes the envelope.
	///
	/// GraphQL-level errors are returned inside the envelope; only transport
	/// and decoding failures are surfaced as `Err`.
	pub async fn execute<V, T>(&self, operation: &Operation, variables: &V) -> Result<GraphQlResponse<T>>
	where
		V: Serialize,
		T: DeserializeOwned,
	{
		debug!(operation = operation.name, endpoint = %self.endpoint, "storefront.execute");

		let mut request = self
			.http
			.post(self.endpoint.clone())
			.header(CONTENT_TYPE, "application/json")
			.header(ACCEPT, "application/json")
			.json(&GraphQlRequest {
				query: operation.document,
				variables,
			})
			.timeout(self.timeout);
		if let Some(token) = &self.access_token {
			request = request.header(ACCESS_TOKEN_HEADER, token);
		}

		let response = request.send().await.map_err(|e| StorefrontError::Network(e.to_string()))?;

		let status = response.status().as_u16();
		let body = response.bytes().await.map_err(|e| StorefrontError::Network(e.to_string()))?;
		let envelope = envelope_from_body::<T>(operation.name, status, &body)?;

		if let Some(errors) = envelope.joined_errors() {
			debug!(operation = operation.name, errors = %errors, "storefront graphql errors");
		}
		Ok(envelope)
	}
}

/// Maps a raw HTTP reply to the GraphQL envelope.
///
/// Non-2xx statuses become [`StorefrontError::Status`] carrying the body as
/// text; a 2xx body that is not a valid envelope becomes
/// [`StorefrontError::Decode`].
pub(crate) fn envelope_from_body<T: DeserializeOwned>(
	operation: &str,
	status: u16,
	body: &[u8],
) -> Result<GraphQlResponse<T>> {
	if !(200..300).contains(&status) {
		warn!(operation, status, "storefront request failed");
		return Err(StorefrontError::Status {
			status,
			body: String::from_utf8_lossy(body).into_owned(),
		});
	}
	serde_json::from_slice(body).map_err(|e| StorefrontError::Decode(format!("{operation}: {e}")))
}
