//! Predictive search provider seam and its Storefront API implementation.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::{GraphQlResponse, StorefrontClient};
use crate::error::{Result, StorefrontError};
use crate::model::{PredictiveItems, PredictiveResult};
use crate::queries::PREDICTIVE_SEARCH;

/// Results per entity group when the caller does not ask for a limit.
pub const DEFAULT_PREDICTIVE_LIMIT: u32 = 10;

/// Predictive search request sent to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictiveRequest {
	pub term: String,
	pub limit: u32,
}

impl PredictiveRequest {
	pub fn new(term: impl Into<String>, limit: u32) -> Self {
		Self {
			term: term.into(),
			limit,
		}
	}
}

/// Anything that can answer predictive search requests.
#[async_trait]
pub trait SearchProvider: Send + Sync {
	async fn predictive_search(&self, request: &PredictiveRequest) -> Result<PredictiveResult>;
}

#[async_trait]
impl<P: SearchProvider + ?Sized> SearchProvider for Arc<P> {
	async fn predictive_search(&self, request: &PredictiveRequest) -> Result<PredictiveResult> {
		(**self).predictive_search(request).await
	}
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictiveVariables<'a> {
	limit: u32,
	limit_scope: &'static str,
	term: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PredictiveData {
	predictive_search: Option<PredictiveItems>,
}

/// Converts a predictive search envelope into a result.
///
/// GraphQL errors fail the whole request; a response without the
/// `predictiveSearch` field is reported as missing data.
pub(crate) fn predictive_from_response(response: GraphQlResponse<PredictiveData>) -> Result<PredictiveResult> {
	if let Some(errors) = response.joined_errors() {
		return Err(StorefrontError::GraphQl(errors));
	}
	let items = response
		.data
		.and_then(|data| data.predictive_search)
		.ok_or(StorefrontError::MissingData("predictive search"))?;
	Ok(PredictiveResult::from_items(items))
}

#[async_trait]
impl SearchProvider for StorefrontClient {
	async fn predictive_search(&self, request: &PredictiveRequest) -> Result<PredictiveResult> {
		let term = request.term.trim();
		if term.is_empty() {
			return Ok(PredictiveResult::empty());
		}

		let limit = if request.limit == 0 { DEFAULT_PREDICTIVE_LIMIT } else { request.limit };
		let variables = PredictiveVariables {
			limit,
			limit_scope: "EACH",
			term,
		};
		let response = self.execute(&PREDICTIVE_SEARCH, &variables).await?;
		let result = predictive_from_response(response)?;
		debug!(term, total = result.total, "predictive search resolved");
		Ok(result)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn decode(json: &str) -> GraphQlResponse<PredictiveData> {
		serde_json::from_str(json).expect("envelope must decode")
	}

	#[test]
	fn graphql_errors_fail_the_request() {
		let err = predictive_from_response(decode(
			r#"{"data": null, "errors": [{"message": "Throttled"}, {"message": "Invalid term"}]}"#,
		))
		.unwrap_err();
		assert_eq!(err, StorefrontError::GraphQl("Throttled, Invalid term".into()));
		assert_eq!(err.to_string(), "Storefront API errors: Throttled, Invalid term");
	}

	#[test]
	fn missing_payload_is_reported() {
		let err = predictive_from_response(decode(r#"{"data": {"predictiveSearch": null}}"#)).unwrap_err();
		assert_eq!(err, StorefrontError::MissingData("predictive search"));
	}

	#[test]
	fn total_counts_every_group() {
		let result = predictive_from_response(decode(
			r#"{"data": {"predictiveSearch": {
				"articles": [],
				"collections": [{"id": "c1", "title": "Dresses", "handle": "dresses", "trackingParameters": "_pos=1"}],
				"pages": [],
				"products": [{
					"id": "p1", "title": "Linen Dress", "handle": "linen-dress",
					"priceRange": {
						"minVariantPrice": {"amount": "49.0", "currencyCode": "AUD"},
						"maxVariantPrice": {"amount": "59.0", "currencyCode": "AUD"}
					}
				}],
				"queries": [{"text": "dress", "styledText": "<mark>dre</mark>ss"}]
			}}}"#,
		))
		.expect("result must decode");
		assert_eq!(result.total, 3);
		assert_eq!(result.items.products[0].price_range.min_variant_price.display(), "49.00 AUD");
	}

	#[tokio::test]
	async fn blank_term_short_circuits_without_network() {
		let client = StorefrontClient::new(&crate::StorefrontConfig {
			store_domain: "unreachable.invalid".into(),
			..crate::StorefrontConfig::default()
		})
		.expect("client must build");
		let result = client
			.predictive_search(&PredictiveRequest::new("   ", 10))
			.await
			.expect("blank term must not hit the network");
		assert_eq!(result, PredictiveResult::empty());
	}
}
