//! Collection listing with facet filters.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::{GraphQlResponse, StorefrontClient};
use crate::error::{Result, StorefrontError};
use crate::facets::Filter;
use crate::pagination::{PAGINATION_KEYS, Pagination, PaginationVariables};
use crate::params::QueryParams;
use crate::queries::{COLLECTION, FACETS};
use crate::search::ProductConnection;

/// Products per collection page.
pub const COLLECTION_PAGE_SIZE: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
	pub id: String,
	pub handle: String,
	pub title: String,
	/// Provider HTML; sanitize before rendering.
	#[serde(default)]
	pub description_html: String,
	#[serde(default)]
	pub products: ProductConnection,
}

/// A collection page: the listing plus the facets available for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionPage {
	pub collection: Collection,
	pub facets: Vec<Filter>,
}

#[derive(Deserialize)]
pub(crate) struct CollectionData {
	collection: Option<Collection>,
}

#[derive(Deserialize)]
pub(crate) struct FacetsData {
	collection: Option<FacetCollection>,
}

#[derive(Deserialize)]
struct FacetCollection {
	products: FacetProducts,
}

#[derive(Deserialize)]
struct FacetProducts {
	#[serde(default)]
	filters: Vec<Filter>,
}

#[derive(Serialize)]
struct CollectionVariables<'a> {
	handle: &'a str,
	filters: Vec<Value>,
	#[serde(flatten)]
	page: PaginationVariables,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FacetVariables<'a> {
	collection_handle: &'a str,
}

/// Builds `ProductFilter` inputs from page query params.
///
/// All params fold into one filter object (later keys win). `available` is
/// coerced to a boolean and JSON object or array values are decoded, which
/// reverses [`crate::facets::decode_filter_input`]. Pagination params are
/// skipped.
pub fn product_filters(params: &QueryParams) -> Vec<Value> {
	let mut filter = serde_json::Map::new();
	for (key, raw) in params.iter() {
		if PAGINATION_KEYS.contains(&key) {
			continue;
		}
		let value = if key == "available" {
			Value::Bool(raw == "true")
		} else {
			serde_json::from_str::<Value>(raw)
				.ok()
				.filter(|v| v.is_object() || v.is_array())
				.unwrap_or_else(|| Value::String(raw.to_string()))
		};
		filter.insert(key.to_string(), value);
	}

	if filter.is_empty() { Vec::new() } else { vec![Value::Object(filter)] }
}

pub(crate) fn collection_from_responses(
	handle: &str,
	collection: GraphQlResponse<CollectionData>,
	facets: GraphQlResponse<FacetsData>,
) -> Result<CollectionPage> {
	if let Some(errors) = collection.joined_errors() {
		return Err(StorefrontError::GraphQl(errors));
	}
	let collection = collection
		.data
		.and_then(|data| data.collection)
		.ok_or_else(|| StorefrontError::NotFound(format!("Collection {handle}")))?;

	if let Some(errors) = facets.joined_errors() {
		warn!(handle, errors = %errors, "facet query failed; rendering without filters");
	}
	let facets = facets
		.data
		.and_then(|data| data.collection)
		.map(|c| c.products.filters)
		.unwrap_or_default();

	Ok(CollectionPage { collection, facets })
}

impl StorefrontClient {
	/// Loads a collection page and its facets concurrently.
	pub async fn collection(&self, handle: &str, params: &QueryParams) -> Result<CollectionPage> {
		let handle = handle.trim();
		if handle.is_empty() {
			return Err(StorefrontError::InvalidInput("collection handle is empty".into()));
		}

		let variables = CollectionVariables {
			handle,
			filters: product_filters(params),
			page: Pagination::from_params(params).variables(COLLECTION_PAGE_SIZE),
		};
		let facet_variables = FacetVariables {
			collection_handle: handle,
		};

		let (collection, facets) = tokio::try_join!(
			self.execute::<_, CollectionData>(&COLLECTION, &variables),
			self.execute::<_, FacetsData>(&FACETS, &facet_variables),
		)?;
		let page = collection_from_responses(handle, collection, facets)?;
		debug!(
			handle,
			products = page.collection.products.nodes.len(),
			facets = page.facets.len(),
			"collection resolved"
		);
		Ok(page)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;

	#[test]
	fn filters_fold_params_and_coerce_available() {
		let params = QueryParams::parse(
			"productVendor=Acme&available=true&cursor=abc&direction=next&variantOption=%7B%22name%22%3A%22size%22%2C%22value%22%3A%22M%22%7D",
		);
		assert_eq!(
			product_filters(&params),
			vec![json!({
				"productVendor": "Acme",
				"available": true,
				"variantOption": {"name": "size", "value": "M"}
			})]
		);
	}

	#[test]
	fn no_params_means_no_filters() {
		assert!(product_filters(&QueryParams::parse("cursor=abc")).is_empty());
	}

	#[test]
	fn available_false_for_anything_but_true() {
		let filters = product_filters(&QueryParams::parse("available=yes"));
		assert_eq!(filters, vec![json!({"available": false})]);
	}

	#[test]
	fn unknown_collection_is_not_found() {
		let collection: GraphQlResponse<CollectionData> =
			serde_json::from_str(r#"{"data": {"collection": null}}"#).expect("decode");
		let facets: GraphQlResponse<FacetsData> =
			serde_json::from_str(r#"{"data": {"collection": null}}"#).expect("decode");
		let err = collection_from_responses("missing", collection, facets).unwrap_err();
		assert_eq!(err.to_string(), "Collection missing not found");
	}

	#[test]
	fn facet_failure_degrades_to_no_filters() {
		let collection: GraphQlResponse<CollectionData> = serde_json::from_str(
			r#"{"data": {"collection": {
				"id": "c1", "handle": "dresses", "title": "Dresses", "descriptionHtml": "<p>Hi</p>",
				"products": {"nodes": [], "pageInfo": {"hasNextPage": false, "hasPreviousPage": false}}
			}}}"#,
		)
		.expect("decode");
		let facets: GraphQlResponse<FacetsData> =
			serde_json::from_str(r#"{"data": null, "errors": [{"message": "boom"}]}"#).expect("decode");

		let page = collection_from_responses("dresses", collection, facets).expect("page must build");
		assert_eq!(page.collection.title, "Dresses");
		assert!(page.facets.is_empty());
	}
}
