//! Facet filter decoding for collection listings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, StorefrontError};
use crate::params::QueryParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterType {
	List,
	PriceRange,
	Boolean,
	#[serde(other)]
	Other,
}

/// A filterable product attribute with its selectable values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
	pub id: String,
	pub label: String,
	#[serde(rename = "type")]
	pub kind: FilterType,
	#[serde(default)]
	pub values: Vec<FilterValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterValue {
	pub id: String,
	pub label: String,
	#[serde(default)]
	pub count: u32,
	/// JSON-encoded `ProductFilter` input, e.g. `{"productVendor":"Acme"}`.
	pub input: String,
}

/// A rendered facet value: where it links and whether it is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
	pub id: String,
	pub label: String,
	pub count: u32,
	pub key: String,
	pub value: String,
	pub href: String,
	pub selected: bool,
}

/// Decodes a filter value's `input` JSON into query params.
///
/// String values are used as-is; structured values keep their JSON text so
/// they can be decoded again when the filter is applied.
pub fn decode_filter_input(input: &str) -> Result<QueryParams> {
	let map: serde_json::Map<String, Value> =
		serde_json::from_str(input).map_err(|e| StorefrontError::InvalidInput(format!("facet input {input:?}: {e}")))?;
	Ok(map
		.into_iter()
		.map(|(key, value)| {
			let value = match value {
				Value::String(s) => s,
				other => other.to_string(),
			};
			(key, value)
		})
		.collect())
}

/// Builds the selectable options of a list facet for collection `handle`.
///
/// Only list facets produce options; range and boolean facets return an
/// empty list. `current` holds the query params of the page being rendered.
pub fn facet_options(handle: &str, filter: &Filter, current: &QueryParams) -> Result<Vec<FacetOption>> {
	if filter.kind != FilterType::List {
		return Ok(Vec::new());
	}

	let mut options = Vec::with_capacity(filter.values.len());
	for value in &filter.values {
		let query = decode_filter_input(&value.input)?;
		let Some((key, selected_value)) = query.iter().next() else {
			continue;
		};
		options.push(FacetOption {
			id: value.id.clone(),
			label: value.label.clone(),
			count: value.count,
			key: key.to_string(),
			value: selected_value.to_string(),
			href: format!("/collections/{handle}?{}", query.to_query_string()),
			selected: current.contains(key, selected_value),
		});
	}
	Ok(options)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn vendor_filter() -> Filter {
		serde_json::from_str(
			r#"{
				"id": "filter.p.vendor",
				"label": "Brand",
				"type": "LIST",
				"values": [
					{"id": "v1", "label": "Acme", "count": 4, "input": "{\"productVendor\":\"Acme\"}"},
					{"id": "v2", "label": "Globex", "count": 2, "input": "{\"productVendor\":\"Globex\"}"}
				]
			}"#,
		)
		.expect("filter must decode")
	}

	#[test]
	fn list_facet_links_and_selection() {
		let current = QueryParams::parse("productVendor=Globex");
		let options = facet_options("dresses", &vendor_filter(), &current).expect("options must build");

		assert_eq!(options.len(), 2);
		assert_eq!(options[0].href, "/collections/dresses?productVendor=Acme");
		assert!(!options[0].selected);
		assert_eq!(options[1].key, "productVendor");
		assert_eq!(options[1].value, "Globex");
		assert!(options[1].selected);
	}

	#[test]
	fn structured_input_keeps_json_text() {
		let params = decode_filter_input(r#"{"variantOption":{"name":"size","value":"M"}}"#).expect("input must decode");
		assert_eq!(params.get("variantOption"), Some(r#"{"name":"size","value":"M"}"#));

		let params = decode_filter_input(r#"{"available":true}"#).expect("input must decode");
		assert_eq!(params.get("available"), Some("true"));
	}

	#[test]
	fn price_facets_have_no_list_options() {
		let filter = Filter {
			id: "filter.v.price".into(),
			label: "Price".into(),
			kind: FilterType::PriceRange,
			values: Vec::new(),
		};
		assert!(facet_options("dresses", &filter, &QueryParams::new()).expect("ok").is_empty());
	}

	#[test]
	fn unknown_filter_types_decode() {
		let filter: Filter =
			serde_json::from_str(r#"{"id": "x", "label": "X", "type": "SWATCH"}"#).expect("filter must decode");
		assert_eq!(filter.kind, FilterType::Other);
	}

	#[test]
	fn malformed_input_is_rejected() {
		assert!(matches!(decode_filter_input("not json"), Err(StorefrontError::InvalidInput(_))));
	}
}
