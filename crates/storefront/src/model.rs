//! Typed Storefront API payloads.

use serde::{Deserialize, Serialize};

/// Monetary amount as returned by the API (`MoneyV2`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
	/// Decimal string, e.g. `"29.0"`.
	pub amount: String,
	pub currency_code: String,
}

impl Money {
	/// Formats the amount with exactly two fraction digits and the currency code.
	pub fn display(&self) -> String {
		let amount = self.amount.trim();
		let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));
		let whole = if whole.is_empty() { "0" } else { whole };
		let mut cents: String = fraction.chars().take(2).collect();
		while cents.len() < 2 {
			cents.push('0');
		}
		format!("{whole}.{cents} {}", self.currency_code)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
	pub url: String,
	#[serde(default)]
	pub alt_text: Option<String>,
	#[serde(default)]
	pub width: Option<u32>,
	#[serde(default)]
	pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
	pub min_variant_price: Money,
	pub max_variant_price: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
	pub name: String,
	pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
	pub id: String,
	#[serde(default)]
	pub available_for_sale: bool,
	#[serde(default)]
	pub selected_options: Vec<SelectedOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOptionValue {
	pub id: String,
	pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub option_values: Vec<ProductOptionValue>,
}

/// GraphQL `nodes` connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection<T> {
	pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
	fn default() -> Self {
		Self { nodes: Vec::new() }
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
	pub has_next_page: bool,
	pub has_previous_page: bool,
	#[serde(default)]
	pub start_cursor: Option<String>,
	#[serde(default)]
	pub end_cursor: Option<String>,
}

/// Product listing payload shared by predictive search, search and collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
	pub id: String,
	pub title: String,
	pub handle: String,
	#[serde(default)]
	pub tracking_parameters: Option<String>,
	#[serde(default)]
	pub featured_image: Option<Image>,
	pub price_range: PriceRange,
	#[serde(default)]
	pub variants: Connection<ProductVariant>,
	#[serde(default)]
	pub options: Vec<ProductOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictiveCollection {
	pub id: String,
	pub title: String,
	pub handle: String,
	#[serde(default)]
	pub image: Option<Image>,
	#[serde(default)]
	pub tracking_parameters: Option<String>,
}

/// Page payload, identical between predictive and regular search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
	pub id: String,
	pub title: String,
	pub handle: String,
	#[serde(default)]
	pub tracking_parameters: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogRef {
	pub handle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictiveArticle {
	pub id: String,
	pub title: String,
	pub handle: String,
	pub blog: BlogRef,
	#[serde(default)]
	pub image: Option<Image>,
	#[serde(default)]
	pub tracking_parameters: Option<String>,
}

/// Query suggestion. `styled_text` is provider HTML and must be sanitized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySuggestion {
	pub text: String,
	#[serde(default)]
	pub styled_text: String,
	#[serde(default)]
	pub tracking_parameters: Option<String>,
}

/// Predictive search groups, one list per entity kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictiveItems {
	#[serde(default)]
	pub articles: Vec<PredictiveArticle>,
	#[serde(default)]
	pub collections: Vec<PredictiveCollection>,
	#[serde(default)]
	pub pages: Vec<Page>,
	#[serde(default)]
	pub products: Vec<Product>,
	#[serde(default)]
	pub queries: Vec<QuerySuggestion>,
}

impl PredictiveItems {
	/// Total entries across every group.
	pub fn len(&self) -> usize {
		self.articles.len() + self.collections.len() + self.pages.len() + self.products.len() + self.queries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Predictive search payload with its precomputed total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictiveResult {
	pub items: PredictiveItems,
	pub total: usize,
}

impl PredictiveResult {
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn from_items(items: PredictiveItems) -> Self {
		let total = items.len();
		Self { items, total }
	}
}
