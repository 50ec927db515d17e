//! Regular (submitted) search across articles, pages and products.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::client::{GraphQlResponse, StorefrontClient};
use crate::error::{Result, StorefrontError};
use crate::model::{Connection, Page, PageInfo, Product};
use crate::pagination::{Pagination, PaginationVariables};
use crate::queries::REGULAR_SEARCH;

/// Products per search results page.
pub const SEARCH_PAGE_SIZE: u32 = 36;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchArticle {
	pub id: String,
	pub title: String,
	pub handle: String,
	#[serde(default)]
	pub tracking_parameters: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductConnection {
	pub nodes: Vec<Product>,
	#[serde(default)]
	pub page_info: PageInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularSearchItems {
	#[serde(default)]
	pub articles: Connection<SearchArticle>,
	#[serde(default)]
	pub pages: Connection<Page>,
	#[serde(default)]
	pub products: ProductConnection,
}

impl RegularSearchItems {
	pub fn total(&self) -> usize {
		self.articles.nodes.len() + self.pages.nodes.len() + self.products.nodes.len()
	}
}

/// Outcome of a regular search.
///
/// GraphQL errors do not fail the search; they ride along in `error` so the
/// page can render whatever data came back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegularSearch {
	pub term: String,
	pub items: RegularSearchItems,
	pub total: usize,
	pub error: Option<String>,
}

#[derive(Serialize)]
struct SearchVariables<'a> {
	term: &'a str,
	#[serde(flatten)]
	page: PaginationVariables,
}

pub(crate) fn regular_from_response(
	term: &str,
	response: GraphQlResponse<RegularSearchItems>,
) -> Result<RegularSearch> {
	let error = response.joined_errors();
	let items = response.data.ok_or(StorefrontError::MissingData("search"))?;
	Ok(RegularSearch {
		term: term.to_string(),
		total: items.total(),
		items,
		error,
	})
}

impl StorefrontClient {
	/// Runs a regular search for `term` at the given page position.
	pub async fn search(&self, term: &str, pagination: &Pagination) -> Result<RegularSearch> {
		let variables = SearchVariables {
			term,
			page: pagination.variables(SEARCH_PAGE_SIZE),
		};
		let response = self.execute(&REGULAR_SEARCH, &variables).await?;
		let search = regular_from_response(term, response)?;
		if let Some(error) = &search.error {
			warn!(term, error = %error, "search returned partial results");
		}
		debug!(term, total = search.total, "regular search resolved");
		Ok(search)
	}
}
