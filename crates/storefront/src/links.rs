//! Storefront link helpers.

use serde::Deserialize;
use url::Url;

use crate::model::SelectedOption;
use crate::params::QueryParams;

/// Domain suffix shared by every hosted storefront.
const HOSTED_DOMAIN: &str = "myshopify.com";

pub fn product_path(handle: &str) -> String {
	format!("/products/{handle}")
}

pub fn collection_path(handle: &str) -> String {
	format!("/collections/{handle}")
}

pub fn page_path(handle: &str) -> String {
	format!("/pages/{handle}")
}

pub fn article_path(blog: &str, handle: &str) -> String {
	format!("/blogs/{blog}/{handle}")
}

/// Product link preselecting a variant through its option values.
pub fn variant_url(handle: &str, selected_options: &[SelectedOption]) -> String {
	let base = product_path(handle);
	if selected_options.is_empty() {
		return base;
	}
	let query: QueryParams = selected_options
		.iter()
		.map(|option| (option.name.as_str(), option.value.as_str()))
		.collect();
	format!("{base}?{}", query.to_query_string())
}

/// Strips the origin from menu links that point back at the store.
///
/// External links and unparsable URLs are returned unchanged.
pub fn internal_menu_url(url: &str, public_store_domain: &str, primary_domain_url: &str) -> String {
	let internal = url.contains(HOSTED_DOMAIN)
		|| (!public_store_domain.is_empty() && url.contains(public_store_domain))
		|| (!primary_domain_url.is_empty() && url.contains(primary_domain_url));
	if !internal {
		return url.to_string();
	}
	Url::parse(url).map(|parsed| parsed.path().to_string()).unwrap_or_else(|_| url.to_string())
}

/// Navigation menu entry as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuItem {
	pub id: String,
	pub title: String,
	#[serde(default)]
	pub url: Option<String>,
}

/// Menu entry ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLink {
	pub id: String,
	pub title: String,
	pub url: String,
	/// Sale entries are rendered emphasized.
	pub emphasized: bool,
}

/// Resolves menu items to links, dropping items without a URL.
pub fn menu_links(items: &[MenuItem], public_store_domain: &str, primary_domain_url: &str) -> Vec<MenuLink> {
	items
		.iter()
		.filter_map(|item| {
			let url = item.url.as_deref().filter(|u| !u.is_empty())?;
			Some(MenuLink {
				id: item.id.clone(),
				title: item.title.clone(),
				url: internal_menu_url(url, public_store_domain, primary_domain_url),
				emphasized: item.title.eq_ignore_ascii_case("sale"),
			})
		})
		.collect()
}
