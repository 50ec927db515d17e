//! Plain-text rendering for terminal output.

use std::fmt::Write;

use vitrine_search::{PredictiveView, count_label};
use vitrine_storefront::links::{page_path, product_path};
use vitrine_storefront::search::RegularSearch;

pub fn predictive(view: &PredictiveView) -> String {
	let mut out = String::new();
	match view {
		PredictiveView::Hidden => {}
		PredictiveView::Results { term, total, sections } => {
			let _ = writeln!(out, "{term}: {}", count_label(*total));
			for section in sections {
				let _ = writeln!(out, "{}", section.kind.title());
				for row in &section.rows {
					match &row.price {
						Some(price) => {
							let _ = writeln!(out, "  {}  {price}  {}", row.title, row.url);
						}
						None => {
							let _ = writeln!(out, "  {}  {}", row.title, row.url);
						}
					}
				}
			}
			if let Some(url) = view.view_all_url() {
				let _ = writeln!(out, "View all results: {url}");
			}
		}
		_ => {
			if let Some(message) = view.message() {
				let _ = writeln!(out, "{message}");
			}
		}
	}
	out
}

pub fn regular(search: &RegularSearch) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "{}: {}", search.term, count_label(search.total));
	if let Some(error) = &search.error {
		let _ = writeln!(out, "error: {error}");
	}
	for product in &search.items.products.nodes {
		let _ = writeln!(
			out,
			"  {}  {}  {}",
			product.title,
			product.price_range.min_variant_price.display(),
			product_path(&product.handle)
		);
	}
	for page in &search.items.pages.nodes {
		let _ = writeln!(out, "  {}  {}", page.title, page_path(&page.handle));
	}
	for article in &search.items.articles.nodes {
		let _ = writeln!(out, "  {}  {}", article.title, article.handle);
	}
	let page_info = &search.items.products.page_info;
	if page_info.has_previous_page
		&& let Some(cursor) = &page_info.start_cursor
	{
		let _ = writeln!(out, "previous page: --previous --cursor {cursor}");
	}
	if page_info.has_next_page
		&& let Some(cursor) = &page_info.end_cursor
	{
		let _ = writeln!(out, "next page: --cursor {cursor}");
	}
	out
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use vitrine_storefront::model::PageInfo;

	use super::*;

	#[test]
	fn empty_result_prints_message() {
		let view = PredictiveView::Empty { term: "zzz".into() };
		assert_eq!(predictive(&view), "No results found for zzz\n");
		assert_eq!(predictive(&PredictiveView::Hidden), "");
	}

	#[test]
	fn regular_search_prints_paging_hints() {
		let mut search = RegularSearch {
			term: "hat".into(),
			..RegularSearch::default()
		};
		search.items.products.page_info = PageInfo {
			has_next_page: true,
			end_cursor: Some("abc".into()),
			..PageInfo::default()
		};

		assert_eq!(regular(&search), "hat: 0 items\nnext page: --cursor abc\n");
	}
}
