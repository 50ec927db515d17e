//! Pure mapping from search state to renderable sections.
//!
//! Given the same input, [`present`] and [`present_items`] always return the
//! same output. Provider HTML in suggestions is sanitized here, before it
//! can reach a view.

use vitrine_primitives::{Sanitizer, search_path, url_with_tracking};
use vitrine_storefront::PredictiveItems;
use vitrine_storefront::links::{article_path, collection_path, page_path, product_path};
use vitrine_storefront::model::Image;

use crate::state::DisplayState;

/// Entity group a section renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
	Queries,
	Collections,
	Pages,
	Products,
	Articles,
}

impl SectionKind {
	pub const fn title(self) -> &'static str {
		match self {
			Self::Queries => "Suggestions",
			Self::Collections => "Collections",
			Self::Pages => "Pages",
			Self::Products => "Products",
			Self::Articles => "Articles",
		}
	}
}

/// One clickable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
	pub title: String,
	pub url: String,
	pub image: Option<Image>,
	/// Minimum variant price, products only.
	pub price: Option<String>,
	/// Sanitized highlight markup, suggestions only.
	pub styled_html: Option<String>,
}

impl ResultRow {
	fn link(title: &str, base: &str, tracking: Option<&str>) -> Self {
		Self {
			title: title.to_string(),
			url: url_with_tracking(base, tracking),
			image: None,
			price: None,
			styled_html: None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
	pub kind: SectionKind,
	pub rows: Vec<ResultRow>,
}

/// Renderable form of a [`DisplayState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictiveView {
	/// Nothing to draw.
	Hidden,
	Loading { term: String },
	/// The search finished without matches.
	Empty { term: String },
	Failed { term: String, message: String },
	Results { term: String, total: usize, sections: Vec<Section> },
}

impl PredictiveView {
	/// Status line for non-result views.
	pub fn message(&self) -> Option<String> {
		match self {
			Self::Hidden | Self::Results { .. } => None,
			Self::Loading { .. } => Some("Loading...".to_string()),
			Self::Empty { term } => Some(format!("No results found for {term}")),
			Self::Failed { message, .. } => Some(message.clone()),
		}
	}

	/// Link to the full search page for the current term.
	pub fn view_all_url(&self) -> Option<String> {
		match self {
			Self::Results { term, .. } => Some(search_path(term)),
			_ => None,
		}
	}
}

/// Maps a display state to its view.
pub fn present(state: &DisplayState) -> PredictiveView {
	match state {
		DisplayState::Idle => PredictiveView::Hidden,
		DisplayState::Loading { term } if term.is_empty() => PredictiveView::Hidden,
		DisplayState::Loading { term } => PredictiveView::Loading { term: term.clone() },
		DisplayState::Resolved { term, .. } if term.is_empty() => PredictiveView::Hidden,
		DisplayState::Resolved { term, result } if result.total == 0 => PredictiveView::Empty { term: term.clone() },
		DisplayState::Resolved { term, result } => PredictiveView::Results {
			term: term.clone(),
			total: result.total,
			sections: present_items(&result.items),
		},
		DisplayState::Error { term, message } => PredictiveView::Failed {
			term: term.clone(),
			message: message.clone(),
		},
	}
}

/// Builds sections in display order, omitting empty groups.
pub fn present_items(items: &PredictiveItems) -> Vec<Section> {
	let sanitizer = Sanitizer::inline();

	let queries: Vec<ResultRow> = items
		.queries
		.iter()
		.map(|query| ResultRow {
			styled_html: Some(sanitizer.sanitize(&query.styled_text)),
			..ResultRow::link(&query.text, &search_path(&query.text), query.tracking_parameters.as_deref())
		})
		.collect();

	let collections: Vec<ResultRow> = items
		.collections
		.iter()
		.map(|collection| ResultRow {
			image: collection.image.clone(),
			..ResultRow::link(
				&collection.title,
				&collection_path(&collection.handle),
				collection.tracking_parameters.as_deref(),
			)
		})
		.collect();

	let pages: Vec<ResultRow> = items
		.pages
		.iter()
		.map(|page| ResultRow::link(&page.title, &page_path(&page.handle), page.tracking_parameters.as_deref()))
		.collect();

	let products: Vec<ResultRow> = items
		.products
		.iter()
		.map(|product| ResultRow {
			image: product.featured_image.clone(),
			price: Some(product.price_range.min_variant_price.display()),
			..ResultRow::link(
				&product.title,
				&product_path(&product.handle),
				product.tracking_parameters.as_deref(),
			)
		})
		.collect();

	let articles: Vec<ResultRow> = items
		.articles
		.iter()
		.map(|article| ResultRow {
			image: article.image.clone(),
			..ResultRow::link(
				&article.title,
				&article_path(&article.blog.handle, &article.handle),
				article.tracking_parameters.as_deref(),
			)
		})
		.collect();

	[
		(SectionKind::Queries, queries),
		(SectionKind::Collections, collections),
		(SectionKind::Pages, pages),
		(SectionKind::Products, products),
		(SectionKind::Articles, articles),
	]
	.into_iter()
	.filter(|(_, rows)| !rows.is_empty())
	.map(|(kind, rows)| Section { kind, rows })
	.collect()
}

/// `1 item`, `3 items`.
pub fn count_label(count: usize) -> String {
	if count == 1 {
		"1 item".to_string()
	} else {
		format!("{count} items")
	}
}

#[cfg(test)]
mod tests;
