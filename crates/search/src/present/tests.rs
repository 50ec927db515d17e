use pretty_assertions::assert_eq;
use rstest::rstest;
use vitrine_storefront::{PredictiveItems, PredictiveResult};

use super::*;

fn items() -> PredictiveItems {
	serde_json::from_str(
		r#"{
			"queries": [
				{"text": "shoes", "styledText": "<mark onclick=\"x()\">shoe</mark>s", "trackingParameters": "_pos=1"}
			],
			"collections": [],
			"pages": [],
			"products": [
				{
					"id": "gid://shopify/Product/1",
					"title": "Canvas Shoe",
					"handle": "canvas-shoe",
					"trackingParameters": "foo=bar",
					"priceRange": {
						"minVariantPrice": {"amount": "49.0", "currencyCode": "AUD"},
						"maxVariantPrice": {"amount": "59.0", "currencyCode": "AUD"}
					}
				}
			],
			"articles": [
				{"id": "a1", "title": "Shoe care", "handle": "shoe-care", "blog": {"handle": "journal"}}
			]
		}"#,
	)
	.expect("fixture must decode")
}

#[test]
fn empty_groups_are_omitted_and_order_is_stable() {
	let sections = present_items(&items());
	let kinds: Vec<_> = sections.iter().map(|s| s.kind).collect();
	assert_eq!(kinds, vec![SectionKind::Queries, SectionKind::Products, SectionKind::Articles]);
}

#[test]
fn rows_carry_tracked_urls_and_prices() {
	let sections = present_items(&items());

	let suggestion = &sections[0].rows[0];
	assert_eq!(suggestion.url, "/search?q=shoes&_pos=1");
	assert_eq!(suggestion.styled_html.as_deref(), Some("<mark>shoe</mark>s"));

	let product = &sections[1].rows[0];
	assert_eq!(product.url, "/products/canvas-shoe?foo=bar");
	assert_eq!(product.price.as_deref(), Some("49.00 AUD"));

	let article = &sections[2].rows[0];
	assert_eq!(article.url, "/blogs/journal/shoe-care");
	assert_eq!(article.price, None);
}

#[test]
fn presenting_twice_is_identical() {
	let items = items();
	assert_eq!(present_items(&items), present_items(&items));
}

#[test]
fn no_items_means_no_sections() {
	assert!(present_items(&PredictiveItems::default()).is_empty());
}

#[test]
fn state_maps_to_view() {
	assert_eq!(present(&DisplayState::Idle), PredictiveView::Hidden);
	assert_eq!(
		present(&DisplayState::Loading { term: "shoe".into() }),
		PredictiveView::Loading { term: "shoe".into() }
	);

	let cleared = DisplayState::Resolved {
		term: String::new(),
		result: PredictiveResult::empty(),
	};
	assert_eq!(present(&cleared), PredictiveView::Hidden);

	let empty = present(&DisplayState::Resolved {
		term: "zzz".into(),
		result: PredictiveResult::empty(),
	});
	assert_eq!(empty.message().as_deref(), Some("No results found for zzz"));

	let failed = present(&DisplayState::Error {
		term: "shoe".into(),
		message: "network error".into(),
	});
	assert_eq!(failed.message().as_deref(), Some("network error"));
}

#[test]
fn resolved_state_lists_sections() {
	let view = present(&DisplayState::Resolved {
		term: "shoe".into(),
		result: PredictiveResult::from_items(items()),
	});
	let PredictiveView::Results { total, sections, .. } = &view else {
		panic!("expected results, got {view:?}");
	};
	assert_eq!(*total, 3);
	assert_eq!(sections.len(), 3);
	assert_eq!(view.view_all_url().as_deref(), Some("/search?q=shoe"));
}

#[rstest]
#[case(0, "0 items")]
#[case(1, "1 item")]
#[case(12, "12 items")]
fn count_labels(#[case] count: usize, #[case] expected: &str) {
	assert_eq!(count_label(count), expected);
}
