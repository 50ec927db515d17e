use serde::Serialize;

use crate::params::QueryParams;

/// Paging direction requested by the page links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
	#[default]
	Next,
	Previous,
}

/// Cursor position decoded from `cursor` / `direction` query params.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
	pub cursor: Option<String>,
	pub direction: Direction,
}

/// Connection arguments for a paginated query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationVariables {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub first: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub start_cursor: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub end_cursor: Option<String>,
}

/// Query params owned by pagination; never forwarded as product filters.
pub const PAGINATION_KEYS: &[&str] = &["cursor", "direction"];

impl Pagination {
	pub fn from_params(params: &QueryParams) -> Self {
		let cursor = params.get("cursor").filter(|c| !c.is_empty()).map(str::to_string);
		let direction = match params.get("direction") {
			Some("previous") => Direction::Previous,
			_ => Direction::Next,
		};
		Self { cursor, direction }
	}

	/// Builds connection arguments for pages of `page_by` items.
	///
	/// Backwards paging reads the `last` items before the cursor; anything
	/// else reads the `first` items after it.
	pub fn variables(&self, page_by: u32) -> PaginationVariables {
		match (self.direction, &self.cursor) {
			(Direction::Previous, Some(cursor)) => PaginationVariables {
				last: Some(page_by),
				start_cursor: Some(cursor.clone()),
				..PaginationVariables::default()
			},
			_ => PaginationVariables {
				first: Some(page_by),
				end_cursor: self.cursor.clone(),
				..PaginationVariables::default()
			},
		}
	}
}
