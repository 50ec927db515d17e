use url::form_urlencoded;

/// Appends provider tracking parameters to an outbound link.
///
/// The parameter string is appended verbatim as a query fragment. An absent
/// or empty string leaves `base` unchanged.
pub fn url_with_tracking(base: &str, tracking: Option<&str>) -> String {
	let tracking = tracking.map(|t| t.trim_start_matches(['?', '&'])).unwrap_or_default();
	if tracking.is_empty() {
		return base.to_string();
	}

	let separator = if base.ends_with(['?', '&']) {
		""
	} else if base.contains('?') {
		"&"
	} else {
		"?"
	};
	format!("{base}{separator}{tracking}")
}

/// Returns the search page path for `term`, form-encoded.
pub fn search_path(term: &str) -> String {
	let query = form_urlencoded::Serializer::new(String::new()).append_pair("q", term).finish();
	format!("/search?{query}")
}
