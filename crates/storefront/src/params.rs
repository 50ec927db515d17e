use url::form_urlencoded;

/// Ordered, multi-valued URL query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
	pairs: Vec<(String, String)>,
}

impl QueryParams {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a query string, with or without the leading `?`.
	pub fn parse(query: &str) -> Self {
		let query = query.strip_prefix('?').unwrap_or(query);
		Self {
			pairs: form_urlencoded::parse(query.as_bytes()).into_owned().collect(),
		}
	}

	pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.pairs.push((key.into(), value.into()));
	}

	/// Returns the first value for `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
	}

	/// Returns the last value for `key`.
	pub fn last(&self, key: &str) -> Option<&str> {
		self.pairs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
	}

	pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
		self.pairs.iter().filter(move |(k, _)| k == key).map(|(_, v)| v.as_str())
	}

	pub fn contains(&self, key: &str, value: &str) -> bool {
		self.get_all(key).any(|v| v == value)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	/// Serializes back to a form-encoded query string without the leading `?`.
	pub fn to_query_string(&self) -> String {
		form_urlencoded::Serializer::new(String::new())
			.extend_pairs(self.pairs.iter())
			.finish()
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
		}
	}
}
