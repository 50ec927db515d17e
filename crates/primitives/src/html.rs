//! HTML sanitizing boundary.
//!
//! Storefront content (suggestion `styledText`, collection descriptions, CMS
//! metaobject fields) arrives as raw HTML. Nothing from the provider reaches a
//! view without passing through [`Sanitizer::sanitize`].
//!
//! The sanitizer is allow-list based:
//!
//! * Allowed tags are re-emitted bare. Every attribute is dropped, so there is
//!   no `href`, `style` or event handler surface left to validate.
//! * Disallowed tags are removed but their text content is kept.
//! * Script-like containers (`script`, `style`, `iframe`, ...) are removed
//!   together with their content.
//! * Text is escaped, except for character references that are already
//!   well formed.
//! * Close tags are balanced: stray closes are dropped and unclosed tags are
//!   closed at the end of the fragment.

/// Tags allowed in single-line fragments such as highlighted suggestions.
pub const INLINE_TAGS: &[&str] = &["b", "br", "em", "i", "mark", "small", "span", "strong", "sub", "sup", "u"];

/// Tags allowed in descriptive content blocks.
pub const RICH_TAGS: &[&str] = &[
	"b",
	"blockquote",
	"br",
	"div",
	"em",
	"h1",
	"h2",
	"h3",
	"h4",
	"h5",
	"h6",
	"i",
	"li",
	"mark",
	"ol",
	"p",
	"small",
	"span",
	"strong",
	"sub",
	"sup",
	"u",
	"ul",
];

const DROP_WITH_CONTENT: &[&str] = &[
	"script", "style", "iframe", "object", "embed", "template", "noscript", "textarea", "title", "svg", "math",
];

const VOID_TAGS: &[&str] = &["br"];

const MAX_ENTITY_LEN: usize = 32;

/// Allow-list HTML sanitizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sanitizer {
	allowed: &'static [&'static str],
}

impl Default for Sanitizer {
	fn default() -> Self {
		Self::inline()
	}
}

struct Tag {
	name: String,
	closing: bool,
	self_closing: bool,
}

impl Sanitizer {
	/// Creates a sanitizer permitting exactly the `allowed` tag names (lowercase).
	pub const fn new(allowed: &'static [&'static str]) -> Self {
		Self { allowed }
	}

	pub const fn inline() -> Self {
		Self::new(INLINE_TAGS)
	}

	pub const fn rich() -> Self {
		Self::new(RICH_TAGS)
	}

	/// Returns true if `tag` survives sanitizing.
	pub fn allows(&self, tag: &str) -> bool {
		self.allowed.iter().any(|allowed| allowed.eq_ignore_ascii_case(tag))
	}

	/// Sanitizes an untrusted HTML fragment.
	pub fn sanitize(&self, input: &str) -> String {
		let mut out = String::with_capacity(input.len());
		let mut open: Vec<&'static str> = Vec::new();
		let mut rest = input;

		while let Some(lt) = rest.find('<') {
			push_text(&mut out, &rest[..lt]);
			rest = &rest[lt..];

			if let Some(after) = rest.strip_prefix("<!--") {
				rest = after.find("-->").map_or("", |end| &after[end + 3..]);
				continue;
			}

			let starts_markup = rest[1..]
				.chars()
				.next()
				.is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'));
			if !starts_markup {
				out.push_str("&lt;");
				rest = &rest[1..];
				continue;
			}

			let Some(gt) = rest.find('>') else {
				push_text(&mut out, rest);
				rest = "";
				break;
			};
			let tag = parse_tag(&rest[1..gt]);
			rest = &rest[gt + 1..];

			let Some(tag) = tag else {
				continue;
			};

			if !tag.closing && DROP_WITH_CONTENT.contains(&tag.name.as_str()) {
				rest = skip_past_close(rest, &tag.name);
				continue;
			}

			let Some(name) = self.allowed.iter().copied().find(|allowed| *allowed == tag.name) else {
				continue;
			};

			if VOID_TAGS.contains(&name) {
				if !tag.closing {
					push_open(&mut out, name);
				}
			} else if tag.closing {
				if let Some(idx) = open.iter().rposition(|candidate| *candidate == name) {
					for unclosed in open.drain(idx..).rev() {
						push_close(&mut out, unclosed);
					}
				}
			} else if !tag.self_closing {
				push_open(&mut out, name);
				open.push(name);
			}
		}

		push_text(&mut out, rest);
		for unclosed in open.into_iter().rev() {
			push_close(&mut out, unclosed);
		}
		out
	}

	/// Removes all markup, keeping escaped text content.
	pub fn strip(input: &str) -> String {
		Self::new(&[]).sanitize(input)
	}
}

fn parse_tag(inner: &str) -> Option<Tag> {
	let (closing, body) = match inner.strip_prefix('/') {
		Some(body) => (true, body),
		None => (false, inner),
	};
	if !body.starts_with(|c: char| c.is_ascii_alphabetic()) {
		return None;
	}
	let name_len = body.find(|c: char| !c.is_ascii_alphanumeric()).unwrap_or(body.len());
	Some(Tag {
		name: body[..name_len].to_ascii_lowercase(),
		closing,
		self_closing: body.trim_end().ends_with('/'),
	})
}

fn skip_past_close<'a>(rest: &'a str, name: &str) -> &'a str {
	let lower = rest.to_ascii_lowercase();
	let Some(close) = lower.find(&format!("</{name}")) else {
		return "";
	};
	match lower[close..].find('>') {
		Some(gt) => &rest[close + gt + 1..],
		None => "",
	}
}

fn push_open(out: &mut String, name: &str) {
	out.push('<');
	out.push_str(name);
	out.push('>');
}

fn push_close(out: &mut String, name: &str) {
	out.push_str("</");
	out.push_str(name);
	out.push('>');
}

fn push_text(out: &mut String, text: &str) {
	for (idx, ch) in text.char_indices() {
		match ch {
			'&' if starts_entity(&text[idx + 1..]) => out.push('&'),
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			_ => out.push(ch),
		}
	}
}

fn starts_entity(rest: &str) -> bool {
	let Some(end) = rest.find(';') else {
		return false;
	};
	let body = &rest[..end];
	if body.is_empty() || body.len() > MAX_ENTITY_LEN {
		return false;
	}
	if let Some(num) = body.strip_prefix('#') {
		if let Some(hex) = num.strip_prefix(['x', 'X']) {
			return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
		}
		return !num.is_empty() && num.chars().all(|c| c.is_ascii_digit());
	}
	body.chars().all(|c| c.is_ascii_alphanumeric())
}
