//! Expandable collection description.

use vitrine_primitives::Sanitizer;

/// Sanitized description HTML with a read more / read less toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
	html: String,
	expanded: bool,
}

impl Description {
	/// Sanitizes `raw` with the rich allow-list. Starts collapsed.
	pub fn new(raw: &str) -> Self {
		Self {
			html: Sanitizer::rich().sanitize(raw),
			expanded: false,
		}
	}

	pub fn html(&self) -> &str {
		&self.html
	}

	pub fn is_empty(&self) -> bool {
		self.html.trim().is_empty()
	}

	pub fn is_expanded(&self) -> bool {
		self.expanded
	}

	/// Flips the expanded flag and returns the new value.
	pub fn toggle(&mut self) -> bool {
		self.expanded = !self.expanded;
		self.expanded
	}

	pub fn toggle_label(&self) -> &'static str {
		if self.expanded { "Read less" } else { "Read more" }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn description_is_sanitized_and_toggles() {
		let mut description = Description::new(r#"<p class="x">Soft <b>linen</b></p><script>alert(1)</script>"#);
		assert_eq!(description.html(), "<p>Soft <b>linen</b></p>");
		assert_eq!(description.toggle_label(), "Read more");

		assert!(description.toggle());
		assert_eq!(description.toggle_label(), "Read less");
		assert!(!description.toggle());
	}

	#[test]
	fn blank_description_is_empty() {
		assert!(Description::new("<script>x</script>  ").is_empty());
	}
}
