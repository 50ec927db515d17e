//! Core types shared across the storefront crates: surface geometry, outbound
//! link construction and the HTML sanitizing boundary.

/// Document-space points and rectangles for hit testing.
pub mod geometry;
/// Allow-list sanitizer for provider supplied HTML.
pub mod html;
/// Outbound link helpers (tracking parameters, search paths).
pub mod link;

pub use geometry::{Position, Rect};
pub use html::Sanitizer;
pub use link::{search_path, url_with_tracking};
