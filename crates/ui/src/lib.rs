//! Controllers behind the storefront widgets.
//!
//! Nothing here draws. Each controller owns the state a widget needs and
//! exposes explicit operations, so callers pass handles around instead of
//! reaching for shared globals.

pub mod banner;
pub mod description;
pub mod dismiss;
pub mod panel;
pub mod store_search;

pub use banner::{BANNER_ROTATION, BannerRotator};
pub use description::Description;
pub use dismiss::{DismissController, ListenerId, PointerDocument, PointerEvent, PointerKind};
pub use panel::{CloseReason, PanelController, PanelKind};
pub use store_search::StoreSearch;
