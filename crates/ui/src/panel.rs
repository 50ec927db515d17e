//! Aside panels (search, cart, mobile menu).

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
	Search,
	Cart,
	Mobile,
}

impl PanelKind {
	pub const fn heading(self) -> &'static str {
		match self {
			Self::Search => "SEARCH",
			Self::Cart => "CART",
			Self::Mobile => "MENU",
		}
	}
}

/// Why a panel closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
	/// Pointer or touch landed outside the panel.
	Outside,
	/// The close button or escape key.
	Cancel,
	/// The panel's action completed, e.g. a search was submitted.
	Commit,
	/// Another panel replaced it.
	Replaced,
}

#[derive(Debug, Default)]
struct PanelState {
	active: Option<PanelKind>,
	last_close: Option<CloseReason>,
}

/// Shared handle to the single open aside.
///
/// Clones refer to the same state. At most one panel is open at a time;
/// opening another replaces it.
#[derive(Debug, Clone, Default)]
pub struct PanelController {
	state: Arc<Mutex<PanelState>>,
}

impl PanelController {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn active(&self) -> Option<PanelKind> {
		self.state.lock().active
	}

	pub fn is_open(&self, kind: PanelKind) -> bool {
		self.active() == Some(kind)
	}

	/// Opens `kind`, returning the panel it replaced.
	pub fn open(&self, kind: PanelKind) -> Option<PanelKind> {
		let mut state = self.state.lock();
		let previous = state.active.replace(kind);
		if let Some(previous) = previous.filter(|p| *p != kind) {
			state.last_close = Some(CloseReason::Replaced);
			debug!(?previous, ?kind, "panel.replaced");
		} else {
			debug!(?kind, "panel.open");
		}
		previous
	}

	/// Closes whatever is open.
	pub fn close(&self, reason: CloseReason) -> Option<PanelKind> {
		let mut state = self.state.lock();
		let closed = state.active.take();
		if closed.is_some() {
			state.last_close = Some(reason);
			debug!(?closed, ?reason, "panel.close");
		}
		closed
	}

	/// Closes `kind` only if it is the open panel.
	pub fn close_kind(&self, kind: PanelKind, reason: CloseReason) -> bool {
		let mut state = self.state.lock();
		if state.active != Some(kind) {
			return false;
		}
		state.active = None;
		state.last_close = Some(reason);
		debug!(?kind, ?reason, "panel.close");
		true
	}

	/// Opens `kind` if closed, closes it if open. Returns the new open state.
	pub fn toggle(&self, kind: PanelKind) -> bool {
		if self.close_kind(kind, CloseReason::Cancel) {
			false
		} else {
			self.open(kind);
			true
		}
	}

	pub fn last_close(&self) -> Option<CloseReason> {
		self.state.lock().last_close
	}
}
