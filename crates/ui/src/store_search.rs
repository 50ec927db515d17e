//! The header search aside: panel, outside dismissal and predictive session
//! wired together.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;
use vitrine_primitives::{Rect, search_path};
use vitrine_search::{PredictiveView, Result, SearchSession};

use crate::dismiss::{DismissController, PointerDocument};
use crate::panel::{CloseReason, PanelController, PanelKind};

pub struct StoreSearch {
	panels: PanelController,
	dismiss: DismissController,
	dismissals: mpsc::UnboundedReceiver<CloseReason>,
	session: SearchSession,
	input: String,
}

impl StoreSearch {
	pub fn new(panels: PanelController, document: Arc<PointerDocument>, surface: Rect, session: SearchSession) -> Self {
		let (dismiss, dismissals) = DismissController::new(document, surface);
		Self {
			panels,
			dismiss,
			dismissals,
			session,
			input: String::new(),
		}
	}

	pub fn is_open(&self) -> bool {
		self.panels.is_open(PanelKind::Search)
	}

	pub fn input(&self) -> &str {
		&self.input
	}

	pub fn session(&self) -> &SearchSession {
		&self.session
	}

	pub fn view(&self) -> PredictiveView {
		self.session.view()
	}

	/// Opens the aside and focuses the input, searching its current text.
	pub fn open(&mut self) -> Result<()> {
		self.panels.open(PanelKind::Search);
		self.dismiss.open();
		self.session.focus(self.input.clone())
	}

	pub fn set_surface(&self, surface: Rect) {
		self.dismiss.set_surface(surface);
	}

	pub fn type_text(&mut self, text: &str) -> Result<()> {
		self.input = text.to_string();
		self.session.input(text)
	}

	/// Closes the aside and returns the full search page URL for the typed
	/// term, or `None` for a blank input.
	pub fn submit(&mut self) -> Result<Option<String>> {
		let term = self.input.trim();
		if term.is_empty() {
			return Ok(None);
		}
		let url = search_path(term);
		self.close(CloseReason::Commit)?;
		Ok(Some(url))
	}

	/// Closes the aside, detaches dismissal listeners and resets the input.
	pub fn close(&mut self, reason: CloseReason) -> Result<()> {
		debug!(?reason, "store_search.close");
		self.dismiss.close();
		// Signals queued before the close belong to this open only.
		while self.dismissals.try_recv().is_ok() {}
		self.panels.close_kind(PanelKind::Search, reason);
		self.input.clear();
		self.session.clear()
	}

	/// Applies queued outside-click signals and follows panel replacement.
	/// Returns true if the aside closed.
	pub fn process_dismissals(&mut self) -> Result<bool> {
		if let Ok(reason) = self.dismissals.try_recv() {
			self.close(reason)?;
			return Ok(true);
		}
		if self.dismiss.is_open() && !self.is_open() {
			self.close(CloseReason::Replaced)?;
			return Ok(true);
		}
		Ok(false)
	}

	/// Waits for the next outside-click signal.
	pub async fn next_dismissal(&mut self) -> Option<CloseReason> {
		self.dismissals.recv().await
	}

	pub async fn shutdown(self) {
		self.session.shutdown().await;
	}
}
