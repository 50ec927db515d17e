//! Outside-interaction dismissal.
//!
//! [`PointerDocument`] stands in for the document-level event target: a
//! registry of pointer listeners that a host feeds with [`PointerEvent`]s.
//! [`DismissController`] attaches one listener per [`PointerKind`] while its
//! surface is open and detaches them on close. An event outside the surface
//! bounds emits a single [`CloseReason::Outside`] per open.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc;
use tracing::trace;
use vitrine_primitives::{Position, Rect};

use crate::panel::CloseReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
	PointerDown,
	TouchStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
	pub kind: PointerKind,
	pub position: Position,
}

impl PointerEvent {
	pub const fn new(kind: PointerKind, position: Position) -> Self {
		Self { kind, position }
	}
}

pub type ListenerId = u64;

type Listener = Arc<dyn Fn(&PointerEvent) + Send + Sync>;

/// Document-level pointer listener registry.
#[derive(Default)]
pub struct PointerDocument {
	next_id: AtomicU64,
	listeners: Mutex<Vec<(ListenerId, PointerKind, Listener)>>,
}

impl std::fmt::Debug for PointerDocument {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PointerDocument")
			.field("listeners", &self.listener_count())
			.finish()
	}
}

impl PointerDocument {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_listener<F>(&self, kind: PointerKind, listener: F) -> ListenerId
	where
		F: Fn(&PointerEvent) + Send + Sync + 'static,
	{
		let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
		self.listeners.lock().push((id, kind, Arc::new(listener)));
		id
	}

	/// Returns false if `id` was not registered.
	pub fn remove_listener(&self, id: ListenerId) -> bool {
		let mut listeners = self.listeners.lock();
		let before = listeners.len();
		listeners.retain(|(candidate, _, _)| *candidate != id);
		listeners.len() != before
	}

	pub fn listener_count(&self) -> usize {
		self.listeners.lock().len()
	}

	/// Delivers `event` to every listener of its kind.
	///
	/// Listeners run outside the registry lock and may add or remove
	/// listeners; changes apply from the next dispatch.
	pub fn dispatch(&self, event: &PointerEvent) {
		let targets: Vec<Listener> = self
			.listeners
			.lock()
			.iter()
			.filter(|(_, kind, _)| *kind == event.kind)
			.map(|(_, _, listener)| Arc::clone(listener))
			.collect();
		for listener in targets {
			listener(event);
		}
	}
}

/// Closes a surface when the user interacts outside of it.
pub struct DismissController {
	document: Arc<PointerDocument>,
	surface: Arc<RwLock<Rect>>,
	armed: Arc<AtomicBool>,
	listeners: Vec<ListenerId>,
	signals: mpsc::UnboundedSender<CloseReason>,
}

impl DismissController {
	/// Creates a closed controller and the receiver for its close signals.
	pub fn new(document: Arc<PointerDocument>, surface: Rect) -> (Self, mpsc::UnboundedReceiver<CloseReason>) {
		let (signals, rx) = mpsc::unbounded_channel();
		let controller = Self {
			document,
			surface: Arc::new(RwLock::new(surface)),
			armed: Arc::new(AtomicBool::new(false)),
			listeners: Vec::new(),
			signals,
		};
		(controller, rx)
	}

	pub fn is_open(&self) -> bool {
		!self.listeners.is_empty()
	}

	pub fn surface(&self) -> Rect {
		*self.surface.read()
	}

	/// Updates the bounds used for hit testing, e.g. after a layout change.
	pub fn set_surface(&self, surface: Rect) {
		*self.surface.write() = surface;
	}

	/// Attaches the document listeners. Reopening an open controller only
	/// re-arms it.
	pub fn open(&mut self) {
		self.armed.store(true, Ordering::Release);
		if self.is_open() {
			return;
		}
		for kind in [PointerKind::PointerDown, PointerKind::TouchStart] {
			let surface = Arc::clone(&self.surface);
			let armed = Arc::clone(&self.armed);
			let signals = self.signals.clone();
			let id = self.document.add_listener(kind, move |event| {
				if surface.read().contains(event.position) {
					return;
				}
				if armed.swap(false, Ordering::AcqRel) {
					trace!(x = event.position.x, y = event.position.y, "dismiss.outside");
					let _ = signals.send(CloseReason::Outside);
				}
			});
			self.listeners.push(id);
		}
	}

	/// Detaches the document listeners.
	pub fn close(&mut self) {
		self.armed.store(false, Ordering::Release);
		for id in self.listeners.drain(..) {
			self.document.remove_listener(id);
		}
	}
}

impl Drop for DismissController {
	fn drop(&mut self) {
		self.close();
	}
}

#[cfg(test)]
mod tests;
