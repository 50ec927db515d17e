//! Async predictive search session.
//!
//! A [`SearchSession`] owns one driver task. The task is the only writer of
//! search state: it feeds keystrokes through the [`Debouncer`], numbers
//! requests with the [`Tracker`], spawns one fetch task per request and
//! publishes every accepted transition to a [`Snapshot`].
//!
//! Fetches are never aborted. When a superseded fetch completes, the tracker
//! rejects its outcome. Stopping the session closes the completion channel, so
//! fetches still in flight finish and their results are dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use tokio::sync::{Notify, mpsc};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use vitrine_storefront::{PredictiveRequest, PredictiveResult, SearchProvider, StorefrontError};

use crate::config::SearchOptions;
use crate::debounce::{Debouncer, Trigger};
use crate::error::{Result, SearchError};
use crate::present::{PredictiveView, present};
use crate::spawn::{TaskClass, spawn};
use crate::state::DisplayState;
use crate::tracker::Tracker;

#[derive(Debug)]
enum Command {
	Input(String),
	Submit(String),
	Focus(String),
	Clear,
}

struct Completion {
	seq: u64,
	term: String,
	outcome: std::result::Result<PredictiveResult, StorefrontError>,
}

/// Published display state, readable from any thread.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
	state: Arc<RwLock<DisplayState>>,
	changed: Arc<AtomicBool>,
	notify: Arc<Notify>,
}

impl Snapshot {
	pub fn current(&self) -> DisplayState {
		self.state.read().clone()
	}

	pub fn view(&self) -> PredictiveView {
		present(&self.state.read())
	}

	/// Returns true once per publish since the last call.
	pub fn take_changed(&self) -> bool {
		self.changed.swap(false, Ordering::AcqRel)
	}

	/// Waits until a state newer than the last observed one is published.
	pub async fn changed(&self) {
		while !self.take_changed() {
			self.notify.notified().await;
		}
	}

	fn publish(&self, state: &DisplayState) {
		*self.state.write() = state.clone();
		self.changed.store(true, Ordering::Release);
		self.notify.notify_one();
	}
}

/// Handle to a running search session.
pub struct SearchSession {
	commands: mpsc::UnboundedSender<Command>,
	snapshot: Snapshot,
	cancel: CancellationToken,
	task: JoinHandle<()>,
}

impl SearchSession {
	/// Starts the driver task on the current tokio runtime.
	pub fn spawn<P>(provider: P, options: SearchOptions) -> Self
	where
		P: SearchProvider + 'static,
	{
		let (commands, command_rx) = mpsc::unbounded_channel();
		let (done_tx, done_rx) = mpsc::unbounded_channel();
		let snapshot = Snapshot::default();
		let cancel = CancellationToken::new();

		let driver = Driver {
			provider: Arc::new(provider),
			limit: options.limit,
			debouncer: Debouncer::new(options.debounce()),
			tracker: Tracker::new(),
			snapshot: snapshot.clone(),
			done_tx,
		};
		let task = spawn(TaskClass::Session, driver.run(command_rx, done_rx, cancel.clone()));

		Self {
			commands,
			snapshot,
			cancel,
			task,
		}
	}

	/// Reports an input change; the term is searched once typing pauses.
	pub fn input(&self, text: impl Into<String>) -> Result<()> {
		self.send(Command::Input(text.into()))
	}

	/// Searches `text` immediately.
	pub fn submit(&self, text: impl Into<String>) -> Result<()> {
		self.send(Command::Submit(text.into()))
	}

	/// The input gained focus while holding `text`; searched immediately.
	pub fn focus(&self, text: impl Into<String>) -> Result<()> {
		self.send(Command::Focus(text.into()))
	}

	/// Empties the input and drops any outstanding results.
	pub fn clear(&self) -> Result<()> {
		self.send(Command::Clear)
	}

	pub fn snapshot(&self) -> Snapshot {
		self.snapshot.clone()
	}

	pub fn state(&self) -> DisplayState {
		self.snapshot.current()
	}

	pub fn view(&self) -> PredictiveView {
		self.snapshot.view()
	}

	/// Requests the driver task to stop without waiting for it.
	pub fn stop(&self) {
		self.cancel.cancel();
	}

	/// Stops the driver task and waits for it to exit.
	pub async fn shutdown(self) {
		self.cancel.cancel();
		if let Err(error) = self.task.await {
			warn!(%error, "search.session_join_failed");
		}
	}

	fn send(&self, command: Command) -> Result<()> {
		self.commands.send(command).map_err(|_| SearchError::Closed)
	}
}

struct Driver<P> {
	provider: Arc<P>,
	limit: u32,
	debouncer: Debouncer,
	tracker: Tracker,
	snapshot: Snapshot,
	done_tx: mpsc::UnboundedSender<Completion>,
}

impl<P: SearchProvider + 'static> Driver<P> {
	async fn run(
		mut self,
		mut commands: mpsc::UnboundedReceiver<Command>,
		mut done: mpsc::UnboundedReceiver<Completion>,
		cancel: CancellationToken,
	) {
		debug!(quiet_ms = self.debouncer.quiet().as_millis() as u64, limit = self.limit, "search.session_started");
		loop {
			let deadline = self.debouncer.deadline().map(Instant::from_std);
			tokio::select! {
				biased;
				() = cancel.cancelled() => break,
				command = commands.recv() => match command {
					Some(command) => self.handle(command),
					None => break,
				},
				Some(completion) = done.recv() => self.complete(completion),
				() = wait_until(deadline) => {
					if let Some(trigger) = self.debouncer.poll(Instant::now().into_std()) {
						self.fire(trigger);
					}
				}
			}
		}
		debug!(latest_seq = self.tracker.latest_seq(), "search.session_stopped");
	}

	fn handle(&mut self, command: Command) {
		match command {
			Command::Input(text) => {
				if let Some(trigger) = self.debouncer.input(&text, Instant::now().into_std()) {
					self.fire(trigger);
				}
			}
			Command::Submit(text) | Command::Focus(text) => {
				let trigger = self.debouncer.submit(&text);
				self.fire(trigger);
			}
			Command::Clear => {
				self.debouncer.cancel();
				self.fire(Trigger::Clear);
			}
		}
	}

	fn fire(&mut self, trigger: Trigger) {
		match trigger {
			Trigger::Clear => self.tracker.clear(),
			Trigger::Search(term) => {
				let request = self.tracker.issue(term);
				let provider = Arc::clone(&self.provider);
				let done_tx = self.done_tx.clone();
				let fetch = PredictiveRequest::new(request.term.clone(), self.limit);
				spawn(TaskClass::Fetch, async move {
					let outcome = provider.predictive_search(&fetch).await;
					// Closed once the session stops.
					let _ = done_tx.send(Completion {
						seq: request.seq,
						term: request.term,
						outcome,
					});
				});
			}
		}
		self.snapshot.publish(self.tracker.state());
	}

	fn complete(&mut self, completion: Completion) {
		let Completion { seq, term, outcome } = completion;
		let acceptance = match outcome {
			Ok(result) => self.tracker.resolve(seq, term, result),
			Err(error) => {
				if self.tracker.is_current(seq) {
					warn!(seq, term = %term, transport = error.is_transport(), %error, "search.fetch_failed");
				}
				self.tracker.fail(seq, term, error.to_string())
			}
		};
		if acceptance.is_accepted() {
			self.snapshot.publish(self.tracker.state());
		}
	}
}

async fn wait_until(deadline: Option<Instant>) {
	match deadline {
		Some(deadline) => tokio::time::sleep_until(deadline).await,
		None => std::future::pending().await,
	}
}
