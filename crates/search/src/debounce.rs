//! Keystroke debouncing.
//!
//! [`Debouncer`] holds at most one pending term. Every input restarts the
//! quiet period; [`Debouncer::poll`] releases the term once the period has
//! elapsed. Callers own the clock: tests pass synthetic instants and the
//! session converts tokio instants.
//!
//! A term that trims to empty never waits. It cancels any pending term and
//! yields [`Trigger::Clear`] straight away.

use std::time::{Duration, Instant};

/// Default quiet period between the last keystroke and the request.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// What the debouncer asks the caller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
	/// Issue a search for the trimmed term.
	Search(String),
	/// The input was emptied: drop results without searching.
	Clear,
}

#[derive(Debug)]
struct Pending {
	term: String,
	last_input_at: Instant,
}

/// Clock-injected quiet-period debouncer.
#[derive(Debug)]
pub struct Debouncer {
	quiet: Duration,
	pending: Option<Pending>,
}

impl Default for Debouncer {
	fn default() -> Self {
		Self::new(DEFAULT_DEBOUNCE)
	}
}

impl Debouncer {
	pub fn new(quiet: Duration) -> Self {
		Self { quiet, pending: None }
	}

	pub fn quiet(&self) -> Duration {
		self.quiet
	}

	/// Records an input change at `now`.
	///
	/// Returns [`Trigger::Clear`] immediately for blank input. Otherwise the
	/// term replaces any pending one and the quiet period restarts.
	pub fn input(&mut self, text: &str, now: Instant) -> Option<Trigger> {
		let term = text.trim();
		if term.is_empty() {
			self.pending = None;
			return Some(Trigger::Clear);
		}
		self.pending = Some(Pending {
			term: term.to_string(),
			last_input_at: now,
		});
		None
	}

	/// Fires `text` right away, cancelling whatever was pending.
	///
	/// Used for explicit submit and focus.
	pub fn submit(&mut self, text: &str) -> Trigger {
		self.pending = None;
		let term = text.trim();
		if term.is_empty() {
			Trigger::Clear
		} else {
			Trigger::Search(term.to_string())
		}
	}

	/// Releases the pending term if its quiet period has elapsed at `now`.
	pub fn poll(&mut self, now: Instant) -> Option<Trigger> {
		let due = self.deadline().is_some_and(|deadline| now >= deadline);
		if !due {
			return None;
		}
		self.pending.take().map(|pending| Trigger::Search(pending.term))
	}

	/// Instant at which the pending term becomes due.
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.last_input_at + self.quiet)
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Drops the pending term without firing.
	pub fn cancel(&mut self) {
		self.pending = None;
	}
}

#[cfg(test)]
mod tests;
