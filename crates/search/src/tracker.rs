//! Last-issued-wins request tracking.

use tracing::{debug, trace};
use vitrine_storefront::PredictiveResult;

use crate::state::{DisplayState, Event, reduce};

/// A numbered request. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
	pub seq: u64,
	pub term: String,
}

/// Outcome of offering a response to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
	Accepted,
	/// A newer request was issued; the response was dropped.
	Stale,
}

impl Acceptance {
	pub fn is_accepted(self) -> bool {
		self == Self::Accepted
	}
}

/// Owns the sequence clock and the display state.
#[derive(Debug, Default)]
pub struct Tracker {
	latest: u64,
	state: DisplayState,
}

impl Tracker {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> &DisplayState {
		&self.state
	}

	/// Sequence id of the most recent request, `0` before the first.
	pub fn latest_seq(&self) -> u64 {
		self.latest
	}

	pub fn is_current(&self, seq: u64) -> bool {
		seq == self.latest
	}

	/// Issues a request for `term` and moves to loading.
	pub fn issue(&mut self, term: impl Into<String>) -> SearchRequest {
		self.latest += 1;
		let term = term.into();
		debug!(seq = self.latest, term = %term, "search.issue");
		self.apply(Event::Issued { term: term.clone() });
		SearchRequest { seq: self.latest, term }
	}

	/// Clears the display and invalidates every in-flight request.
	pub fn clear(&mut self) {
		self.latest += 1;
		debug!(seq = self.latest, "search.clear");
		self.apply(Event::Cleared);
	}

	/// Offers the result of request `seq`.
	pub fn resolve(&mut self, seq: u64, term: impl Into<String>, result: PredictiveResult) -> Acceptance {
		if !self.is_current(seq) {
			trace!(seq, latest = self.latest, "search.stale_result");
			return Acceptance::Stale;
		}
		self.apply(Event::Resolved { term: term.into(), result });
		Acceptance::Accepted
	}

	/// Offers the failure of request `seq`.
	pub fn fail(&mut self, seq: u64, term: impl Into<String>, message: impl Into<String>) -> Acceptance {
		if !self.is_current(seq) {
			trace!(seq, latest = self.latest, "search.stale_error");
			return Acceptance::Stale;
		}
		self.apply(Event::Failed {
			term: term.into(),
			message: message.into(),
		});
		Acceptance::Accepted
	}

	fn apply(&mut self, event: Event) {
		self.state = reduce(std::mem::take(&mut self.state), event);
	}
}

#[cfg(test)]
mod tests;
