//! Display state machine.

use vitrine_storefront::PredictiveResult;

/// What the search surface should currently show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayState {
	/// Nothing searched yet.
	#[default]
	Idle,
	/// A request for `term` is in flight.
	Loading { term: String },
	/// The latest request resolved. A cleared input resolves to an empty
	/// result for the empty term.
	Resolved { term: String, result: PredictiveResult },
	/// The latest request failed.
	Error { term: String, message: String },
}

impl DisplayState {
	/// Term the state belongs to, if any.
	pub fn term(&self) -> Option<&str> {
		match self {
			Self::Idle => None,
			Self::Loading { term } | Self::Resolved { term, .. } | Self::Error { term, .. } => Some(term),
		}
	}

	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading { .. })
	}
}

/// Inputs to [`reduce`]. Staleness is decided before an event is reduced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
	/// The input was emptied.
	Cleared,
	/// A request was issued for `term`.
	Issued { term: String },
	/// The current request returned `result`.
	Resolved { term: String, result: PredictiveResult },
	/// The current request failed.
	Failed { term: String, message: String },
}

/// Computes the next display state.
///
/// Every event fully determines the next state, so the previous state is
/// replaced rather than merged.
pub fn reduce(_state: DisplayState, event: Event) -> DisplayState {
	match event {
		Event::Cleared => DisplayState::Resolved {
			term: String::new(),
			result: PredictiveResult::empty(),
		},
		Event::Issued { term } => DisplayState::Loading { term },
		Event::Resolved { term, result } => DisplayState::Resolved { term, result },
		Event::Failed { term, message } => DisplayState::Error { term, message },
	}
}
