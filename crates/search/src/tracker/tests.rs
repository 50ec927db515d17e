use pretty_assertions::assert_eq;
use vitrine_storefront::model::{PredictiveItems, QuerySuggestion};
use vitrine_storefront::PredictiveResult;

use super::*;

fn result_for(term: &str) -> PredictiveResult {
	PredictiveResult::from_items(PredictiveItems {
		queries: vec![QuerySuggestion {
			text: term.to_string(),
			styled_text: term.to_string(),
			tracking_parameters: None,
		}],
		..PredictiveItems::default()
	})
}

fn resolved(term: &str) -> DisplayState {
	DisplayState::Resolved {
		term: term.into(),
		result: result_for(term),
	}
}

#[test]
fn sequence_ids_strictly_increase() {
	let mut tracker = Tracker::new();
	let a = tracker.issue("a");
	let b = tracker.issue("ab");
	tracker.clear();
	let c = tracker.issue("abc");
	assert!(a.seq < b.seq && b.seq < c.seq);
	assert_eq!(c.seq, tracker.latest_seq());
}

#[test]
fn late_response_for_older_request_is_dropped() {
	let mut tracker = Tracker::new();
	let r1 = tracker.issue("sh");
	let r2 = tracker.issue("shoe");

	assert_eq!(tracker.resolve(r2.seq, &*r2.term, result_for("shoe")), Acceptance::Accepted);
	assert_eq!(tracker.resolve(r1.seq, &*r1.term, result_for("sh")), Acceptance::Stale);
	assert_eq!(tracker.state(), &resolved("shoe"));
}

#[test]
fn early_response_for_older_request_is_dropped() {
	let mut tracker = Tracker::new();
	let r1 = tracker.issue("sh");
	let r2 = tracker.issue("shoe");

	assert!(!tracker.resolve(r1.seq, &*r1.term, result_for("sh")).is_accepted());
	assert_eq!(tracker.state(), &DisplayState::Loading { term: "shoe".into() });
	assert!(tracker.resolve(r2.seq, &*r2.term, result_for("shoe")).is_accepted());
	assert_eq!(tracker.state(), &resolved("shoe"));
}

#[test]
fn every_interleaving_settles_on_latest() {
	let terms = ["b", "bo", "boo", "boot"];
	// Arrival orders over four in-flight requests.
	let orders: [[usize; 4]; 5] = [[0, 1, 2, 3], [3, 2, 1, 0], [1, 3, 0, 2], [2, 0, 3, 1], [3, 0, 1, 2]];

	for order in orders {
		let mut tracker = Tracker::new();
		let requests: Vec<_> = terms.iter().map(|t| tracker.issue(*t)).collect();
		for index in order {
			let request = &requests[index];
			tracker.resolve(request.seq, &*request.term, result_for(&request.term));
		}
		assert_eq!(tracker.state(), &resolved("boot"), "order {order:?}");
	}
}

#[test]
fn error_for_superseded_request_is_silent() {
	let mut tracker = Tracker::new();
	let r1 = tracker.issue("ha");
	let r2 = tracker.issue("hat");

	assert_eq!(tracker.fail(r1.seq, &*r1.term, "timeout"), Acceptance::Stale);
	assert_eq!(tracker.state(), &DisplayState::Loading { term: "hat".into() });

	assert_eq!(tracker.fail(r2.seq, &*r2.term, "timeout"), Acceptance::Accepted);
	assert_eq!(
		tracker.state(),
		&DisplayState::Error {
			term: "hat".into(),
			message: "timeout".into(),
		}
	);
}

#[test]
fn accepted_response_replaces_previous() {
	let mut tracker = Tracker::new();
	let r1 = tracker.issue("cap");
	tracker.resolve(r1.seq, &*r1.term, result_for("cap"));
	let r2 = tracker.issue("caps");
	tracker.resolve(r2.seq, &*r2.term, PredictiveResult::empty());

	assert_eq!(
		tracker.state(),
		&DisplayState::Resolved {
			term: "caps".into(),
			result: PredictiveResult::empty(),
		}
	);
}

#[test]
fn clear_invalidates_in_flight_requests() {
	let mut tracker = Tracker::new();
	let r1 = tracker.issue("sock");
	tracker.clear();

	assert_eq!(tracker.resolve(r1.seq, &*r1.term, result_for("sock")), Acceptance::Stale);
	assert_eq!(
		tracker.state(),
		&DisplayState::Resolved {
			term: String::new(),
			result: PredictiveResult::empty(),
		}
	);
}
