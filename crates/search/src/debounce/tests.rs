use std::time::{Duration, Instant};

use rstest::rstest;

use super::*;

fn ms(n: u64) -> Duration {
	Duration::from_millis(n)
}

#[test]
fn burst_of_keystrokes_fires_once_with_final_text() {
	let t0 = Instant::now();
	let mut debouncer = Debouncer::new(ms(200));

	let mut fired = Vec::new();
	for (offset, text) in [(0, "s"), (50, "sh"), (100, "sho"), (150, "shoe")] {
		assert_eq!(debouncer.input(text, t0 + ms(offset)), None);
	}
	for tick in (0..=500).step_by(10) {
		if let Some(trigger) = debouncer.poll(t0 + ms(tick)) {
			fired.push((tick, trigger));
		}
	}

	assert_eq!(fired, vec![(350, Trigger::Search("shoe".into()))]);
}

#[test]
fn deadline_tracks_latest_input() {
	let t0 = Instant::now();
	let mut debouncer = Debouncer::new(ms(200));
	assert_eq!(debouncer.deadline(), None);

	debouncer.input("a", t0);
	assert_eq!(debouncer.deadline(), Some(t0 + ms(200)));
	debouncer.input("ab", t0 + ms(120));
	assert_eq!(debouncer.deadline(), Some(t0 + ms(320)));
	assert_eq!(debouncer.poll(t0 + ms(319)), None);
	assert!(debouncer.is_pending());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn blank_input_clears_immediately(#[case] text: &str) {
	let t0 = Instant::now();
	let mut debouncer = Debouncer::default();
	debouncer.input("boots", t0);

	assert_eq!(debouncer.input(text, t0 + ms(10)), Some(Trigger::Clear));
	assert!(!debouncer.is_pending());
	assert_eq!(debouncer.poll(t0 + ms(10_000)), None);
}

#[test]
fn submit_bypasses_and_cancels_pending() {
	let t0 = Instant::now();
	let mut debouncer = Debouncer::default();
	debouncer.input("hat", t0);

	assert_eq!(debouncer.submit(" hats "), Trigger::Search("hats".into()));
	assert_eq!(debouncer.poll(t0 + ms(10_000)), None);
	assert_eq!(debouncer.submit(""), Trigger::Clear);
}

#[test]
fn cancel_drops_pending_term() {
	let t0 = Instant::now();
	let mut debouncer = Debouncer::new(ms(50));
	debouncer.input("scarf", t0);
	debouncer.cancel();
	assert_eq!(debouncer.poll(t0 + ms(100)), None);
}
