//! Sitewide banner rotation.

use std::time::{Duration, Instant};

use vitrine_storefront::metaobject::SitewideBanner;

/// Interval between banner messages.
pub const BANNER_ROTATION: Duration = Duration::from_millis(5000);

/// Cycles through the banner's messages on a fixed period.
///
/// The rotator does not own a timer; hosts call [`BannerRotator::tick`] with
/// the current time.
#[derive(Debug, Clone)]
pub struct BannerRotator {
	banner: SitewideBanner,
	period: Duration,
	index: usize,
	next_at: Instant,
}

impl BannerRotator {
	pub fn new(banner: SitewideBanner, now: Instant) -> Self {
		Self::with_period(banner, BANNER_ROTATION, now)
	}

	pub fn with_period(banner: SitewideBanner, period: Duration, now: Instant) -> Self {
		Self {
			banner,
			period,
			index: 0,
			next_at: now + period,
		}
	}

	pub fn banner(&self) -> &SitewideBanner {
		&self.banner
	}

	pub fn index(&self) -> usize {
		self.index
	}

	/// Message currently shown, `None` when the banner has no content.
	pub fn current(&self) -> Option<&str> {
		self.banner.contents.get(self.index).map(String::as_str)
	}

	/// Advances one message per elapsed period. Returns true if the shown
	/// message changed.
	pub fn tick(&mut self, now: Instant) -> bool {
		let len = self.banner.contents.len();
		if len == 0 || self.period.is_zero() {
			return false;
		}
		if now < self.next_at {
			return false;
		}
		let before = self.index;
		let period = self.period.as_nanos();
		let elapsed = (now - self.next_at).as_nanos();
		let steps = elapsed / period + 1;
		let remainder = Duration::from_nanos(u64::try_from(elapsed % period).unwrap_or(0));
		self.index = ((self.index as u128 + steps % len as u128) % len as u128) as usize;
		self.next_at = now + self.period - remainder;
		self.index != before
	}

	/// Time of the next rotation.
	pub fn deadline(&self) -> Instant {
		self.next_at
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn banner(contents: &[&str]) -> SitewideBanner {
		SitewideBanner {
			contents: contents.iter().map(|c| c.to_string()).collect(),
			..SitewideBanner::default()
		}
	}

	#[test]
	fn rotation_wraps_modulo_length() {
		let t0 = Instant::now();
		let mut rotator = BannerRotator::new(banner(&["one", "two", "three"]), t0);
		assert_eq!(rotator.current(), Some("one"));

		assert!(!rotator.tick(t0 + Duration::from_millis(4999)));
		assert!(rotator.tick(t0 + BANNER_ROTATION));
		assert_eq!(rotator.current(), Some("two"));

		rotator.tick(t0 + BANNER_ROTATION * 3);
		assert_eq!(rotator.current(), Some("one"));
		assert_eq!(rotator.deadline(), t0 + BANNER_ROTATION * 4);
	}

	#[test]
	fn long_idle_catches_up_in_one_step() {
		let t0 = Instant::now();
		let period = Duration::from_millis(1);
		let mut rotator = BannerRotator::with_period(banner(&["a", "b", "c"]), period, t0);

		let now = t0 + Duration::from_millis(864_000_001);
		assert!(rotator.tick(now));
		assert_eq!(rotator.index(), 1);
		assert_eq!(rotator.deadline(), now + period);
	}

	#[test]
	fn mid_period_tick_keeps_schedule() {
		let t0 = Instant::now();
		let mut rotator = BannerRotator::new(banner(&["a", "b"]), t0);

		assert!(rotator.tick(t0 + Duration::from_millis(7500)));
		assert_eq!(rotator.current(), Some("b"));
		assert_eq!(rotator.deadline(), t0 + BANNER_ROTATION * 2);
	}

	#[test]
	fn single_message_never_changes() {
		let t0 = Instant::now();
		let mut rotator = BannerRotator::new(banner(&["only"]), t0);
		assert!(!rotator.tick(t0 + BANNER_ROTATION * 2));
		assert_eq!(rotator.index(), 0);
	}

	#[test]
	fn empty_banner_shows_nothing() {
		let t0 = Instant::now();
		let mut rotator = BannerRotator::new(banner(&[]), t0);
		assert!(!rotator.tick(t0 + BANNER_ROTATION));
		assert_eq!(rotator.current(), None);
	}
}
