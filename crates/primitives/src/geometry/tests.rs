use super::{Position, Rect};

#[test]
fn new_rect_saturates_dimensions() {
	let rect = Rect::new(u32::MAX - 1, u32::MAX - 1, 10, 10);
	assert_eq!(rect.width, 1);
	assert_eq!(rect.height, 1);
}

#[test]
fn rect_edges_are_exclusive() {
	let rect = Rect::new(10, 5, 3, 2);
	assert_eq!(rect.left(), 10);
	assert_eq!(rect.right(), 13);
	assert_eq!(rect.top(), 5);
	assert_eq!(rect.bottom(), 7);
}

#[test]
fn contains_uses_inclusive_origin_exclusive_max() {
	let rect = Rect::new(10, 5, 3, 2);
	assert!(rect.contains(Position::new(10, 5)));
	assert!(rect.contains(Position::new(12, 6)));
	assert!(!rect.contains(Position::new(13, 6)));
	assert!(!rect.contains(Position::new(12, 7)));
	assert!(!rect.contains(Position::new(9, 5)));
}

#[test]
fn zero_rect_contains_nothing() {
	assert!(Rect::ZERO.is_empty());
	assert!(!Rect::ZERO.contains(Position::new(0, 0)));
}

#[test]
fn literal_rect_at_edge_does_not_overflow() {
	let rect = Rect {
		x: u32::MAX,
		y: u32::MAX,
		width: 1,
		height: 1,
	};
	assert_eq!(rect.right(), u32::MAX);
	assert_eq!(rect.bottom(), u32::MAX);
	assert!(!rect.contains(Position::new(u32::MAX, u32::MAX)));
}
