/// A point in document coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
	pub x: u32,
	pub y: u32,
}

impl Position {
	pub const fn new(x: u32, y: u32) -> Self {
		Self { x, y }
	}
}

/// An axis-aligned rectangle in document coordinates.
///
/// The origin is inclusive and the far edges are exclusive, so a zero-sized
/// rectangle contains no points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
	pub x: u32,
	pub y: u32,
	pub width: u32,
	pub height: u32,
}

impl Rect {
	pub const ZERO: Self = Self {
		x: 0,
		y: 0,
		width: 0,
		height: 0,
	};

	/// Creates a rectangle, saturating the size so the far edges never overflow.
	pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
		let max_width = u32::MAX - x;
		let max_height = u32::MAX - y;
		Self {
			x,
			y,
			width: if width > max_width { max_width } else { width },
			height: if height > max_height { max_height } else { height },
		}
	}

	pub const fn left(self) -> u32 {
		self.x
	}

	pub const fn right(self) -> u32 {
		self.x.saturating_add(self.width)
	}

	pub const fn top(self) -> u32 {
		self.y
	}

	pub const fn bottom(self) -> u32 {
		self.y.saturating_add(self.height)
	}

	pub const fn is_empty(self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// Returns true when `pos` lies inside the rectangle.
	pub const fn contains(self, pos: Position) -> bool {
		pos.x >= self.left() && pos.x < self.right() && pos.y >= self.top() && pos.y < self.bottom()
	}
}

#[cfg(test)]
mod tests;
