//! Integer geometry used to address regions of a sprite texture.

use serde::{Deserialize, Serialize};

/// A 2D integer point, used as an atlas offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
	/// Horizontal coordinate
	#[serde(alias = "X")]
	pub x: i32,
	/// Vertical coordinate
	#[serde(alias = "Y")]
	pub y: i32,
}

impl Point {
	/// The origin `(0, 0)`.
	pub const ZERO: Self = Self::new(0, 0);

	/// Creates a new point.
	pub const fn new(x: i32, y: i32) -> Self {
		Self {
			x,
			y,
		}
	}
}

/// An axis-aligned integer rectangle in texture pixels.
///
/// `x`/`y` is the top-left corner. A rectangle with a non-positive width or
/// height is empty.
///
/// # Examples
///
/// ```
/// use pixanim_types::geometry::Rect;
///
/// let frame = Rect::new(32, 0, 16, 16);
/// assert_eq!(frame.right(), 48);
/// assert_eq!(frame.bottom(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
	/// Left edge
	#[serde(alias = "X")]
	pub x: i32,
	/// Top edge
	#[serde(alias = "Y")]
	pub y: i32,
	/// Width in pixels
	#[serde(alias = "Width")]
	pub width: i32,
	/// Height in pixels
	#[serde(alias = "Height")]
	pub height: i32,
}

impl Rect {
	/// The empty rectangle at the origin.
	pub const EMPTY: Self = Self::new(0, 0, 0, 0);

	/// Creates a new rectangle.
	pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// Left edge (same as `x`).
	pub fn left(&self) -> i32 {
		self.x
	}

	/// Top edge (same as `y`).
	pub fn top(&self) -> i32 {
		self.y
	}

	/// Exclusive right edge, saturating at the `i32` bounds.
	pub fn right(&self) -> i32 {
		self.x.saturating_add(self.width)
	}

	/// Exclusive bottom edge, saturating at the `i32` bounds.
	pub fn bottom(&self) -> i32 {
		self.y.saturating_add(self.height)
	}

	/// Top-left corner.
	pub fn location(&self) -> Point {
		Point::new(self.x, self.y)
	}

	/// Returns `true` when the rectangle covers no pixels.
	pub fn is_empty(&self) -> bool {
		self.width <= 0 || self.height <= 0
	}

	/// Returns this rectangle translated by `offset`, saturating at the `i32` bounds.
	#[must_use]
	pub fn offset(self, offset: Point) -> Self {
		Self::new(self.x.saturating_add(offset.x), self.y.saturating_add(offset.y), self.width, self.height)
	}

	/// Overlapping area of two rectangles, or [`Rect::EMPTY`] if they do not overlap.
	///
	/// ```
	/// use pixanim_types::geometry::Rect;
	///
	/// let a = Rect::new(0, 0, 10, 10);
	/// let b = Rect::new(5, 5, 10, 10);
	/// assert_eq!(a.intersection(b), Rect::new(5, 5, 5, 5));
	/// assert!(a.intersection(Rect::new(20, 20, 4, 4)).is_empty());
	/// ```
	#[must_use]
	pub fn intersection(self, other: Self) -> Self {
		let x1 = self.left().max(other.left());
		let y1 = self.top().max(other.top());
		let x2 = self.right().min(other.right());
		let y2 = self.bottom().min(other.bottom());

		let width = x2.saturating_sub(x1);
		let height = y2.saturating_sub(y1);
		if width <= 0 || height <= 0 {
			return Self::EMPTY;
		}

		Self::new(x1, y1, width, height)
	}

	/// Intersection with `relative`, whose position is measured from this
	/// rectangle's top-left corner.
	///
	/// Used to draw only part of a frame: `relative = (0, 0, 8, 16)` keeps the
	/// left 8 columns of a 16x16 frame wherever that frame sits in the texture.
	#[must_use]
	pub fn relative_intersection(self, relative: Self) -> Self {
		self.intersection(relative.offset(self.location()))
	}
}
