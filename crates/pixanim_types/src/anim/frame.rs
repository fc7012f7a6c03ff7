//! Frame table entries.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// A single timed entry of the frame table.
///
/// A frame is a region of the sprite texture plus how long it stays on screen.
/// Durations are in milliseconds and must be positive; [`Animation`] rejects
/// zero-duration frames at construction.
///
/// [`Animation`]: super::Animation
///
/// # Examples
///
/// ```
/// use pixanim_types::anim::Frame;
/// use pixanim_types::geometry::Rect;
///
/// let frame = Frame::new(Rect::new(0, 0, 16, 16), 100);
/// assert_eq!(frame.duration_ms(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
	/// Region of the texture shown during this frame
	#[serde(alias = "SourceRectangle", alias = "sourceRectangle")]
	source_rect: Rect,

	/// Display duration in milliseconds
	#[serde(alias = "Duration", alias = "duration")]
	duration_ms: u32,
}

impl Frame {
	/// Creates a new frame.
	///
	/// # Arguments
	/// * `source_rect` - Region of the texture to display
	/// * `duration_ms` - Display duration in milliseconds
	pub fn new(source_rect: Rect, duration_ms: u32) -> Self {
		Self {
			source_rect,
			duration_ms,
		}
	}

	/// Region of the texture shown during this frame.
	pub fn source_rect(&self) -> Rect {
		self.source_rect
	}

	/// Display duration in milliseconds.
	pub fn duration_ms(&self) -> u32 {
		self.duration_ms
	}

	/// Display duration as floating-point milliseconds, the unit the timeline accumulates in.
	pub(crate) fn duration(&self) -> f64 {
		f64::from(self.duration_ms)
	}
}

impl std::fmt::Display for Frame {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let r = self.source_rect;
		write!(f, "Frame({}x{} @ {},{} for {}ms)", r.width, r.height, r.x, r.y, self.duration_ms)
	}
}
