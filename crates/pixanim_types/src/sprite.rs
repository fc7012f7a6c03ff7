//! Binding between an animation and the texture it is drawn from.
//!
//! The engine in [`crate::anim`] only knows frame rectangles. Renderers also need
//! the texture, and when several animations share one atlas, the position of the
//! animation's strip inside that atlas. [`AnimatedSprite`] carries both without
//! owning or loading any texture data: `T` is whatever handle the host renderer
//! uses (an id, an `Rc`, a GPU handle...).

use std::ops::{Deref, DerefMut};

use crate::{
	anim::{Animation, AnimationError},
	geometry::{Point, Rect},
};

/// What a renderer needs to draw one frame: a texture handle and a source region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteRegion<'a, T> {
	/// Texture to sample from
	pub texture: &'a T,
	/// Region of `texture` to draw, in texture pixels
	pub source: Rect,
}

/// An [`Animation`] bound to an externally owned texture handle.
///
/// Dereferences to the wrapped [`Animation`], so playback controls are called
/// directly on the sprite.
///
/// # Examples
///
/// ```
/// use pixanim_types::anim::{Animation, Frame};
/// use pixanim_types::geometry::{Point, Rect};
/// use pixanim_types::sprite::AnimatedSprite;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let frames = vec![
///     Frame::new(Rect::new(0, 0, 16, 16), 100),
///     Frame::new(Rect::new(16, 0, 16, 16), 100),
/// ];
/// // The strip starts at (64, 32) inside a shared atlas
/// let mut sprite = AnimatedSprite::with_offset("atlas.png", Animation::from_frames(frames)?, Point::new(64, 32));
///
/// sprite.play();
/// sprite.update(100.0)?;
///
/// let region = sprite.region();
/// assert_eq!(*region.texture, "atlas.png");
/// assert_eq!(region.source, Rect::new(80, 32, 16, 16));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AnimatedSprite<T> {
	texture: T,
	animation: Animation,
	offset: Point,
}

impl<T> AnimatedSprite<T> {
	/// Binds `animation` to `texture`, with frame rectangles relative to the texture origin.
	pub fn new(texture: T, animation: Animation) -> Self {
		Self::with_offset(texture, animation, Point::ZERO)
	}

	/// Binds `animation` to `texture`, with frame rectangles relative to `offset`.
	pub fn with_offset(texture: T, animation: Animation, offset: Point) -> Self {
		Self {
			texture,
			animation,
			offset,
		}
	}

	/// The texture handle.
	pub fn texture(&self) -> &T {
		&self.texture
	}

	/// Replaces the texture handle, returning the previous one.
	pub fn set_texture(&mut self, texture: T) -> T {
		std::mem::replace(&mut self.texture, texture)
	}

	/// Position of the animation's frames inside the texture.
	pub fn offset(&self) -> Point {
		self.offset
	}

	/// The wrapped animation.
	pub fn animation(&self) -> &Animation {
		&self.animation
	}

	/// The wrapped animation, mutably.
	pub fn animation_mut(&mut self) -> &mut Animation {
		&mut self.animation
	}

	/// Unbinds the animation from its texture.
	pub fn into_parts(self) -> (T, Animation) {
		(self.texture, self.animation)
	}

	/// Texture region of the current frame, including the atlas offset.
	pub fn source_rectangle(&self) -> Rect {
		self.animation.frame_source_rectangle().offset(self.offset)
	}

	/// Draw parameters for the current frame.
	pub fn region(&self) -> SpriteRegion<'_, T> {
		SpriteRegion {
			texture: &self.texture,
			source: self.source_rectangle(),
		}
	}

	/// Draw parameters for any frame of the table, independent of playback.
	///
	/// # Errors
	///
	/// Returns [`AnimationError::FrameOutOfRange`] if `index` is not a valid frame index.
	pub fn region_at(&self, index: usize) -> Result<SpriteRegion<'_, T>, AnimationError> {
		let frame = self.animation.frame(index).ok_or(AnimationError::FrameOutOfRange {
			index,
			frame_count: self.animation.frame_count(),
		})?;

		Ok(SpriteRegion {
			texture: &self.texture,
			source: frame.source_rect().offset(self.offset),
		})
	}

	/// Draw parameters for part of the current frame.
	///
	/// `clip` is measured from the frame's top-left corner; the result never
	/// extends outside the frame and is empty when `clip` misses it entirely.
	pub fn clipped_region(&self, clip: Rect) -> SpriteRegion<'_, T> {
		SpriteRegion {
			texture: &self.texture,
			source: self.source_rectangle().relative_intersection(clip),
		}
	}
}

impl<T> Deref for AnimatedSprite<T> {
	type Target = Animation;

	fn deref(&self) -> &Self::Target {
		&self.animation
	}
}

impl<T> DerefMut for AnimatedSprite<T> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.animation
	}
}
