//! This module is separated into its own crate to enable simple dynamic linking for `pixanim`, and should not be used directly.

/// `use pixanim::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export pixanim_types for convenience
pub use pixanim_types;

// Re-export commonly used types at crate root
pub use pixanim_types::{
	anim::{Animation, AnimationError, AnimationSection, Direction, Frame, PlaybackEvent},
	geometry::Rect,
	sheet::AnimationSheet,
	sprite::AnimatedSprite,
};
