//! Prelude module for `pixanim_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use pixanim_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let frame = Frame::new(Rect::new(0, 0, 16, 16), 100);
//! let config = PlaybackConfig::looping();
//! ```

// Animation types
#[doc(inline)]
pub use crate::anim::{
	Animation,
	AnimationError,
	AnimationSection,
	// Constants
	DEFAULT_SECTION,
	MAX_UPDATE_MS,

	Direction,
	Frame,
	PlaybackConfig,

	// Notifications
	PlaybackEvent,
	PlaybackListener,
	PlaybackState,
	SectionRegistry,
	SheetError,
	StepDirection,
};

// Geometry types
#[doc(inline)]
pub use crate::geometry::{Point, Rect};

// Sheet and sprite types
#[doc(inline)]
pub use crate::sheet::AnimationSheet;
#[doc(inline)]
pub use crate::sprite::{AnimatedSprite, SpriteRegion};

// Re-export the anim module for advanced usage
#[doc(inline)]
pub use crate::anim;
