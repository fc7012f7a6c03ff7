//! Prelude module for `pixanim_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use pixanim_internal::prelude::*;
//!
//! # fn main() -> Result<(), AnimationError> {
//! // Now you can use all common types directly
//! let frames = vec![Frame::new(Rect::new(0, 0, 32, 32), 80); 2];
//! let sections = vec![AnimationSection::new("wave", 0, 1, Direction::PingPong)];
//! let mut sprite = AnimatedSprite::new((), Animation::new(frames, sections)?);
//!
//! sprite.set_looping(true);
//! sprite.play_section("wave")?;
//! # Ok(())
//! # }
//! ```

// Re-export everything from pixanim_types::prelude
#[doc(inline)]
pub use pixanim_types::prelude::*;

// Re-export the entire pixanim_types module for advanced usage
#[doc(inline)]
pub use pixanim_types;
