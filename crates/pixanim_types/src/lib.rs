//! This crate provides the core types of the `pixanim` project: a playback
//! engine for frame-table sprite animations.
//!
//! # Modules
//!
//! - **anim**: frames, sections, and the [`Animation`](anim::Animation) playback engine
//! - **geometry**: integer rectangles and points addressing texture regions
//! - **sprite**: binding of an animation to an externally owned texture handle
//! - **sheet**: sidecar (JSON/YAML) description of a sheet's frame and section tables
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use pixanim_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frames = vec![Frame::new(Rect::new(0, 0, 16, 16), 100); 3];
//! let mut anim = Animation::from_frames(frames)?;
//!
//! anim.play();
//! let events = anim.update(100.0)?;
//! assert_eq!(events, [PlaybackEvent::FrameChanged { index: 1 }]);
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use pixanim_types::sheet::AnimationSheet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let anim = AnimationSheet::open("hero.json")?.into_animation()?;
//! # Ok(())
//! # }
//! ```

pub mod anim;
pub mod geometry;
pub mod sheet;
pub mod sprite;

/// `use pixanim_types::prelude::*;` to import commonly used items.
pub mod prelude;
