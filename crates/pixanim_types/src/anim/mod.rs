//! Sprite animation playback.
//!
//! This module provides the playback engine for frame-table sprite animations:
//! an ordered table of timed frames, named sections (clips) of that table, and a
//! cursor that advances over elapsed wall-clock time.
//!
//! # Overview
//!
//! - [`Frame`]: source rectangle + duration in milliseconds
//! - [`AnimationSection`]: named inclusive range of frames with a [`Direction`]
//! - [`SectionRegistry`]: validated sections, always containing [`DEFAULT_SECTION`]
//! - [`Animation`]: the engine; owns the tables and the [`PlaybackState`]
//! - [`PlaybackEvent`] / [`PlaybackListener`]: notifications emitted by `update`
//! - [`PlaybackConfig`]: initial looping/speed settings
//!
//! # Directions
//!
//! ```text
//! section [0..=3], looping
//!
//! Forward          0 1 2 3 0 1 2 3 ...
//! Reverse          0 3 2 1 0 3 2 1 ...   (starts at the section start, steps down)
//! PingPong         0 1 2 3 2 1 0 1 2 ...
//! ReversePingPong  0 1 2 3 2 1 0 1 2 ...   (first step is a bounce at the start)
//! ```
//!
//! Without looping, reaching the edge in the stepping direction finishes the
//! section: playback stops, progress is cleared and the next `play` restarts
//! from the section start.
//!
//! # Examples
//!
//! ```
//! use pixanim_types::anim::{Animation, AnimationSection, Direction, Frame, PlaybackEvent};
//! use pixanim_types::geometry::Rect;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frames = vec![Frame::new(Rect::new(0, 0, 16, 16), 100); 4];
//! let sections = vec![AnimationSection::new("idle", 0, 3, Direction::PingPong)];
//!
//! let mut anim = Animation::new(frames, sections)?;
//! anim.set_looping(true);
//! anim.play_section("idle")?;
//!
//! let mut visited = vec![anim.frame_index()];
//! for _ in 0..6 {
//!     for event in anim.update(100.0)? {
//!         if let PlaybackEvent::FrameChanged { index } = event {
//!             visited.push(index);
//!         }
//!     }
//! }
//! assert_eq!(visited, [0, 1, 2, 3, 2, 1, 0]);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod event;
mod frame;
mod player;
mod section;


pub use config::PlaybackConfig;
pub use error::{AnimationError, SheetError};
pub use event::{PlaybackEvent, PlaybackListener};
pub use frame::Frame;
pub use player::{Animation, MAX_UPDATE_MS, PlaybackState};
pub use section::{AnimationSection, DEFAULT_SECTION, Direction, SectionRegistry, StepDirection};
