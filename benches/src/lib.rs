//! Benchmark helper utilities for pixanim
//!
//! This module provides generators for synthetic frame tables and sheets used by
//! the playback benchmarks. Nothing here touches the filesystem.

use pixanim_types::{
	anim::{AnimationSection, Direction, Frame},
	geometry::Rect,
	sheet::AnimationSheet,
};

/// Edge length of a generated frame, in pixels
pub const FRAME_SIZE: i32 = 32;

/// Frames laid out row by row on a 16-column atlas, all lasting `duration_ms`
pub fn uniform_frames(count: usize, duration_ms: u32) -> Vec<Frame> {
	(0..count).map(|i| Frame::new(atlas_rect(i), duration_ms)).collect()
}

/// Frames cycling through durations of 1 to 97 ms
///
/// Short frames make a single update cross many boundaries, which is the
/// catch-up path of the engine.
pub fn varied_frames(count: usize) -> Vec<Frame> {
	(0..count).map(|i| Frame::new(atlas_rect(i), (i as u32 * 37) % 97 + 1)).collect()
}

/// One section per direction, each spanning the whole table
pub fn full_sections(count: usize) -> Vec<AnimationSection> {
	let end = count.saturating_sub(1);
	vec![
		AnimationSection::new("forward", 0, end, Direction::Forward),
		AnimationSection::new("reverse", 0, end, Direction::Reverse),
		AnimationSection::new("ping_pong", 0, end, Direction::PingPong),
		AnimationSection::new("reverse_ping_pong", 0, end, Direction::ReversePingPong),
	]
}

/// Consecutive sections of `span` frames named `clip_0`, `clip_1`, ...
pub fn tiled_sections(count: usize, span: usize) -> Vec<AnimationSection> {
	let span = span.max(1);
	(0..count / span)
		.map(|i| AnimationSection::new(format!("clip_{i}"), i * span, i * span + span - 1, Direction::PingPong))
		.collect()
}

/// A sheet with `count` uniform frames and the [`tiled_sections`] over them
pub fn generate_sheet(count: usize, span: usize) -> AnimationSheet {
	AnimationSheet {
		frames: uniform_frames(count, 100),
		sections: tiled_sections(count, span),
	}
}

fn atlas_rect(index: usize) -> Rect {
	let (column, row) = ((index % 16) as i32, (index / 16) as i32);
	Rect::new(column * FRAME_SIZE, row * FRAME_SIZE, FRAME_SIZE, FRAME_SIZE)
}

/// Common frame table sizes for benchmarking
pub mod sizes {
	/// A short effect
	pub const SMALL: usize = 8;
	/// A typical character sheet
	pub const MEDIUM: usize = 64;
	/// A large shared atlas
	pub const LARGE: usize = 512;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_uniform_frames_layout() {
		let frames = uniform_frames(20, 50);
		assert_eq!(frames.len(), 20);
		assert_eq!(frames[17].source_rect(), Rect::new(32, 32, 32, 32));
		assert!(frames.iter().all(|frame| frame.duration_ms() == 50));
	}

	#[test]
	fn test_varied_frames_never_zero() {
		assert!(varied_frames(sizes::LARGE).iter().all(|frame| frame.duration_ms() > 0));
	}

	#[test]
	fn test_generated_sheet_is_valid() {
		let sheet = generate_sheet(sizes::MEDIUM, 6);
		assert_eq!(sheet.sections.len(), 10);
		assert_eq!(sheet.sections[9].end_index(), 59);
		assert!(sheet.validate().is_ok());

		let frames = uniform_frames(sizes::SMALL, 10);
		assert!(pixanim_types::anim::Animation::new(frames, full_sections(sizes::SMALL)).is_ok());
	}
}
