//! Playback tests for `pixanim` through the public facade

mod listeners;
mod sheet;

use pixanim::prelude::*;

/// `count` 32x32 frames on one row, 100 ms each
pub(crate) fn strip(count: i32) -> Vec<Frame> {
	(0..count).map(|i| Frame::new(Rect::new(i * 32, 0, 32, 32), 100)).collect()
}

#[test_log::test]
fn test_pause_keeps_position() {
	let mut anim = Animation::from_frames(strip(4)).unwrap();
	anim.play();
	anim.update(150.0).unwrap();

	anim.pause();
	assert!(anim.update(1000.0).unwrap().is_empty());
	assert_eq!(anim.frame_index(), 1);
	assert_eq!(anim.frame_progress(), 50.0);

	// Resuming a paused animation continues where it stopped
	anim.play();
	assert_eq!(anim.frame_index(), 1);
	anim.update(50.0).unwrap();
	assert_eq!(anim.frame_index(), 2);
}

#[test]
fn test_reset_returns_to_first_frame() {
	let sections = vec![AnimationSection::new("walk", 1, 3, Direction::PingPong)];
	let mut anim = Animation::new(strip(4), sections).unwrap();
	anim.set_looping(true);
	anim.play_section("walk").unwrap();
	anim.update(250.0).unwrap();
	assert_eq!(anim.frame_index(), 3);

	anim.reset();
	assert_eq!(anim.frame_index(), 0);
	assert_eq!(anim.frame_progress(), 50.0);
	assert!(!anim.is_playing());
}

#[test]
fn test_invalid_inputs_leave_state_untouched() {
	let mut anim = Animation::from_frames(strip(2)).unwrap();
	anim.play();
	anim.update(30.0).unwrap();
	let before = anim.state();

	assert_eq!(anim.update(-1.0), Err(AnimationError::InvalidDelta(-1.0)));
	assert!(matches!(anim.update(f64::NAN), Err(AnimationError::InvalidDelta(_))));
	assert_eq!(anim.set_speed(0.0), Err(AnimationError::InvalidSpeed(0.0)));
	assert_eq!(anim.play_section("run"), Err(AnimationError::UnknownSection("run".to_string())));
	assert_eq!(
		anim.set_absolute_frame(2),
		Err(AnimationError::FrameOutOfRange {
			index: 2,
			frame_count: 2
		})
	);

	assert_eq!(anim.state(), before);
}

#[test]
fn test_update_duration_matches_milliseconds() {
	let mut by_ms = Animation::from_frames(strip(4)).unwrap();
	let mut by_duration = Animation::from_frames(strip(4)).unwrap();
	by_ms.play();
	by_duration.play();

	for _ in 0..20 {
		let expected = by_ms.update(16.0).unwrap();
		let actual = by_duration.update_duration(std::time::Duration::from_millis(16)).unwrap();
		assert_eq!(expected, actual);
	}
	assert_eq!(by_ms.frame_index(), by_duration.frame_index());
}

#[test]
fn test_default_direction_applies_to_default_section() {
	let mut anim = Animation::from_frames(strip(3)).unwrap();
	anim.set_default_direction(Direction::Reverse);
	anim.set_looping(true);
	// Re-activate so the initial step follows the new direction
	anim.play_section(DEFAULT_SECTION).unwrap();

	assert_eq!(anim.active_section().name(), DEFAULT_SECTION);
	assert_eq!(anim.step_direction(), StepDirection::Backward);
	let events = anim.update(300.0).unwrap();
	let indices: Vec<usize> = events
		.iter()
		.filter_map(|event| match event {
			PlaybackEvent::FrameChanged {
				index,
			} => Some(*index),
			PlaybackEvent::Finished {
				..
			} => None,
		})
		.collect();
	assert_eq!(indices, [2, 1, 0]);
}
