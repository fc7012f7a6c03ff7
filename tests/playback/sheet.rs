//! Sheet loading and sprite regions

use pixanim::prelude::*;

fn hero_path() -> std::path::PathBuf {
	std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/sprite_player/hero.json")
}

#[test]
fn test_hero_sheet_loads() {
	let sheet = AnimationSheet::open(hero_path()).unwrap();
	assert_eq!(sheet.frames.len(), 6);
	assert_eq!(sheet.total_duration_ms(), 520);

	let anim = sheet.into_animation().unwrap();
	// Three named sections plus the implicit default one
	assert_eq!(anim.sections().len(), 4);
	assert_eq!(anim.section("idle").unwrap().direction(), Direction::PingPong);
}

#[test]
fn test_hero_attack_plays_once() {
	let sheet = AnimationSheet::open(hero_path()).unwrap();
	let mut sprite = AnimatedSprite::with_offset("hero", sheet.into_animation().unwrap(), Point::new(0, 128));

	sprite.play_section("attack").unwrap();
	assert_eq!(sprite.region().source, Rect::new(0, 160, 32, 32));

	let events = sprite.update(60.0).unwrap();
	assert_eq!(
		events,
		[PlaybackEvent::FrameChanged {
			index: 5
		}]
	);
	assert_eq!(sprite.region().source, Rect::new(32, 160, 32, 32));

	let events = sprite.update(60.0).unwrap();
	assert!(events.iter().any(PlaybackEvent::is_finished));
	assert!(sprite.needs_restart());
}

#[test]
fn test_hero_idle_ping_pong_loops() {
	let sheet = AnimationSheet::open(hero_path()).unwrap();
	let config = PlaybackConfig::looping();
	let mut anim = sheet.into_animation_with_config(&config).unwrap();
	anim.play_section("idle").unwrap();

	// 120 + 80 + 80 + 120 + 80 + 80: back at the start, still stepping backward
	anim.update(560.0).unwrap();
	assert_eq!(anim.frame_index(), 0);
	assert_eq!(anim.step_direction(), StepDirection::Backward);
	assert_eq!(anim.frame_progress(), 0.0);

	// The bounce at the start flips the step again
	anim.update(120.0).unwrap();
	assert_eq!(anim.frame_index(), 1);
	assert_eq!(anim.step_direction(), StepDirection::Forward);
}
