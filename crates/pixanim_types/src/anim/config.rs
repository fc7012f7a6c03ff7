//! Playback configuration for animations.
//!
//! This module provides the initial playback settings an [`Animation`] is
//! constructed with. All fields can still be changed at runtime through the
//! animation's setters.
//!
//! [`Animation`]: super::Animation

use serde::{Deserialize, Serialize};

use super::error::AnimationError;

/// Initial playback settings.
///
/// # Presets
///
/// - `default()`: no looping, speed 1.0, `FrameChanged` also emitted when a section finishes
/// - `looping()`: same as default with looping enabled
///
/// # Examples
///
/// ```
/// use pixanim_types::anim::PlaybackConfig;
///
/// let config = PlaybackConfig::looping().with_speed(2.0);
/// assert!(config.looping);
/// assert_eq!(config.speed, 2.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
	/// Wrap around (as defined by the section's direction) instead of finishing
	pub looping: bool,
	/// Playback speed multiplier, must be finite and greater than zero
	pub speed: f64,
	/// Emit `FrameChanged` on the update step where a non-looping section
	/// finishes, even though the frame index does not move
	pub frame_changed_on_finish: bool,
}

impl Default for PlaybackConfig {
	fn default() -> Self {
		Self {
			looping: false,
			speed: 1.0,
			frame_changed_on_finish: true,
		}
	}
}

impl PlaybackConfig {
	/// Default settings with looping enabled.
	pub fn looping() -> Self {
		Self {
			looping: true,
			..Self::default()
		}
	}

	/// Returns these settings with a different speed multiplier.
	#[must_use]
	pub fn with_speed(self, speed: f64) -> Self {
		Self {
			speed,
			..self
		}
	}

	/// Checks that the settings can be applied to an animation.
	///
	/// # Errors
	///
	/// Returns [`AnimationError::InvalidSpeed`] if `speed` is not a finite positive number.
	pub fn validate(&self) -> Result<(), AnimationError> {
		validate_speed(self.speed)
	}
}

pub(crate) fn validate_speed(speed: f64) -> Result<(), AnimationError> {
	if speed.is_finite() && speed > 0.0 {
		Ok(())
	} else {
		Err(AnimationError::InvalidSpeed(speed))
	}
}
