//! The animation playback engine.
//!
//! [`Animation`] owns an immutable frame table and section registry, plus the
//! mutable [`PlaybackState`]. Hosts call [`Animation::update`] once per tick with
//! the elapsed time and read the current frame afterwards.
//!
//! # Timeline
//!
//! Each update adds `delta * speed` to the progress of the current frame. While
//! the progress covers the current frame's duration, that duration is consumed
//! and the pointer crosses one boundary:
//! - inside the section, the index moves by the step direction
//! - at the section edge (the end when stepping forward, the start when stepping
//!   backward) the section either wraps (looping) or finishes
//!
//! A single update can cross any number of boundaries, as long as the scaled
//! delta stays within [`MAX_UPDATE_MS`].

use std::time::Duration;

use log::{debug, trace};

use super::{
	config::{PlaybackConfig, validate_speed},
	error::AnimationError,
	event::{PlaybackEvent, PlaybackListener},
	frame::Frame,
	section::{AnimationSection, Direction, SectionRegistry, StepDirection},
};
use crate::geometry::Rect;

/// Largest scaled delta (`delta_ms * speed`) a single [`Animation::update`]
/// accepts: one hour of animation time.
///
/// Every crossed boundary is walked and reported, so the cost of an update is
/// proportional to the animation time it covers. Hosts resuming after a long
/// suspension should clamp or drop the elapsed time.
pub const MAX_UPDATE_MS: f64 = 3_600_000.0;

/// Mutable playback state of an [`Animation`].
///
/// Copies of it are handed out by [`Animation::state`]; mutating the animation
/// never changes a copy already taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
	frame_index: usize,
	progress_ms: f64,
	step: StepDirection,
	playing: bool,
	needs_restart: bool,
	active_slot: usize,
	speed: f64,
	looping: bool,
}

impl PlaybackState {
	/// Current frame index.
	pub fn frame_index(&self) -> usize {
		self.frame_index
	}

	/// Elapsed milliseconds within the current frame.
	pub fn progress_ms(&self) -> f64 {
		self.progress_ms
	}

	/// Current stepping sign.
	pub fn step(&self) -> StepDirection {
		self.step
	}

	/// Whether the timeline advances on update.
	pub fn is_playing(&self) -> bool {
		self.playing
	}

	/// Whether the next `play` snaps back to the section start.
	pub fn needs_restart(&self) -> bool {
		self.needs_restart
	}

	/// Speed multiplier.
	pub fn speed(&self) -> f64 {
		self.speed
	}

	/// Whether sections wrap instead of finishing.
	pub fn looping(&self) -> bool {
		self.looping
	}
}

/// A sprite animation: a frame table, its sections, and a playback cursor.
///
/// # Examples
///
/// ```
/// use pixanim_types::anim::{Animation, AnimationSection, Direction, Frame, PlaybackEvent};
/// use pixanim_types::geometry::Rect;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let frames: Vec<_> = (0..4).map(|i| Frame::new(Rect::new(i * 16, 0, 16, 16), 100)).collect();
/// let sections = vec![AnimationSection::new("blink", 2, 3, Direction::Forward)];
/// let mut anim = Animation::new(frames, sections)?;
///
/// anim.play_section("blink")?;
/// assert_eq!(anim.frame_index(), 2);
///
/// let events = anim.update(150.0)?;
/// assert_eq!(events, [PlaybackEvent::FrameChanged { index: 3 }]);
/// assert_eq!(anim.frame_source_rectangle(), Rect::new(48, 0, 16, 16));
/// assert_eq!(anim.frame_progress(), 50.0);
/// # Ok(())
/// # }
/// ```
pub struct Animation {
	frames: Vec<Frame>,
	sections: SectionRegistry,
	state: PlaybackState,
	frame_changed_on_finish: bool,
	listeners: Vec<Box<dyn PlaybackListener>>,
}

impl Animation {
	/// Creates an animation with default playback settings.
	///
	/// The implicit `"default"` section covering every frame is added to
	/// `sections` and activated. The animation starts paused on frame 0.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - `frames` is empty
	/// - a frame has a zero duration
	/// - a section is invalid (see [`SectionRegistry::new`])
	pub fn new(
		frames: Vec<Frame>,
		sections: impl IntoIterator<Item = AnimationSection>,
	) -> Result<Self, AnimationError> {
		Self::with_config(frames, sections, &PlaybackConfig::default())
	}

	/// Creates an animation that only has the implicit `"default"` section.
	///
	/// # Errors
	///
	/// Same as [`Animation::new`].
	pub fn from_frames(frames: Vec<Frame>) -> Result<Self, AnimationError> {
		Self::new(frames, Vec::new())
	}

	/// Creates an animation with explicit playback settings.
	///
	/// # Errors
	///
	/// Same as [`Animation::new`], plus [`AnimationError::InvalidSpeed`] if the
	/// configured speed is not a finite positive number.
	pub fn with_config(
		frames: Vec<Frame>,
		sections: impl IntoIterator<Item = AnimationSection>,
		config: &PlaybackConfig,
	) -> Result<Self, AnimationError> {
		if frames.is_empty() {
			return Err(AnimationError::EmptyFrameTable);
		}
		if let Some(index) = frames.iter().position(|frame| frame.duration_ms() == 0) {
			return Err(AnimationError::InvalidFrameDuration {
				index,
			});
		}
		config.validate()?;

		let sections = SectionRegistry::new(sections, frames.len())?;
		debug!("Animation created: {} frames, {} sections", frames.len(), sections.len());

		let mut animation = Self {
			frames,
			sections,
			state: PlaybackState {
				frame_index: 0,
				progress_ms: 0.0,
				step: StepDirection::Forward,
				playing: false,
				needs_restart: false,
				active_slot: SectionRegistry::DEFAULT_SLOT,
				speed: config.speed,
				looping: config.looping,
			},
			frame_changed_on_finish: config.frame_changed_on_finish,
			listeners: Vec::new(),
		};
		animation.activate(SectionRegistry::DEFAULT_SLOT);

		Ok(animation)
	}

	// --- Playback controls ---

	/// Starts (or resumes) playback.
	///
	/// If the active section finished without looping, playback restarts from
	/// the section's first frame. Otherwise the current frame progress is kept,
	/// so resuming after [`Animation::pause`] continues mid-frame.
	pub fn play(&mut self) {
		if self.state.needs_restart {
			self.state.frame_index = self.active_section().start_index();
			self.state.needs_restart = false;
			debug!("Restarting section '{}'", self.active_section().name());
		}
		self.state.playing = true;
	}

	/// Activates the named section and starts playback.
	///
	/// The current frame jumps to the section's first frame and the step
	/// direction is recomputed from the section's [`Direction`]. Frame progress
	/// is **not** reset; combine with [`Animation::reset_frame_progress`] for that.
	///
	/// # Errors
	///
	/// Returns [`AnimationError::UnknownSection`] if no section has that name.
	/// The playback state is unchanged in that case.
	pub fn play_section(&mut self, name: &str) -> Result<(), AnimationError> {
		let slot = self.sections.slot_of(name)?;
		self.activate(slot);
		self.play();
		Ok(())
	}

	/// Pauses playback, leaving everything else untouched.
	pub fn pause(&mut self) {
		self.state.playing = false;
	}

	/// Stops playback and jumps to frame 0 of the frame table, regardless of the
	/// active section. Frame progress is kept.
	pub fn reset(&mut self) {
		self.state.playing = false;
		self.state.frame_index = 0;
	}

	/// Jumps to a frame of the table, ignoring the active section's bounds.
	///
	/// Following updates keep honoring the active section's boundaries from
	/// wherever the pointer now is.
	///
	/// # Errors
	///
	/// Returns [`AnimationError::FrameOutOfRange`] if `index` is not a valid
	/// frame index. The playback state is unchanged in that case.
	pub fn set_absolute_frame(&mut self, index: usize) -> Result<(), AnimationError> {
		if index >= self.frames.len() {
			return Err(AnimationError::FrameOutOfRange {
				index,
				frame_count: self.frames.len(),
			});
		}
		self.state.frame_index = index;
		Ok(())
	}

	/// Sets the progress of the current frame to zero.
	pub fn reset_frame_progress(&mut self) {
		self.state.progress_ms = 0.0;
	}

	/// Advances the timeline by `delta_ms` milliseconds of wall-clock time.
	///
	/// Does nothing while paused. Returns every emitted event in order; the same
	/// events have already been delivered to the registered listeners when this
	/// returns.
	///
	/// # Errors
	///
	/// Returns [`AnimationError::InvalidDelta`] if `delta_ms` is negative, not
	/// finite, or larger than [`MAX_UPDATE_MS`] once scaled by the speed. The
	/// playback state is unchanged in that case.
	pub fn update(&mut self, delta_ms: f64) -> Result<Vec<PlaybackEvent>, AnimationError> {
		let scaled = delta_ms * self.state.speed;
		if !delta_ms.is_finite() || delta_ms < 0.0 || scaled > MAX_UPDATE_MS {
			return Err(AnimationError::InvalidDelta(delta_ms));
		}
		if !self.state.playing {
			return Ok(Vec::new());
		}

		self.state.progress_ms += scaled;
		let events = self.advance();

		for event in &events {
			for listener in &mut self.listeners {
				listener.on_event(event);
			}
		}

		Ok(events)
	}

	/// [`Animation::update`] taking a [`Duration`], as produced by a frame clock.
	///
	/// # Errors
	///
	/// Same as [`Animation::update`].
	pub fn update_duration(
		&mut self,
		elapsed: Duration,
	) -> Result<Vec<PlaybackEvent>, AnimationError> {
		self.update(elapsed.as_secs_f64() * 1000.0)
	}

	// --- Notifications ---

	/// Registers a listener that receives every event emitted by `update`.
	pub fn subscribe(&mut self, listener: impl PlaybackListener + 'static) {
		self.listeners.push(Box::new(listener));
	}

	/// Removes all registered listeners.
	pub fn clear_listeners(&mut self) {
		self.listeners.clear();
	}

	/// Number of registered listeners.
	pub fn listener_count(&self) -> usize {
		self.listeners.len()
	}

	// --- Settings ---

	/// Whether sections wrap around instead of finishing. Defaults to `false`.
	pub fn looping(&self) -> bool {
		self.state.looping
	}

	/// Enables or disables looping.
	pub fn set_looping(&mut self, looping: bool) {
		self.state.looping = looping;
	}

	/// Playback speed multiplier. Defaults to 1.0.
	pub fn speed(&self) -> f64 {
		self.state.speed
	}

	/// Sets the playback speed multiplier.
	///
	/// # Errors
	///
	/// Returns [`AnimationError::InvalidSpeed`] if `speed` is not finite or not
	/// greater than zero. The speed is unchanged in that case.
	pub fn set_speed(&mut self, speed: f64) -> Result<(), AnimationError> {
		validate_speed(speed)?;
		self.state.speed = speed;
		Ok(())
	}

	/// Direction of the implicit `"default"` section.
	pub fn default_direction(&self) -> Direction {
		self.sections.default_section().direction()
	}

	/// Changes the direction of the implicit `"default"` section.
	///
	/// Takes effect the next time the default section is activated for the
	/// initial step; wrap behavior changes immediately if it is the active one.
	pub fn set_default_direction(&mut self, direction: Direction) {
		debug!("Default section direction set to {direction}");
		self.sections.set_default_direction(direction);
	}

	// --- Accessors ---

	/// Whether the timeline advances on update.
	pub fn is_playing(&self) -> bool {
		self.state.playing
	}

	/// Whether the next [`Animation::play`] restarts the active section.
	pub fn needs_restart(&self) -> bool {
		self.state.needs_restart
	}

	/// Current frame index in the frame table.
	pub fn frame_index(&self) -> usize {
		self.state.frame_index
	}

	/// Elapsed milliseconds within the current frame.
	pub fn frame_progress(&self) -> f64 {
		self.state.progress_ms
	}

	/// Duration of the current frame in milliseconds.
	pub fn frame_duration(&self) -> u32 {
		self.current_frame().duration_ms()
	}

	/// Texture region of the current frame.
	pub fn frame_source_rectangle(&self) -> Rect {
		self.current_frame().source_rect()
	}

	/// The current frame.
	pub fn current_frame(&self) -> &Frame {
		&self.frames[self.state.frame_index]
	}

	/// Current stepping sign.
	pub fn step_direction(&self) -> StepDirection {
		self.state.step
	}

	/// The section playback is scoped to.
	pub fn active_section(&self) -> &AnimationSection {
		self.sections.slot(self.state.active_slot)
	}

	/// Snapshot of the playback state.
	pub fn state(&self) -> PlaybackState {
		self.state
	}

	/// The frame table.
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Number of frames in the table.
	pub fn frame_count(&self) -> usize {
		self.frames.len()
	}

	/// Looks up a frame by index.
	pub fn frame(&self, index: usize) -> Option<&Frame> {
		self.frames.get(index)
	}

	/// Looks up a section by name.
	pub fn section(&self, name: &str) -> Option<&AnimationSection> {
		self.sections.get(name)
	}

	/// All sections, the implicit `"default"` one first.
	pub fn sections(&self) -> &SectionRegistry {
		&self.sections
	}

	// --- Internals ---

	fn activate(&mut self, slot: usize) {
		let section = self.sections.slot(slot);
		debug!("Activating section {section}");

		self.state.step = section.direction().initial_step();
		self.state.frame_index = section.start_index();
		self.state.active_slot = slot;
	}

	fn advance(&mut self) -> Vec<PlaybackEvent> {
		let mut events = Vec::new();

		while self.state.progress_ms >= self.current_frame().duration() {
			self.state.progress_ms -= self.current_frame().duration();

			if self.at_boundary() {
				if self.state.looping {
					self.wrap();
				} else {
					self.finish(&mut events);
					if !self.frame_changed_on_finish {
						continue;
					}
				}
			} else {
				self.state.frame_index = match self.state.step {
					StepDirection::Forward => self.state.frame_index + 1,
					StepDirection::Backward => self.state.frame_index - 1,
				};
			}

			trace!("Frame changed to {}", self.state.frame_index);
			events.push(PlaybackEvent::FrameChanged {
				index: self.state.frame_index,
			});
		}

		events
	}

	fn at_boundary(&self) -> bool {
		let section = self.active_section();
		match self.state.step {
			StepDirection::Forward => self.state.frame_index >= section.end_index(),
			StepDirection::Backward => self.state.frame_index <= section.start_index(),
		}
	}

	/// Wraps at a section edge according to the section's direction, not the
	/// runtime step.
	fn wrap(&mut self) {
		let section = self.sections.slot(self.state.active_slot);
		let (start, end) = (section.start_index(), section.end_index());

		match section.direction() {
			Direction::Forward => self.state.frame_index = start,
			Direction::Reverse => self.state.frame_index = end,
			Direction::PingPong | Direction::ReversePingPong => {
				// A single-frame section has nowhere to bounce to
				self.state.frame_index = if start == end {
					start
				} else {
					match self.state.step {
						StepDirection::Forward => end - 1,
						StepDirection::Backward => start + 1,
					}
				};
				self.state.step = self.state.step.reversed();
			}
		}
	}

	fn finish(&mut self, events: &mut Vec<PlaybackEvent>) {
		self.state.needs_restart = true;
		self.state.playing = false;
		self.state.progress_ms = 0.0;

		let section = self.active_section().name().to_string();
		debug!("Section '{section}' finished on frame {}", self.state.frame_index);
		events.push(PlaybackEvent::Finished {
			section,
		});
	}
}

impl std::fmt::Debug for Animation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Animation")
			.field("frames", &self.frames.len())
			.field("sections", &self.sections.len())
			.field("active_section", &self.active_section().name())
			.field("state", &self.state)
			.field("frame_changed_on_finish", &self.frame_changed_on_finish)
			.field("listeners", &self.listeners.len())
			.finish()
	}
}
