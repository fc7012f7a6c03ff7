//! Named sub-ranges of the frame table and their registry.
//!
//! A section is one playable clip of a sprite sheet ("walk", "jump", ...). Every
//! animation owns a [`SectionRegistry`] that always contains the implicit
//! [`DEFAULT_SECTION`] covering the whole frame table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::AnimationError;

/// Name of the implicit section spanning the whole frame table.
///
/// The name is reserved: caller-supplied sections may not use it.
pub const DEFAULT_SECTION: &str = "default";

/// Stepping and looping policy of a section.
///
/// | Direction | initial step | loop wraps to |
/// |---|---|---|
/// | `Forward` | +1 | start |
/// | `Reverse` | -1 | end |
/// | `PingPong` | +1 | bounces between both ends |
/// | `ReversePingPong` | -1 | bounces between both ends |
///
/// `PingPong` and `ReversePingPong` only differ in their starting step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
	/// Play from start to end
	#[default]
	#[serde(alias = "forward")]
	Forward,
	/// Play from end to start
	#[serde(alias = "reverse")]
	Reverse,
	/// Play start to end, then back again
	#[serde(alias = "pingPong", alias = "ping_pong")]
	PingPong,
	/// Play end to start, then back again
	#[serde(alias = "reversePingPong", alias = "reverse_ping_pong")]
	ReversePingPong,
}

impl Direction {
	/// Step direction used when a section with this direction is activated.
	pub fn initial_step(self) -> StepDirection {
		match self {
			Self::Forward | Self::PingPong => StepDirection::Forward,
			Self::Reverse | Self::ReversePingPong => StepDirection::Backward,
		}
	}
}

impl std::fmt::Display for Direction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Forward => write!(f, "Forward"),
			Self::Reverse => write!(f, "Reverse"),
			Self::PingPong => write!(f, "PingPong"),
			Self::ReversePingPong => write!(f, "ReversePingPong"),
		}
	}
}

/// Runtime stepping sign of the current frame pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepDirection {
	/// Frame index increases (+1)
	Forward,
	/// Frame index decreases (-1)
	Backward,
}

impl StepDirection {
	/// `+1` or `-1`.
	pub fn sign(self) -> isize {
		match self {
			Self::Forward => 1,
			Self::Backward => -1,
		}
	}

	/// The opposite direction.
	#[must_use]
	pub fn reversed(self) -> Self {
		match self {
			Self::Forward => Self::Backward,
			Self::Backward => Self::Forward,
		}
	}
}

/// A named, directioned range `[start_index, end_index]` of the frame table.
///
/// Both indices are inclusive.
///
/// # Examples
///
/// ```
/// use pixanim_types::anim::{AnimationSection, Direction};
///
/// let walk = AnimationSection::new("walk", 4, 7, Direction::PingPong);
/// assert_eq!(walk.len(), 4);
/// assert!(walk.contains(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSection {
	/// Section name
	#[serde(alias = "Name")]
	name: String,
	/// First frame (inclusive)
	#[serde(alias = "StartIndex")]
	start_index: usize,
	/// Last frame (inclusive)
	#[serde(alias = "EndIndex")]
	end_index: usize,
	/// Stepping and looping policy
	#[serde(alias = "Direction", default)]
	direction: Direction,
}

impl AnimationSection {
	/// Creates a new section.
	pub fn new(
		name: impl Into<String>,
		start_index: usize,
		end_index: usize,
		direction: Direction,
	) -> Self {
		Self {
			name: name.into(),
			start_index,
			end_index,
			direction,
		}
	}

	/// Section name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// First frame of the section.
	pub fn start_index(&self) -> usize {
		self.start_index
	}

	/// Last frame of the section (inclusive).
	pub fn end_index(&self) -> usize {
		self.end_index
	}

	/// Stepping and looping policy.
	pub fn direction(&self) -> Direction {
		self.direction
	}

	/// Number of frames covered by the section.
	pub fn len(&self) -> usize {
		self.end_index.saturating_sub(self.start_index) + 1
	}

	/// Always `false`: a section covers at least one frame.
	pub fn is_empty(&self) -> bool {
		false
	}

	/// Returns `true` if `index` lies inside the section.
	pub fn contains(&self, index: usize) -> bool {
		(self.start_index..=self.end_index).contains(&index)
	}

	fn validate(&self, frame_count: usize) -> Result<(), AnimationError> {
		if self.start_index > self.end_index || self.end_index >= frame_count {
			return Err(AnimationError::SectionOutOfBounds {
				name: self.name.clone(),
				start: self.start_index,
				end: self.end_index,
				frame_count,
			});
		}
		Ok(())
	}
}

impl std::fmt::Display for AnimationSection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}[{}..={}, {}]", self.name, self.start_index, self.end_index, self.direction)
	}
}

/// Name to section mapping, validated once at construction.
///
/// Slot 0 always holds the implicit [`DEFAULT_SECTION`]; caller sections follow
/// in the order they were supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
	sections: Vec<AnimationSection>,
	by_name: HashMap<String, usize>,
}

impl SectionRegistry {
	/// Slot of the implicit default section.
	pub(crate) const DEFAULT_SLOT: usize = 0;

	/// Builds the registry for a frame table of `frame_count` frames.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - `frame_count` is zero
	/// - a section is named [`DEFAULT_SECTION`]
	/// - two sections share a name
	/// - a section range is inverted or reaches past the last frame
	pub fn new(
		sections: impl IntoIterator<Item = AnimationSection>,
		frame_count: usize,
	) -> Result<Self, AnimationError> {
		if frame_count == 0 {
			return Err(AnimationError::EmptyFrameTable);
		}

		let mut registry = Self {
			sections: vec![AnimationSection::new(
				DEFAULT_SECTION,
				0,
				frame_count - 1,
				Direction::Forward,
			)],
			by_name: HashMap::from([(DEFAULT_SECTION.to_string(), Self::DEFAULT_SLOT)]),
		};

		for section in sections {
			if section.name == DEFAULT_SECTION {
				return Err(AnimationError::ReservedSectionName(section.name));
			}
			if registry.by_name.contains_key(&section.name) {
				return Err(AnimationError::DuplicateSection(section.name));
			}
			section.validate(frame_count)?;

			registry.by_name.insert(section.name.clone(), registry.sections.len());
			registry.sections.push(section);
		}

		Ok(registry)
	}

	/// Resolves a section name to its registry slot.
	///
	/// # Errors
	///
	/// Returns [`AnimationError::UnknownSection`] if no section has that name.
	pub fn slot_of(&self, name: &str) -> Result<usize, AnimationError> {
		self.by_name.get(name).copied().ok_or_else(|| AnimationError::UnknownSection(name.to_string()))
	}

	/// Looks up a section by name.
	pub fn get(&self, name: &str) -> Option<&AnimationSection> {
		self.by_name.get(name).map(|&slot| &self.sections[slot])
	}

	/// The implicit whole-table section.
	pub fn default_section(&self) -> &AnimationSection {
		&self.sections[Self::DEFAULT_SLOT]
	}

	/// Returns `true` if a section with this name exists.
	pub fn contains(&self, name: &str) -> bool {
		self.by_name.contains_key(name)
	}

	/// Number of sections, including the default one.
	pub fn len(&self) -> usize {
		self.sections.len()
	}

	/// Always `false`: the default section is always present.
	pub fn is_empty(&self) -> bool {
		self.sections.is_empty()
	}

	/// Iterates all sections, default first.
	pub fn iter(&self) -> std::slice::Iter<'_, AnimationSection> {
		self.sections.iter()
	}

	pub(crate) fn slot(&self, slot: usize) -> &AnimationSection {
		&self.sections[slot]
	}

	pub(crate) fn set_default_direction(&mut self, direction: Direction) {
		self.sections[Self::DEFAULT_SLOT].direction = direction;
	}
}

impl<'a> IntoIterator for &'a SectionRegistry {
	type Item = &'a AnimationSection;
	type IntoIter = std::slice::Iter<'a, AnimationSection>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
