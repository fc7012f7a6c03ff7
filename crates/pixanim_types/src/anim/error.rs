//! Error types for animation construction, playback control and sheet loading.

use thiserror::Error;

/// Errors raised by [`Animation`](super::Animation) construction and playback controls.
///
/// Every variant is a configuration error: the offending call fails and the
/// playback state is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
	/// The frame table has no frames
	#[error("Frame table is empty: an animation needs at least one frame")]
	EmptyFrameTable,

	/// A frame has a zero duration, which would stall the timeline forever
	#[error("Frame {index} has a zero duration: frame durations must be positive")]
	InvalidFrameDuration {
		/// Index of the offending frame
		index: usize,
	},

	/// A section range does not fit inside the frame table
	#[error(
		"Section '{name}' covers frames {start}..={end}, but the frame table only has {frame_count} frames"
	)]
	SectionOutOfBounds {
		/// Section name
		name: String,
		/// First frame of the section
		start: usize,
		/// Last frame of the section (inclusive)
		end: usize,
		/// Number of frames in the table
		frame_count: usize,
	},

	/// A caller-supplied section uses the reserved default name
	#[error("Section name '{0}' is reserved for the implicit whole-table section")]
	ReservedSectionName(String),

	/// Two sections share the same name
	#[error("Duplicate section name '{0}'")]
	DuplicateSection(String),

	/// No section is registered under the requested name
	#[error("Unknown animation section '{0}'")]
	UnknownSection(String),

	/// Playback speed must be a finite, positive multiplier
	#[error("Invalid playback speed {0}: speed must be finite and greater than zero")]
	InvalidSpeed(f64),

	/// Absolute frame index outside of the frame table
	#[error("Frame index {index} out of range (total frames: {frame_count})")]
	FrameOutOfRange {
		/// Requested frame index
		index: usize,
		/// Number of frames in the table
		frame_count: usize,
	},

	/// Elapsed time passed to `update` is negative, not a number, or too large
	#[error("Invalid elapsed time {0} ms: deltas must be finite, non-negative and at most one hour after speed scaling")]
	InvalidDelta(f64),
}

/// Errors that can occur when loading an animation sheet from its sidecar description
#[derive(Debug, Error)]
pub enum SheetError {
	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// Malformed JSON document
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// Malformed YAML document
	#[error(transparent)]
	Yaml(#[from] serde_yaml::Error),

	/// Sidecar file extension is neither JSON nor YAML
	#[error("Unsupported sheet extension '{0}': expected .json, .yaml or .yml")]
	UnsupportedExtension(String),

	/// The document parsed, but the frame/section tables are invalid
	#[error(transparent)]
	Animation(#[from] AnimationError),
}
