//! Sidecar description of an animated sprite sheet.
//!
//! An animation sheet lists the frames of a texture and the named sections
//! (clips) over those frames. It is usually stored next to the texture as
//! `<name>.json`:
//!
//! ```json
//! {
//!   "frames": [
//!     { "sourceRect": { "x": 0,  "y": 0, "width": 16, "height": 16 }, "durationMs": 100 },
//!     { "sourceRect": { "x": 16, "y": 0, "width": 16, "height": 16 }, "durationMs": 100 }
//!   ],
//!   "sections": [
//!     { "name": "blink", "startIndex": 0, "endIndex": 1, "direction": "PingPong" }
//!   ]
//! }
//! ```
//!
//! PascalCase keys (`Frames`, `SourceRectangle`, `Duration`, `StartIndex`, ...)
//! are accepted as well, and `.yaml`/`.yml` sidecars use the same layout.
//!
//! Only the tables are described here; texture loading stays with the host.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::anim::{
	Animation, AnimationError, AnimationSection, Frame, PlaybackConfig, SectionRegistry,
	SheetError,
};

/// Parsed frame and section tables of a sprite sheet.
///
/// # Examples
///
/// ```
/// use pixanim_types::sheet::AnimationSheet;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let sheet = AnimationSheet::from_json_str(r#"{
///     "frames": [
///         { "sourceRect": { "x": 0, "y": 0, "width": 8, "height": 8 }, "durationMs": 50 },
///         { "sourceRect": { "x": 8, "y": 0, "width": 8, "height": 8 }, "durationMs": 50 }
///     ],
///     "sections": [{ "name": "all", "startIndex": 0, "endIndex": 1 }]
/// }"#)?;
///
/// let mut anim = sheet.into_animation()?;
/// anim.play_section("all")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnimationSheet {
	/// Frame table, in playback index order
	#[serde(alias = "Frames")]
	pub frames: Vec<Frame>,
	/// Named sections over the frame table
	#[serde(alias = "Sections", default)]
	pub sections: Vec<AnimationSection>,
}

impl AnimationSheet {
	/// Parses a sheet from a JSON document.
	///
	/// # Errors
	///
	/// Returns [`SheetError::Json`] if the document is malformed.
	pub fn from_json_str(json: &str) -> Result<Self, SheetError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Parses a sheet from a YAML document.
	///
	/// # Errors
	///
	/// Returns [`SheetError::Yaml`] if the document is malformed.
	pub fn from_yaml_str(yaml: &str) -> Result<Self, SheetError> {
		Ok(serde_yaml::from_str(yaml)?)
	}

	/// Opens a sidecar file, choosing the format from its extension.
	///
	/// # Arguments
	///
	/// * `path` - Path to a `.json`, `.yaml` or `.yml` file
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - the extension is not recognised
	/// - the file cannot be read
	/// - the document is malformed
	pub fn open(path: impl AsRef<Path>) -> Result<Self, SheetError> {
		let path = path.as_ref();
		let extension = path
			.extension()
			.and_then(|ext| ext.to_str())
			.map(str::to_ascii_lowercase)
			.unwrap_or_default();

		let sheet = match extension.as_str() {
			"json" => Self::from_json_str(&std::fs::read_to_string(path)?)?,
			"yaml" | "yml" => Self::from_yaml_str(&std::fs::read_to_string(path)?)?,
			_ => return Err(SheetError::UnsupportedExtension(extension)),
		};

		debug!(
			"Loaded sheet {}: {} frames, {} sections",
			path.display(),
			sheet.frames.len(),
			sheet.sections.len()
		);
		Ok(sheet)
	}

	/// Checks the tables without building an animation.
	///
	/// # Errors
	///
	/// Returns the same errors [`Animation::new`] would.
	pub fn validate(&self) -> Result<(), AnimationError> {
		if let Some(index) = self.frames.iter().position(|frame| frame.duration_ms() == 0) {
			return Err(AnimationError::InvalidFrameDuration {
				index,
			});
		}
		SectionRegistry::new(self.sections.iter().cloned(), self.frames.len()).map(|_| ())
	}

	/// Total duration of the frame table in milliseconds.
	pub fn total_duration_ms(&self) -> u64 {
		self.frames.iter().map(|frame| u64::from(frame.duration_ms())).sum()
	}

	/// Builds an animation with default playback settings.
	///
	/// # Errors
	///
	/// Returns an error if the tables are invalid (see [`Animation::new`]).
	pub fn into_animation(self) -> Result<Animation, AnimationError> {
		Animation::new(self.frames, self.sections)
	}

	/// Builds an animation with explicit playback settings.
	///
	/// # Errors
	///
	/// Returns an error if the tables or the settings are invalid.
	pub fn into_animation_with_config(
		self,
		config: &PlaybackConfig,
	) -> Result<Animation, AnimationError> {
		Animation::with_config(self.frames, self.sections, config)
	}
}

impl TryFrom<AnimationSheet> for Animation {
	type Error = AnimationError;

	fn try_from(sheet: AnimationSheet) -> Result<Self, Self::Error> {
		sheet.into_animation()
	}
}
