//! Playback notifications.
//!
//! [`Animation::update`](super::Animation::update) returns the events it emitted,
//! in order, and also forwards each one to every registered [`PlaybackListener`].

/// Something observable that happened while the timeline advanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
	/// A frame boundary was crossed.
	///
	/// Emitted once per crossing. When a non-looping section finishes, this is
	/// also emitted (after [`PlaybackEvent::Finished`]) with the unchanged index,
	/// unless disabled through
	/// [`PlaybackConfig::frame_changed_on_finish`](super::PlaybackConfig::frame_changed_on_finish).
	FrameChanged {
		/// Frame index after the crossing
		index: usize,
	},

	/// A non-looping section reached its terminal boundary.
	Finished {
		/// Name of the section that finished
		section: String,
	},
}

impl PlaybackEvent {
	/// Returns `true` for [`PlaybackEvent::FrameChanged`].
	pub fn is_frame_changed(&self) -> bool {
		matches!(self, Self::FrameChanged { .. })
	}

	/// Returns `true` for [`PlaybackEvent::Finished`].
	pub fn is_finished(&self) -> bool {
		matches!(self, Self::Finished { .. })
	}
}

impl std::fmt::Display for PlaybackEvent {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::FrameChanged {
				index,
			} => write!(f, "FrameChanged({index})"),
			Self::Finished {
				section,
			} => write!(f, "Finished({section})"),
		}
	}
}

/// Synchronous observer of playback events.
///
/// Listeners are invoked in registration order, from inside `update`. They only
/// see the event, never the animation, so they cannot re-enter `update` on the
/// animation that is notifying them.
///
/// Any `FnMut(&PlaybackEvent)` closure is a listener:
///
/// ```
/// use pixanim_types::anim::{Animation, Frame, PlaybackEvent};
/// use pixanim_types::geometry::Rect;
/// use std::{cell::RefCell, rc::Rc};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut anim = Animation::from_frames(vec![Frame::new(Rect::new(0, 0, 8, 8), 10); 3])?;
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// anim.subscribe(move |event: &PlaybackEvent| sink.borrow_mut().push(event.clone()));
///
/// anim.play();
/// anim.update(10.0)?;
/// assert_eq!(*seen.borrow(), [PlaybackEvent::FrameChanged { index: 1 }]);
/// # Ok(())
/// # }
/// ```
pub trait PlaybackListener {
	/// Called once for every emitted event.
	fn on_event(&mut self, event: &PlaybackEvent);
}

impl<F> PlaybackListener for F
where
	F: FnMut(&PlaybackEvent),
{
	fn on_event(&mut self, event: &PlaybackEvent) {
		self(event);
	}
}
