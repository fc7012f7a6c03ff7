//! Listener delivery

use std::{cell::RefCell, rc::Rc};

use pixanim::prelude::*;

use crate::strip;

/// Records every event it receives
struct Recorder {
	events: Rc<RefCell<Vec<PlaybackEvent>>>,
}

impl PlaybackListener for Recorder {
	fn on_event(&mut self, event: &PlaybackEvent) {
		self.events.borrow_mut().push(event.clone());
	}
}

#[test_log::test]
fn test_listeners_see_returned_events_in_order() {
	let recorded = Rc::new(RefCell::new(Vec::new()));
	let mut anim = Animation::from_frames(strip(2)).unwrap();
	anim.subscribe(Recorder {
		events: Rc::clone(&recorded),
	});

	let closure_log = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&closure_log);
	anim.subscribe(move |event: &PlaybackEvent| sink.borrow_mut().push(event.to_string()));
	assert_eq!(anim.listener_count(), 2);

	anim.play();
	let events = anim.update(250.0).unwrap();

	assert_eq!(
		events,
		[
			PlaybackEvent::FrameChanged {
				index: 1
			},
			PlaybackEvent::Finished {
				section: DEFAULT_SECTION.to_string()
			},
			PlaybackEvent::FrameChanged {
				index: 1
			},
		]
	);
	assert_eq!(*recorded.borrow(), events);
	assert_eq!(*closure_log.borrow(), ["FrameChanged(1)", "Finished(default)", "FrameChanged(1)"]);
}

#[test]
fn test_cleared_listeners_receive_nothing() {
	let recorded = Rc::new(RefCell::new(Vec::new()));
	let mut anim = Animation::from_frames(strip(3)).unwrap();
	anim.subscribe(Recorder {
		events: Rc::clone(&recorded),
	});
	anim.clear_listeners();
	assert_eq!(anim.listener_count(), 0);

	anim.play();
	assert_eq!(anim.update(100.0).unwrap().len(), 1);
	assert!(recorded.borrow().is_empty());
}

#[test]
fn test_paused_update_notifies_nobody() {
	let recorded = Rc::new(RefCell::new(Vec::new()));
	let mut anim = Animation::from_frames(strip(3)).unwrap();
	anim.subscribe(Recorder {
		events: Rc::clone(&recorded),
	});

	anim.update(500.0).unwrap();
	assert!(recorded.borrow().is_empty());
}
