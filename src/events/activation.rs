use crate::audio::{self, Tracks};
use crate::camera::{self, MotionCapture};
use crate::core::constants::{SNAPSHOT_DISPLAY_MS, SNAPSHOT_HEIGHT, SNAPSHOT_WIDTH};
use crate::core::{DebounceTimer, Session, Track};
use crate::dom::{self, PageElements};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct ActivationWiring {
    pub session: Rc<RefCell<Session>>,
    pub tracks: Tracks,
    pub page: PageElements,
    pub capture: Rc<RefCell<Option<MotionCapture>>>,
    pub snapshot_timer: Rc<RefCell<DebounceTimer>>,
}

/// A click anywhere starts the soundscape and takes a snapshot.
pub fn wire_activation_click(document: &web::Document, w: ActivationWiring) {
    dom::add_document_listener(document, "click", move |_ev| handle_activation(&w));
}

fn handle_activation(w: &ActivationWiring) {
    w.tracks.play_click();

    audio::start_once(Track::Birdsong, &w.tracks, w.session.clone(), || {});

    let session = w.session.clone();
    let capture = w.capture.clone();
    audio::start_once(Track::Ambient, &w.tracks, w.session.clone(), move || {
        camera::start_motion_detection(session, capture);
    });

    match overlay::show_snapshot(&w.page, SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT) {
        Ok(()) => w
            .snapshot_timer
            .borrow_mut()
            .arm(instant::now(), SNAPSHOT_DISPLAY_MS),
        Err(e) => log::warn!("[snapshot] {:?}", e),
    }
}
