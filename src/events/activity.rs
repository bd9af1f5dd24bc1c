use crate::core::Session;
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Inputs that count as the visitor still being there.
pub const ACTIVITY_EVENTS: [&str; 3] = ["mousemove", "keydown", "touchstart"];

/// Any tracked input hides the overlay and restarts the inactivity timer.
pub fn wire_activity_listeners(
    document: &web::Document,
    session: Rc<RefCell<Session>>,
    overlay_image: web::HtmlElement,
) {
    for event in ACTIVITY_EVENTS {
        let session = session.clone();
        let overlay_image = overlay_image.clone();
        dom::add_document_listener(document, event, move |_ev| {
            let hidden = session.borrow_mut().on_user_input(instant::now());
            if let Some(opacity) = hidden {
                overlay::set_opacity(&overlay_image, opacity);
            }
        });
    }
}
