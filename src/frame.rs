use crate::audio::Tracks;
use crate::camera::MotionCapture;
use crate::core::{DebounceTimer, Session};
use crate::dom::PageElements;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame dispatcher reads or writes.
pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub capture: Rc<RefCell<Option<MotionCapture>>>,
    pub tracks: Tracks,
    pub page: PageElements,
    pub snapshot_timer: Rc<RefCell<DebounceTimer>>,
}

impl FrameContext {
    pub fn frame(&mut self, now_ms: f64) {
        let frame = self.capture.borrow().as_ref().and_then(|c| c.grab_frame());
        let out = self.session.borrow_mut().tick(now_ms, frame);

        if let Some(v) = out.volume {
            self.tracks.set_ambient_volume(v);
        }
        if let Some(opacity) = out.overlay_opacity {
            overlay::set_opacity(&self.page.overlay_image, opacity);
        }
        if self.snapshot_timer.borrow_mut().poll(now_ms) {
            overlay::hide_snapshot(&self.page);
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Run `frame_ctx` on every animation frame for the page lifetime.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame(instant::now());
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
