use crate::audio::Tracks;
use crate::core::{DebounceTimer, Session, SessionConfig};
use crate::dom::{self, PageElements};
use crate::{events, frame, overlay};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("komorebi-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let tracks = Tracks::lookup(&document)?;
    let page = PageElements::lookup(&document)?;

    let config = SessionConfig::default();
    tracks.apply_initial_volumes(&config.initial_volume);

    let session = Rc::new(RefCell::new(Session::new(config)));
    let initial = session.borrow_mut().start(instant::now());
    if let Some(opacity) = initial.overlay_opacity {
        overlay::set_opacity(&page.overlay_image, opacity);
    }

    let capture = Rc::new(RefCell::new(None));
    let snapshot_timer = Rc::new(RefCell::new(DebounceTimer::new()));

    events::wire_activity_listeners(&document, session.clone(), page.overlay_image.clone());
    events::wire_activation_click(
        &document,
        events::ActivationWiring {
            session: session.clone(),
            tracks: tracks.clone(),
            page: page.clone(),
            capture: capture.clone(),
            snapshot_timer: snapshot_timer.clone(),
        },
    );

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        session,
        capture,
        tracks,
        page,
        snapshot_timer,
    })));
    log::info!("[overlay] inactivity timer armed");
    Ok(())
}
