use crate::core::{InitialVolumes, Session, Track};
use crate::dom;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The three `<audio>` elements on the page.
#[derive(Clone)]
pub struct Tracks {
    pub ambient: web::HtmlAudioElement,
    pub birdsong: web::HtmlAudioElement,
    pub click: web::HtmlAudioElement,
}

impl Tracks {
    pub fn lookup(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            ambient: dom::element_by_id(document, dom::AMBIENT_AUDIO_ID)?,
            birdsong: dom::element_by_id(document, dom::BIRDSONG_AUDIO_ID)?,
            click: dom::element_by_id(document, dom::CLICK_AUDIO_ID)?,
        })
    }

    pub fn apply_initial_volumes(&self, volumes: &InitialVolumes) {
        self.ambient.set_volume(volumes.ambient);
        self.birdsong.set_volume(volumes.birdsong);
    }

    pub fn element(&self, track: Track) -> &web::HtmlAudioElement {
        match track {
            Track::Ambient => &self.ambient,
            Track::Birdsong => &self.birdsong,
        }
    }

    #[inline]
    pub fn set_ambient_volume(&self, volume: f64) {
        self.ambient.set_volume(volume.clamp(0.0, 1.0));
    }

    /// Rewind and play the click sound; overlapping clicks restart it.
    pub fn play_click(&self) {
        self.click.set_current_time(0.0);
        let click = self.click.clone();
        spawn_local(async move {
            if let Err(e) = play(&click).await {
                log::debug!("[audio] click sound failed: {}", e);
            }
        });
    }
}

/// `play()` and wait for the returned promise.
pub async fn play(el: &web::HtmlMediaElement) -> anyhow::Result<()> {
    let promise = el.play().map_err(|e| anyhow!("{:?}", e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Start `track` unless it already started or a start is pending. On success
/// `on_started` runs; a rejection leaves the track retryable on the next click.
pub fn start_once(
    track: Track,
    tracks: &Tracks,
    session: Rc<RefCell<Session>>,
    on_started: impl FnOnce() + 'static,
) {
    if !session.borrow_mut().state_mut().latch_mut(track).try_begin() {
        return;
    }
    let el = tracks.element(track).clone();
    spawn_local(async move {
        match play(&el).await {
            Ok(()) => {
                session.borrow_mut().state_mut().latch_mut(track).succeed();
                log::info!("[audio] {:?} started", track);
                on_started();
            }
            Err(e) => {
                session.borrow_mut().state_mut().latch_mut(track).fail();
                log::warn!("[audio] {:?} failed to start: {}", track, e);
            }
        }
    });
}
