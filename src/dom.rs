use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Element ids expected in index.html
pub const BACKGROUND_VIDEO_ID: &str = "video-background";
pub const SNAPSHOT_CANVAS_ID: &str = "snapshot";
pub const SNAPSHOT_CONTAINER_ID: &str = "snapshot-container";
pub const AMBIENT_AUDIO_ID: &str = "background-music";
pub const BIRDSONG_AUDIO_ID: &str = "bird-audio";
pub const CLICK_AUDIO_ID: &str = "click-sound";
pub const OVERLAY_IMAGE_ID: &str = "komorebi-image";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up `#id` and cast it to the expected element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{} has an unexpected element type: {:?}", id, e))
}

/// Register a document-wide listener that lives for the page lifetime.
pub fn add_document_listener(
    document: &web::Document,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    if let Err(e) = document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("could not listen for '{}': {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Visual elements the page is built around.
#[derive(Clone)]
pub struct PageElements {
    pub background_video: web::HtmlVideoElement,
    pub snapshot_canvas: web::HtmlCanvasElement,
    pub snapshot_container: web::HtmlElement,
    pub overlay_image: web::HtmlElement,
}

impl PageElements {
    pub fn lookup(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            background_video: element_by_id(document, BACKGROUND_VIDEO_ID)?,
            snapshot_canvas: element_by_id(document, SNAPSHOT_CANVAS_ID)?,
            snapshot_container: element_by_id(document, SNAPSHOT_CONTAINER_ID)?,
            overlay_image: element_by_id(document, OVERLAY_IMAGE_ID)?,
        })
    }
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))
}
