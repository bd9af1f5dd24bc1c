use crate::core::{CaptureAccess, FrameBuffer, MotionConfig, Session};
use crate::dom;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

// HTMLMediaElement.HAVE_CURRENT_DATA
const HAVE_CURRENT_DATA: u16 = 2;

/// Hidden camera `<video>` plus the small canvas frames are sampled through.
pub struct MotionCapture {
    video: web::HtmlVideoElement,
    ctx: web::CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl MotionCapture {
    pub fn create(document: &web::Document, config: &MotionConfig) -> anyhow::Result<Self> {
        let video = document
            .create_element("video")
            .map_err(|e| anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlVideoElement>()
            .map_err(|e| anyhow!("{:?}", e))?;
        video.set_autoplay(true);
        video.set_muted(true);
        _ = video.set_attribute("playsinline", "true");
        dom::set_style(&video, "display", "none");
        let body = document.body().ok_or_else(|| anyhow!("no body"))?;
        body.append_child(&video).map_err(|e| anyhow!("{:?}", e))?;

        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow!("{:?}", e))?;
        canvas.set_width(config.width);
        canvas.set_height(config.height);
        let ctx = dom::context_2d(&canvas)?;

        Ok(Self {
            video,
            ctx,
            width: config.width,
            height: config.height,
        })
    }

    pub fn attach(&self, stream: &web::MediaStream) {
        self.video.set_src_object(Some(stream));
    }

    /// Draw the current camera frame into the sampling grid. `None` until the
    /// video has data.
    pub fn grab_frame(&self) -> Option<FrameBuffer> {
        if self.video.ready_state() < HAVE_CURRENT_DATA {
            return None;
        }
        let (w, h) = (self.width as f64, self.height as f64);
        if let Err(e) = self
            .ctx
            .draw_image_with_html_video_element_and_dw_and_dh(&self.video, 0.0, 0.0, w, h)
        {
            log::warn!("[camera] drawImage failed: {:?}", e);
            return None;
        }
        let image = match self.ctx.get_image_data(0.0, 0.0, w, h) {
            Ok(img) => img,
            Err(e) => {
                log::warn!("[camera] getImageData failed: {:?}", e);
                return None;
            }
        };
        match FrameBuffer::new(self.width, self.height, image.data().0) {
            Ok(frame) => Some(frame),
            Err(e) => {
                log::warn!("[camera] {}", e);
                None
            }
        }
    }
}

/// Ask for a camera stream. Never fails; the outcome is typed instead.
pub async fn request_camera() -> CaptureAccess<web::MediaStream> {
    let devices = match web::window().map(|w| w.navigator().media_devices()) {
        Some(Ok(d)) => d,
        _ => return CaptureAccess::Unsupported,
    };
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    let promise = match devices.get_user_media_with_constraints(&constraints) {
        Ok(p) => p,
        Err(e) => return CaptureAccess::Denied(format!("{:?}", e)),
    };
    match JsFuture::from(promise).await {
        Ok(v) => match v.dyn_into::<web::MediaStream>() {
            Ok(stream) => CaptureAccess::Granted(stream),
            Err(_) => CaptureAccess::Unsupported,
        },
        Err(e) => CaptureAccess::Denied(format!("{:?}", e)),
    }
}

/// Create the capture elements, request the camera and, when granted, hand
/// the capture to the frame loop through `slot`.
pub fn start_motion_detection(session: Rc<RefCell<Session>>, slot: Rc<RefCell<Option<MotionCapture>>>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let config = session.borrow().config().motion;
    let capture = match MotionCapture::create(&document, &config) {
        Ok(c) => c,
        Err(e) => {
            log::error!("[camera] capture setup failed: {:?}", e);
            return;
        }
    };
    spawn_local(async move {
        let access = request_camera().await;
        if session.borrow_mut().on_capture_access(&access) {
            if let CaptureAccess::Granted(stream) = &access {
                capture.attach(stream);
            }
            *slot.borrow_mut() = Some(capture);
        }
    });
}
