use crate::dom::{self, PageElements};
use web_sys as web;

#[inline]
pub fn set_opacity(el: &web::HtmlElement, opacity: f64) {
    dom::set_style(el, "opacity", &format!("{}", opacity));
}

/// Copy the background video into the snapshot canvas and show it.
pub fn show_snapshot(page: &PageElements, width: u32, height: u32) -> anyhow::Result<()> {
    let canvas = &page.snapshot_canvas;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx = dom::context_2d(canvas)?;
    let video = &page.background_video;
    ctx.draw_image_with_html_video_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
        video,
        0.0,
        0.0,
        video.video_width() as f64,
        video.video_height() as f64,
        0.0,
        0.0,
        width as f64,
        height as f64,
    )
    .map_err(|e| anyhow::anyhow!("snapshot drawImage failed: {:?}", e))?;
    dom::set_style(&page.snapshot_container, "display", "block");
    Ok(())
}

#[inline]
pub fn hide_snapshot(page: &PageElements) {
    dom::set_style(&page.snapshot_container, "display", "none");
}
