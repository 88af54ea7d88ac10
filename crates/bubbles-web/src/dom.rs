//! Window/canvas helpers. Logical units are CSS pixels; the canvas backing
//! store is kept at CSS size × devicePixelRatio and the render pass applies
//! the matching transform.

use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .max(1.0)
}

/// Resizes the backing store to CSS size × devicePixelRatio and returns the
/// logical (CSS pixel) dimensions.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let dpr = device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_css = rect.width().max(1.0);
    let h_css = rect.height().max(1.0);
    canvas.set_width((w_css * dpr) as u32);
    canvas.set_height((h_css * dpr) as u32);
    (w_css as f32, h_css as f32)
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?;
    ctx.dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}
