use folio_core::camera::ndc_from_px;
use glam::Vec2;
use web_sys as web;

/// Pointer position in the canvas' normalised device coordinates.
#[inline]
pub fn pointer_canvas_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    ndc_from_px(x_css, y_css, rect.width() as f32, rect.height() as f32)
}

/// Pointer position normalised against the whole window, as the idle rig
/// expects.
#[inline]
pub fn pointer_window_ndc(ev: &web::MouseEvent) -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0) as f32;
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0) as f32;
    ndc_from_px(ev.client_x() as f32, ev.client_y() as f32, width, height)
}

#[inline]
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}
