use crate::constants::*;
use folio_core::LoadingEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

pub fn set_progress(document: &web::Document, percent: f32) {
    let pct = percent.clamp(0.0, 100.0);
    if let Some(bar) = document.get_element_by_id(LOADING_BAR_ID) {
        let _ = bar.set_attribute("style", &format!("width:{:.0}%", pct));
    }
    if let Some(label) = document.get_element_by_id(LOADING_LABEL_ID) {
        label.set_text_content(Some(&format!("{:.0}%", pct)));
    }
}

pub fn apply_loading(document: &web::Document, events: &[LoadingEvent]) {
    for ev in events {
        match ev {
            LoadingEvent::Started => show_loading(document),
            LoadingEvent::Progress { percent, .. } => set_progress(document, *percent),
            LoadingEvent::Complete => {
                set_progress(document, 100.0);
                hide_loading(document);
            }
        }
    }
}

/// Mirror the focus signal onto `<body>` so page chrome can react to it.
pub fn set_focused(document: &web::Document, focused: bool) {
    let Some(body) = document.body() else {
        return;
    };
    let classes = body.class_list();
    let res = if focused {
        classes.add_1(FOCUSED_BODY_CLASS)
    } else {
        classes.remove_1(FOCUSED_BODY_CLASS)
    };
    if let Err(e) = res {
        log::warn!("[overlay] focus class update failed: {:?}", e);
    }
}

/// Drop the `active` marker from every `[data-item]` element.
pub fn clear_active_markers(document: &web::Document) {
    let Ok(nodes) = document.query_selector_all(ACTIVE_MARKER_SELECTOR) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            let _ = el.class_list().remove_1(ACTIVE_CLASS);
        }
    }
}

#[inline]
pub fn set_pointer_cursor(canvas: &web::HtmlCanvasElement, hovering: bool) {
    let cursor = if hovering { "pointer" } else { "auto" };
    let _ = canvas.style().set_property("cursor", cursor);
}
