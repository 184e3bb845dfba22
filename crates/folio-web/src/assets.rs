use crate::app::SharedApp;
use crate::overlay;
use folio_core::{AssetKind, GalleryContent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Load every image the content references through the browser's image
/// cache, reporting each to the loading tracker as it settles.
pub fn preload(app: &SharedApp, content: &GalleryContent) {
    for raw in &content.items {
        probe(app, &raw.url, AssetKind::Image);
    }
    if let Some(logo) = &content.logo_url {
        probe(app, logo, AssetKind::Svg);
    }
}

fn probe(app: &SharedApp, url: &str, kind: AssetKind) {
    let img = match web::HtmlImageElement::new() {
        Ok(img) => img,
        Err(e) => {
            log::warn!("[assets] cannot create image for {}: {:?}", url, e);
            return;
        }
    };
    app.borrow_mut().loading.register(kind);

    let settle = |app: SharedApp, ok: bool| {
        Closure::wrap(Box::new(move || {
            let events = {
                let mut a = app.borrow_mut();
                a.loading.settle(ok);
                a.loading.take_events()
            };
            if let Some(doc) = crate::dom::window_document() {
                overlay::apply_loading(&doc, &events);
            }
        }) as Box<dyn FnMut()>)
    };
    let on_load = settle(app.clone(), true);
    let on_error = settle(app.clone(), false);
    img.set_onload(Some(on_load.as_ref().unchecked_ref()));
    img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_load.forget();
    on_error.forget();

    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    log::debug!("[assets] loading {:?} {}", kind, url);
}
