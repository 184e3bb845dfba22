#![cfg(target_arch = "wasm32")]
//! Browser host for the folio stage: DOM wiring, hash routing, image
//! preloading and a WebGPU renderer around `folio-core`.

mod app;
mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod route;

use app::App;
use events::InputWiring;
use folio_core::content::parse_projects;
use folio_core::route::works_slug;
use folio_core::{GalleryContent, StageConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

thread_local! {
    static WIRING: RefCell<Option<InputWiring>> = const { RefCell::new(None) };
    // content handed over before the stage finished mounting
    static QUEUED: RefCell<Option<GalleryContent>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Hand the stage a project list (the JSON payload of the content
/// provider). The project matching `/works/<slug>` in the current path is
/// shown, falling back to the first one.
#[wasm_bindgen]
pub fn load_gallery(payload: JsValue) {
    let json = js_sys::JSON::stringify(&payload)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_default();
    let pathname = web::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    let content = match parse_projects(&json, works_slug(&pathname)) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("[content] {}; showing an empty gallery", e);
            GalleryContent::empty()
        }
    };
    let wiring = WIRING.with(|w| w.borrow().clone());
    match wiring {
        Some(wiring) => apply_content(&wiring, content),
        None => QUEUED.with(|q| *q.borrow_mut() = Some(content)),
    }
}

fn apply_content(wiring: &InputWiring, content: GalleryContent) {
    wiring.app.borrow_mut().set_content(&content);
    assets::preload(&wiring.app, &content);
    wiring.flush();
}

fn read_config(document: &web::Document) -> StageConfig {
    match dom::script_text(document, constants::CONFIG_SCRIPT_ID) {
        Some(text) => StageConfig::from_json_str(&text).unwrap_or_else(|e| {
            log::warn!("[config] {}; using defaults", e);
            StageConfig::default()
        }),
        None => StageConfig::default(),
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::sync_canvas_backing_size(&canvas);

    let app = App::shared(read_config(&document));
    let wiring = InputWiring::new(canvas.clone(), app);
    wiring.wire_all();
    // deep link: a route present at load is applied once content arrives
    wiring.sync_route();

    WIRING.with(|w| *w.borrow_mut() = Some(wiring.clone()));
    if let Some(content) = QUEUED.with(|q| q.borrow_mut().take()) {
        apply_content(&wiring, content);
    }

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("[gpu] no renderer; the stage keeps running without output");
    }
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(wiring, gpu)));
    frame::start_loop(frame_ctx);
    Ok(())
}
