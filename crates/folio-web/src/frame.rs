use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use crate::events::InputWiring;
use crate::overlay;
use crate::render;
use folio_core::Instance;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub wiring: InputWiring,
    pub gpu: Option<render::GpuState<'a>>,
    pub instances: Vec<Instance>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn new(wiring: InputWiring, gpu: Option<render::GpuState<'a>>) -> Self {
        Self {
            wiring,
            gpu,
            instances: Vec::new(),
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now_instant = Instant::now();
        let dt_sec = (now_instant - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now_instant;

        let (effects, loading_events, projection_dirty, camera, light) = {
            let mut app = self.wiring.app.borrow_mut();
            let now = app.now();
            app.loading.poll(now);
            let loading_events = app.loading.take_events();
            let effects = app.stage.frame(now, dt_sec);
            app.stage.draw_list(&mut self.instances);
            let light = app.stage.ambience().light_position;
            let choreo = app.stage.gallery_mut().choreographer_mut();
            let dirty = choreo.take_projection_dirty();
            (effects, loading_events, dirty, choreo.camera().clone(), light)
        };

        if !loading_events.is_empty() {
            if let Some(doc) = dom::window_document() {
                overlay::apply_loading(&doc, &loading_events);
            }
        }
        self.wiring.apply(effects);

        if let Some(g) = &mut self.gpu {
            let resized =
                g.resize_if_needed(self.wiring.canvas.width(), self.wiring.canvas.height());
            if resized || projection_dirty {
                g.update_projection(&camera);
            }
            match g.render(&camera, light, &self.instances) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[gpu] surface lost; reconfiguring next frame");
                }
                Err(e) => log::error!("[gpu] render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // the surface borrows the canvas for the page lifetime
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
