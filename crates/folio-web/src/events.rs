use crate::app::SharedApp;
use crate::dom;
use crate::input;
use crate::overlay;
use folio_core::{Effect, Effects};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Browser listeners plus the scoped wheel subscription. The wheel handler
/// is only attached while a frame is focused.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub app: SharedApp,
    wheel_fn: Rc<RefCell<Option<js_sys::Function>>>,
    wheel_attached: Rc<Cell<bool>>,
}

impl InputWiring {
    pub fn new(canvas: web::HtmlCanvasElement, app: SharedApp) -> Self {
        Self {
            canvas,
            app,
            wheel_fn: Rc::new(RefCell::new(None)),
            wheel_attached: Rc::new(Cell::new(false)),
        }
    }

    pub fn wire_all(&self) {
        self.wire_resize();
        self.wire_pointermove();
        self.wire_click();
        self.wire_hashchange();
        self.build_wheel_handler();
    }

    fn wire_resize(&self) {
        let Some(window) = web::window() else {
            return;
        };
        let canvas = self.canvas.clone();
        dom::listen::<web::Event>(&window, "resize", move |_| {
            dom::sync_canvas_backing_size(&canvas);
        });
    }

    fn wire_pointermove(&self) {
        let Some(window) = web::window() else {
            return;
        };
        let w = self.clone();
        dom::listen::<web::PointerEvent>(&window, "pointermove", move |ev| {
            let rig_ndc = input::pointer_window_ndc(&ev);
            let canvas_ndc = input::pointer_canvas_ndc(&ev, &w.canvas);
            let aspect = input::canvas_aspect(&w.canvas);
            let hovering = {
                let mut app = w.app.borrow_mut();
                app.stage.set_pointer(rig_ndc);
                app.stage.pointer_over(canvas_ndc, aspect);
                app.stage.gallery().hovered().is_some()
            };
            overlay::set_pointer_cursor(&w.canvas, hovering);
        });
    }

    fn wire_click(&self) {
        let w = self.clone();
        dom::listen::<web::MouseEvent>(&self.canvas, "click", move |ev| {
            let ndc = input::pointer_canvas_ndc(&ev, &w.canvas);
            let aspect = input::canvas_aspect(&w.canvas);
            {
                let mut app = w.app.borrow_mut();
                let now = app.now();
                app.stage.click(ndc, aspect, now);
            }
            w.flush();
        });
    }

    fn wire_hashchange(&self) {
        let Some(window) = web::window() else {
            return;
        };
        let w = self.clone();
        dom::listen::<web::Event>(&window, "hashchange", move |_| {
            w.sync_route();
        });
    }

    /// Reconcile the stage with the current hash route.
    pub fn sync_route(&self) {
        {
            let mut app = self.app.borrow_mut();
            let now = app.now();
            app.stage.gallery_mut().sync_route(now);
        }
        self.flush();
    }

    fn build_wheel_handler(&self) {
        let w = self.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            {
                let mut app = w.app.borrow_mut();
                let now = app.now();
                app.stage.gallery_mut().wheel(ev.delta_y(), now);
            }
            w.flush();
        }) as Box<dyn FnMut(web::WheelEvent)>);
        let f: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        *self.wheel_fn.borrow_mut() = Some(f);
        closure.forget();
    }

    fn subscribe_wheel(&self) {
        if self.wheel_attached.get() {
            return;
        }
        let (Some(window), Some(f)) = (web::window(), self.wheel_fn.borrow().clone()) else {
            return;
        };
        if window.add_event_listener_with_callback("wheel", &f).is_ok() {
            self.wheel_attached.set(true);
            log::debug!("[input] wheel subscribed");
        }
    }

    fn unsubscribe_wheel(&self) {
        if !self.wheel_attached.get() {
            return;
        }
        let (Some(window), Some(f)) = (web::window(), self.wheel_fn.borrow().clone()) else {
            return;
        };
        if window.remove_event_listener_with_callback("wheel", &f).is_ok() {
            self.wheel_attached.set(false);
            log::debug!("[input] wheel unsubscribed");
        }
    }

    /// Drain effects queued by event handlers and apply them.
    pub fn flush(&self) {
        let effects = self.app.borrow_mut().stage.gallery_mut().take_effects();
        self.apply(effects);
    }

    pub fn apply(&self, effects: Effects) {
        if effects.is_empty() {
            return;
        }
        let document = dom::window_document();
        for effect in effects {
            match effect {
                Effect::SubscribeWheel => self.subscribe_wheel(),
                Effect::UnsubscribeWheel => self.unsubscribe_wheel(),
                Effect::FocusChanged(focused) => {
                    if let Some(doc) = &document {
                        overlay::set_focused(doc, focused);
                    }
                }
                Effect::ClearActiveMarkers => {
                    if let Some(doc) = &document {
                        overlay::clear_active_markers(doc);
                    }
                }
            }
        }
    }
}
