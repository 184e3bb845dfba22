//! Frame gallery controller: owns the items and routes pointer, wheel and
//! navigation input into the choreography.

use crate::choreo::{Choreographer, Effects, InteractionState};
use crate::config::StageConfig;
use crate::constants::{FRAME_TINT_HOVER, HOVER_DAMP_RATE, IMAGE_SCALE_HOVER, IMAGE_SCALE_IDLE};
use crate::content::GalleryContent;
use crate::easing::{damp, damp_factor};
use crate::item::{build_items, GalleryItem, ItemId};
use crate::rig::IdleRig;
use crate::route::RouteSignal;
use fnv::FnvHashMap;
use glam::Vec2;

/// Per-frame hover highlight, eased independently of the choreography.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameVisual {
    pub image_scale: Vec2,
    /// 1.0 is white, lower is greyer.
    pub tint: f32,
}

impl Default for FrameVisual {
    fn default() -> Self {
        Self {
            image_scale: Vec2::from_array(IMAGE_SCALE_IDLE),
            tint: 1.0,
        }
    }
}

pub struct Gallery<R: RouteSignal> {
    config: StageConfig,
    items: Vec<GalleryItem>,
    index: FnvHashMap<ItemId, usize>,
    visuals: Vec<FrameVisual>,
    hovered: Option<ItemId>,
    logo_url: Option<String>,
    /// Route id seen before its item existed; resolved on the next content.
    pending: Option<String>,
    route: R,
    last_route: Option<String>,
    choreo: Choreographer,
}

impl<R: RouteSignal> Gallery<R> {
    pub fn new(config: StageConfig, route: R, rig: &impl IdleRig) -> Self {
        let choreo = Choreographer::new(&config, rig);
        Self {
            config,
            items: Vec::new(),
            index: FnvHashMap::default(),
            visuals: Vec::new(),
            hovered: None,
            logo_url: None,
            pending: None,
            route,
            last_route: None,
            choreo,
        }
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn visuals(&self) -> &[FrameVisual] {
        &self.visuals
    }

    pub fn item(&self, id: &str) -> Option<&GalleryItem> {
        self.index.get(id).and_then(|&i| self.items.get(i))
    }

    pub fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref()
    }

    pub fn hovered(&self) -> Option<&ItemId> {
        self.hovered.as_ref()
    }

    pub fn choreographer(&self) -> &Choreographer {
        &self.choreo
    }

    pub fn choreographer_mut(&mut self) -> &mut Choreographer {
        &mut self.choreo
    }

    pub fn state(&self) -> InteractionState {
        self.choreo.state()
    }

    /// The "any item focused" signal for sibling systems.
    pub fn is_focused(&self) -> bool {
        self.choreo.is_focused()
    }

    /// Currently selected item, if it resolved.
    pub fn selected(&self) -> Option<&GalleryItem> {
        self.choreo
            .focused_item()
            .and_then(|id| self.item(id.as_str()))
    }

    pub fn pending_selection(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn take_effects(&mut self) -> Effects {
        self.choreo.take_effects()
    }

    /// Replace the gallery wholesale with freshly laid-out items.
    pub fn set_content(&mut self, content: &GalleryContent, now: f64) {
        self.items = build_items(content, self.config.layout_radius);
        self.index = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.id.clone(), i))
            .collect();
        self.visuals = vec![FrameVisual::default(); self.items.len()];
        self.logo_url = content.logo_url.clone();
        if self
            .hovered
            .as_ref()
            .is_some_and(|id| !self.index.contains_key(id))
        {
            self.hovered = None;
        }
        log::info!("[gallery] content replaced, items={}", self.items.len());

        let focused = self.choreo.focus_target().map(|t| t.item.clone());
        if let Some(id) = focused {
            match self.index.get(&id).map(|&i| self.items[i].clone()) {
                Some(item) => self.choreo.refresh_target(&item, &self.config),
                None => {
                    log::info!("[gallery] focused item {id} vanished");
                    if self.choreo.release(now) {
                        self.write_route(None);
                    }
                }
            }
        }
        if let Some(pending) = self.pending.take() {
            self.select(&pending, now);
        }
    }

    /// Pointer entered (`Some`) or left (`None`) a frame.
    pub fn hover(&mut self, id: Option<&ItemId>) {
        self.hovered = id.filter(|id| self.index.contains_key(*id)).cloned();
    }

    /// Click on a frame: toggles focus on it and updates the route.
    pub fn click_item(&mut self, id: &ItemId, now: f64) {
        if self.choreo.focused_item() == Some(id) {
            if self.choreo.release(now) {
                self.write_route(None);
            }
            return;
        }
        match self.item(id.as_str()).cloned() {
            Some(item) => {
                if self.choreo.focus(&item, &self.config) {
                    self.write_route(Some(id.as_str()));
                }
            }
            None => log::warn!("[gallery] click on unknown item {id}"),
        }
    }

    /// Click that hit no frame.
    pub fn click_background(&mut self, now: f64) {
        if self.choreo.release(now) {
            self.write_route(None);
        }
    }

    pub fn wheel(&mut self, delta_y: f64, now: f64) {
        if self.choreo.wheel(delta_y, now) {
            self.write_route(None);
        }
    }

    /// React to an external change of the route signal.
    pub fn sync_route(&mut self, now: f64) {
        let current = self.route.get();
        if current == self.last_route {
            return;
        }
        self.last_route = current.clone();
        match current {
            Some(id) => self.select(&id, now),
            None => {
                self.pending = None;
                self.choreo.release(now);
            }
        }
    }

    /// Absolute selection by id (navigation semantics, never toggles).
    fn select(&mut self, id: &str, now: f64) {
        match self.item(id).cloned() {
            Some(item) => {
                self.pending = None;
                self.choreo.focus(&item, &self.config);
            }
            None => {
                log::info!("[gallery] route names unknown item {id}, waiting for content");
                self.pending = Some(id.to_owned());
                self.choreo.release(now);
            }
        }
    }

    /// User-driven route write; supersedes any deep link still waiting for content.
    fn write_route(&mut self, id: Option<&str>) {
        self.pending = None;
        self.route.set(id);
        self.last_route = id.map(str::to_owned);
    }

    /// Ease hover highlights; independent of the focus state.
    pub fn update_visuals(&mut self, dt: f32) {
        let k = damp_factor(HOVER_DAMP_RATE, dt);
        let active = self.choreo.focused_item();
        for (item, visual) in self.items.iter().zip(self.visuals.iter_mut()) {
            let hovered = self.hovered.as_ref() == Some(&item.id);
            let is_active = active == Some(&item.id);
            let scale = if hovered && !is_active {
                IMAGE_SCALE_HOVER
            } else {
                IMAGE_SCALE_IDLE
            };
            visual.image_scale = visual.image_scale.lerp(Vec2::from_array(scale), k);
            let tint = if hovered { FRAME_TINT_HOVER } else { 1.0 };
            visual.tint = damp(visual.tint, tint, HOVER_DAMP_RATE, dt);
        }
    }
}
