//! Top-level composition of gallery, rig and ambience with the fixed
//! per-frame evaluation order.

use crate::ambience::Ambience;
use crate::choreo::Effects;
use crate::config::StageConfig;
use crate::content::GalleryContent;
use crate::gallery::Gallery;
use crate::item::ItemId;
use crate::pick;
use crate::rig::PointerRig;
use crate::route::RouteSignal;
use crate::scene::{self, Instance, StarField};
use glam::Vec2;

pub struct Stage<R: RouteSignal> {
    gallery: Gallery<R>,
    rig: PointerRig,
    ambience: Ambience,
    stars: StarField,
}

impl<R: RouteSignal> Stage<R> {
    pub fn new(config: StageConfig, route: R) -> Self {
        let rig = PointerRig::new(&config);
        let stars = StarField::generate(config.star_count, config.star_seed);
        let gallery = Gallery::new(config, route, &rig);
        Self {
            gallery,
            rig,
            ambience: Ambience::default(),
            stars,
        }
    }

    pub fn gallery(&self) -> &Gallery<R> {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut Gallery<R> {
        &mut self.gallery
    }

    pub fn ambience(&self) -> &Ambience {
        &self.ambience
    }

    pub fn rig(&self) -> &PointerRig {
        &self.rig
    }

    pub fn set_content(&mut self, content: &GalleryContent, now: f64) {
        self.gallery.set_content(content, now);
    }

    /// Pointer in normalised window coordinates, fed to the idle rig.
    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.rig.set_pointer(ndc);
    }

    /// Frame under a canvas point given in NDC, using the live camera.
    pub fn pick(&self, ndc: Vec2, aspect: f32) -> Option<ItemId> {
        let camera = self.gallery.choreographer().camera();
        let (ro, rd) = camera.ray_through_ndc(ndc, aspect);
        pick::pick_item(
            self.gallery.items(),
            ro,
            rd,
            self.gallery.config().gallery_offset(),
        )
        .cloned()
    }

    /// Pointer moved over the canvas: refresh the hover highlight.
    pub fn pointer_over(&mut self, ndc: Vec2, aspect: f32) {
        let hit = self.pick(ndc, aspect);
        self.gallery.hover(hit.as_ref());
    }

    /// Canvas click: a frame toggles its focus, a miss releases.
    pub fn click(&mut self, ndc: Vec2, aspect: f32, now: f64) {
        match self.pick(ndc, aspect) {
            Some(id) => self.gallery.click_item(&id, now),
            None => self.gallery.click_background(now),
        }
    }

    /// One rendered frame, evaluated in a fixed order so the projection
    /// reflects this frame's FOV.
    pub fn frame(&mut self, now: f64, dt: f32) -> Effects {
        let choreo = self.gallery.choreographer_mut();
        choreo.ease_fov(dt);
        self.ambience.advance(dt);
        let choreo = self.gallery.choreographer_mut();
        choreo.advance_timeline(now, &mut self.rig);
        choreo.ease_pose(dt, &mut self.rig);
        self.gallery.update_visuals(dt);
        self.gallery.take_effects()
    }

    /// Rebuild the draw list into `out`.
    pub fn draw_list(&self, out: &mut Vec<Instance>) {
        out.clear();
        let offset = self.gallery.config().gallery_offset();
        for (item, visual) in self.gallery.items().iter().zip(self.gallery.visuals()) {
            scene::push_frame(out, item, visual, offset, scene::accent_for(item));
        }
        scene::push_ambience(
            out,
            &self.ambience,
            &self.stars,
            offset,
            self.gallery.logo_url().is_some(),
        );
    }
}
