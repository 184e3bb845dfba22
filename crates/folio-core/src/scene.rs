//! Flat draw list for the renderer: every visible thing is an instanced
//! unit cube with a model matrix and a colour.

use crate::ambience::{hsl_to_rgb, Ambience};
use crate::constants::*;
use crate::gallery::FrameVisual;
use crate::item::GalleryItem;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::prelude::*;

/// Per-instance GPU record. `color.a` is the unlit (emissive) share.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Instance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl Instance {
    pub fn new(model: Mat4, rgb: [f32; 3], emissive: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [rgb[0], rgb[1], rgb[2], emissive],
        }
    }
}

const GOLD: [f32; 3] = [1.0, 0.843, 0.0];
const STAR_RGB: [f32; 3] = [1.0, 1.0, 1.0];
const PLANET_RGB: [f32; 3] = [0.62, 0.6, 0.58];
const LOGO_RGB: [f32; 3] = [0.95, 0.91, 0.84];

/// Fixed star positions on a spherical shell, seeded for reproducibility.
#[derive(Clone, Debug)]
pub struct StarField {
    points: Vec<Vec3>,
}

impl StarField {
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let points = (0..count)
            .map(|_| {
                let r = STAR_RADIUS + rng.gen::<f32>() * STAR_DEPTH;
                let u: f32 = rng.gen_range(-1.0..1.0);
                let theta: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
                let s = (1.0 - u * u).sqrt();
                Vec3::new(s * theta.cos(), u, s * theta.sin()) * r
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }
}

/// Append the frame instances (gold border, matte, image plane) for one item.
pub fn push_frame(
    out: &mut Vec<Instance>,
    item: &GalleryItem,
    visual: &FrameVisual,
    group_offset: Vec3,
    accent: [f32; 3],
) {
    let base = Mat4::from(item.world_transform(group_offset));
    let border = base
        * Mat4::from_scale_rotation_translation(
            Vec3::new(FRAME_WIDTH, FRAME_HEIGHT, FRAME_DEPTH),
            Quat::IDENTITY,
            Vec3::new(0.0, FRAME_HEIGHT / 2.0, 0.0),
        );
    out.push(Instance::new(border, GOLD, 0.0));

    let matte = border
        * Mat4::from_scale_rotation_translation(
            Vec3::new(0.9, 0.93, 0.9),
            Quat::IDENTITY,
            Vec3::new(0.0, 0.0, 0.2),
        );
    out.push(Instance::new(matte, [visual.tint; 3], 1.0));

    let image = border
        * Mat4::from_scale_rotation_translation(
            Vec3::new(visual.image_scale.x, visual.image_scale.y, 0.05),
            Quat::IDENTITY,
            Vec3::new(0.0, 0.0, 0.7),
        );
    out.push(Instance::new(image, accent, 1.0));
}

/// Stable placeholder colour for an item's image plane.
pub fn accent_for(item: &GalleryItem) -> [f32; 3] {
    let hash = item
        .id
        .as_str()
        .bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(b as u32));
    hsl_to_rgb((hash % 360) as f32, 0.45, 0.55)
}

/// Background pieces driven by [`Ambience`].
pub fn push_ambience(
    out: &mut Vec<Instance>,
    ambience: &Ambience,
    stars: &StarField,
    group_offset: Vec3,
    has_logo: bool,
) {
    let star_rot = Quat::from_euler(
        EulerRot::XYZ,
        ambience.star_rotation.x,
        ambience.star_rotation.y,
        0.0,
    );
    for p in stars.points() {
        let model =
            Mat4::from_scale_rotation_translation(Vec3::splat(0.25), Quat::IDENTITY, star_rot * *p);
        out.push(Instance::new(model, STAR_RGB, 1.0));
    }

    let light = Mat4::from_scale_rotation_translation(
        Vec3::splat(0.05),
        Quat::IDENTITY,
        ambience.light_position,
    );
    out.push(Instance::new(light, [1.0, 1.0, 1.0], 1.0));

    let planet = Mat4::from_scale_rotation_translation(
        Vec3::splat(PLANET_RADIUS * 2.0),
        Quat::IDENTITY,
        ambience.planet_position,
    );
    out.push(Instance::new(planet, PLANET_RGB, 0.0));

    let moon = Mat4::from_scale_rotation_translation(
        Vec3::new(50.0 * 0.7, 0.02, 50.0 * 0.7),
        Quat::from_rotation_y(-std::f32::consts::FRAC_PI_3),
        Vec3::from_array(MOON_POSITION) + group_offset,
    );
    out.push(Instance::new(
        moon,
        hsl_to_rgb(ambience.moon_hue_deg, 0.7, 0.5),
        0.0,
    ));

    if has_logo {
        let logo = Mat4::from_scale_rotation_translation(
            Vec3::new(1.0, 1.5, 0.2),
            Quat::from_euler(
                EulerRot::XYZ,
                ambience.logo_tilt.x,
                ambience.logo_tilt.y,
                ambience.logo_tilt.z,
            ),
            Vec3::new(0.0, LOGO_BASE_HEIGHT, 0.0) + ambience.logo_offset + group_offset,
        );
        out.push(Instance::new(logo, LOGO_RGB, 0.3));
    }
}
