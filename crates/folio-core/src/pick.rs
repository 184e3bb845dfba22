use crate::constants::{FRAME_HEIGHT, FRAME_WIDTH};
use crate::item::{GalleryItem, ItemId};
use glam::Vec3;

/// Ray against a frame's face: the item-local XY rectangle of width
/// [`FRAME_WIDTH`] and height [`FRAME_HEIGHT`] standing on the item origin.
/// Returns the ray parameter of the hit.
#[inline]
pub fn ray_frame(
    ray_origin: Vec3,
    ray_dir: Vec3,
    item: &GalleryItem,
    group_offset: Vec3,
) -> Option<f32> {
    let inv = item.world_transform(group_offset).inverse();
    let o = inv.transform_point3(ray_origin);
    let d = inv.transform_vector3(ray_dir);
    if d.z.abs() < 1e-6 {
        return None;
    }
    let t = -o.z / d.z;
    if t < 0.0 {
        return None;
    }
    let p = o + d * t;
    let inside = p.x.abs() <= FRAME_WIDTH / 2.0 && p.y >= 0.0 && p.y <= FRAME_HEIGHT;
    inside.then_some(t)
}

/// Nearest frame hit by the ray, if any.
pub fn pick_item<'a>(
    items: &'a [GalleryItem],
    ray_origin: Vec3,
    ray_dir: Vec3,
    group_offset: Vec3,
) -> Option<&'a ItemId> {
    let mut best = None::<(&ItemId, f32)>;
    for item in items {
        if let Some(t) = ray_frame(ray_origin, ray_dir, item, group_offset) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((&item.id, t)),
            }
        }
    }
    best.map(|(id, _)| id)
}
