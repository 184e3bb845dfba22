use crate::content::GalleryContent;
use crate::layout;
use fnv::FnvHashSet;
use glam::{Affine3A, EulerRot, Quat, Vec3};
use std::borrow::Borrow;
use std::fmt;
use uuid::Uuid;

/// Stable identity of a gallery item, derived from its source URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// UUID v5 of `url` in the URL namespace.
    pub fn from_url(url: &str) -> Self {
        Self(Uuid::new_v5(&Uuid::NAMESPACE_URL, url.as_bytes()).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One framed image placed on the arc. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub id: ItemId,
    pub position: Vec3,
    /// Euler XYZ, radians.
    pub rotation: Vec3,
    pub name: String,
    pub slug: Option<String>,
    pub url: String,
}

impl GalleryItem {
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Item-local to world, with the gallery group translated by `group_offset`.
    pub fn world_transform(&self, group_offset: Vec3) -> Affine3A {
        Affine3A::from_rotation_translation(self.orientation(), self.position + group_offset)
    }

    pub fn local_to_world(&self, local: Vec3, group_offset: Vec3) -> Vec3 {
        self.world_transform(group_offset).transform_point3(local)
    }
}

/// Lay `content` out on the arc and stamp one item per descriptor, in order.
pub fn build_items(content: &GalleryContent, radius: f32) -> Vec<GalleryItem> {
    if content.items.is_empty() {
        return Vec::new();
    }
    let slots = layout::semicircle(content.items.len(), radius);
    let mut seen = FnvHashSet::default();
    content
        .items
        .iter()
        .zip(slots)
        .enumerate()
        .map(|(i, (raw, slot))| {
            let mut id = ItemId::from_url(&raw.url);
            let mut attempt = 0u32;
            while !seen.insert(id.clone()) {
                id = match attempt {
                    0 => ItemId::from_url(&format!("{}#{}", raw.url, i)),
                    n => ItemId::from_url(&format!("{}#{}.{}", raw.url, i, n)),
                };
                attempt += 1;
            }
            GalleryItem {
                id,
                position: slot.position,
                rotation: slot.rotation,
                name: raw
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("Frame {}", i + 1)),
                slug: raw.slug.clone(),
                url: raw.url.clone(),
            }
        })
        .collect()
}
