//! Semicircular placement of gallery frames.

use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

/// Position and Euler rotation (radians, XYZ) for one gallery slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSlot {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl LayoutSlot {
    /// Angle of the slot on the arc; `0` is front-centre, `-π/2` far left.
    #[inline]
    pub fn angle(&self) -> f32 {
        -self.rotation.y
    }
}

/// Spread `count` slots over a 180° arc of `radius` around the origin.
///
/// Slots run from `-π/2` to `+π/2` inclusive in index order, each rotated
/// about Y so its forward (+Z) axis faces the origin. A single slot sits at
/// `(0, 0, -radius)` with no rotation.
pub fn semicircle(count: usize, radius: f32) -> Vec<LayoutSlot> {
    let step = if count > 1 {
        PI / (count - 1) as f32
    } else {
        0.0
    };
    (0..count)
        .map(|i| {
            let angle = if count > 1 {
                -FRAC_PI_2 + i as f32 * step
            } else {
                0.0
            };
            LayoutSlot {
                position: Vec3::new(radius * angle.sin(), 0.0, -radius * angle.cos()),
                rotation: Vec3::new(0.0, -angle, 0.0),
            }
        })
        .collect()
}
