//! Live camera values shared between the choreography and the renderer.
//!
//! Only the choreography (and the idle rig while it has been handed control)
//! writes these values. Everything else reads them, e.g. the renderer builds
//! its view/projection matrices and the picker builds pointer rays from them.

use glam::{Mat4, Quat, Vec2, Vec3};

pub const ZNEAR: f32 = 0.1;
pub const ZFAR: f32 = 1000.0;

/// Right-handed perspective camera described by a pose and a vertical FOV.
#[derive(Clone, Debug)]
pub struct CameraState {
    pub position: Vec3,
    pub orientation: Quat,
    pub fov_deg: f32,
    projection_dirty: bool,
}

impl CameraState {
    pub fn new(position: Vec3, orientation: Quat, fov_deg: f32) -> Self {
        Self {
            position,
            orientation,
            fov_deg,
            projection_dirty: true,
        }
    }

    /// Flag the projection as stale after a FOV change.
    #[inline]
    pub fn mark_projection_dirty(&mut self) {
        self.projection_dirty = true;
    }

    /// Returns whether the projection must be rebuilt and clears the flag.
    #[inline]
    pub fn take_projection_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.projection_dirty, false)
    }

    #[inline]
    pub fn projection_dirty(&self) -> bool {
        self.projection_dirty
    }

    /// Direction the camera is facing (local -Z).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), aspect.max(1e-3), ZNEAR, ZFAR)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position).inverse()
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// World-space ray through a point given in normalised device coordinates
    /// (`x`, `y` in `[-1, 1]`, +y up). Returns `(origin, direction)`.
    pub fn ray_through_ndc(&self, ndc: Vec2, aspect: f32) -> (Vec3, Vec3) {
        let half = (self.fov_deg.to_radians() * 0.5).tan();
        let local = Vec3::new(ndc.x * half * aspect.max(1e-3), ndc.y * half, -1.0);
        (self.position, (self.orientation * local).normalize())
    }
}

/// Map a pixel position (origin top-left, +y down) inside a `width` x
/// `height` box to normalised device coordinates.
#[inline]
pub fn ndc_from_px(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new(x / w * 2.0 - 1.0, 1.0 - y / h * 2.0)
}
