//! Idle camera behaviour used while nothing is focused.

use crate::camera::CameraState;
use crate::config::StageConfig;
use crate::constants::{RIG_LOOK_DAMP_RATE, RIG_LOOK_SWAY, RIG_POSITION_DAMP_RATE, RIG_SWAY_X};
use crate::easing::damp_vec3;
use crate::orient::look_at_world_up;
use glam::{Vec2, Vec3};

/// Camera behaviour that owns the pose while the stage is browsing.
///
/// The choreography hands the camera to [`IdleRig::drive`] only in the
/// browsing state, and needs the resting pose to plan the way back there.
pub trait IdleRig {
    fn resting_position(&self) -> Vec3;
    fn resting_look_at(&self) -> Vec3;
    /// Called when control is handed back so the rig starts from rest.
    fn reset(&mut self);
    fn drive(&mut self, camera: &mut CameraState, dt: f32);
}

/// Follows the pointer with a slow sideways sway and a quick look drift.
#[derive(Clone, Debug)]
pub struct PointerRig {
    rest_position: Vec3,
    rest_look_at: Vec3,
    pointer: Vec2,
    look_target: Vec3,
}

impl PointerRig {
    pub fn new(config: &StageConfig) -> Self {
        Self {
            rest_position: config.rest_position(),
            rest_look_at: config.rest_look_at(),
            pointer: Vec2::ZERO,
            look_target: config.rest_look_at(),
        }
    }

    /// Pointer in normalised window coordinates (`[-1, 1]`, +y up).
    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.pointer = ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn look_target(&self) -> Vec3 {
        self.look_target
    }
}

impl IdleRig for PointerRig {
    fn resting_position(&self) -> Vec3 {
        self.rest_position
    }

    fn resting_look_at(&self) -> Vec3 {
        self.rest_look_at
    }

    fn reset(&mut self) {
        self.look_target = self.rest_look_at;
    }

    fn drive(&mut self, camera: &mut CameraState, dt: f32) {
        let sway = Vec3::new(self.pointer.x * RIG_SWAY_X, 0.0, 0.0);
        camera.position = damp_vec3(
            camera.position,
            self.rest_position + sway,
            RIG_POSITION_DAMP_RATE,
            dt,
        );
        let drift = self.pointer.extend(0.0) * RIG_LOOK_SWAY;
        self.look_target = damp_vec3(
            self.look_target,
            self.rest_look_at + drift,
            RIG_LOOK_DAMP_RATE,
            dt,
        );
        camera.orientation = look_at_world_up(camera.position, self.look_target);
    }
}
