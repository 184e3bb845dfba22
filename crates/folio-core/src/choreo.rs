//! Camera choreography between browsing the arc and focusing one frame.
//!
//! One [`Choreographer`] owns the live [`CameraState`]. Selection changes
//! arrive as explicit calls (`focus`, `release`, `wheel`), the render loop
//! drives it with `ease_fov`, `advance_timeline` and `ease_pose` in that
//! order, and side effects the host must carry out (wheel listener,
//! focus signal, marker cleanup) are queued as [`Effect`]s.

use crate::camera::CameraState;
use crate::config::StageConfig;
use crate::easing::{damp, damp_quat, damp_vec3, PositionTween};
use crate::item::{GalleryItem, ItemId};
use crate::orient::look_at_world_up;
use crate::rig::IdleRig;
use glam::{Quat, Vec3};
use smallvec::SmallVec;

/// Observable interaction state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteractionState {
    Browsing,
    Focused(ItemId),
    Returning,
}

/// Host-side work requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Start listening for wheel input (entered `Focused`).
    SubscribeWheel,
    /// Stop listening for wheel input (left `Focused`).
    UnsubscribeWheel,
    /// The "any item focused" signal flipped.
    FocusChanged(bool),
    /// Drop "active" markup from external item indicators.
    ClearActiveMarkers,
}

pub type Effects = SmallVec<[Effect; 4]>;

/// World-space targets for the selected item.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusTarget {
    pub item: ItemId,
    pub anchor: Vec3,
    pub look_at: Vec3,
    pub orientation: Quat,
}

impl FocusTarget {
    pub fn for_item(item: &GalleryItem, config: &StageConfig) -> Self {
        let offset = config.gallery_offset();
        let anchor = item.local_to_world(Vec3::from_array(config.anchor_offset), offset);
        let look_at = item.local_to_world(Vec3::from_array(config.center_offset), offset);
        Self {
            item: item.id.clone(),
            anchor,
            look_at,
            orientation: look_at_world_up(anchor, look_at),
        }
    }
}

#[derive(Clone, Debug)]
struct ReturnSequence {
    target: FocusTarget,
    tween: Option<PositionTween>,
    settle_at: Option<f64>,
}

#[derive(Clone, Debug)]
enum Phase {
    Browsing,
    Focused(FocusTarget),
    Returning(ReturnSequence),
}

#[derive(Clone, Copy, Debug)]
struct Rates {
    fov: f32,
    focus_position: f32,
    focus_rotation: f32,
    return_rotation: f32,
}

#[derive(Debug)]
pub struct Choreographer {
    camera: CameraState,
    fov_target: f32,
    initial_fov: f32,
    zoomed_fov: f32,
    rates: Rates,
    return_secs: f32,
    grace_secs: f32,
    rest_position: Vec3,
    rest_orientation: Quat,
    phase: Phase,
    effects: Effects,
}

const FOV_EPSILON: f32 = crate::constants::FOV_EPSILON_DEG;

impl Choreographer {
    /// Start browsing with the camera at the rig's resting pose.
    pub fn new(config: &StageConfig, rig: &impl IdleRig) -> Self {
        let rest_position = rig.resting_position();
        let rest_orientation = look_at_world_up(rest_position, rig.resting_look_at());
        Self {
            camera: CameraState::new(rest_position, rest_orientation, config.initial_fov_deg),
            fov_target: config.initial_fov_deg,
            initial_fov: config.initial_fov_deg,
            zoomed_fov: config.zoomed_fov_deg,
            rates: Rates {
                fov: config.fov_damp_rate,
                focus_position: config.focus_position_damp_rate,
                focus_rotation: config.focus_rotation_damp_rate,
                return_rotation: config.return_rotation_damp_rate,
            },
            return_secs: config.return_tween_secs,
            grace_secs: config.return_grace_secs,
            rest_position,
            rest_orientation,
            phase: Phase::Browsing,
            effects: Effects::new(),
        }
    }

    pub fn state(&self) -> InteractionState {
        match &self.phase {
            Phase::Browsing => InteractionState::Browsing,
            Phase::Focused(t) => InteractionState::Focused(t.item.clone()),
            Phase::Returning(_) => InteractionState::Returning,
        }
    }

    /// True from entering `Focused` until the return sequence has settled.
    pub fn is_focused(&self) -> bool {
        !matches!(self.phase, Phase::Browsing)
    }

    pub fn focused_item(&self) -> Option<&ItemId> {
        match &self.phase {
            Phase::Focused(t) => Some(&t.item),
            _ => None,
        }
    }

    /// Non-null exactly while `Focused` or `Returning`.
    pub fn focus_target(&self) -> Option<&FocusTarget> {
        match &self.phase {
            Phase::Browsing => None,
            Phase::Focused(t) => Some(t),
            Phase::Returning(seq) => Some(&seq.target),
        }
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Whether the projection changed since the last call; clears the flag.
    pub fn take_projection_dirty(&mut self) -> bool {
        self.camera.take_projection_dirty()
    }

    pub fn fov_target(&self) -> f32 {
        self.fov_target
    }

    pub fn rest_orientation(&self) -> Quat {
        self.rest_orientation
    }

    pub fn is_return_tween_active(&self) -> bool {
        matches!(&self.phase, Phase::Returning(seq) if seq.tween.is_some())
    }

    pub fn take_effects(&mut self) -> Effects {
        std::mem::take(&mut self.effects)
    }

    /// Focus `item`. Re-selecting the focused item is a no-op; any other
    /// item is a direct switch, also out of an in-flight return.
    pub fn focus(&mut self, item: &GalleryItem, config: &StageConfig) -> bool {
        let target = FocusTarget::for_item(item, config);
        match &self.phase {
            Phase::Focused(current) if current.item == target.item => return false,
            Phase::Focused(current) => {
                log::info!("[choreo] refocus {} -> {}", current.item, target.item);
            }
            Phase::Returning(_) => {
                // drop the return tween so it stops writing the position
                log::info!("[choreo] return interrupted, focus {}", target.item);
                self.effects.push(Effect::SubscribeWheel);
            }
            Phase::Browsing => {
                log::info!("[choreo] focus {}", target.item);
                self.effects.push(Effect::SubscribeWheel);
                self.effects.push(Effect::FocusChanged(true));
            }
        }
        self.phase = Phase::Focused(target);
        self.fov_target = self.zoomed_fov;
        true
    }

    /// Recompute targets for an item whose transform may have changed.
    pub fn refresh_target(&mut self, item: &GalleryItem, config: &StageConfig) {
        match &mut self.phase {
            Phase::Focused(t) if t.item == item.id => *t = FocusTarget::for_item(item, config),
            Phase::Returning(seq) if seq.target.item == item.id => {
                seq.target = FocusTarget::for_item(item, config)
            }
            _ => {}
        }
    }

    /// Leave `Focused` and head back to the rig's resting pose. No-op in
    /// any other state, so the return tween never double-starts.
    pub fn release(&mut self, now: f64) -> bool {
        let target = match std::mem::replace(&mut self.phase, Phase::Browsing) {
            Phase::Focused(target) => target,
            other => {
                self.phase = other;
                return false;
            }
        };
        log::info!("[choreo] release {}", target.item);
        let tween = PositionTween::new(
            self.camera.position,
            self.rest_position,
            now,
            self.return_secs,
        );
        self.phase = Phase::Returning(ReturnSequence {
            target,
            tween: Some(tween),
            settle_at: None,
        });
        self.fov_target = self.initial_fov;
        self.effects.push(Effect::UnsubscribeWheel);
        true
    }

    /// Wheel input; scrolling up (`delta_y < 0`) while focused releases.
    pub fn wheel(&mut self, delta_y: f64, now: f64) -> bool {
        if delta_y < 0.0 && matches!(self.phase, Phase::Focused(_)) {
            self.release(now)
        } else {
            false
        }
    }

    /// Step 1 of a frame: ease the field of view toward its target.
    pub fn ease_fov(&mut self, dt: f32) {
        if (self.camera.fov_deg - self.fov_target).abs() > FOV_EPSILON {
            self.camera.fov_deg = damp(self.camera.fov_deg, self.fov_target, self.rates.fov, dt);
            self.camera.mark_projection_dirty();
        }
    }

    /// Run the return tween and the grace delay that follows it.
    pub fn advance_timeline(&mut self, now: f64, rig: &mut impl IdleRig) {
        let Phase::Returning(seq) = &mut self.phase else {
            return;
        };
        if let Some(tween) = seq.tween {
            self.camera.position = tween.sample(now);
            if tween.is_finished(now) {
                seq.tween = None;
                seq.settle_at = Some(tween.end_time() + self.grace_secs as f64);
            }
        }
        if seq.settle_at.is_some_and(|at| now >= at) {
            log::info!("[choreo] settled, browsing");
            self.phase = Phase::Browsing;
            self.effects.push(Effect::ClearActiveMarkers);
            self.effects.push(Effect::FocusChanged(false));
            rig.reset();
        }
    }

    /// Steps 3-5 of a frame: ease the pose for the current state, or hand
    /// the camera to the rig while browsing.
    pub fn ease_pose(&mut self, dt: f32, rig: &mut impl IdleRig) {
        match &self.phase {
            Phase::Returning(_) => {
                self.camera.orientation = damp_quat(
                    self.camera.orientation,
                    self.rest_orientation,
                    self.rates.return_rotation,
                    dt,
                );
            }
            Phase::Focused(target) => {
                self.camera.position = damp_vec3(
                    self.camera.position,
                    target.anchor,
                    self.rates.focus_position,
                    dt,
                );
                self.camera.orientation = damp_quat(
                    self.camera.orientation,
                    target.orientation,
                    self.rates.focus_rotation,
                    dt,
                );
            }
            Phase::Browsing => rig.drive(&mut self.camera, dt),
        }
    }
}
