use crate::constants::*;
use crate::error::{FolioError, Result};
use glam::Vec3;
use serde::Deserialize;

/// Runtime-tunable stage parameters.
///
/// Every field falls back to its constant when missing from a JSON override,
/// so hosts only spell out what they change.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub layout_radius: f32,
    pub gallery_offset: [f32; 3],
    pub anchor_offset: [f32; 3],
    pub center_offset: [f32; 3],

    pub initial_fov_deg: f32,
    pub zoomed_fov_deg: f32,
    pub fov_damp_rate: f32,
    pub focus_position_damp_rate: f32,
    pub focus_rotation_damp_rate: f32,
    pub return_rotation_damp_rate: f32,
    pub return_tween_secs: f32,
    pub return_grace_secs: f32,

    pub rest_position: [f32; 3],
    pub rest_look_at: [f32; 3],

    pub star_count: usize,
    pub star_seed: u64,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            layout_radius: LAYOUT_RADIUS,
            gallery_offset: GALLERY_OFFSET,
            anchor_offset: FRAME_ANCHOR_OFFSET,
            center_offset: FRAME_CENTER_OFFSET,
            initial_fov_deg: INITIAL_FOV_DEG,
            zoomed_fov_deg: ZOOMED_FOV_DEG,
            fov_damp_rate: FOV_DAMP_RATE,
            focus_position_damp_rate: FOCUS_POSITION_DAMP_RATE,
            focus_rotation_damp_rate: FOCUS_ROTATION_DAMP_RATE,
            return_rotation_damp_rate: RETURN_ROTATION_DAMP_RATE,
            return_tween_secs: RETURN_TWEEN_SECS,
            return_grace_secs: RETURN_GRACE_SECS,
            rest_position: REST_POSITION,
            rest_look_at: REST_LOOK_AT,
            star_count: STAR_COUNT,
            star_seed: STAR_SEED,
        }
    }
}

impl StageConfig {
    /// Parse a (partial) JSON override and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| FolioError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.layout_radius > 0.0) {
            return Err(FolioError::config("layout_radius must be > 0"));
        }
        for (name, fov) in [
            ("initial_fov_deg", self.initial_fov_deg),
            ("zoomed_fov_deg", self.zoomed_fov_deg),
        ] {
            if !(fov > 0.0 && fov < 180.0) {
                return Err(FolioError::config(format!("{name} must be in (0, 180)")));
            }
        }
        for (name, rate) in [
            ("fov_damp_rate", self.fov_damp_rate),
            ("focus_position_damp_rate", self.focus_position_damp_rate),
            ("focus_rotation_damp_rate", self.focus_rotation_damp_rate),
            ("return_rotation_damp_rate", self.return_rotation_damp_rate),
        ] {
            if !(rate > 0.0 && rate.is_finite()) {
                return Err(FolioError::config(format!("{name} must be > 0")));
            }
        }
        if self.return_tween_secs < 0.0 || self.return_grace_secs < 0.0 {
            return Err(FolioError::config("return timings must be non-negative"));
        }
        if self.rest_position == self.rest_look_at {
            return Err(FolioError::config("rest_position and rest_look_at coincide"));
        }
        Ok(())
    }

    #[inline]
    pub fn gallery_offset(&self) -> Vec3 {
        Vec3::from_array(self.gallery_offset)
    }

    #[inline]
    pub fn rest_position(&self) -> Vec3 {
        Vec3::from_array(self.rest_position)
    }

    #[inline]
    pub fn rest_look_at(&self) -> Vec3 {
        Vec3::from_array(self.rest_look_at)
    }
}
