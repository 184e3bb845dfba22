use glam::Vec3;

// Shared stage tuning constants. `StageConfig::default()` is built from these.

pub const GOLDEN_RATIO: f32 = 1.618_034;

// Gallery layout
pub const LAYOUT_RADIUS: f32 = 3.5; // semicircle radius for the frames
pub const GALLERY_OFFSET: [f32; 3] = [0.0, -0.5, 0.0]; // world offset of the gallery group
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400";
pub const DEFAULT_PROJECT_NAME: &str = "Default Project";
pub const DEFAULT_PROJECT_SLUG: &str = "default-slug";

// Frame geometry (item-local space, origin at the bottom centre of the frame)
pub const FRAME_WIDTH: f32 = 1.0;
pub const FRAME_HEIGHT: f32 = GOLDEN_RATIO;
pub const FRAME_DEPTH: f32 = 0.05;
// camera spot when focused
pub const FRAME_ANCHOR_OFFSET: [f32; 3] = [0.0, GOLDEN_RATIO / 2.0, 1.25];
// look-at point when focused
pub const FRAME_CENTER_OFFSET: [f32; 3] = [0.0, GOLDEN_RATIO / 2.0, 0.0];

// Field of view (degrees)
pub const INITIAL_FOV_DEG: f32 = 50.0;
pub const ZOOMED_FOV_DEG: f32 = 65.0;
pub const FOV_EPSILON_DEG: f32 = 0.01;

// Exponential damping rates (1/s); k = 1 - exp(-rate * dt)
pub const FOV_DAMP_RATE: f32 = 4.0;
pub const FOCUS_POSITION_DAMP_RATE: f32 = 2.5;
pub const FOCUS_ROTATION_DAMP_RATE: f32 = 2.5;
pub const RETURN_ROTATION_DAMP_RATE: f32 = 3.0;

// Return sequence timing (seconds)
pub const RETURN_TWEEN_SECS: f32 = 1.5;
pub const RETURN_GRACE_SECS: f32 = 0.3;

// Idle rig resting pose
pub const REST_POSITION: [f32; 3] = [0.0, 0.8, 7.5];
pub const REST_LOOK_AT: [f32; 3] = [0.0, 0.0, -5.0];
pub const RIG_SWAY_X: f32 = 2.0; // camera x travel per unit of pointer x
pub const RIG_LOOK_SWAY: f32 = 0.1; // look target travel per unit of pointer
pub const RIG_POSITION_DAMP_RATE: f32 = 0.6;
pub const RIG_LOOK_DAMP_RATE: f32 = 6.0;

// Frame hover visuals
pub const IMAGE_SCALE_IDLE: [f32; 2] = [0.85, 0.9];
pub const IMAGE_SCALE_HOVER: [f32; 2] = [0.85 * 0.85, 0.9 * 0.905];
pub const FRAME_TINT_HOVER: f32 = 0.882; // #E1E1E1
pub const HOVER_DAMP_RATE: f32 = 10.0;

// Ambient animation
pub const LIGHT_ORBIT_RADIUS: [f32; 2] = [4.0, 2.0]; // x, z
pub const LIGHT_HEIGHT: f32 = 1.0;
pub const STAR_DRIFT_Y_PER_SEC: f32 = 0.01;
pub const STAR_DRIFT_X_PER_SEC: f32 = 0.002;
pub const STAR_COUNT: usize = 1500;
pub const STAR_RADIUS: f32 = 100.0;
pub const STAR_DEPTH: f32 = 50.0;
pub const STAR_SEED: u64 = 0x5EED_57A2;
pub const PLANET_ORBIT: [f32; 2] = [150.0, 80.0]; // x, y semi-axes
pub const PLANET_CENTER_Y: f32 = -35.0;
pub const PLANET_Z: f32 = -200.0;
pub const PLANET_RADIUS: f32 = 10.0;
pub const PLANET_ANGULAR_SPEED: f32 = 0.2;
pub const PLANET_SPEED: f32 = 0.5;
pub const PLANET_FAST_SPEED: f32 = 4.0;
pub const PLANET_FAST_BELOW_Y: f32 = -15.0;
pub const MOON_POSITION: [f32; 3] = [1.0, -0.74, -3.0]; // relative to the gallery group
pub const MOON_HUE_CENTER: f32 = 230.0;
pub const MOON_HUE_SWING: f32 = 25.0;
pub const MOON_HUE_SPEED: f32 = 0.2;
pub const LOGO_BASE_HEIGHT: f32 = 1.0; // relative to the gallery group
pub const LOGO_FLOAT_SPEED: f32 = 1.0;
pub const LOGO_ROTATION_INTENSITY: f32 = 0.5;
pub const LOGO_FLOAT_INTENSITY: f32 = 0.5;

// Loading
pub const LOADING_IDLE_COMPLETE_SECS: f64 = 1.0;

#[inline]
pub fn gallery_offset_vec3() -> Vec3 {
    Vec3::from_array(GALLERY_OFFSET)
}
