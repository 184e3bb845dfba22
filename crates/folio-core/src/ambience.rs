//! Always-on background motion: orbiting light, star drift, far planet,
//! moon hue and the floating logo. Runs in every interaction state.

use crate::constants::*;
use glam::{Vec2, Vec3};

#[derive(Clone, Debug)]
pub struct Ambience {
    elapsed: f32,
    pub light_position: Vec3,
    /// Euler (x, y) rotation of the star group.
    pub star_rotation: Vec2,
    planet_clock: f32,
    pub planet_position: Vec3,
    pub moon_hue_deg: f32,
    pub logo_offset: Vec3,
    pub logo_tilt: Vec3,
}

impl Default for Ambience {
    fn default() -> Self {
        let mut ambience = Self {
            elapsed: 0.0,
            light_position: Vec3::ZERO,
            star_rotation: Vec2::ZERO,
            planet_clock: 0.0,
            planet_position: Vec3::ZERO,
            moon_hue_deg: MOON_HUE_CENTER,
            logo_offset: Vec3::ZERO,
            logo_tilt: Vec3::ZERO,
        };
        ambience.advance(0.0);
        ambience
    }
}

impl Ambience {
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.elapsed += dt;
        let t = self.elapsed;

        self.light_position = Vec3::new(
            t.cos() * LIGHT_ORBIT_RADIUS[0],
            LIGHT_HEIGHT,
            t.sin() * LIGHT_ORBIT_RADIUS[1],
        );

        self.star_rotation.y += dt * STAR_DRIFT_Y_PER_SEC;
        self.star_rotation.x += dt * STAR_DRIFT_X_PER_SEC;

        // hurry through the part of the orbit hidden below the horizon
        let speed = if self.planet_position.y <= PLANET_FAST_BELOW_Y {
            PLANET_FAST_SPEED
        } else {
            PLANET_SPEED
        };
        self.planet_clock += dt * speed;
        let phase = self.planet_clock * PLANET_ANGULAR_SPEED;
        self.planet_position = Vec3::new(
            phase.cos() * PLANET_ORBIT[0],
            PLANET_CENTER_Y + phase.sin() * PLANET_ORBIT[1],
            PLANET_Z,
        );

        self.moon_hue_deg = MOON_HUE_CENTER + (t * MOON_HUE_SPEED).sin() * MOON_HUE_SWING;

        let s = t / 4.0 * LOGO_FLOAT_SPEED;
        self.logo_tilt = Vec3::new(
            s.cos() / 8.0 * LOGO_ROTATION_INTENSITY,
            s.sin() / 8.0 * LOGO_ROTATION_INTENSITY,
            s.sin() / 20.0 * LOGO_ROTATION_INTENSITY,
        );
        self.logo_offset = Vec3::new(0.0, s.sin() / 10.0 * LOGO_FLOAT_INTENSITY, 0.0);
    }
}

/// HSL to linear-ish RGB, `h` in degrees, `s`/`l` in `[0, 1]`.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [r + m, g + m, b + m]
}
