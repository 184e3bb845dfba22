//! Frame-rate independent easing helpers and the timed return tween.

use glam::{Quat, Vec3};

/// Fraction of the remaining distance covered in `dt` seconds at `rate` (1/s).
#[inline]
pub fn damp_factor(rate: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return 0.0;
    }
    1.0 - (-rate * dt).exp()
}

#[inline]
pub fn damp(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * damp_factor(rate, dt)
}

#[inline]
pub fn damp_vec3(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    current.lerp(target, damp_factor(rate, dt))
}

/// Spherical damping; `slerp` already takes the shorter arc.
#[inline]
pub fn damp_quat(current: Quat, target: Quat, rate: f32, dt: f32) -> Quat {
    current.slerp(target, damp_factor(rate, dt)).normalize()
}

/// Quadratic ease-in-out on `t` in `[0, 1]`.
#[inline]
pub fn power2_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Fixed-duration position interpolation keyed on absolute time.
///
/// It does not depend on the per-frame easing loop: the value at any instant
/// is a pure function of `now`, so skipped or uneven frames land on the same
/// curve.
#[derive(Clone, Copy, Debug)]
pub struct PositionTween {
    from: Vec3,
    to: Vec3,
    start: f64,
    duration: f32,
}

impl PositionTween {
    pub fn new(from: Vec3, to: Vec3, start: f64, duration: f32) -> Self {
        Self {
            from,
            to,
            start,
            duration: duration.max(0.0),
        }
    }

    /// Normalised progress in `[0, 1]`.
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (((now - self.start) / self.duration as f64) as f32).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now: f64) -> Vec3 {
        self.from.lerp(self.to, power2_in_out(self.progress(now)))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Absolute time at which the tween reaches its destination.
    pub fn end_time(&self) -> f64 {
        self.start + self.duration as f64
    }

    pub fn destination(&self) -> Vec3 {
        self.to
    }
}
