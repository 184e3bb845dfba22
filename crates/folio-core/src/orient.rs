use glam::{Mat3, Quat, Vec3};

const DEGENERATE_EPS: f32 = 1e-6;

/// Orientation of an eye at `eye` looking at `target`, with `up` as the
/// preferred up direction.
///
/// Uses the camera convention: the returned rotation maps local -Z onto the
/// view direction and local +Y as close to `up` as possible. Coincident eye
/// and target yield the identity; an `up` parallel to the view direction is
/// swapped for another world axis.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Quat {
    let back = eye - target;
    if back.length_squared() < DEGENERATE_EPS * DEGENERATE_EPS {
        return Quat::IDENTITY;
    }
    let z = back.normalize();
    let mut x = up.cross(z);
    if x.length_squared() < DEGENERATE_EPS {
        // up is parallel to the view axis
        let alt = if z.y.abs() > 0.9 { Vec3::Z } else { Vec3::Y };
        x = alt.cross(z);
    }
    let x = x.normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize()
}

/// [`look_at`] with world-up.
#[inline]
pub fn look_at_world_up(eye: Vec3, target: Vec3) -> Quat {
    look_at(eye, target, Vec3::Y)
}
