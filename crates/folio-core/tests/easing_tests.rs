use folio_core::easing::*;
use glam::{Quat, Vec3};

#[test]
fn damp_factor_is_zero_without_time() {
    assert_eq!(damp_factor(4.0, 0.0), 0.0);
    assert_eq!(damp_factor(4.0, -1.0), 0.0);
    assert!(damp_factor(4.0, 1.0) > 0.0 && damp_factor(4.0, 1.0) < 1.0);
}

#[test]
fn damping_is_frame_rate_independent() {
    let mut stepped = 0.0f32;
    for _ in 0..10 {
        stepped = damp(stepped, 10.0, 3.0, 0.01);
    }
    let single = damp(0.0, 10.0, 3.0, 0.1);
    assert!((stepped - single).abs() < 1e-4, "{stepped} vs {single}");
}

#[test]
fn damp_converges_without_overshoot() {
    let mut v = Vec3::ZERO;
    let target = Vec3::new(1.0, -2.0, 3.0);
    let mut last = v.distance(target);
    for _ in 0..120 {
        v = damp_vec3(v, target, 2.5, 1.0 / 60.0);
        let d = v.distance(target);
        assert!(d < last);
        last = d;
    }
    for _ in 0..480 {
        v = damp_vec3(v, target, 2.5, 1.0 / 60.0);
    }
    assert!(v.distance(target) < 1e-3);
}

#[test]
fn damp_quat_stays_normalised() {
    let mut q = Quat::IDENTITY;
    let target = Quat::from_rotation_y(2.5);
    for _ in 0..300 {
        q = damp_quat(q, target, 3.0, 1.0 / 60.0);
        assert!((q.length() - 1.0).abs() < 1e-4);
    }
    assert!(q.angle_between(target) < 2e-3);
}

#[test]
fn power2_in_out_endpoints_and_midpoint() {
    assert_eq!(power2_in_out(0.0), 0.0);
    assert_eq!(power2_in_out(1.0), 1.0);
    assert!((power2_in_out(0.5) - 0.5).abs() < 1e-6);
    assert_eq!(power2_in_out(-1.0), 0.0);
    assert_eq!(power2_in_out(2.0), 1.0);
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = power2_in_out(i as f32 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn tween_is_a_function_of_absolute_time() {
    let from = Vec3::new(0.0, 0.0, 0.0);
    let to = Vec3::new(0.0, 0.8, 7.5);
    let tween = PositionTween::new(from, to, 10.0, 1.5);
    assert_eq!(tween.sample(9.0), from);
    assert_eq!(tween.sample(10.0), from);
    assert!(tween.sample(10.75).abs_diff_eq(from.lerp(to, 0.5), 1e-5));
    assert!(tween.sample(11.5).abs_diff_eq(to, 1e-6));
    assert!(!tween.is_finished(11.4));
    assert!(tween.is_finished(11.5));
    assert_eq!(tween.end_time(), 11.5);
    assert_eq!(tween.destination(), to);
}

#[test]
fn zero_length_tween_finishes_immediately() {
    let tween = PositionTween::new(Vec3::ZERO, Vec3::ONE, 3.0, 0.0);
    assert!(tween.is_finished(3.0));
    assert_eq!(tween.progress(0.0), 1.0);
}
