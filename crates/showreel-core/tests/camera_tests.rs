// Host-side tests for the camera, rig and billboarding helpers.

use glam::{Vec2, Vec3};
use showreel_core::camera::{Camera, CameraRig, ControlParams};
use showreel_core::orientation::{label_position, look_at_rotation};
use showreel_core::PITCH_LIMIT;

fn still_rig() -> CameraRig {
    let params = ControlParams {
        auto_rotate: false,
        ..ControlParams::default()
    };
    let mut rig = CameraRig::new(Camera::default(), params);
    rig.resize(800, 600);
    rig
}

#[test]
fn default_camera_looks_down_negative_z() {
    let camera = Camera::default();
    assert!(camera.forward().distance(Vec3::NEG_Z) < 1e-6);
    assert!(camera.up_world().distance(Vec3::Y) < 1e-6);
    assert!((camera.rotation() * Vec3::NEG_Z).distance(camera.forward()) < 1e-5);
}

#[test]
fn project_centers_points_on_the_view_axis() {
    let camera = Camera::default();
    let ndc = camera.project(Vec3::new(0.0, 0.0, -10.0)).unwrap();
    assert!(ndc.distance(Vec2::ZERO) < 1e-4);
    assert!(camera.project(Vec3::new(0.0, 0.0, 10.0)).is_none());
}

#[test]
fn drag_is_damped_but_fully_applied() {
    let mut rig = still_rig();
    rig.drag(100.0, 0.0);
    rig.update(0.0, Vec3::ZERO);
    let first = rig.yaw();
    let expected = 100.0 * std::f32::consts::TAU / 600.0 * 0.4;
    assert!(first > 0.0 && first < expected * 0.1, "first step is a fraction");
    for _ in 0..600 {
        rig.update(0.0, Vec3::ZERO);
    }
    assert!((rig.yaw() - expected).abs() < 1e-3, "{} vs {}", rig.yaw(), expected);
}

#[test]
fn pitch_is_clamped_short_of_the_poles() {
    let mut rig = still_rig();
    rig.drag(0.0, -100_000.0);
    for _ in 0..200 {
        rig.update(0.0, Vec3::ZERO);
    }
    assert!(rig.pitch().abs() <= PITCH_LIMIT + 1e-6);
    assert!(rig.camera.forward().is_finite());
}

#[test]
fn rig_follows_target_without_translating_far() {
    let mut rig = still_rig();
    let target = Vec3::new(0.03, -0.02, 0.0);
    rig.update(0.016, target);
    assert_eq!(rig.camera.target, target);
    assert!(rig.camera.eye.distance(target) < 0.0011);
}

#[test]
fn auto_rotate_turns_at_configured_rate() {
    let mut rig = still_rig();
    rig.set_auto_rotate(true);
    let start = rig.yaw();
    rig.update(1.0, Vec3::ZERO);
    let per_second = std::f32::consts::TAU / 60.0 * rig.params.auto_rotate_speed;
    assert!(((start - rig.yaw()) - per_second).abs() < 1e-5);
}

#[test]
fn look_at_rotation_points_plus_z_at_target() {
    let from = Vec3::new(3.0, 4.0, -8.0);
    for to in [Vec3::ZERO, Vec3::new(3.0, 10.0, -8.0), Vec3::new(-5.0, 4.0, 2.0)] {
        let q = look_at_rotation(from, to, Vec3::Y);
        let z = q * Vec3::Z;
        assert!(z.distance((to - from).normalize()) < 1e-5, "to={to:?}");
    }
    assert_eq!(look_at_rotation(from, from, Vec3::Y), glam::Quat::IDENTITY);
}

#[test]
fn label_hangs_along_negative_camera_up() {
    let up = Vec3::new(0.0, 0.8, 0.6);
    let p = label_position(Vec3::new(1.0, 2.0, 3.0), up, 2.7);
    assert!(p.distance(Vec3::new(1.0, 2.0 - 2.16, 3.0 - 1.62)) < 1e-5);
}

#[test]
fn up_vector_follows_camera_pitch() {
    let mut rig = still_rig();
    rig.rotate_by(0.0, -0.5);
    let up = rig.camera.up_world();
    assert!(up.dot(rig.camera.forward()).abs() < 1e-4);
    assert!((up.length() - 1.0).abs() < 1e-4);
    assert!(up.distance(Vec3::Y) > 0.1, "tilted view must tilt up");
}
