#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Vec3 ---

#[test]
fn vec3_add() {
    let v = Vec3::new(1.0, 2.0, 3.0).add(Vec3::new(0.5, -2.0, 1.0));
    assert_eq!(v, Vec3::new(1.5, 0.0, 4.0));
}

#[test]
fn rotate_y_quarter_turn_moves_x_into_negative_z() {
    let v = Vec3::new(1.0, 0.0, 0.0).rotate_y(std::f64::consts::FRAC_PI_2);
    assert!(approx_eq(v.x, 0.0));
    assert!(approx_eq(v.y, 0.0));
    assert!(approx_eq(v.z, -1.0));
}

#[test]
fn rotate_x_quarter_turn_moves_y_into_z() {
    let v = Vec3::new(0.0, 1.0, 0.0).rotate_x(std::f64::consts::FRAC_PI_2);
    assert!(approx_eq(v.y, 0.0));
    assert!(approx_eq(v.z, 1.0));
}

#[test]
fn rotation_preserves_length() {
    let v = Vec3::new(0.3, -1.2, 0.8);
    let r = v.rotate_x(0.7).rotate_y(-1.9);
    let len = |p: Vec3| (p.x * p.x + p.y * p.y + p.z * p.z).sqrt();
    assert!((len(v) - len(r)).abs() < 1e-9);
}

// --- Camera ---

#[test]
fn origin_projects_to_viewport_center() {
    let cam = Camera::default();
    let p = cam.project(Vec3::new(0.0, 0.0, 0.0), 800.0, 600.0).unwrap();
    assert!(approx_eq(p.point.x, 400.0));
    assert!(approx_eq(p.point.y, 300.0));
    assert!(approx_eq(p.scale, 1.0));
}

#[test]
fn positive_y_projects_upward() {
    let cam = Camera::default();
    let p = cam.project(Vec3::new(0.0, 1.0, 0.0), 800.0, 600.0).unwrap();
    assert!(p.point.y < 300.0);
}

#[test]
fn farther_points_shrink() {
    let cam = Camera::default();
    let near = cam.project(Vec3::new(1.0, 0.0, 1.0), 800.0, 600.0).unwrap();
    let far = cam.project(Vec3::new(1.0, 0.0, -2.0), 800.0, 600.0).unwrap();
    assert!(near.scale > far.scale);
    assert!(near.point.x > far.point.x);
}

#[test]
fn points_behind_near_plane_are_culled() {
    let cam = Camera::default();
    assert!(cam.project(Vec3::new(0.0, 0.0, cam.distance), 800.0, 600.0).is_none());
    assert!(cam.project(Vec3::new(0.0, 0.0, cam.distance + 1.0), 800.0, 600.0).is_none());
}

#[test]
fn projection_uses_shorter_viewport_side() {
    let cam = Camera::default();
    let wide = cam.project(Vec3::new(1.0, 0.0, 0.0), 1600.0, 400.0).unwrap();
    assert!(approx_eq(wide.point.x - 800.0, 200.0));
}
