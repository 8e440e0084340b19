#![allow(clippy::float_cmp)]

use super::*;
use crate::camera::Vec3;
use crate::field::{CrateBox, Particle};
use crate::palette::{DARK, LIGHT};

fn core_with(field: Field) -> SceneCore {
    let mut core = SceneCore::new();
    core.field = field;
    core.set_viewport(800.0, 600.0, 2.0);
    core
}

fn one_box() -> Field {
    Field {
        boxes: vec![CrateBox {
            center: Vec3::new(0.0, 0.0, 0.0),
            half: Vec3::new(0.5, 0.5, 0.5),
            spin: (0.0, 1.0),
            angle: (0.3, 0.4),
        }],
        particles: Vec::new(),
    }
}

fn one_particle() -> Field {
    Field {
        boxes: Vec::new(),
        particles: vec![Particle { position: Vec3::new(0.0, 0.0, 0.0), drift: 1.0 }],
    }
}

#[test]
fn default_core_is_light_with_full_field() {
    let core = SceneCore::new();
    assert!(!core.is_dark);
    assert_eq!(core.field.boxes.len(), CRATE_COUNT);
    assert_eq!(core.field.particles.len(), PARTICLE_COUNT);
}

#[test]
fn draw_list_empty_without_viewport() {
    let core = SceneCore::new();
    assert!(core.draw_list().is_empty());
}

#[test]
fn box_produces_twelve_lines() {
    let core = core_with(one_box());
    let list = core.draw_list();
    assert_eq!(list.len(), 12);
    assert!(list.iter().all(|p| matches!(p, Primitive::Line { .. })));
}

#[test]
fn particle_at_origin_draws_at_center() {
    let core = core_with(one_particle());
    let list = core.draw_list();
    assert_eq!(list.len(), 1);
    match &list[0] {
        Primitive::Dot { center, radius, .. } => {
            assert_eq!(*center, Point::new(400.0, 300.0));
            assert_eq!(*radius, PARTICLE_RADIUS_PX);
        }
        Primitive::Line { .. } => panic!("expected a dot"),
    }
}

#[test]
fn set_dark_switches_colors() {
    let mut core = core_with(one_particle());
    let light = core.draw_list();
    core.set_dark(true);
    let dark = core.draw_list();
    assert_ne!(light, dark);
    assert_eq!(core.palette(), &DARK);
    core.set_dark(false);
    assert_eq!(core.palette(), &LIGHT);
}

#[test]
fn first_tick_does_not_move_field() {
    let mut core = core_with(one_box());
    let before = core.field.clone();
    core.tick(1234.0);
    assert_eq!(core.field, before);
}

#[test]
fn tick_clamps_long_gaps() {
    let mut core = core_with(one_box());
    core.tick(0.0);
    core.tick(10_000.0);
    let expected = 0.4 + MAX_FRAME_STEP_MS / 1000.0;
    assert!((core.field.boxes[0].angle.1 - expected).abs() < 1e-9);
}

#[test]
fn tick_ignores_time_going_backwards() {
    let mut core = core_with(one_box());
    core.tick(500.0);
    core.tick(100.0);
    assert!((core.field.boxes[0].angle.1 - 0.4).abs() < 1e-12);
}

#[test]
fn set_viewport_rejects_non_positive_dpr() {
    let mut core = SceneCore::new();
    core.set_viewport(100.0, 100.0, 0.0);
    assert_eq!(core.dpr, 1.0);
    core.set_viewport(-5.0, 100.0, 1.5);
    assert_eq!(core.viewport_width, 0.0);
    assert_eq!(core.dpr, 1.5);
}
