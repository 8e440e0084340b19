#![allow(clippy::float_cmp)]

use super::*;

fn unit_box() -> CrateBox {
    CrateBox {
        center: Vec3::new(0.0, 0.0, 0.0),
        half: Vec3::new(1.0, 1.0, 1.0),
        spin: (0.0, 1.0),
        angle: (0.0, 0.0),
    }
}

#[test]
fn generate_is_deterministic_for_seed() {
    let a = Field::generate(7, 4, 10);
    let b = Field::generate(7, 4, 10);
    assert_eq!(a, b);
}

#[test]
fn generate_differs_between_seeds() {
    let a = Field::generate(1, 4, 10);
    let b = Field::generate(2, 4, 10);
    assert_ne!(a, b);
}

#[test]
fn generate_respects_counts() {
    let field = Field::generate(3, 5, 17);
    assert_eq!(field.boxes.len(), 5);
    assert_eq!(field.particles.len(), 17);
}

#[test]
fn generated_particles_stay_inside_volume() {
    let field = Field::generate(11, 0, 200);
    for p in &field.particles {
        assert!(p.position.y.abs() <= FIELD_EXTENT);
        assert!(p.drift >= 0.5 && p.drift < 1.5);
    }
}

#[test]
fn unrotated_corners_follow_bit_layout() {
    let corners = unit_box().corners();
    assert_eq!(corners[0], Vec3::new(-1.0, -1.0, -1.0));
    assert_eq!(corners[1], Vec3::new(1.0, -1.0, -1.0));
    assert_eq!(corners[2], Vec3::new(-1.0, 1.0, -1.0));
    assert_eq!(corners[7], Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn box_edges_connect_corners_differing_in_one_axis() {
    for (a, b) in BOX_EDGES {
        assert_eq!((a ^ b).count_ones(), 1, "edge {a}-{b}");
    }
}

#[test]
fn corners_are_offset_by_center() {
    let mut b = unit_box();
    b.center = Vec3::new(2.0, 0.0, 0.0);
    assert_eq!(b.corners()[1], Vec3::new(3.0, -1.0, -1.0));
}

#[test]
fn advance_rotates_boxes_and_wraps_angle() {
    let mut field = Field { boxes: vec![unit_box()], particles: Vec::new() };
    field.advance(std::f64::consts::TAU + 0.5);
    let angle = field.boxes[0].angle.1;
    assert!((angle - 0.5).abs() < 1e-9);
}

#[test]
fn advance_wraps_particles_past_top() {
    let mut field = Field {
        boxes: Vec::new(),
        particles: vec![Particle { position: Vec3::new(0.0, FIELD_EXTENT - 0.01, 0.0), drift: 1.0 }],
    };
    field.advance(1.0);
    let y = field.particles[0].position.y;
    assert!(y < 0.0);
    assert!(y >= -FIELD_EXTENT);
}
