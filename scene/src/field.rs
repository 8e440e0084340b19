//! The contents of the scene: wireframe boxes and drifting particles.
//!
//! The layout is generated once from a fixed seed so every page load draws
//! the same arrangement. Only rotation angles and particle heights change
//! over time.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::camera::Vec3;
use crate::consts::{FIELD_EXTENT, PARTICLE_RISE_PER_SEC};

/// Vertex index pairs forming the 12 edges of a box.
pub const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 3),
    (3, 2),
    (2, 0),
    (4, 5),
    (5, 7),
    (7, 6),
    (6, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// A spinning wireframe box, the "package" motif.
#[derive(Debug, Clone, PartialEq)]
pub struct CrateBox {
    pub center: Vec3,
    /// Half-extents along each axis.
    pub half: Vec3,
    /// Angular velocity around X and Y, radians per second.
    pub spin: (f64, f64),
    /// Current rotation around X and Y, radians.
    pub angle: (f64, f64),
}

impl CrateBox {
    /// The 8 corners in scene space, after rotation.
    ///
    /// Corner `i` takes `+half` on an axis when the matching bit is set
    /// (bit 0 = x, bit 1 = y, bit 2 = z), which is what [`BOX_EDGES`] indexes.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let mut out = [self.center; 8];
        for (i, slot) in out.iter_mut().enumerate() {
            let sign = |bit: usize| if i & (1 << bit) == 0 { -1.0 } else { 1.0 };
            let local = Vec3::new(sign(0) * self.half.x, sign(1) * self.half.y, sign(2) * self.half.z);
            *slot = local.rotate_x(self.angle.0).rotate_y(self.angle.1).add(self.center);
        }
        out
    }

    fn advance(&mut self, dt_secs: f64) {
        self.angle.0 = wrap_angle(self.angle.0 + self.spin.0 * dt_secs);
        self.angle.1 = wrap_angle(self.angle.1 + self.spin.1 * dt_secs);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    /// Per-particle speed multiplier.
    pub drift: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub boxes: Vec<CrateBox>,
    pub particles: Vec<Particle>,
}

impl Field {
    /// Build a field deterministically from `seed`.
    #[must_use]
    pub fn generate(seed: u64, box_count: usize, particle_count: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let extent = FIELD_EXTENT;

        let boxes = (0..box_count)
            .map(|_| {
                let size = rng.random_range(0.25..0.6);
                CrateBox {
                    center: Vec3::new(
                        rng.random_range(-extent..extent),
                        rng.random_range(-extent * 0.6..extent * 0.6),
                        rng.random_range(-extent..1.0),
                    ),
                    half: Vec3::new(size, size * rng.random_range(0.6..1.0), size * rng.random_range(0.7..1.2)),
                    spin: (rng.random_range(-0.35..0.35), rng.random_range(0.1..0.5)),
                    angle: (rng.random_range(0.0..std::f64::consts::TAU), rng.random_range(0.0..std::f64::consts::TAU)),
                }
            })
            .collect();

        let particles = (0..particle_count)
            .map(|_| Particle {
                position: Vec3::new(
                    rng.random_range(-extent * 1.4..extent * 1.4),
                    rng.random_range(-extent..extent),
                    rng.random_range(-extent..2.0),
                ),
                drift: rng.random_range(0.5..1.5),
            })
            .collect();

        Self { boxes, particles }
    }

    /// Move everything forward by `dt_secs`.
    ///
    /// Particles rise and wrap from the top of the volume back to the bottom.
    pub fn advance(&mut self, dt_secs: f64) {
        for b in &mut self.boxes {
            b.advance(dt_secs);
        }
        let extent = FIELD_EXTENT;
        for p in &mut self.particles {
            p.position.y += PARTICLE_RISE_PER_SEC * p.drift * dt_secs;
            if p.position.y > extent {
                p.position.y -= 2.0 * extent;
            }
        }
    }
}

fn wrap_angle(a: f64) -> f64 {
    a.rem_euclid(std::f64::consts::TAU)
}
