#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{CAMERA_DISTANCE, FOCAL_LENGTH, NEAR_PLANE};

/// A point in screen space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point or direction in scene space.
///
/// Scene units are abstract; the camera maps them to pixels relative to the
/// shorter viewport side, so the field keeps its proportions on any screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Rotate around the X axis by `angle` radians.
    #[must_use]
    pub fn rotate_x(self, angle: f64) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(self.x, self.y * cos - self.z * sin, self.y * sin + self.z * cos)
    }

    /// Rotate around the Y axis by `angle` radians.
    #[must_use]
    pub fn rotate_y(self, angle: f64) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(self.x * cos + self.z * sin, self.y, -self.x * sin + self.z * cos)
    }
}

/// A projected point plus the perspective scale it was projected with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub point: Point,
    /// Perspective factor; 1.0 at the focal plane, smaller further away.
    pub scale: f64,
}

/// Fixed perspective camera looking down -Z from `distance` units away.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub distance: f64,
    pub focal: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { distance: CAMERA_DISTANCE, focal: FOCAL_LENGTH }
    }
}

impl Camera {
    /// Project a scene point into a `width` x `height` viewport.
    ///
    /// Returns `None` for points at or behind the near plane.
    #[must_use]
    pub fn project(&self, p: Vec3, width: f64, height: f64) -> Option<Projected> {
        let depth = self.distance - p.z;
        if depth <= NEAR_PLANE {
            return None;
        }
        let scale = self.focal / depth;
        let unit = width.min(height) * 0.5;
        Some(Projected {
            point: Point::new(width * 0.5 + p.x * scale * unit, height * 0.5 - p.y * scale * unit),
            scale,
        })
    }
}
