//! Shared numeric constants for the scene crate.

// ── Camera ──────────────────────────────────────────────────────

/// Distance from the camera to the scene origin, in scene units.
pub const CAMERA_DISTANCE: f64 = 6.0;

/// Focal length; a point at the origin projects with scale `FOCAL_LENGTH / CAMERA_DISTANCE`.
pub const FOCAL_LENGTH: f64 = 6.0;

/// Points closer than this to the camera are culled.
pub const NEAR_PLANE: f64 = 0.1;

// ── Field ───────────────────────────────────────────────────────

/// Seed for the crate/particle layout. Fixed so server and client agree.
pub const FIELD_SEED: u64 = 0x4A45_494C;

/// Number of wireframe boxes in the field.
pub const CRATE_COUNT: usize = 9;

/// Number of drifting particles.
pub const PARTICLE_COUNT: usize = 90;

/// Half-extent of the volume boxes and particles are placed in.
pub const FIELD_EXTENT: f64 = 3.2;

// ── Motion ──────────────────────────────────────────────────────

/// Largest time step applied in one frame. Longer gaps (background tab) are clamped.
pub const MAX_FRAME_STEP_MS: f64 = 50.0;

/// Vertical particle drift, in scene units per second.
pub const PARTICLE_RISE_PER_SEC: f64 = 0.12;

// ── Drawing ─────────────────────────────────────────────────────

/// Edge stroke width at scale 1.0, in CSS pixels.
pub const EDGE_WIDTH_PX: f64 = 1.4;

/// Particle radius at scale 1.0, in CSS pixels.
pub const PARTICLE_RADIUS_PX: f64 = 2.2;
