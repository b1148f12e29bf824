//! Default scene configuration values.
//!
//! A freshly constructed [`Scene`](crate::Scene) starts from these. They are
//! tuned for a dark background at roughly device-pixel scale; callers drawing
//! at a different scale usually want to adjust the radius range, line distance
//! and thickness together.

/// Default particle count.
pub const DENSITY: usize = 60;

/// Default delay between frames, in milliseconds.
pub const FRAME_DELAY: u32 = 10;

/// Default maximum distance at which two particles are still connected by a line.
pub const LINE_DISTANCE: f32 = 86.0;

/// Default connection line thickness.
pub const LINE_THICKNESS: f32 = 1.0;

/// Default smallest particle radius.
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;

/// Default largest particle radius.
pub const PARTICLE_RADIUS_MAX: f32 = 3.0;

/// Default particle color (opaque white, ARGB).
pub const PARTICLE_COLOR: u32 = 0xFFFF_FFFF;

/// Default connection line color (opaque white, ARGB).
pub const LINE_COLOR: u32 = 0xFFFF_FFFF;

/// Default global speed factor.
pub const STEP_MULTIPLIER: f32 = 1.0;

/// Default scene opacity.
pub const ALPHA: u8 = 255;
