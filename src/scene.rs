//! The scene: packed per-particle state plus validated global configuration.
//!
//! Particle fields live in flat parallel `Vec<f32>` buffers rather than an
//! array of structs, so a renderer can hand the coordinate buffer straight
//! to a vertex upload without repacking. All four buffers always describe
//! exactly `density` particles.

use glam::Vec2;

use crate::defaults;
use crate::error::ConfigError;

/// Mutable, authoritative simulation state for one animated surface.
///
/// A `Scene` is pure data plus validated setters: it holds no reference to
/// rendering or scheduling. Create it once, then let the
/// [`Engine`](crate::Engine) mutate it in place every frame.
///
/// # Example
///
/// ```
/// use plexus::Scene;
///
/// let mut scene = Scene::new();
/// scene.set_density(120);
/// scene.set_particle_radius_range(1.0, 4.0).unwrap();
/// scene.set_line_distance(96.0).unwrap();
/// ```
pub struct Scene {
    alpha: u8,
    density: usize,
    frame_delay: u32,
    line_color: u32,
    line_distance: f32,
    line_thickness: f32,
    particle_color: u32,
    particle_radius_max: f32,
    particle_radius_min: f32,
    step_multiplier: f32,

    width: u32,
    height: u32,

    /// x, y interleaved, two entries per particle.
    coordinates: Vec<f32>,
    /// Direction cos, sin interleaved, two entries per particle. Stored as a
    /// unit vector rather than an angle to keep trig out of the hot loop.
    directions: Vec<f32>,
    radii: Vec<f32>,
    /// Fixed per-particle speed scalar in [0.5, 1.5], drawn at generation time.
    step_multipliers: Vec<f32>,
}

impl Scene {
    /// Creates a scene with default configuration and buffers pre-allocated
    /// for the default density.
    pub fn new() -> Self {
        let density = defaults::DENSITY;
        Self {
            alpha: defaults::ALPHA,
            density,
            frame_delay: defaults::FRAME_DELAY,
            line_color: defaults::LINE_COLOR,
            line_distance: defaults::LINE_DISTANCE,
            line_thickness: defaults::LINE_THICKNESS,
            particle_color: defaults::PARTICLE_COLOR,
            particle_radius_max: defaults::PARTICLE_RADIUS_MAX,
            particle_radius_min: defaults::PARTICLE_RADIUS_MIN,
            step_multiplier: defaults::STEP_MULTIPLIER,
            width: 0,
            height: 0,
            coordinates: vec![0.0; density * 2],
            directions: vec![0.0; density * 2],
            radii: vec![0.0; density],
            step_multipliers: vec![0.0; density],
        }
    }

    // ========== Dimensions ==========

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    // ========== Per-particle data ==========

    /// Writes all six fields of one particle as a single atomic update.
    pub fn set_particle_data(
        &mut self,
        index: usize,
        x: f32,
        y: f32,
        dir_cos: f32,
        dir_sin: f32,
        radius: f32,
        step_multiplier: f32,
    ) {
        self.coordinates[index * 2] = x;
        self.coordinates[index * 2 + 1] = y;
        self.directions[index * 2] = dir_cos;
        self.directions[index * 2 + 1] = dir_sin;
        self.radii[index] = radius;
        self.step_multipliers[index] = step_multiplier;
    }

    #[inline]
    pub fn particle_position(&self, index: usize) -> Vec2 {
        Vec2::new(self.coordinates[index * 2], self.coordinates[index * 2 + 1])
    }

    #[inline]
    pub fn set_particle_position(&mut self, index: usize, position: Vec2) {
        self.coordinates[index * 2] = position.x;
        self.coordinates[index * 2 + 1] = position.y;
    }

    /// The particle's heading as a unit vector (cos, sin).
    #[inline]
    pub fn particle_direction(&self, index: usize) -> Vec2 {
        Vec2::new(self.directions[index * 2], self.directions[index * 2 + 1])
    }

    #[inline]
    pub fn particle_radius(&self, index: usize) -> f32 {
        self.radii[index]
    }

    #[inline]
    pub fn particle_step_multiplier(&self, index: usize) -> f32 {
        self.step_multipliers[index]
    }

    /// Raw interleaved x,y coordinate buffer, for renderer interop.
    pub fn coordinates(&self) -> &[f32] {
        &self.coordinates
    }

    /// Raw radius buffer, for renderer interop.
    pub fn radii(&self) -> &[f32] {
        &self.radii
    }

    // ========== Configuration ==========

    /// Sets the particle count, resizing all per-particle buffers.
    ///
    /// Shrinking truncates; growing leaves the new tail unspecified until the
    /// caller repopulates it. Treat any index you do not explicitly rewrite
    /// as invalidated after a resize.
    pub fn set_density(&mut self, density: usize) {
        if self.density != density {
            self.density = density;
            self.coordinates.resize(density * 2, 0.0);
            self.directions.resize(density * 2, 0.0);
            self.radii.resize(density, 0.0);
            self.step_multipliers.resize(density, 0.0);
        }
    }

    #[inline]
    pub fn density(&self) -> usize {
        self.density
    }

    /// Scene-wide opacity multiplier, distinct from each color's own alpha.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Delay per frame, in milliseconds.
    pub fn set_frame_delay(&mut self, delay: u32) {
        self.frame_delay = delay;
    }

    #[inline]
    pub fn frame_delay(&self) -> u32 {
        self.frame_delay
    }

    /// Sets the global speed factor. Must be non-negative and not NaN.
    pub fn set_step_multiplier(&mut self, step_multiplier: f32) -> Result<(), ConfigError> {
        if step_multiplier.is_nan() {
            return Err(ConfigError::NotANumber("step multiplier"));
        }
        if step_multiplier < 0.0 {
            return Err(ConfigError::NegativeValue {
                name: "step multiplier",
                value: step_multiplier,
            });
        }
        self.step_multiplier = step_multiplier;
        Ok(())
    }

    #[inline]
    pub fn step_multiplier(&self) -> f32 {
        self.step_multiplier
    }

    /// Sets the particle radius range. Both bounds must be at least 0.5 and
    /// min must not exceed max; the pair is validated atomically, so a bad
    /// pair leaves both prior values in place.
    pub fn set_particle_radius_range(
        &mut self,
        min_radius: f32,
        max_radius: f32,
    ) -> Result<(), ConfigError> {
        if min_radius.is_nan() || max_radius.is_nan() {
            return Err(ConfigError::NotANumber("particle radius"));
        }
        if min_radius < 0.5 {
            return Err(ConfigError::RadiusTooSmall(min_radius));
        }
        if max_radius < 0.5 {
            return Err(ConfigError::RadiusTooSmall(max_radius));
        }
        if min_radius > max_radius {
            return Err(ConfigError::RadiusRangeInverted {
                min: min_radius,
                max: max_radius,
            });
        }
        self.particle_radius_min = min_radius;
        self.particle_radius_max = max_radius;
        Ok(())
    }

    #[inline]
    pub fn particle_radius_min(&self) -> f32 {
        self.particle_radius_min
    }

    #[inline]
    pub fn particle_radius_max(&self) -> f32 {
        self.particle_radius_max
    }

    /// Sets the connection line thickness. Must be at least 1 and not NaN.
    pub fn set_line_thickness(&mut self, line_thickness: f32) -> Result<(), ConfigError> {
        if line_thickness.is_nan() {
            return Err(ConfigError::NotANumber("line thickness"));
        }
        if line_thickness < 1.0 {
            return Err(ConfigError::LineThicknessTooSmall(line_thickness));
        }
        self.line_thickness = line_thickness;
        Ok(())
    }

    #[inline]
    pub fn line_thickness(&self) -> f32 {
        self.line_thickness
    }

    /// Sets the maximum distance at which two particles are still connected
    /// by a line. Must be non-negative and not NaN.
    pub fn set_line_distance(&mut self, line_distance: f32) -> Result<(), ConfigError> {
        if line_distance.is_nan() {
            return Err(ConfigError::NotANumber("line distance"));
        }
        if line_distance < 0.0 {
            return Err(ConfigError::NegativeValue {
                name: "line distance",
                value: line_distance,
            });
        }
        self.line_distance = line_distance;
        Ok(())
    }

    #[inline]
    pub fn line_distance(&self) -> f32 {
        self.line_distance
    }

    /// Particle color as packed ARGB.
    pub fn set_particle_color(&mut self, color: u32) {
        self.particle_color = color;
    }

    #[inline]
    pub fn particle_color(&self) -> u32 {
        self.particle_color
    }

    /// Line color as packed ARGB. The alpha channel is ignored; line alpha
    /// is derived from distance and scene alpha at draw time.
    pub fn set_line_color(&mut self, line_color: u32) {
        self.line_color = line_color;
    }

    #[inline]
    pub fn line_color(&self) -> u32 {
        self.line_color
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
