//! A plain configuration snapshot applied through validated scene setters.
//!
//! External loaders (attribute sets, style systems, UI controls) can fill a
//! [`SceneConfig`] field by field and apply it in one fail-fast call instead
//! of pre-validating every value themselves.

use crate::defaults;
use crate::error::ConfigError;
use crate::scene::Scene;

/// Every configurable scene value, defaulting to [`defaults`].
///
/// # Example
///
/// ```
/// use plexus::{Scene, SceneConfig};
///
/// let config = SceneConfig {
///     density: 120,
///     line_distance: 96.0,
///     ..SceneConfig::default()
/// };
/// let mut scene = Scene::new();
/// config.apply_to(&mut scene).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub alpha: u8,
    pub density: usize,
    pub frame_delay: u32,
    pub line_color: u32,
    pub line_distance: f32,
    pub line_thickness: f32,
    pub particle_color: u32,
    pub particle_radius_min: f32,
    pub particle_radius_max: f32,
    pub step_multiplier: f32,
}

impl SceneConfig {
    /// Applies every field through the scene's validated setters.
    ///
    /// Fails fast on the first invalid value; fields already applied keep
    /// their new values, fields not yet reached keep their old ones.
    pub fn apply_to(&self, scene: &mut Scene) -> Result<(), ConfigError> {
        scene.set_particle_radius_range(self.particle_radius_min, self.particle_radius_max)?;
        scene.set_line_thickness(self.line_thickness)?;
        scene.set_line_distance(self.line_distance)?;
        scene.set_step_multiplier(self.step_multiplier)?;
        scene.set_density(self.density);
        scene.set_frame_delay(self.frame_delay);
        scene.set_alpha(self.alpha);
        scene.set_particle_color(self.particle_color);
        scene.set_line_color(self.line_color);
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            alpha: defaults::ALPHA,
            density: defaults::DENSITY,
            frame_delay: defaults::FRAME_DELAY,
            line_color: defaults::LINE_COLOR,
            line_distance: defaults::LINE_DISTANCE,
            line_thickness: defaults::LINE_THICKNESS,
            particle_color: defaults::PARTICLE_COLOR,
            particle_radius_min: defaults::PARTICLE_RADIUS_MIN,
            particle_radius_max: defaults::PARTICLE_RADIUS_MAX,
            step_multiplier: defaults::STEP_MULTIPLIER,
        }
    }
}
