//! Per-frame particle motion.

use crate::error::SpawnError;
use crate::generator::ParticleGenerator;
use crate::scene::Scene;

/// Advances every particle in a [`Scene`] by one simulation tick.
pub struct FrameAdvancer {
    generator: ParticleGenerator,
}

impl FrameAdvancer {
    pub fn new(generator: ParticleGenerator) -> Self {
        Self { generator }
    }

    /// Moves each particle along its heading by
    /// `step * scene.step_multiplier * particle.step_multiplier`.
    ///
    /// A particle whose naive displacement would land out of bounds is not
    /// moved there; it is regenerated just off screen heading inward
    /// instead, so replacements stream into view rather than popping up in
    /// the middle of the frame.
    pub fn advance_to_next_frame(
        &mut self,
        scene: &mut Scene,
        step: f32,
    ) -> Result<(), SpawnError> {
        for i in 0..scene.density() {
            let displacement =
                step * scene.step_multiplier() * scene.particle_step_multiplier(i);
            let next = scene.particle_position(i) + scene.particle_direction(i) * displacement;

            if point_out_of_bounds(scene, next.x, next.y) {
                self.generator.apply_fresh_particle_off_screen(scene, i)?;
            } else {
                scene.set_particle_position(i, next);
            }
        }
        Ok(())
    }
}

/// True if the point is off screen and farther out than the line distance,
/// so no connection line from it could reach an on-screen particle.
fn point_out_of_bounds(scene: &Scene, x: f32, y: f32) -> bool {
    let offset = scene.particle_radius_min() + scene.line_distance();
    x + offset < 0.0
        || x - offset > scene.width() as f32
        || y + offset < 0.0
        || y - offset > scene.height() as f32
}
