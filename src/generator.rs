//! Randomized particle (re)generation.
//!
//! Two spawn modes: uniformly somewhere on screen, or just outside one of
//! the four viewport edges with a heading guaranteed to bring the particle
//! back into view. The second mode is what keeps the field looking alive:
//! particles that drift out are replaced by ones streaming inward instead
//! of popping into the middle of the frame.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::SpawnError;
use crate::math::angle_deg;
use crate::scene::Scene;

/// Padding, inset from the viewport corners, used as the reference points
/// for off-screen path calculation. Aiming at inset corners rather than the
/// exact corners keeps re-entry headings from grazing along an edge.
const PATH_CALCULATION_PADDING: f32 = 18.0;

/// Produces freshly randomized particle state and writes it into a
/// [`Scene`] at a given index.
///
/// Owns its RNG; seed it for reproducible scenes.
pub struct ParticleGenerator {
    rng: SmallRng,
}

impl ParticleGenerator {
    /// Creates a generator seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a generator with a fixed seed, for deterministic output.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Places the particle at `index` uniformly at random on screen with a
    /// uniformly random heading.
    pub fn apply_fresh_particle_on_screen(
        &mut self,
        scene: &mut Scene,
        index: usize,
    ) -> Result<(), SpawnError> {
        let (w, h) = checked_dimensions(scene)?;

        let direction = (self.rng.gen_range(0..360) as f32).to_radians();
        let x = self.rng.gen_range(0..w) as f32;
        let y = self.rng.gen_range(0..h) as f32;
        let step_multiplier = self.random_step_multiplier();
        let radius = self.random_radius(scene);

        scene.set_particle_data(
            index,
            x,
            y,
            direction.cos(),
            direction.sin(),
            radius,
            step_multiplier,
        );
        Ok(())
    }

    /// Places the particle at `index` just outside a random viewport edge,
    /// heading back toward the visible area.
    ///
    /// The particle starts `particle_radius_min + line_distance` beyond the
    /// edge, far enough out that no connection line can reach an on-screen
    /// particle until it re-enters.
    pub fn apply_fresh_particle_off_screen(
        &mut self,
        scene: &mut Scene,
        index: usize,
    ) -> Result<(), SpawnError> {
        let (w, h) = checked_dimensions(scene)?;

        let mut x = self.rng.gen_range(0..w) as f32;
        let mut y = self.rng.gen_range(0..h) as f32;
        let w = w as f32;
        let h = h as f32;

        // Offset past the chosen edge for the spawn point
        let offset = scene.particle_radius_min() + scene.line_distance();

        let pcc = PATH_CALCULATION_PADDING;

        // Pick an edge, push the perpendicular coordinate outside it, and
        // compute the angle range that points from there back into the
        // viewport interior.
        let (start_angle, mut end_angle) = match self.rng.gen_range(0..4) {
            0 => {
                // offset to left
                x = -offset;
                (
                    angle_deg(pcc, pcc, x, y),
                    angle_deg(pcc, h - pcc, x, y),
                )
            }
            1 => {
                // offset to top
                y = -offset;
                (
                    angle_deg(w - pcc, pcc, x, y),
                    angle_deg(pcc, pcc, x, y),
                )
            }
            2 => {
                // offset to right
                x = w + offset;
                (
                    angle_deg(w - pcc, h - pcc, x, y),
                    angle_deg(w - pcc, pcc, x, y),
                )
            }
            _ => {
                // offset to bottom
                y = h + offset;
                (
                    angle_deg(pcc, h - pcc, x, y),
                    angle_deg(w - pcc, h - pcc, x, y),
                )
            }
        };

        if end_angle < start_angle {
            end_angle += 360.0;
        }

        // Integer-degree granularity; a degenerate range collapses to the
        // start angle rather than sampling an empty span.
        let span = (end_angle - start_angle).abs() as u32;
        let angle_in_range = if span == 0 {
            start_angle
        } else {
            start_angle + self.rng.gen_range(0..span) as f32
        };
        let direction = angle_in_range.to_radians();

        let step_multiplier = self.random_step_multiplier();
        let radius = self.random_radius(scene);

        scene.set_particle_data(
            index,
            x,
            y,
            direction.cos(),
            direction.sin(),
            radius,
            step_multiplier,
        );
        Ok(())
    }

    /// Individual speed scalar: 11 discrete values, 0.1 apart, in [0.5, 1.5].
    fn random_step_multiplier(&mut self) -> f32 {
        1.0 + 0.1 * (self.rng.gen_range(0..11) as f32 - 5.0)
    }

    /// Radius at 0.01 granularity in [min, max]; fixed when min == max.
    fn random_radius(&mut self, scene: &Scene) -> f32 {
        let min = scene.particle_radius_min();
        let max = scene.particle_radius_max();
        if min == max {
            return min;
        }
        let span = ((max - min) * 100.0) as u32;
        if span == 0 {
            // min and max closer than the sampling granularity
            min
        } else {
            min + self.rng.gen_range(0..span) as f32 / 100.0
        }
    }
}

impl Default for ParticleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn checked_dimensions(scene: &Scene) -> Result<(u32, u32), SpawnError> {
    let w = scene.width();
    let h = scene.height();
    if w == 0 || h == 0 {
        return Err(SpawnError::EmptyBounds);
    }
    Ok((w, h))
}
