//! Renderer contracts and the backend-independent scene renderer.
//!
//! The engine only knows [`SceneRenderer`]: one whole-scene draw call.
//! [`DefaultSceneRenderer`] implements it on top of a [`LowLevelRenderer`],
//! doing the pair iteration and color resolution here so a concrete backend
//! only has to draw lines and filled circles.

use crate::math::distance;
use crate::scene::Scene;
use crate::visuals::{resolve_line_color_with_alpha, resolve_particle_color_with_scene_alpha};

/// Draws a whole scene. Implementations must tolerate a scene with
/// density 0 (no-op).
pub trait SceneRenderer {
    fn draw_scene(&mut self, scene: &Scene);
}

/// Primitive drawing operations a backend must provide. Colors are packed
/// ARGB with the alpha already resolved.
pub trait LowLevelRenderer {
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: u32);

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: u32);
}

/// [`SceneRenderer`] over any [`LowLevelRenderer`]: connection lines for
/// every particle pair under the distance threshold, then a filled circle
/// per particle.
pub struct DefaultSceneRenderer<R> {
    renderer: R,
}

impl<R: LowLevelRenderer> DefaultSceneRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Consumes the wrapper, returning the backend.
    pub fn into_inner(self) -> R {
        self.renderer
    }
}

impl<R: LowLevelRenderer> SceneRenderer for DefaultSceneRenderer<R> {
    fn draw_scene(&mut self, scene: &Scene) {
        let count = scene.density();
        if count == 0 {
            return;
        }

        let particle_color =
            resolve_particle_color_with_scene_alpha(scene.particle_color(), scene.alpha());

        for i in 0..count {
            let a = scene.particle_position(i);

            // Connection lines for eligible pairs, each pair drawn once
            for j in (i + 1)..count {
                let b = scene.particle_position(j);
                let line_length = distance(a.x, a.y, b.x, b.y);
                if line_length < scene.line_distance() {
                    let line_color = resolve_line_color_with_alpha(
                        scene.alpha(),
                        scene.line_color(),
                        scene.line_distance(),
                        line_length,
                    );
                    self.renderer
                        .draw_line(a.x, a.y, b.x, b.y, scene.line_thickness(), line_color);
                }
            }

            self.renderer
                .fill_circle(a.x, a.y, scene.particle_radius(i), particle_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingRenderer {
        lines: Vec<(f32, f32, f32, f32, f32, u32)>,
        circles: Vec<(f32, f32, f32, u32)>,
    }

    impl LowLevelRenderer for RecordingRenderer {
        fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: u32) {
            self.lines.push((x1, y1, x2, y2, thickness, color));
        }

        fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: u32) {
            self.circles.push((cx, cy, radius, color));
        }
    }

    #[test]
    fn test_empty_scene_draws_nothing() {
        let mut scene = Scene::new();
        scene.set_density(0);
        let mut renderer = DefaultSceneRenderer::new(RecordingRenderer::default());
        renderer.draw_scene(&scene);
        let recording = renderer.into_inner();
        assert!(recording.lines.is_empty());
        assert!(recording.circles.is_empty());
    }

    #[test]
    fn test_close_pair_gets_a_line_and_two_circles() {
        let mut scene = Scene::new();
        scene.set_density(2);
        scene.set_line_distance(50.0).unwrap();
        scene.set_particle_data(0, 10.0, 10.0, 1.0, 0.0, 2.0, 1.0);
        scene.set_particle_data(1, 40.0, 10.0, 1.0, 0.0, 3.0, 1.0);

        let mut renderer = DefaultSceneRenderer::new(RecordingRenderer::default());
        renderer.draw_scene(&scene);
        let recording = renderer.into_inner();

        assert_eq!(recording.lines.len(), 1);
        assert_eq!(recording.circles.len(), 2);
        let (x1, y1, x2, y2, thickness, _) = recording.lines[0];
        assert_eq!((x1, y1, x2, y2), (10.0, 10.0, 40.0, 10.0));
        assert_eq!(thickness, scene.line_thickness());
        // Circles carry the generated radii
        assert_eq!(recording.circles[0].2, 2.0);
        assert_eq!(recording.circles[1].2, 3.0);
    }

    #[test]
    fn test_distant_pair_gets_no_line() {
        let mut scene = Scene::new();
        scene.set_density(2);
        scene.set_line_distance(20.0).unwrap();
        scene.set_particle_data(0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0);
        scene.set_particle_data(1, 100.0, 0.0, 1.0, 0.0, 1.0, 1.0);

        let mut renderer = DefaultSceneRenderer::new(RecordingRenderer::default());
        renderer.draw_scene(&scene);
        let recording = renderer.into_inner();

        assert!(recording.lines.is_empty());
        assert_eq!(recording.circles.len(), 2);
    }

    #[test]
    fn test_pair_at_exact_line_distance_gets_no_line() {
        let mut scene = Scene::new();
        scene.set_density(2);
        scene.set_line_distance(30.0).unwrap();
        scene.set_particle_data(0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0);
        scene.set_particle_data(1, 30.0, 0.0, 1.0, 0.0, 1.0, 1.0);

        let mut renderer = DefaultSceneRenderer::new(RecordingRenderer::default());
        renderer.draw_scene(&scene);
        assert!(renderer.into_inner().lines.is_empty());
    }

    #[test]
    fn test_particle_color_resolved_with_scene_alpha() {
        let mut scene = Scene::new();
        scene.set_density(1);
        scene.set_particle_color(0xFF336699);
        scene.set_alpha(0);
        scene.set_particle_data(0, 5.0, 5.0, 1.0, 0.0, 1.0, 1.0);

        let mut renderer = DefaultSceneRenderer::new(RecordingRenderer::default());
        renderer.draw_scene(&scene);
        let recording = renderer.into_inner();
        assert_eq!(recording.circles[0].3, 0x00336699);
    }
}
