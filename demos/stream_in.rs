//! Drives the engine headless, starting with every particle off screen, and
//! prints how the field streams into view frame by frame.
//!
//! Run with: `cargo run --example stream_in`

use plexus::{Engine, Scene, SceneRenderer, SceneScheduler, SpawnError};

struct NullScheduler;

impl SceneScheduler for NullScheduler {
    fn schedule_next_frame(&mut self, _delay_millis: u64) {}
    fn unschedule_next_frame(&mut self) {}
    fn invalidate(&mut self) {}
}

struct NullRenderer;

impl SceneRenderer for NullRenderer {
    fn draw_scene(&mut self, _scene: &Scene) {}
}

fn visible_particles(scene: &Scene) -> usize {
    (0..scene.density())
        .filter(|&i| {
            let p = scene.particle_position(i);
            (0.0..scene.width() as f32).contains(&p.x)
                && (0.0..scene.height() as f32).contains(&p.y)
        })
        .count()
}

fn main() -> Result<(), SpawnError> {
    let mut engine = Engine::new(Scene::new(), Box::new(NullScheduler), Box::new(NullRenderer));
    engine.set_dimensions(640, 360)?;
    engine.scene_mut().set_step_multiplier(4.0).unwrap();
    engine.make_fresh_frame_with_particles_offscreen()?;

    let density = engine.scene().density();
    println!("Streaming {} particles into a 640x360 view", density);

    for frame in 0..=400u32 {
        if frame % 50 == 0 {
            println!(
                "frame {:>3}: {:>2}/{} particles visible",
                frame,
                visible_particles(engine.scene()),
                density
            );
        }
        // The engine derives its step from wall-clock time; pace the loop the
        // way a scheduler would.
        std::thread::sleep(std::time::Duration::from_millis(
            engine.scene().frame_delay() as u64,
        ));
        engine.next_frame()?;
    }

    Ok(())
}
