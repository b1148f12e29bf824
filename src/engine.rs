//! The engine: animation lifecycle, frame timing and particle population.
//!
//! A single-threaded orchestrator tying the scene, the frame advancer, the
//! particle generator and the injected scheduler/renderer collaborators
//! together. All methods are meant to be driven from one logical animation
//! thread or callback chain; nothing here is internally synchronized.

use crate::advancer::FrameAdvancer;
use crate::error::SpawnError;
use crate::generator::ParticleGenerator;
use crate::renderer::SceneRenderer;
use crate::scene::Scene;
use crate::time::{Clock, MonotonicClock};

/// Converts elapsed milliseconds between frames into a motion-scale step.
const STEP_PER_MS: f32 = 0.05;

/// Scheduling transport the engine drives. How "redraw in N ms" is realized
/// (timer, vsync callback, queued task) is the implementer's business;
/// `invalidate` may be coalesced.
pub trait SceneScheduler {
    /// Arrange for [`Engine::run`] to be called after the given delay.
    fn schedule_next_frame(&mut self, delay_millis: u64);

    /// Drop any pending scheduled frame.
    fn unschedule_next_frame(&mut self);

    /// Request a visual refresh at the next opportunity, decoupled from
    /// scheduling the simulation step.
    fn invalidate(&mut self);
}

/// Whether the scene's particle buffers have been populated for the current
/// surface. Dimensions dropping to zero resets this, so a later positive
/// resize repopulates from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParticlesState {
    Uninitialized,
    Populated,
}

/// Animation engine for one [`Scene`].
///
/// # Example
///
/// ```ignore
/// let mut engine = Engine::new(Scene::new(), Box::new(scheduler), Box::new(renderer));
/// engine.set_dimensions(width, height)?;
/// engine.start()?;
/// // scheduler fires later:
/// engine.run()?;
/// ```
pub struct Engine {
    advancer: FrameAdvancer,
    generator: ParticleGenerator,
    scene: Scene,
    scheduler: Box<dyn SceneScheduler>,
    renderer: Box<dyn SceneRenderer>,
    clock: Box<dyn Clock>,

    particles: ParticlesState,
    last_frame_time: Option<u64>,
    last_draw_duration: u64,
    animating: bool,
}

impl Engine {
    pub fn new(
        scene: Scene,
        scheduler: Box<dyn SceneScheduler>,
        renderer: Box<dyn SceneRenderer>,
    ) -> Self {
        Self::with_clock(scene, scheduler, renderer, Box::new(MonotonicClock::new()))
    }

    /// Full constructor with an explicit clock, for deterministic tests.
    pub fn with_clock(
        scene: Scene,
        scheduler: Box<dyn SceneScheduler>,
        renderer: Box<dyn SceneRenderer>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            advancer: FrameAdvancer::new(ParticleGenerator::new()),
            generator: ParticleGenerator::new(),
            scene,
            scheduler,
            renderer,
            clock,
            particles: ParticlesState::Uninitialized,
            last_frame_time: None,
            last_draw_duration: 0,
            animating: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Configuration access. Touching per-particle buffers mid-animation is
    /// the caller's responsibility to marshal onto the animation thread.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Scene-wide opacity pass-through for drawable glue.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.scene.set_alpha(alpha);
    }

    pub fn alpha(&self) -> u8 {
        self.scene.alpha()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.animating
    }

    /// Starts animating: computes one frame immediately and schedules the
    /// next. No-op when already running.
    pub fn start(&mut self) -> Result<(), SpawnError> {
        if !self.animating {
            self.animating = true;
            self.reset_last_frame_time();
            self.goto_next_frame_and_schedule()?;
        }
        Ok(())
    }

    /// Stops animating and cancels any pending scheduled frame. No-op when
    /// already stopped.
    pub fn stop(&mut self) {
        if self.animating {
            self.animating = false;
            self.reset_last_frame_time();
            self.scheduler.unschedule_next_frame();
        }
    }

    /// Fired by the scheduler when a scheduled frame becomes due.
    ///
    /// A fire racing a [`stop`](Self::stop) must not animate, so a stopped
    /// engine only resets its frame time here.
    pub fn run(&mut self) -> Result<(), SpawnError> {
        if self.animating {
            self.goto_next_frame_and_schedule()
        } else {
            self.reset_last_frame_time();
            Ok(())
        }
    }

    /// Advances the simulation one frame and requests a visual refresh.
    ///
    /// The step is 1.0 for the first frame after a (re)start, else the
    /// elapsed milliseconds scaled by `STEP_PER_MS`, so a long stop never
    /// turns into one huge jump.
    pub fn next_frame(&mut self) -> Result<(), SpawnError> {
        let now = self.clock.uptime_millis();
        let step = match self.last_frame_time {
            None => 1.0,
            Some(last) => (now - last) as f32 * STEP_PER_MS,
        };
        self.advancer.advance_to_next_frame(&mut self.scene, step)?;
        self.last_frame_time = Some(now);
        self.scheduler.invalidate();
        Ok(())
    }

    /// Draws the scene through the renderer collaborator, recording how long
    /// the draw took so the next frame delay can compensate.
    pub fn draw(&mut self) {
        let start = self.clock.uptime_millis();
        self.renderer.draw_scene(&self.scene);
        self.last_draw_duration = self.clock.uptime_millis() - start;
    }

    /// Updates the scene dimensions. The first resize to a positive size
    /// populates all particles, alternating on-screen and off-screen
    /// converging spawns so the initial scene already has some particles in
    /// flight toward the viewport. A resize to zero marks the particles
    /// unpopulated again.
    pub fn set_dimensions(&mut self, width: u32, height: u32) -> Result<(), SpawnError> {
        self.scene.set_width(width);
        self.scene.set_height(height);
        if width > 0 && height > 0 {
            if self.particles == ParticlesState::Uninitialized {
                self.init_particles()?;
                self.particles = ParticlesState::Populated;
            }
        } else {
            self.particles = ParticlesState::Uninitialized;
        }
        Ok(())
    }

    /// Resets timing and regenerates all particles with the alternating
    /// on/off-screen strategy. Useful for an immediate fresh arrangement
    /// without waiting for the animation to settle. Safe to call before
    /// layout: with zero bounds this silently does nothing.
    pub fn make_fresh_frame(&mut self) -> Result<(), SpawnError> {
        if self.scene.width() > 0 && self.scene.height() > 0 {
            self.reset_last_frame_time();
            self.init_particles()?;
        }
        Ok(())
    }

    /// Like [`make_fresh_frame`](Self::make_fresh_frame), but every particle
    /// spawns off screen, so the whole field visibly streams in from the
    /// edges once animation starts. Also a silent no-op with zero bounds.
    pub fn make_fresh_frame_with_particles_offscreen(&mut self) -> Result<(), SpawnError> {
        if self.scene.width() > 0 && self.scene.height() > 0 {
            self.reset_last_frame_time();
            self.init_particles_off_screen()?;
        }
        Ok(())
    }

    fn init_particles(&mut self) -> Result<(), SpawnError> {
        for i in 0..self.scene.density() {
            if i % 2 == 0 {
                self.generator.apply_fresh_particle_on_screen(&mut self.scene, i)?;
            } else {
                self.generator.apply_fresh_particle_off_screen(&mut self.scene, i)?;
            }
        }
        Ok(())
    }

    fn init_particles_off_screen(&mut self) -> Result<(), SpawnError> {
        for i in 0..self.scene.density() {
            self.generator.apply_fresh_particle_off_screen(&mut self.scene, i)?;
        }
        Ok(())
    }

    fn goto_next_frame_and_schedule(&mut self) -> Result<(), SpawnError> {
        self.next_frame()?;
        let delay = u64::from(self.scene.frame_delay()).saturating_sub(self.last_draw_duration);
        self.scheduler.schedule_next_frame(delay);
        Ok(())
    }

    fn reset_last_frame_time(&mut self) {
        self.last_frame_time = None;
    }
}
