//! # plexus — proximity-linked particle field
//!
//! Animates a field of drifting particles connected by distance-faded lines,
//! the classic "constellation" background effect. The crate is the
//! simulation and scene engine: packed particle state, per-frame motion with
//! directed off-screen re-entry, randomized particle generation, and a frame
//! pacing state machine. Drawing backends and scheduling transports plug in
//! through two narrow traits.
//!
//! ## Quick Start
//!
//! ```ignore
//! use plexus::prelude::*;
//!
//! struct MyScheduler { /* timer or vsync handle */ }
//! impl SceneScheduler for MyScheduler {
//!     fn schedule_next_frame(&mut self, delay_millis: u64) { /* arm timer */ }
//!     fn unschedule_next_frame(&mut self) { /* cancel timer */ }
//!     fn invalidate(&mut self) { /* request redraw */ }
//! }
//!
//! struct MyBackend { /* canvas, GL buffers, ... */ }
//! impl LowLevelRenderer for MyBackend {
//!     fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: u32) {}
//!     fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: u32) {}
//! }
//!
//! let mut engine = Engine::new(
//!     Scene::new(),
//!     Box::new(MyScheduler { /* ... */ }),
//!     Box::new(DefaultSceneRenderer::new(MyBackend { /* ... */ })),
//! );
//! engine.set_dimensions(width, height)?;
//! engine.start()?;
//! // when the timer fires: engine.run()?;
//! // when the surface repaints: engine.draw();
//! ```
//!
//! ## Core Concepts
//!
//! ### Scene
//!
//! [`Scene`] holds all particle state in flat parallel buffers plus the
//! validated global configuration (colors, thresholds, density). It is pure
//! data: no scheduling, no drawing.
//!
//! ### Engine
//!
//! [`Engine`] owns the start/stop lifecycle and frame timing. Each scheduled
//! tick advances every particle by a step derived from elapsed wall-clock
//! time, then asks the scheduler to fire again after
//! `frame_delay - last_draw_duration`.
//!
//! ### Off-screen-converging spawns
//!
//! A particle that leaves the viewport (by more than
//! `particle_radius_min + line_distance`, so no visible line can pop) is
//! regenerated just outside a random edge with a heading guaranteed to bring
//! it back into view. [`Engine::make_fresh_frame_with_particles_offscreen`]
//! uses the same trick for the whole field at once.
//!
//! ## Threading
//!
//! One engine, one logical animation thread. Nothing is internally
//! synchronized; marshal configuration changes onto the thread that drives
//! `run`/`draw`.

mod advancer;
mod config;
pub mod defaults;
mod engine;
mod error;
mod generator;
pub mod math;
mod renderer;
mod scene;
pub mod time;
pub mod visuals;

pub use advancer::FrameAdvancer;
pub use config::SceneConfig;
pub use engine::{Engine, SceneScheduler};
pub use error::{ConfigError, SpawnError};
pub use generator::ParticleGenerator;
pub use glam::Vec2;
pub use renderer::{DefaultSceneRenderer, LowLevelRenderer, SceneRenderer};
pub use scene::Scene;
pub use time::{Clock, MonotonicClock};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use plexus::prelude::*;
/// ```
pub mod prelude {
    pub use crate::advancer::FrameAdvancer;
    pub use crate::config::SceneConfig;
    pub use crate::engine::{Engine, SceneScheduler};
    pub use crate::error::{ConfigError, SpawnError};
    pub use crate::generator::ParticleGenerator;
    pub use crate::renderer::{DefaultSceneRenderer, LowLevelRenderer, SceneRenderer};
    pub use crate::scene::Scene;
    pub use crate::time::{Clock, MonotonicClock};
    pub use crate::Vec2;
}
