//! Integration scenarios for the engine state machine, driven with a
//! scripted clock and recording scheduler/renderer collaborators.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use plexus::{Clock, Engine, Scene, SceneRenderer, SceneScheduler, Vec2};

#[derive(Debug, Clone, PartialEq, Eq)]
enum SchedulerEvent {
    Schedule(u64),
    Unschedule,
    Invalidate,
}

#[derive(Clone, Default)]
struct RecordingScheduler {
    events: Rc<RefCell<Vec<SchedulerEvent>>>,
}

impl SceneScheduler for RecordingScheduler {
    fn schedule_next_frame(&mut self, delay_millis: u64) {
        self.events
            .borrow_mut()
            .push(SchedulerEvent::Schedule(delay_millis));
    }

    fn unschedule_next_frame(&mut self) {
        self.events.borrow_mut().push(SchedulerEvent::Unschedule);
    }

    fn invalidate(&mut self) {
        self.events.borrow_mut().push(SchedulerEvent::Invalidate);
    }
}

#[derive(Clone, Default)]
struct CountingRenderer {
    draws: Rc<Cell<usize>>,
}

impl SceneRenderer for CountingRenderer {
    fn draw_scene(&mut self, _scene: &Scene) {
        self.draws.set(self.draws.get() + 1);
    }
}

/// Clock whose reading the test scripts by hand.
#[derive(Clone, Default)]
struct ScriptedClock {
    now: Rc<Cell<u64>>,
}

impl ScriptedClock {
    fn advance(&self, millis: u64) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for ScriptedClock {
    fn uptime_millis(&self) -> u64 {
        self.now.get()
    }
}

struct Harness {
    engine: Engine,
    events: Rc<RefCell<Vec<SchedulerEvent>>>,
    draws: Rc<Cell<usize>>,
    clock: ScriptedClock,
}

fn harness_with_scene(scene: Scene) -> Harness {
    let scheduler = RecordingScheduler::default();
    let renderer = CountingRenderer::default();
    let clock = ScriptedClock::default();
    let events = scheduler.events.clone();
    let draws = renderer.draws.clone();
    let engine = Engine::with_clock(
        scene,
        Box::new(scheduler),
        Box::new(renderer),
        Box::new(clock.clone()),
    );
    Harness {
        engine,
        events,
        draws,
        clock,
    }
}

fn harness() -> Harness {
    harness_with_scene(Scene::new())
}

#[test]
fn engine_is_stopped_by_default() {
    assert!(!harness().engine.is_running());
}

#[test]
fn start_then_set_dimensions_keeps_running() {
    let mut h = harness();
    h.engine.start().unwrap();
    h.engine.set_dimensions(10, 10).unwrap();
    assert!(h.engine.is_running());
    h.engine.stop();
    assert!(!h.engine.is_running());
}

#[test]
fn start_with_zero_bounds_does_not_fail() {
    let mut h = harness();
    h.engine.start().unwrap();
    h.engine.stop();
}

#[test]
fn start_schedules_the_next_frame_with_the_frame_delay() {
    let mut h = harness();
    h.engine.scene_mut().set_frame_delay(16);
    h.engine.start().unwrap();
    assert!(h
        .events
        .borrow()
        .contains(&SchedulerEvent::Schedule(16)));
}

#[test]
fn start_twice_schedules_only_once() {
    let mut h = harness();
    h.engine.start().unwrap();
    h.engine.start().unwrap();
    let schedules = h
        .events
        .borrow()
        .iter()
        .filter(|e| matches!(e, SchedulerEvent::Schedule(_)))
        .count();
    assert_eq!(schedules, 1);
}

#[test]
fn stop_unschedules_the_pending_frame() {
    let mut h = harness();
    h.engine.start().unwrap();
    h.engine.stop();
    assert_eq!(
        h.events.borrow().last(),
        Some(&SchedulerEvent::Unschedule)
    );
}

#[test]
fn stop_without_start_touches_nothing() {
    let mut h = harness();
    h.engine.stop();
    assert!(h.events.borrow().is_empty());
}

#[test]
fn next_frame_requests_a_visual_refresh() {
    let mut h = harness();
    h.engine.next_frame().unwrap();
    assert!(h.events.borrow().contains(&SchedulerEvent::Invalidate));
}

#[test]
fn run_while_stopped_does_not_schedule() {
    let mut h = harness();
    h.engine.run().unwrap();
    assert!(h.events.borrow().is_empty());
}

#[test]
fn run_while_running_schedules_again() {
    let mut h = harness();
    h.engine.start().unwrap();
    h.events.borrow_mut().clear();
    h.engine.run().unwrap();
    assert!(h
        .events
        .borrow()
        .iter()
        .any(|e| matches!(e, SchedulerEvent::Schedule(_))));
}

#[test]
fn first_step_after_start_is_unit_then_time_scaled() {
    let mut scene = Scene::new();
    scene.set_density(1);
    let mut h = harness_with_scene(scene);
    h.engine.set_dimensions(10_000, 10_000).unwrap();

    // Pin the particle to a known state: heading right, unit speeds
    h.engine
        .scene_mut()
        .set_particle_data(0, 5000.0, 5000.0, 1.0, 0.0, 1.0, 1.0);

    // First frame after start uses a unit step regardless of the clock
    h.clock.advance(100_000);
    h.engine.start().unwrap();
    assert_eq!(
        h.engine.scene().particle_position(0),
        Vec2::new(5001.0, 5000.0)
    );

    // 40 ms * 0.05 step-per-ms = step 2.0
    h.clock.advance(40);
    h.engine.run().unwrap();
    assert_eq!(
        h.engine.scene().particle_position(0),
        Vec2::new(5003.0, 5000.0)
    );
}

#[test]
fn stop_resets_frame_timing() {
    let mut scene = Scene::new();
    scene.set_density(1);
    let mut h = harness_with_scene(scene);
    h.engine.set_dimensions(10_000, 10_000).unwrap();
    h.engine
        .scene_mut()
        .set_particle_data(0, 5000.0, 5000.0, 1.0, 0.0, 1.0, 1.0);

    h.engine.start().unwrap();
    h.engine.stop();

    // A long pause while stopped must not become a huge step
    h.clock.advance(60_000);
    h.engine
        .scene_mut()
        .set_particle_data(0, 5000.0, 5000.0, 1.0, 0.0, 1.0, 1.0);
    h.engine.start().unwrap();
    assert_eq!(
        h.engine.scene().particle_position(0),
        Vec2::new(5001.0, 5000.0)
    );
}

#[test]
fn draw_duration_shortens_the_next_frame_delay() {
    // draw() measures with the same clock; make it appear to take 4 ms by
    // advancing the clock from inside the renderer.
    struct SlowRenderer {
        clock: ScriptedClock,
    }
    impl SceneRenderer for SlowRenderer {
        fn draw_scene(&mut self, _scene: &Scene) {
            self.clock.advance(4);
        }
    }

    let scheduler = RecordingScheduler::default();
    let events = scheduler.events.clone();
    let clock = ScriptedClock::default();
    let mut engine = Engine::with_clock(
        Scene::new(),
        Box::new(scheduler),
        Box::new(SlowRenderer {
            clock: clock.clone(),
        }),
        Box::new(clock),
    );
    engine.draw();
    engine.start().unwrap();
    assert!(events.borrow().contains(&SchedulerEvent::Schedule(6)));
}

#[test]
fn frame_delay_never_goes_negative() {
    struct VerySlowRenderer {
        clock: ScriptedClock,
    }
    impl SceneRenderer for VerySlowRenderer {
        fn draw_scene(&mut self, _scene: &Scene) {
            self.clock.advance(500);
        }
    }

    let scheduler = RecordingScheduler::default();
    let events = scheduler.events.clone();
    let clock = ScriptedClock::default();
    let mut engine = Engine::with_clock(
        Scene::new(),
        Box::new(scheduler),
        Box::new(VerySlowRenderer {
            clock: clock.clone(),
        }),
        Box::new(clock),
    );
    engine.draw();
    engine.start().unwrap();
    assert!(events.borrow().contains(&SchedulerEvent::Schedule(0)));
}

#[test]
fn draw_delegates_to_the_renderer() {
    let mut h = harness();
    h.engine.draw();
    h.engine.draw();
    assert_eq!(h.draws.get(), 2);
}

#[test]
fn make_fresh_frame_is_safe_before_layout() {
    let mut h = harness();
    h.engine.make_fresh_frame().unwrap();
    h.engine.make_fresh_frame_with_particles_offscreen().unwrap();
}

#[test]
fn make_fresh_frame_repopulates_with_positive_bounds() {
    let mut h = harness();
    h.engine.set_dimensions(300, 200).unwrap();
    h.engine.make_fresh_frame().unwrap();
    let scene = h.engine.scene();
    for i in 0..scene.density() {
        // Every particle has a generated per-particle speed
        assert!((0.5..=1.5).contains(&scene.particle_step_multiplier(i)));
    }
}

#[test]
fn escaped_particle_is_regenerated_off_screen_on_the_same_step() {
    let mut scene = Scene::new();
    scene.set_density(1);
    let mut h = harness_with_scene(scene);
    h.engine.set_dimensions(100, 100).unwrap();

    let scene = h.engine.scene_mut();
    let offset = scene.particle_radius_min() + scene.line_distance();
    // At the margin boundary, heading further out
    scene.set_particle_data(0, 100.0 + offset, 50.0, 1.0, 0.0, 1.0, 1.0);

    h.engine.next_frame().unwrap();

    let p = h.engine.scene().particle_position(0);
    let on_an_edge = p.x == -offset
        || p.x == 100.0 + offset
        || p.y == -offset
        || p.y == 100.0 + offset;
    assert!(on_an_edge, "expected off-screen respawn, got {:?}", p);
}
