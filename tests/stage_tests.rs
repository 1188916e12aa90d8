// Host-side tests for the emitter/sink binding, using a recording sink in place
// of the DOM container.

use glam::Vec2;
use ink_core::*;
use std::collections::BTreeSet;
use std::time::Duration;

#[derive(Default)]
struct RecordingSink {
    live: BTreeSet<u64>,
    spawned: usize,
    launched: Vec<u64>,
    removed: Vec<u64>,
}

impl DotSink for RecordingSink {
    fn spawn(&mut self, dot: &Particle) {
        self.spawned += 1;
        self.live.insert(dot.id.0);
    }

    fn launch(&mut self, id: ParticleId, _offset: Vec2) {
        assert!(self.live.contains(&id.0), "launch before spawn");
        self.launched.push(id.0);
    }

    fn remove(&mut self, id: ParticleId) {
        assert!(self.live.remove(&id.0), "double removal of {id}");
        self.removed.push(id.0);
    }
}

fn make_stage(sink: Option<RecordingSink>) -> InkStage<RecordingSink> {
    InkStage::new(InkEmitter::seeded(InkConfig::default(), 3), sink)
}

fn sink(stage: &InkStage<RecordingSink>) -> &RecordingSink {
    stage.sink().expect("sink attached")
}

#[test]
fn missing_container_is_a_silent_no_op() {
    let mut stage = make_stage(None);
    assert!(!stage.is_attached());
    stage.emit(Vec2::new(10.0, 10.0), &EmitOptions::default(), Motion::Full);
    stage.tick(Duration::from_millis(16));
    stage.emit_after(
        Duration::from_millis(5),
        Vec2::ZERO,
        &EmitOptions::default(),
        Motion::Reduced,
    );
    assert_eq!(stage.emitter().live_count(), 0);
    assert!(!stage.remove(ParticleId(0)));
}

#[test]
fn sink_sees_spawn_launch_and_expiry() {
    let mut stage = make_stage(Some(RecordingSink::default()));
    let opts = EmitOptions::new().with_count(3).with_color("#00d0ff");
    stage.emit(Vec2::new(100.0, 100.0), &opts, Motion::Full);
    assert_eq!(sink(&stage).spawned, 3);
    assert!(sink(&stage).launched.is_empty());

    stage.tick(Duration::from_millis(16));
    assert_eq!(sink(&stage).launched, vec![0, 1, 2]);

    stage.tick(Duration::from_millis(DOT_LIFETIME_MS));
    assert_eq!(sink(&stage).removed, vec![0, 1, 2]);
    assert!(sink(&stage).live.is_empty());
}

#[test]
fn sink_mirrors_the_pool_under_pressure() {
    let mut stage = make_stage(Some(RecordingSink::default()));
    for _ in 0..10 {
        stage.emit(Vec2::ZERO, &EmitOptions::new().with_count(10), Motion::Full);
    }
    let live: Vec<u64> = stage.emitter().pool().iter().map(|d| d.id.0).collect();
    assert_eq!(sink(&stage).live.iter().copied().collect::<Vec<_>>(), live);
    assert_eq!(sink(&stage).live.len(), MAX_LIVE_DOTS);
    assert_eq!(sink(&stage).removed, (0..30).collect::<Vec<_>>());

    // Evicted dots never launch and never expire a second time.
    stage.tick(Duration::from_millis(DOT_LIFETIME_MS));
    assert_eq!(sink(&stage).launched, (30..100).collect::<Vec<_>>());
    assert!(sink(&stage).live.is_empty());
}

#[test]
fn stage_remove_is_idempotent() {
    let mut stage = make_stage(Some(RecordingSink::default()));
    stage.emit(Vec2::ZERO, &EmitOptions::new().with_count(2), Motion::Reduced);
    assert!(stage.remove(ParticleId(0)));
    assert!(!stage.remove(ParticleId(0)));
    assert_eq!(sink(&stage).removed, vec![0]);
    assert_eq!(stage.emitter().live_count(), 1);
}
