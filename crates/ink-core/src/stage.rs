//! Binds an [`InkEmitter`] to whatever actually displays the dots.

use crate::emitter::{EmitOptions, InkConfig, InkEmitter, InkEvent, Motion};
use crate::particle::{Particle, ParticleId};
use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

/// Display side of the ink effect. Writes are best-effort: a sink swallows its
/// own failures.
pub trait DotSink {
    fn spawn(&mut self, dot: &Particle);
    fn launch(&mut self, id: ParticleId, offset: Vec2);
    fn remove(&mut self, id: ParticleId);
}

/// Emitter plus an optional sink. Without a sink every call is a silent no-op.
pub struct InkStage<S: DotSink, R: Rng = StdRng> {
    emitter: InkEmitter<R>,
    sink: Option<S>,
    events: Vec<InkEvent>,
}

impl<S: DotSink> InkStage<S, StdRng> {
    pub fn from_entropy(sink: Option<S>) -> Self {
        Self::new(InkEmitter::from_entropy(InkConfig::default()), sink)
    }
}

impl<S: DotSink, R: Rng> InkStage<S, R> {
    pub fn new(emitter: InkEmitter<R>, sink: Option<S>) -> Self {
        Self {
            emitter,
            sink,
            events: Vec::new(),
        }
    }

    pub fn emitter(&self) -> &InkEmitter<R> {
        &self.emitter
    }

    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.sink.is_some()
    }

    pub fn emit(&mut self, origin: Vec2, options: &EmitOptions, motion: Motion) {
        self.emit_after(Duration::ZERO, origin, options, motion);
    }

    pub fn emit_after(
        &mut self,
        since_tick: Duration,
        origin: Vec2,
        options: &EmitOptions,
        motion: Motion,
    ) {
        if self.sink.is_none() {
            return;
        }
        self.emitter
            .emit_after(since_tick, origin, options, motion, &mut self.events);
        self.flush();
    }

    pub fn tick(&mut self, dt: Duration) {
        if self.sink.is_none() {
            return;
        }
        self.emitter.tick(dt, &mut self.events);
        self.flush();
    }

    pub fn remove(&mut self, id: ParticleId) -> bool {
        let removed = self.emitter.remove(id, &mut self.events);
        self.flush();
        removed
    }

    fn flush(&mut self) {
        let Some(sink) = self.sink.as_mut() else {
            self.events.clear();
            return;
        };
        for ev in self.events.drain(..) {
            match ev {
                InkEvent::Spawned(dot) => sink.spawn(&dot),
                InkEvent::Launched { id, offset } => sink.launch(id, offset),
                InkEvent::Removed { id, .. } => sink.remove(id),
            }
        }
    }
}
