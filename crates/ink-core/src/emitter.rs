use crate::constants::*;
use crate::particle::{Particle, ParticleId};
use crate::pool::{Evicted, LivePool};
use glam::Vec2;
use rand::prelude::*;
use std::collections::VecDeque;
use std::f32::consts::TAU;
use std::time::Duration;

/// Platform motion preference, read by the caller for every emission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Full,
    Reduced,
}

impl Motion {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            Motion::Reduced
        } else {
            Motion::Full
        }
    }
}

/// Per-emission overrides. Anything left `None` falls back to the defaults for
/// the current [`Motion`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmitOptions {
    pub count: Option<usize>,
    pub max_dist: Option<f32>,
    pub dist_min: Option<f32>,
    pub size_min: Option<f32>,
    pub size_max: Option<f32>,
    pub color: Option<String>,
}

impl EmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_size(mut self, min: f32, max: f32) -> Self {
        self.size_min = Some(min);
        self.size_max = Some(max);
        self
    }

    pub fn with_size_max(mut self, max: f32) -> Self {
        self.size_max = Some(max);
        self
    }

    pub fn with_distance(mut self, dist_min: f32, max_dist: f32) -> Self {
        self.dist_min = Some(dist_min);
        self.max_dist = Some(max_dist);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Fill in every unset field.
    pub fn resolve(&self, motion: Motion) -> EmitParams<'_> {
        let reduced = motion == Motion::Reduced;
        EmitParams {
            count: self
                .count
                .unwrap_or(if reduced { REDUCED_COUNT } else { DEFAULT_COUNT }),
            max_dist: self.max_dist.unwrap_or(if reduced {
                REDUCED_MAX_DIST
            } else {
                DEFAULT_MAX_DIST
            }),
            dist_min: self.dist_min.unwrap_or(DEFAULT_DIST_MIN),
            size_min: self.size_min.unwrap_or(DEFAULT_SIZE_MIN),
            size_max: self.size_max.unwrap_or(DEFAULT_SIZE_MAX),
            color: self.color.as_deref(),
        }
    }
}

/// Fully resolved emission parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmitParams<'a> {
    pub count: usize,
    pub max_dist: f32,
    pub dist_min: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub color: Option<&'a str>,
}

#[derive(Clone, Debug)]
pub struct InkConfig {
    pub max_live: usize,
    pub lifetime: Duration,
    pub palette: &'static [&'static str],
}

impl Default for InkConfig {
    fn default() -> Self {
        Self {
            max_live: MAX_LIVE_DOTS,
            lifetime: Duration::from_millis(DOT_LIFETIME_MS),
            palette: &INK_PALETTE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Removal {
    /// Lifetime elapsed.
    Expired,
    /// Pushed out by a newer emission to keep the pool bounded.
    Evicted,
    /// Explicit removal by the owner.
    Dropped,
}

/// What the display layer has to do, in order.
#[derive(Clone, Debug)]
pub enum InkEvent {
    /// Phase 1: create the dot at rest on its origin.
    Spawned(Particle),
    /// Phase 2: apply the outward transform and fade.
    Launched { id: ParticleId, offset: Vec2 },
    Removed { id: ParticleId, reason: Removal },
}

/// Owns the live pool, the per-dot timers and the random source.
///
/// Time is whatever the caller feeds to [`InkEmitter::tick`]; one tick is one
/// display refresh.
pub struct InkEmitter<R: Rng = StdRng> {
    config: InkConfig,
    pool: LivePool,
    rng: R,
    next_id: u64,
    now: Duration,
    pending_launch: Vec<ParticleId>,
    // Sorted by deadline.
    removals: VecDeque<(Duration, ParticleId)>,
}

impl InkEmitter<StdRng> {
    pub fn from_entropy(config: InkConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }

    pub fn seeded(config: InkConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> InkEmitter<R> {
    pub fn new(config: InkConfig, rng: R) -> Self {
        let pool = LivePool::new(config.max_live);
        Self {
            config,
            pool,
            rng,
            next_id: 0,
            now: Duration::ZERO,
            pending_launch: Vec::new(),
            removals: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &InkConfig {
        &self.config
    }

    pub fn pool(&self) -> &LivePool {
        &self.pool
    }

    pub fn live_count(&self) -> usize {
        self.pool.len()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_launches(&self) -> usize {
        self.pending_launch.len()
    }

    /// Emit at the time of the last tick.
    pub fn emit(
        &mut self,
        origin: Vec2,
        options: &EmitOptions,
        motion: Motion,
        out: &mut Vec<InkEvent>,
    ) {
        self.emit_after(Duration::ZERO, origin, options, motion, out);
    }

    /// Emit `since_tick` after the last tick, for triggers that land between
    /// display refreshes. Creation time and the removal deadline both count
    /// from that instant.
    pub fn emit_after(
        &mut self,
        since_tick: Duration,
        origin: Vec2,
        options: &EmitOptions,
        motion: Motion,
        out: &mut Vec<InkEvent>,
    ) {
        let params = options.resolve(motion);
        let created_at = self.now + since_tick;
        for _ in 0..params.count {
            let dot = self.make_dot(origin, &params, created_at);
            let id = dot.id;
            self.pool.insert(dot.clone());
            self.pending_launch.push(id);
            self.schedule_removal(created_at + self.config.lifetime, id);
            out.push(InkEvent::Spawned(dot));
        }
        self.enforce_bound(out);
    }

    fn schedule_removal(&mut self, deadline: Duration, id: ParticleId) {
        let at = self.removals.partition_point(|(d, _)| *d <= deadline);
        self.removals.insert(at, (deadline, id));
    }

    fn make_dot(&mut self, origin: Vec2, params: &EmitParams<'_>, created_at: Duration) -> Particle {
        let size = params.size_min + self.rng.gen::<f32>() * (params.size_max - params.size_min);
        let color = match params.color {
            Some(c) => c.to_string(),
            None => self.pick_palette_color(),
        };
        let angle = self.rng.gen::<f32>() * TAU;
        let distance = params.dist_min + self.rng.gen::<f32>() * params.max_dist;
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        Particle {
            id,
            origin,
            size,
            color,
            angle,
            distance,
            created_at,
            launched: false,
        }
    }

    fn pick_palette_color(&mut self) -> String {
        let palette = self.config.palette;
        if palette.is_empty() {
            return String::new();
        }
        let idx = ((self.rng.gen::<f32>() * palette.len() as f32) as usize).min(palette.len() - 1);
        palette[idx].to_string()
    }

    fn enforce_bound(&mut self, out: &mut Vec<InkEvent>) {
        let evicted = self.pool.evict_overflow();
        if evicted.is_empty() {
            return;
        }
        log::debug!(
            "[ink] evicted {} dots (cap={})",
            evicted.len(),
            self.pool.capacity()
        );
        self.forget_timers(&evicted);
        out.extend(evicted.into_iter().map(|id| InkEvent::Removed {
            id,
            reason: Removal::Evicted,
        }));
    }

    fn forget_timers(&mut self, ids: &Evicted) {
        self.pending_launch.retain(|id| !ids.contains(id));
        self.removals.retain(|(_, id)| !ids.contains(id));
    }

    /// Advance one display refresh: launch everything created since the last
    /// tick, then expire every dot whose lifetime has run out.
    pub fn tick(&mut self, dt: Duration, out: &mut Vec<InkEvent>) {
        self.now += dt;
        for id in self.pending_launch.drain(..) {
            if let Some(dot) = self.pool.get_mut(id) {
                dot.launched = true;
                out.push(InkEvent::Launched {
                    id,
                    offset: dot.target_offset(),
                });
            }
        }
        while let Some(&(deadline, id)) = self.removals.front() {
            if deadline > self.now {
                break;
            }
            self.removals.pop_front();
            if self.pool.remove(id).is_some() {
                out.push(InkEvent::Removed {
                    id,
                    reason: Removal::Expired,
                });
            }
        }
    }

    /// Remove one dot now. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: ParticleId, out: &mut Vec<InkEvent>) -> bool {
        if self.pool.remove(id).is_none() {
            return false;
        }
        self.pending_launch.retain(|p| *p != id);
        self.removals.retain(|(_, p)| *p != id);
        out.push(InkEvent::Removed {
            id,
            reason: Removal::Dropped,
        });
        true
    }

    /// Drop every live dot and pending timer.
    pub fn clear(&mut self, out: &mut Vec<InkEvent>) {
        self.pending_launch.clear();
        self.removals.clear();
        out.extend(self.pool.clear().into_iter().map(|id| InkEvent::Removed {
            id,
            reason: Removal::Dropped,
        }));
    }
}
