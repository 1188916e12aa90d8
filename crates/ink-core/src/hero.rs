//! Logo reveal timeline: three staggered intro bursts, then a handful of
//! ambient splats, then silence.

use crate::constants::{
    HERO_AMBIENT_INTERVAL_MS, HERO_AMBIENT_JITTER, HERO_AMBIENT_MAX, HERO_START_DELAY_MS,
};
use crate::emitter::EmitOptions;
use glam::Vec2;
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstSpec {
    pub delay_ms: u64,
    pub count: usize,
    pub size_min: f32,
    pub size_max: f32,
    pub dist_min: f32,
    pub max_dist: f32,
}

impl BurstSpec {
    pub fn options(&self) -> EmitOptions {
        EmitOptions::new()
            .with_count(self.count)
            .with_size(self.size_min, self.size_max)
            .with_distance(self.dist_min, self.max_dist)
    }
}

// Delays are relative to the first burst; intensity drops with each one.
pub const INTRO_BURSTS: [BurstSpec; 3] = [
    BurstSpec {
        delay_ms: 0,
        count: 18,
        size_min: 12.0,
        size_max: 30.0,
        dist_min: 30.0,
        max_dist: 140.0,
    },
    BurstSpec {
        delay_ms: 160,
        count: 14,
        size_min: 8.0,
        size_max: 22.0,
        dist_min: 20.0,
        max_dist: 110.0,
    },
    BurstSpec {
        delay_ms: 320,
        count: 10,
        size_min: 6.0,
        size_max: 18.0,
        dist_min: 10.0,
        max_dist: 90.0,
    },
];

pub const AMBIENT_BURST: BurstSpec = BurstSpec {
    delay_ms: HERO_AMBIENT_INTERVAL_MS,
    count: 8,
    size_min: 6.0,
    size_max: 14.0,
    dist_min: 18.0,
    max_dist: 70.0,
};

#[derive(Clone, Debug, PartialEq)]
pub enum HeroCue {
    /// Splash at the logo centre shifted by `jitter`.
    Burst { jitter: Vec2, options: EmitOptions },
    /// Make the logo visible.
    RevealLogo,
}

#[derive(Clone, Debug, Default)]
pub struct HeroSequence {
    elapsed: Duration,
    intro_fired: usize,
    ambient_fired: u32,
}

impl HeroSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finished(&self) -> bool {
        self.intro_fired == INTRO_BURSTS.len() && self.ambient_fired >= HERO_AMBIENT_MAX
    }

    pub fn ambient_fired(&self) -> u32 {
        self.ambient_fired
    }

    /// Advance by `dt` (time since window load on the first call) and push every
    /// cue that fell due.
    pub fn tick<R: Rng>(&mut self, dt: Duration, rng: &mut R, out: &mut Vec<HeroCue>) {
        if self.is_finished() {
            return;
        }
        self.elapsed += dt;
        let start = Duration::from_millis(HERO_START_DELAY_MS);

        while let Some(spec) = INTRO_BURSTS.get(self.intro_fired) {
            if start + Duration::from_millis(spec.delay_ms) > self.elapsed {
                break;
            }
            out.push(HeroCue::Burst {
                jitter: Vec2::ZERO,
                options: spec.options(),
            });
            if self.intro_fired == 0 {
                out.push(HeroCue::RevealLogo);
            }
            self.intro_fired += 1;
        }

        while self.ambient_fired < HERO_AMBIENT_MAX {
            let due = start
                + Duration::from_millis(AMBIENT_BURST.delay_ms * u64::from(self.ambient_fired + 1));
            if due > self.elapsed {
                break;
            }
            let jitter = Vec2::new(
                (rng.gen::<f32>() - 0.5) * HERO_AMBIENT_JITTER[0],
                (rng.gen::<f32>() - 0.5) * HERO_AMBIENT_JITTER[1],
            );
            out.push(HeroCue::Burst {
                jitter,
                options: AMBIENT_BURST.options(),
            });
            self.ambient_fired += 1;
        }
    }
}
