// Host-side tests for the logo reveal timeline.

use glam::Vec2;
use ink_core::hero::*;
use ink_core::HERO_AMBIENT_MAX;
use rand::prelude::*;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn bursts(cues: &[HeroCue]) -> Vec<&HeroCue> {
    cues.iter()
        .filter(|c| matches!(c, HeroCue::Burst { .. }))
        .collect()
}

#[test]
fn nothing_before_start_delay() {
    let mut seq = HeroSequence::new();
    let mut rng = StdRng::seed_from_u64(1);
    let mut cues = Vec::new();
    seq.tick(ms(899), &mut rng, &mut cues);
    assert!(cues.is_empty());
}

#[test]
fn intro_bursts_are_staggered_and_reveal_once() {
    let mut seq = HeroSequence::new();
    let mut rng = StdRng::seed_from_u64(1);
    let mut cues = Vec::new();

    seq.tick(ms(900), &mut rng, &mut cues);
    assert_eq!(
        cues,
        vec![
            HeroCue::Burst {
                jitter: Vec2::ZERO,
                options: INTRO_BURSTS[0].options()
            },
            HeroCue::RevealLogo,
        ]
    );

    cues.clear();
    seq.tick(ms(159), &mut rng, &mut cues);
    assert!(cues.is_empty());
    seq.tick(ms(1), &mut rng, &mut cues);
    assert_eq!(cues.len(), 1);

    cues.clear();
    seq.tick(ms(160), &mut rng, &mut cues);
    assert_eq!(
        cues,
        vec![HeroCue::Burst {
            jitter: Vec2::ZERO,
            options: INTRO_BURSTS[2].options()
        }]
    );
}

#[test]
fn intro_intensity_decreases() {
    for pair in INTRO_BURSTS.windows(2) {
        assert!(pair[1].count < pair[0].count);
        assert!(pair[1].size_max < pair[0].size_max);
        assert!(pair[1].max_dist < pair[0].max_dist);
        assert!(pair[1].delay_ms > pair[0].delay_ms);
    }
    let first = INTRO_BURSTS[0].options();
    assert_eq!(first.count, Some(18));
    assert_eq!((first.size_min, first.size_max), (Some(12.0), Some(30.0)));
    assert_eq!((first.dist_min, first.max_dist), (Some(30.0), Some(140.0)));
    assert_eq!(first.color, None);
}

#[test]
fn ambient_bursts_stop_after_seven() {
    let mut seq = HeroSequence::new();
    let mut rng = StdRng::seed_from_u64(5);
    let mut cues = Vec::new();

    seq.tick(ms(900 + 2200 - 1), &mut rng, &mut cues);
    assert_eq!(seq.ambient_fired(), 0);
    seq.tick(ms(1), &mut rng, &mut cues);
    assert_eq!(seq.ambient_fired(), 1);

    for _ in 0..20 {
        seq.tick(ms(2200), &mut rng, &mut cues);
    }
    assert_eq!(seq.ambient_fired(), HERO_AMBIENT_MAX);
    assert!(seq.is_finished());
    assert_eq!(bursts(&cues).len(), 3 + HERO_AMBIENT_MAX as usize);
}

#[test]
fn one_long_tick_catches_up_everything() {
    let mut seq = HeroSequence::new();
    let mut rng = StdRng::seed_from_u64(9);
    let mut cues = Vec::new();
    seq.tick(Duration::from_secs(60), &mut rng, &mut cues);
    assert_eq!(cues.len(), 3 + 1 + HERO_AMBIENT_MAX as usize);
    assert!(seq.is_finished());

    cues.clear();
    seq.tick(Duration::from_secs(60), &mut rng, &mut cues);
    assert!(cues.is_empty());
}

#[test]
fn ambient_jitter_stays_in_window() {
    let mut seq = HeroSequence::new();
    let mut rng = StdRng::seed_from_u64(77);
    let mut cues = Vec::new();
    seq.tick(Duration::from_secs(60), &mut rng, &mut cues);
    for cue in cues.iter().skip(4) {
        let HeroCue::Burst { jitter, options } = cue else {
            panic!("expected ambient burst, got {cue:?}");
        };
        assert!(jitter.x >= -20.0 && jitter.x < 20.0, "x {}", jitter.x);
        assert!(jitter.y >= -10.0 && jitter.y < 10.0, "y {}", jitter.y);
        assert_eq!(*options, AMBIENT_BURST.options());
    }
}
