// Host-side tests for the bounded live pool.

use glam::Vec2;
use ink_core::{LivePool, Particle, ParticleId};
use std::time::Duration;

fn dot(id: u64) -> Particle {
    Particle {
        id: ParticleId(id),
        origin: Vec2::ZERO,
        size: 12.0,
        color: "#ff2bbb".to_string(),
        angle: 0.0,
        distance: 40.0,
        created_at: Duration::ZERO,
        launched: false,
    }
}

fn filled(capacity: usize, n: u64) -> LivePool {
    let mut pool = LivePool::new(capacity);
    for i in 0..n {
        pool.insert(dot(i));
    }
    pool
}

fn ids(pool: &LivePool) -> Vec<u64> {
    pool.iter().map(|d| d.id.0).collect()
}

#[test]
fn insert_keeps_creation_order() {
    let pool = filled(10, 4);
    assert_eq!(ids(&pool), vec![0, 1, 2, 3]);
    assert_eq!(pool.len(), 4);
    assert!(!pool.is_empty());
}

#[test]
fn evict_oldest_takes_from_the_front() {
    let mut pool = filled(10, 5);
    let evicted = pool.evict_oldest(2);
    assert_eq!(evicted.as_slice(), &[ParticleId(0), ParticleId(1)]);
    assert_eq!(ids(&pool), vec![2, 3, 4]);
}

#[test]
fn evict_oldest_saturates_at_pool_size() {
    let mut pool = filled(10, 3);
    assert_eq!(pool.evict_oldest(8).len(), 3);
    assert!(pool.is_empty());
    assert!(pool.evict_oldest(1).is_empty());
}

#[test]
fn evict_overflow_trims_to_capacity() {
    let mut pool = filled(3, 7);
    let evicted = pool.evict_overflow();
    assert_eq!(evicted.len(), 4);
    assert_eq!(ids(&pool), vec![4, 5, 6]);
    assert!(pool.evict_overflow().is_empty());
}

#[test]
fn remove_is_idempotent_and_targeted() {
    let mut pool = filled(10, 4);
    assert_eq!(pool.remove(ParticleId(2)).map(|d| d.id), Some(ParticleId(2)));
    assert!(pool.remove(ParticleId(2)).is_none());
    assert!(pool.remove(ParticleId(99)).is_none());
    assert_eq!(ids(&pool), vec![0, 1, 3]);
    assert!(pool.contains(ParticleId(3)));
    assert!(!pool.contains(ParticleId(2)));
}

#[test]
fn get_mut_updates_in_place() {
    let mut pool = filled(10, 2);
    if let Some(d) = pool.get_mut(ParticleId(1)) {
        d.launched = true;
    }
    assert_eq!(pool.get(ParticleId(1)).map(|d| d.launched), Some(true));
    assert_eq!(pool.get(ParticleId(0)).map(|d| d.launched), Some(false));
}

#[test]
fn clear_returns_every_id() {
    let mut pool = filled(10, 3);
    assert_eq!(pool.clear().len(), 3);
    assert!(pool.is_empty());
    assert_eq!(pool.capacity(), 10);
}
