//! Bounded, oldest-first store of the dots currently on screen.

use crate::particle::{Particle, ParticleId};
use smallvec::SmallVec;
use std::collections::VecDeque;

/// Ids dropped by a single eviction pass. Most passes evict one emission's worth.
pub type Evicted = SmallVec<[ParticleId; 16]>;

#[derive(Debug)]
pub struct LivePool {
    dots: VecDeque<Particle>,
    capacity: usize,
}

impl LivePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            dots: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Append a freshly created dot. Callers enforce the bound afterwards with
    /// [`LivePool::evict_overflow`].
    pub fn insert(&mut self, dot: Particle) {
        self.dots.push_back(dot);
    }

    /// Drop the `n` oldest dots (fewer if the pool is smaller).
    pub fn evict_oldest(&mut self, n: usize) -> Evicted {
        let n = n.min(self.dots.len());
        self.dots.drain(..n).map(|d| d.id).collect()
    }

    /// Drop just enough of the oldest dots to get back under capacity.
    pub fn evict_overflow(&mut self) -> Evicted {
        let excess = self.dots.len().saturating_sub(self.capacity);
        self.evict_oldest(excess)
    }

    /// Remove one dot by id. Removing an id that is already gone is a no-op.
    pub fn remove(&mut self, id: ParticleId) -> Option<Particle> {
        let idx = self.dots.iter().position(|d| d.id == id)?;
        self.dots.remove(idx)
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.dots.iter().find(|d| d.id == id)
    }

    pub fn get_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        self.dots.iter_mut().find(|d| d.id == id)
    }

    pub fn contains(&self, id: ParticleId) -> bool {
        self.get(id).is_some()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.dots.iter()
    }

    pub fn clear(&mut self) -> Evicted {
        self.dots.drain(..).map(|d| d.id).collect()
    }
}
