use glam::Vec2;
use std::fmt;
use std::time::Duration;

/// Stable identity of a dot, unique per emitter and increasing in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(pub u64);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dot#{}", self.0)
    }
}

/// A single ink dot.
///
/// Everything except `launched` is fixed at creation. The launch target is
/// derived from `angle` and `distance` so the sink can apply it on the next
/// display refresh.
#[derive(Clone, Debug)]
pub struct Particle {
    pub id: ParticleId,
    pub origin: Vec2,
    pub size: f32,
    pub color: String,
    pub angle: f32,
    pub distance: f32,
    pub created_at: Duration,
    pub launched: bool,
}

impl Particle {
    /// Translation applied when the dot launches, relative to its origin.
    pub fn target_offset(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin()) * self.distance
    }
}
