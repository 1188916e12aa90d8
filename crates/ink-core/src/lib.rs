pub mod color;
pub mod constants;
pub mod emitter;
pub mod focus;
pub mod hero;
pub mod particle;
pub mod pool;
pub mod simulator;
pub mod stage;

pub use color::*;
pub use constants::*;
pub use emitter::*;
pub use particle::*;
pub use pool::*;
pub use stage::*;
