//! Systems - gravity and per-material movement

pub mod behaviors;
pub mod gravity;

pub use behaviors::{BehaviorRegistry, StepStats, UpdateContext};
pub use gravity::{Gravity, MoveDir, ScanOrder};
