//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `update(time, delta)` calls
//! - Seeded RNG only
//! - Stable iteration order
//! - No rendering or platform dependencies (output goes through `view::Presentation`)

pub mod balloons;
pub mod birds;
pub mod difficulty;
pub mod intercept;
pub mod round;
pub mod state;
pub mod tick;

pub use balloons::BalloonManager;
pub use birds::BirdManager;
pub use difficulty::DifficultyManager;
pub use intercept::{Intercept, intercept_time, solve};
pub use round::{CountdownTick, RoundState};
pub use state::{Balloon, Bird, BirdArrival, EntityId, RngState, RoundPhase};
pub use tick::{FrameSummary, GAME_OVER_MESSAGE, Game};
