//! Entity types and shared simulation state

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::frame_step;

/// Identifier shared by balloons and birds (never reused within a round)
pub type EntityId = u32;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Countdown running, input live
    Running,
    /// Countdown reached zero; simulation frozen
    GameOver,
}

/// A rising, letter-labelled target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balloon {
    pub id: EntityId,
    pub pos: Vec2,
    /// Uppercase A-Z
    pub letter: char,
    /// Ascent speed in units per reference frame
    pub speed: f32,
    /// A bird is already on its way
    pub hit: bool,
}

impl Balloon {
    pub fn new(id: EntityId, pos: Vec2, letter: char, speed: f32) -> Self {
        Self {
            id,
            pos,
            letter,
            speed,
            hit: false,
        }
    }

    /// Rise for `delta_ms` (screen y grows downward)
    pub fn advance(&mut self, delta_ms: f32) {
        self.pos.y -= frame_step(self.speed, delta_ms);
    }
}

/// A fire-and-forget projectile flying at a fixed point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub id: EntityId,
    pub pos: Vec2,
    /// Fixed at launch, never re-aimed
    pub target: Vec2,
    /// Flight speed in units per reference frame
    pub speed: f32,
    /// Balloon this bird was aimed at, resolved on arrival
    pub balloon: EntityId,
}

impl Bird {
    pub fn distance_to_target(&self) -> f32 {
        self.pos.distance(self.target)
    }
}

/// Arrival notice produced by the bird manager, drained by the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirdArrival {
    pub bird: EntityId,
    pub balloon: EntityId,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Monotonic id source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdAllocator {
    next_id: EntityId,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next_id: 1 }
    }
}

impl IdAllocator {
    pub fn next_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
