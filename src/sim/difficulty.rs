//! Difficulty ramp
//!
//! Every ramp interval of accumulated play time, live balloons speed up and
//! the spawn interval shrinks toward its floor. Never reverses within a round.

use super::balloons::BalloonManager;
use crate::settings::RoundConfig;

#[derive(Debug, Clone)]
pub struct DifficultyManager {
    elapsed_ms: f32,
    ramp_interval_ms: f32,
    speed_increment: f32,
    interval_decrement_ms: f32,
    interval_floor_ms: f32,
    /// Ramps applied so far
    level: u32,
}

impl DifficultyManager {
    pub fn new(config: &RoundConfig) -> Self {
        Self {
            elapsed_ms: 0.0,
            ramp_interval_ms: config.difficulty_ramp_interval_ms,
            speed_increment: config.balloon_speed_increment,
            interval_decrement_ms: config.spawn_interval_decrement_ms,
            interval_floor_ms: config.spawn_interval_floor_ms,
            level: 0,
        }
    }

    /// Accumulate `delta_ms`; returns true when a ramp fired this call
    pub fn update(&mut self, delta_ms: f32, balloons: &mut BalloonManager) -> bool {
        self.elapsed_ms += delta_ms;
        // Fires on reaching the interval, not only on passing it
        if self.elapsed_ms < self.ramp_interval_ms {
            return false;
        }

        self.elapsed_ms = 0.0;
        self.level += 1;
        balloons.boost_speeds(self.speed_increment);
        balloons.shorten_spawn_interval(self.interval_decrement_ms, self.interval_floor_ms);
        log::info!(
            "Difficulty level {}: spawn interval {:.0}ms",
            self.level,
            balloons.spawn_interval_ms()
        );
        true
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }
}
