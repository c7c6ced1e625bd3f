//! Balloon Typer - a letter-balloon typing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (balloons, birds, aiming, difficulty, round)
//! - `view`: Presentation sink the simulation draws and plays sounds through
//! - `audio`: Sound cue definitions and volume gating
//! - `settings`: Data-driven round configuration and play-field bounds

pub mod audio;
pub mod settings;
pub mod sim;
pub mod view;

pub use audio::{AudioMixer, SoundEffect};
pub use settings::{PlayField, RoundConfig, Settings, SettingsError};
pub use sim::{Game, RoundPhase};
pub use view::{NullPresentation, Presentation, Recorder};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Frame duration that entity speeds are expressed against (60 FPS baseline)
    pub const REFERENCE_FRAME_MS: f32 = 16.67;
    /// Countdown granularity
    pub const SECOND_MS: f32 = 1000.0;

    /// Round defaults
    pub const START_TIMER_SECONDS: u32 = 60;
    pub const POINTS_PER_HIT: u32 = 1;

    /// Spawning defaults
    pub const INITIAL_SPAWN_INTERVAL_MS: f32 = 1500.0;
    pub const SPAWN_INTERVAL_FLOOR_MS: f32 = 500.0;

    /// Difficulty ramp defaults
    pub const DIFFICULTY_RAMP_INTERVAL_MS: f32 = 10_000.0;
    pub const BALLOON_SPEED_INCREMENT: f32 = 0.2;
    pub const SPAWN_INTERVAL_DECREMENT_MS: f32 = 100.0;

    /// Entity speeds (units per reference frame)
    pub const BALLOON_BASE_SPEED: f32 = 1.0;
    pub const BIRD_SPEED: f32 = 4.0;
    /// Distance at which a bird counts as arrived
    pub const HIT_DISTANCE_EPSILON: f32 = 5.0;

    /// Play field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    pub const SPAWN_X_MIN: i32 = 50;
    pub const SPAWN_X_MAX: i32 = 750;
    /// Balloons start just below the bottom edge
    pub const SPAWN_ALTITUDE: f32 = 650.0;
    /// Balloons at or above this y are pruned
    pub const OFFSCREEN_Y: f32 = -100.0;
    /// Top of the visible area; arrivals above it are void
    pub const VISIBLE_TOP_Y: f32 = 0.0;
    /// Birds launch from just off the bottom-left corner
    pub const BIRD_LAUNCH_X: f32 = -20.0;
    pub const BIRD_LAUNCH_MARGIN: f32 = 20.0;
    /// Vertical offset between the balloon anchor and where it pops
    pub const IMPACT_OFFSET_Y: f32 = -20.0;

    /// Solver tolerance for a degenerate (linear) intercept equation
    pub const INTERCEPT_EPSILON: f32 = 0.0001;
}

/// Scale a per-reference-frame speed to the distance covered in `delta_ms`
#[inline]
pub fn frame_step(speed: f32, delta_ms: f32) -> f32 {
    speed * (delta_ms / consts::REFERENCE_FRAME_MS)
}

/// Move `from` toward `to` by at most `max_step`, never past it
#[inline]
pub fn step_toward(from: Vec2, to: Vec2, max_step: f32) -> Vec2 {
    let offset = to - from;
    let distance = offset.length();
    if distance <= max_step || distance == 0.0 {
        to
    } else {
        from + offset / distance * max_step
    }
}

/// Normalize a key press to an uppercase letter, if it is one
#[inline]
pub fn normalize_letter(key: char) -> Option<char> {
    let upper = key.to_ascii_uppercase();
    upper.is_ascii_uppercase().then_some(upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_step_reference_frame() {
        assert!((frame_step(4.0, consts::REFERENCE_FRAME_MS) - 4.0).abs() < 1e-5);
        assert!((frame_step(1.0, consts::REFERENCE_FRAME_MS * 2.0) - 2.0).abs() < 1e-5);
        assert_eq!(frame_step(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_step_toward_clamps_at_target() {
        let from = Vec2::new(0.0, 0.0);
        let to = Vec2::new(3.0, 4.0);
        assert_eq!(step_toward(from, to, 10.0), to);

        let mid = step_toward(from, to, 2.5);
        assert!((mid - Vec2::new(1.5, 2.0)).length() < 1e-5);
    }

    #[test]
    fn test_normalize_letter() {
        assert_eq!(normalize_letter('q'), Some('Q'));
        assert_eq!(normalize_letter('Z'), Some('Z'));
        assert_eq!(normalize_letter('1'), None);
        assert_eq!(normalize_letter(' '), None);
        assert_eq!(normalize_letter('é'), None);
    }
}
