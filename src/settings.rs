//! Round configuration and play-field bounds
//!
//! Loaded from an optional JSON file; every key is optional and falls back
//! to the built-in defaults.

use std::fmt;
use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors from loading or validating settings
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read settings: {err}"),
            Self::Parse(err) => write!(f, "malformed settings JSON: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid setting `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Gameplay tuning for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Countdown start value
    pub start_timer_seconds: u32,
    pub initial_spawn_interval_ms: f32,
    /// Spawn interval never shrinks below this
    pub spawn_interval_floor_ms: f32,
    /// Accumulated time between difficulty ramps
    pub difficulty_ramp_interval_ms: f32,
    /// Added to every live balloon's speed per ramp
    pub balloon_speed_increment: f32,
    /// Removed from the spawn interval per ramp
    pub spawn_interval_decrement_ms: f32,
    /// Ascent speed of a fresh balloon (units per reference frame)
    pub balloon_base_speed: f32,
    /// Bird flight speed (units per reference frame)
    pub bird_speed: f32,
    pub hit_distance_epsilon: f32,
    pub points_per_hit: u32,
    /// Seed for balloon placement and letters
    pub seed: u64,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            start_timer_seconds: START_TIMER_SECONDS,
            initial_spawn_interval_ms: INITIAL_SPAWN_INTERVAL_MS,
            spawn_interval_floor_ms: SPAWN_INTERVAL_FLOOR_MS,
            difficulty_ramp_interval_ms: DIFFICULTY_RAMP_INTERVAL_MS,
            balloon_speed_increment: BALLOON_SPEED_INCREMENT,
            spawn_interval_decrement_ms: SPAWN_INTERVAL_DECREMENT_MS,
            balloon_base_speed: BALLOON_BASE_SPEED,
            bird_speed: BIRD_SPEED,
            hit_distance_epsilon: HIT_DISTANCE_EPSILON,
            points_per_hit: POINTS_PER_HIT,
            seed: 0,
        }
    }
}

/// Screen-space bounds (y grows downward)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
    /// Inclusive horizontal spawn range
    pub spawn_x_min: i32,
    pub spawn_x_max: i32,
    pub spawn_altitude: f32,
    pub offscreen_y: f32,
    pub visible_top_y: f32,
    pub bird_launch_x: f32,
    /// Distance below the bottom edge birds launch from
    pub bird_launch_margin: f32,
    pub impact_offset_y: f32,
}

impl Default for PlayField {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            spawn_x_min: SPAWN_X_MIN,
            spawn_x_max: SPAWN_X_MAX,
            spawn_altitude: SPAWN_ALTITUDE,
            offscreen_y: OFFSCREEN_Y,
            visible_top_y: VISIBLE_TOP_Y,
            bird_launch_x: BIRD_LAUNCH_X,
            bird_launch_margin: BIRD_LAUNCH_MARGIN,
            impact_offset_y: IMPACT_OFFSET_Y,
        }
    }
}

impl PlayField {
    /// Where every bird starts its flight
    pub fn bird_launch_point(&self) -> Vec2 {
        Vec2::new(self.bird_launch_x, self.height + self.bird_launch_margin)
    }

    /// Anchor for centred overlay text
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Audio preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

/// Everything a round needs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub round: RoundConfig,
    pub field: PlayField,
    pub audio: AudioSettings,
}

impl Settings {
    /// Parse settings from JSON text and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let round = &self.round;
        let field = &self.field;
        let invalid = |field: &'static str, reason: &'static str| -> Result<(), SettingsError> {
            Err(SettingsError::Invalid { field, reason })
        };

        if round.start_timer_seconds == 0 {
            return invalid("start_timer_seconds", "must be at least 1");
        }
        if !(round.bird_speed > 0.0) {
            return invalid("bird_speed", "must be positive");
        }
        if !(round.balloon_base_speed >= 0.0) {
            return invalid("balloon_base_speed", "must not be negative");
        }
        if !(round.balloon_speed_increment >= 0.0) {
            return invalid("balloon_speed_increment", "must not be negative");
        }
        if !(round.spawn_interval_decrement_ms >= 0.0) {
            return invalid("spawn_interval_decrement_ms", "must not be negative");
        }
        if !(round.hit_distance_epsilon > 0.0) {
            return invalid("hit_distance_epsilon", "must be positive");
        }
        if !(round.difficulty_ramp_interval_ms > 0.0) {
            return invalid("difficulty_ramp_interval_ms", "must be positive");
        }
        if !(round.spawn_interval_floor_ms >= 0.0) {
            return invalid("spawn_interval_floor_ms", "must not be negative");
        }
        if round.spawn_interval_floor_ms > round.initial_spawn_interval_ms {
            return invalid("spawn_interval_floor_ms", "exceeds initial_spawn_interval_ms");
        }
        if field.spawn_x_min > field.spawn_x_max {
            return invalid("spawn_x_min", "exceeds spawn_x_max");
        }
        if field.offscreen_y > field.visible_top_y {
            return invalid("offscreen_y", "must be at or above visible_top_y");
        }
        if !(0.0..=1.0).contains(&self.audio.master_volume) {
            return invalid("master_volume", "must be within 0.0 - 1.0");
        }
        if !(0.0..=1.0).contains(&self.audio.sfx_volume) {
            return invalid("sfx_volume", "must be within 0.0 - 1.0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_round_config() {
        let round = RoundConfig::default();
        assert_eq!(round.start_timer_seconds, 60);
        assert_eq!(round.initial_spawn_interval_ms, 1500.0);
        assert_eq!(round.spawn_interval_floor_ms, 500.0);
        assert_eq!(round.difficulty_ramp_interval_ms, 10_000.0);
        assert_eq!(round.balloon_speed_increment, 0.2);
        assert_eq!(round.spawn_interval_decrement_ms, 100.0);
        assert_eq!(round.balloon_base_speed, 1.0);
        assert_eq!(round.bird_speed, 4.0);
        assert_eq!(round.hit_distance_epsilon, 5.0);
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides_only_named_keys() {
        let settings =
            Settings::from_json(r#"{ "round": { "bird_speed": 6.5, "seed": 42 } }"#).unwrap();
        assert_eq!(settings.round.bird_speed, 6.5);
        assert_eq!(settings.round.seed, 42);
        assert_eq!(settings.round.start_timer_seconds, 60);
        assert_eq!(settings.field, PlayField::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "round": { "bird_speed": 0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "bird_speed", .. }));

        let err = Settings::from_json(
            r#"{ "round": { "spawn_interval_floor_ms": 2000, "initial_spawn_interval_ms": 1000 } }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid { field: "spawn_interval_floor_ms", .. }
        ));

        let err = Settings::from_json(r#"{ "field": { "spawn_x_min": 900 } }"#).unwrap_err();
        assert!(err.to_string().contains("spawn_x_min"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "balloon_typer_settings_{}.json",
            std::process::id()
        ));
        let mut settings = Settings::default();
        settings.round.seed = 7;
        settings.field.width = 1024.0;
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let settings = Settings::load_or_default("/nonexistent/balloon_typer.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_bird_launch_point() {
        let field = PlayField::default();
        assert_eq!(field.bird_launch_point(), Vec2::new(-20.0, 620.0));
        assert_eq!(field.center(), Vec2::new(400.0, 300.0));
    }
}
