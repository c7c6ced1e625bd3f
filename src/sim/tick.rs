//! Round controller
//!
//! Drives one round frame by frame: countdown, balloons, birds, difficulty,
//! in that order, and turns key presses into aimed birds. Arrivals come back
//! from the bird manager as events and are checked against the live balloon
//! set before anything is scored.

use super::balloons::BalloonManager;
use super::birds::BirdManager;
use super::difficulty::DifficultyManager;
use super::intercept;
use super::round::RoundState;
use super::state::{Balloon, Bird, BirdArrival, EntityId, RoundPhase};
use crate::audio::SoundEffect;
use crate::normalize_letter;
use crate::settings::Settings;
use crate::view::Presentation;

/// Text shown when the countdown runs out
pub const GAME_OVER_MESSAGE: &str = "Game Over";

/// What happened during one `update`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSummary {
    /// Balloons popped by arriving birds
    pub popped: u32,
    /// Birds that arrived after their balloon was gone
    pub missed: u32,
    /// A difficulty ramp fired
    pub ramped: bool,
    /// The round ended this frame
    pub game_over: bool,
}

/// One round of the game
#[derive(Debug, Clone)]
pub struct Game {
    settings: Settings,
    balloons: BalloonManager,
    birds: BirdManager,
    difficulty: DifficultyManager,
    round: RoundState,
    frames: u64,
}

impl Game {
    /// Build a fresh round. Call [`Game::start`] to push the initial HUD.
    ///
    /// Settings that fail [`Settings::validate`] are replaced by the defaults.
    pub fn new(settings: Settings) -> Self {
        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Settings::default()
            }
        };
        let round = &settings.round;
        Self {
            balloons: BalloonManager::new(round, &settings.field),
            birds: BirdManager::new(round.bird_speed, round.hit_distance_epsilon),
            difficulty: DifficultyManager::new(round),
            round: RoundState::new(round.start_timer_seconds),
            frames: 0,
            settings,
        }
    }

    /// Show the starting score and countdown
    pub fn start(&mut self, view: &mut dyn Presentation) {
        log::info!(
            "Round started: {}s, seed {}",
            self.round.timer(),
            self.settings.round.seed
        );
        view.score_changed(self.round.score());
        view.timer_changed(self.round.timer());
    }

    /// Tear down every entity and begin a new round with the same settings
    pub fn reset(&mut self, view: &mut dyn Presentation) {
        for balloon in self.balloons.balloons() {
            view.balloon_removed(balloon.id);
        }
        for bird in self.birds.birds() {
            view.bird_removed(bird.id);
        }
        *self = Self::new(self.settings.clone());
        self.start(view);
    }

    /// Advance the round by one frame. Inert once the round is over.
    pub fn update(
        &mut self,
        time_ms: f64,
        delta_ms: f32,
        view: &mut dyn Presentation,
    ) -> FrameSummary {
        let mut summary = FrameSummary::default();
        if !self.round.is_running() {
            return summary;
        }
        self.frames += 1;

        let countdown = self.round.advance(delta_ms);
        if countdown.seconds > 0 {
            view.timer_changed(self.round.timer());
        }
        if countdown.ended {
            view.game_over(GAME_OVER_MESSAGE, self.settings.field.center());
            view.play_sound(SoundEffect::GameOver);
            summary.game_over = true;
            return summary;
        }

        self.balloons
            .update(time_ms, delta_ms, self.round.timer(), view);

        for arrival in self.birds.update(delta_ms, view) {
            if self.resolve_arrival(arrival, view) {
                summary.popped += 1;
            } else {
                summary.missed += 1;
            }
        }

        summary.ramped = self.difficulty.update(delta_ms, &mut self.balloons);
        log::trace!(
            "Frame {}: {} balloons, {} birds",
            self.frames,
            self.balloons.len(),
            self.birds.len()
        );
        summary
    }

    /// Fire one bird at every live, untargeted balloon showing `key`.
    /// Returns how many birds were launched.
    pub fn handle_key(&mut self, key: char, view: &mut dyn Presentation) -> usize {
        if !self.round.is_running() {
            return 0;
        }
        let Some(letter) = normalize_letter(key) else {
            return 0;
        };

        let field = &self.settings.field;
        let targets: Vec<(EntityId, glam::Vec2, f32)> = self
            .balloons
            .matching(letter)
            .filter(|b| b.pos.y >= field.offscreen_y && !b.hit)
            .map(|b| (b.id, b.pos, b.speed))
            .collect();

        let launch = field.bird_launch_point();
        let impact_offset_y = field.impact_offset_y;
        let bird_speed = self.birds.speed();

        for &(id, pos, speed) in &targets {
            self.balloons.mark_hit(id);
            let shot = intercept::solve(launch, pos, speed, bird_speed, impact_offset_y);
            let bird = self.birds.spawn(launch, shot.target, id, view);
            log::debug!(
                "'{}': bird {} -> balloon {} at ({:.1}, {:.1}), t={:.1}",
                letter,
                bird,
                id,
                shot.target.x,
                shot.target.y,
                shot.time
            );
        }
        targets.len()
    }

    /// Settle a bird arrival. Pops and scores only if the balloon is still
    /// live and on screen; otherwise nothing happens.
    fn resolve_arrival(&mut self, arrival: BirdArrival, view: &mut dyn Presentation) -> bool {
        let field = &self.settings.field;
        let Some(balloon) = self.balloons.get(arrival.balloon) else {
            log::debug!("Bird {} arrived after balloon {} expired", arrival.bird, arrival.balloon);
            return false;
        };
        if balloon.pos.y < field.visible_top_y {
            log::debug!("Bird {} arrived after balloon {} left the screen", arrival.bird, balloon.id);
            return false;
        }

        let mut burst = balloon.pos;
        burst.y += field.impact_offset_y;
        view.explosion(burst);
        self.balloons.remove(arrival.balloon, view);
        if self.round.add_score(self.settings.round.points_per_hit) {
            view.score_changed(self.round.score());
        }
        view.play_sound(SoundEffect::Pop);
        log::debug!("Popped balloon {}; score {}", arrival.balloon, self.round.score());
        true
    }

    pub fn score(&self) -> u32 {
        self.round.score()
    }

    /// Seconds left on the countdown
    pub fn timer(&self) -> u32 {
        self.round.timer()
    }

    pub fn phase(&self) -> RoundPhase {
        self.round.phase()
    }

    pub fn balloons(&self) -> &[Balloon] {
        self.balloons.balloons()
    }

    pub fn birds(&self) -> &[Bird] {
        self.birds.birds()
    }

    pub fn spawn_interval_ms(&self) -> f32 {
        self.balloons.spawn_interval_ms()
    }

    pub fn difficulty_level(&self) -> u32 {
        self.difficulty.level()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Place a balloon directly (scripted scenarios, tests)
    pub fn spawn_balloon_at(
        &mut self,
        pos: glam::Vec2,
        letter: char,
        view: &mut dyn Presentation,
    ) -> EntityId {
        self.balloons.spawn_at(pos, letter, view)
    }
}
