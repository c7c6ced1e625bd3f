//! Presentation sink
//!
//! The simulation pushes everything visible or audible through this trait and
//! never reads anything back. Every method defaults to a no-op so a frontend
//! only implements what it draws.

use glam::Vec2;

use crate::audio::SoundEffect;
use crate::sim::EntityId;

#[allow(unused_variables)]
pub trait Presentation {
    /// A balloon entered the field
    fn balloon_spawned(&mut self, id: EntityId, pos: Vec2, letter: char) {}
    fn balloon_moved(&mut self, id: EntityId, pos: Vec2) {}
    /// Release whatever represents the balloon
    fn balloon_removed(&mut self, id: EntityId) {}

    fn bird_spawned(&mut self, id: EntityId, pos: Vec2) {}
    fn bird_moved(&mut self, id: EntityId, pos: Vec2) {}
    fn bird_removed(&mut self, id: EntityId) {}

    /// Score text ("Score: N")
    fn score_changed(&mut self, score: u32) {}
    /// Countdown text ("Time: N")
    fn timer_changed(&mut self, seconds: u32) {}

    /// Transient pop effect
    fn explosion(&mut self, pos: Vec2) {}
    fn play_sound(&mut self, effect: SoundEffect) {}
    /// Terminal overlay message
    fn game_over(&mut self, message: &str, pos: Vec2) {}
}

/// Draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresentation;

impl Presentation for NullPresentation {}

/// One recorded call into the sink
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    BalloonSpawned { id: EntityId, pos: Vec2, letter: char },
    BalloonRemoved { id: EntityId },
    BirdSpawned { id: EntityId, pos: Vec2 },
    BirdRemoved { id: EntityId },
    Score(u32),
    Timer(u32),
    Explosion(Vec2),
    Sound(SoundEffect),
    GameOver(String),
}

/// Records every non-movement call, for tests and headless drivers
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub events: Vec<ViewEvent>,
    /// Movement updates received (not stored individually)
    pub moves: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn explosions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ViewEvent::Explosion(_)))
            .count()
    }

    pub fn sounds(&self, effect: SoundEffect) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ViewEvent::Sound(s) if *s == effect))
            .count()
    }

    /// Last score shown, if any
    pub fn last_score(&self) -> Option<u32> {
        self.events.iter().rev().find_map(|e| match e {
            ViewEvent::Score(s) => Some(*s),
            _ => None,
        })
    }

    pub fn last_timer(&self) -> Option<u32> {
        self.events.iter().rev().find_map(|e| match e {
            ViewEvent::Timer(t) => Some(*t),
            _ => None,
        })
    }

    pub fn game_over_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ViewEvent::GameOver(_)))
            .count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.moves = 0;
    }
}

impl Presentation for Recorder {
    fn balloon_spawned(&mut self, id: EntityId, pos: Vec2, letter: char) {
        self.events.push(ViewEvent::BalloonSpawned { id, pos, letter });
    }

    fn balloon_moved(&mut self, _id: EntityId, _pos: Vec2) {
        self.moves += 1;
    }

    fn balloon_removed(&mut self, id: EntityId) {
        self.events.push(ViewEvent::BalloonRemoved { id });
    }

    fn bird_spawned(&mut self, id: EntityId, pos: Vec2) {
        self.events.push(ViewEvent::BirdSpawned { id, pos });
    }

    fn bird_moved(&mut self, _id: EntityId, _pos: Vec2) {
        self.moves += 1;
    }

    fn bird_removed(&mut self, id: EntityId) {
        self.events.push(ViewEvent::BirdRemoved { id });
    }

    fn score_changed(&mut self, score: u32) {
        self.events.push(ViewEvent::Score(score));
    }

    fn timer_changed(&mut self, seconds: u32) {
        self.events.push(ViewEvent::Timer(seconds));
    }

    fn explosion(&mut self, pos: Vec2) {
        self.events.push(ViewEvent::Explosion(pos));
    }

    fn play_sound(&mut self, effect: SoundEffect) {
        self.events.push(ViewEvent::Sound(effect));
    }

    fn game_over(&mut self, message: &str, _pos: Vec2) {
        self.events.push(ViewEvent::GameOver(message.to_string()));
    }
}
