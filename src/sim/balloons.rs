//! Balloon manager: spawning, ascent, pruning and letter lookup

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Balloon, EntityId, IdAllocator, RngState};
use crate::normalize_letter;
use crate::settings::{PlayField, RoundConfig};
use crate::view::Presentation;

/// Owns the live balloon set
#[derive(Debug, Clone)]
pub struct BalloonManager {
    balloons: Vec<Balloon>,
    spawn_interval_ms: f32,
    last_spawn_ms: f64,
    base_speed: f32,
    field: PlayField,
    rng: Pcg32,
    ids: IdAllocator,
}

impl BalloonManager {
    pub fn new(config: &RoundConfig, field: &PlayField) -> Self {
        Self {
            balloons: Vec::new(),
            spawn_interval_ms: config.initial_spawn_interval_ms,
            last_spawn_ms: 0.0,
            base_speed: config.balloon_base_speed,
            field: field.clone(),
            rng: RngState::new(config.seed).to_rng(),
            ids: IdAllocator::default(),
        }
    }

    /// Spawn on schedule, move every balloon up, then drop the ones that left
    /// the top of the field. Pruning is silent: nothing is scored.
    pub fn update(
        &mut self,
        time_ms: f64,
        delta_ms: f32,
        timer_remaining: u32,
        view: &mut dyn Presentation,
    ) {
        if time_ms > self.last_spawn_ms + self.spawn_interval_ms as f64 && timer_remaining > 0 {
            self.spawn(view);
            self.last_spawn_ms = time_ms;
        }

        for balloon in &mut self.balloons {
            balloon.advance(delta_ms);
            view.balloon_moved(balloon.id, balloon.pos);
        }

        let offscreen_y = self.field.offscreen_y;
        self.balloons.retain(|b| {
            let live = b.pos.y > offscreen_y;
            if !live {
                log::trace!("Balloon {} ({}) drifted off-screen", b.id, b.letter);
                view.balloon_removed(b.id);
            }
            live
        });
    }

    /// Spawn one balloon at a random column with a random letter
    pub fn spawn(&mut self, view: &mut dyn Presentation) -> EntityId {
        let x = self
            .rng
            .random_range(self.field.spawn_x_min..=self.field.spawn_x_max) as f32;
        let letter = (b'A' + self.rng.random_range(0..26u8)) as char;
        self.spawn_at(Vec2::new(x, self.field.spawn_altitude), letter, view)
    }

    /// Spawn a balloon at an exact position
    pub fn spawn_at(&mut self, pos: Vec2, letter: char, view: &mut dyn Presentation) -> EntityId {
        let id = self.ids.next_id();
        let balloon = Balloon::new(id, pos, letter, self.base_speed);
        log::debug!("Spawned balloon {} '{}' at ({:.0}, {:.0})", id, letter, pos.x, pos.y);
        view.balloon_spawned(id, pos, letter);
        self.balloons.push(balloon);
        id
    }

    /// Live balloons labelled `letter` (case-insensitive). Non-letters match nothing.
    pub fn matching(&self, letter: char) -> impl Iterator<Item = &Balloon> {
        let wanted = normalize_letter(letter);
        self.balloons
            .iter()
            .filter(move |b| wanted == Some(b.letter))
    }

    /// Remove a balloon from the live set; `None` if it is already gone
    pub fn remove(&mut self, id: EntityId, view: &mut dyn Presentation) -> Option<Balloon> {
        let index = self.balloons.iter().position(|b| b.id == id)?;
        let balloon = self.balloons.swap_remove(index);
        view.balloon_removed(id);
        Some(balloon)
    }

    /// Flag a balloon as targeted. Returns false if it was missing or already flagged.
    pub fn mark_hit(&mut self, id: EntityId) -> bool {
        match self.balloons.iter_mut().find(|b| b.id == id) {
            Some(balloon) if !balloon.hit => {
                balloon.hit = true;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&Balloon> {
        self.balloons.iter().find(|b| b.id == id)
    }

    pub fn balloons(&self) -> &[Balloon] {
        &self.balloons
    }

    pub fn len(&self) -> usize {
        self.balloons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balloons.is_empty()
    }

    pub fn spawn_interval_ms(&self) -> f32 {
        self.spawn_interval_ms
    }

    /// Shorten the spawn interval, never below `floor_ms`
    pub fn shorten_spawn_interval(&mut self, decrement_ms: f32, floor_ms: f32) {
        self.spawn_interval_ms = (self.spawn_interval_ms - decrement_ms).max(floor_ms);
    }

    /// Speed up every live balloon
    pub fn boost_speeds(&mut self, increment: f32) {
        for balloon in &mut self.balloons {
            balloon.speed += increment;
        }
    }
}
