//! Bird manager: straight-line projectiles toward fixed points

use glam::Vec2;

use super::state::{Bird, BirdArrival, EntityId, IdAllocator};
use crate::view::Presentation;
use crate::{frame_step, step_toward};

/// Owns the live bird set
#[derive(Debug, Clone)]
pub struct BirdManager {
    birds: Vec<Bird>,
    speed: f32,
    hit_epsilon: f32,
    ids: IdAllocator,
}

impl BirdManager {
    pub fn new(speed: f32, hit_epsilon: f32) -> Self {
        Self {
            birds: Vec::new(),
            speed,
            hit_epsilon,
            ids: IdAllocator::default(),
        }
    }

    /// Launch a bird from `start` toward the fixed point `target`
    pub fn spawn(
        &mut self,
        start: Vec2,
        target: Vec2,
        balloon: EntityId,
        view: &mut dyn Presentation,
    ) -> EntityId {
        let id = self.ids.next_id();
        self.birds.push(Bird {
            id,
            pos: start,
            target,
            speed: self.speed,
            balloon,
        });
        view.bird_spawned(id, start);
        id
    }

    /// Advance every bird. A bird within the hit distance of its target
    /// reports one arrival and leaves the live set in the same pass.
    pub fn update(&mut self, delta_ms: f32, view: &mut dyn Presentation) -> Vec<BirdArrival> {
        let mut arrivals = Vec::new();
        let hit_epsilon = self.hit_epsilon;

        self.birds.retain_mut(|bird| {
            if bird.distance_to_target() < hit_epsilon {
                arrivals.push(BirdArrival {
                    bird: bird.id,
                    balloon: bird.balloon,
                });
                view.bird_removed(bird.id);
                return false;
            }
            bird.pos = step_toward(bird.pos, bird.target, frame_step(bird.speed, delta_ms));
            view.bird_moved(bird.id, bird.pos);
            true
        });

        arrivals
    }

    pub fn birds(&self) -> &[Bird] {
        &self.birds
    }

    pub fn len(&self) -> usize {
        self.birds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.birds.is_empty()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
}
