//! Score and countdown for one round
//!
//! `Running` until the once-per-second countdown reaches zero, then
//! `GameOver` for good. Score only ever goes up.

use super::state::RoundPhase;
use crate::consts::SECOND_MS;

/// Outcome of feeding time to the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownTick {
    /// Whole seconds that elapsed this call
    pub seconds: u32,
    /// The round ended during this call
    pub ended: bool,
}

#[derive(Debug, Clone)]
pub struct RoundState {
    score: u32,
    timer: u32,
    phase: RoundPhase,
    since_tick_ms: f32,
}

impl RoundState {
    pub fn new(start_timer_seconds: u32) -> Self {
        Self {
            score: 0,
            timer: start_timer_seconds,
            phase: RoundPhase::Running,
            since_tick_ms: 0.0,
        }
    }

    /// Accumulate elapsed time and run one countdown tick per full second
    pub fn advance(&mut self, delta_ms: f32) -> CountdownTick {
        let mut result = CountdownTick::default();
        if self.phase == RoundPhase::GameOver {
            return result;
        }

        self.since_tick_ms += delta_ms;
        while self.since_tick_ms >= SECOND_MS && self.phase == RoundPhase::Running {
            self.since_tick_ms -= SECOND_MS;
            result.seconds += 1;
            if self.tick_second() {
                result.ended = true;
            }
        }
        result
    }

    /// One countdown tick. Returns true on the Running -> GameOver transition.
    pub fn tick_second(&mut self) -> bool {
        if self.phase == RoundPhase::GameOver {
            return false;
        }
        self.timer = self.timer.saturating_sub(1);
        if self.timer == 0 {
            self.phase = RoundPhase::GameOver;
            log::info!("Round over with score {}", self.score);
            return true;
        }
        false
    }

    /// Award points for a confirmed hit; ignored once the round is over
    pub fn add_score(&mut self, points: u32) -> bool {
        if self.phase != RoundPhase::Running {
            return false;
        }
        self.score = self.score.saturating_add(points);
        true
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixty_ticks_end_round_once() {
        let mut round = RoundState::new(60);
        let mut transitions = 0;
        for _ in 0..59 {
            if round.tick_second() {
                transitions += 1;
            }
            assert_eq!(round.phase(), RoundPhase::Running);
        }
        if round.tick_second() {
            transitions += 1;
        }
        assert_eq!(round.phase(), RoundPhase::GameOver);
        assert_eq!(round.timer(), 0);

        for _ in 0..10 {
            if round.tick_second() {
                transitions += 1;
            }
        }
        assert_eq!(transitions, 1);
        assert_eq!(round.phase(), RoundPhase::GameOver);
        assert_eq!(round.timer(), 0);
    }

    #[test]
    fn test_advance_accumulates_partial_seconds() {
        let mut round = RoundState::new(60);
        assert_eq!(round.advance(600.0).seconds, 0);
        assert_eq!(round.advance(600.0).seconds, 1);
        assert_eq!(round.timer(), 59);
        assert_eq!(round.advance(2_800.0).seconds, 3);
        assert_eq!(round.timer(), 56);
    }

    #[test]
    fn test_advance_stops_at_game_over() {
        let mut round = RoundState::new(3);
        let tick = round.advance(10_000.0);
        assert_eq!(tick, CountdownTick { seconds: 3, ended: true });
        assert_eq!(round.advance(5_000.0), CountdownTick::default());
    }

    #[test]
    fn test_score_only_while_running() {
        let mut round = RoundState::new(1);
        assert!(round.add_score(1));
        assert!(round.add_score(1));
        assert_eq!(round.score(), 2);

        round.tick_second();
        assert!(!round.add_score(1));
        assert_eq!(round.score(), 2);
    }
}
