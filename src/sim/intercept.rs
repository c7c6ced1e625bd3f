//! Ballistic intercept for birds chasing rising balloons
//!
//! The balloon climbs straight up at a constant speed; the bird flies a
//! straight line at a constant speed. Equating the bird's travel distance
//! with the distance to the balloon's future position gives
//!
//! ```text
//! (vb² - vbird²)·t² - 2·dy0·vb·t + (dx² + dy0²) = 0
//! ```
//!
//! Speeds are per reference frame, so `t` is in reference frames. The answer
//! is frozen at launch; birds never re-aim.

use glam::Vec2;

use crate::consts::INTERCEPT_EPSILON;

/// Solved aim for one shot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intercept {
    /// Predicted time to impact (reference frames, never negative)
    pub time: f32,
    /// Point the bird should fly to
    pub target: Vec2,
}

/// Time until a bird launched from `spawn` at `bird_speed` meets a balloon at
/// `balloon` rising at `balloon_speed`.
///
/// Falls back to `0.0` (aim at the current position) whenever no positive,
/// finite intercept exists.
pub fn intercept_time(spawn: Vec2, balloon: Vec2, balloon_speed: f32, bird_speed: f32) -> f32 {
    let dx = balloon.x - spawn.x;
    let dy0 = balloon.y - spawn.y;

    let a = balloon_speed * balloon_speed - bird_speed * bird_speed;
    let b = -2.0 * dy0 * balloon_speed;
    let c = dx * dx + dy0 * dy0;

    let t = if a.abs() < INTERCEPT_EPSILON {
        // Equal speeds: the quadratic collapses to b·t + c = 0
        if b == 0.0 { 0.0 } else { c / -b }
    } else {
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            0.0
        } else {
            let sqrt_d = discriminant.sqrt();
            let t1 = (-b + sqrt_d) / (2.0 * a);
            let t2 = (-b - sqrt_d) / (2.0 * a);
            let (larger, smaller) = if t1 >= t2 { (t1, t2) } else { (t2, t1) };
            if larger > 0.0 {
                larger
            } else if smaller > 0.0 {
                smaller
            } else {
                0.0
            }
        }
    };

    if t.is_finite() && t > 0.0 { t } else { 0.0 }
}

/// Aim point for a bird: the balloon's predicted position, shifted by
/// `impact_offset_y` so the bird meets the balloon body rather than its anchor
pub fn solve(
    spawn: Vec2,
    balloon: Vec2,
    balloon_speed: f32,
    bird_speed: f32,
    impact_offset_y: f32,
) -> Intercept {
    let time = intercept_time(spawn, balloon, balloon_speed, bird_speed);
    let predicted_y = balloon.y - balloon_speed * time;
    Intercept {
        time,
        target: Vec2::new(balloon.x, predicted_y + impact_offset_y),
    }
}
