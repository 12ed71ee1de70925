//! Per-frame simulation step
//!
//! Advances the vehicle, scrolls and recycles markings and obstacles, detects
//! the terminal collision and accrues score.

use rand::Rng;

use super::state::{GamePhase, GameState};
use super::world::obstacle_spawn_x;
use crate::consts::*;
use crate::settings::Settings;

/// Advance the game state by one tick.
///
/// `delta_ms` is the elapsed wall time reported by the loop driver. By
/// default it is recorded but does not scale motion: entities move in
/// per-frame-constant units, exactly as the game was tuned. With
/// `settings.time_scaled_motion` set, motion and score are normalized to a
/// 60 Hz reference frame instead.
pub fn tick<R: Rng>(state: &mut GameState, rng: &mut R, delta_ms: f64, settings: &Settings) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    let scale = if settings.time_scaled_motion {
        delta_ms / REFERENCE_FRAME_MS
    } else {
        1.0
    };
    let motion_scale = scale as f32;

    // Lateral drift proportional to forward speed, kept inside the road
    // bounds.
    let (lo, hi) = state.vehicle.x_bounds(&state.viewport);
    state.vehicle.pos.x += state.vehicle.steering * state.vehicle.speed * motion_scale;
    state.vehicle.pos.x = state.vehicle.pos.x.clamp(lo, hi);

    // Markings scroll at the vehicle's speed and wrap back above the top.
    let scroll = state.vehicle.speed * motion_scale;
    let viewport = state.viewport;
    for marking in &mut state.markings {
        marking.pos.y += scroll;
        if marking.pos.y > viewport.height {
            marking.pos.y = MARKING_WRAP_Y;
        }
    }

    // Obstacles fall at their own speeds; a recycled entry keeps its speed
    // but takes a fresh random x.
    for obstacle in &mut state.obstacles {
        obstacle.pos.y += obstacle.speed * motion_scale;
        if obstacle.pos.y > viewport.height {
            obstacle.pos.y = OBSTACLE_WRAP_Y;
            obstacle.pos.x = obstacle_spawn_x(&viewport, rng);
        }
    }

    // Collision check after repositioning. The score line below still runs
    // on the colliding tick.
    let vehicle_rect = state.vehicle.rect();
    if state
        .obstacles
        .iter()
        .any(|obstacle| vehicle_rect.intersects(&obstacle.rect()))
    {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Collision at tick {}, final score {}",
            state.time_ticks,
            state.display_score()
        );
    }

    state.score += state.vehicle.speed as f64 * SCORE_RATE * scale;
}
