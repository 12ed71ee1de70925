//! World generation: lane markings and the obstacle pool
//!
//! Layout is derived from the viewport plus an injected RNG, so a session is
//! reproducible from its seed. Runs at every game start and on resize while
//! running.

use glam::Vec2;
use rand::Rng;

use super::state::{Obstacle, RoadMarking, Viewport};
use crate::consts::*;

/// Lane markings covering the viewport height at fixed spacing, top down
pub fn layout_road_markings(viewport: &Viewport) -> Vec<RoadMarking> {
    let count = (viewport.height / MARKING_SPACING).ceil() as usize;
    let x = viewport.width / 2.0 - MARKING_WIDTH / 2.0;
    (0..count)
        .map(|i| RoadMarking {
            pos: Vec2::new(x, i as f32 * MARKING_SPACING),
        })
        .collect()
}

/// Random spawn x, kept clear of both viewport edges. The range is clamped
/// to stay non-empty on viewports narrower than twice the margin.
pub fn obstacle_spawn_x<R: Rng>(viewport: &Viewport, rng: &mut R) -> f32 {
    let lo = OBSTACLE_EDGE_MARGIN;
    let hi = (viewport.width - OBSTACLE_EDGE_MARGIN).max(lo + 1.0);
    rng.random_range(lo..hi)
}

/// Build the obstacle pool: staggered at random heights above the top edge,
/// each with its own fall speed.
pub fn spawn_obstacles<R: Rng>(viewport: &Viewport, count: usize, rng: &mut R) -> Vec<Obstacle> {
    (0..count)
        .map(|_| {
            let x = obstacle_spawn_x(viewport, rng);
            let y = -rng.random_range(0.0..viewport.height * 2.0);
            let speed = rng.random_range(OBSTACLE_MIN_SPEED..OBSTACLE_MAX_SPEED);
            Obstacle {
                pos: Vec2::new(x, y),
                speed,
            }
        })
        .collect()
}
