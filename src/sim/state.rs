//! Game state and core simulation types
//!
//! The whole session lives in one serializable `GameState`. Input handlers
//! and the tick mutate it through this API; there is no other gameplay state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session in progress (before the first start, or externally stopped)
    Stopped,
    /// Active gameplay
    Running,
    /// Run ended by a collision; score is frozen for display
    GameOver,
}

/// Viewport dimensions in device-independent units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Dimensions are floored at 1 so derived layout ranges stay well-formed
    /// even if the window reports a degenerate size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }
}

/// The player's vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Forward speed, units per tick
    pub speed: f32,
    /// Speed cap, set from the selected difficulty at game start
    pub max_speed: f32,
    /// Speed gained per accelerate input
    pub acceleration: f32,
    /// Speed lost per decelerate input
    pub deceleration: f32,
    /// Lateral drift factor: -steering_speed, 0, or +steering_speed
    pub steering: f32,
    pub steering_speed: f32,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            width: VEHICLE_WIDTH,
            height: VEHICLE_HEIGHT,
            speed: 0.0,
            max_speed: DEFAULT_MAX_SPEED,
            acceleration: ACCELERATION,
            deceleration: DECELERATION,
            steering: 0.0,
            steering_speed: STEERING_SPEED,
        }
    }
}

impl Vehicle {
    /// Move to the spawn point: horizontally centered, just above the bottom
    /// viewport edge.
    pub fn reposition(&mut self, viewport: &Viewport) {
        self.pos.x = viewport.width / 2.0 - self.width / 2.0;
        self.pos.y = viewport.height - self.height - VEHICLE_BOTTOM_MARGIN;
    }

    /// Collision rectangle
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Allowed x range inside the road band. The upper bound is floored at
    /// the lower bound so the clamp stays well-formed on narrow viewports.
    pub fn x_bounds(&self, viewport: &Viewport) -> (f32, f32) {
        let lo = ROAD_WIDTH / 2.0;
        let hi = (viewport.width - ROAD_WIDTH / 2.0 - self.width).max(lo);
        (lo, hi)
    }
}

/// A falling obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    /// Fall speed, units per tick, independent of the vehicle's speed
    pub speed: f32,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, OBSTACLE_SIZE, OBSTACLE_SIZE)
    }
}

/// A decorative lane marking scrolled past the vehicle to sell forward motion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadMarking {
    /// Top-left corner
    pub pos: Vec2,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Accumulated score; grows with vehicle speed while running
    pub score: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Viewport the layout was derived from
    pub viewport: Viewport,
    /// Player vehicle; lives across restarts
    pub vehicle: Vehicle,
    /// Fixed-size obstacle pool, entries recycled in place
    pub obstacles: Vec<Obstacle>,
    /// Lane marking pool, recycled in place
    pub markings: Vec<RoadMarking>,
}

impl GameState {
    /// Create a new stopped state with the given seed
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        let mut vehicle = Vehicle::default();
        vehicle.reposition(&viewport);
        Self {
            seed,
            phase: GamePhase::Stopped,
            score: 0.0,
            time_ticks: 0,
            viewport,
            vehicle,
            obstacles: Vec::new(),
            markings: Vec::new(),
        }
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u64 {
        self.score.floor() as u64
    }

    // Input below writes plain vehicle fields consumed by the next tick.
    // Press actions only apply while running; steering release always
    // applies so a key released after game over is not left latched.

    /// Speed up toward the difficulty cap
    pub fn accelerate(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        let v = &mut self.vehicle;
        v.speed = (v.speed + v.acceleration).min(v.max_speed);
    }

    /// Slow down toward a standstill; no reverse
    pub fn decelerate(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        let v = &mut self.vehicle;
        v.speed = (v.speed - v.deceleration).max(0.0);
    }

    /// Hold left: lateral drift per unit of speed
    pub fn steer_left(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.vehicle.steering = -self.vehicle.steering_speed;
    }

    /// Hold right
    pub fn steer_right(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.vehicle.steering = self.vehicle.steering_speed;
    }

    /// Directional key released
    pub fn release_steering(&mut self) {
        self.vehicle.steering = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn running_state() -> GameState {
        let mut state = GameState::new(7, Viewport::new(800.0, 1000.0));
        state.phase = GamePhase::Running;
        state
    }

    #[test]
    fn test_accelerate_clamps_at_max_speed() {
        let mut state = running_state();
        for _ in 0..200 {
            state.accelerate();
        }
        assert_eq!(state.vehicle.speed, state.vehicle.max_speed);
    }

    #[test]
    fn test_decelerate_stops_at_zero() {
        let mut state = running_state();
        state.vehicle.speed = 0.25;
        for _ in 0..10 {
            state.decelerate();
        }
        assert_eq!(state.vehicle.speed, 0.0);
    }

    #[test]
    fn test_input_ignored_while_stopped() {
        let mut state = GameState::new(7, Viewport::new(800.0, 1000.0));
        state.accelerate();
        state.steer_left();
        assert_eq!(state.vehicle.speed, 0.0);
        assert_eq!(state.vehicle.steering, 0.0);
    }

    #[test]
    fn test_steering_release_applies_in_any_phase() {
        let mut state = running_state();
        state.steer_right();
        assert!(state.vehicle.steering > 0.0);

        // Collision ends the run while the key is still held
        state.phase = GamePhase::GameOver;
        state.release_steering();
        assert_eq!(state.vehicle.steering, 0.0);
    }

    #[test]
    fn test_vehicle_spawn_position() {
        let viewport = Viewport::new(800.0, 1000.0);
        let mut vehicle = Vehicle::default();
        vehicle.reposition(&viewport);
        assert_eq!(vehicle.pos.x, 375.0);
        assert_eq!(vehicle.pos.y, 880.0);
    }

    #[test]
    fn test_degenerate_viewport_is_clamped() {
        let viewport = Viewport::new(0.0, -50.0);
        assert_eq!(viewport.width, 1.0);
        assert_eq!(viewport.height, 1.0);

        // Narrow viewport: x bounds must not invert
        let vehicle = Vehicle::default();
        let (lo, hi) = vehicle.x_bounds(&viewport);
        assert!(lo <= hi);
    }

    proptest! {
        #[test]
        fn speed_stays_in_range_under_any_input(inputs in proptest::collection::vec(any::<bool>(), 0..500)) {
            let mut state = running_state();
            for accelerate in inputs {
                if accelerate {
                    state.accelerate();
                } else {
                    state.decelerate();
                }
                prop_assert!(state.vehicle.speed >= 0.0);
                prop_assert!(state.vehicle.speed <= state.vehicle.max_speed);
            }
        }
    }
}
