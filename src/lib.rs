//! Road Rush - a top-down driving/obstacle-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, world layout, per-tick update)
//! - `driver`: Session lifecycle and the update/render frame step
//! - `renderer`: Surface abstraction and the flat-color draw pass
//! - `platform`: Frame scheduling abstraction
//! - `settings`: Difficulty and motion configuration

pub mod driver;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::Session;
pub use settings::{Difficulty, Settings};

/// Game configuration constants
pub mod consts {
    /// Vehicle dimensions
    pub const VEHICLE_WIDTH: f32 = 50.0;
    pub const VEHICLE_HEIGHT: f32 = 100.0;
    /// Gap between the vehicle and the bottom viewport edge at spawn
    pub const VEHICLE_BOTTOM_MARGIN: f32 = 20.0;

    /// Road band width, centered in the viewport
    pub const ROAD_WIDTH: f32 = 400.0;

    /// Lane marking dimensions and scroll behavior
    pub const MARKING_WIDTH: f32 = 10.0;
    pub const MARKING_HEIGHT: f32 = 60.0;
    pub const MARKING_SPACING: f32 = 100.0;
    /// A marking that scrolls off the bottom re-enters here
    pub const MARKING_WRAP_Y: f32 = -20.0;

    /// Obstacle pool
    pub const OBSTACLE_COUNT: usize = 5;
    pub const OBSTACLE_SIZE: f32 = 40.0;
    /// Horizontal margin kept clear at both viewport edges when spawning
    pub const OBSTACLE_EDGE_MARGIN: f32 = 30.0;
    /// Fall speed range, units per tick
    pub const OBSTACLE_MIN_SPEED: f32 = 3.0;
    pub const OBSTACLE_MAX_SPEED: f32 = 5.0;
    /// An obstacle that falls past the bottom re-enters here
    pub const OBSTACLE_WRAP_Y: f32 = -100.0;

    /// Vehicle kinematics, units per tick
    pub const ACCELERATION: f32 = 0.2;
    pub const DECELERATION: f32 = 0.1;
    pub const STEERING_SPEED: f32 = 0.1;
    pub const DEFAULT_MAX_SPEED: f32 = 10.0;

    /// Score gained per unit of speed per tick
    pub const SCORE_RATE: f64 = 0.1;

    /// Reference frame duration for optional time-scaled motion (60 Hz)
    pub const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;
}
