//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, injected by the caller
//! - No rendering or platform dependencies
//! - Fixed pools, recycled in place (stable entity order)

pub mod rect;
pub mod state;
pub mod tick;
pub mod world;

pub use rect::Rect;
pub use state::{GamePhase, GameState, Obstacle, RoadMarking, Vehicle, Viewport};
pub use tick::tick;
pub use world::{layout_road_markings, spawn_obstacles};
