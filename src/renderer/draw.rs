//! The frame draw pass
//!
//! Stateless: reads the current game state and issues flat-color draw calls
//! in a fixed back-to-front order.

use super::surface::{Surface, TextAlign};
use crate::consts::*;
use crate::sim::GameState;

pub const ROAD_COLOR: &str = "#333";
pub const MARKING_COLOR: &str = "yellow";
pub const VEHICLE_COLOR: &str = "blue";
pub const OBSTACLE_COLOR: &str = "red";
pub const TEXT_COLOR: &str = "white";
pub const SCORE_FONT: &str = "24px Arial";

/// Offset of the score text from the right viewport edge
const SCORE_MARGIN_X: f32 = 20.0;
/// Baseline of the score text from the top
const SCORE_BASELINE_Y: f32 = 40.0;

/// Draw one frame: road band, markings, vehicle, obstacles, score HUD
pub fn draw_frame<S: Surface>(state: &GameState, surface: &mut S) {
    let viewport = state.viewport;
    surface.clear(viewport.width, viewport.height);

    // Road band, centered
    surface.fill_rect(
        viewport.width / 2.0 - ROAD_WIDTH / 2.0,
        0.0,
        ROAD_WIDTH,
        viewport.height,
        ROAD_COLOR,
    );

    for marking in &state.markings {
        surface.fill_rect(
            marking.pos.x,
            marking.pos.y,
            MARKING_WIDTH,
            MARKING_HEIGHT,
            MARKING_COLOR,
        );
    }

    surface.fill_rect(
        state.vehicle.pos.x,
        state.vehicle.pos.y,
        state.vehicle.width,
        state.vehicle.height,
        VEHICLE_COLOR,
    );

    for obstacle in &state.obstacles {
        surface.fill_rect(
            obstacle.pos.x,
            obstacle.pos.y,
            OBSTACLE_SIZE,
            OBSTACLE_SIZE,
            OBSTACLE_COLOR,
        );
    }

    surface.fill_text(
        &format!("Score: {}", state.display_score()),
        viewport.width - SCORE_MARGIN_X,
        SCORE_BASELINE_Y,
        SCORE_FONT,
        TextAlign::Right,
        TEXT_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::{DrawCall, RecordingSurface};
    use crate::sim::state::Viewport;
    use crate::sim::world;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn sample_state() -> GameState {
        let viewport = Viewport::new(800.0, 1000.0);
        let mut rng = Pcg32::seed_from_u64(5);
        let mut state = GameState::new(5, viewport);
        state.markings = world::layout_road_markings(&viewport);
        state.obstacles = world::spawn_obstacles(&viewport, OBSTACLE_COUNT, &mut rng);
        state.score = 123.9;
        state
    }

    #[test]
    fn test_draw_pass_order_and_colors() {
        let state = sample_state();
        let mut surface = RecordingSurface::default();
        draw_frame(&state, &mut surface);

        // clear, road, 10 markings, vehicle, 5 obstacles, score text
        assert_eq!(surface.calls.len(), 1 + 1 + 10 + 1 + 5 + 1);

        assert_eq!(
            surface.calls[0],
            DrawCall::Clear {
                width: 800.0,
                height: 1000.0,
            }
        );
        assert_eq!(
            surface.calls[1],
            DrawCall::Rect {
                x: 200.0,
                y: 0.0,
                width: 400.0,
                height: 1000.0,
                color: ROAD_COLOR.to_string(),
            }
        );

        let colors: Vec<&str> = surface
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Rect { color, .. } => Some(color.as_str()),
                _ => None,
            })
            .collect();
        let mut expected = vec![ROAD_COLOR];
        expected.extend(std::iter::repeat(MARKING_COLOR).take(10));
        expected.push(VEHICLE_COLOR);
        expected.extend(std::iter::repeat(OBSTACLE_COLOR).take(5));
        assert_eq!(colors, expected);
    }

    #[test]
    fn test_score_text_is_floored_and_right_aligned() {
        let state = sample_state();
        let mut surface = RecordingSurface::default();
        draw_frame(&state, &mut surface);

        match surface.calls.last().unwrap() {
            DrawCall::Text {
                text,
                x,
                y,
                font,
                align,
                color,
            } => {
                assert_eq!(text, "Score: 123");
                assert_eq!(*x, 780.0);
                assert_eq!(*y, 40.0);
                assert_eq!(font, SCORE_FONT);
                assert_eq!(*align, TextAlign::Right);
                assert_eq!(color, TEXT_COLOR);
            }
            other => panic!("expected score text last, got {other:?}"),
        }
    }
}
