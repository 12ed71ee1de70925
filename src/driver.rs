//! Session driver: the loop body between the scheduler and the simulation
//!
//! Owns the game state, the seeded RNG and the settings. The platform shell
//! feeds it timestamps and a drawing surface; everything else happens here,
//! so the whole lifecycle tests headlessly.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::OBSTACLE_COUNT;
use crate::renderer::{Surface, draw_frame};
use crate::settings::Settings;
use crate::sim::state::{GamePhase, GameState, Viewport};
use crate::sim::{tick, world};

/// One game session: survives across restarts, holding the vehicle, the
/// score of the current run and the advancing RNG stream.
pub struct Session {
    /// Simulation state; input handlers mutate it between frames
    pub state: GameState,
    /// Applied at the next start command
    pub settings: Settings,
    rng: Pcg32,
    last_timestamp_ms: Option<f64>,
}

impl Session {
    /// New stopped session. The seed fixes every random draw the session
    /// will ever make, across restarts included.
    pub fn new(settings: Settings, seed: u64, viewport: Viewport) -> Self {
        log::info!("Session created with seed {seed}");
        Self {
            state: GameState::new(seed, viewport),
            settings,
            rng: Pcg32::seed_from_u64(seed),
            last_timestamp_ms: None,
        }
    }

    /// Start or restart a run: score back to zero, difficulty applied,
    /// layout re-derived for the viewport. The vehicle keeps its speed and
    /// steering from the previous run.
    pub fn start(&mut self, viewport: Viewport) {
        let state = &mut self.state;
        state.viewport = viewport;
        state.score = 0.0;
        state.time_ticks = 0;
        state.vehicle.max_speed = self.settings.difficulty.max_speed();
        state.vehicle.reposition(&viewport);
        state.markings = world::layout_road_markings(&viewport);
        state.obstacles = world::spawn_obstacles(&viewport, OBSTACLE_COUNT, &mut self.rng);
        state.phase = GamePhase::Running;
        self.last_timestamp_ms = None;
        log::info!(
            "Run started: difficulty {}, viewport {}x{}",
            self.settings.difficulty.as_str(),
            viewport.width,
            viewport.height
        );
    }

    /// One scheduled tick: advance the simulation by the elapsed time, then
    /// draw. Returns the phase after the step so the caller knows whether to
    /// schedule another frame. Does nothing unless running.
    pub fn frame<S: Surface>(&mut self, now_ms: f64, surface: &mut S) -> GamePhase {
        if self.state.phase != GamePhase::Running {
            return self.state.phase;
        }

        // First frame of a run has no predecessor; clock skew never yields
        // a negative step.
        let delta_ms = (now_ms - self.last_timestamp_ms.unwrap_or(now_ms)).max(0.0);
        self.last_timestamp_ms = Some(now_ms);

        tick(&mut self.state, &mut self.rng, delta_ms, &self.settings);
        draw_frame(&self.state, surface);

        if self.state.phase == GamePhase::GameOver {
            log::info!(
                "Game over after {} ticks, final score {}",
                self.state.time_ticks,
                self.state.display_score()
            );
        }
        self.state.phase
    }

    /// Viewport changed mid-run: re-derive the whole layout. Ignored while
    /// not running; the next start re-derives anyway.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        let state = &mut self.state;
        state.viewport = viewport;
        state.vehicle.reposition(&viewport);
        state.markings = world::layout_road_markings(&viewport);
        state.obstacles = world::spawn_obstacles(&viewport, OBSTACLE_COUNT, &mut self.rng);
        log::debug!("Resized to {}x{}", viewport.width, viewport.height);
    }

    /// External stop request, distinct from a collision game-over
    pub fn stop(&mut self) {
        if self.state.phase == GamePhase::Running {
            self.state.phase = GamePhase::Stopped;
            log::info!("Session stopped at score {}", self.state.display_score());
        }
    }
}
