//! Platform abstraction layer
//!
//! The simulation never schedules its own frames. In the browser the shell
//! rides requestAnimationFrame; everywhere else a `Scheduler` paces the loop
//! and stamps each frame, so the driver sees the same interface either way.

use crate::driver::Session;
use crate::renderer::Surface;
use crate::sim::GamePhase;

/// Frame pacing and timestamps for pull-driven loops
pub trait Scheduler {
    /// Milliseconds since an arbitrary origin, monotonic
    fn now_ms(&mut self) -> f64;

    /// Block until the next frame is due
    fn wait_for_next_frame(&mut self);
}

/// Drive a session frame by frame until the run ends or `max_frames` is hit.
/// Returns the number of ticks executed.
pub fn run_session<C: Scheduler, S: Surface>(
    session: &mut Session,
    scheduler: &mut C,
    surface: &mut S,
    max_frames: u64,
) -> u64 {
    let mut frames = 0;
    while frames < max_frames {
        let now = scheduler.now_ms();
        match session.frame(now, surface) {
            GamePhase::Running => {
                frames += 1;
                scheduler.wait_for_next_frame();
            }
            GamePhase::GameOver => {
                frames += 1;
                break;
            }
            GamePhase::Stopped => break,
        }
    }
    frames
}

/// Wall-clock scheduler that sleeps out the remainder of each fixed frame
#[cfg(not(target_arch = "wasm32"))]
pub struct FixedStepScheduler {
    origin: std::time::Instant,
    frame: std::time::Duration,
    next_deadline: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl FixedStepScheduler {
    pub fn new(fps: u32) -> Self {
        let now = std::time::Instant::now();
        let frame = std::time::Duration::from_millis(1000 / fps.max(1) as u64);
        Self {
            origin: now,
            frame,
            next_deadline: now + frame,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Scheduler for FixedStepScheduler {
    fn now_ms(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    fn wait_for_next_frame(&mut self) {
        let now = std::time::Instant::now();
        if let Some(remaining) = self.next_deadline.checked_duration_since(now) {
            std::thread::sleep(remaining);
            self.next_deadline += self.frame;
        } else {
            // Behind schedule: run the next frame immediately
            self.next_deadline = now + self.frame;
        }
    }
}

/// Fake clock advancing a fixed step per frame, for tests
#[cfg(test)]
pub struct ManualScheduler {
    now_ms: f64,
    step_ms: f64,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn new(step_ms: f64) -> Self {
        Self {
            now_ms: 0.0,
            step_ms,
        }
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn now_ms(&mut self) -> f64 {
        self.now_ms
    }

    fn wait_for_next_frame(&mut self) {
        self.now_ms += self.step_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::NullSurface;
    use crate::settings::{Difficulty, Settings};
    use crate::sim::Viewport;

    #[test]
    fn test_run_session_stops_at_frame_cap() {
        let viewport = Viewport::new(800.0, 1000.0);
        let mut session = Session::new(Settings::with_difficulty(Difficulty::Easy), 21, viewport);
        session.start(viewport);
        // Keep the field clear so the cap is what ends the loop
        for obstacle in &mut session.state.obstacles {
            obstacle.pos.y = -100_000.0;
            obstacle.speed = 0.0;
        }

        let mut scheduler = ManualScheduler::new(1000.0 / 60.0);
        let frames = run_session(&mut session, &mut scheduler, &mut NullSurface, 100);
        assert_eq!(frames, 100);
        assert_eq!(session.state.time_ticks, 100);
        assert_eq!(session.state.phase, GamePhase::Running);
    }

    #[test]
    fn test_run_session_ends_on_game_over() {
        let viewport = Viewport::new(800.0, 1000.0);
        let mut session = Session::new(Settings::default(), 22, viewport);
        session.start(viewport);
        // Drop an obstacle straight onto the vehicle
        session.state.obstacles[0].pos.x = session.state.vehicle.pos.x;
        session.state.obstacles[0].pos.y = session.state.vehicle.pos.y - 10.0;
        session.state.obstacles[0].speed = 0.0;

        let mut scheduler = ManualScheduler::new(1000.0 / 60.0);
        let frames = run_session(&mut session, &mut scheduler, &mut NullSurface, 10_000);
        assert_eq!(session.state.phase, GamePhase::GameOver);
        assert_eq!(frames, session.state.time_ticks);
        assert!(frames <= 10_000);
    }

    #[test]
    fn test_run_session_ignores_unstarted_sessions() {
        let viewport = Viewport::new(800.0, 1000.0);
        let mut session = Session::new(Settings::default(), 23, viewport);

        let mut scheduler = ManualScheduler::new(1000.0 / 60.0);
        let frames = run_session(&mut session, &mut scheduler, &mut NullSurface, 100);
        assert_eq!(frames, 0);
        assert_eq!(session.state.time_ticks, 0);
    }
}
