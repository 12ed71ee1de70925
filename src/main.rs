//! Road Rush entry point
//!
//! Handles platform-specific initialization and drives the game loop: the
//! browser build wires DOM screens, input and requestAnimationFrame around a
//! `Session`; the native build runs a scripted headless demo.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, Window};

    use road_rush::Session;
    use road_rush::renderer::CanvasSurface;
    use road_rush::settings::{Difficulty, Settings};
    use road_rush::sim::{GamePhase, Viewport};

    /// Game instance holding the session and its canvas
    struct Game {
        session: Session,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
        /// Pending animation frame, if one is scheduled
        raf_id: Option<i32>,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Road Rush starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let viewport = window_viewport(&window);
        canvas.set_width(viewport.width as u32);
        canvas.set_height(viewport.height as u32);

        let seed = session_seed(&window);
        let surface = CanvasSurface::new(&canvas)?;
        let session = Session::new(Settings::default(), seed, viewport);

        let game = Rc::new(RefCell::new(Game {
            session,
            surface,
            canvas,
            raf_id: None,
        }));

        setup_difficulty_buttons(&document, &game)?;
        setup_restart_button(&document, &game);
        setup_keyboard(&window, &game);
        setup_resize(&window, &game);

        log::info!("Road Rush ready, waiting for a difficulty pick");
        Ok(())
    }

    /// Current window inner size
    fn window_viewport(window: &Window) -> Viewport {
        let width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(800.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(600.0);
        Viewport::new(width as f32, height as f32)
    }

    /// Clock seed, overridable with a `?seed=N` query parameter for
    /// reproducible runs
    fn session_seed(window: &Window) -> u64 {
        if let Ok(search) = window.location().search() {
            let seed = search
                .trim_start_matches('?')
                .split('&')
                .find_map(|pair| pair.strip_prefix("seed="))
                .and_then(|value| value.parse().ok());
            if let Some(seed) = seed {
                log::info!("Seed override from query string: {seed}");
                return seed;
            }
        }
        js_sys::Date::now() as u64
    }

    fn set_element_class(document: &Document, id: &str, class: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", class);
        }
    }

    /// Start (or restart) a run with the given difficulty and flip to the
    /// play screen.
    fn start_game(game: &Rc<RefCell<Game>>, difficulty: Difficulty) {
        // A pending frame from a previous run must be revoked, not ignored
        cancel_scheduled_frame(game);

        let Some(window) = web_sys::window() else {
            return;
        };
        let viewport = window_viewport(&window);
        {
            let mut g = game.borrow_mut();
            g.session.settings.difficulty = difficulty;
            g.canvas.set_width(viewport.width as u32);
            g.canvas.set_height(viewport.height as u32);
            g.session.start(viewport);
        }

        if let Some(document) = window.document() {
            set_element_class(&document, "start-screen", "screen hidden");
            set_element_class(&document, "game-over-screen", "screen hidden");
            set_element_class(&document, "canvas", "");
        }

        schedule_frame(game);
    }

    fn schedule_frame(game: &Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let game_for_cb = game.clone();
        let closure = Closure::once(move |time: f64| {
            on_frame(game_for_cb, time);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => game.borrow_mut().raf_id = Some(id),
            Err(err) => log::error!("requestAnimationFrame failed: {err:?}"),
        }
        closure.forget();
    }

    fn cancel_scheduled_frame(game: &Rc<RefCell<Game>>) {
        if let Some(id) = game.borrow_mut().raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }

    fn on_frame(game: Rc<RefCell<Game>>, time: f64) {
        let (phase, score) = {
            let mut guard = game.borrow_mut();
            guard.raf_id = None;
            let g = &mut *guard;
            let phase = g.session.frame(time, &mut g.surface);
            (phase, g.session.state.display_score())
        };

        match phase {
            GamePhase::Running => schedule_frame(&game),
            GamePhase::GameOver => show_game_over(score),
            GamePhase::Stopped => {}
        }
    }

    fn show_game_over(score: u64) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = document.get_element_by_id("final-score") {
            el.set_text_content(Some(&score.to_string()));
        }
        set_element_class(&document, "game-over-screen", "screen");
    }

    /// One click handler per `[data-difficulty]` button on the start screen
    fn setup_difficulty_buttons(
        document: &Document,
        game: &Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let buttons = document.query_selector_all("[data-difficulty]")?;
        for i in 0..buttons.length() {
            let Some(node) = buttons.item(i) else {
                continue;
            };
            let Ok(button) = node.dyn_into::<web_sys::Element>() else {
                continue;
            };
            let difficulty = button
                .get_attribute("data-difficulty")
                .and_then(|value| Difficulty::from_str(&value))
                .unwrap_or_default();

            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                log::info!("Difficulty selected: {}", difficulty.as_str());
                start_game(&game, difficulty);
            });
            button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    /// Restart keeps the difficulty of the run that just ended
    fn setup_restart_button(document: &Document, game: &Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let difficulty = game.borrow().session.settings.difficulty;
                start_game(&game, difficulty);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(window: &Window, game: &Rc<RefCell<Game>>) {
        // Key-down: press actions, phase-guarded inside the state methods.
        // Key auto-repeat is what ramps speed while a key stays held.
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowUp" => g.session.state.accelerate(),
                    "ArrowDown" => g.session.state.decelerate(),
                    "ArrowLeft" => g.session.state.steer_left(),
                    "ArrowRight" => g.session.state.steer_right(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key-up: steering release applies in any phase
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                match event.key().as_str() {
                    "ArrowLeft" | "ArrowRight" => game.borrow_mut().session.state.release_steering(),
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Mid-run resizes re-derive the whole layout; otherwise the next start
    /// picks the new size up anyway
    fn setup_resize(window: &Window, game: &Rc<RefCell<Game>>) {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let mut g = game.borrow_mut();
            if g.session.state.phase != GamePhase::Running {
                return;
            }
            let viewport = window_viewport(&window);
            g.canvas.set_width(viewport.width as u32);
            g.canvas.set_height(viewport.height as u32);
            g.session.resize(viewport);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use road_rush::Session;
    use road_rush::platform::{FixedStepScheduler, run_session};
    use road_rush::renderer::NullSurface;
    use road_rush::settings::{Difficulty, Settings};
    use road_rush::sim::Viewport;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Road Rush (native) starting - run with `trunk serve` for the web version");

    // Optional: difficulty and seed from the command line
    let mut args = std::env::args().skip(1);
    let difficulty = args
        .next()
        .and_then(|arg| Difficulty::from_str(&arg))
        .unwrap_or_default();
    let seed = args.next().and_then(|arg| arg.parse().ok()).unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|t| t.as_millis() as u64)
            .unwrap_or(0)
    });

    let viewport = Viewport::new(800.0, 1000.0);
    let mut session = Session::new(Settings::with_difficulty(difficulty), seed, viewport);
    session.start(viewport);

    // Scripted demo: floor the throttle and hold the lane until something
    // gets in the way.
    for _ in 0..100 {
        session.state.accelerate();
    }

    let mut scheduler = FixedStepScheduler::new(60);
    let frames = run_session(&mut session, &mut scheduler, &mut NullSurface, 3600);

    log::info!(
        "Demo over: {} frames, final score {}",
        frames,
        session.state.display_score()
    );
    if let Ok(json) = serde_json::to_string(&session.state) {
        log::debug!("Final state: {json}");
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
