//! Sky Catch entry point
//!
//! Handles platform-specific initialization and runs the two game timers.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use sky_catch::consts::*;
    use sky_catch::render::Renderer;
    use sky_catch::sim::{Direction, GameState, spawn_object, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Option<Renderer>,
        /// setInterval handle for the 50 ms motion/collision tick
        tick_interval: Option<i32>,
        /// setInterval handle for the 1000 ms spawner
        spawn_interval: Option<i32>,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                renderer: None,
                tick_interval: None,
                spawn_interval: None,
            }
        }

        /// Reset game state for restart
        fn restart(&mut self, seed: u64) {
            self.state = GameState::new(seed);
        }

        /// Render the current frame
        fn render(&self) {
            if let Some(ref renderer) = self.renderer {
                renderer.render(&self.state);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            // Update score
            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.score.to_string()));
            }

            // Update missed count
            if let Some(el) = document.query_selector("#hud-missed .hud-value").ok().flatten() {
                el.set_text_content(Some(&format!("{}/{}", self.state.missed, MISS_LIMIT)));
            }

            // Show/hide game over
            if let Some(el) = document.get_element_by_id("game-over") {
                if self.state.is_game_over() {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&self.state.score.to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    /// Arm both interval timers. Any previously armed timers must have been
    /// torn down first; handles are stored so teardown can find them.
    fn arm_timers(game: &Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Motion/collision tick
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                {
                    let mut g = game.borrow_mut();
                    tick(&mut g.state);
                    g.render();
                    g.update_hud();
                }
                // Reaching the miss limit tears down both timers so a
                // stale fire can never mutate a reset game
                if game.borrow().state.is_game_over() {
                    disarm_timers(&game);
                    log::info!(
                        "Game over (score {})",
                        game.borrow().state.score
                    );
                }
            });
            let handle = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    TICK_PERIOD_MS,
                )
                .expect("failed to arm tick timer");
            game.borrow_mut().tick_interval = Some(handle);
            closure.forget();
        }

        // Spawner
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                let mut g = game.borrow_mut();
                spawn_object(&mut g.state);
                g.render();
            });
            let handle = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    SPAWN_PERIOD_MS,
                )
                .expect("failed to arm spawn timer");
            game.borrow_mut().spawn_interval = Some(handle);
            closure.forget();
        }
    }

    /// Tear down both interval timers (the only cancellation mechanism)
    fn disarm_timers(game: &Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let mut g = game.borrow_mut();
        if let Some(handle) = g.tick_interval.take() {
            window.clear_interval_with_handle(handle);
        }
        if let Some(handle) = g.spawn_interval.take() {
            window.clear_interval_with_handle(handle);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Sky Catch starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));

        let renderer = Renderer::new(canvas).expect("Failed to create renderer");
        game.borrow_mut().renderer = Some(renderer);

        log::info!("Game initialized with seed: {}", seed);

        // Set up input handlers
        setup_input_handlers(game.clone());

        // Set up restart button
        setup_restart_button(game.clone());

        // Start the spawn and tick timers
        arm_timers(&game);

        // First frame before any timer fires
        {
            let g = game.borrow();
            g.render();
            g.update_hud();
        }

        log::info!("Sky Catch running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let dir = match event.key().as_str() {
                "ArrowLeft" => Direction::Left,
                "ArrowRight" => Direction::Right,
                _ => return,
            };
            let mut g = game.borrow_mut();
            g.state.move_basket(dir);
            g.render();
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                // Timers may still be live if restart is clicked mid-run
                disarm_timers(&game);

                let seed = js_sys::Date::now() as u64;
                {
                    let mut g = game.borrow_mut();
                    g.restart(seed);
                    g.render();
                    g.update_hud();
                }
                arm_timers(&game);

                log::info!("Game restarted with seed: {}", seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Sky Catch (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    // Headless smoke run with a naive auto-player
    println!("\nRunning headless demo...");
    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use sky_catch::consts::*;
    use sky_catch::sim::{Direction, GamePhase, GameState, spawn_object, tick};

    let mut state = GameState::new(0xC0FFEE);
    let mut steps = 0u64;

    while state.phase == GamePhase::Playing && steps < 20_000 {
        // 1000 ms spawn period = 20 ticks of 50 ms
        if steps % 20 == 0 {
            spawn_object(&mut state);
        }

        // Chase the lowest object, one keypress per tick
        let target = state
            .objects
            .iter()
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|obj| obj.pos.x + OBJECT_SIZE / 2.0 - BASKET_WIDTH / 2.0);
        if let Some(target) = target {
            if state.basket.x < target - BASKET_STEP / 2.0 {
                state.move_basket(Direction::Right);
            } else if state.basket.x > target + BASKET_STEP / 2.0 {
                state.move_basket(Direction::Left);
            }
        }

        tick(&mut state);
        steps += 1;
    }

    println!(
        "Demo over after {} ticks: score {}, missed {}",
        state.time_ticks, state.score, state.missed
    );
}
