//! Spider Flap entry point
//!
//! Browser: binds the DOM menu, canvas and keyboard to the game.
//! Native: runs a headless autopilot session and logs the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, HtmlElement, HtmlInputElement, KeyboardEvent};

    use spider_flap::platform::InputAction;
    use spider_flap::platform::web::IntervalClock;
    use spider_flap::renderer::CanvasRenderer;
    use spider_flap::{Game, GameConfig, GameError, GameOverSummary, TickReport};

    /// DOM elements of the menu and game-over overlays
    struct Ui {
        menu: HtmlElement,
        username: HtmlInputElement,
        game_over: HtmlElement,
        message: Element,
        score: Element,
    }

    impl Ui {
        fn bind(document: &web_sys::Document) -> Result<Self, JsValue> {
            Ok(Self {
                menu: element(document, "menu")?.dyn_into()?,
                username: element(document, "usernameInput")?.dyn_into()?,
                game_over: element(document, "gameOverScreen")?.dyn_into()?,
                message: element(document, "gameOverMessage")?,
                score: element(document, "scoreDisplay")?,
            })
        }

        fn show_menu(&self) {
            set_visible(&self.menu, true);
            set_visible(&self.game_over, false);
        }

        fn hide_overlays(&self) {
            set_visible(&self.menu, false);
            set_visible(&self.game_over, false);
        }

        fn show_game_over(&self, summary: &GameOverSummary) {
            self.message.set_text_content(Some(&summary.message()));
            self.score.set_text_content(Some(&summary.score.to_string()));
            set_visible(&self.game_over, true);
        }
    }

    /// Game instance plus everything it draws to
    struct App {
        game: Game<IntervalClock>,
        renderer: CanvasRenderer,
        ui: Ui,
    }

    impl App {
        fn on_clock(&mut self) {
            match self.game.on_clock() {
                TickReport::Idle => {}
                TickReport::Advanced { .. } => {
                    if let Err(e) = self.renderer.render(self.game.state()) {
                        log::warn!("Render error: {:?}", e);
                    }
                }
                TickReport::GameOver(summary) => self.ui.show_game_over(&summary),
            }
        }

        fn apply(&mut self, action: InputAction) {
            let starts_run = !matches!(action, InputAction::Jump);
            match self.game.apply(action) {
                Ok(()) if starts_run => self.ui.hide_overlays(),
                Ok(()) => {}
                Err(GameError::EmptySessionName) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Please enter your name!");
                    }
                }
                Err(e) => log::warn!("{}", e),
            }
        }
    }

    fn element(document: &web_sys::Document, id: &str) -> Result<Element, JsValue> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{}", id)))
    }

    fn set_visible(el: &HtmlElement, visible: bool) {
        let display = if visible { "block" } else { "none" };
        let _ = el.style().set_property("display", display);
    }

    /// Defaults sized to the canvas, with optional `data-config` overrides
    fn load_config(canvas: &HtmlCanvasElement) -> GameConfig {
        let base = match canvas.get_attribute("data-config") {
            Some(json) => match GameConfig::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config overrides from data-config");
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring data-config: {}", e);
                    GameConfig::default()
                }
            },
            None => GameConfig::default(),
        };
        let sized = base.with_field_size(canvas.width() as f32, canvas.height() as f32);
        match sized.validate() {
            Ok(()) => sized,
            Err(e) => {
                log::warn!("Canvas size unusable ({}), using default field", e);
                GameConfig::default()
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Spider Flap starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = element(&document, "gameCanvas")?.dyn_into()?;
        let config = load_config(&canvas);
        let renderer = CanvasRenderer::new(&canvas)?;
        let ui = Ui::bind(&document)?;

        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App {
            game: Game::new(config, seed, IntervalClock::new())
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            renderer,
            ui,
        }));

        // Clock callback holds only a weak handle: the clock lives inside the app
        {
            let weak = Rc::downgrade(&app);
            let closure = Closure::<dyn FnMut()>::new(move || {
                if let Some(app) = weak.upgrade() {
                    app.borrow_mut().on_clock();
                }
            });
            app.borrow_mut().game.clock_mut().set_callback(closure);
        }

        setup_buttons(&document, app.clone())?;
        setup_keyboard(&window, app.clone());

        app.borrow().ui.show_menu();
        log::info!("Spider Flap ready");
        Ok(())
    }

    fn setup_buttons(document: &web_sys::Document, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Start
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut a = app.borrow_mut();
                let name = a.ui.username.value();
                a.apply(InputAction::Start { name });
            });
            element(document, "startButton")?
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Restart
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().apply(InputAction::Restart);
            });
            element(document, "restartButton")?
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_keyboard(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(action) = InputAction::from_key_code(&event.code()) {
                app.borrow_mut().apply(action);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use spider_flap::platform::{Clock, ManualClock};
    use spider_flap::{Game, GameConfig, GameOverSummary, TickReport};

    /// Two minutes of simulated play
    const MAX_TICKS: u64 = 60 * 120;
    /// Jump once the actor's bottom is this close to the gap bottom
    const JUMP_MARGIN: f32 = 20.0;

    /// Jump decision: stay above the bottom of the next gap
    fn should_jump(game: &Game<ManualClock>) -> bool {
        let state = game.state();
        let actor = &state.actor;
        if actor.vel_y < 0.0 {
            return false;
        }
        let width = state.config.obstacle_width;
        let floor = state
            .obstacles
            .iter()
            .find(|ob| ob.right(width) >= actor.left())
            .map(|ob| ob.gap_bottom)
            .unwrap_or(state.config.field_height * 0.6);
        actor.bottom() > floor - JUMP_MARGIN
    }

    /// Play one autopilot run; `None` if it hit the time limit
    pub fn run(
        name: &str,
        seed: u64,
    ) -> Result<Option<GameOverSummary>, Box<dyn std::error::Error>> {
        let mut game = Game::new(GameConfig::default(), seed, ManualClock::new())?;
        game.on_start(name)?;

        let mut ticks = 0;
        while game.clock().is_running() && ticks < MAX_TICKS {
            if should_jump(&game) {
                game.on_jump();
            }
            match game.on_clock() {
                TickReport::GameOver(summary) => return Ok(Some(summary)),
                TickReport::Advanced { scored } if scored > 0 => {
                    log::info!("Cleared obstacle, score {}", game.state().score);
                }
                _ => {}
            }
            ticks += 1;
        }
        log::info!("Time limit reached with score {}", game.state().score);
        Ok(None)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Spider Flap (native) starting...");
    log::info!("Native mode runs a headless autopilot - use `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "spider".to_string());
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    match headless::run(&name, seed) {
        Ok(Some(summary)) => println!("{} Final score: {}", summary.message(), summary.score),
        Ok(None) => println!("{} survived the whole session!", name),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
