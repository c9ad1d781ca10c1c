//! Road Dodger entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, TouchEvent, Window};

    use road_dodger::audio::AudioManager;
    use road_dodger::hooks::GameOverUi;
    use road_dodger::input::Direction;
    use road_dodger::renderer::{QuadBatch, RenderState};
    use road_dodger::{App, GameConfig, Settings};

    /// "Game Over!" panel with the Play Again button
    struct Overlay {
        document: Document,
    }

    impl Overlay {
        fn set_visible(&self, visible: bool) {
            if let Some(el) = self.document.get_element_by_id("game-over") {
                let class = if visible { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
        }
    }

    impl GameOverUi for Overlay {
        fn on_game_over(&mut self, score: u64) {
            if let Some(el) = self.document.get_element_by_id("final-score") {
                el.set_text_content(Some(&score.to_string()));
            }
            self.set_visible(true);
        }
    }

    /// Game instance holding all state
    struct Game {
        app: App,
        batch: QuadBatch,
        render_state: Option<RenderState>,
        audio: AudioManager,
        settings: Settings,
        overlay: Overlay,
        last_time: f64,
    }

    impl Game {
        fn toggle_mute(&mut self) {
            self.settings.muted = !self.settings.muted;
            self.settings.save();
            self.audio.apply_settings(&self.settings);
            log::info!("Sound {}", if self.settings.muted { "muted" } else { "on" });
        }

        fn frame(&mut self, time: f64) {
            let elapsed = if self.last_time > 0.0 {
                time - self.last_time
            } else {
                0.0
            };
            self.last_time = time;

            match self.app.apply_restart(js_sys::Date::now() as u64) {
                Ok(true) => self.overlay.set_visible(false),
                Ok(false) => {}
                Err(e) => log::error!("Restart failed: {}", e),
            }

            self.batch.set_ready(self.render_state.is_some());
            self.app
                .frame(elapsed, &mut self.audio, &mut self.overlay, &mut self.batch);
            self.present();
            self.update_hud();
        }

        fn present(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(self.batch.vertices()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Mirror the frame's text runs into the HUD element
        fn update_hud(&self) {
            let document = &self.overlay.document;
            let Some(run) = self.batch.text_runs().first() else {
                return;
            };
            if let Some(el) = document.get_element_by_id("hud-score") {
                if el.text_content().as_deref() != Some(run.text.as_str()) {
                    el.set_text_content(Some(&run.text));
                }
                if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
                    let style = el.style();
                    let _ = style.set_property("left", &format!("{}px", run.pos.x));
                    let _ = style.set_property("top", &format!("{}px", run.pos.y - run.style.size_px));
                    let _ = style.set_property("font-size", &format!("{}px", run.style.size_px));
                    let [r, g, b, a] = run.style.color.map(|c| (c * 255.0).round());
                    let _ = style.set_property("color", &format!("rgba({r}, {g}, {b}, {})", a / 255.0));
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Road Dodger starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // The canvas size in index.html defines the default playfield
        let config = GameConfig::load_or(GameConfig::with_field(
            canvas.width() as f32,
            canvas.height() as f32,
        ));
        let field = Vec2::new(config.field_width, config.field_height);
        let settings = Settings::load();

        let seed = js_sys::Date::now() as u64;
        let app = match App::new(config, seed) {
            Ok(app) => app,
            Err(e) => {
                log::error!("Invalid game config: {}", e);
                return;
            }
        };

        let render_state = init_renderer(&canvas, field).await;
        if render_state.is_none() {
            log::warn!("WebGPU unavailable - running without graphics");
        }

        let overlay = Overlay {
            document: document.clone(),
        };
        overlay.set_visible(false);

        let game = Rc::new(RefCell::new(Game {
            app,
            batch: QuadBatch::new(field),
            render_state,
            audio: AudioManager::new(&settings),
            settings: settings.clone(),
            overlay,
            last_time: 0.0,
        }));

        setup_keyboard(&window, game.clone());
        setup_touch_buttons(&document, game.clone(), settings.touch_controls);
        setup_restart_button(&document, game.clone());
        setup_focus_loss(&window, game.clone());

        request_animation_frame(game);

        log::info!("Road Dodger running!");
    }

    async fn init_renderer(canvas: &HtmlCanvasElement, field: Vec2) -> Option<RenderState> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| log::warn!("Failed to create surface: {}", e))
            .ok()?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| log::warn!("Failed to get adapter: {}", e))
            .ok()?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, canvas.width(), canvas.height(), field)
            .await
            .map_err(|e| log::error!("Failed to create device: {}", e))
            .ok()
    }

    fn setup_keyboard(window: &Window, game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                g.audio.resume();
                let key = event.key();
                if let Some(dir) = Direction::from_key(&key) {
                    event.prevent_default();
                    g.app.input_mut().press(dir);
                } else if key == "Enter" || key == " " {
                    g.app.request_restart();
                } else if key == "m" || key == "M" {
                    g.toggle_mute();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(dir) = Direction::from_key(&event.key()) {
                    game.borrow_mut().app.input_mut().release(dir);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_touch_buttons(document: &Document, game: Rc<RefCell<Game>>, enabled: bool) {
        let buttons = [
            ("left-button", Direction::Left),
            ("right-button", Direction::Right),
            ("up-button", Direction::Up),
            ("down-button", Direction::Down),
        ];

        for (id, dir) in buttons {
            let Some(button) = document.get_element_by_id(id) else {
                continue;
            };
            if !enabled {
                let _ = button.set_attribute("class", "hidden");
                continue;
            }

            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    let mut g = game.borrow_mut();
                    g.audio.resume();
                    g.app.input_mut().press(dir);
                });
                let _ = button
                    .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
                closure.forget();
            }

            for event_name in ["touchend", "touchcancel"] {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    game.borrow_mut().app.input_mut().release(dir);
                });
                let _ = button
                    .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().app.request_restart();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Drop held keys when the window loses focus; their keyup never arrives
    fn setup_focus_loss(window: &Window, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().app.input_mut().clear();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping frame loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use road_dodger::hooks::{HookCall, HookLog};
    use road_dodger::input::Autopilot;
    use road_dodger::{GameConfig, GameLoop};

    /// Give up on a run that never crashes
    const MAX_TICKS: u64 = 100_000;

    env_logger::init();
    log::info!("Road Dodger (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);

    let mut game = match GameLoop::new(GameConfig::default(), seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid game config: {}", e);
            std::process::exit(1);
        }
    };

    let mut audio = HookLog::default();
    let mut ui = HookLog::default();
    while game.is_running() && game.session().time_ticks < MAX_TICKS {
        let pilot = Autopilot::steer(game.session());
        game.step(&pilot, &mut audio, &mut ui);
    }

    let session = game.session();
    println!(
        "Autopilot run (seed {}): {} ticks, score {}, {} spawns, {}",
        seed,
        session.time_ticks,
        session.score,
        audio.count(HookCall::Spawn),
        if session.is_game_over() { "crashed" } else { "survived" },
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
