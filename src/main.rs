//! Jackpot Rain entry point
//!
//! Wires the lottery loop, the confetti system, and the renderer into the
//! page on wasm32; runs the lottery loop headless everywhere else.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use jackpot_rain::confetti::{ConfettiOptions, ConfettiSystem};
    use jackpot_rain::lottery::{abbreviate, money, time_since};
    use jackpot_rain::lottery::{tick, LotteryState, Phase, TickOutcome};
    use jackpot_rain::renderer::{shapes, RenderState};

    /// Everything the page owns: both loops, the GPU state, the timer handle
    struct App {
        lottery: LotteryState,
        confetti: ConfettiSystem,
        render_state: Option<RenderState>,
        /// setInterval handle for the draw loop; `None` while not playing
        draw_timer: Option<i32>,
    }

    impl App {
        fn new(opts: ConfettiOptions, seed: u64, width: f32, height: f32, now_ms: f64) -> Self {
            Self {
                lottery: LotteryState::new(seed, now_ms),
                // Separate RNG stream from the lottery
                confetti: ConfettiSystem::new(opts, width, height, seed.wrapping_add(1)),
                render_state: None,
                draw_timer: None,
            }
        }

        /// Render the current frame. While the confetti is stopped this
        /// presents an empty pass, which blanks the canvas.
        fn render(&mut self) {
            let vertices = if self.confetti.is_running() {
                shapes::confetti_vertices(self.confetti.particles())
            } else {
                Vec::new()
            };

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
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

        /// Update HUD elements in DOM
        fn update_hud(&self, now_ms: f64) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let set_text = |id: &str, value: &str| {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(value));
                }
            };

            let stats = &self.lottery.stats;
            set_text("stat-plays", &abbreviate(stats.plays as u128));
            set_text("stat-threes", &abbreviate(stats.three_number_matches as u128));
            set_text("stat-fours", &abbreviate(stats.four_number_matches as u128));
            set_text("stat-fives", &abbreviate(stats.five_number_matches as u128));
            set_text("stat-wins", &stats.wins.to_string());
            set_text("stat-pps", &abbreviate(stats.plays_per_second as u128));
            set_text("stat-cps", &money(stats.cost_per_second));
            set_text("stat-spent", &money(stats.total_cost));
            set_text("stat-won", &money(stats.total_won));
            set_text("stat-ratio", &stats.cost_to_won_ratio);
            set_text("stat-session", &time_since(stats.time_started_ms, now_ms));

            const EMPTY_LINE: &str = "-- -- -- -- -- | --";
            match self.lottery.winning {
                Some(ref draw) => set_text("draw-winning", &draw.to_string()),
                None => set_text("draw-winning", EMPTY_LINE),
            }
            match self.lottery.ours {
                Some(ref draw) => set_text("draw-ours", &draw.to_string()),
                None => set_text("draw-ours", EMPTY_LINE),
            }

            // Show/hide the start panel
            if let Some(el) = document.get_element_by_id("play-panel") {
                if self.lottery.phase == Phase::Init {
                    let _ = el.set_attribute("class", "panel");
                } else {
                    let _ = el.set_attribute("class", "panel hidden");
                }
            }

            // Show/hide the jackpot banner
            if let Some(el) = document.get_element_by_id("jackpot-panel") {
                if self.lottery.phase == Phase::Done {
                    let _ = el.set_attribute("class", "panel");
                } else {
                    let _ = el.set_attribute("class", "panel hidden");
                }
            }
        }
    }

    /// Install the zero-delay interval that drives the lottery. The callback
    /// clears its own handle when the jackpot hits.
    fn start_draw_loop(app: Rc<RefCell<App>>) {
        {
            let a = app.borrow();
            if a.lottery.phase != Phase::Playing || a.draw_timer.is_some() {
                return;
            }
        }

        let window = web_sys::window().unwrap();
        let closure = {
            let app = app.clone();
            Closure::<dyn FnMut()>::new(move || {
                let mut a = app.borrow_mut();
                if tick(&mut a.lottery, js_sys::Date::now()) == TickOutcome::Jackpot {
                    if let Some(handle) = a.draw_timer.take() {
                        if let Some(window) = web_sys::window() {
                            window.clear_interval_with_handle(handle);
                        }
                    }
                    a.confetti.start();
                    match serde_json::to_string(&a.lottery.stats) {
                        Ok(json) => log::info!("Jackpot! {}", json),
                        Err(e) => log::warn!("Jackpot! (stats not serializable: {})", e),
                    }
                }
            })
        };

        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                0,
            )
            .expect("Failed to set interval");
        app.borrow_mut().draw_timer = Some(handle);
        closure.forget();
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Jackpot Rain starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let opts = ConfettiOptions::default();

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(&opts.target)
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Both loops keyed off the same clock reading
        let now = js_sys::Date::now();
        let seed = now as u64;
        let app = Rc::new(RefCell::new(App::new(
            opts,
            seed,
            width as f32,
            height as f32,
            now,
        )));

        log::info!("Simulator initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        app.borrow_mut().render_state = Some(render_state);

        setup_play_button(app.clone());
        setup_again_button(app.clone());
        setup_resize_handler(&canvas, app.clone());

        // Start the permanent animation loop
        request_animation_frame(app);

        log::info!("Jackpot Rain running!");
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.confetti.frame(time);
            a.render();
            a.update_hud(js_sys::Date::now());
        }

        request_animation_frame(app);
    }

    fn setup_play_button(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("play-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().lottery.start();
                start_draw_loop(app.clone());
                log::info!("Simulation started");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_again_button(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("again-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                {
                    let mut a = app.borrow_mut();
                    a.confetti.stop();
                    a.lottery.again();
                }
                start_draw_loop(app.clone());
                log::info!("Playing again");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let dpr = window.device_pixel_ratio();
            let width = (canvas.client_width() as f64 * dpr) as u32;
            let height = (canvas.client_height() as f64 * dpr) as u32;
            canvas.set_width(width);
            canvas.set_height(height);

            let mut a = app.borrow_mut();
            a.confetti.resize(width as f32, height as f32);
            if let Some(ref mut render_state) = a.render_state {
                render_state.resize(width, height);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{Instant, SystemTime, UNIX_EPOCH};

    use jackpot_rain::lottery::{money, ratio, tick, LotteryState, TickOutcome};

    env_logger::init();

    let max_plays: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(5_000_000);

    let epoch_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0);
    let seed = epoch_ms as u64;

    log::info!(
        "Jackpot Rain (native) starting: {} plays, seed {}",
        max_plays,
        seed
    );

    let mut state = LotteryState::new(seed, epoch_ms);
    state.start();

    let started = Instant::now();
    let mut jackpot = false;
    for _ in 0..max_plays {
        let now_ms = epoch_ms + started.elapsed().as_secs_f64() * 1000.0;
        if tick(&mut state, now_ms) == TickOutcome::Jackpot {
            jackpot = true;
            break;
        }
        if state.stats.plays.is_multiple_of(1_000_000) {
            log::info!("{} plays so far...", state.stats.plays);
        }
    }

    let elapsed = started.elapsed().as_secs_f64();
    if jackpot {
        log::info!("Jackpot after {} plays!", state.stats.plays);
    } else {
        log::info!("No jackpot in {} plays", state.stats.plays);
    }
    log::info!(
        "{:.1}s elapsed, spent {}, won back {}, ratio {}",
        elapsed,
        money(state.stats.total_cost),
        money(state.stats.total_won),
        ratio(state.stats.total_cost, state.stats.total_won)
    );

    match serde_json::to_string_pretty(&state.stats) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize stats: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
