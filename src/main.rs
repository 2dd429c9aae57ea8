//! Vectoroids entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use vectoroids::consts::*;
    use vectoroids::platform::Platform;
    use vectoroids::platform::web::WebPlatform;
    use vectoroids::renderer::{Canvas, Color, LineBatch, RenderState};
    use vectoroids::{Game, Settings};

    /// Canvas that batches a frame of lines and presents it through WebGPU
    struct WebCanvas {
        batch: LineBatch,
        render_state: RenderState,
    }

    impl Canvas for WebCanvas {
        fn begin_frame(&mut self) {
            self.batch.begin_frame();
        }

        fn clear_background(&mut self, color: Color) {
            self.batch.clear_background(color);
        }

        fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color) {
            self.batch.draw_line(from, to, thickness, color);
        }

        fn end_frame(&mut self) {
            match self.render_state.render(&self.batch) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    /// Everything the animation-frame callback needs
    struct App {
        game: Game,
        platform: WebPlatform,
        canvas: WebCanvas,
    }

    fn js_error(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(js_error)?;

        log::info!("Vectoroids starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // The playfield is fixed-size; CSS handles on-page scaling
        let width = PLAYFIELD_WIDTH as u32;
        let height = PLAYFIELD_HEIGHT as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        settings.save();
        let seed = settings
            .seed
            .unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(js_error)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(js_error)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(js_error)?;

        let mut platform = WebPlatform::new();
        platform.attach(&window, &canvas)?;
        platform.set_frame_rate_cap(settings.frame_rate_cap);

        let app = Rc::new(RefCell::new(App {
            game: Game::new(seed, &settings),
            platform,
            canvas: WebCanvas {
                batch: LineBatch::new(),
                render_state,
            },
        }));

        // Start game loop
        request_animation_frame(app);

        log::info!("Vectoroids running!");
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut guard = app.borrow_mut();
            let App {
                game,
                platform,
                canvas,
            } = &mut *guard;

            if platform.should_close() {
                log::info!("Vectoroids stopped after {} frames", game.frames());
                return;
            }

            // Early callbacks are skipped to honor the frame-rate cap
            if platform.begin_frame(time) {
                if let Err(e) = game.frame(platform, canvas) {
                    log::error!("Simulation failed: {}", e);
                    return;
                }
            }
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        web_sys::console::error_1(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use vectoroids::platform::ScriptedPlatform;
    use vectoroids::renderer::LineBatch;
    use vectoroids::{Game, Settings, normalize_angle};

    env_logger::init();
    log::info!("Vectoroids (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Game initialized with seed: {}", seed);

    let mut game = Game::new(seed, &settings);
    let mut platform = ScriptedPlatform::new(demo_script());
    let mut batch = LineBatch::new();

    match game.run(&mut platform, &mut batch) {
        Ok(frames) => {
            let world = &game.world;
            println!(
                "Demo finished: {} frames, {:.2}s, {} bullets, {} asteroids, heading {:.0}°, {} segments in last frame",
                frames,
                world.now,
                world.bullets.len(),
                world.asteroids.len(),
                normalize_angle(world.ship.rot).to_degrees(),
                batch.segment_count(),
            );
        }
        Err(e) => {
            log::error!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted input for the headless demo: fly, sweep, reverse, sweep, exit
#[cfg(not(target_arch = "wasm32"))]
fn demo_script() -> Vec<vectoroids::platform::ScriptedFrame> {
    use vectoroids::consts::TARGET_FPS;
    use vectoroids::platform::{Key, ScriptedFrame};

    let dt = 1.0 / TARGET_FPS as f32;
    let phases: [(&[Key], usize); 4] = [
        (&[Key::W, Key::Space], 90),
        (&[Key::D, Key::Space], 120),
        (&[Key::S], 60),
        (&[Key::A, Key::W, Key::Space], 120),
    ];

    let mut frames = Vec::new();
    for (keys, count) in phases {
        frames.extend(std::iter::repeat_n(ScriptedFrame::new(dt, keys, &[]), count));
    }
    frames.push(ScriptedFrame::new(dt, &[Key::Escape], &[]));
    frames
}
