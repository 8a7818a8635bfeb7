//! Jump Block Window
//!
//! Run with: `cargo run --bin jump_window`
//!
//! Desktop shell for the jump game. Owns the window, turns mouse and touch
//! events into press/release, and steps the session once per redraw. Scene
//! commands are logged rather than drawn; the score is shown in the title.
//!
//! Controls:
//! - Hold left mouse / touch: charge, release: jump
//! - R or click after game over: restart
//! - ESC: Exit
//!
//! Set `JUMP_BLOCK_CONFIG` to a JSON file to override the default config and
//! `RUST_LOG=debug` for per-frame scene output.

use std::sync::Arc;

use glam::Vec3;
use jump_block_engine::game::config::GameConfig;
use jump_block_engine::game::session::{GameSession, SessionPhase};
use jump_block_engine::input::{MouseButton, PointerState, PressEdge};
use jump_block_engine::player::Jumper;
use jump_block_engine::render::SceneSink;
use jump_block_engine::world::Platform;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

const CONFIG_ENV: &str = "JUMP_BLOCK_CONFIG";

// ============================================================================
// LOGGING SCENE
// ============================================================================

/// Scene sink that reports what a renderer would draw.
#[derive(Default)]
struct LogScene {
    platforms: usize,
    frames: u64,
}

impl SceneSink for LogScene {
    fn configure(&mut self, config: &GameConfig) {
        let p = config.platform;
        let j = config.jumper;
        log::info!(
            "scene: platform {}x{}x{} #{:06x}, jumper {}x{}x{} #{:06x}, background #{:06x}",
            p.width,
            p.height,
            p.depth,
            config.palette.platform,
            j.width,
            j.height,
            j.depth,
            config.palette.jumper,
            config.palette.background
        );
        if config.debug {
            log::info!("scene: debug axes requested");
        }
    }

    fn add_platform(&mut self, platform: &Platform) {
        self.platforms += 1;
        log::debug!(
            "scene: + platform #{} at ({:.2}, {:.2}) [{} live]",
            platform.id,
            platform.position.x,
            platform.position.z,
            self.platforms
        );
    }

    fn remove_platform(&mut self, platform: &Platform) {
        self.platforms = self.platforms.saturating_sub(1);
        log::debug!("scene: - platform #{} [{} live]", platform.id, self.platforms);
    }

    fn add_jumper(&mut self, jumper: &Jumper) {
        log::debug!("scene: + jumper at {:?}", jumper.position);
    }

    fn remove_jumper(&mut self) {
        log::debug!("scene: - jumper");
    }

    fn update_jumper(&mut self, jumper: &Jumper) {
        log::trace!(
            "scene: jumper pos={:?} scale_y={:.2} rot={:?}",
            jumper.position,
            jumper.scale_y,
            jumper.rotation
        );
    }

    fn look_at(&mut self, target: Vec3) {
        log::trace!("scene: look_at {target:?}");
    }

    fn render(&mut self) {
        self.frames += 1;
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

struct AppState {
    window: Arc<Window>,
    session: GameSession<LogScene>,
    pointer: PointerState,
    shown_score: Option<u32>,
    shown_over: bool,
}

impl AppState {
    fn new(window: Arc<Window>, config: GameConfig) -> Self {
        let mut session = GameSession::new(config, LogScene::default());
        session.add_success_fn(|score| log::info!("score: {score}"));
        session.add_failed_fn(|| log::info!("fell off! press R or click to restart"));

        Self {
            window,
            session,
            pointer: PointerState::new(),
            shown_score: None,
            shown_over: false,
        }
    }

    fn handle_press(&mut self, edge: Option<PressEdge>) {
        match edge {
            Some(PressEdge::Down) if self.session.phase() == SessionPhase::GameOver => {
                self.session.restart();
            }
            Some(PressEdge::Down) => self.session.input_down(),
            Some(PressEdge::Up) => self.session.input_up(),
            None => {}
        }
    }

    fn update(&mut self) {
        match self.session.step() {
            Ok(phase) => {
                let over = phase == SessionPhase::GameOver;
                let score = self.session.score();
                if self.shown_score != Some(score) || self.shown_over != over {
                    self.refresh_title(score, over);
                }
            }
            Err(e) => log::error!("frame step failed: {e}"),
        }
    }

    fn refresh_title(&mut self, score: u32, over: bool) {
        let title = if over {
            format!("Jump Block - game over, score {score} (R to restart)")
        } else {
            format!("Jump Block - score {score}")
        };
        self.window.set_title(&title);
        self.shown_score = Some(score);
        self.shown_over = over;
    }
}

fn to_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Back => MouseButton::Other(3),
        winit::event::MouseButton::Forward => MouseButton::Other(4),
        winit::event::MouseButton::Other(n) => MouseButton::Other(n),
    }
}

fn load_config() -> GameConfig {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring {CONFIG_ENV}={path}: {e}");
                GameConfig::default()
            }
        },
        Err(_) => GameConfig::default(),
    }
}

// ============================================================================
// APPLICATION HANDLER
// ============================================================================

struct App {
    state: Option<AppState>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title("Jump Block")
            .with_inner_size(PhysicalSize::new(720, 1280));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        log::info!("window ready; hold to charge, release to jump");
        window.request_redraw();
        self.state = Some(AppState::new(window, load_config()));
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Focused(false) => {
                let edge = state.pointer.release_all();
                state.handle_press(edge);
            }
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match key {
                KeyCode::Escape => event_loop.exit(),
                KeyCode::KeyR => state.session.restart(),
                _ => {}
            },
            WindowEvent::MouseInput { button, state: btn_state, .. } => {
                let edge = state
                    .pointer
                    .mouse_button(to_mouse_button(button), btn_state == ElementState::Pressed);
                state.handle_press(edge);
            }
            WindowEvent::Touch(touch) => {
                let edge = match touch.phase {
                    TouchPhase::Started => state.pointer.touch_start(touch.id),
                    TouchPhase::Ended | TouchPhase::Cancelled => state.pointer.touch_end(touch.id),
                    TouchPhase::Moved => None,
                };
                state.handle_press(edge);
            }
            WindowEvent::RedrawRequested => {
                state.update();
                state.window.request_redraw();
            }
            _ => {}
        }
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("failed to create event loop: {e}");
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App { state: None };
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("event loop exited with error: {e}");
    }
}
