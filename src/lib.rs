#![forbid(unsafe_code)]

//! Progressive 2D arcade-shooter tutorial.
//!
//! Every numbered stage in `stages/` adds one feature on top of the previous
//! one, from opening a window up to the complete invaders game with animated
//! sprite sheets. The pieces the stages are built from live in this crate:
//!
//! - [`sim`] - the headless playfield simulation, advanced in fixed ticks.
//! - [`input`] - a three-button keyboard snapshot read once per tick.
//! - The graphics types re-exported at the root - shader programs compiled
//!   from a vertex and a fragment WGSL file, colored [`Shape`] batches and
//!   animated [`Sprite`] sheets drawn with instanced quads.
//!
//! # Usage
//!
//! Implement [`Game`] for a stage struct and hand it to [`run`]:
//!
//! ```no_run
//! use invaders::{Frame, GameConfig, Game, Input};
//!
//! struct MyStage;
//!
//! impl Game for MyStage {
//!     fn update(&mut self, input: &Input) -> bool {
//!         // Advance the simulation one tick
//!         true
//!     }
//!
//!     fn render(&mut self, frame: &mut Frame) {
//!         // Upload batches, then open the pass and draw
//!         frame.pass();
//!     }
//! }
//!
//! fn main() -> miette::Result<()> {
//!     invaders::run(GameConfig::default(), |_graphics| Ok(MyStage))
//! }
//! ```
//!
//! The host loop ticks [`Game::update`] at the configured fixed rate, 50 Hz
//! by default, and calls [`Game::render`] whenever the window wants a new
//! frame. Both run on the event-loop thread, an update never overlaps a
//! render.

pub mod config;
mod graphics;
pub mod input;
pub mod sim;

use std::{sync::Arc, time::Instant};

use miette::{IntoDiagnostic, Result, WrapErr};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{WindowAttributes, WindowId},
};

pub use config::GameConfig;
pub use graphics::{
    ColoredVertex, Frame, Graphics, ShaderProgram, Shape, Sprite, Texture, TexturedVertex,
};
pub use input::Input;

/// Cap on the measured time of a single frame in seconds.
///
/// A stall longer than this, a dragged window or a suspended process, would
/// otherwise dump a huge accumulator step on the tick scheduler.
const MAX_FRAME_TIME: f32 = 0.25;

/// Main entrypoint trait for a stage.
///
/// The host calls [`Game::update`] on a fixed interval and [`Game::render`]
/// once per displayed frame, always from the same thread.
pub trait Game: Sized
where
    Self: 'static,
{
    /// A single simulation tick.
    ///
    /// Runs at the fixed rate from [`GameConfig::updates_per_second`],
    /// independent of how often the window redraws. Ticks the host missed are
    /// dropped, never replayed.
    ///
    /// # Arguments
    ///
    /// * `input` - Snapshot of the three game buttons for this tick.
    ///
    /// # Returns
    ///
    /// - `true` to keep the tick scheduled.
    /// - `false` to stop the loop and close the window.
    fn update(&mut self, input: &Input) -> bool;

    /// Draw the current state of the stage.
    ///
    /// Must not mutate simulation state, the tick rate is not coupled to the
    /// render rate. Uploads go first, then [`Frame::pass`] opens the render
    /// pass with the camera already bound at group 0.
    ///
    /// # Arguments
    ///
    /// * `frame` - Rendering state of the frame being displayed.
    fn render(&mut self, frame: &mut Frame);
}

/// Open the window and run a stage until it stops or the window closes.
///
/// The `init` closure runs once after the GPU is set up, compiling shader
/// programs and loading sprite sheets. Everything that can fail does so here,
/// once the loop runs there is nothing left to go wrong.
///
/// Pressing 'Escape' or closing the window ends the loop.
///
/// # Arguments
///
/// * `config` - Window title, world size, tick rate and clear color.
/// * `init` - Create the stage from the set-up graphics state.
///
/// # Errors
///
/// - When the window or the event loop cannot be created.
/// - When no GPU could be found or accessed.
/// - When `init` fails, usually a shader or texture that did not load.
#[inline]
pub fn run<G, I>(config: GameConfig, init: I) -> Result<()>
where
    G: Game,
    I: FnOnce(&Graphics) -> Result<G>,
{
    // The logger is process global, a second stage in the same process keeps
    // the first one
    let _ = env_logger::try_init();

    let event_loop = EventLoop::new()
        .into_diagnostic()
        .wrap_err("Error creating event loop")?;

    // Poll so the window redraws whenever it can
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut state = State {
        config,
        init: Some(init),
        graphics: None,
        game: None,
        input: Input::default(),
        last_time: Instant::now(),
        accumulator: 0.0,
        setup_error: None,
    };

    event_loop
        .run_app(&mut state)
        .into_diagnostic()
        .wrap_err("Error running event loop")?;

    // Surface what made setup bail out of the loop
    match state.setup_error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// Window and game state driven by the winit event loop.
struct State<G, I> {
    /// User supplied configuration.
    config: GameConfig,
    /// Stage constructor, taken out of the option once the GPU is up.
    init: Option<I>,
    /// GPU state, `None` until the window exists.
    graphics: Option<Graphics>,
    /// Running stage, `None` until `init` ran.
    game: Option<G>,
    /// Keyboard snapshot fed to every tick.
    input: Input,
    /// Time the previous redraw happened, for the tick accumulator.
    last_time: Instant,
    /// Seconds of unspent frame time, a tick runs when a full interval accumulated.
    accumulator: f32,
    /// Error that aborted setup, returned out of [`run`].
    setup_error: Option<miette::Report>,
}

impl<G, I> State<G, I> {
    /// Abort the loop, handing the error to [`run`].
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: miette::Report) {
        self.setup_error = Some(error);
        event_loop.exit();
    }
}

impl<G, I> ApplicationHandler for State<G, I>
where
    G: Game,
    I: FnOnce(&Graphics) -> Result<G>,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Only set up once, resumed fires again after a suspend
        let Some(init) = self.init.take() else {
            return;
        };

        log::debug!("Creating the window");

        let window_attributes = WindowAttributes::default()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(
                self.config.buffer_width,
                self.config.buffer_height,
            ))
            // The projection assumes at least the configured size
            .with_min_inner_size(LogicalSize::new(
                self.config.buffer_width,
                self.config.buffer_height,
            ));

        let window = match event_loop
            .create_window(window_attributes)
            .into_diagnostic()
            .wrap_err("Error creating window")
        {
            Ok(window) => Arc::new(window),
            Err(error) => {
                self.fail(event_loop, error);

                return;
            }
        };

        // Because pollster blocks, the GPU is fully set up when this returns
        let graphics = match pollster::block_on(Graphics::new(&self.config, window)) {
            Ok(graphics) => graphics,
            Err(error) => {
                self.fail(event_loop, error);

                return;
            }
        };

        // Compile the stage's programs and load its sheets
        match init(&graphics) {
            Ok(game) => self.game = Some(game),
            Err(error) => {
                self.fail(event_loop, error);

                return;
            }
        }

        self.graphics = Some(graphics);
        self.last_time = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let (Some(graphics), Some(game)) = (&mut self.graphics, &mut self.game) else {
            return;
        };

        match event {
            WindowEvent::RedrawRequested => {
                // Measure how much time passed since the previous frame
                let current_time = Instant::now();
                let frame_time = (current_time - self.last_time)
                    .as_secs_f32()
                    .min(MAX_FRAME_TIME);
                self.last_time = current_time;

                self.accumulator += frame_time;

                // Run a tick when a full interval accumulated, dropping the
                // excess, a host that fell behind skips ticks instead of
                // replaying them
                let update_delta_time = self.config.update_delta_time();
                if self.accumulator >= update_delta_time {
                    let keep_running = game.update(&self.input);

                    // Roll the button edges the tick just consumed
                    self.input.update();

                    self.accumulator %= update_delta_time;

                    if !keep_running {
                        log::info!("Stage requested to stop");
                        event_loop.exit();

                        return;
                    }
                }

                // Draw the frame on the current state snapshot
                let mut frame = graphics.begin();
                game.render(&mut frame);
                frame.present();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                graphics.resize(width, height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                // The window can always be closed with 'Escape'
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    event_loop.exit();

                    return;
                }

                self.input.handle_event(&event);
            }
            // Ignore the rest of the events
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(graphics) = &self.graphics else {
            return;
        };

        // Ensure the control flow doesn't change
        event_loop.set_control_flow(ControlFlow::Poll);

        // Application is about to wait, request a redraw
        graphics.window().request_redraw();
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Drop the stage before the GPU state it draws with
        self.game = None;
        self.graphics = None;
    }
}
