#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod grid;
pub mod history;
pub mod input;
pub mod neighborhood;
pub mod transition;

use anyhow::{Context, Result};
use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit_input_helper::WinitInputHelper;

use crate::auxiliary::canvas::FrameCanvas;
use crate::auxiliary::randomizer::generate_seed;
use crate::auxiliary::window::create_window;
use crate::auxiliary::winit_host::WinitHost;
use crate::traits_and_structs::automata_trait::CellAutomata;
use crate::traits_and_structs::host::{Canvas, Control, RawInput};

use clock::SimulationClock;
use config::LifeConfig;
use grid::{Generation, GridModel};
use history::GenerationHistory;
use input::InputController;

const INITIAL_FILL: f32 = 0.5;

/// How the board looks when the window opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Start {
    Blank,
    Soup,
}

pub fn run_life(config: LifeConfig, start: Start) -> Result<()> {
    config.validate()?;
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let (window, p_width, p_height, mut _hidpi_factor) = create_window(
        "Game of Life",
        config.viewport_width,
        config.viewport_height,
        &event_loop,
    )?;

    let surface_texture = SurfaceTexture::new(p_width, p_height, &window);
    let (width, height) = (config.viewport_width, config.viewport_height);
    let background = config.background;
    let mut pixels =
        Pixels::new(width, height, surface_texture).context("failed to create pixel buffer")?;

    let mut life = Life::new(config);
    let mut title = life.status();
    window.set_title(&title);
    info!(
        "board is {} rows by {} columns",
        life.grid().rows(),
        life.grid().cols()
    );
    if start == Start::Soup {
        life.randomize();
    }

    event_loop.run(move |event, _, control_flow| {
        // The one and only event that winit_input_helper doesn't have for us...
        if let Event::RedrawRequested(_) = event {
            let mut canvas = FrameCanvas::new(pixels.get_frame(), width, height);
            canvas.clear(background);
            life.draw(&mut canvas);
            if pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }
            if let Some(factor) = input.scale_factor_changed() {
                _hidpi_factor = factor;
            }
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
            }
            life.update(&WinitHost {
                input: &input,
                pixels: &pixels,
            });
            let status = life.status();
            if status != title {
                window.set_title(&status);
                title = status;
            }
            window.request_redraw();
        }
    });
}

/// Scatter live cells over `generation`, each alive with probability
/// `1 - INITIAL_FILL`.
pub fn scatter(generation: &mut Generation, rng: &mut randomize::PCG32) {
    for cell in generation.cells_mut() {
        let alive = randomize::f32_half_open_right(rng.next_u32()) > INITIAL_FILL;
        cell.set_alive(alive);
    }
}

/// Conway's Game of Life with click-to-edit and run/pause.
#[derive(Debug)]
pub struct Life {
    grid: GridModel,
    history: GenerationHistory,
    controller: InputController,
    clock: SimulationClock,
    config: LifeConfig,
}

impl Life {
    pub fn new(config: LifeConfig) -> Self {
        let grid = GridModel::new(
            config.viewport_width,
            config.viewport_height,
            config.cell_size,
            config.margin,
        );
        Self {
            history: GenerationHistory::new(grid.empty_generation(), config.history_limit),
            grid,
            controller: InputController::new(),
            clock: SimulationClock::new(config.step_delay),
            config,
        }
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn history(&self) -> &GenerationHistory {
        &self.history
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Window title: generation number and run state.
    pub fn status(&self) -> String {
        format!(
            "Game of Life - generation {}{}",
            self.history.current(),
            if self.is_running() { "" } else { " (paused)" }
        )
    }
}

impl CellAutomata for Life {
    fn update<I: RawInput>(&mut self, input: &I) {
        let activations = self.controller.poll(input);
        if activations.any() {
            debug!("{:?}", activations);
        }

        if activations.fired(Control::Toggle) {
            self.clock.toggle();
        }
        if activations.fired(Control::Clear) {
            self.clear();
        }
        if activations.fired(Control::Randomize) {
            self.randomize();
        }

        self.clock.tick(&mut self.history);

        self.controller.apply_edits(
            &activations,
            input,
            &self.grid,
            self.history.current_generation_mut(),
        );
    }

    fn draw<C: Canvas>(&self, canvas: &mut C) {
        let size = self.grid.cell_size();
        for cell in self.history.current_generation().cells() {
            let color = if cell.is_alive() {
                self.config.alive_color
            } else {
                self.config.dead_color
            };
            canvas.fill_rect(cell.x(), cell.y(), size, color);
        }
    }

    fn clear(&mut self) {
        for cell in self.history.current_generation_mut().cells_mut() {
            cell.set_alive(false);
        }
        info!("board cleared at generation {}", self.history.current());
    }

    fn randomize(&mut self) {
        match generate_seed() {
            Ok(seed) => {
                let mut rng: randomize::PCG32 = seed.into();
                scatter(self.history.current_generation_mut(), &mut rng);
                info!("board randomized at generation {}", self.history.current());
            }
            Err(e) => error!("failed to seed the board: {}", e),
        }
    }

    fn describe() -> String {
        String::from(
            "Conway's Game of Life. Any live cell with two or three live neighbours survives, \
             any dead cell with exactly three live neighbours comes alive, everything else dies. \
             Cells past the edge of the board count as dead.",
        )
    }
}
