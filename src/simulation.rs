//! Headless simulation driver
//!
//! Runs the tank for a fixed number of steps with a fixed timestep:
//! - Scripted key windows → input state
//! - Input → tank update
//! - Tank → recorded draw calls
//!
//! No wall clock is involved, so a given config always produces the same run.

use agent2d_core::{DrawCommand, RecordingCanvas, ScriptedInput, Tank};
use agent2d_math::{Point2, Vector2};

use crate::config::{AppConfig, KeyWindow};

/// Outcome of a full run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSummary {
    /// Steps executed
    pub ticks: u32,
    /// Simulated seconds
    pub elapsed: f32,
    pub start_position: Point2,
    pub final_position: Point2,
    pub final_heading: f32,
    /// Sum of per-step displacement lengths
    pub distance_travelled: f32,
    /// Draw calls emitted over the whole run
    pub draw_commands: usize,
}

impl SimulationSummary {
    /// Net displacement from start to finish
    pub fn displacement(&self) -> Vector2 {
        self.final_position - self.start_position
    }
}

/// Fixed-step driver for a single tank
pub struct SimulationSystem {
    tank: Tank,
    input: ScriptedInput,
    canvas: RecordingCanvas,
    script: Vec<KeyWindow>,
    timestep: f32,
    tick: u32,
    start_position: Point2,
    distance_travelled: f32,
    draw_commands: usize,
    last_frame: Vec<DrawCommand>,
}

impl SimulationSystem {
    /// Create a simulation from configuration
    pub fn new(config: &AppConfig) -> Self {
        let start = config.tank.start_point();
        Self {
            tank: Tank::new(start, config.tank.to_settings()),
            input: ScriptedInput::new(),
            canvas: RecordingCanvas::new(),
            script: config.simulation.script.clone(),
            timestep: config.simulation.timestep,
            tick: 0,
            start_position: start,
            distance_travelled: 0.0,
            draw_commands: 0,
            last_frame: Vec::new(),
        }
    }

    pub fn tank(&self) -> &Tank {
        &self.tank
    }

    /// Index of the next step
    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Draw calls from the most recent step
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    /// Run one step
    ///
    /// Returns the tank's displacement for this step.
    pub fn step(&mut self) -> Vector2 {
        let tick = self.tick;
        self.input
            .set_held(self.script.iter().filter(|w| w.is_active(tick)).flat_map(|w| w.keys.chars()));

        let delta = self.tank.update(&self.input, self.timestep);
        if self.tank.position().has_nan() {
            log::warn!("Tank position became NaN at tick {}", tick);
        } else {
            self.distance_travelled += delta.length();
        }

        self.tank.draw(&mut self.canvas);
        self.last_frame = self.canvas.take();
        self.draw_commands += self.last_frame.len();

        self.tick += 1;
        delta
    }

    /// Run `ticks` steps and summarise
    pub fn run(&mut self, ticks: u32) -> SimulationSummary {
        log::info!(
            "Simulating {} ticks at {:.4} s per tick, {} script windows",
            ticks,
            self.timestep,
            self.script.len()
        );

        for _ in 0..ticks {
            self.step();
        }

        let summary = self.summary();
        log::info!(
            "Finished after {} ticks ({:.2} s): tank at ({:.2}, {:.2}), heading {:.3} rad, travelled {:.2}",
            summary.ticks,
            summary.elapsed,
            summary.final_position.x,
            summary.final_position.y,
            summary.final_heading,
            summary.distance_travelled
        );
        summary
    }

    /// Summary of everything run so far
    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            ticks: self.tick,
            elapsed: self.tick as f32 * self.timestep,
            start_position: self.start_position,
            final_position: self.tank.position(),
            final_heading: self.tank.heading(),
            distance_travelled: self.distance_travelled,
            draw_commands: self.draw_commands,
        }
    }
}
