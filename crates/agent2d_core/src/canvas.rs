//! Draw sink
//!
//! The math core only produces geometry. Anything that turns shapes into
//! pixels implements [`Canvas`]; [`RecordingCanvas`] just remembers the
//! calls, which is enough for headless runs and tests.

use agent2d_math::{Polytype, PolytypeKind, Segment};

/// Receiver of draw primitives
pub trait Canvas {
    fn draw_shape(&mut self, shape: &Polytype);
    fn draw_segment(&mut self, segment: &Segment);
}

/// One recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Shape(Polytype),
    Segment(Segment),
}

/// Canvas that stores draw calls in order instead of rendering them
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded shapes of `kind`
    pub fn count_kind(&self, kind: PolytypeKind) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Shape(s) if s.kind() == kind))
            .count()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Hand over the recorded calls, leaving the canvas empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        let commands = std::mem::take(&mut self.commands);
        log::debug!("Flushed {} draw commands", commands.len());
        commands
    }
}

impl Canvas for RecordingCanvas {
    fn draw_shape(&mut self, shape: &Polytype) {
        self.commands.push(DrawCommand::Shape(*shape));
    }

    fn draw_segment(&mut self, segment: &Segment) {
        self.commands.push(DrawCommand::Segment(*segment));
    }
}
