//! Boundary types for agent2d
//!
//! Connects the math crate to the outside world without depending on any
//! window system:
//!
//! - [`InputState`] - key-down polling, with [`ScriptedInput`] for headless runs
//! - [`Canvas`] - draw sink, with [`RecordingCanvas`] for headless runs
//! - [`Tank`] - the demo entity: keys move it, its turret is drawn through a local frame

mod canvas;
mod input;
mod tank;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use input::{InputState, KeyBindings, ScriptedInput};
pub use tank::{Tank, TankSettings};

// Re-export the math types the entity API is written in
pub use agent2d_math::{Frame2, Point2, Polytype, PolytypeKind, Rect, Segment, Vector2};
