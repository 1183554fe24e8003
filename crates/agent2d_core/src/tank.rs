//! The Tank entity
//!
//! A tank is a position plus a turret heading. Each tick it polls the
//! input, moves its position by whole `Vector2` steps and turns the turret.
//! The turret is drawn through the tank's local [`Frame2`], so it follows
//! both the position and the heading.

use std::f32::consts::TAU;

use agent2d_math::{Frame2, Point2, Polytype, Rect, Segment, Vector2};
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::input::{InputState, KeyBindings};

/// Tunables for a tank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankSettings {
    /// Movement speed in units per second
    pub speed: f32,
    /// Turret rotation speed in radians per second
    pub turn_rate: f32,
    /// Body width and height
    pub body_size: Vector2,
    pub turret_length: f32,
    pub keys: KeyBindings,
}

impl Default for TankSettings {
    fn default() -> Self {
        Self {
            speed: 60.0,
            turn_rate: std::f32::consts::PI,
            body_size: Vector2::new(20.0, 14.0),
            turret_length: 16.0,
            keys: KeyBindings::default(),
        }
    }
}

/// Player-controlled tank
#[derive(Debug, Clone)]
pub struct Tank {
    position: Point2,
    /// Turret angle in radians, counter-clockwise from +X, kept in [0, TAU)
    heading: f32,
    settings: TankSettings,
}

impl Tank {
    pub fn new(position: Point2, settings: TankSettings) -> Self {
        Self {
            position,
            heading: 0.0,
            settings,
        }
    }

    #[inline]
    pub fn position(&self) -> Point2 {
        self.position
    }

    pub fn set_position(&mut self, position: Point2) {
        self.position = position;
    }

    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn settings(&self) -> &TankSettings {
        &self.settings
    }

    /// Local frame: origin at the tank, X axis along the turret
    pub fn frame(&self) -> Frame2 {
        Frame2::from_origin(self.position).rotated(self.heading)
    }

    /// Axis-aligned body rectangle centred on the position
    pub fn body(&self) -> Rect {
        Rect::from_center_size(self.position, self.settings.body_size)
    }

    /// Turret barrel in world space
    pub fn turret(&self) -> Segment {
        Segment::new(Point2::ORIGIN, Point2::new(self.settings.turret_length, 0.0))
            .transformed(&self.frame())
    }

    /// Advance one tick of `dt` seconds. Returns the displacement applied.
    ///
    /// Up/down move along ±Y and left/right along ±X; opposite keys cancel.
    pub fn update(&mut self, input: &impl InputState, dt: f32) -> Vector2 {
        let keys = &self.settings.keys;
        let step = self.settings.speed * dt;

        let mut delta = Vector2::zero();
        if input.is_key_down(keys.up) {
            delta += Vector2::new(0.0, step);
        }
        if input.is_key_down(keys.down) {
            delta -= Vector2::new(0.0, step);
        }
        if input.is_key_down(keys.right) {
            delta += Vector2::new(step, 0.0);
        }
        if input.is_key_down(keys.left) {
            delta -= Vector2::new(step, 0.0);
        }
        self.position += delta;

        let turn = self.settings.turn_rate * dt;
        if input.is_key_down(keys.turn_left) {
            self.heading += turn;
        }
        if input.is_key_down(keys.turn_right) {
            self.heading -= turn;
        }
        self.heading = self.heading.rem_euclid(TAU);
        // rem_euclid rounds tiny negative angles up to exactly TAU
        if self.heading >= TAU {
            self.heading = 0.0;
        }

        log::trace!(
            "Tank at ({:.2}, {:.2}) heading {:.3} rad",
            self.position.x,
            self.position.y,
            self.heading
        );
        delta
    }

    /// Emit the body, then the turret
    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.draw_shape(&Polytype::Rect(self.body()));
        canvas.draw_segment(&self.turret());
    }
}
