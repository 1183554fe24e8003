//! Driving a tank across many ticks through the public API

use agent2d_core::{
    Canvas, DrawCommand, InputState, Point2, Polytype, RecordingCanvas, ScriptedInput, Segment,
    Tank, TankSettings, Vector2,
};
use agent2d_math::{approx_eq, equivalent};

/// Input that reports every key as held
struct AllKeys;

impl InputState for AllKeys {
    fn is_key_down(&self, _key: char) -> bool {
        true
    }
}

/// Canvas that only counts calls
#[derive(Default)]
struct Counter {
    shapes: usize,
    segments: usize,
}

impl Canvas for Counter {
    fn draw_shape(&mut self, _shape: &Polytype) {
        self.shapes += 1;
    }

    fn draw_segment(&mut self, _segment: &Segment) {
        self.segments += 1;
    }
}

#[test]
fn test_one_second_right_at_sixty_ticks() {
    let mut tank = Tank::new(Point2::ORIGIN, TankSettings::default());
    let mut input = ScriptedInput::new();
    input.press('D');
    for _ in 0..60 {
        tank.update(&input, 1.0 / 60.0);
    }
    assert!(equivalent(&(tank.position() - Point2::ORIGIN), &Vector2::new(60.0, 0.0), 1e-3));
}

#[test]
fn test_square_path_returns_home() {
    let mut tank = Tank::new(Point2::new(10.0, 10.0), TankSettings::default());
    let mut input = ScriptedInput::new();
    for key in ['D', 'W', 'A', 'S'] {
        input.set_held([key]);
        for _ in 0..4 {
            tank.update(&input, 0.25);
        }
    }
    assert!(approx_eq(&tank.position(), &Point2::new(10.0, 10.0)));
}

#[test]
fn test_custom_bindings() {
    let mut settings = TankSettings::default();
    settings.keys.right = 'L';
    let mut tank = Tank::new(Point2::ORIGIN, settings);
    let mut input = ScriptedInput::new();

    input.press('D');
    assert_eq!(tank.update(&input, 1.0), Vector2::zero());

    input.set_held(['l']);
    assert_eq!(tank.update(&input, 1.0), Vector2::new(60.0, 0.0));
}

#[test]
fn test_all_keys_cancel_movement_and_turning() {
    let mut tank = Tank::new(Point2::ORIGIN, TankSettings::default());
    tank.update(&AllKeys, 0.5);
    assert_eq!(tank.position(), Point2::ORIGIN);
    assert!(approx_eq(&tank.heading(), &0.0));
}

#[test]
fn test_turret_length_is_preserved_while_turning() {
    let mut tank = Tank::new(Point2::new(-5.0, 3.0), TankSettings::default());
    let mut input = ScriptedInput::new();
    input.press('Q');
    let mut canvas = RecordingCanvas::new();
    for _ in 0..20 {
        tank.update(&input, 0.1);
        tank.draw(&mut canvas);
    }
    for command in canvas.take() {
        if let DrawCommand::Segment(turret) = command {
            assert!(equivalent(&turret.length(), &16.0, 1e-4));
            assert_eq!(turret.start, Point2::new(-5.0, 3.0));
        }
    }
}

#[test]
fn test_any_canvas_receives_draws() {
    let tank = Tank::new(Point2::ORIGIN, TankSettings::default());
    let mut counter = Counter::default();
    tank.draw(&mut counter);
    tank.draw(&mut counter);
    assert_eq!((counter.shapes, counter.segments), (2, 2));
}
