//! Key polling
//!
//! Entities never see window events. They ask an [`InputState`] whether a
//! key, identified by its character code, is currently held.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Source of key-down state, polled once per tick
pub trait InputState {
    /// True while `key` is held. Letters match case-insensitively.
    fn is_key_down(&self, key: char) -> bool;
}

/// Key assignments for driving a tank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub up: char,
    pub down: char,
    pub left: char,
    pub right: char,
    /// Turret counter-clockwise
    pub turn_left: char,
    /// Turret clockwise
    pub turn_right: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: 'W',
            down: 'S',
            left: 'A',
            right: 'D',
            turn_left: 'Q',
            turn_right: 'E',
        }
    }
}

/// Input state driven by code instead of a keyboard
///
/// Used by the headless simulation and by tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    held: HashSet<char>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `key` until released
    pub fn press(&mut self, key: char) {
        self.held.insert(key.to_ascii_uppercase());
    }

    pub fn release(&mut self, key: char) {
        self.held.remove(&key.to_ascii_uppercase());
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Replace the held set with exactly `keys`
    pub fn set_held<I: IntoIterator<Item = char>>(&mut self, keys: I) {
        self.held = keys.into_iter().map(|k| k.to_ascii_uppercase()).collect();
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }
}

impl InputState for ScriptedInput {
    fn is_key_down(&self, key: char) -> bool {
        self.held.contains(&key.to_ascii_uppercase())
    }
}
