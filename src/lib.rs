//! agent2d - headless 2D agent sandbox
//!
//! Wires the math and entity crates to layered configuration and a
//! fixed-step simulation driver.

pub mod config;
pub mod simulation;
