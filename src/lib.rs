//! Rust360 - orientation tracking for spherical video
//!
//! The library crates do the work; this crate wires them to configuration
//! and a headless camera for the demo binary and integration tests.

pub mod camera;
pub mod config;
pub mod systems;
