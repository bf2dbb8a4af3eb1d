//! Orientation tracking for spherical video
//!
//! This crate turns gyroscope samples and drag gestures into a camera
//! orientation for a 360° video viewport.

mod build_error;
mod listener;
mod orientation_controller;
mod scene_node;
mod settings;

pub use build_error::BuildError;
pub use listener::{InteractionMethod, ListenerKey, OrientationListener};
pub use orientation_controller::{
    ControllerState, OrientationController, OrientationControllerBuilder, PanPhase,
};
pub use scene_node::SceneNode;
pub use settings::ControllerSettings;
