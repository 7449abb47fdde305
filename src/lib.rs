//! Inner Planets - N-body gravity simulation
//!
//! A library crate providing the physics core and the Bevy plugins used by
//! the viewer binary.

pub mod body;
pub mod physics;
pub mod render;
pub mod scenarios;
pub mod types;
