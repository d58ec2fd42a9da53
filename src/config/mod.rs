//! JSON configuration for the demo binary.

pub mod demo;

pub use demo::{load_config, DemoConfig};
