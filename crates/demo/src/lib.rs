//! Demonstration driver: runs the settings, report and order scenarios and
//! writes human-readable output to a caller-supplied writer.

pub mod config;
pub mod flows;

pub use config::DemoConfig;
