//! Facet engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the viewer binary.

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod render;
