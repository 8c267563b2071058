//! Window + event-loop runtime.
//!
//! Owns the winit event loop and the single window, and drives the app
//! callbacks (surface-ready, resize, frame) in sequence.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
