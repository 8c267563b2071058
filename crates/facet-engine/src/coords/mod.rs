//! Coordinate and size types shared between the runtime and renderers.

mod viewport;

pub use viewport::Viewport;
