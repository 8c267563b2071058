//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipeline, buffers) and issue commands
//! via wgpu into a [`RenderTarget`] provided by the runtime.
//!
//! Convention:
//! - Geometry is authored directly in clip space (NDC).
//! - The current viewport is applied per pass from [`RenderCtx`].

mod ctx;
mod square;

pub use ctx::{RenderCtx, RenderTarget};
pub use square::SquareRenderer;
