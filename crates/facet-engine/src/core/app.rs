use crate::device::Gpu;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the viewer.
///
/// The runtime invokes these in sequence: `on_surface_ready` exactly once
/// after the window surface and GPU context exist, `on_resize` whenever the
/// drawable size changes, and `on_frame` once per rendered frame.
pub trait App {
    /// Called once, after the surface and GPU context are ready.
    ///
    /// This is the place for one-time GPU resource allocation and shader
    /// compilation.
    fn on_surface_ready(&mut self, gpu: &Gpu<'_>);

    /// Called when the drawable size changes (physical pixels).
    fn on_resize(&mut self, width: u32, height: u32) {
        let _ = (width, height);
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
