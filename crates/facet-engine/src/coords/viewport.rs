/// Viewport size in physical pixels.
///
/// Renderers apply this to the render pass (`set_viewport`) so the draw maps
/// onto the current drawable area after a resize.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_size_is_valid() {
        assert!(Viewport::new(640.0, 480.0).is_valid());
    }

    #[test]
    fn zero_size_is_invalid() {
        assert!(!Viewport::new(0.0, 480.0).is_valid());
        assert!(!Viewport::new(640.0, 0.0).is_valid());
    }

    #[test]
    fn negative_size_is_invalid() {
        assert!(!Viewport::new(-1.0, 480.0).is_valid());
    }

    #[test]
    fn non_finite_size_is_invalid() {
        assert!(!Viewport::new(f32::NAN, 480.0).is_valid());
        assert!(!Viewport::new(640.0, f32::INFINITY).is_valid());
    }
}
