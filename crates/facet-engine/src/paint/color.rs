/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// Used as the frame clear color. No blending happens in this engine, so no
/// premultiplication is involved.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps all channels to `[0, 1]`.
    ///
    /// Intended for user-provided inputs before they reach the GPU.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_is_identity_in_range() {
        let c = Color::new(0.25, 0.5, 0.75, 1.0);
        assert_eq!(c.clamped(), c);
    }

    #[test]
    fn clamped_limits_out_of_range_channels() {
        let c = Color::new(-0.5, 1.5, 0.5, 2.0).clamped();
        assert_eq!(c, Color::new(0.0, 1.0, 0.5, 1.0));
    }

    #[test]
    fn black_is_opaque() {
        assert_eq!(Color::BLACK.a, 1.0);
        assert!(Color::BLACK.is_finite());
    }

    #[test]
    fn nan_channel_is_not_finite() {
        assert!(!Color::new(f32::NAN, 0.0, 0.0, 1.0).is_finite());
    }
}
