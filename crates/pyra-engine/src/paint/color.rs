/// Straight-alpha RGBA color with components in `[0, 1]`.
///
/// Values are written to the framebuffer as given; whether they are treated as
/// sRGB or linear depends on the surface format chosen by `device::GpuInit`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const PURPLE: Color = Color::rgb(1.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn to_rgb_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_kept_straight() {
        let c = Color::new(0.37, 0.42, 0.45, 0.0);
        let w: wgpu::Color = c.into();
        assert!((w.r - 0.37).abs() < 1e-6);
        assert_eq!(w.a, 0.0);
    }

    #[test]
    fn rgb_array_drops_alpha() {
        assert_eq!(Color::PURPLE.to_rgb_array(), [1.0, 0.0, 1.0]);
    }
}
