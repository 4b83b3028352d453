use glam::Mat4;

pub const FOV_Y_DEGREES: f32 = 60.0;
pub const Z_NEAR: f32 = 0.2;
pub const Z_FAR: f32 = 20.0;

/// Perspective projection kept in sync with the window's aspect ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    aspect: f32,
    matrix: Mat4,
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        let mut p = Self { aspect: 1.0, matrix: Mat4::IDENTITY };
        p.resize(width, height);
        p
    }

    /// Recomputes the projection for a new drawable size. A zero height is
    /// treated as one pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        let height = height.max(1);
        self.aspect = width as f32 / height as f32;
        // wgpu clip space: depth in [0, 1].
        self.matrix =
            Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), self.aspect, Z_NEAR, Z_FAR);
        log::debug!("projection updated: {width}x{height}, aspect {:.3}", self.aspect);
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }
}
