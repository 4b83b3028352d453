//! Model-view state of the displayed object.
//!
//! The matrix is always rebuilt from scratch in a fixed order:
//!
//! ```text
//! model_view = T(MODEL_OFFSET) · Rx(rx) · Ry(ry) · Rz(rz) · S(scale)
//! ```

use glam::{Mat4, Vec3};

/// Where the object sits in view space.
pub const MODEL_OFFSET: Vec3 = Vec3::new(-2.0, 0.0, -6.0);

pub const SCALE_MIN: f32 = 0.01;
pub const SCALE_MAX: f32 = 2.0;
/// Scale change per wheel notch.
pub const SCALE_STEP: f32 = 0.08;

/// Rotation (whole degrees about X, Y, Z) and uniform scale, with the cached
/// model-view matrix derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelTransform {
    rotation: [f32; 3],
    scale: f32,
    model_view: Mat4,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelTransform {
    pub fn new() -> Self {
        let mut t = Self { rotation: [0.0; 3], scale: 1.0, model_view: Mat4::IDENTITY };
        t.rebuild();
        t
    }

    /// Rotation angles in degrees.
    pub fn rotation(&self) -> [f32; 3] {
        self.rotation
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn model_view(&self) -> Mat4 {
        self.model_view
    }

    /// Sets the rotation in degrees. Fractions are truncated toward zero.
    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = [x.trunc(), y.trunc(), z.trunc()];
        self.rebuild();
        log::trace!("rotation set to {:?}", self.rotation);
    }

    /// Sets the scale factor as given; 1.0 is the mesh's original size.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.rebuild();
        log::trace!("scale set to {}", self.scale);
    }

    /// Moves the scale one [`SCALE_STEP`] up (`direction > 0`) or down,
    /// clamped to `[SCALE_MIN, SCALE_MAX]`.
    pub fn step_scale(&mut self, direction: i32) {
        let next = self.scale + direction.signum() as f32 * SCALE_STEP;
        self.set_scale(next.clamp(SCALE_MIN, SCALE_MAX));
    }

    pub fn reset_rotation(&mut self) {
        self.set_rotation(0.0, 0.0, 0.0);
    }

    pub fn reset_scale(&mut self) {
        self.set_scale(1.0);
    }

    /// Zero rotation, unit scale.
    pub fn reset(&mut self) {
        self.rotation = [0.0; 3];
        self.scale = 1.0;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let [rx, ry, rz] = self.rotation;
        self.model_view = Mat4::from_translation(MODEL_OFFSET)
            * Mat4::from_rotation_x(rx.to_radians())
            * Mat4::from_rotation_y(ry.to_radians())
            * Mat4::from_rotation_z(rz.to_radians())
            * Mat4::from_scale(Vec3::splat(self.scale));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: Mat4, b: Mat4) -> bool {
        a.abs_diff_eq(b, EPS)
    }

    #[test]
    fn initial_matrix_is_pure_translation() {
        let t = ModelTransform::new();
        assert!(approx(t.model_view(), Mat4::from_translation(MODEL_OFFSET)));
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.rotation(), [0.0; 3]);
    }

    #[test]
    fn matrix_follows_composition_order() {
        let mut t = ModelTransform::new();
        t.set_rotation(30.0, 45.0, 60.0);
        t.set_scale(0.5);

        let expected = Mat4::from_translation(Vec3::new(-2.0, 0.0, -6.0))
            * Mat4::from_rotation_x(30f32.to_radians())
            * Mat4::from_rotation_y(45f32.to_radians())
            * Mat4::from_rotation_z(60f32.to_radians())
            * Mat4::from_scale(Vec3::splat(0.5));
        assert!(approx(t.model_view(), expected));

        // Rotations do not commute; the reversed order must differ.
        let reversed = Mat4::from_translation(MODEL_OFFSET)
            * Mat4::from_rotation_z(60f32.to_radians())
            * Mat4::from_rotation_y(45f32.to_radians())
            * Mat4::from_rotation_x(30f32.to_radians())
            * Mat4::from_scale(Vec3::splat(0.5));
        assert!(!approx(t.model_view(), reversed));
    }

    #[test]
    fn apex_lands_where_expected() {
        let mut t = ModelTransform::new();
        t.set_rotation(0.0, 90.0, 0.0);
        // Apex (0, 0, -1) rotated 90° about Y ends at (-1, 0, 0), then offset.
        let p = t.model_view().transform_point3(Vec3::new(0.0, 0.0, -1.0));
        assert!(p.abs_diff_eq(Vec3::new(-3.0, 0.0, -6.0), EPS));
    }

    #[test]
    fn scale_keeps_rotation() {
        let mut t = ModelTransform::new();
        t.set_rotation(10.0, 20.0, 0.0);
        t.set_scale(1.5);
        assert_eq!(t.rotation(), [10.0, 20.0, 0.0]);

        t.set_rotation(10.0, 20.0, 5.0);
        assert_eq!(t.scale(), 1.5);
    }

    #[test]
    fn rotation_is_truncated_to_whole_degrees() {
        let mut t = ModelTransform::new();
        t.set_rotation(12.9, -7.6, 0.4);
        assert_eq!(t.rotation(), [12.0, -7.0, 0.0]);
    }

    #[test]
    fn step_scale_clamps_at_both_ends() {
        let mut t = ModelTransform::new();
        for _ in 0..50 {
            t.step_scale(1);
        }
        assert_eq!(t.scale(), SCALE_MAX);

        for _ in 0..50 {
            t.step_scale(-1);
        }
        assert_eq!(t.scale(), SCALE_MIN);
    }

    #[test]
    fn one_step_moves_by_step_size() {
        let mut t = ModelTransform::new();
        t.step_scale(-3);
        assert!((t.scale() - (1.0 - SCALE_STEP)).abs() < EPS);
    }

    #[test]
    fn set_scale_is_not_clamped() {
        let mut t = ModelTransform::new();
        t.set_scale(5.0);
        assert_eq!(t.scale(), 5.0);
    }

    #[test]
    fn partial_resets() {
        let mut t = ModelTransform::new();
        t.set_rotation(40.0, 50.0, 0.0);
        t.set_scale(0.3);

        t.reset_scale();
        assert_eq!((t.rotation(), t.scale()), ([40.0, 50.0, 0.0], 1.0));

        t.set_scale(0.3);
        t.reset_rotation();
        assert_eq!((t.rotation(), t.scale()), ([0.0; 3], 0.3));

        t.reset();
        assert_eq!(t, ModelTransform::new());
    }
}
