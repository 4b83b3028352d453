use pyra_engine::core::{App, AppControl, FrameCtx};
use pyra_engine::input::{InputEvent, InputState};
use pyra_engine::mesh::Mesh;
use pyra_engine::paint::Color;
use pyra_engine::render::{MeshRenderer, MeshTransforms};

use crate::controls;
use crate::projection::Projection;
use crate::transform::ModelTransform;

/// The interactive pyramid viewer.
///
/// Input updates `transform`; resizes update `projection`; each frame draws
/// `mesh` with both matrices.
pub struct Viewer {
    mesh: Mesh,
    renderer: Option<MeshRenderer>,
    transform: ModelTransform,
    projection: Projection,
    clear_color: Color,
}

impl Viewer {
    pub fn new(mesh: Mesh, clear_color: Color) -> Self {
        log::info!("constructing viewer");
        Self {
            mesh,
            renderer: None,
            transform: ModelTransform::new(),
            projection: Projection::default(),
            clear_color,
        }
    }

    pub fn transform(&self) -> &ModelTransform {
        &self.transform
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Sets the rotation in degrees (see [`ModelTransform::set_rotation`]).
    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32) {
        self.transform.set_rotation(x, y, z);
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.transform.set_scale(scale);
    }

    fn transforms(&self) -> MeshTransforms {
        MeshTransforms {
            model_view: self.transform.model_view(),
            projection: self.projection.matrix(),
        }
    }
}

impl App for Viewer {
    fn on_input(&mut self, event: &InputEvent, state: &InputState) -> AppControl {
        if let Some(cmd) = controls::command_for(event, state) {
            log::trace!("applying {cmd:?}");
            cmd.apply(&mut self.transform);
        }
        AppControl::Continue
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let transforms = self.transforms();
        let mesh = &self.mesh;
        let renderer = self.renderer.get_or_insert_with(MeshRenderer::new);

        ctx.render(self.clear_color, |rctx, target| {
            if !renderer.has_mesh() {
                renderer.upload(rctx, mesh);
            }
            renderer.render(rctx, target, &transforms);
        })
    }

    fn on_shutdown(&mut self) {
        log::info!("shutting down viewer");
        // Buffers are released while the device is still alive.
        self.renderer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyra_engine::input::{
        Modifiers, MouseButton, MouseButtonState, MouseWheelDelta, PointerButtonEvent,
        PointerMoveEvent,
    };

    use crate::scene;
    use crate::transform::{MODEL_OFFSET, SCALE_STEP};

    fn viewer() -> Viewer {
        Viewer::new(scene::pyramid().unwrap(), Color::default())
    }

    fn feed(v: &mut Viewer, state: &mut InputState, ev: InputEvent) {
        state.apply_event(&ev);
        assert_eq!(v.on_input(&ev, state), AppControl::Continue);
    }

    #[test]
    fn drag_then_wheel_updates_model_view() {
        let mut v = viewer();
        let mut st = InputState::default();

        feed(&mut v, &mut st, InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x: 0.0,
            y: 0.0,
            modifiers: Modifiers::default(),
        }));
        feed(&mut v, &mut st, InputEvent::PointerMoved(PointerMoveEvent { x: 15.0, y: 25.0 }));
        feed(&mut v, &mut st, InputEvent::MouseWheel {
            delta: MouseWheelDelta::Line { x: 0.0, y: 1.0 },
            modifiers: Modifiers::default(),
        });

        assert_eq!(v.transform().rotation(), [15.0, 25.0, 0.0]);
        assert!((v.transform().scale() - (1.0 + SCALE_STEP)).abs() < 1e-6);

        let t = v.transforms();
        assert_eq!(t.model_view, v.transform().model_view());
        assert_ne!(t.model_view, glam::Mat4::from_translation(MODEL_OFFSET));
    }

    #[test]
    fn resize_updates_projection() {
        let mut v = viewer();
        v.on_resize(1000, 500);
        assert!((v.projection().aspect() - 2.0).abs() < 1e-6);
        assert_eq!(v.transforms().projection, v.projection().matrix());
    }

    #[test]
    fn direct_setters_drive_the_matrix() {
        let mut v = viewer();
        v.set_rotation(0.0, 0.0, 90.0);
        v.set_scale(2.0);
        let p = v.transform().model_view().transform_point3(glam::Vec3::new(1.0, 0.0, 0.0));
        // (1,0,0) scaled to (2,0,0), rotated 90° about Z to (0,2,0), then offset.
        assert!(p.abs_diff_eq(glam::Vec3::new(-2.0, 2.0, -6.0), 1e-5));
    }

    #[test]
    fn shutdown_without_gpu_is_harmless() {
        let mut v = viewer();
        v.on_shutdown();
        assert!(v.renderer.is_none());
    }
}
