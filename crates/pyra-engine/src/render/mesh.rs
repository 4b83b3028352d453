use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::device::DEPTH_FORMAT;
use crate::mesh::{Mesh, Vertex};
use crate::render::{RenderCtx, RenderTarget};

/// Matrices applied to a mesh for one draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeshTransforms {
    pub model_view: Mat4,
    pub projection: Mat4,
}

impl Default for MeshTransforms {
    fn default() -> Self {
        Self { model_view: Mat4::IDENTITY, projection: Mat4::IDENTITY }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct TransformsUniform {
    model_view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
}

impl From<&MeshTransforms> for TransformsUniform {
    fn from(t: &MeshTransforms) -> Self {
        Self {
            model_view: t.model_view.to_cols_array_2d(),
            projection: t.projection.to_cols_array_2d(),
        }
    }
}

/// Draws a single indexed mesh with per-vertex color.
///
/// Depth test is `LessEqual`, back faces (clockwise in window space) are culled.
/// The vertex, index and uniform buffers are owned here and released on drop.
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    transforms_ubo: Option<wgpu::Buffer>,

    vbo: Option<wgpu::Buffer>,
    ibo: Option<wgpu::Buffer>,
    index_count: u32,

    warned_no_mesh: bool,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once a mesh has been uploaded.
    pub fn has_mesh(&self) -> bool {
        self.vbo.is_some() && self.ibo.is_some()
    }

    /// Uploads `mesh` into static vertex/index buffers, replacing any previous mesh.
    pub fn upload(&mut self, ctx: &RenderCtx<'_>, mesh: &Mesh) {
        self.vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("pyra mesh vbo"),
            contents: bytemuck::cast_slice(mesh.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("pyra mesh ibo"),
            contents: bytemuck::cast_slice(mesh.indices()),
            usage: wgpu::BufferUsages::INDEX,
        }));

        self.index_count = mesh.index_count();

        log::debug!(
            "mesh uploaded: {} vertices, {} triangles",
            mesh.vertices().len(),
            mesh.triangle_count()
        );
    }

    /// Draws the uploaded mesh into `target` with `transforms`.
    ///
    /// Does nothing (one-time debug message) if no mesh was uploaded.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        transforms: &MeshTransforms,
    ) {
        if !self.has_mesh() {
            if !self.warned_no_mesh {
                log::debug!("MeshRenderer: render called before upload; skipped");
                self.warned_no_mesh = true;
            }
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.write_transforms(ctx, transforms);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };
        let Some(ibo) = self.ibo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("pyra mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("pyra mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("pyra mesh bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(
                                std::mem::size_of::<TransformsUniform>() as u64,
                            ),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("pyra mesh pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pyra mesh pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.transforms_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.transforms_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("pyra mesh transforms ubo"),
            size: std::mem::size_of::<TransformsUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("pyra mesh bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        self.transforms_ubo = Some(ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_transforms(&self, ctx: &RenderCtx<'_>, transforms: &MeshTransforms) {
        let Some(ubo) = self.transforms_ubo.as_ref() else { return };
        let u = TransformsUniform::from(transforms);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }
}

impl Drop for MeshRenderer {
    fn drop(&mut self) {
        let mut released = 0;
        for buffer in [self.vbo.take(), self.ibo.take(), self.transforms_ubo.take()]
            .into_iter()
            .flatten()
        {
            buffer.destroy();
            released += 1;
        }

        if released > 0 {
            log::debug!("MeshRenderer: released {released} GPU buffers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn uniform_is_two_column_major_matrices() {
        assert_eq!(std::mem::size_of::<TransformsUniform>(), 128);

        let t = MeshTransforms {
            model_view: Mat4::from_translation(Vec3::new(-2.0, 0.0, -6.0)),
            projection: Mat4::IDENTITY,
        };
        let u = TransformsUniform::from(&t);
        // Translation lives in the fourth column.
        assert_eq!(u.model_view[3], [-2.0, 0.0, -6.0, 1.0]);
        assert_eq!(u.projection[0], [1.0, 0.0, 0.0, 0.0]);
    }
}
