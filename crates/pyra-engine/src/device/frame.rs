/// One acquired surface texture with the views and encoder that draw into it.
///
/// Hand it back to `Gpu::submit` in the same redraw; an unreturned texture
/// blocks the next acquire.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub depth_view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
