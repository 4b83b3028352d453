/// Adapter and surface choices made when the window's GPU context is created.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// `true` picks an `*Srgb` surface; `false` picks `*Unorm` so shader
    /// outputs are stored without conversion.
    pub prefer_srgb: bool,

    pub present_mode: wgpu::PresentMode,

    pub power_preference: wgpu::PowerPreference,

    /// Frames the surface may queue ahead of presentation (hint).
    pub frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            power_preference: wgpu::PowerPreference::HighPerformance,
            frame_latency: 2,
        }
    }
}
