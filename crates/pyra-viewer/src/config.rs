use pyra_engine::device::GpuInit;
use pyra_engine::logging::LoggingConfig;
use pyra_engine::paint::Color;
use pyra_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Background behind the pyramid.
pub const CLEAR_COLOR: Color = Color::new(0.37, 0.42, 0.45, 0.0);

/// Viewer settings.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub clear_color: Color,
    pub logging: LoggingConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Pyramid Viewer".to_string(),
            width: 800.0,
            height: 600.0,
            clear_color: CLEAR_COLOR,
            logging: LoggingConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            continuous_redraw: false,
        }
    }

    /// Linear surface so vertex and clear colors are written unconverted.
    pub fn gpu(&self) -> GpuInit {
        GpuInit {
            prefer_srgb: false,
            ..GpuInit::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_config_mirrors_viewer_settings() {
        let cfg = ViewerConfig { width: 1024.0, height: 768.0, ..Default::default() };
        let rt = cfg.runtime();
        assert_eq!(rt.title, "Pyramid Viewer");
        assert_eq!(rt.initial_size, LogicalSize::new(1024.0, 768.0));
        assert!(!rt.continuous_redraw);
    }

    #[test]
    fn surface_is_linear() {
        assert!(!ViewerConfig::default().gpu().prefer_srgb);
    }
}
