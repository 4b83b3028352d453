use anyhow::{Context, Result};

use pyra_engine::logging::init_logging;
use pyra_engine::window::Runtime;
use pyra_viewer::{scene, Viewer, ViewerConfig};

fn main() -> Result<()> {
    let config = ViewerConfig::default();
    init_logging(config.logging.clone());

    let mesh = scene::pyramid().context("built-in pyramid mesh is invalid")?;
    let viewer = Viewer::new(mesh, config.clear_color);

    Runtime::run(config.runtime(), config.gpu(), viewer).context("viewer runtime failed")?;

    log::info!("viewer exited");
    Ok(())
}
