//! Rotating-pyramid demo: one solid, one shader program, one loop.

mod app;
mod geometry;
mod shaders;

use obelisk_engine::device::GpuInit;
use obelisk_engine::logging::{LoggingConfig, init_logging};
use obelisk_engine::window::{Runtime, RuntimeConfig};

use app::PyramidApp;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "obelisk: rotating pyramid".to_string(),
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GpuInit::default(), PyramidApp::new())
}
