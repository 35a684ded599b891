//! Raymarching demos built on `raymarch-engine`.
//!
//! - `combining`: rotating primitive, camera driven by the frame counter
//! - `mandelbulb`: fractal with drag-to-orbit camera and scene controls

pub mod combining;
pub mod config;
pub mod controls;
pub mod mandelbulb;

use anyhow::Result;

use raymarch_engine::core::App;
use raymarch_engine::logging::init_logging;
use raymarch_engine::shader::ShaderSource;
use raymarch_engine::window::Runtime;

use config::DemoConfig;

/// Loads the shader, builds the app and runs it until the window closes.
///
/// Any initialization failure is returned before a frame is rendered.
pub fn run<A, F>(config: DemoConfig, make_app: F) -> Result<()>
where
    A: App + 'static,
    F: FnOnce(&DemoConfig, ShaderSource) -> A,
{
    init_logging(config.logging.clone());

    let shader = ShaderSource::load(&config.shader_path)?;
    let app = make_app(&config, shader);

    Runtime::run(config.runtime, config.gpu, app)
}

/// Binary entry helper: runs the demo and logs a failure once.
pub fn main_with<A, F>(title: &str, make_app: F)
where
    A: App + 'static,
    F: FnOnce(&DemoConfig, ShaderSource) -> A,
{
    let config = DemoConfig::new(title).with_args(std::env::args().skip(1));

    if let Err(err) = run(config, make_app) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
