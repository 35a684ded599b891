use std::path::PathBuf;

use raymarch_engine::device::GpuInit;
use raymarch_engine::logging::LoggingConfig;
use raymarch_engine::window::RuntimeConfig;

/// Shader path used when none is given on the command line.
pub const DEFAULT_SHADER_PATH: &str = "./shaders.wgsl";

/// Startup configuration for a demo binary.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub shader_path: PathBuf,
    pub runtime: RuntimeConfig,
    pub gpu: GpuInit,
    pub logging: LoggingConfig,
}

impl DemoConfig {
    /// Defaults for a demo window titled `title`.
    pub fn new(title: &str) -> Self {
        Self {
            shader_path: PathBuf::from(DEFAULT_SHADER_PATH),
            runtime: RuntimeConfig {
                title: title.to_string(),
                ..RuntimeConfig::default()
            },
            gpu: GpuInit::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Applies command-line arguments (program name already skipped).
    ///
    /// The only argument is an optional shader path.
    pub fn with_args<I>(mut self, mut args: I) -> Self
    where
        I: Iterator<Item = String>,
    {
        if let Some(path) = args.next() {
            self.shader_path = PathBuf::from(path);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_relative_shader_path() {
        let config = DemoConfig::new("demo").with_args(std::iter::empty());
        assert_eq!(config.shader_path, PathBuf::from("./shaders.wgsl"));
        assert_eq!(config.runtime.title, "demo");
    }

    #[test]
    fn first_argument_overrides_shader_path() {
        let args = ["scenes/bulb.wgsl".to_string(), "ignored".to_string()];
        let config = DemoConfig::new("demo").with_args(args.into_iter());
        assert_eq!(config.shader_path, PathBuf::from("scenes/bulb.wgsl"));
    }
}
