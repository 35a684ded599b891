//! External shader loading.
//!
//! The scene shader is plain WGSL read at startup. Before it reaches wgpu it
//! is parsed and validated with `naga`, then checked against the host
//! contract:
//! - a vertex entry point `vs_main` and a fragment entry point `fs_main`
//! - a uniform buffer at `@group(0) @binding(0)`
//! - that uniform no larger than [`FrameUniforms::SIZE`]
//!
//! A shader may declare a prefix of the block (the camera rows only), but it
//! may not read past what the host uploads.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

use crate::params::FrameUniforms;

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Contract violations found while loading a shader.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderError {
    /// WGSL failed to parse; carries the rendered diagnostic.
    Parse(String),
    /// WGSL parsed but failed naga validation.
    Invalid(String),
    MissingEntryPoint {
        name: &'static str,
        stage: naga::ShaderStage,
    },
    MissingUniform,
    UniformTooLarge {
        declared: u32,
        available: usize,
    },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Parse(msg) => write!(f, "shader parse error:\n{msg}"),
            ShaderError::Invalid(msg) => write!(f, "shader validation error: {msg}"),
            ShaderError::MissingEntryPoint { name, stage } => {
                write!(f, "shader has no {stage:?} entry point `{name}`")
            }
            ShaderError::MissingUniform => {
                write!(f, "shader declares no uniform buffer at @group(0) @binding(0)")
            }
            ShaderError::UniformTooLarge { declared, available } => write!(
                f,
                "shader uniform is {declared} bytes but the frame block is {available} bytes"
            ),
        }
    }
}

impl std::error::Error for ShaderError {}

/// Validated WGSL source, ready to hand to the renderer.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    label: String,
    wgsl: String,
    uniform_size: u32,
}

impl ShaderSource {
    /// Reads and validates a WGSL file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let wgsl = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read shader {}", path.display()))?;

        let shader = Self::from_wgsl(path.display().to_string(), wgsl)
            .with_context(|| format!("invalid shader {}", path.display()))?;

        log::info!(
            "loaded shader {} ({} of {} uniform bytes, layout v{})",
            shader.label,
            shader.uniform_size,
            FrameUniforms::SIZE,
            FrameUniforms::LAYOUT_VERSION
        );
        Ok(shader)
    }

    /// Validates WGSL text against the host contract.
    pub fn from_wgsl(
        label: impl Into<String>,
        wgsl: impl Into<String>,
    ) -> std::result::Result<Self, ShaderError> {
        let wgsl = wgsl.into();
        let module = naga::front::wgsl::parse_str(&wgsl)
            .map_err(|e| ShaderError::Parse(e.emit_to_string(&wgsl)))?;
        validate(&module)?;

        require_entry_point(&module, VERTEX_ENTRY, naga::ShaderStage::Vertex)?;
        require_entry_point(&module, FRAGMENT_ENTRY, naga::ShaderStage::Fragment)?;
        let uniform_size = frame_uniform_size(&module)?;

        Ok(Self {
            label: label.into(),
            wgsl,
            uniform_size,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn wgsl(&self) -> &str {
        &self.wgsl
    }

    /// Bytes of the frame block the shader declares.
    pub fn uniform_size(&self) -> u32 {
        self.uniform_size
    }
}

/// Full naga validation, the same pass wgpu runs at pipeline creation.
fn validate(module: &naga::Module) -> std::result::Result<(), ShaderError> {
    use naga::valid::{Capabilities, ValidationFlags, Validator};

    Validator::new(ValidationFlags::all(), Capabilities::default())
        .validate(module)
        .map(|_| ())
        .map_err(|e| ShaderError::Invalid(error_chain(e.as_inner())))
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

fn require_entry_point(
    module: &naga::Module,
    name: &'static str,
    stage: naga::ShaderStage,
) -> std::result::Result<(), ShaderError> {
    let found = module
        .entry_points
        .iter()
        .any(|ep| ep.name == name && ep.stage == stage);

    if found {
        Ok(())
    } else {
        Err(ShaderError::MissingEntryPoint { name, stage })
    }
}

fn frame_uniform_size(module: &naga::Module) -> std::result::Result<u32, ShaderError> {
    let (_, var) = module
        .global_variables
        .iter()
        .find(|(_, var)| {
            var.space == naga::AddressSpace::Uniform
                && var
                    .binding
                    .as_ref()
                    .is_some_and(|b| b.group == 0 && b.binding == 0)
        })
        .ok_or(ShaderError::MissingUniform)?;

    let declared = module.types[var.ty].inner.size(module.to_ctx());
    if declared as usize > FrameUniforms::SIZE {
        return Err(ShaderError::UniformTooLarge {
            declared,
            available: FrameUniforms::SIZE,
        });
    }

    Ok(declared)
}
