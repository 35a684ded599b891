use crate::params::FrameUniforms;
use crate::render::{RenderCtx, RenderTarget};
use crate::shader::{ShaderSource, FRAGMENT_ENTRY, VERTEX_ENTRY};

/// Vertices of the full-screen triangle strip; the vertex shader derives the
/// corners from `vertex_index`.
const STRIP_VERTICES: u32 = 4;

/// Draws the external shader over the whole surface.
///
/// One pipeline (triangle strip, no vertex or index buffers, layout inferred
/// from the shader), one 128-byte uniform buffer rewritten every frame, one
/// draw call. GPU objects are created on first use and rebuilt if the surface
/// format changes.
pub struct FullscreenRenderer {
    shader: ShaderSource,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group: Option<wgpu::BindGroup>,
    uniform_buffer: Option<wgpu::Buffer>,
}

impl FullscreenRenderer {
    pub fn new(shader: ShaderSource) -> Self {
        Self {
            shader,
            pipeline_format: None,
            pipeline: None,
            bind_group: None,
            uniform_buffer: None,
        }
    }

    /// Uploads `uniforms` and draws one full-screen strip into `target`.
    ///
    /// The target is expected to be cleared already; this pass loads it.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        uniforms: &FrameUniforms,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(uniform_buffer) = self.uniform_buffer.as_ref() else { return };

        ctx.queue.write_buffer(uniform_buffer, 0, uniforms.as_bytes());

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("raymarch scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.draw(0..STRIP_VERTICES, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let module = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(self.shader.label()),
            source: wgpu::ShaderSource::Wgsl(self.shader.wgsl().into()),
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("raymarch scene pipeline"),
            // Inferred from the shader, the same way for every scene.
            layout: None,

            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some(VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[],
            },

            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some(FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!(
            "scene pipeline built for {:?} from {}",
            ctx.surface_format,
            self.shader.label()
        );

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);

        // The bind group layout belongs to the pipeline; rebuild against it.
        self.bind_group = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.uniform_buffer.is_some() {
            return;
        }
        let Some(pipeline) = self.pipeline.as_ref() else { return };

        let uniform_buffer = self.uniform_buffer.get_or_insert_with(|| {
            ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("raymarch frame uniforms"),
                size: FrameUniforms::SIZE as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        });

        let layout = pipeline.get_bind_group_layout(0);
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("raymarch frame bind group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        self.bind_group = Some(bind_group);
    }
}
