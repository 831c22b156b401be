use wgpu::{
    BindGroup, BindGroupLayout, Buffer, Device, RenderPipeline as WgpuRenderPipeline,
    TextureFormat, TextureView,
};

use crate::gpu::GpuContext;
use crate::mesh::{Mesh, Vertex};

const DEPTH_FORMAT: TextureFormat = TextureFormat::Depth24Plus;

/// Render pipelines for the colored surface and its wireframe overlay.
/// Both share one shader, one camera bind group and one vertex buffer.
pub struct RenderPipeline {
    surface_pipeline: WgpuRenderPipeline,
    wireframe_pipeline: WgpuRenderPipeline,
    bind_group_layout: BindGroupLayout,
    depth_view: TextureView,
    /// Multisampled color target, absent when MSAA is unavailable
    msaa_view: Option<TextureView>,
}

impl RenderPipeline {
    /// Create a new render pipeline
    pub fn new(gpu: &GpuContext) -> Self {
        let device = &gpu.device;
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("surface-shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/surface.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("camera-bind-group-layout"),
            entries: &[
                // Camera parameters (uniform)
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("surface-pipeline-layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let build = |label: &str, topology: wgpu::PrimitiveTopology| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[Vertex::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: gpu.format(),
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
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
                multisample: wgpu::MultisampleState {
                    count: gpu.sample_count,
                    ..Default::default()
                },
                multiview: None,
                cache: None,
            })
        };

        let surface_pipeline = build("surface-pipeline", wgpu::PrimitiveTopology::TriangleStrip);
        let wireframe_pipeline = build("wireframe-pipeline", wgpu::PrimitiveTopology::LineStrip);

        let (depth_view, msaa_view) = create_targets(gpu);

        Self {
            surface_pipeline,
            wireframe_pipeline,
            bind_group_layout,
            depth_view,
            msaa_view,
        }
    }

    /// Recreate depth and multisample targets after a resize
    pub fn resize(&mut self, gpu: &GpuContext) {
        let (depth_view, msaa_view) = create_targets(gpu);
        self.depth_view = depth_view;
        self.msaa_view = msaa_view;
    }

    /// Create a bind group for the camera uniform buffer
    pub fn create_bind_group(&self, device: &Device, camera_buffer: &Buffer) -> BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera-bind-group"),
            layout: &self.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        })
    }

    /// Draw the surface strips, then the wireframe, to the given texture view
    pub fn draw(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &TextureView,
        bind_group: &BindGroup,
        vertex_buffer: &Buffer,
        mesh: &Mesh,
    ) {
        let (target, resolve_target) = match &self.msaa_view {
            Some(msaa) => (msaa, Some(view)),
            None => (view, None),
        };

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("surface-render-pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: 0.05, // Near black
                        g: 0.05,
                        b: 0.08,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_bind_group(0, bind_group, &[]);
        pass.set_vertex_buffer(0, vertex_buffer.slice(..));

        pass.set_pipeline(&self.surface_pipeline);
        for strip in &mesh.surface {
            pass.draw(strip.clone(), 0..1);
        }

        pass.set_pipeline(&self.wireframe_pipeline);
        for line in &mesh.wireframe {
            pass.draw(line.clone(), 0..1);
        }
    }
}

/// Depth view plus optional multisampled color view matching the surface
fn create_targets(gpu: &GpuContext) -> (TextureView, Option<TextureView>) {
    let size = wgpu::Extent3d {
        width: gpu.config.width,
        height: gpu.config.height,
        depth_or_array_layers: 1,
    };

    let make = |label: &str, format: TextureFormat| {
        gpu.device
            .create_texture(&wgpu::TextureDescriptor {
                label: Some(label),
                size,
                mip_level_count: 1,
                sample_count: gpu.sample_count,
                dimension: wgpu::TextureDimension::D2,
                format,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            })
            .create_view(&wgpu::TextureViewDescriptor::default())
    };

    let depth_view = make("depth-texture", DEPTH_FORMAT);
    let msaa_view = (gpu.sample_count > 1).then(|| make("msaa-color-texture", gpu.format()));
    (depth_view, msaa_view)
}
