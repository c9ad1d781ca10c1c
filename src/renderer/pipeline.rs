//! WebGPU presentation of a `QuadBatch`
//!
//! Batch vertices are in field pixels; they are mapped to NDC on upload into a
//! single growable vertex buffer and drawn in one pass over the road colour.

use glam::Vec2;

use super::vertex::{Vertex, colors};

/// Map a field-space point (pixels, y down) to normalized device coordinates
pub fn field_to_ndc(field: Vec2, x: f32, y: f32) -> (f32, f32) {
    (x / field.x * 2.0 - 1.0, 1.0 - y / field.y * 2.0)
}

/// Vertex buffer reused across frames, reallocated only when a frame outgrows it
struct DynamicVertices {
    buffer: wgpu::Buffer,
    capacity: usize,
    len: u32,
    scratch: Vec<Vertex>,
}

impl DynamicVertices {
    const INITIAL_CAPACITY: usize = 1024;

    fn new(device: &wgpu::Device) -> Self {
        Self {
            buffer: Self::allocate(device, Self::INITIAL_CAPACITY),
            capacity: Self::INITIAL_CAPACITY,
            len: 0,
            scratch: Vec::with_capacity(Self::INITIAL_CAPACITY),
        }
    }

    fn allocate(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quad_vertices"),
            size: (capacity * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, field: Vec2, vertices: &[Vertex]) {
        self.scratch.clear();
        self.scratch.extend(vertices.iter().map(|v| {
            let (x, y) = field_to_ndc(field, v.position[0], v.position[1]);
            Vertex::new(x, y, v.color)
        }));

        if self.scratch.len() > self.capacity {
            self.capacity = self.scratch.len().next_power_of_two();
            self.buffer = Self::allocate(device, self.capacity);
            log::debug!("Vertex buffer grown to {} vertices", self.capacity);
        }
        if !self.scratch.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&self.scratch));
        }
        self.len = self.scratch.len() as u32;
    }
}

fn clear_color() -> wgpu::Color {
    let [r, g, b, a] = colors::ROAD.map(f64::from);
    wgpu::Color { r, g, b, a }
}

fn create_quad_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("quad_shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("quad_layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    let target = wgpu::ColorTargetState {
        format,
        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
        write_mask: wgpu::ColorWrites::ALL,
    };

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("quad_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &module,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &module,
            entry_point: Some("fs_main"),
            targets: &[Some(target)],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

/// GPU side of the renderer
pub struct RenderState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertices: DynamicVertices,
    /// Backbuffer size in pixels
    pub size: (u32, u32),
    /// Playfield size the batch coordinates are expressed in
    pub field: Vec2,
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        field: Vec2,
    ) -> Result<Self, wgpu::RequestDeviceError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("road-dodger-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let caps = surface.get_capabilities(adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(wgpu::TextureFormat::is_srgb)
            .unwrap_or(caps.formats[0]);
        log::info!("Surface format {:?}, {}x{}", format, width, height);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipeline = create_quad_pipeline(&device, format);
        let vertices = DynamicVertices::new(&device);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertices,
            size: (width, height),
            field,
        })
    }

    /// Reconfigure the swapchain; zero sizes are ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Upload the frame's vertices and present
    pub fn render(&mut self, vertices: &[Vertex]) -> Result<(), wgpu::SurfaceError> {
        self.vertices
            .upload(&self.device, &self.queue, self.field, vertices);

        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&Default::default());
        let mut encoder = self.device.create_command_encoder(&Default::default());

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("road_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if self.vertices.len > 0 {
                pass.set_pipeline(&self.pipeline);
                pass.set_vertex_buffer(0, self.vertices.buffer.slice(..));
                pass.draw(0..self.vertices.len, 0..1);
            }
        }

        self.queue.submit([encoder.finish()]);
        frame.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_corners_map_to_ndc() {
        let field = Vec2::new(800.0, 1000.0);
        assert_eq!(field_to_ndc(field, 0.0, 0.0), (-1.0, 1.0));
        assert_eq!(field_to_ndc(field, 800.0, 1000.0), (1.0, -1.0));
        assert_eq!(field_to_ndc(field, 400.0, 500.0), (0.0, 0.0));
    }

    #[test]
    fn test_clear_color_is_road() {
        let c = clear_color();
        assert_eq!(c.r, f64::from(colors::ROAD[0]));
        assert_eq!(c.a, 1.0);
    }
}
