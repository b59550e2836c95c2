//! wgpu render pipeline setup

use glam::Vec2;

use super::frame::FrameBuilder;
use super::vertex::Vertex;
use crate::sim::Field;

/// Main render state
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: wgpu::Buffer,
    /// Vertices the buffer can hold before it must be reallocated
    vertex_capacity: usize,
    pub vertex_count: u32,
    /// Viewport size in pixels
    pub size: (u32, u32),
    /// Logical field drawn into the viewport
    pub field: Field,
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        field: Field,
    ) -> anyhow::Result<Self> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("pong-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(adapter);
        let Some(&first_format) = surface_caps.formats.first() else {
            anyhow::bail!("surface reports no supported formats");
        };
        // Colors are authored sRGB-encoded, so prefer a non-sRGB target
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .copied()
            .unwrap_or(first_format);
        log::info!("Using surface format: {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipeline = create_pipeline(&device, config.format);
        let vertex_buffer = create_vertex_buffer(&device, INITIAL_VERTEX_CAPACITY);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            vertex_count: 0,
            size: (width, height),
            field,
        })
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reapply the current configuration (after `SurfaceError::Lost`/`Outdated`)
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Field to NDC mapping for the current viewport
    pub fn viewport(&self) -> Viewport {
        Viewport::fit(self.field, self.size)
    }

    /// Upload vertices and render
    pub fn render(&mut self, frame: &FrameBuilder) -> Result<(), wgpu::SurfaceError> {
        let viewport = self.viewport();
        let ndc_vertices: Vec<Vertex> = frame
            .vertices()
            .iter()
            .map(|v| {
                let ndc = viewport.field_to_ndc(Vec2::from(v.position));
                Vertex::new(ndc.x, ndc.y, v.color)
            })
            .collect();

        if ndc_vertices.len() > self.vertex_capacity {
            self.vertex_capacity = ndc_vertices.len().next_power_of_two();
            self.vertex_buffer = create_vertex_buffer(&self.device, self.vertex_capacity);
            log::debug!("Vertex buffer grown to {} vertices", self.vertex_capacity);
        }
        if !ndc_vertices.is_empty() {
            self.queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&ndc_vertices));
        }
        self.vertex_count = ndc_vertices.len() as u32;

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("pong_encoder"),
            });

        {
            let [r, g, b, a] = frame.clear_color.map(f64::from);
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("pong_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if self.vertex_count > 0 {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass.draw(0..self.vertex_count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Enough for the menu screen with room to spare
const INITIAL_VERTEX_CAPACITY: usize = 8192;

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("pong_vertices"),
        size: (capacity * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Flat-colored triangle list, alpha blended
fn create_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("pong_shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pong_pipeline_layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("pong_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

/// Letterboxed placement of the field inside a window, preserving aspect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Window pixels per field pixel
    pub scale: f32,
    /// Window-pixel offset of the field's top-left corner
    pub offset: Vec2,
    pub window: Vec2,
}

impl Viewport {
    pub fn fit(field: Field, (width, height): (u32, u32)) -> Self {
        let window = Vec2::new(width.max(1) as f32, height.max(1) as f32);
        let scale = (window.x / field.width).min(window.y / field.height);
        let used = Vec2::new(field.width, field.height) * scale;
        Self {
            scale,
            offset: (window - used) / 2.0,
            window,
        }
    }

    /// Field pixels (y down) to normalized device coordinates (y up)
    pub fn field_to_ndc(&self, p: Vec2) -> Vec2 {
        let px = self.offset + p * self.scale;
        Vec2::new(px.x / self.window.x * 2.0 - 1.0, 1.0 - px.y / self.window.y * 2.0)
    }

    /// Window pixels (e.g. a cursor position) to field pixels
    pub fn window_to_field(&self, p: Vec2) -> Vec2 {
        (p - self.offset) / self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_exact_fit_maps_corners() {
        let vp = Viewport::fit(Field::default(), (800, 600));
        assert_eq!(vp.scale, 1.0);
        assert!(approx(vp.field_to_ndc(Vec2::ZERO), Vec2::new(-1.0, 1.0)));
        assert!(approx(vp.field_to_ndc(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0)));
        assert!(approx(vp.field_to_ndc(Vec2::new(400.0, 300.0)), Vec2::ZERO));
    }

    #[test]
    fn test_wide_window_letterboxes() {
        let vp = Viewport::fit(Field::default(), (1600, 600));
        assert_eq!(vp.scale, 1.0);
        assert_eq!(vp.offset, Vec2::new(400.0, 0.0));
        assert!(approx(vp.field_to_ndc(Vec2::ZERO), Vec2::new(-0.5, 1.0)));
    }

    #[test]
    fn test_window_to_field_inverts() {
        let vp = Viewport::fit(Field::default(), (1200, 1200));
        let p = Vec2::new(123.0, 456.0);
        let window = vp.offset + p * vp.scale;
        assert!(approx(vp.window_to_field(window), p));
    }
}
