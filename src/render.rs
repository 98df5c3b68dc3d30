use crate::constants::{CLEAR_RGB, PARTICLE_RGBA};
use artifact_core::{Camera, GeometryLibrary, ParticleField, Renderer, SceneView, FOG_DENSITY};
use web_sys as web;

mod helpers;
mod scene;
mod targets;

use helpers::GpuVertices;
use scene::{create_instance_buffer, create_scene_resources, Globals, InstanceRaw, SceneResources};
use targets::DepthTarget;

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    scene: SceneResources,
    depth: DepthTarget,
    // Indexed by `GeometryHandle`
    meshes: Vec<GpuVertices>,
    particles: GpuVertices,
    instances: wgpu::Buffer,
    instance_capacity: usize,
    instance_scratch: Vec<InstanceRaw>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        geometry: &GeometryLibrary,
        particles: &ParticleField,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no texture formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let scene = create_scene_resources(&device, format);
        let depth = DepthTarget::new(&device, width, height);

        let meshes = geometry
            .iter()
            .map(|(handle, mesh)| {
                helpers::upload_positions(
                    &device,
                    &format!("mesh_{}", handle.0),
                    &mesh.wireframe_vertices(),
                )
            })
            .collect::<Vec<_>>();
        let particles = helpers::upload_positions(&device, "particles", &particles.positions);
        log::info!(
            "[gpu] ready {}x{} {:?}, {} meshes, {} particles",
            width,
            height,
            format,
            meshes.len(),
            particles.count
        );

        let instance_capacity = 8;
        let instances = create_instance_buffer(&device, instance_capacity);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            depth,
            meshes,
            particles,
            instances,
            instance_capacity,
            instance_scratch: Vec::with_capacity(instance_capacity),
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_RGB[0] as f64,
                g: CLEAR_RGB[1] as f64,
                b: CLEAR_RGB[2] as f64,
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
            log::debug!("[gpu] resized to {}x{}", width, height);
        }
    }

    fn write_instances(&mut self, scene: &SceneView<'_>) {
        let registry = scene.registry;
        self.instance_scratch.clear();
        self.instance_scratch
            .extend(registry.all().iter().map(|o| InstanceRaw {
                model: registry.world_matrix(o).to_cols_array_2d(),
                color: o.color,
            }));
        self.instance_scratch.push(InstanceRaw {
            model: scene.particles.matrix().to_cols_array_2d(),
            color: PARTICLE_RGBA,
        });
        if self.instance_scratch.len() > self.instance_capacity {
            self.instance_capacity = self.instance_scratch.len().next_power_of_two();
            self.instances = create_instance_buffer(&self.device, self.instance_capacity);
        }
        self.queue.write_buffer(
            &self.instances,
            0,
            bytemuck::cast_slice(&self.instance_scratch),
        );
    }
}

impl Renderer for GpuState {
    type Error = wgpu::SurfaceError;

    fn draw(&mut self, scene: &SceneView<'_>, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        let globals = Globals {
            view_proj: camera.view_projection().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            fog: [FOG_DENSITY, CLEAR_RGB[0], CLEAR_RGB[1], CLEAR_RGB[2]],
        };
        self.queue
            .write_buffer(&self.scene.globals_buffer, 0, bytemuck::bytes_of(&globals));
        self.write_instances(scene);

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                self.surface.configure(&self.device, &self.config);
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene.bind_group, &[]);
            rpass.set_vertex_buffer(1, self.instances.slice(..));

            rpass.set_pipeline(&self.scene.line_pipeline);
            for (i, object) in scene.registry.all().iter().enumerate() {
                let Some(mesh) = self.meshes.get(object.geometry.0) else {
                    continue;
                };
                let inst = i as u32;
                rpass.set_vertex_buffer(0, mesh.buffer.slice(..));
                rpass.draw(0..mesh.count, inst..inst + 1);
            }

            if self.particles.count > 0 {
                let inst = scene.registry.len() as u32;
                rpass.set_pipeline(&self.scene.point_pipeline);
                rpass.set_vertex_buffer(0, self.particles.buffer.slice(..));
                rpass.draw(0..self.particles.count, inst..inst + 1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
