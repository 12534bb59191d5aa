use std::time::Instant;

use glam::Quat;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use field_core::{
    Camera, FieldEngine, PartColor, PointerTracker, Settings, CLUSTER_COUNT_MAX, SATELLITE_COUNT,
};

// Billboard quad widths per part, multiplied by the cluster's animated scale.
const KNOT_SIZE: f32 = 2.2;
const RING_SIZE: f32 = 4.4;
const SHELL_SIZE: f32 = 4.8;
const SATELLITE_SIZE: f32 = 0.3;

const SHELL_ALPHA: f32 = 0.22;
const RING_ALPHA: f32 = 0.9;

// Scene background (#0b0f1a)
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.043,
    g: 0.059,
    b: 0.102,
    a: 1.0,
};

const MAX_INSTANCES: usize = CLUSTER_COUNT_MAX * (3 + SATELLITE_COUNT);

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceData {
    pos: [f32; 3],
    scale: f32,
    color: [f32; 4],
    rot: f32,
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        use wgpu::util::DeviceExt;

        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cluster shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("camera uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Unit quad as two triangles; corners land at +/-0.5 so the
        // instance scale is the full billboard width.
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("billboard quad"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("part instances"),
            size: (std::mem::size_of::<InstanceData>() * MAX_INSTANCES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("camera bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("field pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffers = [
            // per-vertex quad corner
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // per-instance billboard data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<InstanceData>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 3,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 32,
                        shader_location: 4,
                    },
                ],
            },
        ];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("field pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            quad_vb,
            instance_vb,
            bind_group,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(&mut self, camera: &Camera, instances: &[InstanceData]) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: camera.view_proj().to_cols_array_2d(),
            }),
        );
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(instances));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("field pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..6, 0..instances.len() as u32);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn part_rgba(part: &PartColor, alpha: f32) -> [f32; 4] {
    let c = part.color + part.emissive;
    [c.x, c.y, c.z, alpha]
}

/// Flatten the engine's per-cluster visuals into draw instances. Shell and
/// ring go first so the brighter parts blend on top.
fn build_instances(engine: &FieldEngine, out: &mut Vec<InstanceData>) {
    out.clear();
    for cluster in engine.clusters() {
        let v = &cluster.visual;
        // The shell is a flat wireframe look: color only, no emissive boost.
        out.push(InstanceData {
            pos: v.position.to_array(),
            scale: SHELL_SIZE * v.scale,
            color: [v.shell.color.x, v.shell.color.y, v.shell.color.z, SHELL_ALPHA],
            rot: v.shell_yaw,
        });
        out.push(InstanceData {
            pos: v.position.to_array(),
            scale: RING_SIZE * v.scale,
            color: part_rgba(&v.ring, RING_ALPHA),
            rot: v.ring_roll,
        });
        out.push(InstanceData {
            pos: v.position.to_array(),
            scale: KNOT_SIZE * v.scale,
            color: part_rgba(&v.knot, 1.0),
            rot: v.knot_roll,
        });
        let yaw = Quat::from_rotation_y(v.group_yaw);
        for local in &v.satellite_positions {
            let world = v.position + yaw * (*local * v.scale);
            out.push(InstanceData {
                pos: world.to_array(),
                scale: SATELLITE_SIZE * v.scale,
                color: part_rgba(&v.satellites, 1.0),
                rot: 0.0,
            });
        }
    }
}

fn handle_key(engine: &mut FieldEngine, key: &Key) {
    match key {
        Key::Named(NamedKey::Space) => {
            engine.randomize();
            log::info!(
                "randomized: {} clusters, palette {}",
                engine.settings().cluster_count(),
                engine.settings().palette().as_str()
            );
        }
        Key::Character(c) => {
            match c.as_str() {
                "[" => {
                    let n = engine.settings().cluster_count().saturating_sub(10);
                    engine.set_cluster_count(n);
                }
                "]" => {
                    let n = engine.settings().cluster_count() + 10;
                    engine.set_cluster_count(n);
                }
                "c" | "C" => {
                    let d = if c == "C" { 0.05 } else { -0.05 };
                    let v = engine.settings().color_speed() + d;
                    engine.settings_mut().set_color_speed(v);
                }
                "s" | "S" => {
                    let d = if c == "S" { 0.05 } else { -0.05 };
                    let v = engine.settings().scale_min() + d;
                    engine.settings_mut().set_scale_min(v);
                }
                "x" | "X" => {
                    let d = if c == "X" { 0.05 } else { -0.05 };
                    let v = engine.settings().scale_max() + d;
                    engine.settings_mut().set_scale_max(v);
                }
                "o" | "O" => {
                    let d = if c == "O" { 0.05 } else { -0.05 };
                    let v = engine.settings().scale_speed() + d;
                    engine.settings_mut().set_scale_speed(v);
                }
                "r" | "R" => {
                    let d = if c == "R" { 0.05 } else { -0.05 };
                    let v = engine.settings().rotation_speed() + d;
                    engine.settings_mut().set_rotation_speed(v);
                }
                "a" => {
                    let enabled = !engine.settings().avoid_enabled();
                    engine.settings_mut().set_avoid_enabled(enabled);
                    log::info!("avoid cursor: {}", if enabled { "on" } else { "off" });
                }
                "p" => {
                    let next = engine.settings().palette().next();
                    engine.settings_mut().set_palette(next);
                    log::info!("palette: {}", next.as_str());
                }
                _ => return,
            }
            log::debug!("settings: {:?}", engine.settings());
        }
        _ => {}
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "controls: [ ] clusters, c/C color speed, s/S scale min, x/X scale max, \
         o/O scale speed, r/R rotation, a avoid toggle, p palette, space randomize, \
         click to blast"
    );

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Cluster Field")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;

    let size = window.inner_size();
    let mut camera = Camera::field_default(size.width.max(1) as f32 / size.height.max(1) as f32);
    let mut tracker = PointerTracker::default();
    let mut engine = FieldEngine::new(Settings::default(), rand::random());
    let mut instances: Vec<InstanceData> = Vec::with_capacity(MAX_INSTANCES);

    let start = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(new_size),
            ..
        } => {
            state.resize(new_size);
            camera.aspect = new_size.width.max(1) as f32 / new_size.height.max(1) as f32;
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => {
            let w = state.config.width.max(1) as f32;
            let h = state.config.height.max(1) as f32;
            tracker.set_ndc(
                (position.x as f32 / w) * 2.0 - 1.0,
                1.0 - (position.y as f32 / h) * 2.0,
            );
        }
        Event::WindowEvent {
            event:
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                },
            ..
        } => {
            tracker.update(&camera);
            engine.blast(tracker.world_point());
        }
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key,
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                },
            ..
        } => handle_key(&mut engine, &logical_key),
        Event::AboutToWait => {
            let elapsed = start.elapsed().as_secs_f32();
            tracker.update(&camera);
            engine.update(elapsed, tracker.world_point());
            build_instances(&engine, &mut instances);
            match state.render(&camera, &instances) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("surface error: {e:?}"),
            }
        }
        _ => {}
    })?;

    Ok(())
}
