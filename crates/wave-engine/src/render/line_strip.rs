use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::geometry::Geometry;
use crate::render::{BlendMode, RenderCtx, RenderTarget, ViewportRegion};
use crate::sequence::{DrawList, Primitive};

/// Line-strip renderer.
///
/// Each draw command gets its own slot in a dynamic-offset uniform buffer
/// holding its transform. Geometry tables are uploaded once and reused.
#[derive(Default)]
pub struct LineStripRenderer {
    pipeline_key: Option<PipelineKey>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    transform_ubo: Option<wgpu::Buffer>,
    transform_capacity: usize,
    transform_stride: u64,

    meshes: Vec<GpuMesh>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct PipelineKey {
    format: wgpu::TextureFormat,
    sample_count: u32,
    blend: BlendMode,
}

struct GpuMesh {
    name: &'static str,
    positions: wgpu::Buffer,
    colors: wgpu::Buffer,
    vertex_count: u32,
}

impl LineStripRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once a pipeline exists.
    pub fn is_initialized(&self) -> bool {
        self.pipeline.is_some()
    }

    /// Creates (or recreates) the pipeline for the current target.
    ///
    /// Cheap when nothing changed; the pipeline is rebuilt only when the
    /// target format, sample count or blend mode differ.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, blend: BlendMode) {
        let key = PipelineKey {
            format: ctx.surface_format,
            sample_count: ctx.sample_count,
            blend,
        };
        if self.pipeline_key == Some(key) && self.pipeline.is_some() {
            return;
        }

        log::debug!(
            "LineStripRenderer: building pipeline ({:?}, {}x, {:?})",
            key.format,
            key.sample_count,
            key.blend
        );

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("wave line strip shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/line_strip.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("wave line strip bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: true,
                            min_binding_size: wgpu::BufferSize::new(TRANSFORM_SIZE),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("wave line strip pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("wave line strip pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[position_layout(), color_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: key.format,
                    blend: key.blend.state(),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: key.sample_count,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },

            multiview_mask: None,
            cache: None,
        });

        self.pipeline_key = Some(key);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        // The bind group references the old layout.
        self.bind_group = None;
        self.transform_ubo = None;
        self.transform_capacity = 0;
    }

    /// Records `draw_list` into `target`, restricted to `region`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &DrawList,
        region: ViewportRegion,
        blend: BlendMode,
    ) {
        if draw_list.is_empty() {
            return;
        }
        let Some((vx, vy, vw, vh)) = region.resolve(ctx.viewport) else {
            return;
        };

        self.prepare(ctx, blend);
        self.ensure_transforms(ctx, draw_list.len());
        for cmd in draw_list {
            self.ensure_mesh(ctx, cmd.geometry);
        }

        let Some(ubo) = self.transform_ubo.as_ref() else { return };
        for (i, cmd) in draw_list.iter().enumerate() {
            let u = TransformUniform {
                matrix: cmd.transform.to_cols_array_2d(),
            };
            ctx.queue
                .write_buffer(ubo, i as u64 * self.transform_stride, bytemuck::bytes_of(&u));
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let attachment = target.load_attachment();
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("wave line strip pass"),
            color_attachments: &[Some(attachment)],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_viewport(vx, vy, vw, vh, 0.0, 1.0);

        for (i, cmd) in draw_list.iter().enumerate() {
            debug_assert_eq!(cmd.primitive, Primitive::LineStrip);
            let Some(mesh) = self.meshes.iter().find(|m| m.name == cmd.geometry.name) else {
                continue;
            };

            let offset = (i as u64 * self.transform_stride) as wgpu::DynamicOffset;
            rpass.set_bind_group(0, bind_group, &[offset]);
            rpass.set_vertex_buffer(0, mesh.positions.slice(..));
            rpass.set_vertex_buffer(1, mesh.colors.slice(..));
            rpass.draw(0..mesh.vertex_count, 0..1);
        }
    }

    fn ensure_transforms(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.transform_capacity && self.bind_group.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let align = u64::from(ctx.device.limits().min_uniform_buffer_offset_alignment).max(1);
        let stride = TRANSFORM_SIZE.div_ceil(align) * align;
        let capacity = required.next_power_of_two().max(4);

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("wave line strip transform ubo"),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("wave line strip bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &ubo,
                    offset: 0,
                    size: wgpu::BufferSize::new(TRANSFORM_SIZE),
                }),
            }],
        });

        self.transform_ubo = Some(ubo);
        self.bind_group = Some(bind_group);
        self.transform_capacity = capacity;
        self.transform_stride = stride;
    }

    fn ensure_mesh(&mut self, ctx: &RenderCtx<'_>, geometry: &'static Geometry) {
        if self.meshes.iter().any(|m| m.name == geometry.name) {
            return;
        }

        let positions = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("wave line strip positions"),
            contents: bytemuck::cast_slice(geometry.positions),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let colors = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("wave line strip colors"),
            contents: bytemuck::cast_slice(geometry.colors),
            usage: wgpu::BufferUsages::VERTEX,
        });

        self.meshes.push(GpuMesh {
            name: geometry.name,
            positions,
            colors,
            vertex_count: geometry.vertex_count(),
        });
    }
}

const TRANSFORM_SIZE: u64 = std::mem::size_of::<TransformUniform>() as u64;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct TransformUniform {
    matrix: [[f32; 4]; 4],
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const COLOR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];

fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 2]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRS,
    }
}

fn color_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &COLOR_ATTRS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_uniform_is_one_mat4() {
        assert_eq!(TRANSFORM_SIZE, 64);
    }

    #[test]
    fn vertex_strides_match_geometry_tables() {
        assert_eq!(position_layout().array_stride, 8);
        assert_eq!(color_layout().array_stride, 12);
    }

    #[test]
    fn new_renderer_has_no_gpu_state() {
        let r = LineStripRenderer::new();
        assert!(!r.is_initialized());
        assert!(r.meshes.is_empty());
    }
}
