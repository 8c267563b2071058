use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use super::{RenderCtx, RenderTarget};

/// One vertex of the square: clip-space position + per-vertex color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct SquareVertex {
    position: [f32; 3],
    color: [f32; 3],
}

impl SquareVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SquareVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const SQUARE_VERTICES: [SquareVertex; 4] = [
    SquareVertex { position: [-0.5, -0.5, 0.0], color: [0.0, 0.0, 1.0] }, // bottom-left, blue
    SquareVertex { position: [0.5, -0.5, 0.0], color: [1.0, 0.0, 0.0] },  // bottom-right, red
    SquareVertex { position: [-0.5, 0.5, 0.0], color: [0.0, 1.0, 0.0] },  // top-left, green
    SquareVertex { position: [0.5, 0.5, 0.0], color: [0.0, 0.0, 1.0] },   // top-right, blue
];

// Two counter-clockwise triangles covering the square.
const SQUARE_INDICES: [u16; 6] = [2, 0, 1, 3, 2, 1];

/// Renderer for one static vertex-colored square.
///
/// All GPU resources (pipeline, vertex buffer, index buffer) are created once
/// in [`new`](Self::new) and live as long as the renderer. Each
/// [`render`](Self::render) call records one indexed draw of 6 indices.
pub struct SquareRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buf: wgpu::Buffer,
    index_buf: wgpu::Buffer,
}

impl SquareRenderer {
    /// Uploads the fixed vertex/index data and builds the render pipeline.
    ///
    /// Shader compilation or pipeline creation failure is fatal: the error is
    /// captured via a wgpu validation scope and returned with the driver's
    /// diagnostic. There is no retry and no fallback; callers are expected to
    /// terminate.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Result<Self> {
        let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("facet square shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/square.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("facet square pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("facet square pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[SquareVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
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

        let vertex_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("facet square vbo"),
            contents: bytemuck::cast_slice(&SQUARE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("facet square ibo"),
            contents: bytemuck::cast_slice(&SQUARE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        if let Some(err) = pollster::block_on(error_scope.pop()) {
            anyhow::bail!("square pipeline rejected by the GPU: {err}");
        }

        Ok(Self {
            pipeline,
            vertex_buf,
            index_buf,
        })
    }

    /// Records one frame: binds the pipeline and buffers, applies the current
    /// viewport, and issues the indexed draw.
    ///
    /// The clear is recorded by the runtime before this pass. Bindings are
    /// scoped to the pass and released when it ends.
    pub fn render(&self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        if !ctx.viewport.is_valid() {
            return;
        }

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("facet square pass"),
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

        rpass.set_viewport(0.0, 0.0, ctx.viewport.width, ctx.viewport.height, 0.0, 1.0);
        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.vertex_buf.slice(..));
        rpass.set_index_buffer(self.index_buf.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..SQUARE_INDICES.len() as u32, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── geometry constants ────────────────────────────────────────────────

    #[test]
    fn vertex_is_tightly_packed() {
        // Two vec3<f32> attributes, no padding.
        assert_eq!(std::mem::size_of::<SquareVertex>(), 24);
    }

    #[test]
    fn six_indices_describe_two_triangles() {
        assert_eq!(SQUARE_INDICES.len(), 6);
        assert_eq!(SQUARE_VERTICES.len(), 4);
    }

    #[test]
    fn indices_are_in_bounds() {
        for &i in &SQUARE_INDICES {
            assert!((i as usize) < SQUARE_VERTICES.len(), "index {i} out of bounds");
        }
    }

    #[test]
    fn every_vertex_is_referenced() {
        for v in 0..SQUARE_VERTICES.len() as u16 {
            assert!(SQUARE_INDICES.contains(&v), "vertex {v} is unused");
        }
    }

    #[test]
    fn both_triangles_wind_counter_clockwise() {
        // Signed area in clip space (y up); positive means CCW.
        for tri in SQUARE_INDICES.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| SQUARE_VERTICES[i as usize].position);
            let cross = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
            assert!(cross > 0.0, "triangle {tri:?} is not CCW");
        }
    }

    #[test]
    fn square_is_centered_half_extent() {
        for v in &SQUARE_VERTICES {
            assert_eq!(v.position[0].abs(), 0.5);
            assert_eq!(v.position[1].abs(), 0.5);
            assert_eq!(v.position[2], 0.0);
        }
    }

    // ── colors ────────────────────────────────────────────────────────────

    #[test]
    fn corner_colors_match_layout() {
        let color_at = |x: f32, y: f32| {
            SQUARE_VERTICES
                .iter()
                .find(|v| v.position[0] == x && v.position[1] == y)
                .map(|v| v.color)
                .unwrap()
        };

        assert_eq!(color_at(-0.5, -0.5), [0.0, 0.0, 1.0]); // bottom-left blue
        assert_eq!(color_at(0.5, -0.5), [1.0, 0.0, 0.0]); // bottom-right red
        assert_eq!(color_at(-0.5, 0.5), [0.0, 1.0, 0.0]); // top-left green
        assert_eq!(color_at(0.5, 0.5), [0.0, 0.0, 1.0]); // top-right blue
    }

    // ── shader source ─────────────────────────────────────────────────────

    #[test]
    fn shader_declares_both_entry_points() {
        let src = include_str!("shaders/square.wgsl");
        assert!(src.contains("fn vs_main"));
        assert!(src.contains("fn fs_main"));
    }
}
