use std::borrow::Cow;
use std::f32::consts::TAU;

use glam::{Mat4, Vec2};
use wgpu::{
    util::DeviceExt, BindGroupLayout, Buffer, Device, Queue, RenderPass, RenderPipeline,
    ShaderModule, TextureFormat,
};

use crate::animation::Animation;
use crate::indicator::PhaseIndicator;

/// Plot bounds, matching the original diagram.
pub const X_MIN: f32 = -2.;
pub const X_MAX: f32 = 20.;
pub const Y_MIN: f32 = -2.;
pub const Y_MAX: f32 = 2.;

const CIRCLE_SEGMENTS: usize = 64;
const DOT_SEGMENTS: usize = 12;

// Dodger blue, like the source diagram.
const INDICATOR_COLOR: [f32; 3] = [0.118, 0.565, 1.];
const GRID_COLOR: [f32; 3] = [0.85, 0.85, 0.85];

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 2],
    color: [f32; 3],
}

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x3];

fn vertex(position: Vec2, color: [f32; 3]) -> Vertex {
    Vertex {
        position: position.to_array(),
        color,
    }
}

/// Orthographic projection over the plot bounds. The x range is fixed and the
/// y range follows the window aspect so circles stay round.
pub fn scene_projection(width: u32, height: u32) -> Mat4 {
    let half_height = (X_MAX - X_MIN) / 2. * height as f32 / width.max(1) as f32;
    Mat4::orthographic_rh(X_MIN, X_MAX, -half_height, half_height, -1., 1.)
}

fn grid_lines(out: &mut Vec<Vertex>) {
    for x in X_MIN as i32..=X_MAX as i32 {
        out.push(vertex(Vec2::new(x as f32, Y_MIN), GRID_COLOR));
        out.push(vertex(Vec2::new(x as f32, Y_MAX), GRID_COLOR));
    }
    for y in Y_MIN as i32..=Y_MAX as i32 {
        out.push(vertex(Vec2::new(X_MIN, y as f32), GRID_COLOR));
        out.push(vertex(Vec2::new(X_MAX, y as f32), GRID_COLOR));
    }
}

fn rim_point(center: Vec2, radius: f32, k: usize) -> Vec2 {
    let angle = k as f32 / CIRCLE_SEGMENTS as f32 * TAU;
    center + radius * Vec2::new(angle.cos(), angle.sin())
}

fn circle_outline(center: Vec2, radius: f32, out: &mut Vec<Vertex>) {
    // Alternate segments are skipped so the stroke reads as dotted.
    for k in (0..CIRCLE_SEGMENTS).step_by(2) {
        out.push(vertex(rim_point(center, radius, k), INDICATOR_COLOR));
        out.push(vertex(rim_point(center, radius, k + 1), INDICATOR_COLOR));
    }
}

fn phase_line(indicator: &PhaseIndicator, out: &mut Vec<Vertex>) {
    out.push(vertex(indicator.center, INDICATOR_COLOR));
    out.push(vertex(indicator.phase_point(), INDICATOR_COLOR));
}

fn filled_dot(center: Vec2, radius: f32, out: &mut Vec<Vertex>) {
    for k in 0..DOT_SEGMENTS {
        let a0 = k as f32 / DOT_SEGMENTS as f32 * TAU;
        let a1 = (k + 1) as f32 / DOT_SEGMENTS as f32 * TAU;
        out.push(vertex(center, INDICATOR_COLOR));
        out.push(vertex(
            center + radius * Vec2::new(a0.cos(), a0.sin()),
            INDICATOR_COLOR,
        ));
        out.push(vertex(
            center + radius * Vec2::new(a1.cos(), a1.sin()),
            INDICATOR_COLOR,
        ));
    }
}

/// Tessellate the whole scene: the grid, then per indicator its dotted
/// outline, phase line and rim dot. Vertex counts only depend on the
/// indicator count, so buffers sized at startup never grow.
fn scene_vertices(animation: &Animation) -> (Vec<Vertex>, Vec<Vertex>) {
    let mut lines = Vec::new();
    let mut dots = Vec::new();

    grid_lines(&mut lines);
    for indicator in animation.indicators().iter() {
        circle_outline(indicator.center, indicator.radius, &mut lines);
        phase_line(indicator, &mut lines);
        filled_dot(indicator.phase_point(), indicator.radius / 12., &mut dots);
    }

    (lines, dots)
}

fn pipeline(
    device: &Device,
    bind_group_layout: &BindGroupLayout,
    shader: &ShaderModule,
    swapchain_format: TextureFormat,
    topology: wgpu::PrimitiveTopology,
) -> RenderPipeline {
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: None,
        bind_group_layouts: &[bind_group_layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: None,
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: "vs_main",
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &VERTEX_ATTRIBUTES,
            }],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: "fs_main",
            targets: &[Some(swapchain_format.into())],
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            ..wgpu::PrimitiveState::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
    })
}

pub struct WaveRenderer {
    pub line_pipeline: RenderPipeline,
    pub dot_pipeline: RenderPipeline,
    line_buffer: Buffer,
    dot_buffer: Buffer,
    line_count: u32,
    dot_count: u32,
}

impl WaveRenderer {
    pub fn new(
        device: &Device,
        bind_group_layout: &BindGroupLayout,
        swapchain_format: TextureFormat,
        animation: &Animation,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: None,
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(include_str!("shaders/wave.wgsl"))),
        });

        let (lines, dots) = scene_vertices(animation);

        let line_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Wave Lines"),
            contents: bytemuck::cast_slice(&lines),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let dot_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Wave Dots"),
            contents: bytemuck::cast_slice(&dots),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            line_pipeline: pipeline(
                device,
                bind_group_layout,
                &shader,
                swapchain_format,
                wgpu::PrimitiveTopology::LineList,
            ),
            dot_pipeline: pipeline(
                device,
                bind_group_layout,
                &shader,
                swapchain_format,
                wgpu::PrimitiveTopology::TriangleList,
            ),
            line_buffer,
            dot_buffer,
            line_count: lines.len() as u32,
            dot_count: dots.len() as u32,
        }
    }

    pub fn update(&mut self, queue: &Queue, animation: &Animation) {
        let (lines, dots) = scene_vertices(animation);
        debug_assert_eq!(lines.len() as u32, self.line_count);
        debug_assert_eq!(dots.len() as u32, self.dot_count);
        queue.write_buffer(&self.line_buffer, 0, bytemuck::cast_slice(&lines));
        queue.write_buffer(&self.dot_buffer, 0, bytemuck::cast_slice(&dots));
    }

    pub fn draw<'a>(&'a self, rpass: &mut RenderPass<'a>) {
        rpass.set_pipeline(&self.line_pipeline);
        rpass.set_vertex_buffer(0, self.line_buffer.slice(..));
        rpass.draw(0..self.line_count, 0..1);

        rpass.set_pipeline(&self.dot_pipeline);
        rpass.set_vertex_buffer(0, self.dot_buffer.slice(..));
        rpass.draw(0..self.dot_count, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Params;
    use approx::assert_relative_eq;

    const GRID_VERTICES: usize = (23 + 5) * 2;
    const LINE_VERTICES_PER_INDICATOR: usize = CIRCLE_SEGMENTS + 2;
    const DOT_VERTICES_PER_INDICATOR: usize = DOT_SEGMENTS * 3;

    #[test]
    fn vertex_counts_are_fixed_by_indicator_count() {
        let animation = Animation::new(2, Params::default());
        let (lines, dots) = scene_vertices(&animation);
        assert_eq!(lines.len(), GRID_VERTICES + 2 * LINE_VERTICES_PER_INDICATOR);
        assert_eq!(dots.len(), 2 * DOT_VERTICES_PER_INDICATOR);
    }

    #[test]
    fn vertex_counts_survive_ticks_and_parameter_changes() {
        let mut animation = Animation::new(5, Params::default());
        let (lines, dots) = scene_vertices(&animation);
        animation.switch();
        animation.tick();
        animation.set_spacing(2.);
        animation.set_phase_step(45.);
        let (lines2, dots2) = scene_vertices(&animation);
        assert_eq!(lines.len(), lines2.len());
        assert_eq!(dots.len(), dots2.len());
    }

    #[test]
    fn phase_line_runs_from_center_to_phase_point() {
        let indicator = PhaseIndicator::new(Vec2::new(2., 0.), 1., 0.);
        let mut out = Vec::new();
        phase_line(&indicator, &mut out);
        assert_eq!(out.len(), 2);
        assert_relative_eq!(out[0].position[0], 2., epsilon = 1e-6);
        assert_relative_eq!(out[1].position[0], 3., epsilon = 1e-6);
        assert_relative_eq!(out[1].position[1], 0., epsilon = 1e-6);
    }

    #[test]
    fn rim_points_sit_on_the_circle() {
        let center = Vec2::new(1., -1.);
        for k in 0..CIRCLE_SEGMENTS {
            let p = rim_point(center, 1., k);
            assert_relative_eq!((p - center).length(), 1., epsilon = 1e-5);
        }
    }

    #[test]
    fn projection_keeps_the_x_range() {
        let projection = scene_projection(1100, 400);
        let left = projection.project_point3(glam::Vec3::new(X_MIN, 0., 0.));
        let right = projection.project_point3(glam::Vec3::new(X_MAX, 0., 0.));
        assert_relative_eq!(left.x, -1., epsilon = 1e-5);
        assert_relative_eq!(right.x, 1., epsilon = 1e-5);
    }
}
