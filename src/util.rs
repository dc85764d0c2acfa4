use glam::Mat4;
use wgpu::{util::DeviceExt, Buffer, Device};

pub fn mat4_identity(device: &Device) -> Buffer {
    let mx = Mat4::IDENTITY;
    let mx_ref: &[f32; 16] = mx.as_ref();
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Projection Matrix"),
        contents: bytemuck::cast_slice(mx_ref),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}
