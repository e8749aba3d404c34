//! Thin wrappers over `wgpu::Buffer` creation that enforce the usage
//! combinations the renderer relies on and remove boilerplate elsewhere.

use std::sync::Arc;
use wgpu::util::DeviceExt;

/// Creates a uniform buffer initialised with `data`, `Arc`-wrapped so bind
/// groups and CPU-side owners can share it.  `UNIFORM | COPY_DST` is the
/// right combination for a uniform rewritten every frame.
pub fn create_uniform<T: bytemuck::Pod>(
    device: &wgpu::Device,
    label: &str,
    data: &T,
) -> Arc<wgpu::Buffer> {
    Arc::new(
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(data),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        }),
    )
}

/// Creates an immutable vertex buffer from a slice of `Pod` vertices.
pub fn create_vertex<T: bytemuck::Pod>(
    device: &wgpu::Device,
    label: &str,
    data: &[T],
) -> Arc<wgpu::Buffer> {
    Arc::new(
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(data),
            usage: wgpu::BufferUsages::VERTEX,
        }),
    )
}

/// Creates an immutable index buffer from a slice of `u16` or `u32` indices.
pub fn create_index<T: bytemuck::Pod>(
    device: &wgpu::Device,
    label: &str,
    data: &[T],
) -> Arc<wgpu::Buffer> {
    Arc::new(
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(data),
            usage: wgpu::BufferUsages::INDEX,
        }),
    )
}

/// Writes `data` to an existing uniform buffer at offset zero.
pub fn update_uniform<T: bytemuck::Pod>(queue: &wgpu::Queue, buffer: &wgpu::Buffer, data: &T) {
    queue.write_buffer(buffer, 0, bytemuck::bytes_of(data));
}
