//! A drawable GPU mesh: vertex/index buffer pair plus draw metadata.
//!
//! Meshes are cheaply cloneable because the buffers are `Arc`-wrapped;
//! cloning a handle never copies GPU memory.  The last handle to drop
//! releases the buffers.

use std::sync::Arc;

use crucible_assets::MeshData;

use crate::geometry::{Vertex, VertexKind};
use crate::resources::buffer;

#[derive(Clone)]
pub struct Mesh {
    pub vertex_buffer: Arc<wgpu::Buffer>,
    pub index_buffer: Arc<wgpu::Buffer>,
    pub index_count: u32,
    /// Index format used when binding this mesh.
    pub index_format: wgpu::IndexFormat,
    /// Which vertex layout the buffer was built with.
    pub kind: VertexKind,
}

impl Mesh {
    /// Uploads decoded mesh data.  Indices are always `u32` on this path;
    /// the built-in primitives use `u16`.
    pub fn from_data(device: &wgpu::Device, label: &str, data: &MeshData) -> Self {
        let vertices: Vec<Vertex> = data
            .vertices
            .iter()
            .map(|v| Vertex {
                position: v.position,
                normal: v.normal,
                texcoord: v.texcoord,
            })
            .collect();

        Self {
            vertex_buffer: buffer::create_vertex(device, label, &vertices),
            index_buffer: buffer::create_index(device, label, &data.indices),
            index_count: data.indices.len() as u32,
            index_format: wgpu::IndexFormat::Uint32,
            kind: VertexKind::PosNormTex,
        }
    }

    /// Convenience constructor — unit cube centred at the origin.
    pub fn cube(device: &wgpu::Device) -> Self {
        super::primitives::cube(device)
    }

    /// Convenience constructor — fullscreen quad in NDC.
    pub fn quad(device: &wgpu::Device) -> Self {
        super::primitives::quad(device)
    }
}
