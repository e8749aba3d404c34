//! Fullscreen quad in normalized device coordinates.
//!
//! The composite pass draws this with an identity vertex transform, so the
//! four corners land exactly on the target's corners.  Texcoords flip V so
//! row 0 of the sampled texture appears at the top of the screen.

use crate::geometry::{Mesh, Vertex, VertexKind};
use crate::resources::buffer;

pub fn quad(device: &wgpu::Device) -> Mesh {
    let v = |position: [f32; 3], texcoord: [f32; 2]| Vertex {
        position,
        normal: [0.0, 0.0, 1.0],
        texcoord,
    };

    let vertices: &[Vertex] = &[
        v([-1.0, -1.0, 0.0], [0.0, 1.0]),
        v([1.0, -1.0, 0.0], [1.0, 1.0]),
        v([1.0, 1.0, 0.0], [1.0, 0.0]),
        v([-1.0, 1.0, 0.0], [0.0, 0.0]),
    ];
    let indices: &[u16] = &[0, 1, 2, 0, 2, 3];

    Mesh {
        vertex_buffer: buffer::create_vertex(device, "Quad VB", vertices),
        index_buffer: buffer::create_index(device, "Quad IB", indices),
        index_count: indices.len() as u32,
        index_format: wgpu::IndexFormat::Uint16,
        kind: VertexKind::PosNormTex,
    }
}
