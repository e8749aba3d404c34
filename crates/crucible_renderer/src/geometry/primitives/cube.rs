//! Unit cube primitive centred at the origin.
//!
//! 24 unique vertices (4 per face, so each face gets a flat normal) and 36
//! indices.  Faces are wound counter-clockwise seen from outside, matching
//! the world pipeline's `FrontFace::Ccw` + back-face culling.

use crate::geometry::{Mesh, Vertex, VertexKind};
use crate::resources::buffer;

pub fn cube(device: &wgpu::Device) -> Mesh {
    let mut vertices: Vec<Vertex> = Vec::with_capacity(24);
    let mut indices: Vec<u16> = Vec::with_capacity(36);

    // corners: bottom-left, bottom-right, top-right, top-left from outside
    let mut face = |normal: [f32; 3], corners: [[f32; 3]; 4]| {
        let base = vertices.len() as u16;
        let uvs = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];
        for (position, texcoord) in corners.into_iter().zip(uvs) {
            vertices.push(Vertex {
                position,
                normal,
                texcoord,
            });
        }
        indices.extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    };

    #[rustfmt::skip]
    {
        // front  (z+)
        face([0.0, 0.0, 1.0],  [[-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0], [-1.0,  1.0,  1.0]]);
        // back   (z-)
        face([0.0, 0.0, -1.0], [[ 1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0,  1.0, -1.0], [ 1.0,  1.0, -1.0]]);
        // right  (x+)
        face([1.0, 0.0, 0.0],  [[ 1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0], [ 1.0,  1.0,  1.0]]);
        // left   (x-)
        face([-1.0, 0.0, 0.0], [[-1.0, -1.0, -1.0], [-1.0, -1.0,  1.0], [-1.0,  1.0,  1.0], [-1.0,  1.0, -1.0]]);
        // top    (y+)
        face([0.0, 1.0, 0.0],  [[-1.0,  1.0,  1.0], [ 1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0], [-1.0,  1.0, -1.0]]);
        // bottom (y-)
        face([0.0, -1.0, 0.0], [[-1.0, -1.0, -1.0], [ 1.0, -1.0, -1.0], [ 1.0, -1.0,  1.0], [-1.0, -1.0,  1.0]]);
    };

    Mesh {
        vertex_buffer: buffer::create_vertex(device, "Cube VB", &vertices),
        index_buffer: buffer::create_index(device, "Cube IB", &indices),
        index_count: indices.len() as u32,
        index_format: wgpu::IndexFormat::Uint16,
        kind: VertexKind::PosNormTex,
    }
}
