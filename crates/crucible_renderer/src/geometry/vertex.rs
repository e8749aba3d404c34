//! GPU vertex type used by both the world and composite pipelines.
//!
//! Attribute locations are a fixed contract with the WGSL sources in
//! `assets/shaders/`: location 0 position, location 1 normal, location 2
//! texcoord.  `bytemuck` reinterprets vertex slices as bytes for upload, so
//! the struct is `repr(C)` with no implicit padding.

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Object-space normal.
    pub normal: [f32; 3],
    /// Texture coordinate, (0,0) = top-left of the image.
    pub texcoord: [f32; 2],
}

impl Vertex {
    /// Returns the `VertexBufferLayout` matching this struct's memory layout.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
            0 => Float32x3, // position
            1 => Float32x3, // normal
            2 => Float32x2, // texcoord
        ];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Tag describing which attribute set a mesh's vertex buffer was built with.
///
/// Every mesh carries its kind; a pipeline compiled for one kind can only
/// draw meshes of that kind.  Currently a single layout exists.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VertexKind {
    /// Position + normal + texcoord, 32-byte stride.
    PosNormTex,
}

impl VertexKind {
    pub fn layout(self) -> wgpu::VertexBufferLayout<'static> {
        match self {
            VertexKind::PosNormTex => Vertex::layout(),
        }
    }

    /// Byte distance between consecutive vertices.
    pub fn stride(self) -> u64 {
        self.layout().array_stride
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_is_packed() {
        // 3 + 3 + 2 floats, no padding
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        assert_eq!(VertexKind::PosNormTex.stride(), 32);
    }

    #[test]
    fn attribute_offsets_are_contiguous() {
        let layout = Vertex::layout();
        let offsets: Vec<u64> = layout.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24]);
        let locations: Vec<u32> = layout.attributes.iter().map(|a| a.shader_location).collect();
        assert_eq!(locations, vec![0, 1, 2]);
    }
}
