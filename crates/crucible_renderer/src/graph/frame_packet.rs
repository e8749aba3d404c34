//! Data bundle assembled once per frame from the drained queues and passed
//! immutably to the passes.
//!
//! The packet is the seam between frame accumulation and GPU execution: the
//! draw list carries resolved GPU handles in exact submission order, the
//! camera fields are snapshots taken at the moment `render` began, and
//! nothing past this point consults the graphics context's mutable state.

use std::sync::Arc;

use glam::Mat4;

use crucible_core::DirectionalLight;

/// Camera state for a single frame.
pub struct CameraPacket {
    /// Fixed projection computed at context creation.
    pub projection: Mat4,
    /// Inverse of the view transform's world matrix.
    pub view: Mat4,
}

/// A single mesh draw, fully resolved to GPU handles.
pub struct DrawCall {
    pub vertex_buffer: Arc<wgpu::Buffer>,
    pub index_buffer: Arc<wgpu::Buffer>,
    pub index_count: u32,
    pub index_format: wgpu::IndexFormat,
    /// group(2) material bind group (diffuse texture + sampler).
    pub material_bind_group: Arc<wgpu::BindGroup>,
    /// World matrix computed from the submitted transform.
    pub world: Mat4,
}

/// Everything the world pass needs for one frame.
pub struct FramePacket {
    pub camera: CameraPacket,
    /// Directional lights in submission order.
    pub lights: Vec<DirectionalLight>,
    /// Draw calls in submission order; never reordered or batched.
    pub draws: Vec<DrawCall>,
}
