//! Shared `wgpu::BindGroupLayout` objects.
//!
//! These layouts *are* the uniform schema of the two shader programs: the
//! group/binding numbers and types here must line up with the declarations
//! in `assets/shaders/world.wgsl` and `composite.wgsl`.  Pipeline creation
//! validates the match once; a disagreement is fatal, never silent.

use std::sync::Arc;

/// All bind-group layouts used by the renderer's pipelines.
///
/// Created once and shared via `Arc` so passes can hold a reference without
/// owning the whole struct.
#[derive(Clone)]
pub struct PipelineLayouts {
    /// group(0) of the world pipeline — one `FrameUniforms` buffer
    /// (projection, view, light array, light count) at binding 0.
    pub frame: Arc<wgpu::BindGroupLayout>,
    /// group(1) of the world pipeline — per-command world matrix via a
    /// **dynamic** uniform buffer, so one bind group serves every draw with
    /// only the byte offset changing.
    pub world: Arc<wgpu::BindGroupLayout>,
    /// group(2) of the world pipeline and group(0) of the composite
    /// pipeline — a diffuse `texture_2d` at binding 0 + sampler at binding 1.
    pub material: Arc<wgpu::BindGroupLayout>,
}

impl PipelineLayouts {
    pub fn new(device: &wgpu::Device) -> Self {
        let frame = Arc::new(
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: Frame"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            }),
        );

        let world = Arc::new(
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: World (dynamic)"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        // one mat4x4<f32> per slot
                        min_binding_size: wgpu::BufferSize::new(64),
                    },
                    count: None,
                }],
            }),
        );

        let material = Arc::new(
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: Material"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            }),
        );

        Self {
            frame,
            world,
            material,
        }
    }
}
