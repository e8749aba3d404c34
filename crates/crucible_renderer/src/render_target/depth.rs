//! Offscreen depth attachment.
//!
//! Dimensions must match the color attachment's; the render-target validator
//! reports a mismatch as a framebuffer diagnostic.

use crate::resources::texture::{self, RenderTextureDesc};

pub struct DepthTarget {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl DepthTarget {
    /// 32-bit float depth.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let tex = texture::create_render_texture(
            device,
            &RenderTextureDesc {
                label: "Offscreen Depth Texture",
                width,
                height,
                format: Self::FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            },
        );
        let view = texture::default_view(&tex);
        Self { texture: tex, view }
    }
}
