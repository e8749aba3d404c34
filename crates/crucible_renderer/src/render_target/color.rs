//! Offscreen color attachment.
//!
//! Created with `TEXTURE_BINDING` in addition to `RENDER_ATTACHMENT` because
//! the composite pass samples the result onto the final target.

use crate::resources::texture::{self, RenderTextureDesc};

pub struct ColorTarget {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub format: wgpu::TextureFormat,
}

impl ColorTarget {
    /// RGBA8, matching the offscreen surface the lit pass renders into.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let tex = texture::create_render_texture(
            device,
            &RenderTextureDesc {
                label: "Offscreen Color Texture",
                width,
                height,
                format: Self::FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                    | wgpu::TextureUsages::TEXTURE_BINDING
                    | wgpu::TextureUsages::COPY_SRC,
            },
        );
        let view = texture::default_view(&tex);
        Self {
            texture: tex,
            view,
            format: Self::FORMAT,
        }
    }
}
