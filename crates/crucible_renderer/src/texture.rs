//! GPU diffuse texture: the uploaded image plus its material bind group.
//!
//! Like [`Mesh`](crate::geometry::Mesh), a `Texture` is a cheaply cloneable
//! `Arc` handle; queued render commands clone it, so the GPU resources live
//! at least until the frame that samples them has been submitted.  The last
//! handle to drop releases the texture.

use std::sync::Arc;

use crucible_assets::TextureData;

use crate::resources::texture as texture_res;

#[derive(Clone)]
pub struct Texture {
    pub texture: Arc<wgpu::Texture>,
    pub view: Arc<wgpu::TextureView>,
    /// group(2) bind group: diffuse view + sampler.
    pub bind_group: Arc<wgpu::BindGroup>,
}

impl Texture {
    /// Uploads decoded RGBA8 pixels and builds the material bind group.
    ///
    /// `layout` must be the material bind-group layout.
    pub fn from_data(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        data: &TextureData,
    ) -> Self {
        let texture = texture_res::create_render_texture(
            device,
            &texture_res::RenderTextureDesc {
                label,
                width: data.width,
                height: data.height,
                format: wgpu::TextureFormat::Rgba8Unorm,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            },
        );

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &data.pixels,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * data.width),
                rows_per_image: Some(data.height),
            },
            wgpu::Extent3d {
                width: data.width,
                height: data.height,
                depth_or_array_layers: 1,
            },
        );

        let view = texture_res::default_view(&texture);
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        // the bind group keeps the sampler alive; no field needed for it
        let bind_group = Arc::new(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        }));

        Self {
            texture: Arc::new(texture),
            view: Arc::new(view),
            bind_group,
        }
    }
}
