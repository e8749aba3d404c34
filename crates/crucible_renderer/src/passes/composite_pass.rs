//! Fullscreen composite pass: blits the offscreen color result onto the
//! caller's target view via a quad.
//!
//! The clear color is a loud magenta: the quad should cover every pixel,
//! so any magenta reaching the screen means the blit failed.

use std::sync::Arc;

use wgpu::{
    Color, CommandEncoder, LoadOp, Operations, RenderPassColorAttachment, RenderPassDescriptor,
    StoreOp, TextureView,
};

use crate::geometry::Mesh;
use crate::pipeline::{CompositePipeline, PipelineLayouts};

pub struct CompositePass {
    pipeline: CompositePipeline,
    quad: Mesh,
    /// group(0): offscreen color view + nearest/clamp sampler.
    source_bind_group: Arc<wgpu::BindGroup>,
    pub clear_color: crucible_core::Color,
}

impl CompositePass {
    /// `source_view` is the offscreen color attachment this pass samples;
    /// the bind group is built once because the target never resizes.
    pub fn new(
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
        layouts: &PipelineLayouts,
        source_view: &TextureView,
        quad: Mesh,
    ) -> Self {
        let pipeline = CompositePipeline::new(device, target_format, layouts);

        // nearest + clamp-to-edge: a 1:1 blit needs no filtering and must
        // not wrap at the borders
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Composite Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let source_bind_group = Arc::new(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Composite Source Bind Group"),
            layout: &layouts.material,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(source_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        }));

        Self {
            pipeline,
            quad,
            source_bind_group,
            clear_color: crucible_core::Color::MAGENTA,
        }
    }

    /// Records the composite pass into `target_view`.
    pub fn execute(&self, encoder: &mut CommandEncoder, target_view: &TextureView) {
        let [r, g, b, a] = self.clear_color.to_array();
        let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Composite Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: target_view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color {
                        r: r as f64,
                        g: g as f64,
                        b: b as f64,
                        a: a as f64,
                    }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        rpass.set_pipeline(&self.pipeline.inner);
        rpass.set_bind_group(0, &*self.source_bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.quad.index_buffer.slice(..), self.quad.index_format);
        rpass.draw_indexed(0..self.quad.index_count, 0, 0..1);
    }
}
