//! Lit 3-D geometry pass into the offscreen target.
//!
//! Clears color + depth, uploads the frame uniforms (projection, view,
//! lights) and the per-command world matrices, then emits one indexed draw
//! per `DrawCall` in packet order.

use wgpu::{
    Color, CommandEncoder, LoadOp, Operations, Queue, RenderPassColorAttachment,
    RenderPassDepthStencilAttachment, RenderPassDescriptor, StoreOp, TextureView,
};

use crate::graph::FramePacket;
use crate::pipeline::{PipelineLayouts, WorldPipeline};
use crate::queue::MAX_RENDER_COMMANDS;
use crate::resources::{FrameUniformBuffer, WorldBuffer};

pub struct WorldPass {
    pipeline: WorldPipeline,
    frame_uniforms: FrameUniformBuffer,
    world_matrices: WorldBuffer,
    /// Clear color of the offscreen surface.
    pub clear_color: crucible_core::Color,
}

impl WorldPass {
    pub fn new(
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
        layouts: &PipelineLayouts,
    ) -> Self {
        let frame_uniforms = FrameUniformBuffer::new(device, &layouts.frame);
        let world_matrices = WorldBuffer::new(device, &layouts.world, MAX_RENDER_COMMANDS);
        let pipeline = WorldPipeline::new(device, target_format, layouts);
        Self {
            pipeline,
            frame_uniforms,
            world_matrices,
            clear_color: crucible_core::Color::rgba(0.0, 0.2, 0.4, 1.0),
        }
    }

    /// Uploads frame uniforms and world matrices.  Must run before
    /// [`execute`](Self::execute) each frame.
    pub fn prepare(&mut self, queue: &Queue, packet: &FramePacket) {
        self.frame_uniforms
            .sync(queue, &packet.camera, &packet.lights);
        for (i, draw) in packet.draws.iter().enumerate() {
            self.world_matrices.write(queue, i, &draw.world);
        }
    }

    /// Records the pass.  `color_view`/`depth_view` are the offscreen
    /// attachments.
    pub fn execute(
        &self,
        encoder: &mut CommandEncoder,
        color_view: &TextureView,
        depth_view: &TextureView,
        packet: &FramePacket,
    ) {
        let [r, g, b, a] = self.clear_color.to_array();
        let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("World Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: color_view,
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
            depth_stencil_attachment: Some(RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(Operations {
                    load: LoadOp::Clear(1.0),
                    store: StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        rpass.set_pipeline(&self.pipeline.inner);
        rpass.set_bind_group(0, &*self.frame_uniforms.bind_group, &[]);

        for (i, draw) in packet.draws.iter().enumerate() {
            rpass.set_bind_group(
                1,
                &*self.world_matrices.bind_group,
                &[self.world_matrices.offset(i)],
            );
            rpass.set_bind_group(2, &*draw.material_bind_group, &[]);
            rpass.set_vertex_buffer(0, draw.vertex_buffer.slice(..));
            rpass.set_index_buffer(draw.index_buffer.slice(..), draw.index_format);
            rpass.draw_indexed(0..draw.index_count, 0, 0..1);
        }
    }
}
