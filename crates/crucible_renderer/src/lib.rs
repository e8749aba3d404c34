//! `crucible_renderer` — a minimal immediate-mode 3D renderer on wgpu.
//!
//! # Module layout
//!
//! | Module          | Responsibility                                        |
//! |-----------------|-------------------------------------------------------|
//! | `context`       | wgpu instance/adapter/device ownership                |
//! | `resources`     | Low-level buffer / texture allocation helpers         |
//! | `geometry`      | `Vertex`, `Mesh`, built-in cube and quad              |
//! | `texture`       | Diffuse textures + their material bind groups         |
//! | `queue`         | Bounded per-frame draw and light queues               |
//! | `render_target` | Fixed-size offscreen color + depth pair               |
//! | `pipeline`      | Bind-group layouts + the two compiled pipelines       |
//! | `graph`         | `FramePacket` — the drained-queue snapshot            |
//! | `passes`        | `WorldPass` (lit geometry) and `CompositePass` (blit) |
//!
//! # Frame model
//!
//! [`Graphics`] owns everything.  Callers accumulate work with
//! [`submit_draw`](Graphics::submit_draw) and
//! [`submit_light`](Graphics::submit_light), point the camera with
//! [`set_view_transform`](Graphics::set_view_transform), and then call
//! [`render`](Graphics::render) once per frame.  `render` drains both queues
//! into a [`FramePacket`], draws every command in submission order into the
//! offscreen target, and composites the result onto the caller's target
//! view.  Everything is single-threaded and synchronous.

pub mod context;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod passes;
pub mod pipeline;
pub mod queue;
pub mod render_target;
pub mod resources;
pub mod texture;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use context::GpuContext;
pub use error::RenderError;
pub use geometry::{Mesh, Vertex, VertexKind};
pub use graph::{CameraPacket, DrawCall, FramePacket};
pub use queue::{QueueFull, MAX_LIGHTS, MAX_RENDER_COMMANDS};
pub use render_target::{FramebufferStatus, RenderTarget};
pub use texture::Texture;

pub use crucible_assets::{AssetError, MeshData, TextureData};
pub use crucible_core::{Color, DirectionalLight, Transform};
pub use glam;

// ── Internal imports ──────────────────────────────────────────────────────────

use std::path::Path;

use glam::Mat4;

use passes::{CompositePass, WorldPass};
use pipeline::PipelineLayouts;
use queue::{RenderCommand, RenderQueue};

// ── Camera constants ──────────────────────────────────────────────────────────

/// Vertical field of view of the fixed projection, radians.
pub const CAMERA_FOV: f32 = std::f32::consts::FRAC_PI_2;
/// Near plane of the fixed projection.
pub const CAMERA_NEAR: f32 = 0.1;
/// Far plane of the fixed projection.
pub const CAMERA_FAR: f32 = 1000.0;

// ── Graphics ──────────────────────────────────────────────────────────────────

/// The graphics context: sole owner of GPU handles, pipelines, the offscreen
/// target, built-in meshes and the per-frame queues.
///
/// Created once at startup with fixed dimensions; dropped once at shutdown,
/// which releases every GPU resource it still owns (meshes and textures
/// handed to callers live until their last `Arc` handle drops).  Not
/// cloneable — all mutation goes through `&mut self`.
pub struct Graphics {
    pub context: GpuContext,
    render_target: RenderTarget,
    layouts: PipelineLayouts,
    world_pass: WorldPass,
    composite_pass: CompositePass,

    frame: RenderQueue,
    projection: Mat4,
    view_transform: Transform,

    cube: Mesh,
    quad: Mesh,

    width: u32,
    height: u32,
}

impl Graphics {
    /// Builds the full renderer: offscreen framebuffer (validated, with the
    /// outcome logged but never fatal), both pipelines, the fixed projection
    /// matrix and the built-in cube and quad meshes.
    ///
    /// `target_format` is the format of the views later passed to
    /// [`render`](Self::render) — typically the swapchain surface format.
    pub fn new(context: GpuContext, width: u32, height: u32, target_format: wgpu::TextureFormat) -> Self {
        let device = &context.device;

        let render_target = RenderTarget::new(device, width, height);
        render_target.validate();

        let layouts = PipelineLayouts::new(device);
        let world_pass = WorldPass::new(device, render_target.color.format, &layouts);

        let cube = Mesh::cube(device);
        let quad = Mesh::quad(device);
        let composite_pass = CompositePass::new(
            device,
            target_format,
            &layouts,
            render_target.color_view(),
            quad.clone(),
        );

        let projection = Mat4::perspective_rh(
            CAMERA_FOV,
            width as f32 / height as f32,
            CAMERA_NEAR,
            CAMERA_FAR,
        );

        log::info!("graphics initialized ({width}x{height})");

        Self {
            context,
            render_target,
            layouts,
            world_pass,
            composite_pass,
            frame: RenderQueue::new(),
            projection,
            view_transform: Transform::IDENTITY,
            cube,
            quad,
            width,
            height,
        }
    }

    // ── Frame API ─────────────────────────────────────────────────────────────

    /// Queues one mesh draw for the current frame.
    ///
    /// O(1); fails with [`RenderError::CommandQueueFull`] once
    /// [`MAX_RENDER_COMMANDS`] commands are pending.  The mesh and texture
    /// handles are cloned, so the caller may drop theirs immediately.
    pub fn submit_draw(
        &mut self,
        mesh: &Mesh,
        diffuse: &Texture,
        transform: Transform,
    ) -> Result<(), RenderError> {
        self.frame
            .commands
            .push(RenderCommand {
                transform,
                mesh: mesh.clone(),
                diffuse: diffuse.clone(),
            })
            .map_err(RenderError::CommandQueueFull)
    }

    /// Queues one directional light for the current frame.
    ///
    /// Fails with [`RenderError::LightQueueFull`] once [`MAX_LIGHTS`] lights
    /// are pending.
    pub fn submit_light(&mut self, light: DirectionalLight) -> Result<(), RenderError> {
        self.frame
            .lights
            .push(light)
            .map_err(RenderError::LightQueueFull)
    }

    /// Replaces the camera transform.  It is read once, at the start of the
    /// next `render` call; mutating it between submissions is safe.
    pub fn set_view_transform(&mut self, transform: Transform) {
        self.view_transform = transform;
    }

    /// Renders one composited frame into `target_view`.
    ///
    /// Pass 1 draws every queued command, in submission order, into the
    /// offscreen target; pass 2 clears `target_view` to the magenta marker
    /// and blits the offscreen color result over it with a fullscreen quad.
    /// Both queues are empty when this returns.
    pub fn render(&mut self, encoder: &mut wgpu::CommandEncoder, target_view: &wgpu::TextureView) {
        let packet = self.take_frame_packet();

        self.world_pass.prepare(&self.context.queue, &packet);
        self.world_pass.execute(
            encoder,
            self.render_target.color_view(),
            self.render_target.depth_view(),
            &packet,
        );
        self.composite_pass.execute(encoder, target_view);
    }

    /// Convenience wrapper: allocates an encoder, records one frame and
    /// submits it.
    pub fn render_frame(&mut self, target_view: &wgpu::TextureView) {
        let mut encoder = self.begin_frame();
        self.render(&mut encoder, target_view);
        self.context.queue.submit(std::iter::once(encoder.finish()));
    }

    /// Allocates a fresh `CommandEncoder` for the current frame.
    pub fn begin_frame(&self) -> wgpu::CommandEncoder {
        self.context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            })
    }

    /// Drains both queues into an immutable frame snapshot.
    fn take_frame_packet(&mut self) -> FramePacket {
        let camera = CameraPacket {
            projection: self.projection,
            view: self.view_transform.view_matrix(),
        };
        let draws = self
            .frame
            .commands
            .drain()
            .map(|cmd| DrawCall {
                vertex_buffer: cmd.mesh.vertex_buffer,
                index_buffer: cmd.mesh.index_buffer,
                index_count: cmd.mesh.index_count,
                index_format: cmd.mesh.index_format,
                material_bind_group: cmd.diffuse.bind_group,
                world: cmd.transform.matrix(),
            })
            .collect();
        let lights = self.frame.lights.drain().collect();
        FramePacket {
            camera,
            lights,
            draws,
        }
    }

    // ── Resource API ──────────────────────────────────────────────────────────

    /// Decodes an image file and uploads it as a diffuse texture.
    pub fn load_texture(&self, path: impl AsRef<Path>) -> Result<Texture, RenderError> {
        let data = TextureData::load(path)?;
        Ok(self.create_texture(&data))
    }

    /// Uploads already-decoded RGBA8 pixels as a diffuse texture.
    pub fn create_texture(&self, data: &TextureData) -> Texture {
        Texture::from_data(
            &self.context.device,
            &self.context.queue,
            &self.layouts.material,
            "Diffuse Texture",
            data,
        )
    }

    /// Imports a glTF file and uploads it as a drawable mesh.
    pub fn create_mesh(&self, path: impl AsRef<Path>) -> Result<Mesh, RenderError> {
        let data = MeshData::load(path)?;
        Ok(self.create_mesh_from_data(&data))
    }

    /// Uploads already-decoded mesh data.
    pub fn create_mesh_from_data(&self, data: &MeshData) -> Mesh {
        Mesh::from_data(&self.context.device, "Loaded Mesh", data)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Built-in unit cube.
    pub fn cube_mesh(&self) -> &Mesh {
        &self.cube
    }

    /// Built-in fullscreen quad (the composite pass draws its own handle of
    /// this mesh).
    pub fn quad_mesh(&self) -> &Mesh {
        &self.quad
    }

    /// The fixed projection matrix computed at construction.
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Clear color of the world pass (the offscreen background).
    pub fn world_clear_color(&self) -> Color {
        self.world_pass.clear_color
    }

    /// Clear marker of the composite pass.  Only visible on screen if the
    /// fullscreen blit fails to cover the target.
    pub fn composite_clear_color(&self) -> Color {
        self.composite_pass.clear_color
    }

    /// Draw commands queued since the last `render`.
    pub fn pending_draws(&self) -> usize {
        self.frame.commands.len()
    }

    /// Lights queued since the last `render`.
    pub fn pending_lights(&self) -> usize {
        self.frame.lights.len()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The offscreen target (e.g. to read back or display its color texture).
    pub fn render_target(&self) -> &RenderTarget {
        &self.render_target
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    /// Headless context + renderer, or `None` when the machine has no GPU
    /// adapter (tests bail out quietly in that case).
    fn graphics() -> Option<Graphics> {
        let context = pollster::block_on(GpuContext::new()).ok()?;
        Some(Graphics::new(
            context,
            800,
            600,
            wgpu::TextureFormat::Rgba8Unorm,
        ))
    }

    fn solid_texture(gfx: &Graphics) -> Texture {
        gfx.create_texture(&TextureData::solid(1, 1, [255, 255, 255, 255]))
    }

    #[test]
    fn projection_is_pure_function_of_dimensions() {
        let Some(gfx) = graphics() else { return };
        let expected = Mat4::perspective_rh(CAMERA_FOV, 800.0 / 600.0, CAMERA_NEAR, CAMERA_FAR);
        assert!(gfx.projection().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn packet_uses_inverse_of_last_set_view_transform() {
        let Some(mut gfx) = graphics() else { return };
        let mut t = Transform::from_position(Vec3::new(0.0, 2.0, 8.0));
        t.rotate_y(0.5);
        gfx.set_view_transform(t);

        let packet = gfx.take_frame_packet();
        assert!(packet.camera.view.abs_diff_eq(t.matrix().inverse(), 1e-5));
        // projection snapshot matches the fixed matrix
        assert!(packet.camera.projection.abs_diff_eq(gfx.projection(), 1e-6));
    }

    #[test]
    fn packet_preserves_submission_order() {
        let Some(mut gfx) = graphics() else { return };
        let texture = solid_texture(&gfx);
        let cube = gfx.cube_mesh().clone();

        let positions = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
        ];
        for p in positions {
            gfx.submit_draw(&cube, &texture, Transform::from_position(p))
                .unwrap();
        }

        let packet = gfx.take_frame_packet();
        assert_eq!(packet.draws.len(), 3);
        for (draw, expected) in packet.draws.iter().zip(positions) {
            let (_, _, pos) = draw.world.to_scale_rotation_translation();
            assert!((pos - expected).length() < 1e-5);
        }
        // draining the packet left both queues empty
        assert_eq!(gfx.pending_draws(), 0);
        assert_eq!(gfx.pending_lights(), 0);
    }

    #[test]
    fn packet_preserves_light_order() {
        let Some(mut gfx) = graphics() else { return };
        gfx.submit_light(DirectionalLight::new(Vec3::NEG_Y, Color::WHITE))
            .unwrap();
        gfx.submit_light(DirectionalLight::new(Vec3::X, Color::RED))
            .unwrap();

        let packet = gfx.take_frame_packet();
        assert_eq!(packet.lights.len(), 2);
        assert_eq!(packet.lights[0].direction, Vec3::NEG_Y);
        assert_eq!(packet.lights[1].direction, Vec3::X);
    }
}
