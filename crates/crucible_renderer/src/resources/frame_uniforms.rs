//! Per-frame uniform block: camera matrices plus the directional light array.
//!
//! The byte layout is a fixed contract with `FrameUniforms` in
//! `assets/shaders/world.wgsl`; the explicit padding fields exist to match
//! WGSL's 16-byte alignment rules for `vec3` and struct sizes.

use std::sync::Arc;

use glam::Mat4;

use crucible_core::DirectionalLight;

use crate::graph::CameraPacket;
use crate::queue::MAX_LIGHTS;
use crate::resources::buffer;

/// GPU mirror of [`DirectionalLight`]; 32 bytes, matching the WGSL `Light`
/// array stride in the uniform address space.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuLight {
    pub direction: [f32; 3],
    _pad0: f32,
    pub color: [f32; 3],
    _pad1: f32,
}

impl From<DirectionalLight> for GpuLight {
    fn from(light: DirectionalLight) -> Self {
        Self {
            direction: light.direction.to_array(),
            _pad0: 0.0,
            color: light.color.to_array(),
            _pad1: 0.0,
        }
    }
}

/// group(0) binding(0) of the world pipeline.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub projection: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub lights: [GpuLight; MAX_LIGHTS],
    pub num_lights: u32,
    _pad: [u32; 3],
}

impl FrameUniforms {
    pub fn new() -> Self {
        let mut u: Self = bytemuck::Zeroable::zeroed();
        u.projection = Mat4::IDENTITY.to_cols_array_2d();
        u.view = Mat4::IDENTITY.to_cols_array_2d();
        u
    }

    /// Copies a frame's camera snapshot and light list in.
    ///
    /// `lights.len()` must not exceed [`MAX_LIGHTS`]; the light queue
    /// guarantees that bound before anything reaches this point.
    pub fn update(&mut self, camera: &CameraPacket, lights: &[DirectionalLight]) {
        debug_assert!(lights.len() <= MAX_LIGHTS);
        self.projection = camera.projection.to_cols_array_2d();
        self.view = camera.view.to_cols_array_2d();
        for (slot, light) in self.lights.iter_mut().zip(lights) {
            *slot = (*light).into();
        }
        self.num_lights = lights.len() as u32;
    }
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self::new()
    }
}

/// GPU-side home of [`FrameUniforms`]: the buffer and its group(0) bind group.
pub struct FrameUniformBuffer {
    pub uniforms: FrameUniforms,
    pub buffer: Arc<wgpu::Buffer>,
    pub bind_group: Arc<wgpu::BindGroup>,
}

impl FrameUniformBuffer {
    /// `layout` must have a single `UNIFORM` buffer entry at binding 0.
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout) -> Self {
        let uniforms = FrameUniforms::new();
        let buffer = buffer::create_uniform(device, "Frame Uniform Buffer", &uniforms);

        let bind_group = Arc::new(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        }));

        Self {
            uniforms,
            buffer,
            bind_group,
        }
    }

    /// Syncs CPU frame state to the GPU buffer.  Call before the world pass
    /// executes.
    pub fn sync(
        &mut self,
        queue: &wgpu::Queue,
        camera: &CameraPacket,
        lights: &[DirectionalLight],
    ) {
        self.uniforms.update(camera, lights);
        buffer::update_uniform(queue, &self.buffer, &self.uniforms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn layout_matches_wgsl() {
        // mat4 + mat4 + 64 * 32B lights + u32 count + 12B tail padding
        assert_eq!(std::mem::size_of::<GpuLight>(), 32);
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 64 + 64 + 64 * 32 + 16);
    }

    #[test]
    fn update_records_light_count_and_order() {
        let mut u = FrameUniforms::new();
        let camera = CameraPacket {
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
        };
        let lights = [
            DirectionalLight::new(Vec3::NEG_Y, crucible_core::Color::WHITE),
            DirectionalLight::new(Vec3::X, crucible_core::Color::RED),
        ];
        u.update(&camera, &lights);
        assert_eq!(u.num_lights, 2);
        assert_eq!(u.lights[0].direction, [0.0, -1.0, 0.0]);
        assert_eq!(u.lights[1].color, [1.0, 0.0, 0.0]);
    }
}
