//! Dynamic uniform buffer for per-command world matrices.
//!
//! Updating one uniform between draw calls is not possible mid-pass in wgpu,
//! so all world matrices of a frame live in a single buffer with one aligned
//! slot per render command.  The world pass binds the buffer once and feeds
//! a byte offset per draw:
//!
//! ```text
//! rpass.set_bind_group(1, &world_buf.bind_group, &[world_buf.offset(i)]);
//! ```
//!
//! Each slot is `align_up(64, min_uniform_buffer_offset_alignment)` bytes
//! (256 on most desktop hardware, 64 on some mobile GPUs).  Capacity equals
//! the render-command queue bound, so a slot always exists for a queued
//! command and the buffer never reallocates.

use std::sync::Arc;

use wgpu::util::DeviceExt;

/// One mat4x4<f32>.
const MAT4_SIZE: u64 = 64;

pub struct WorldBuffer {
    pub buffer: wgpu::Buffer,
    /// Single bind group referencing the whole buffer with a dynamic offset.
    pub bind_group: Arc<wgpu::BindGroup>,
    /// Byte stride between consecutive matrix slots.
    pub stride: u32,
    capacity: usize,
}

impl WorldBuffer {
    /// `layout` must be the world bind-group layout with
    /// `has_dynamic_offset: true`.
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, capacity: usize) -> Self {
        let alignment = device.limits().min_uniform_buffer_offset_alignment;
        let stride = align_up(MAT4_SIZE as u32, alignment);

        // Fill with identity matrices so unwritten slots are harmless.
        let identity = glam::Mat4::IDENTITY.to_cols_array();
        let mut contents = vec![0u8; capacity * stride as usize];
        for slot in 0..capacity {
            let off = slot * stride as usize;
            contents[off..off + MAT4_SIZE as usize]
                .copy_from_slice(bytemuck::cast_slice(&identity));
        }
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("World Matrix Buffer"),
            contents: &contents,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = Arc::new(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("World Matrix Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    // size of one slot, the window the shader sees
                    size: wgpu::BufferSize::new(MAT4_SIZE),
                }),
            }],
        }));

        Self {
            buffer,
            bind_group,
            stride,
            capacity,
        }
    }

    /// Byte offset of slot `index`.
    #[inline]
    pub fn offset(&self, index: usize) -> u32 {
        (index as u32).wrapping_mul(self.stride)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Writes `matrix` into slot `index`.
    #[inline]
    pub fn write(&self, queue: &wgpu::Queue, index: usize, matrix: &glam::Mat4) {
        debug_assert!(index < self.capacity, "world matrix slot out of range");
        queue.write_buffer(
            &self.buffer,
            self.offset(index) as u64,
            bytemuck::cast_slice(&[matrix.to_cols_array()]),
        );
    }
}

/// Round `value` up to the next multiple of `alignment` (a power of two).
#[inline]
fn align_up(value: u32, alignment: u32) -> u32 {
    (value + alignment - 1) & !(alignment - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_up_powers_of_two() {
        assert_eq!(align_up(64, 64), 64);
        assert_eq!(align_up(64, 256), 256);
        assert_eq!(align_up(65, 64), 128);
        assert_eq!(align_up(1, 256), 256);
    }
}
