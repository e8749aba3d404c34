pub mod buffer;
pub mod frame_uniforms;
pub mod texture;
pub mod world_buffer;

pub use frame_uniforms::{FrameUniformBuffer, FrameUniforms, GpuLight};
pub use world_buffer::WorldBuffer;
