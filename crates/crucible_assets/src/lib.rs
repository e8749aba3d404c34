//! `crucible_assets` — CPU-side asset decoding.
//!
//! This crate turns files into plain data the renderer can upload: image
//! files become [`TextureData`] (tightly packed RGBA8) and glTF files become
//! [`MeshData`] (interleavable position/normal/texcoord vertices plus `u32`
//! indices).  Nothing here touches the GPU; uploading is the renderer's job.

pub mod error;
pub mod mesh;
pub mod texture;

pub use error::AssetError;
pub use mesh::{MeshData, MeshVertex};
pub use texture::TextureData;
