//! glTF mesh decoding.
//!
//! All primitives of every mesh in the file are merged into one vertex/index
//! pair; the renderer draws a `MeshData` as a single indexed triangle list.
//! Missing normals default to +Z and missing texcoords to (0, 0) rather than
//! failing the load — only a missing `POSITION` attribute is an error.

use std::path::Path;

use crate::AssetError;

/// One decoded vertex: the attribute set the render pipelines expect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub texcoord: [f32; 2],
}

/// Decoded triangle mesh, ready for a GPU upload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Import a glTF (`.gltf` / `.glb`) file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let (document, buffers, _images) =
            gltf::import(path).map_err(|source| AssetError::Gltf {
                path: path.to_path_buf(),
                source,
            })?;

        let mut data = MeshData::default();
        for mesh in document.meshes() {
            for primitive in mesh.primitives() {
                data.push_primitive(path, &primitive, &buffers)?;
            }
        }

        if data.vertices.is_empty() || data.indices.is_empty() {
            return Err(AssetError::EmptyMesh {
                path: path.to_path_buf(),
            });
        }
        log::debug!(
            "loaded mesh {} ({} vertices, {} indices)",
            path.display(),
            data.vertices.len(),
            data.indices.len()
        );
        Ok(data)
    }

    fn push_primitive(
        &mut self,
        path: &Path,
        primitive: &gltf::Primitive<'_>,
        buffers: &[gltf::buffer::Data],
    ) -> Result<(), AssetError> {
        let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|b| &b.0[..]));

        let positions = reader
            .read_positions()
            .ok_or(AssetError::MissingAttribute {
                path: path.to_path_buf(),
                attribute: "POSITION",
            })?;
        let normals: Vec<[f32; 3]> = reader
            .read_normals()
            .map(|n| n.collect())
            .unwrap_or_default();
        let texcoords: Vec<[f32; 2]> = reader
            .read_tex_coords(0)
            .map(|t| t.into_f32().collect())
            .unwrap_or_default();

        let base = self.vertices.len() as u32;
        for (i, position) in positions.enumerate() {
            self.vertices.push(MeshVertex {
                position,
                normal: normals.get(i).copied().unwrap_or([0.0, 0.0, 1.0]),
                texcoord: texcoords.get(i).copied().unwrap_or([0.0, 0.0]),
            });
        }

        match reader.read_indices() {
            Some(indices) => self.indices.extend(indices.into_u32().map(|i| base + i)),
            // Non-indexed primitive: synthesize a trivial index list.
            None => self.indices.extend(base..self.vertices.len() as u32),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_errors() {
        let err = MeshData::load("no/such/mesh.gltf").unwrap_err();
        assert!(matches!(err, AssetError::Gltf { .. }));
    }

    #[test]
    fn default_is_empty() {
        let d = MeshData::default();
        assert!(d.vertices.is_empty() && d.indices.is_empty());
    }
}
