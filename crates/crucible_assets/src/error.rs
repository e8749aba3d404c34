use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while decoding asset files.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to parse glTF {path}: {source}")]
    Gltf {
        path: PathBuf,
        #[source]
        source: gltf::Error,
    },

    #[error("mesh {path} is missing the {attribute} attribute")]
    MissingAttribute {
        path: PathBuf,
        attribute: &'static str,
    },

    #[error("mesh {path} contains no triangle geometry")]
    EmptyMesh { path: PathBuf },
}
