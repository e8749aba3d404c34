//! Image file decoding into tightly packed RGBA8 pixel data.

use std::path::Path;

use crate::AssetError;

/// Decoded image, ready for a GPU upload.
///
/// `pixels` holds `width * height * 4` bytes, row-major, no padding.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureData {
    /// Decode an image file (any format the `image` crate understands) and
    /// convert it to RGBA8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| AssetError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::debug!("loaded texture {} ({}x{})", path.display(), width, height);
        Ok(Self {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }

    /// Wrap raw RGBA8 pixels.
    ///
    /// Panics if `pixels.len() != width * height * 4`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert_eq!(
            pixels.len(),
            (width * height * 4) as usize,
            "pixel buffer does not match dimensions"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A single-color texture.  Handy as a placeholder diffuse map.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_fills_every_pixel() {
        let t = TextureData::solid(2, 2, [10, 20, 30, 255]);
        assert_eq!(t.pixels.len(), 16);
        assert_eq!(&t.pixels[4..8], &[10, 20, 30, 255]);
    }

    #[test]
    #[should_panic]
    fn from_pixels_rejects_short_buffer() {
        TextureData::from_pixels(2, 2, vec![0u8; 4]);
    }

    #[test]
    fn load_missing_file_errors() {
        let err = TextureData::load("no/such/texture.png").unwrap_err();
        assert!(matches!(err, AssetError::Image { .. }));
    }

    #[test]
    fn png_roundtrip() {
        let mut path = std::env::temp_dir();
        path.push(format!("crucible_texture_{}.png", std::process::id()));
        image::save_buffer(&path, &[255, 0, 0, 255], 1, 1, image::ColorType::Rgba8).unwrap();

        let t = TextureData::load(&path).unwrap();
        assert_eq!((t.width, t.height), (1, 1));
        assert_eq!(t.pixels, vec![255, 0, 0, 255]);

        let _ = std::fs::remove_file(&path);
    }
}
