//! The offscreen render target: a color + depth attachment pair sized once
//! at construction.  There is no resize path; dimensions are fixed for the
//! graphics context's lifetime.
//!
//! [`RenderTarget::validate`] plays the role of a framebuffer completeness
//! check: it inspects the attachment pair, logs one diagnostic outcome and
//! returns it.  An incomplete target is logged but **not** fatal — rendering
//! proceeds and produces whatever the driver makes of it.

mod color;
mod depth;

pub use color::ColorTarget;
pub use depth::DepthTarget;

/// Outcome of validating the attachment pair.
///
/// The set is closed: every status is derived from inspecting the
/// attachments' own properties, so there is no opaque driver-reported
/// failure code left to bucket under an "unknown" variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramebufferStatus {
    Complete,
    /// An attachment lacks the `RENDER_ATTACHMENT` usage, so nothing can be
    /// connected to it.
    AttachmentUnconnected,
    /// An attachment is zero-sized.
    MissingAttachment,
    /// Color and depth dimensions disagree.
    DimensionMismatch,
    /// Attachment formats cannot form a color + depth pair.
    Unsupported,
}

/// Format/usage/dimension summary of one attachment, split out so the
/// completeness rules are testable without a GPU device.
#[derive(Debug, Clone, Copy)]
pub struct AttachmentInfo {
    pub width: u32,
    pub height: u32,
    pub format: wgpu::TextureFormat,
    pub usage: wgpu::TextureUsages,
}

impl AttachmentInfo {
    fn of(texture: &wgpu::Texture) -> Self {
        Self {
            width: texture.width(),
            height: texture.height(),
            format: texture.format(),
            usage: texture.usage(),
        }
    }
}

/// Completeness rules for a color + depth attachment pair.
pub fn check_attachments(color: &AttachmentInfo, depth: &AttachmentInfo) -> FramebufferStatus {
    if color.width == 0 || color.height == 0 || depth.width == 0 || depth.height == 0 {
        return FramebufferStatus::MissingAttachment;
    }
    if !color.usage.contains(wgpu::TextureUsages::RENDER_ATTACHMENT)
        || !depth.usage.contains(wgpu::TextureUsages::RENDER_ATTACHMENT)
    {
        return FramebufferStatus::AttachmentUnconnected;
    }
    if (color.width, color.height) != (depth.width, depth.height) {
        return FramebufferStatus::DimensionMismatch;
    }
    if color.format.has_depth_aspect() || !depth.format.has_depth_aspect() {
        return FramebufferStatus::Unsupported;
    }
    FramebufferStatus::Complete
}

pub struct RenderTarget {
    pub color: ColorTarget,
    pub depth: DepthTarget,
    pub width: u32,
    pub height: u32,
}

impl RenderTarget {
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let target = Self {
            color: ColorTarget::new(device, width, height),
            depth: DepthTarget::new(device, width, height),
            width,
            height,
        };
        log::info!("created offscreen framebuffer {}x{}", width, height);
        target
    }

    /// Checks the attachment pair and logs the outcome.  Never fails; an
    /// incomplete framebuffer is a diagnosed condition, not an error.
    pub fn validate(&self) -> FramebufferStatus {
        let status = check_attachments(
            &AttachmentInfo::of(&self.color.texture),
            &AttachmentInfo::of(&self.depth.texture),
        );
        match status {
            FramebufferStatus::Complete => log::info!("framebuffer complete"),
            FramebufferStatus::AttachmentUnconnected => {
                log::warn!("framebuffer error: attachment point unconnected")
            }
            FramebufferStatus::MissingAttachment => {
                log::warn!("framebuffer error: missing attachment")
            }
            FramebufferStatus::DimensionMismatch => {
                log::warn!("framebuffer error: dimensions do not match")
            }
            FramebufferStatus::Unsupported => {
                log::warn!("framebuffer error: unsupported configuration")
            }
        }
        status
    }

    /// The view the composite pass samples from.
    #[inline]
    pub fn color_view(&self) -> &wgpu::TextureView {
        &self.color.view
    }

    /// The depth/stencil view for the world pass.
    #[inline]
    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_info(w: u32, h: u32) -> AttachmentInfo {
        AttachmentInfo {
            width: w,
            height: h,
            format: ColorTarget::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        }
    }

    fn depth_info(w: u32, h: u32) -> AttachmentInfo {
        AttachmentInfo {
            width: w,
            height: h,
            format: DepthTarget::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        }
    }

    #[test]
    fn matching_pair_is_complete() {
        assert_eq!(
            check_attachments(&color_info(800, 600), &depth_info(800, 600)),
            FramebufferStatus::Complete
        );
    }

    #[test]
    fn zero_sized_attachment_is_missing() {
        assert_eq!(
            check_attachments(&color_info(0, 600), &depth_info(800, 600)),
            FramebufferStatus::MissingAttachment
        );
    }

    #[test]
    fn usage_without_render_attachment_is_unconnected() {
        let mut color = color_info(800, 600);
        color.usage = wgpu::TextureUsages::TEXTURE_BINDING;
        assert_eq!(
            check_attachments(&color, &depth_info(800, 600)),
            FramebufferStatus::AttachmentUnconnected
        );
    }

    #[test]
    fn differing_dimensions_mismatch() {
        assert_eq!(
            check_attachments(&color_info(800, 600), &depth_info(640, 480)),
            FramebufferStatus::DimensionMismatch
        );
    }

    #[test]
    fn swapped_formats_are_unsupported() {
        let mut color = color_info(800, 600);
        color.format = DepthTarget::FORMAT;
        assert_eq!(
            check_attachments(&color, &depth_info(800, 600)),
            FramebufferStatus::Unsupported
        );
    }
}
