//! Directional light description.
//!
//! Lights are submitted per frame, just like draw commands; the renderer
//! uploads them as a flat array in submission order and forgets them after
//! the frame.

use glam::Vec3;

use crate::Color;

/// A directional light: parallel rays travelling along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Direction the light travels in, world space.  Does not need to be
    /// normalized; the shader normalizes before shading.
    pub direction: Vec3,
    /// Linear RGB intensity.
    pub color: Vec3,
}

impl DirectionalLight {
    pub fn new(direction: Vec3, color: Color) -> Self {
        Self {
            direction,
            color: Vec3::from(color.to_rgb_array()),
        }
    }

    /// White light pointing straight down.
    pub fn overhead() -> Self {
        Self::new(Vec3::NEG_Y, Color::WHITE)
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::overhead()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_is_rgb_only() {
        let l = DirectionalLight::new(Vec3::NEG_Y, Color::rgba(0.5, 0.25, 1.0, 0.1));
        assert_eq!(l.color, Vec3::new(0.5, 0.25, 1.0));
    }

    #[test]
    fn overhead_points_down() {
        assert_eq!(DirectionalLight::overhead().direction, Vec3::NEG_Y);
    }
}
