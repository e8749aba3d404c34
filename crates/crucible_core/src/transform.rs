//! World-space transform: position, rotation (quaternion), scale.
//!
//! `Transform` is `Copy`, so submitting one to the renderer snapshots it by
//! value.  `matrix()` builds the model ("world") matrix for GPU upload;
//! `view_matrix()` is its inverse, which is what a camera transform becomes
//! at the start of a frame.

use glam::{Mat4, Quat, Vec3};

/// World-space transform component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: Vec3,
    /// Orientation as a unit quaternion.
    pub rotation: Quat,
    /// Non-uniform scale factor.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Identity transform — no translation, no rotation, uniform scale 1.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Construct with a world-space position, identity rotation and scale.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Construct with a position and a look-at rotation.
    ///
    /// `target` — the point to face; `up` — world-up hint (usually `Vec3::Y`).
    /// If `position == target` the rotation stays identity.
    pub fn looking_at(position: Vec3, target: Vec3, up: Vec3) -> Self {
        let dir = (target - position).normalize_or_zero();
        let rotation = if dir.length_squared() < 1e-10 {
            Quat::IDENTITY
        } else {
            Mat4::look_at_rh(position, target, up)
                .to_scale_rotation_translation()
                .1
                .inverse()
        };
        Self {
            position,
            rotation,
            scale: Vec3::ONE,
        }
    }

    /// Build the TRS model matrix (`T * R * S`).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Inverse of [`matrix`](Self::matrix) — the view matrix when this
    /// transform describes a camera.
    pub fn view_matrix(&self) -> Mat4 {
        self.matrix().inverse()
    }

    /// Apply a translation offset in world space.
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Rotate by `angle` radians around the given world-space axis.
    pub fn rotate_axis(&mut self, axis: Vec3, angle: f32) {
        self.rotation = Quat::from_axis_angle(axis, angle) * self.rotation;
    }

    /// Rotate around the world Y axis (yaw).
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotate_axis(Vec3::Y, angle);
    }

    /// Set uniform scale.
    pub fn set_scale_uniform(&mut self, s: f32) {
        self.scale = Vec3::splat(s);
    }

    /// Forward direction in world space (`−Z` rotated by the quaternion).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_matrix() {
        let t = Transform::default();
        assert!((t.matrix() - Mat4::IDENTITY).abs_diff_eq(Mat4::ZERO, 1e-6));
    }

    #[test]
    fn translation_only() {
        let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        let (_, _, pos) = t.matrix().to_scale_rotation_translation();
        assert!((pos - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn view_matrix_is_inverse() {
        let mut t = Transform::from_position(Vec3::new(0.0, 1.0, 5.0));
        t.rotate_y(0.7);
        t.set_scale_uniform(2.0);
        let product = t.matrix() * t.view_matrix();
        assert!(product.abs_diff_eq(Mat4::IDENTITY, 1e-4));
    }

    #[test]
    fn looking_at_faces_target() {
        let t = Transform::looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        assert!((t.forward() - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn looking_at_self_keeps_identity() {
        let p = Vec3::new(3.0, 3.0, 3.0);
        let t = Transform::looking_at(p, p, Vec3::Y);
        assert_eq!(t.rotation, Quat::IDENTITY);
    }
}
