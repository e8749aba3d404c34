//! `crucible_core` — value types shared between the renderer and user code.
//!
//! Everything here is plain CPU-side data: transforms, colors and light
//! descriptions.  No GPU types leak into this crate so headless tools and
//! tests can depend on it cheaply.

pub mod color;
pub mod light;
pub mod transform;

pub use color::Color;
pub use light::DirectionalLight;
pub use transform::Transform;

// glam math types — re-exported so callers don't need a direct dependency.
pub use glam;
