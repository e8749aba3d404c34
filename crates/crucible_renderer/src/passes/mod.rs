//! The two fixed stages of a frame.
//!
//! Each pass follows a two-phase **prepare → execute** shape: `prepare`
//! uploads buffer data (not allowed while an encoder is recording a render
//! pass), `execute` records the pass itself.  The frame order is always
//! world pass into the offscreen target, then composite pass into the
//! caller's target view.

pub mod composite_pass;
pub mod world_pass;

pub use composite_pass::CompositePass;
pub use world_pass::WorldPass;
