use thiserror::Error;

use crate::queue::QueueFull;
use crucible_assets::AssetError;

/// Errors surfaced by the frame and resource APIs.
///
/// Queue overflow is deliberately an error value rather than a panic: callers
/// that submit more than a frame's worth of work get a chance to render and
/// drain instead of aborting.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render command queue full: {0}")]
    CommandQueueFull(QueueFull),

    #[error("light queue full: {0}")]
    LightQueueFull(QueueFull),

    #[error(transparent)]
    Asset(#[from] AssetError),
}
