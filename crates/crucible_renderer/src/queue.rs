//! Per-frame accumulation queues.
//!
//! Draw commands and lights pile up here between `render` calls.  Both
//! queues are bounded: the capacity is allocated once and an over-full push
//! returns [`QueueFull`] instead of growing or aborting.  `render` drains
//! them exactly once, which resets the logical length to zero while keeping
//! the allocation — the same freshness contract as a fixed array with a
//! count.

use thiserror::Error;

use crucible_core::{DirectionalLight, Transform};

use crate::geometry::Mesh;
use crate::texture::Texture;

/// Most draw commands a single frame may hold.
pub const MAX_RENDER_COMMANDS: usize = 1024;
/// Most directional lights a single frame may hold.
pub const MAX_LIGHTS: usize = 64;

/// A bounded push attempted on a full queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("capacity {capacity} exceeded")]
pub struct QueueFull {
    pub capacity: usize,
}

/// Fixed-capacity FIFO used for per-frame submissions.
///
/// Single-threaded: the graphics context owns both queues and is itself
/// `&mut`-threaded through every mutation.
pub struct BoundedQueue<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// O(1) append.  Fails once `len() == capacity()`.
    pub fn push(&mut self, item: T) -> Result<(), QueueFull> {
        if self.items.len() >= self.capacity {
            return Err(QueueFull {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes and yields every queued item in submission order.  The
    /// backing allocation is kept, so the queue is immediately reusable at
    /// full capacity.
    pub fn drain(&mut self) -> std::vec::Drain<'_, T> {
        self.items.drain(..)
    }
}

/// One frame's instruction to draw `mesh` with `diffuse` under `transform`.
///
/// Mesh and texture handles are `Arc`-backed clones, so a queued command
/// keeps its resources alive until the frame that consumes it — submitters
/// are free to drop their own handles immediately.
pub struct RenderCommand {
    pub transform: Transform,
    pub mesh: Mesh,
    pub diffuse: Texture,
}

/// The pair of per-frame queues owned by the graphics context.
pub struct RenderQueue {
    pub commands: BoundedQueue<RenderCommand>,
    pub lights: BoundedQueue<DirectionalLight>,
}

impl RenderQueue {
    pub fn new() -> Self {
        Self {
            commands: BoundedQueue::new(MAX_RENDER_COMMANDS),
            lights: BoundedQueue::new(MAX_LIGHTS),
        }
    }
}

impl Default for RenderQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_up_to_capacity() {
        let mut q = BoundedQueue::new(3);
        for i in 0..3 {
            q.push(i).unwrap();
        }
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn push_past_capacity_errors() {
        let mut q = BoundedQueue::new(2);
        q.push(1).unwrap();
        q.push(2).unwrap();
        assert_eq!(q.push(3), Err(QueueFull { capacity: 2 }));
        // the failed push must not clobber queued items
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn drain_preserves_submission_order() {
        let mut q = BoundedQueue::new(8);
        for i in 0..5 {
            q.push(i).unwrap();
        }
        let drained: Vec<i32> = q.drain().collect();
        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_resets_length_not_capacity() {
        let mut q = BoundedQueue::new(4);
        q.push(7).unwrap();
        q.drain().for_each(drop);
        assert_eq!(q.len(), 0);
        assert_eq!(q.capacity(), 4);
        // the slot freed by the drain is reusable
        q.push(8).unwrap();
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn render_queue_capacities_match_frame_limits() {
        let q = RenderQueue::new();
        assert_eq!(q.commands.capacity(), MAX_RENDER_COMMANDS);
        assert_eq!(q.lights.capacity(), MAX_LIGHTS);
    }
}
