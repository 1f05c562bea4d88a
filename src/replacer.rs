use std::fmt::Debug;

/// Identifier of a slot in the buffer pool's frame array.
///
/// Opaque to the replacer: it is only used as a key, never validated against
/// the pool's actual frame count.
pub type FrameId = u32;

/// The replacement protocol a buffer pool manager calls into.
///
/// All methods take `&self`: implementations synchronize internally so a
/// single shared instance can be driven from many worker threads. None of the
/// operations block waiting for another thread to release a frame.
pub trait Replacer: Send + Sync + Debug {
    /// Select a frame to evict and stop tracking it.
    ///
    /// Returns `None` when no frame is evictable. That is a normal outcome
    /// (every frame is pinned, or nothing has been unpinned yet) and the
    /// caller decides whether to block, retry, or fail the request.
    fn victim(&self) -> Option<FrameId>;

    /// Mark a frame as pinned (not evictable).
    ///
    /// Pinning a frame that is not tracked is a no-op, not an error.
    fn pin(&self, frame_id: FrameId);

    /// Mark a frame as unpinned (evictable).
    ///
    /// Idempotent: unpinning an already-tracked frame leaves it where it is.
    fn unpin(&self, frame_id: FrameId);

    /// Get the number of evictable frames.
    fn size(&self) -> usize;
}
