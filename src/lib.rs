//! Page-replacement policy for a buffer pool manager.
//!
//! When a buffer pool runs out of free frames it has to pick one of the
//! in-memory frames to reclaim. This crate tracks which frames are currently
//! evictable and serves that decision. Key components:
//!
//! - **Replacer**: the pin/unpin/victim/size protocol a buffer pool calls into
//! - **LruReplacer**: strict least-recently-used ordering with O(1) operations
//!
//! The tracker knows nothing about page contents, dirtiness, or disk
//! addresses. It only sees frame identifiers and whether each one is pinned.
//! Everything else (frame ownership, disk I/O, deciding when a fetch needs an
//! eviction) belongs to the buffer pool manager that owns the tracker.

pub mod lru;
pub mod replacer;

pub use lru::LruReplacer;
pub use replacer::{FrameId, Replacer};
