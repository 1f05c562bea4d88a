use crate::replacer::{FrameId, Replacer};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Strict LRU replacer.
///
/// Tracks unpinned frames in a doubly-linked list ordered by recency of
/// unpin: head is the most recently unpinned frame, tail is the next victim.
/// Links are frame ids rather than pointers, stored in a map that doubles as
/// the position index, so pin/unpin/victim are all O(1).
#[derive(Debug)]
pub struct LruReplacer {
    inner: Mutex<LruList>,
    /// Advisory sizing hint (the pool's frame count). Never enforced:
    /// unpinning more frames than this still tracks them.
    capacity: usize,
}

#[derive(Debug, Clone, Copy)]
struct Links {
    prev: Option<FrameId>,
    next: Option<FrameId>,
}

/// The list nodes live inside `links`; a frame is tracked iff it has an
/// entry there. `next` walks from head toward tail.
#[derive(Debug)]
struct LruList {
    links: HashMap<FrameId, Links>,
    head: Option<FrameId>,
    tail: Option<FrameId>,
}

impl LruList {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            links: HashMap::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    fn push_head(&mut self, frame_id: FrameId) {
        self.links.insert(
            frame_id,
            Links {
                prev: None,
                next: self.head,
            },
        );
        match self.head {
            Some(old_head) => self.links.get_mut(&old_head).unwrap().prev = Some(frame_id),
            None => self.tail = Some(frame_id),
        }
        self.head = Some(frame_id);
    }

    /// Unlink a frame from wherever it sits in the list. Returns false if
    /// the frame was not tracked.
    fn unlink(&mut self, frame_id: FrameId) -> bool {
        let Some(links) = self.links.remove(&frame_id) else {
            return false;
        };
        match links.prev {
            Some(prev) => self.links.get_mut(&prev).unwrap().next = links.next,
            None => self.head = links.next,
        }
        match links.next {
            Some(next) => self.links.get_mut(&next).unwrap().prev = links.prev,
            None => self.tail = links.prev,
        }
        true
    }
}

impl LruReplacer {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(LruList::with_capacity(capacity)),
            capacity,
        }
    }

    /// The configured frame count. Sizing hint only; see `new`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Replacer for LruReplacer {
    fn victim(&self) -> Option<FrameId> {
        let mut inner = self.inner.lock();
        let frame_id = inner.tail?;
        inner.unlink(frame_id);
        log::trace!("frame {} selected as eviction victim", frame_id);
        Some(frame_id)
    }

    fn pin(&self, frame_id: FrameId) {
        let mut inner = self.inner.lock();
        inner.unlink(frame_id);
    }

    fn unpin(&self, frame_id: FrameId) {
        let mut inner = self.inner.lock();
        if inner.links.contains_key(&frame_id) {
            return;
        }
        inner.push_head(frame_id);
    }

    fn size(&self) -> usize {
        self.inner.lock().links.len()
    }
}
