//! Recency List Module
//!
//! Arena-backed doubly-linked list that orders cache entries for LRU eviction.

use crate::cache::{CacheEntry, CacheKey};

/// Null link marker.
const SENTINEL: usize = usize::MAX;

#[derive(Debug)]
struct Node {
    key: CacheKey,
    /// `None` only while the slot sits on the free list
    entry: Option<CacheEntry>,
    prev: usize,
    next: usize,
}

// == Recency List ==
/// Tracks access order for LRU eviction.
///
/// Nodes live in a `Vec` and link to each other by index:
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// Handles returned by [`RecencyList::push_front`] stay valid until that node
/// is popped. Freed slots are recycled through `free_head`.
#[derive(Debug)]
pub struct RecencyList {
    arena: Vec<Node>,
    head: usize,
    tail: usize,
    free_head: usize,
    len: usize,
}

impl Default for RecencyList {
    fn default() -> Self {
        Self::new()
    }
}

impl RecencyList {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            head: SENTINEL,
            tail: SENTINEL,
            free_head: SENTINEL,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts a new node as most recently used and returns its handle.
    pub fn push_front(&mut self, key: CacheKey, entry: CacheEntry) -> usize {
        let idx = self.alloc_slot(key, entry);
        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Promote ==
    /// Moves the node at `idx` to the head.
    ///
    /// Promoting the current head leaves the list untouched.
    pub fn promote(&mut self, idx: usize) {
        if self.head == idx {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Pop Back ==
    /// Removes and returns the least recently used node.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<(CacheKey, CacheEntry)> {
        if self.tail == SENTINEL {
            return None;
        }
        let idx = self.tail;
        self.unlink(idx);

        let node = &mut self.arena[idx];
        let key = std::mem::take(&mut node.key);
        let entry = node.entry.take();
        node.next = self.free_head;
        self.free_head = idx;
        self.len -= 1;

        entry.map(|entry| (key, entry))
    }

    // == Accessors ==
    /// Returns the entry stored at `idx`.
    pub fn entry(&self, idx: usize) -> Option<&CacheEntry> {
        self.arena.get(idx).and_then(|node| node.entry.as_ref())
    }

    /// Replaces the entry stored at `idx`.
    pub fn replace(&mut self, idx: usize, entry: CacheEntry) {
        if let Some(node) = self.arena.get_mut(idx) {
            if node.entry.is_some() {
                node.entry = Some(entry);
            }
        }
    }

    /// Returns the least recently used key without removing it.
    pub fn peek_back(&self) -> Option<&CacheKey> {
        (self.tail != SENTINEL).then(|| &self.arena[self.tail].key)
    }

    /// Returns the most recently used key.
    pub fn peek_front(&self) -> Option<&CacheKey> {
        (self.head != SENTINEL).then(|| &self.arena[self.head].key)
    }

    /// Iterates keys from most to least recently used.
    pub fn keys(&self) -> Keys<'_> {
        Keys {
            arena: &self.arena,
            current: self.head,
        }
    }

    // == Length ==
    /// Returns the number of linked nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // --- Internal linked-list operations ---

    fn alloc_slot(&mut self, key: CacheKey, entry: CacheEntry) -> usize {
        let node = Node {
            key,
            entry: Some(entry),
            prev: SENTINEL,
            next: SENTINEL,
        };
        if self.free_head != SENTINEL {
            let idx = self.free_head;
            self.free_head = self.arena[idx].next;
            self.arena[idx] = node;
            idx
        } else {
            self.arena.push(node);
            self.arena.len() - 1
        }
    }

    fn unlink(&mut self, idx: usize) {
        let prev = self.arena[idx].prev;
        let next = self.arena[idx].next;

        if prev != SENTINEL {
            self.arena[prev].next = next;
        } else {
            self.head = next;
        }

        if next != SENTINEL {
            self.arena[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.arena[idx].prev = SENTINEL;
        self.arena[idx].next = SENTINEL;
    }

    fn link_front(&mut self, idx: usize) {
        self.arena[idx].prev = SENTINEL;
        self.arena[idx].next = self.head;

        if self.head != SENTINEL {
            self.arena[self.head].prev = idx;
        }
        self.head = idx;

        if self.tail == SENTINEL {
            self.tail = idx;
        }
    }
}

/// Iterator over keys, most recently used first.
pub struct Keys<'a> {
    arena: &'a [Node],
    current: usize,
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a CacheKey;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == SENTINEL {
            return None;
        }
        let node = &self.arena[self.current];
        self.current = node.next;
        Some(&node.key)
    }
}
