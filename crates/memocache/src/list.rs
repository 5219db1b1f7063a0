//! Recency-ordered list backing the cache.
//!
//! An arena of slots addressed by stable handles, linked into a doubly-linked
//! list. Each slot stores prev/next handles, so detaching an arbitrary node is
//! O(1). Freed slots go onto a free list and are reused before the arena grows.

use crate::error::{Error, Result};

/// Stable reference to a node in the recency list.
///
/// Valid from the `push_front` that created the node until the node is
/// removed or popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Handle(usize);

struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<Handle>,
    next: Option<Handle>,
}

/// Doubly-linked list over an arena, most-recent at the head.
pub(crate) struct RecencyList<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    head: Option<Handle>,
    tail: Option<Handle>,
    free: Vec<usize>,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free: Vec::new(),
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a new node at the most-recent end.
    pub(crate) fn push_front(&mut self, key: K, value: V) -> Handle {
        let idx = self.alloc();
        self.slots[idx] = Some(Node {
            key,
            value,
            prev: None,
            next: self.head,
        });
        let handle = Handle(idx);

        if let Some(Handle(head_idx)) = self.head {
            if let Some(head) = &mut self.slots[head_idx] {
                head.prev = Some(handle);
            }
        }

        self.head = Some(handle);
        if self.tail.is_none() {
            self.tail = Some(handle);
        }
        self.len += 1;
        handle
    }

    /// Relocate a node to the most-recent end, preserving the relative order
    /// of every other node.
    pub(crate) fn move_to_front(&mut self, handle: Handle) {
        if self.head == Some(handle) {
            return; // Already at front
        }

        self.unlink(handle);

        if let Some(node) = &mut self.slots[handle.0] {
            node.prev = None;
            node.next = self.head;
        }

        if let Some(Handle(head_idx)) = self.head {
            if let Some(head) = &mut self.slots[head_idx] {
                head.prev = Some(handle);
            }
        }

        self.head = Some(handle);
    }

    /// Detach the node behind `handle` and recycle its slot. The handle is
    /// invalid afterwards.
    pub(crate) fn remove(&mut self, handle: Handle) -> Option<(K, V)> {
        self.slots.get(handle.0)?.as_ref()?;
        self.unlink(handle);
        self.free.push(handle.0);
        self.len -= 1;
        self.slots[handle.0]
            .take()
            .map(|node| (node.key, node.value))
    }

    /// Handle of the current least-recent node.
    pub(crate) fn peek_back(&self) -> Result<Handle> {
        self.tail.ok_or(Error::Empty)
    }

    /// Remove and return the least-recent node's payload.
    pub(crate) fn pop_back(&mut self) -> Result<(K, V)> {
        let tail = self.tail.ok_or(Error::Empty)?;
        self.unlink(tail);
        self.free.push(tail.0);
        self.len -= 1;
        self.slots[tail.0]
            .take()
            .map(|node| (node.key, node.value))
            .ok_or(Error::Empty)
    }

    pub(crate) fn key(&self, handle: Handle) -> Option<&K> {
        self.slots.get(handle.0)?.as_ref().map(|node| &node.key)
    }

    pub(crate) fn value(&self, handle: Handle) -> Option<&V> {
        self.slots.get(handle.0)?.as_ref().map(|node| &node.value)
    }

    pub(crate) fn value_mut(&mut self, handle: Handle) -> Option<&mut V> {
        self.slots
            .get_mut(handle.0)?
            .as_mut()
            .map(|node| &mut node.value)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Walk entries most-recent to least-recent. Read-only; never changes
    /// the order.
    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            next: self.head,
        }
    }

    fn unlink(&mut self, handle: Handle) {
        let (prev, next) = match &self.slots[handle.0] {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_handle) => {
                if let Some(prev_node) = &mut self.slots[prev_handle.0] {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_handle) => {
                if let Some(next_node) = &mut self.slots[next_handle.0] {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    fn alloc(&mut self) -> usize {
        if let Some(idx) = self.free.pop() {
            idx
        } else {
            self.slots.push(None);
            self.slots.len() - 1
        }
    }
}

/// Iterator over entries, most-recent first.
pub(crate) struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    next: Option<Handle>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.next?;
        let node = self.list.slots[handle.0].as_ref()?;
        self.next = node.next;
        Some((&node.key, &node.value))
    }
}
