// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The list itself: an owned chain of boxed nodes.
//!
//! The list keeps only its head link. Length and positional access are
//! computed by walking the chain, so every positional operation is O(n)
//! except `insert_beginning` and `remove_beginning`.
//!
//! Relinking goes through "slots": a `&mut Link` naming either the list's
//! head field or some node's `next` field. Writing a slot is how the head is
//! reassigned and how a node is spliced in or cut out.

use std::fmt;

use tracing::{debug, trace};

use crate::contracts;
use crate::error::{ListError, Result};
use crate::iter::{Iter, Nodes};
use crate::node::{Link, Node};

/// Singly linked list of `i32` values owning all of its nodes.
#[derive(Default)]
pub struct LinkedList {
    head: Link,
}

impl LinkedList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// The first node, or `None` for an empty list.
    pub fn head(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    /// The last node, found by traversal.
    pub fn tail(&self) -> Option<&Node> {
        self.nodes().last()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of reachable nodes. O(n).
    pub fn length(&self) -> usize {
        self.nodes().count()
    }

    /// Iterate over the nodes, head to tail.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            next: self.head.as_deref(),
        }
    }

    /// Iterate over the values, head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: self.nodes(),
        }
    }

    /// Collect the values, head to tail.
    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }

    // ========================================================================
    // INSERTION
    // ========================================================================

    /// Append `value` after the current last node. O(n).
    pub fn insert_end(&mut self, value: i32) -> &mut Node {
        trace!(value, "insert at end");
        self.tail_slot().insert(Box::new(Node::new(value)))
    }

    /// Make `value` the new head. O(1).
    pub fn insert_beginning(&mut self, value: i32) -> &mut Node {
        trace!(value, "insert at beginning");
        let next = self.head.take();
        self.head.insert(Box::new(Node::with_next(value, next)))
    }

    /// Insert `value` so that it ends up at `index`.
    ///
    /// `index == 0` inserts at the beginning and `index == length` appends.
    /// Any other index in between splices the node after `get(index - 1)`.
    pub fn insert_at(&mut self, value: i32, index: usize) -> Result<&mut Node> {
        if index == 0 {
            return Ok(self.insert_beginning(value));
        }

        let length = self.length();
        if index > length {
            return Err(ListError::IndexOutOfRange { index, length });
        }
        if index == length {
            return Ok(self.insert_end(value));
        }

        debug!(value, index, "splice into middle");
        let before = self.get_mut(index - 1)?;
        let next = before.next.take();
        let node = before.next.insert(Box::new(Node::with_next(value, next)));
        Ok(&mut **node)
    }

    // ========================================================================
    // LOOKUP
    // ========================================================================

    /// The node at zero-based `index`.
    pub fn get(&self, index: usize) -> Result<&Node> {
        let length = self.checked_index(index)?;
        let node = self.nodes().nth(index);
        node.ok_or(ListError::IndexOutOfRange { index, length })
    }

    /// Mutable access to the node at zero-based `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Node> {
        let length = self.checked_index(index)?;

        let mut cursor = self.head.as_deref_mut();
        for _ in 0..index {
            cursor = cursor.and_then(|node| node.next.as_deref_mut());
        }
        cursor.ok_or(ListError::IndexOutOfRange { index, length })
    }

    /// Overwrite the value of the node at `index` in place.
    pub fn set(&mut self, value: i32, index: usize) -> Result<&mut Node> {
        let node = self.get_mut(index)?;
        trace!(index, old = node.value, new = value, "set");
        node.value = value;
        Ok(node)
    }

    // ========================================================================
    // REMOVAL
    // ========================================================================

    /// Detach and return the last node.
    pub fn remove_end(&mut self) -> Result<Box<Node>> {
        let length = self.length();
        let removed = match length {
            0 => return Err(ListError::Empty),
            // No second-to-last node exists; the head is the last node.
            1 => self.head.take().ok_or(ListError::Empty)?,
            _ => {
                let before = self.get_mut(length - 2)?;
                before.next.take().ok_or(ListError::IndexOutOfRange {
                    index: length - 1,
                    length,
                })?
            }
        };

        debug!(value = removed.value, "removed from end");
        contracts::check_detached(&removed);
        contracts::check_chain_length(self, length - 1);
        contracts::check_last_is_terminal(self);
        Ok(removed)
    }

    /// Detach and return the head node.
    pub fn remove_beginning(&mut self) -> Result<Box<Node>> {
        let removed = self.pop_front().ok_or(ListError::Empty)?;
        debug!(value = removed.value, "removed from beginning");
        contracts::check_detached(&removed);
        Ok(removed)
    }

    /// Detach and return the node at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Box<Node>> {
        let length = self.checked_index(index)?;
        if index == 0 {
            return self.remove_beginning();
        }
        if index == length - 1 {
            return self.remove_end();
        }

        let before = self.get_mut(index - 1)?;
        let mut removed = before
            .next
            .take()
            .ok_or(ListError::IndexOutOfRange { index, length })?;
        before.next = removed.next.take();

        debug!(value = removed.value, index, "removed from middle");
        contracts::check_detached(&removed);
        contracts::check_chain_length(self, length - 1);
        Ok(removed)
    }

    /// Drop every node, leaving the list empty.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }

    // ========================================================================
    // REVERSAL
    // ========================================================================

    /// Reverse all links in place and return the new head.
    ///
    /// Returns `None` for an empty list. A one-node list is left as is.
    pub fn reverse(&mut self) -> Option<&Node> {
        let length = if cfg!(debug_assertions) {
            self.length()
        } else {
            0
        };

        let mut previous: Link = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = previous;
            previous = Some(node);
        }
        self.head = previous;

        trace!(head = ?self.head.as_ref().map(|node| node.value), "reversed");
        contracts::check_chain_length(self, length);
        self.head.as_deref()
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    /// Validate `index` against the current length, returning the length.
    fn checked_index(&self, index: usize) -> Result<usize> {
        if self.head.is_none() {
            return Err(ListError::Empty);
        }
        let length = self.length();
        if index >= length {
            return Err(ListError::IndexOutOfRange { index, length });
        }
        contracts::check_index_in_bounds(index, length);
        Ok(length)
    }

    /// The empty link after the last node (the head field when empty).
    pub(crate) fn tail_slot(&mut self) -> &mut Link {
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        slot
    }

    /// Unlink the head without logging; shared by removal and draining.
    pub(crate) fn pop_front(&mut self) -> Option<Box<Node>> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        Some(node)
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl Drop for LinkedList {
    /// Unlinks nodes one at a time so long chains never drop recursively.
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for LinkedList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for LinkedList {}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for LinkedList {
    /// Renders `v1->v2->...->vn->END`; an empty list renders as `END`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{}->", value)?;
        }
        f.write_str("END")
    }
}
