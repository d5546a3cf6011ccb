// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Traversal of the chain, head to tail.

use crate::node::Node;
use crate::LinkedList;

/// Borrowing iterator over the nodes of a list.
#[derive(Clone)]
pub struct Nodes<'a> {
    pub(crate) next: Option<&'a Node>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Node;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        Some(node)
    }
}

/// Borrowing iterator over the values of a list.
#[derive(Clone)]
pub struct Iter<'a> {
    pub(crate) nodes: Nodes<'a>,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        self.nodes.next().map(|node| node.value)
    }
}

/// Consuming iterator; detaches nodes from the front one at a time.
pub struct IntoIter {
    pub(crate) list: LinkedList,
}

impl Iterator for IntoIter {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.list.pop_front().map(|node| node.value)
    }
}

impl IntoIterator for LinkedList {
    type Item = i32;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter { list: self }
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl FromIterator<i32> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl Extend<i32> for LinkedList {
    /// Appends every value, walking to the tail once rather than per value.
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        let mut slot = self.tail_slot();
        for value in iter {
            let node = slot.insert(Box::new(Node::new(value)));
            slot = &mut node.next;
        }
    }
}
