// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the index arithmetic.
//!
//! Run with: `cargo kani`
//!
//! Lists are bounded to a handful of nodes so the unwinding stays finite.
//!
//! ## Verified Properties
//!
//! 1. **No panics**: positional operations return `Err` instead of panicking
//! 2. **Placement**: `insert_at(v, i)` leaves `v` at `i` for every `i <= length`
//! 3. **Removal**: `remove_at(i)` returns the node `get(i)` returned before

use crate::{LinkedList, ListError};

const MAX_LEN: usize = 3;

fn any_list() -> (LinkedList, usize) {
    let length: usize = kani::any();
    kani::assume(length <= MAX_LEN);
    let mut list = LinkedList::new();
    for _ in 0..length {
        list.insert_end(kani::any());
    }
    (list, length)
}

#[kani::proof]
#[kani::unwind(6)]
fn insert_at_places_value() {
    let (mut list, length) = any_list();
    let index: usize = kani::any();
    let value: i32 = kani::any();

    match list.insert_at(value, index) {
        Ok(node) => {
            assert!(node.value == value);
            assert!(index <= length);
            assert!(list.get(index).map(|n| n.value) == Ok(value));
            assert!(list.length() == length + 1);
        }
        Err(err) => {
            assert!(index > length);
            assert!(err == ListError::IndexOutOfRange { index, length });
        }
    }
}

#[kani::proof]
#[kani::unwind(6)]
fn remove_at_returns_indexed_node() {
    let (mut list, length) = any_list();
    let index: usize = kani::any();
    let before = list.get(index).map(|n| n.value);

    match list.remove_at(index) {
        Ok(node) => {
            assert!(before == Ok(node.value));
            assert!(node.is_last());
            assert!(list.length() == length - 1);
        }
        Err(_) => {
            assert!(index >= length);
            assert!(list.length() == length);
        }
    }
}

#[kani::proof]
#[kani::unwind(6)]
fn remove_end_never_panics() {
    let (mut list, length) = any_list();
    let result = list.remove_end();
    assert!(result.is_ok() == (length > 0));
}
