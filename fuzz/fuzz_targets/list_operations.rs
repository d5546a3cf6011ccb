// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Differential fuzz target: random operation sequences against a Vec model.
//!
//! Index arithmetic is where a singly linked list goes wrong. The fuzzer
//! drives arbitrary inserts, removals, lookups and reversals with unbounded
//! indices, and the list must agree with `VecModel` after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linkchain::testing::{Op, VecModel};
use linkchain::LinkedList;

#[derive(Debug, Arbitrary)]
enum FuzzOp {
    InsertEnd(i32),
    InsertBeginning(i32),
    InsertAt(i32, u8),
    Get(u8),
    Set(i32, u8),
    RemoveEnd,
    RemoveBeginning,
    RemoveAt(u8),
    Reverse,
    Length,
    /// Full-width index, mostly out of range.
    GetWide(usize),
}

impl From<FuzzOp> for Op {
    fn from(op: FuzzOp) -> Self {
        match op {
            FuzzOp::InsertEnd(v) => Op::InsertEnd(v),
            FuzzOp::InsertBeginning(v) => Op::InsertBeginning(v),
            FuzzOp::InsertAt(v, i) => Op::InsertAt(v, i as usize),
            FuzzOp::Get(i) => Op::Get(i as usize),
            FuzzOp::Set(v, i) => Op::Set(v, i as usize),
            FuzzOp::RemoveEnd => Op::RemoveEnd,
            FuzzOp::RemoveBeginning => Op::RemoveBeginning,
            FuzzOp::RemoveAt(i) => Op::RemoveAt(i as usize),
            FuzzOp::Reverse => Op::Reverse,
            FuzzOp::Length => Op::Length,
            FuzzOp::GetWide(i) => Op::Get(i),
        }
    }
}

fuzz_target!(|ops: Vec<FuzzOp>| {
    let mut list = LinkedList::new();
    let mut model = VecModel::default();

    for op in ops {
        let op = Op::from(op);

        // Property 1: same outcome, including the exact error
        let expected = model.apply(op);
        let actual = op.apply(&mut list);
        assert_eq!(actual, expected, "diverged on {:?}", op);

        // Property 2: same contents after every step
        assert_eq!(list.to_vec(), model.values(), "contents diverged after {:?}", op);
    }

    // Property 3: rendering agrees with the final contents
    let rendered = list.to_string();
    assert!(rendered.ends_with("END"));
    assert_eq!(rendered.matches("->").count(), model.values().len());
});
