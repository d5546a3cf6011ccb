// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests, and fuzzing.
//!
//! This module is always compiled but hidden from documentation.
//! `VecModel` is the reference every list operation is checked against.

#![doc(hidden)]

use crate::error::{ListError, Result};
use crate::LinkedList;

/// One list operation, with its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    InsertEnd(i32),
    InsertBeginning(i32),
    /// `(value, index)`
    InsertAt(i32, usize),
    Get(usize),
    /// `(value, index)`
    Set(i32, usize),
    RemoveEnd,
    RemoveBeginning,
    RemoveAt(usize),
    Reverse,
    Length,
}

/// What an operation observed, reduced to plain values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Value of the node the operation returned.
    Node(i32),
    /// Value of the head after reversal.
    Head(Option<i32>),
    Length(usize),
}

impl Op {
    /// Run this operation against a real list.
    pub fn apply(self, list: &mut LinkedList) -> Result<Outcome> {
        let value = match self {
            Op::InsertEnd(value) => list.insert_end(value).value,
            Op::InsertBeginning(value) => list.insert_beginning(value).value,
            Op::InsertAt(value, index) => list.insert_at(value, index)?.value,
            Op::Get(index) => list.get(index)?.value,
            Op::Set(value, index) => list.set(value, index)?.value,
            Op::RemoveEnd => list.remove_end()?.value,
            Op::RemoveBeginning => list.remove_beginning()?.value,
            Op::RemoveAt(index) => list.remove_at(index)?.value,
            Op::Reverse => return Ok(Outcome::Head(list.reverse().map(|node| node.value))),
            Op::Length => return Ok(Outcome::Length(list.length())),
        };
        Ok(Outcome::Node(value))
    }
}

/// Reference model backed by a `Vec<i32>`.
#[derive(Debug, Clone, Default)]
pub struct VecModel {
    values: Vec<i32>,
}

impl VecModel {
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Run this operation against the model.
    pub fn apply(&mut self, op: Op) -> Result<Outcome> {
        let length = self.values.len();
        let value = match op {
            Op::InsertEnd(value) => {
                self.values.push(value);
                value
            }
            Op::InsertBeginning(value) => {
                self.values.insert(0, value);
                value
            }
            Op::InsertAt(value, index) => {
                if index > length {
                    return Err(ListError::IndexOutOfRange { index, length });
                }
                self.values.insert(index, value);
                value
            }
            Op::Get(index) => self.values[self.checked(index)?],
            Op::Set(value, index) => {
                let index = self.checked(index)?;
                self.values[index] = value;
                value
            }
            Op::RemoveEnd => self.values.pop().ok_or(ListError::Empty)?,
            Op::RemoveBeginning => {
                self.checked(0)?;
                self.values.remove(0)
            }
            Op::RemoveAt(index) => {
                let index = self.checked(index)?;
                self.values.remove(index)
            }
            Op::Reverse => {
                self.values.reverse();
                return Ok(Outcome::Head(self.values.first().copied()));
            }
            Op::Length => return Ok(Outcome::Length(length)),
        };
        Ok(Outcome::Node(value))
    }

    fn checked(&self, index: usize) -> Result<usize> {
        let length = self.values.len();
        if length == 0 {
            return Err(ListError::Empty);
        }
        if index >= length {
            return Err(ListError::IndexOutOfRange { index, length });
        }
        Ok(index)
    }
}
