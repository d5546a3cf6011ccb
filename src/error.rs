// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors returned by list operations.
//!
//! Allocation failure is not represented here: `Box::new` hands it to the
//! global allocation error handler, which aborts the process.

use thiserror::Error;

/// Error type for positional and structural failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The operation needs at least one node but the list has none.
    #[error("list is empty")]
    Empty,
    /// No node exists at `index`; valid indices are `0..length`.
    #[error("index {index} out of range for list of length {length}")]
    IndexOutOfRange { index: usize, length: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ListError>;
