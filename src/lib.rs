//! Owned singly linked list of integers with checked index arithmetic.
//!
//! The list owns a chain of boxed nodes reachable from a single head link.
//! There is no tail pointer and no cached length: both are found by walking
//! the chain. Removals hand the detached node back to the caller as a
//! `Box<Node>`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   node.rs   │────▶│   list.rs    │────▶│   iter.rs   │
//! │ (Node, Link)│     │ (LinkedList, │     │ (Nodes, Iter│
//! │             │     │  insert/     │     │  IntoIter)  │
//! │             │     │  remove/get) │     │             │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │          error.rs  ·  contracts.rs                   │
//! │  (ListError, debug-mode chain invariants)           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use linkchain::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.insert_end(10);
//! list.insert_end(15);
//! list.insert_end(20);
//! list.insert_beginning(5);
//! assert_eq!(list.to_string(), "5->10->15->20->END");
//!
//! let removed = list.remove_end().unwrap();
//! assert_eq!(removed.value, 20);
//!
//! list.reverse();
//! assert_eq!(list.to_vec(), vec![15, 10, 5]);
//! ```

// Module declarations
pub mod contracts;
mod error;
mod iter;
mod list;
mod node;
pub mod testing;

#[cfg(kani)]
mod proofs;

// Re-exports for public API
pub use error::{ListError, Result};
pub use iter::{IntoIter, Iter, Nodes};
pub use list::LinkedList;
pub use node::Node;
