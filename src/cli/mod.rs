// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the linkchain demo binary.
//!
//! Two subcommands: `demo` replays a fixed walkthrough of every list
//! operation, and `run` executes a script of operations given on the
//! command line, printing what the query operations return.

pub mod script;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "linkchain",
    about = "Exercise an owned singly linked list from the command line",
    version
)]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "debug", "linkchain=trace")
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay the built-in walkthrough and print the list before and after reversal
    Demo,

    /// Execute a script of list operations, in order
    ///
    /// Operations: end:V, begin:V, at:V@I, get:I, set:V@I, remove-end,
    /// remove-begin, remove:I, reverse, len, print.
    /// The first failing operation stops the script with a non-zero exit.
    Run {
        /// Operations to execute
        #[arg(required = true, allow_hyphen_values = true)]
        ops: Vec<String>,
    },
}
