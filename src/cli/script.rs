// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Operation scripts for the `run` and `demo` subcommands.
//!
//! A script is a sequence of short tokens such as `end:10` or `at:8@3`.
//! Mutating steps print nothing (they log at `info`); `get`, `len` and
//! `print` write one line each to the output.

use std::io::Write;
use std::num::ParseIntError;
use std::str::FromStr;

use anyhow::Context;
use linkchain::LinkedList;
use thiserror::Error;
use tracing::info;

/// The walkthrough replayed by `linkchain demo`.
pub const DEMO_SCRIPT: &[&str] = &[
    "end:10",
    "end:15",
    "end:20",
    "begin:5",
    "begin:4",
    "begin:3",
    "get:3",
    "at:8@3",
    "at:1@0",
    "at:25@7",
    "remove-end",
    "remove-begin",
    "remove:0",
    "remove:5",
    "remove:2",
    "set:2@0",
    "len",
    "print",
    "reverse",
    "print",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown operation `{0}`")]
    UnknownOp(String),
    #[error("operation `{0}` needs an argument")]
    MissingArgument(String),
    #[error("`{input}` is not a valid integer: {source}")]
    InvalidNumber {
        input: String,
        source: ParseIntError,
    },
    #[error("index {0} out of range: indices start at 0")]
    NegativeIndex(i64),
}

/// One parsed script step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    InsertEnd(i32),
    InsertBeginning(i32),
    InsertAt { value: i32, index: usize },
    Get(usize),
    Set { value: i32, index: usize },
    RemoveEnd,
    RemoveBeginning,
    RemoveAt(usize),
    Reverse,
    Length,
    Print,
}

fn parse_value(input: &str) -> Result<i32, ScriptError> {
    input.trim().parse().map_err(|source| ScriptError::InvalidNumber {
        input: input.to_string(),
        source,
    })
}

fn parse_index(input: &str) -> Result<usize, ScriptError> {
    let signed: i64 = input
        .trim()
        .parse()
        .map_err(|source| ScriptError::InvalidNumber {
            input: input.to_string(),
            source,
        })?;
    usize::try_from(signed).map_err(|_| ScriptError::NegativeIndex(signed))
}

/// Split `V@I` into a value and an index.
fn parse_value_at(op: &str, arg: &str) -> Result<(i32, usize), ScriptError> {
    let (value, index) = arg
        .split_once('@')
        .ok_or_else(|| ScriptError::MissingArgument(op.to_string()))?;
    Ok((parse_value(value)?, parse_index(index)?))
}

impl FromStr for Step {
    type Err = ScriptError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (op, arg) = match token.split_once(':') {
            Some((op, arg)) => (op, Some(arg)),
            None => (token, None),
        };
        let need = || arg.ok_or_else(|| ScriptError::MissingArgument(op.to_string()));

        match op {
            "end" => Ok(Step::InsertEnd(parse_value(need()?)?)),
            "begin" => Ok(Step::InsertBeginning(parse_value(need()?)?)),
            "at" => {
                let (value, index) = parse_value_at(op, need()?)?;
                Ok(Step::InsertAt { value, index })
            }
            "get" => Ok(Step::Get(parse_index(need()?)?)),
            "set" => {
                let (value, index) = parse_value_at(op, need()?)?;
                Ok(Step::Set { value, index })
            }
            "remove-end" => Ok(Step::RemoveEnd),
            "remove-begin" => Ok(Step::RemoveBeginning),
            "remove" => Ok(Step::RemoveAt(parse_index(need()?)?)),
            "reverse" => Ok(Step::Reverse),
            "len" => Ok(Step::Length),
            "print" => Ok(Step::Print),
            _ => Err(ScriptError::UnknownOp(token.to_string())),
        }
    }
}

impl Step {
    /// Apply this step to `list`, writing query results to `out`.
    pub fn execute<W: Write>(self, list: &mut LinkedList, out: &mut W) -> anyhow::Result<()> {
        match self {
            Step::InsertEnd(value) => {
                list.insert_end(value);
                info!(value, "inserted at end");
            }
            Step::InsertBeginning(value) => {
                list.insert_beginning(value);
                info!(value, "inserted at beginning");
            }
            Step::InsertAt { value, index } => {
                list.insert_at(value, index)?;
                info!(value, index, "inserted");
            }
            Step::Get(index) => writeln!(out, "{}", list.get(index)?.value)?,
            Step::Set { value, index } => {
                list.set(value, index)?;
                info!(value, index, "set");
            }
            Step::RemoveEnd => {
                let node = list.remove_end()?;
                info!(value = node.value, "removed from end");
            }
            Step::RemoveBeginning => {
                let node = list.remove_beginning()?;
                info!(value = node.value, "removed from beginning");
            }
            Step::RemoveAt(index) => {
                let node = list.remove_at(index)?;
                info!(value = node.value, index, "removed");
            }
            Step::Reverse => {
                let head = list.reverse().map(|node| node.value);
                info!(?head, "reversed");
            }
            Step::Length => writeln!(out, "Length of the list: {}", list.length())?,
            Step::Print => writeln!(out, "{}", list)?,
        }
        Ok(())
    }
}

/// Parse every token up front, then execute them in order against `list`.
pub fn run_script<S, W>(tokens: &[S], list: &mut LinkedList, out: &mut W) -> anyhow::Result<()>
where
    S: AsRef<str>,
    W: Write,
{
    let steps = tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            token
                .parse::<Step>()
                .with_context(|| format!("cannot parse `{}`", token))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    for (step, token) in steps.into_iter().zip(tokens) {
        step.execute(list, out)
            .with_context(|| format!("`{}` failed", token.as_ref()))?;
    }
    Ok(())
}
