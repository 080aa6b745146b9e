//! Use case orchestration for planguard.
//!
//! This crate provides the application layer between the I/O shells (CLI,
//! HTTP service) and the domain: it parses a plan, runs the evaluation, and
//! shapes the outcome for callers. The shells only handle argument parsing,
//! transport, and exit codes.

#![forbid(unsafe_code)]

mod check;

pub use check::{result_exit_code, run_check, serialize_result, split_approvers, CheckInput};
