//! Stable DTOs shared across the planguard workspace.
//!
//! This crate is intentionally boring:
//! - the evaluation result emitted to callers
//! - the fixed violation message vocabulary
//!
//! The wire shape (`ok`/`errors`, message under the `error` key) is consumed
//! by CI pipelines and must stay stable.

#![forbid(unsafe_code)]

pub mod result;

pub use result::{EvalResult, Tag, Violation, MSG_APPROVAL_REQUIRED, MSG_REQUESTER_NOT_MEMBER};
