//! Pure governance policy evaluation (no I/O).
//!
//! Input: an immutable plan plus requester and approver identifiers.
//! Output: policy violations folded into a single pass/fail result.
//!
//! There is no error-style control flow in here: every resolution returns an
//! optional value, because "not found" is a legitimate governance outcome.
//! A missing snapshot, owner field, or configuration reference means the
//! condition does not apply, never that evaluation failed.

#![forbid(unsafe_code)]

pub mod checks;
pub mod identity;
pub mod membership;

mod engine;

pub use engine::evaluate;

#[cfg(test)]
mod test_support;
