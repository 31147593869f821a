//! Child data portal: lifecycle dispatch for child business objects.
//!
//! # Responsibility
//! - Run create/fetch/update against a child with the fixed order
//!   pre-notify, status transition, lifecycle method, post-notify.
//! - Wrap every lifecycle failure after a best-effort exception hook.
//!
//! # Invariants
//! - The dispatcher holds no state between calls.
//! - A failing exception hook never replaces the original error.
//! - No rollback: a failed call leaves the target as the partial sequence
//!   left it.

pub mod child_portal;
pub mod error;
