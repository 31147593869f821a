//! Value types shared by the dispatcher and its targets.
//!
//! # Responsibility
//! - Define the operation tags and invocation events handed to hooks.
//! - Provide an embeddable status flag set for editable children.
//!
//! # Invariants
//! - Invocation events are created once per call and never persisted.
//! - Child-level events never carry a parent reference.

pub mod event;
pub mod status;
