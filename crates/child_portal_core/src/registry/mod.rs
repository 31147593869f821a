//! Object factory contract and in-process registry.
//!
//! # Responsibility
//! - Build fresh child instances by type name for by-name dispatch.
//! - Let types register their own no-argument constructors, so private
//!   state never needs to be reachable from the dispatcher.
//!
//! # Invariants
//! - Type names are trimmed before storage and lookup.
//! - One constructor per type name.

pub mod object_registry;

use crate::portal::error::ConstructionError;
use crate::target::ChildObject;

/// Constructs a new instance of a named type.
pub trait ObjectFactory {
    fn create_instance(&self, type_name: &str) -> Result<Box<dyn ChildObject>, ConstructionError>;
}
