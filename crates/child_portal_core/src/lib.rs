//! Child data portal: lifecycle dispatch for child business objects.
//! Decides which lifecycle method fires and which status transition follows.

pub mod logging;
pub mod model;
pub mod portal;
pub mod registry;
pub mod target;

pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig,
    LoggingError,
};
pub use model::event::{DataPortalEventArgs, DataPortalOperation};
pub use model::status::ObjectStatus;
pub use portal::child_portal::ChildDataPortal;
pub use portal::error::{
    ChildPortalError, ConstructionError, LifecycleError, LifecycleResult, ServerOperationError,
};
pub use registry::object_registry::{Constructor, ObjectRegistry, RegistryError};
pub use registry::ObjectFactory;
pub use target::{
    downcast_child, ChildCreate, ChildFetch, ChildObject, ChildUpdate, CommandChild,
    DataPortalTarget, EditableChild, Updatable, UpdateTarget,
};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
