//! Operation tags and invocation events.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Data portal operation a child invocation runs under.
///
/// `Execute` is only reported for command children; it is never requested
/// directly by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataPortalOperation {
    Create,
    Fetch,
    Update,
    Execute,
}

impl DataPortalOperation {
    /// Stable label used in error messages and log lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Fetch => "Fetch",
            Self::Update => "Update",
            Self::Execute => "Execute",
        }
    }
}

impl Display for DataPortalOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable record passed to pre/post/error notification hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPortalEventArgs {
    parent: Option<String>,
    object_type: &'static str,
    operation: DataPortalOperation,
}

impl DataPortalEventArgs {
    /// Creates a child-level event. Child invocations have no parent context.
    pub fn child(object_type: &'static str, operation: DataPortalOperation) -> Self {
        Self {
            parent: None,
            object_type,
            operation,
        }
    }

    /// Parent portal context; always `None` at child level.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn object_type(&self) -> &'static str {
        self.object_type
    }

    pub fn operation(&self) -> DataPortalOperation {
        self.operation
    }
}
