//! Error types surfaced by the child data portal.
//!
//! # Invariants
//! - Lifecycle failures always reach the caller wrapped in
//!   `ServerOperationError`, with the original `LifecycleError` as source.
//! - Construction failures happen before a target exists and are never
//!   wrapped.

use crate::model::event::DataPortalOperation;
use crate::target::ChildObject;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub type LifecycleResult = Result<(), LifecycleError>;

/// Failure raised by a lifecycle method, a hook, or capability lookup.
#[derive(Debug)]
pub enum LifecycleError {
    /// The target does not implement the lifecycle method the operation requires.
    MissingCapability {
        object_type: &'static str,
        method: &'static str,
    },
    /// A positional criteria argument is absent or has the wrong shape.
    InvalidCriteria { index: usize, reason: String },
    /// Domain rule rejected the operation.
    Rejected(String),
    /// Underlying failure raised by the target's own collaborators.
    Failed(Box<dyn Error + Send + Sync>),
}

impl LifecycleError {
    pub fn missing(object_type: &'static str, method: &'static str) -> Self {
        Self::MissingCapability {
            object_type,
            method,
        }
    }

    pub fn failed(err: impl Error + Send + Sync + 'static) -> Self {
        Self::Failed(Box::new(err))
    }

    pub fn is_missing_capability(&self) -> bool {
        matches!(self, Self::MissingCapability { .. })
    }
}

impl Display for LifecycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCapability {
                object_type,
                method,
            } => write!(f, "{object_type} does not implement {method}"),
            Self::InvalidCriteria { index, reason } => {
                write!(f, "invalid criteria argument #{index}: {reason}")
            }
            Self::Rejected(message) => write!(f, "operation rejected: {message}"),
            Self::Failed(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LifecycleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Failed(err) => Some(err.as_ref()),
            Self::MissingCapability { .. } | Self::InvalidCriteria { .. } | Self::Rejected(_) => {
                None
            }
        }
    }
}

/// Object factory failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// No constructor is registered under the requested type name.
    NotRegistered(String),
    /// The registered constructor refused to build an instance.
    Failed { type_name: String, reason: String },
}

impl Display for ConstructionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotRegistered(type_name) => {
                write!(f, "no constructor registered for type: {type_name}")
            }
            Self::Failed { type_name, reason } => {
                write!(f, "failed to construct {type_name}: {reason}")
            }
        }
    }
}

impl Error for ConstructionError {}

/// Lifecycle failure wrapped with the operation it happened under.
///
/// `business_object` carries the partially built instance for Create and
/// Fetch. Update leaves it `None` because the caller still owns the target.
pub struct ServerOperationError<T = ()> {
    operation: DataPortalOperation,
    object_type: &'static str,
    source: LifecycleError,
    business_object: Option<T>,
}

impl<T> ServerOperationError<T> {
    pub(crate) fn new(
        operation: DataPortalOperation,
        object_type: &'static str,
        source: LifecycleError,
        business_object: Option<T>,
    ) -> Self {
        Self {
            operation,
            object_type,
            source,
            business_object,
        }
    }

    pub fn operation(&self) -> DataPortalOperation {
        self.operation
    }

    pub fn object_type(&self) -> &'static str {
        self.object_type
    }

    /// The original failure, unchanged.
    pub fn cause(&self) -> &LifecycleError {
        &self.source
    }

    pub fn business_object(&self) -> Option<&T> {
        self.business_object.as_ref()
    }

    pub fn into_business_object(self) -> Option<T> {
        self.business_object
    }

    pub fn into_cause(self) -> LifecycleError {
        self.source
    }
}

impl<T> Debug for ServerOperationError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerOperationError")
            .field("operation", &self.operation)
            .field("object_type", &self.object_type)
            .field("source", &self.source)
            .field("has_business_object", &self.business_object.is_some())
            .finish()
    }
}

impl<T> Display for ServerOperationError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "child data portal {} failed on the server: {}",
            self.operation, self.source
        )
    }
}

impl<T> Error for ServerOperationError<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Failure of a by-name dispatch.
#[derive(Debug)]
pub enum ChildPortalError {
    Construction(ConstructionError),
    Server(ServerOperationError<Box<dyn ChildObject>>),
}

impl ChildPortalError {
    /// Lifecycle failure, when the call got past construction.
    pub fn cause(&self) -> Option<&LifecycleError> {
        match self {
            Self::Construction(_) => None,
            Self::Server(err) => Some(err.cause()),
        }
    }
}

impl Display for ChildPortalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Construction(err) => write!(f, "{err}"),
            Self::Server(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ChildPortalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Construction(err) => Some(err),
            Self::Server(err) => Some(err),
        }
    }
}

impl From<ConstructionError> for ChildPortalError {
    fn from(value: ConstructionError) -> Self {
        Self::Construction(value)
    }
}

impl From<ServerOperationError<Box<dyn ChildObject>>> for ChildPortalError {
    fn from(value: ServerOperationError<Box<dyn ChildObject>>) -> Self {
        Self::Server(value)
    }
}
