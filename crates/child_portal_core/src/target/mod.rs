//! Capability contracts implemented by child business objects.
//!
//! # Responsibility
//! - Express the optional notification and status hooks as defaulted trait
//!   methods, so targets that ignore them need no code.
//! - Express required lifecycle methods as trait methods without defaults.
//! - Describe the three update variants as one closed union.
//!
//! # Invariants
//! - Optional hooks default to no-ops and never fail unless overridden.
//! - `UpdateTarget` is matched exhaustively by the dispatcher; there is no
//!   runtime type test.

use crate::model::event::DataPortalEventArgs;
use crate::portal::error::{LifecycleError, LifecycleResult};
use serde_json::Value;
use std::any::Any;

pub mod criteria;

/// Optional hooks the child data portal calls around every lifecycle method.
pub trait DataPortalTarget {
    /// Type name reported in invocation events and errors.
    fn object_type(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Called before status flags change and before the lifecycle method.
    fn child_on_data_portal_invoke(&mut self, _event: &DataPortalEventArgs) -> LifecycleResult {
        Ok(())
    }

    /// Called after the lifecycle method succeeds.
    fn child_on_data_portal_invoke_complete(
        &mut self,
        _event: &DataPortalEventArgs,
    ) -> LifecycleResult {
        Ok(())
    }

    /// Called when any step of the invocation fails.
    ///
    /// A failure returned from here is discarded; the caller always sees the
    /// original error.
    fn child_on_data_portal_exception(
        &mut self,
        _event: &DataPortalEventArgs,
        _error: &LifecycleError,
    ) -> LifecycleResult {
        Ok(())
    }

    fn mark_as_child(&mut self) {}

    fn mark_new(&mut self) {}

    fn mark_old(&mut self) {}
}

/// Child that can populate itself with default values.
pub trait ChildCreate: DataPortalTarget {
    fn child_create(&mut self, criteria: &[Value]) -> LifecycleResult;
}

/// Child that can load itself from persisted state.
pub trait ChildFetch: DataPortalTarget {
    fn child_fetch(&mut self, criteria: &[Value]) -> LifecycleResult;
}

/// Non-editable updatable child, such as a child collection coordinator.
pub trait ChildUpdate: DataPortalTarget {
    fn child_update(&mut self, criteria: &[Value]) -> LifecycleResult;
}

/// Stateful child tracking new/deleted flags.
pub trait EditableChild: DataPortalTarget {
    fn is_new(&self) -> bool;

    fn is_deleted(&self) -> bool;

    fn child_insert(&mut self, criteria: &[Value]) -> LifecycleResult;

    fn child_update(&mut self, criteria: &[Value]) -> LifecycleResult;

    /// Deletes the persisted row identified by this object's own identity.
    fn child_delete_self(&mut self, criteria: &[Value]) -> LifecycleResult;
}

/// One-shot executable unit without persisted state.
pub trait CommandChild: DataPortalTarget {
    fn child_execute(&mut self, criteria: &[Value]) -> LifecycleResult;
}

/// Structural category of an object being updated.
///
/// Variants are listed in dispatch priority order.
pub enum UpdateTarget<'a> {
    Editable(&'a mut dyn EditableChild),
    Command(&'a mut dyn CommandChild),
    Generic(&'a mut dyn ChildUpdate),
}

/// Objects that can be handed to `ChildDataPortal::update`.
pub trait Updatable: DataPortalTarget {
    fn update_target(&mut self) -> UpdateTarget<'_>;
}

/// Type-erased child built by an `ObjectFactory`.
///
/// Capability queries return `None` unless the type opts in; a `None`
/// answer for the capability an operation needs fails the call with
/// `LifecycleError::MissingCapability`.
pub trait ChildObject: DataPortalTarget + Any {
    fn as_creatable(&mut self) -> Option<&mut dyn ChildCreate> {
        None
    }

    fn as_fetchable(&mut self) -> Option<&mut dyn ChildFetch> {
        None
    }

    fn as_updatable(&mut self) -> Option<UpdateTarget<'_>> {
        None
    }
}

impl std::fmt::Debug for dyn ChildObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChildObject")
            .field("object_type", &self.object_type())
            .finish()
    }
}

/// Recovers the concrete type of a factory-built child.
pub fn downcast_child<T: ChildObject>(object: Box<dyn ChildObject>) -> Option<Box<T>> {
    let object: Box<dyn Any> = object;
    object.downcast::<T>().ok()
}
