//! Child invocation dispatcher.

use crate::model::event::{DataPortalEventArgs, DataPortalOperation};
use crate::portal::error::{ChildPortalError, LifecycleError, LifecycleResult, ServerOperationError};
use crate::registry::ObjectFactory;
use crate::target::{ChildCreate, ChildFetch, ChildObject, DataPortalTarget, Updatable, UpdateTarget};
use log::{debug, error, warn};
use serde_json::Value;

const CHILD_CREATE: &str = "Child_Create";
const CHILD_FETCH: &str = "Child_Fetch";
const CHILD_UPDATE: &str = "Child_Update";

/// Status transition applied between the pre-invoke hook and the lifecycle
/// method of create/fetch.
#[derive(Debug, Clone, Copy)]
enum Transition {
    NewChild,
    OldChild,
}

/// Invokes lifecycle methods on child objects.
///
/// Stateless; one value can serve concurrent calls on different targets.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChildDataPortal;

impl ChildDataPortal {
    pub fn new() -> Self {
        Self
    }

    /// Builds a new child and lets it populate default values.
    ///
    /// On success the child is marked child + new.
    pub fn create<T>(&self, criteria: &[Value]) -> Result<T, ServerOperationError<T>>
    where
        T: ChildCreate + Default,
    {
        let mut object = T::default();
        let event = DataPortalEventArgs::child(object.object_type(), DataPortalOperation::Create);
        log_start(&event);

        let result = populate(&mut object, &event, Transition::NewChild, |target| {
            target.child_create(criteria)
        });
        match result {
            Ok(()) => {
                log_ok(&event);
                Ok(object)
            }
            Err(err) => {
                notify_exception(&mut object, &event, &err);
                Err(wrap_failure(&event, err, Some(object)))
            }
        }
    }

    /// Builds a child and loads it from persisted state.
    ///
    /// On success the child is marked child + old.
    pub fn fetch<T>(&self, criteria: &[Value]) -> Result<T, ServerOperationError<T>>
    where
        T: ChildFetch + Default,
    {
        let mut object = T::default();
        let event = DataPortalEventArgs::child(object.object_type(), DataPortalOperation::Fetch);
        log_start(&event);

        let result = populate(&mut object, &event, Transition::OldChild, |target| {
            target.child_fetch(criteria)
        });
        match result {
            Ok(()) => {
                log_ok(&event);
                Ok(object)
            }
            Err(err) => {
                notify_exception(&mut object, &event, &err);
                Err(wrap_failure(&event, err, Some(object)))
            }
        }
    }

    /// Persists a caller-owned child according to its update variant.
    ///
    /// On failure the returned error carries no business object: the caller
    /// still holds `object`, left as the partial sequence left it.
    pub fn update<T>(&self, object: &mut T, criteria: &[Value]) -> Result<(), ServerOperationError>
    where
        T: Updatable + ?Sized,
    {
        let object_type = object.object_type();
        let mut operation = DataPortalOperation::Update;
        log_start(&DataPortalEventArgs::child(object_type, operation));

        let result = run_update(object, &mut operation, criteria);
        finish_update(object, DataPortalEventArgs::child(object_type, operation), result)
    }

    /// Builds a child by registered type name and lets it populate defaults.
    ///
    /// Fails with `ChildPortalError::Construction` when the factory cannot
    /// build the type; a type without create support fails with a wrapped
    /// `LifecycleError::MissingCapability`.
    pub fn create_by_name(
        &self,
        factory: &dyn ObjectFactory,
        type_name: &str,
        criteria: &[Value],
    ) -> Result<Box<dyn ChildObject>, ChildPortalError> {
        let mut object = factory.create_instance(type_name)?;
        let event = DataPortalEventArgs::child(object.object_type(), DataPortalOperation::Create);
        log_start(&event);

        let result = populate(&mut *object, &event, Transition::NewChild, |target| {
            match target.as_creatable() {
                Some(creatable) => creatable.child_create(criteria),
                None => Err(LifecycleError::missing(event.object_type(), CHILD_CREATE)),
            }
        });
        match result {
            Ok(()) => {
                log_ok(&event);
                Ok(object)
            }
            Err(err) => {
                notify_exception(&mut *object, &event, &err);
                Err(wrap_failure(&event, err, Some(object)).into())
            }
        }
    }

    /// Builds a child by registered type name and loads it.
    pub fn fetch_by_name(
        &self,
        factory: &dyn ObjectFactory,
        type_name: &str,
        criteria: &[Value],
    ) -> Result<Box<dyn ChildObject>, ChildPortalError> {
        let mut object = factory.create_instance(type_name)?;
        let event = DataPortalEventArgs::child(object.object_type(), DataPortalOperation::Fetch);
        log_start(&event);

        let result = populate(&mut *object, &event, Transition::OldChild, |target| {
            match target.as_fetchable() {
                Some(fetchable) => fetchable.child_fetch(criteria),
                None => Err(LifecycleError::missing(event.object_type(), CHILD_FETCH)),
            }
        });
        match result {
            Ok(()) => {
                log_ok(&event);
                Ok(object)
            }
            Err(err) => {
                notify_exception(&mut *object, &event, &err);
                Err(wrap_failure(&event, err, Some(object)).into())
            }
        }
    }

    /// Persists a type-erased child according to its update variant.
    ///
    /// A child that reports no update variant fails with a wrapped
    /// `LifecycleError::MissingCapability` for `Child_Update`.
    pub fn update_dyn(
        &self,
        object: &mut dyn ChildObject,
        criteria: &[Value],
    ) -> Result<(), ServerOperationError> {
        let object_type = object.object_type();
        let mut operation = DataPortalOperation::Update;
        log_start(&DataPortalEventArgs::child(object_type, operation));

        let result = run_update_dyn(object, &mut operation, criteria);
        finish_update(object, DataPortalEventArgs::child(object_type, operation), result)
    }

    /// Updates every child in order, stopping at the first failure.
    ///
    /// Returns how many children were updated.
    pub fn update_children<'a, I>(
        &self,
        children: I,
        criteria: &[Value],
    ) -> Result<usize, ServerOperationError>
    where
        I: IntoIterator<Item = &'a mut Box<dyn ChildObject>>,
    {
        let mut updated = 0;
        for child in children {
            if let Err(err) = self.update_dyn(&mut **child, criteria) {
                warn!(
                    "event=child_portal_update_children module=portal status=error index={} object_type={}",
                    updated,
                    err.object_type()
                );
                return Err(err);
            }
            updated += 1;
        }
        Ok(updated)
    }
}

fn populate<T>(
    target: &mut T,
    event: &DataPortalEventArgs,
    transition: Transition,
    lifecycle: impl FnOnce(&mut T) -> LifecycleResult,
) -> LifecycleResult
where
    T: DataPortalTarget + ?Sized,
{
    target.child_on_data_portal_invoke(event)?;
    target.mark_as_child();
    match transition {
        Transition::NewChild => target.mark_new(),
        Transition::OldChild => target.mark_old(),
    }
    lifecycle(target)?;
    target.child_on_data_portal_invoke_complete(event)
}

fn run_update<T>(
    object: &mut T,
    operation: &mut DataPortalOperation,
    criteria: &[Value],
) -> LifecycleResult
where
    T: Updatable + ?Sized,
{
    let object_type = object.object_type();
    object.child_on_data_portal_invoke(&DataPortalEventArgs::child(object_type, *operation))?;
    dispatch_update(object.update_target(), operation, criteria)?;
    object.child_on_data_portal_invoke_complete(&DataPortalEventArgs::child(object_type, *operation))
}

fn run_update_dyn(
    object: &mut dyn ChildObject,
    operation: &mut DataPortalOperation,
    criteria: &[Value],
) -> LifecycleResult {
    let object_type = object.object_type();
    object.child_on_data_portal_invoke(&DataPortalEventArgs::child(object_type, *operation))?;
    match object.as_updatable() {
        Some(target) => dispatch_update(target, operation, criteria)?,
        None => return Err(LifecycleError::missing(object_type, CHILD_UPDATE)),
    }
    object.child_on_data_portal_invoke_complete(&DataPortalEventArgs::child(object_type, *operation))
}

fn dispatch_update(
    target: UpdateTarget<'_>,
    operation: &mut DataPortalOperation,
    criteria: &[Value],
) -> LifecycleResult {
    match target {
        UpdateTarget::Editable(child) => {
            if child.is_deleted() {
                if child.is_new() {
                    log_branch(child.object_type(), "discard_new");
                } else {
                    log_branch(child.object_type(), "delete_self");
                    child.child_delete_self(criteria)?;
                }
                child.mark_new();
            } else {
                if child.is_new() {
                    log_branch(child.object_type(), "insert");
                    child.child_insert(criteria)?;
                } else {
                    log_branch(child.object_type(), "update");
                    child.child_update(criteria)?;
                }
                child.mark_old();
            }
        }
        UpdateTarget::Command(command) => {
            log_branch(command.object_type(), "execute");
            command.child_execute(criteria)?;
            *operation = DataPortalOperation::Execute;
        }
        UpdateTarget::Generic(updatable) => {
            log_branch(updatable.object_type(), "generic");
            updatable.child_update(criteria)?;
            updatable.mark_old();
        }
    }
    Ok(())
}

fn finish_update<T>(
    object: &mut T,
    event: DataPortalEventArgs,
    result: LifecycleResult,
) -> Result<(), ServerOperationError>
where
    T: DataPortalTarget + ?Sized,
{
    match result {
        Ok(()) => {
            log_ok(&event);
            Ok(())
        }
        Err(err) => {
            notify_exception(object, &event, &err);
            Err(wrap_failure(&event, err, None))
        }
    }
}

fn notify_exception<T>(target: &mut T, event: &DataPortalEventArgs, err: &LifecycleError)
where
    T: DataPortalTarget + ?Sized,
{
    if let Err(hook_err) = target.child_on_data_portal_exception(event, err) {
        warn!(
            "event=child_portal_exception_hook module=portal status=swallowed operation={} object_type={} hook_error={}",
            event.operation(),
            event.object_type(),
            hook_err
        );
    }
}

fn wrap_failure<T>(
    event: &DataPortalEventArgs,
    err: LifecycleError,
    business_object: Option<T>,
) -> ServerOperationError<T> {
    error!(
        "event=child_portal_invoke module=portal status=error operation={} object_type={} error={}",
        event.operation(),
        event.object_type(),
        err
    );
    ServerOperationError::new(event.operation(), event.object_type(), err, business_object)
}

fn log_start(event: &DataPortalEventArgs) {
    debug!(
        "event=child_portal_invoke module=portal status=start operation={} object_type={}",
        event.operation(),
        event.object_type()
    );
}

fn log_ok(event: &DataPortalEventArgs) {
    debug!(
        "event=child_portal_invoke module=portal status=ok operation={} object_type={}",
        event.operation(),
        event.object_type()
    );
}

fn log_branch(object_type: &str, branch: &str) {
    debug!("event=child_portal_update module=portal object_type={object_type} branch={branch}");
}
