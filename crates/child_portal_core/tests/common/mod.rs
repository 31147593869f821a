//! Fixture children shared by the integration tests.
#![allow(dead_code)]

use child_portal_core::target::criteria::{arg_opt, arg_str};
use child_portal_core::{
    ChildCreate, ChildFetch, ChildObject, ChildUpdate, CommandChild, DataPortalEventArgs,
    DataPortalTarget, EditableChild, LifecycleError, LifecycleResult, ObjectStatus, Updatable,
    UpdateTarget,
};
use serde_json::Value;

/// Editable child with every hook implemented; records what happened.
#[derive(Debug, Default)]
pub struct Root {
    pub data: String,
    pub status: ObjectStatus,
    pub journal: Vec<String>,
}

impl DataPortalTarget for Root {
    fn object_type(&self) -> &'static str {
        "Root"
    }

    fn child_on_data_portal_invoke(&mut self, event: &DataPortalEventArgs) -> LifecycleResult {
        assert!(event.parent().is_none());
        self.journal.push(format!("invoke:{}", event.operation()));
        Ok(())
    }

    fn child_on_data_portal_invoke_complete(
        &mut self,
        event: &DataPortalEventArgs,
    ) -> LifecycleResult {
        self.journal.push(format!("complete:{}", event.operation()));
        Ok(())
    }

    fn child_on_data_portal_exception(
        &mut self,
        event: &DataPortalEventArgs,
        error: &LifecycleError,
    ) -> LifecycleResult {
        self.journal
            .push(format!("exception:{}:{error}", event.operation()));
        Ok(())
    }

    fn mark_as_child(&mut self) {
        self.status.mark_as_child();
    }

    fn mark_new(&mut self) {
        self.status.mark_new();
    }

    fn mark_old(&mut self) {
        self.status.mark_old();
    }
}

impl ChildCreate for Root {
    fn child_create(&mut self, criteria: &[Value]) -> LifecycleResult {
        self.data = arg_opt::<String>(criteria, 0)?.unwrap_or_default();
        self.journal.push("create".to_string());
        Ok(())
    }
}

impl ChildFetch for Root {
    fn child_fetch(&mut self, criteria: &[Value]) -> LifecycleResult {
        self.data = arg_str(criteria, 0)?.to_string();
        self.journal.push("fetch".to_string());
        Ok(())
    }
}

impl EditableChild for Root {
    fn is_new(&self) -> bool {
        self.status.is_new
    }

    fn is_deleted(&self) -> bool {
        self.status.is_deleted
    }

    fn child_insert(&mut self, _criteria: &[Value]) -> LifecycleResult {
        self.journal.push("insert".to_string());
        Ok(())
    }

    fn child_update(&mut self, _criteria: &[Value]) -> LifecycleResult {
        self.journal.push("update".to_string());
        Ok(())
    }

    fn child_delete_self(&mut self, _criteria: &[Value]) -> LifecycleResult {
        self.journal.push("delete_self".to_string());
        Ok(())
    }
}

impl Updatable for Root {
    fn update_target(&mut self) -> UpdateTarget<'_> {
        UpdateTarget::Editable(self)
    }
}

impl ChildObject for Root {
    fn as_creatable(&mut self) -> Option<&mut dyn ChildCreate> {
        Some(self)
    }

    fn as_fetchable(&mut self) -> Option<&mut dyn ChildFetch> {
        Some(self)
    }

    fn as_updatable(&mut self) -> Option<UpdateTarget<'_>> {
        Some(UpdateTarget::Editable(self))
    }
}

/// Child that only tracks status flags and skips every notification hook.
#[derive(Debug, Default)]
pub struct Plain {
    pub data: String,
    pub status: ObjectStatus,
}

impl DataPortalTarget for Plain {
    fn mark_as_child(&mut self) {
        self.status.mark_as_child();
    }

    fn mark_new(&mut self) {
        self.status.mark_new();
    }

    fn mark_old(&mut self) {
        self.status.mark_old();
    }
}

impl ChildCreate for Plain {
    fn child_create(&mut self, criteria: &[Value]) -> LifecycleResult {
        self.data = arg_opt::<String>(criteria, 0)?.unwrap_or_default();
        Ok(())
    }
}

impl ChildFetch for Plain {
    fn child_fetch(&mut self, criteria: &[Value]) -> LifecycleResult {
        self.data = arg_str(criteria, 0)?.to_string();
        Ok(())
    }
}

/// One-shot command child.
#[derive(Debug, Default)]
pub struct ReindexCommand {
    pub executions: u32,
    pub status: ObjectStatus,
    pub journal: Vec<String>,
    pub fail: bool,
}

impl DataPortalTarget for ReindexCommand {
    fn object_type(&self) -> &'static str {
        "ReindexCommand"
    }

    fn child_on_data_portal_invoke(&mut self, event: &DataPortalEventArgs) -> LifecycleResult {
        self.journal.push(format!("invoke:{}", event.operation()));
        Ok(())
    }

    fn child_on_data_portal_invoke_complete(
        &mut self,
        event: &DataPortalEventArgs,
    ) -> LifecycleResult {
        self.journal.push(format!("complete:{}", event.operation()));
        Ok(())
    }

    fn child_on_data_portal_exception(
        &mut self,
        event: &DataPortalEventArgs,
        _error: &LifecycleError,
    ) -> LifecycleResult {
        self.journal.push(format!("exception:{}", event.operation()));
        Ok(())
    }

    fn mark_new(&mut self) {
        self.status.mark_new();
        self.journal.push("mark_new".to_string());
    }

    fn mark_old(&mut self) {
        self.status.mark_old();
        self.journal.push("mark_old".to_string());
    }
}

impl CommandChild for ReindexCommand {
    fn child_execute(&mut self, _criteria: &[Value]) -> LifecycleResult {
        if self.fail {
            return Err(LifecycleError::Rejected("index locked".to_string()));
        }
        self.executions += 1;
        Ok(())
    }
}

impl Updatable for ReindexCommand {
    fn update_target(&mut self) -> UpdateTarget<'_> {
        UpdateTarget::Command(self)
    }
}

impl ChildObject for ReindexCommand {
    fn as_updatable(&mut self) -> Option<UpdateTarget<'_>> {
        Some(UpdateTarget::Command(self))
    }
}

/// Child collection coordinator: neither editable nor a command.
#[derive(Debug, Default)]
pub struct LineList {
    pub items: Vec<String>,
    pub updates: u32,
    pub status: ObjectStatus,
}

impl DataPortalTarget for LineList {
    fn object_type(&self) -> &'static str {
        "LineList"
    }

    fn mark_new(&mut self) {
        self.status.mark_new();
    }

    fn mark_old(&mut self) {
        self.status.mark_old();
    }
}

impl ChildUpdate for LineList {
    fn child_update(&mut self, _criteria: &[Value]) -> LifecycleResult {
        self.updates += 1;
        Ok(())
    }
}

impl Updatable for LineList {
    fn update_target(&mut self) -> UpdateTarget<'_> {
        UpdateTarget::Generic(self)
    }
}

impl ChildObject for LineList {
    fn as_updatable(&mut self) -> Option<UpdateTarget<'_>> {
        Some(UpdateTarget::Generic(self))
    }
}

/// Child whose create always fails; its exception hook can fail too.
#[derive(Debug, Default)]
pub struct Faulty {
    pub hook_fails: bool,
    pub seen_errors: Vec<String>,
    pub status: ObjectStatus,
}

impl DataPortalTarget for Faulty {
    fn object_type(&self) -> &'static str {
        "Faulty"
    }

    fn child_on_data_portal_exception(
        &mut self,
        event: &DataPortalEventArgs,
        error: &LifecycleError,
    ) -> LifecycleResult {
        self.seen_errors
            .push(format!("{}:{error}", event.operation()));
        if self.hook_fails {
            return Err(LifecycleError::Rejected("exception hook exploded".to_string()));
        }
        Ok(())
    }

    fn mark_as_child(&mut self) {
        self.status.mark_as_child();
    }

    fn mark_new(&mut self) {
        self.status.mark_new();
    }
}

impl ChildCreate for Faulty {
    fn child_create(&mut self, _criteria: &[Value]) -> LifecycleResult {
        Err(LifecycleError::Rejected("no defaults available".to_string()))
    }
}

/// Same as `Faulty` but its exception hook always fails.
#[derive(Debug)]
pub struct LoudFaulty(pub Faulty);

impl Default for LoudFaulty {
    fn default() -> Self {
        Self(Faulty {
            hook_fails: true,
            ..Faulty::default()
        })
    }
}

impl DataPortalTarget for LoudFaulty {
    fn object_type(&self) -> &'static str {
        "LoudFaulty"
    }

    fn child_on_data_portal_exception(
        &mut self,
        event: &DataPortalEventArgs,
        error: &LifecycleError,
    ) -> LifecycleResult {
        self.0.child_on_data_portal_exception(event, error)
    }
}

impl ChildCreate for LoudFaulty {
    fn child_create(&mut self, criteria: &[Value]) -> LifecycleResult {
        self.0.child_create(criteria)
    }
}

/// Factory-built child that only knows how to fetch.
#[derive(Debug, Default)]
pub struct FetchOnly {
    pub data: String,
    pub seen_errors: Vec<String>,
    pub status: ObjectStatus,
}

impl DataPortalTarget for FetchOnly {
    fn object_type(&self) -> &'static str {
        "FetchOnly"
    }

    fn child_on_data_portal_exception(
        &mut self,
        event: &DataPortalEventArgs,
        error: &LifecycleError,
    ) -> LifecycleResult {
        self.seen_errors
            .push(format!("{}:{error}", event.operation()));
        Ok(())
    }

    fn mark_as_child(&mut self) {
        self.status.mark_as_child();
    }

    fn mark_new(&mut self) {
        self.status.mark_new();
    }

    fn mark_old(&mut self) {
        self.status.mark_old();
    }
}

impl ChildFetch for FetchOnly {
    fn child_fetch(&mut self, criteria: &[Value]) -> LifecycleResult {
        self.data = arg_str(criteria, 0)?.to_string();
        Ok(())
    }
}

impl ChildObject for FetchOnly {
    fn as_fetchable(&mut self) -> Option<&mut dyn ChildFetch> {
        Some(self)
    }
}
