//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `child_portal_core` linkage without any host framework.
//! - Run one scripted create -> update -> delete cycle through the dispatcher.
//! - Keep output deterministic for quick local sanity checks.

use child_portal_core::target::criteria::arg_str;
use child_portal_core::{
    ChildCreate, ChildDataPortal, DataPortalTarget, EditableChild, LifecycleResult, LoggingConfig,
    ObjectStatus, Updatable, UpdateTarget,
};
use serde_json::{json, Value};
use std::process::ExitCode;

#[derive(Debug, Default)]
struct Probe {
    label: String,
    status: ObjectStatus,
    writes: Vec<&'static str>,
}

impl DataPortalTarget for Probe {
    fn object_type(&self) -> &'static str {
        "Probe"
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

impl ChildCreate for Probe {
    fn child_create(&mut self, criteria: &[Value]) -> LifecycleResult {
        self.label = arg_str(criteria, 0)?.to_string();
        Ok(())
    }
}

impl EditableChild for Probe {
    fn is_new(&self) -> bool {
        self.status.is_new
    }

    fn is_deleted(&self) -> bool {
        self.status.is_deleted
    }

    fn child_insert(&mut self, _criteria: &[Value]) -> LifecycleResult {
        self.writes.push("insert");
        Ok(())
    }

    fn child_update(&mut self, _criteria: &[Value]) -> LifecycleResult {
        self.writes.push("update");
        Ok(())
    }

    fn child_delete_self(&mut self, _criteria: &[Value]) -> LifecycleResult {
        self.writes.push("delete_self");
        Ok(())
    }
}

impl Updatable for Probe {
    fn update_target(&mut self) -> UpdateTarget<'_> {
        UpdateTarget::Editable(self)
    }
}

fn run_probe() -> Result<Probe, Box<dyn std::error::Error>> {
    let portal = ChildDataPortal::new();
    let mut probe: Probe = portal.create(&[json!("smoke")])?;
    portal.update(&mut probe, &[])?;
    portal.update(&mut probe, &[])?;
    probe.status.mark_deleted();
    portal.update(&mut probe, &[])?;
    Ok(probe)
}

fn main() -> ExitCode {
    match LoggingConfig::from_env() {
        Ok(Some(config)) => {
            if let Err(err) = child_portal_core::init_logging_with(&config) {
                eprintln!("logging disabled: {err}");
            }
        }
        Ok(None) => {}
        Err(err) => eprintln!("logging disabled: {err}"),
    }

    println!("child_portal_core ping={}", child_portal_core::ping());
    println!("child_portal_core version={}", child_portal_core::core_version());

    match run_probe() {
        Ok(probe) => {
            log::info!("event=cli_probe module=cli status=ok");
            println!(
                "probe label={} writes={} is_new={}",
                probe.label,
                probe.writes.join(","),
                probe.status.is_new
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("event=cli_probe module=cli status=error error={err}");
            eprintln!("probe failed: {err}");
            ExitCode::FAILURE
        }
    }
}
