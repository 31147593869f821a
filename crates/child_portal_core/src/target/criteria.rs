//! Positional criteria decoding helpers for lifecycle methods.
//!
//! Criteria cross the dispatcher type-erased as `serde_json::Value`; targets
//! decode the arguments they expect with these helpers.

use crate::portal::error::LifecycleError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes the required argument at `index`.
pub fn arg<T: DeserializeOwned>(criteria: &[Value], index: usize) -> Result<T, LifecycleError> {
    let value = criteria
        .get(index)
        .ok_or_else(|| LifecycleError::InvalidCriteria {
            index,
            reason: format!("expected at least {} argument(s), got {}", index + 1, criteria.len()),
        })?;
    serde_json::from_value(value.clone()).map_err(|err| LifecycleError::InvalidCriteria {
        index,
        reason: err.to_string(),
    })
}

/// Decodes the argument at `index`, treating absence or `null` as `None`.
pub fn arg_opt<T: DeserializeOwned>(
    criteria: &[Value],
    index: usize,
) -> Result<Option<T>, LifecycleError> {
    match criteria.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => arg(criteria, index).map(Some),
    }
}

/// Borrows the string argument at `index` without copying.
pub fn arg_str(criteria: &[Value], index: usize) -> Result<&str, LifecycleError> {
    match criteria.get(index) {
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(other) => Err(LifecycleError::InvalidCriteria {
            index,
            reason: format!("expected string, got {other}"),
        }),
        None => Err(LifecycleError::InvalidCriteria {
            index,
            reason: format!("expected at least {} argument(s), got {}", index + 1, criteria.len()),
        }),
    }
}
