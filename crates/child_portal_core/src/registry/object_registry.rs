//! Registry-backed object factory.

use crate::portal::error::ConstructionError;
use crate::registry::ObjectFactory;
use crate::target::ChildObject;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fallible no-argument constructor for one registered type.
pub type Constructor = fn() -> Result<Box<dyn ChildObject>, String>;

/// Type registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    InvalidTypeName(String),
    DuplicateTypeName(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTypeName(value) => write!(f, "type name is invalid: `{value}`"),
            Self::DuplicateTypeName(value) => {
                write!(f, "type name already registered: {value}")
            }
        }
    }
}

impl Error for RegistryError {}

/// In-process constructor registry keyed by type name.
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    constructors: BTreeMap<String, Constructor>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` under `type_name`, constructed through `Default`.
    pub fn register<T: ChildObject + Default>(
        &mut self,
        type_name: &str,
    ) -> Result<(), RegistryError> {
        self.register_constructor(type_name, construct_default::<T>)
    }

    /// Registers a fallible constructor under `type_name`.
    pub fn register_constructor(
        &mut self,
        type_name: &str,
        constructor: Constructor,
    ) -> Result<(), RegistryError> {
        let type_name = type_name.trim().to_string();
        if !is_valid_type_name(&type_name) {
            return Err(RegistryError::InvalidTypeName(type_name));
        }
        if self.constructors.contains_key(type_name.as_str()) {
            return Err(RegistryError::DuplicateTypeName(type_name));
        }

        log::debug!("event=type_registered module=registry status=ok type_name={type_name}");
        self.constructors.insert(type_name, constructor);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.constructors.contains_key(type_name.trim())
    }

    /// Returns sorted registered type names.
    pub fn type_names(&self) -> Vec<String> {
        self.constructors.keys().cloned().collect()
    }
}

impl ObjectFactory for ObjectRegistry {
    fn create_instance(&self, type_name: &str) -> Result<Box<dyn ChildObject>, ConstructionError> {
        let normalized = type_name.trim();
        let constructor = self
            .constructors
            .get(normalized)
            .ok_or_else(|| ConstructionError::NotRegistered(normalized.to_string()))?;
        constructor().map_err(|reason| ConstructionError::Failed {
            type_name: normalized.to_string(),
            reason,
        })
    }
}

fn construct_default<T: ChildObject + Default>() -> Result<Box<dyn ChildObject>, String> {
    Ok(Box::new(T::default()))
}

fn is_valid_type_name(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ':' | '-'))
}
