//! Key-value storage behind the settings screen
//!
//! The validator never talks to a concrete store. It is handed something implementing
//! [`SettingsStore`], which is either the file-backed [`crate::config::ConfigStore`] or the
//! in-memory [`MemoryStore`] used by tests.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single persisted value
///
/// Untagged so the settings file holds plain values instead of `{ Text = "30" }` tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    Bool(bool),
    Integer(i64),
    Text(String),
}

impl StoredValue {
    /// String view of the value. Integers written by older versions read back as decimal text.
    pub fn as_string(&self) -> Option<String> {
        match self {
            StoredValue::Text(text) => Some(text.clone()),
            StoredValue::Integer(value) => Some(value.to_string()),
            StoredValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StoredValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

pub trait SettingsStore {
    /// Raw lookup, `None` when the key was never written
    fn get(&self, key: &str) -> Option<StoredValue>;

    /// Write a value. Implementations persist before returning and report their own failures.
    fn set(&mut self, key: &str, value: StoredValue);

    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(|value| value.as_string())
    }

    /// Absent or non-boolean entries read as `false`
    fn get_bool(&self, key: &str) -> bool {
        self.get(key)
            .and_then(|value| value.as_bool())
            .unwrap_or(false)
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.set(key, StoredValue::Text(value.to_string()));
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, StoredValue::Bool(value));
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for &mut S {
    fn get(&self, key: &str) -> Option<StoredValue> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: StoredValue) {
        (**self).set(key, value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, StoredValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<StoredValue> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: StoredValue) {
        self.values.insert(key.to_string(), value);
    }
}
