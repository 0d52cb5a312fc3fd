//! Tip Settings library
//!
//! Validation and persistence for the settings screen of a tipping calculator: the default
//! tip, the max tip, the appearance mode and the smooth-slider toggle.

pub mod appearance;
pub mod config;
pub mod console;
pub mod constant;
pub mod percentage;
pub mod slider;
pub mod state;
pub mod store;
pub mod validator;

pub use appearance::{Appearance, Theme, ThemeColor, theme};
pub use config::{ConfigError, ConfigStore};
pub use percentage::Percentage;
pub use state::SettingsState;
pub use store::{MemoryStore, SettingsStore, StoredValue};
pub use validator::{ErrorKind, FieldUpdate, SettingsValidator, ValidationError};
