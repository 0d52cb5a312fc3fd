//! Validation of the default-tip and max-tip fields
//!
//! Both fields are edited as free text. When the user finishes editing a field the caller
//! submits the raw text here and gets back the text the field should show, plus an error
//! message when the input was rejected. Rejections never change the store; the field is
//! restored from the last committed value.

use crate::appearance::{self, Appearance};
use crate::constant::{MAX_PERCENT, MIN_MAX_TIP_PERCENT, USER_DEFINED_MAX, USER_DEFINED_TIP};
use crate::percentage::{Percentage, PercentageError, parse_input};
use crate::slider;
use crate::state::{DEFAULT_MAX_TIP, DEFAULT_TIP, SettingsState, stored_tip};
use crate::store::SettingsStore;
use thiserror::Error;
use tracing::{debug, info};

/// Reasons a tip submission is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Default tip greater than max.")]
    DefaultAboveMax,

    #[error("Default tip cannot be less than 0%.")]
    DefaultOutOfRange,

    #[error("Max tip cannot be less than default tip.")]
    MaxBelowDefault,

    #[error("Value must be >15%, and <100%.")]
    MaxOutOfRange,

    #[error("Invalid number")]
    InvalidNumber(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    OutOfRange,
    CrossFieldViolation,
    ParseError,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::DefaultOutOfRange | ValidationError::MaxOutOfRange => {
                ErrorKind::OutOfRange
            }
            ValidationError::DefaultAboveMax | ValidationError::MaxBelowDefault => {
                ErrorKind::CrossFieldViolation
            }
            ValidationError::InvalidNumber(_) => ErrorKind::ParseError,
        }
    }
}

/// Outcome of a submission: what the field should display, and why it was rejected if it was
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub display: String,
    pub error: Option<ValidationError>,
}

impl FieldUpdate {
    fn accepted(value: Percentage) -> Self {
        Self {
            display: value.to_string(),
            error: None,
        }
    }

    fn rejected(restored: Percentage, error: ValidationError) -> Self {
        Self {
            display: restored.to_string(),
            error: Some(error),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.error.is_none()
    }

    /// Text for the error label under the field, empty when accepted
    pub fn message(&self) -> String {
        self.error
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_default()
    }
}

pub struct SettingsValidator<S: SettingsStore> {
    store: S,
}

impl<S: SettingsStore> SettingsValidator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Everything the screen needs on initialization
    pub fn load_state(&self) -> SettingsState {
        SettingsState::load(&self.store)
    }

    pub fn default_tip(&self) -> Percentage {
        stored_tip(&self.store, USER_DEFINED_TIP, DEFAULT_TIP)
    }

    pub fn max_tip(&self) -> Percentage {
        stored_tip(&self.store, USER_DEFINED_MAX, DEFAULT_MAX_TIP)
    }

    pub fn display_default_tip(&self) -> String {
        self.default_tip().to_string()
    }

    pub fn display_max_tip(&self) -> String {
        self.max_tip().to_string()
    }

    pub fn submit_default_tip(&mut self, raw: &str) -> FieldUpdate {
        let previous = self.default_tip();
        let value = match parse_submission(raw) {
            Ok(Some(value)) => value,
            Ok(None) => return FieldUpdate::accepted(previous),
            Err(e) => return self.reject(USER_DEFINED_TIP, previous, e),
        };

        let max = self.max_tip();
        if value > i64::from(max.value()) {
            return self.reject(USER_DEFINED_TIP, previous, ValidationError::DefaultAboveMax);
        }

        match Percentage::new(value) {
            Ok(tip) => self.commit(USER_DEFINED_TIP, tip),
            Err(_) => {
                self.reject(USER_DEFINED_TIP, previous, ValidationError::DefaultOutOfRange)
            }
        }
    }

    pub fn submit_max_tip(&mut self, raw: &str) -> FieldUpdate {
        let previous = self.max_tip();
        let value = match parse_submission(raw) {
            Ok(Some(value)) => value,
            Ok(None) => return FieldUpdate::accepted(previous),
            Err(e) => return self.reject(USER_DEFINED_MAX, previous, e),
        };

        // Range first, so a max under 15% reports the range even when it is also under the default
        if !(MIN_MAX_TIP_PERCENT..=MAX_PERCENT).contains(&value) {
            return self.reject(USER_DEFINED_MAX, previous, ValidationError::MaxOutOfRange);
        }

        let default = self.default_tip();
        if i64::from(default.value()) > value {
            return self.reject(USER_DEFINED_MAX, previous, ValidationError::MaxBelowDefault);
        }

        match Percentage::new(value) {
            Ok(max) => self.commit(USER_DEFINED_MAX, max),
            Err(_) => self.reject(USER_DEFINED_MAX, previous, ValidationError::MaxOutOfRange),
        }
    }

    pub fn appearance(&self) -> Appearance {
        appearance::load_appearance(&self.store)
    }

    pub fn set_appearance(&mut self, mode: Appearance) {
        appearance::set_appearance(&mut self.store, mode);
    }

    pub fn smooth_slider(&self) -> bool {
        slider::smooth_slider(&self.store)
    }

    pub fn toggle_smooth_slider(&mut self) -> bool {
        slider::toggle_smooth_slider(&mut self.store)
    }

    fn commit(&mut self, key: &str, value: Percentage) -> FieldUpdate {
        self.store.set_string(key, &value.storage_value());
        info!("Set {} to {}", key, value);
        FieldUpdate::accepted(value)
    }

    fn reject(&self, key: &str, previous: Percentage, error: ValidationError) -> FieldUpdate {
        debug!("Rejected {}: {}", key, error);
        FieldUpdate::rejected(previous, error)
    }
}

fn parse_submission(raw: &str) -> Result<Option<i64>, ValidationError> {
    parse_input(raw).map_err(|e| match e {
        PercentageError::InvalidNumber(text) => ValidationError::InvalidNumber(text),
        PercentageError::OutOfRange(value) => ValidationError::InvalidNumber(value.to_string()),
    })
}
