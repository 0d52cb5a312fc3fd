use crate::appearance::{Appearance, load_appearance};
use crate::constant::{
    DEFAULT_MAX_TIP_PERCENT, DEFAULT_TIP_PERCENT, USER_DEFINED_MAX, USER_DEFINED_TIP,
};
use crate::percentage::Percentage;
use crate::slider::smooth_slider;
use crate::store::SettingsStore;
use serde::Serialize;

pub const DEFAULT_TIP: Percentage = Percentage::from_const(DEFAULT_TIP_PERCENT);
pub const DEFAULT_MAX_TIP: Percentage = Percentage::from_const(DEFAULT_MAX_TIP_PERCENT);

/// Snapshot of everything the settings screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettingsState {
    pub default_tip: Percentage,
    pub max_tip: Percentage,
    pub appearance: Appearance,
    pub smooth_slider: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            default_tip: DEFAULT_TIP,
            max_tip: DEFAULT_MAX_TIP,
            appearance: Appearance::Light,
            smooth_slider: false,
        }
    }
}

impl SettingsState {
    /// Read all four settings, falling back to defaults for anything missing
    pub fn load<S: SettingsStore + ?Sized>(store: &S) -> Self {
        Self {
            default_tip: stored_tip(store, USER_DEFINED_TIP, DEFAULT_TIP),
            max_tip: stored_tip(store, USER_DEFINED_MAX, DEFAULT_MAX_TIP),
            appearance: load_appearance(store),
            smooth_slider: smooth_slider(store),
        }
    }
}

/// Read a tip key. Unparsable entries are treated as absent.
pub fn stored_tip<S: SettingsStore + ?Sized>(
    store: &S,
    key: &str,
    fallback: Percentage,
) -> Percentage {
    let Some(raw) = store.get_string(key) else {
        return fallback;
    };

    match raw.parse::<Percentage>() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Ignoring stored {}: {}", key, e);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::{SLIDER_SETTING, USER_DEFINED_APPEARANCE};
    use crate::store::{MemoryStore, StoredValue};

    #[test]
    fn test_empty_store_loads_defaults() {
        let store = MemoryStore::new();
        let state = SettingsState::load(&store);
        assert_eq!(state, SettingsState::default());
        assert_eq!(state.default_tip.value(), 25);
        assert_eq!(state.max_tip.value(), 50);
    }

    #[test]
    fn test_load_stored_values() {
        let mut store = MemoryStore::new();
        store.set_string(USER_DEFINED_TIP, "18");
        store.set(USER_DEFINED_MAX, StoredValue::Integer(35));
        store.set_string(USER_DEFINED_APPEARANCE, "dark");
        store.set_bool(SLIDER_SETTING, true);

        let state = SettingsState::load(&store);
        assert_eq!(state.default_tip.value(), 18);
        assert_eq!(state.max_tip.value(), 35);
        assert_eq!(state.appearance, Appearance::Dark);
        assert!(state.smooth_slider);
    }

    #[test]
    fn test_corrupt_tip_falls_back() {
        let mut store = MemoryStore::new();
        store.set_string(USER_DEFINED_TIP, "lots");
        store.set_string(USER_DEFINED_MAX, "500");

        let state = SettingsState::load(&store);
        assert_eq!(state.default_tip, DEFAULT_TIP);
        assert_eq!(state.max_tip, DEFAULT_MAX_TIP);
    }

    #[test]
    fn test_state_serializes_plain_numbers() {
        let json = serde_json::to_value(SettingsState::default()).unwrap();
        assert_eq!(json["default_tip"], 25);
        assert_eq!(json["max_tip"], 50);
        assert_eq!(json["appearance"], "light");
        assert_eq!(json["smooth_slider"], false);
    }
}
