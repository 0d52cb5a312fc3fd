use crate::constant::SLIDER_SETTING;
use crate::store::SettingsStore;

pub fn smooth_slider<S: SettingsStore + ?Sized>(store: &S) -> bool {
    store.get_bool(SLIDER_SETTING)
}

/// Flip the smooth-slider flag and return the new value
pub fn toggle_smooth_slider<S: SettingsStore + ?Sized>(store: &mut S) -> bool {
    let enabled = !smooth_slider(store);
    store.set_bool(SLIDER_SETTING, enabled);
    tracing::info!("Smooth slider {}", if enabled { "enabled" } else { "disabled" });
    enabled
}
