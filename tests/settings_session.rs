use std::fs;
use std::path::{Path, PathBuf};
use tip_settings::{
    Appearance, ConfigStore, SettingsState, SettingsStore, SettingsValidator, ValidationError,
};
use uuid::Uuid;

fn setup_test_file() -> (PathBuf, PathBuf) {
    let test_dir = std::env::temp_dir().join(format!("test_session_{}", Uuid::new_v4()));
    fs::create_dir_all(&test_dir).unwrap();
    (test_dir.join("settings.toml"), test_dir)
}

fn cleanup_test_dir(test_dir: &Path) {
    let _ = fs::remove_dir_all(test_dir);
}

#[test]
fn test_settings_survive_sessions() {
    let (path, test_dir) = setup_test_file();

    {
        let mut validator = SettingsValidator::new(ConfigStore::load_from(&path).unwrap());
        assert_eq!(validator.load_state(), SettingsState::default());

        let update = validator.submit_max_tip("10");
        assert_eq!(update.error, Some(ValidationError::MaxOutOfRange));
        assert_eq!(update.display, "50%");

        assert!(validator.submit_max_tip("30").is_accepted());
        assert!(validator.submit_default_tip("30%").is_accepted());
        validator.set_appearance(Appearance::Dark);
        validator.toggle_smooth_slider();
    }

    let store = ConfigStore::load_from(&path).unwrap();
    assert_eq!(store.get_string("UserDefinedTip").as_deref(), Some("30"));
    assert_eq!(store.get_string("UserDefinedMax").as_deref(), Some("30"));

    let mut validator = SettingsValidator::new(store);
    let state = validator.load_state();
    assert_eq!(state.default_tip.value(), 30);
    assert_eq!(state.max_tip.value(), 30);
    assert_eq!(state.appearance, Appearance::Dark);
    assert!(state.smooth_slider);

    let update = validator.submit_default_tip("31");
    assert_eq!(update.message(), "Default tip greater than max.");
    assert_eq!(update.display, "30%");

    let contents = fs::read_to_string(&path).unwrap();
    assert!(!contents.contains('%'), "stored values never carry the suffix");

    cleanup_test_dir(&test_dir);
}

#[test]
fn test_integer_max_from_older_file() {
    let (path, test_dir) = setup_test_file();
    fs::write(&path, "[values]\nUserDefinedTip = \"20\"\nUserDefinedMax = 35\n").unwrap();

    let mut validator = SettingsValidator::new(ConfigStore::load_from(&path).unwrap());
    assert_eq!(validator.display_max_tip(), "35%");

    let update = validator.submit_max_tip("18");
    assert_eq!(update.error, Some(ValidationError::MaxBelowDefault));
    assert_eq!(update.display, "35%");

    assert!(validator.submit_max_tip("40").is_accepted());
    let reopened = ConfigStore::load_from(&path).unwrap();
    assert_eq!(reopened.get_string("UserDefinedMax").as_deref(), Some("40"));

    cleanup_test_dir(&test_dir);
}
