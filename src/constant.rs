/// Application name and metadata constants
pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "Prework";
pub const APP_NAME: &str = "Tip Settings";
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Keys under which the settings screen stores its values
pub const USER_DEFINED_TIP: &str = "UserDefinedTip";
pub const USER_DEFINED_MAX: &str = "UserDefinedMax";
pub const USER_DEFINED_APPEARANCE: &str = "UserDefinedAppearance";
pub const SLIDER_SETTING: &str = "SliderSetting";

/// Values used when the store has nothing for a key
pub const DEFAULT_TIP_PERCENT: u8 = 25;
pub const DEFAULT_MAX_TIP_PERCENT: u8 = 50;

/// Tip field bounds, both inclusive
pub const MIN_PERCENT: i64 = 0;
pub const MAX_PERCENT: i64 = 100;
pub const MIN_MAX_TIP_PERCENT: i64 = 15;
