use crate::constant::USER_DEFINED_APPEARANCE;
use crate::store::SettingsStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown appearance: {0:?}")]
pub struct UnknownAppearance(pub String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Appearance {
    type Err = UnknownAppearance;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Appearance::Light),
            "dark" => Ok(Appearance::Dark),
            _ => Err(UnknownAppearance(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ThemeColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Colors the presentation layer paints the settings screen with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub background: ThemeColor,
    pub foreground: ThemeColor,
    /// Border drawn around a rejected tip field
    pub error: ThemeColor,
}

pub fn theme(mode: Appearance) -> Theme {
    match mode {
        Appearance::Light => Theme {
            background: ThemeColor::from_rgb(255, 255, 255),
            foreground: ThemeColor::from_rgb(0, 0, 0),
            error: ThemeColor::from_rgb(255, 59, 48),
        },
        Appearance::Dark => Theme {
            background: ThemeColor::from_rgb(0, 0, 0),
            foreground: ThemeColor::from_rgb(255, 255, 255),
            error: ThemeColor::from_rgb(255, 69, 58),
        },
    }
}

/// Read the stored appearance. Anything unrecognized reads as light.
pub fn load_appearance<S: SettingsStore + ?Sized>(store: &S) -> Appearance {
    match store.get_string(USER_DEFINED_APPEARANCE) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!("{}, using light", e);
            Appearance::Light
        }),
        None => Appearance::Light,
    }
}

pub fn set_appearance<S: SettingsStore + ?Sized>(store: &mut S, mode: Appearance) {
    store.set_string(USER_DEFINED_APPEARANCE, mode.as_str());
    tracing::info!("Appearance set to {}", mode);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_default_is_light() {
        let store = MemoryStore::new();
        assert_eq!(load_appearance(&store), Appearance::Light);
    }

    #[test]
    fn test_set_and_load() {
        let mut store = MemoryStore::new();
        set_appearance(&mut store, Appearance::Dark);
        assert_eq!(store.get_string(USER_DEFINED_APPEARANCE).as_deref(), Some("dark"));
        assert_eq!(load_appearance(&store), Appearance::Dark);

        set_appearance(&mut store, Appearance::Dark.toggled());
        assert_eq!(load_appearance(&store), Appearance::Light);
    }

    #[test]
    fn test_unknown_value_reads_as_light() {
        let mut store = MemoryStore::new();
        store.set_string(USER_DEFINED_APPEARANCE, "sepia");
        assert_eq!(load_appearance(&store), Appearance::Light);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Dark".parse::<Appearance>().unwrap(), Appearance::Dark);
        assert_eq!(" light ".parse::<Appearance>().unwrap(), Appearance::Light);
        assert!("blue".parse::<Appearance>().is_err());
    }

    #[test]
    fn test_theme_mapping() {
        let light = theme(Appearance::Light);
        let dark = theme(Appearance::Dark);
        assert_eq!(light.background.to_hex(), "#FFFFFF");
        assert_eq!(dark.background.to_hex(), "#000000");
        assert_eq!(light.foreground, dark.background);
        assert_ne!(light, dark);
    }
}
