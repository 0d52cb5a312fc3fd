//! Example walking through the settings screen against a throwaway settings file
//!
//! Run with: cargo run --example settings_demo

use tip_settings::{Appearance, ConfigStore, SettingsValidator, theme};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Tip Settings Demo ===\n");

    let path = std::env::temp_dir().join("tip_settings_demo.toml");
    let _ = std::fs::remove_file(&path);

    let mut validator = SettingsValidator::new(ConfigStore::load_from(&path)?);

    let state = validator.load_state();
    println!("Loaded settings:");
    println!("  Default tip: {}", state.default_tip);
    println!("  Max tip: {}", state.max_tip);

    for (field, input) in [("max", "10"), ("default", "60"), ("max", "30%"), ("default", "30")] {
        let update = match field {
            "max" => validator.submit_max_tip(input),
            _ => validator.submit_default_tip(input),
        };
        if update.is_accepted() {
            println!("  {} <- {:?}: accepted, shows {}", field, input, update.display);
        } else {
            println!(
                "  {} <- {:?}: rejected ({}), shows {}",
                field,
                input,
                update.message(),
                update.display
            );
        }
    }

    validator.set_appearance(Appearance::Dark);
    let colors = theme(validator.appearance());
    println!("\nAppearance: {} (background {})", validator.appearance(), colors.background.to_hex());
    println!("Smooth slider: {}", validator.toggle_smooth_slider());

    println!("\nSettings file: {}", validator.store().path().display());
    let _ = std::fs::remove_file(&path);

    Ok(())
}
