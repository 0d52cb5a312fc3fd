use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tip_settings::config::ConfigStore;
use tip_settings::console::{Console, HELP};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(io::stderr)
        .init();

    let store = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => ConfigStore::load_from(path),
        None => ConfigStore::load(),
    };
    let store = match store {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to load settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}\n", HELP);
    let mut console = Console::new(store);
    if let Err(e) = console.run(io::stdin().lock(), io::stdout().lock()) {
        tracing::error!("Console stopped: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
