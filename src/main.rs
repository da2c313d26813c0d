//! Solomon - a journaling chat with your future self
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use solomon_core::prelude::*;

/// Solomon - a journaling chat with your future self, in the terminal
#[derive(Parser, Debug)]
#[command(name = "solomon")]
#[command(about = "A journaling chat with your future self", long_about = None)]
struct Args {
    /// Path to the config file (defaults to ~/.config/solomon/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the document store base URL from the config file
    #[arg(long, value_name = "URL")]
    store_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    solomon_core::logging::init()?;

    let args = Args::parse();

    let config_path = args
        .config
        .unwrap_or_else(solomon_app::config::default_config_path);

    // First run: drop a commented default config next to the user's other
    // dotfiles. Failure is not fatal -- defaults still apply.
    if let Err(e) = solomon_app::config::ensure_config_file(&config_path) {
        warn!("Could not write default config: {e}");
    }

    let mut settings = solomon_app::config::load_settings(&config_path);
    if let Some(url) = args.store_url {
        settings.store.base_url = url;
    }

    info!("Config: {}", config_path.display());
    info!("Store: {}", settings.store.base_url);

    let result = solomon_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Solomon exiting");
    result
}
