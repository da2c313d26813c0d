//! Settings loading and the first-run config writer

mod types;

pub use types::{BehaviorSettings, PersonaSettings, Settings, StoreSettings, UiSettings};

use fs2::FileExt;
use std::path::{Path, PathBuf};

use solomon_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const SOLOMON_DIR: &str = "solomon";

/// Default config file location: `~/.config/solomon/config.toml`
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(SOLOMON_DIR).join(CONFIG_FILENAME)
}

/// Load settings from the given path.
///
/// An absent file is the common case and yields defaults silently; a file
/// that exists but fails to parse is logged and also yields defaults, so a
/// typo never locks the user out of the app.
pub fn load_settings(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!(
                    "Invalid config at {}: {e}; falling back to defaults",
                    path.display()
                );
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

/// Write a default config file if none exists yet.
///
/// The write takes an exclusive lock so two instances racing on first run
/// cannot interleave their writes.
pub fn ensure_config_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config directory: {e}")))?;
    }

    let content = build_default_toml()?;

    let file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::config(format!("Failed to open {}: {e}", path.display())))?;

    file.lock_exclusive()
        .map_err(|e| Error::config(format!("Failed to lock {}: {e}", path.display())))?;

    use std::io::Write;
    let mut file = file;
    file.write_all(content.as_bytes())
        .map_err(|e| Error::config(format!("Failed to write {}: {e}", path.display())))?;
    file.flush()
        .map_err(|e| Error::config(format!("Failed to flush {}: {e}", path.display())))?;

    // Lock is automatically released when file is dropped
    info!("Wrote default config to {}", path.display());
    Ok(())
}

fn build_default_toml() -> Result<String> {
    let body = toml::to_string_pretty(&Settings::default())
        .map_err(|e| Error::config(format!("Failed to render default config: {e}")))?;
    Ok(format!(
        "# Solomon configuration\n# Generated on first run; every field is optional.\n\n{body}"
    ))
}
