//! Dialog settings read from `dialog.json` in the config directory.
//!
//! Every field is optional; missing ones keep their defaults. The host
//! always sets the dialog title itself.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use checklist::ChecklistConfig;

use crate::error::ShellError;
use crate::paths;

/// Load the dialog settings, falling back to defaults when the file is
/// missing or unusable.
pub fn load_dialog_config() -> ChecklistConfig {
    match paths::dialog_config_file() {
        Some(path) => read_dialog_config(&path),
        None => ChecklistConfig::default(),
    }
}

fn read_dialog_config(path: &Path) -> ChecklistConfig {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return ChecklistConfig::default(),
        Err(e) => {
            log::warn!("[config] could not read {}: {}", path.display(), e);
            return ChecklistConfig::default();
        }
    };
    match parse_dialog_config(&text) {
        Ok(config) => {
            log::info!("[config] loaded {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("[config] ignoring {}: {}", path.display(), e);
            ChecklistConfig::default()
        }
    }
}

fn parse_dialog_config(text: &str) -> Result<ChecklistConfig, ShellError> {
    let mut config: ChecklistConfig = serde_json::from_str(text)?;
    if config.visible_row_count == 0 {
        log::warn!("[config] visible_row_count must be at least 1, using the default");
        config.visible_row_count = ChecklistConfig::default().visible_row_count;
    }
    Ok(config)
}
