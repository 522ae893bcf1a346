//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "checklist";
const APPLICATION: &str = "checklist-tui";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 25;

const LATEST_LOG: &str = "latest.log";

const DIALOG_CONFIG: &str = "dialog.json";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, which holds the logs.
///
/// - Linux: `$XDG_CACHE_HOME/checklist-tui` or `~/.cache/checklist-tui`
/// - macOS: `~/Library/Caches/dev.checklist.checklist-tui`
/// - Windows: `C:\Users\<User>\AppData\Local\checklist\checklist-tui\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the optional dialog settings.
///
/// - Linux: `$XDG_CONFIG_HOME/checklist-tui/dialog.json`
/// - macOS: `~/Library/Application Support/dev.checklist.checklist-tui/dialog.json`
/// - Windows: `C:\Users\<User>\AppData\Roaming\checklist\checklist-tui\config\dialog.json`
pub fn dialog_config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(DIALOG_CONFIG))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Rename latest.log to a timestamped name and prune old logs.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    let latest = cache.join(LATEST_LOG);

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = cache.join(format!("{}.log", timestamp));
        let _ = fs::rename(&latest, &archived);
    }

    cleanup_old_logs(&cache);
}

fn cleanup_old_logs(cache_dir: &Path) {
    let Ok(entries) = fs::read_dir(cache_dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| is_archived_log(&e.file_name().to_string_lossy()))
        .collect();

    // Oldest first
    logs.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());

    if logs.len() > MAX_OLD_LOGS {
        for entry in logs.iter().take(logs.len() - MAX_OLD_LOGS) {
            let _ = fs::remove_file(entry.path());
        }
    }
}

fn is_archived_log(name: &str) -> bool {
    name.ends_with(".log") && name != LATEST_LOG
}
