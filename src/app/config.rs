//! Config directory lookup for `theme.conf`, `keybinds.conf` and the log file.
//!
use std::path::PathBuf;

const APP_DIR: &str = "bus-roster";

/// `$XDG_CONFIG_HOME/bus-roster`, falling back to `~/.config/bus-roster`.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg).join(APP_DIR));
    }
    std::env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(|home| PathBuf::from(home).join(".config").join(APP_DIR))
}

/// Where `name` should be written; the directory is created if needed.
/// Falls back to the working directory when no config dir is known.
pub fn config_file_write_path(name: &str) -> PathBuf {
    match config_dir() {
        Some(dir) => {
            if let Err(e) = std::fs::create_dir_all(&dir) {
                tracing::warn!(dir = %dir.display(), error = %e, "cannot create config dir");
                return PathBuf::from(name);
            }
            dir.join(name)
        }
        None => PathBuf::from(name),
    }
}

/// First existing copy of `name`: config dir, then working directory.
pub fn config_file_read_path(name: &str) -> Option<PathBuf> {
    let candidates = config_dir()
        .map(|d| d.join(name))
        .into_iter()
        .chain(std::iter::once(PathBuf::from(name)));
    candidates.into_iter().find(|p| p.exists())
}
