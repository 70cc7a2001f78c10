//! Path resolution for smartlife directories.
//!
//! Provides XDG-compliant defaults for the database file.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "smartlife";

/// Get XDG-compliant data directory for smartlife.
///
/// # Returns
/// `$XDG_DATA_HOME/smartlife`, falling back to `~/.local/share/smartlife`,
/// and to `./.smartlife` when neither variable is set.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".local/share")));

    match data_home {
        Ok(dir) => dir.join(APP_DIR),
        Err(_) => PathBuf::from(".smartlife"),
    }
}

/// Get database file path (data_dir/smartlife.db).
pub fn get_db_path() -> PathBuf {
    get_data_dir().join("smartlife.db")
}
