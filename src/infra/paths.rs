// src/infra/paths.rs — Config path management
//
// All paths respect the ATHENAGEN_HOME environment variable for isolation.
// When ATHENAGEN_HOME is set, configuration lives under that directory.
// When unset, configuration uses ~/.athenagen/.

use std::path::PathBuf;

/// Returns the ATHENAGEN_HOME override, if set.
fn athenagen_home() -> Option<PathBuf> {
    std::env::var_os("ATHENAGEN_HOME").map(PathBuf::from)
}

/// Configuration directory: $ATHENAGEN_HOME/ or ~/.athenagen/
pub fn config_dir() -> PathBuf {
    if let Some(home) = athenagen_home() {
        return home;
    }
    dirs_home().join(".athenagen")
}

/// Home directory
pub fn dirs_home() -> PathBuf {
    directories::BaseDirs::new()
        .expect("Could not determine home directory")
        .home_dir()
        .to_path_buf()
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}
