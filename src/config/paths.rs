// Platform path utilities.
// Locates the config file and the log file under the project directories.

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "quote-collective")
}

/// Get the base config directory (~/.config/quote-collective on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the default config file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the base cache directory (~/.cache/quote-collective on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the default log file.
pub fn log_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("collective.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        // Path construction only; nothing touches the filesystem
        if let Some(config) = config_path() {
            assert!(config.ends_with("config.toml"));
        }
        if let Some(log) = log_path() {
            assert!(log.ends_with("collective.log"));
        }
    }
}
