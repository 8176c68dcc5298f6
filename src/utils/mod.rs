/// Configuration constants for the application
pub mod config {
    /// Environment variable holding the lookup service base URL
    pub const API_URL_ENV: &str = "SRI_API_URL";

    /// Directory (under home) holding the settings file
    pub const SETTINGS_DIR: &str = ".sri-consulta";

    /// Settings file name
    pub const SETTINGS_FILE: &str = "settings.json";

    /// Hard limit for one lookup request, in milliseconds
    pub const REQUEST_TIMEOUT_MS: u64 = 90_000;

    /// Default tracing filter when RUST_LOG is not set
    pub const DEFAULT_LOG_FILTER: &str = "sri_consulta=info";
}

/// Utility functions for file operations
pub mod file_utils {
    use super::config::*;
    use std::path::PathBuf;

    /// Location of the settings file, if a home directory is known
    pub fn settings_file_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(SETTINGS_DIR).join(SETTINGS_FILE))
    }
}
