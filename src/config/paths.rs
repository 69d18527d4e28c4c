use std::path::PathBuf;

/// Base directory for everything this application persists: the platform
/// config directory plus an app-specific subdirectory. Falls back to the
/// current directory when the platform gives us nothing.
fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rugby_roster")
}

/// Path to the config file (`config.toml` inside the app directory).
pub fn get_config_path() -> String {
    app_dir().join("config.toml").to_string_lossy().to_string()
}

/// Path to the log directory (`logs` inside the app directory).
pub fn get_log_dir_path() -> String {
    app_dir().join("logs").to_string_lossy().to_string()
}
