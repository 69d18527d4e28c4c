use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings.
///
/// The API domain must be non-empty and either carry an http(s) scheme or at
/// least look like a host name. A custom log file path, when present, must be
/// non-empty and its parent directory must exist or be creatable.
pub fn validate_config(api_domain: &str, log_file_path: &Option<String>) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    let has_scheme = api_domain.starts_with("http://") || api_domain.starts_with("https://");
    let looks_like_host = api_domain.contains('.') || api_domain.starts_with("localhost");
    if !has_scheme && !looks_like_host {
        return Err(AppError::config_error(
            "API domain must be a valid URL or domain name",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Creating the parent directory up front doubles as path validation
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
