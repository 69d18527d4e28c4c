//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default API domain used when no config file exists and no environment
/// override is set. Points at the host machine when running against the
/// default deployment.
pub const DEFAULT_API_DOMAIN: &str = "http://10.0.2.2/rugby_app_v2";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Per-request timeouts in seconds
pub mod timeouts {
    /// Timeout for the reachability probe against the server root
    pub const REACHABILITY_SECONDS: u64 = 2;

    /// Timeout for fetching the full player roster
    pub const PLAYERS_SECONDS: u64 = 10;

    /// Timeout for fetching a single player's team history
    pub const HISTORY_SECONDS: u64 = 5;
}

/// Backend endpoint file names, relative to the API domain
pub mod endpoints {
    /// Endpoint returning the full player roster as a JSON array
    pub const PLAYERS: &str = "get_players.php";

    /// Endpoint returning one player's team history as a JSON array.
    /// Takes a `player_id` query parameter.
    pub const PLAYER_HISTORY: &str = "get_player_history.php";
}

/// Static asset directories on the backend, relative to the API domain
pub mod assets {
    /// Directory holding player photos ("jugadors", not "players" - the
    /// backend serves images from this exact path)
    pub const PLAYER_IMAGE_DIR: &str = "img/jugadors";

    /// Directory holding team logo images
    pub const TEAM_LOGO_DIR: &str = "img/teams";
}

/// Substitute values applied by the normalizer when a record omits a field
/// entirely. These match what the backend's own admin tooling inserts.
pub mod fallback {
    /// Name substituted when a player record has neither `name` nor `nombre`
    pub const PLAYER_NAME: &str = "Jugador";

    /// Team substituted when a stint record has neither `teamName` nor `team_name`
    pub const TEAM_NAME: &str = "Equipo";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "RUGBY_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "RUGBY_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "RUGBY_HTTP_TIMEOUT";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_constants_are_reasonable() {
        // The probe should give up quickly; data fetches get more room
        assert!(timeouts::REACHABILITY_SECONDS < timeouts::HISTORY_SECONDS);
        assert!(timeouts::HISTORY_SECONDS <= timeouts::PLAYERS_SECONDS);
        assert!(timeouts::PLAYERS_SECONDS <= 30);
    }

    #[test]
    fn test_endpoints_are_relative() {
        assert!(!endpoints::PLAYERS.starts_with('/'));
        assert!(!endpoints::PLAYER_HISTORY.starts_with('/'));
        assert!(endpoints::PLAYERS.ends_with(".php"));
        assert!(endpoints::PLAYER_HISTORY.ends_with(".php"));
    }

    #[test]
    fn test_asset_dirs_are_relative() {
        assert!(!assets::PLAYER_IMAGE_DIR.starts_with('/'));
        assert!(!assets::PLAYER_IMAGE_DIR.ends_with('/'));
        assert!(!assets::TEAM_LOGO_DIR.starts_with('/'));
        assert!(!assets::TEAM_LOGO_DIR.ends_with('/'));
    }

    #[test]
    fn test_fallback_names_are_not_blank() {
        // Records carrying a substituted name must survive the non-blank check
        assert!(!fallback::PLAYER_NAME.trim().is_empty());
        assert!(!fallback::TEAM_NAME.trim().is_empty());
    }

    #[test]
    fn test_env_var_names_are_not_empty() {
        assert!(!env_vars::API_DOMAIN.is_empty());
        assert!(!env_vars::LOG_FILE.is_empty());
        assert!(!env_vars::HTTP_TIMEOUT.is_empty());
    }

    #[test]
    fn test_default_api_domain_has_scheme() {
        assert!(DEFAULT_API_DOMAIN.starts_with("http://"));
        assert!(!DEFAULT_API_DOMAIN.ends_with('/'));
    }
}
