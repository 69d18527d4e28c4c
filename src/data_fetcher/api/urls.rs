//! URL building utilities for API endpoints

use crate::constants::{assets, endpoints};

/// Builds the URL for fetching the full player roster.
///
/// # Arguments
/// * `api_domain` - The base API domain
///
/// # Returns
/// * `String` - The complete players URL
///
/// # Example
/// ```
/// use rugby_roster::data_fetcher::api::build_players_url;
///
/// let url = build_players_url("http://10.0.2.2/rugby_app_v2");
/// assert_eq!(url, "http://10.0.2.2/rugby_app_v2/get_players.php");
/// ```
pub fn build_players_url(api_domain: &str) -> String {
    format!(
        "{}/{}",
        api_domain.trim_end_matches('/'),
        endpoints::PLAYERS
    )
}

/// Builds the URL for fetching one player's team history.
/// The player id travels as a query parameter.
///
/// # Arguments
/// * `api_domain` - The base API domain
/// * `player_id` - The player whose history to fetch
///
/// # Returns
/// * `String` - The complete history URL
///
/// # Example
/// ```
/// use rugby_roster::data_fetcher::api::build_history_url;
///
/// let url = build_history_url("http://10.0.2.2/rugby_app_v2", 7);
/// assert_eq!(
///     url,
///     "http://10.0.2.2/rugby_app_v2/get_player_history.php?player_id=7"
/// );
/// ```
pub fn build_history_url(api_domain: &str, player_id: i64) -> String {
    format!(
        "{}/{}?player_id={player_id}",
        api_domain.trim_end_matches('/'),
        endpoints::PLAYER_HISTORY
    )
}

/// Builds the URL used by the reachability probe: the root of the host the
/// API domain lives on, not the API base path itself. A domain that fails to
/// parse is probed as-is.
///
/// # Example
/// ```
/// use rugby_roster::data_fetcher::api::build_probe_url;
///
/// let url = build_probe_url("http://10.0.2.2/rugby_app_v2");
/// assert_eq!(url, "http://10.0.2.2/");
/// ```
pub fn build_probe_url(api_domain: &str) -> String {
    match reqwest::Url::parse(api_domain) {
        Ok(url) => url
            .join("/")
            .map(|root| root.to_string())
            .unwrap_or_else(|_| api_domain.to_string()),
        Err(_) => api_domain.to_string(),
    }
}

/// Builds the full URL for a player photo from its backend file name.
///
/// # Example
/// ```
/// use rugby_roster::data_fetcher::api::build_player_image_url;
///
/// let url = build_player_image_url("http://10.0.2.2/rugby_app_v2", "wilkinson.jpg");
/// assert_eq!(
///     url,
///     "http://10.0.2.2/rugby_app_v2/img/jugadors/wilkinson.jpg"
/// );
/// ```
pub fn build_player_image_url(api_domain: &str, image_name: &str) -> String {
    format!(
        "{}/{}/{image_name}",
        api_domain.trim_end_matches('/'),
        assets::PLAYER_IMAGE_DIR
    )
}
