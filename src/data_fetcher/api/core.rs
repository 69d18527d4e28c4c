//! The roster service: orchestrates the HTTP client and the normalizer.
//!
//! `RosterClient` owns its HTTP client and configuration (constructor
//! injection, so tests point it at a mock server instead of a live backend).
//! Fetch results are reified as `Result` internally; the `_or_empty` variants
//! are the boundary handed to presentation code, which only ever sees a
//! possibly-empty sequence.

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::constants::timeouts;
use crate::data_fetcher::models::{Player, TeamStint};
use crate::data_fetcher::normalizer::{parse_history, parse_players};

use super::fetch_utils::{fetch_text, probe_status};
use super::http_client::create_http_client;
use super::urls::{build_history_url, build_players_url, build_probe_url};

/// Client for the roster backend.
pub struct RosterClient {
    client: Client,
    config: Config,
}

impl RosterClient {
    /// Creates a client with its own connection pool, configured from `config`.
    pub fn new(config: Config) -> Result<Self, crate::error::AppError> {
        let client = create_http_client(config.http_timeout_seconds)
            .map_err(crate::error::AppError::ApiFetch)?;
        Ok(Self { client, config })
    }

    /// Creates a client around an existing `reqwest::Client`. Used by tests
    /// to inject doubles; also handy when the caller already pools connections.
    pub fn with_client(config: Config, client: Client) -> Self {
        Self { client, config }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Probes the server root with a short timeout.
    ///
    /// Any HTTP answer with a status in `[200, 499]` counts as reachable,
    /// including client errors: a 404 from the root still proves a server is
    /// listening. Only connection-level failures (and 5xx responses) report
    /// the server as unavailable.
    #[instrument(skip(self))]
    pub async fn check_server_reachable(&self) -> bool {
        let url = build_probe_url(&self.config.api_domain);
        match probe_status(
            &self.client,
            &url,
            Duration::from_secs(timeouts::REACHABILITY_SECONDS),
        )
        .await
        {
            Ok(status) => {
                let reachable = (200..=499).contains(&status);
                debug!("Reachability probe for {url} returned HTTP {status}");
                reachable
            }
            Err(e) => {
                warn!("Reachability probe failed for {url}: {e}");
                false
            }
        }
    }

    /// Fetches and normalizes the full player roster.
    ///
    /// A non-200 response or transport failure surfaces as `Err`; a payload
    /// that parses to zero records surfaces as `Ok` with an empty vector, so
    /// callers can tell the two apart.
    #[instrument(skip(self))]
    pub async fn fetch_players(&self) -> Result<Vec<Player>, crate::error::AppError> {
        let url = build_players_url(&self.config.api_domain);
        let body = fetch_text(
            &self.client,
            &url,
            Duration::from_secs(timeouts::PLAYERS_SECONDS),
        )
        .await?;
        let players = parse_players(&body, &self.config.api_domain);
        info!("Fetched {} players from {url}", players.len());
        Ok(players)
    }

    /// Fetches and normalizes one player's team history. Stints without an
    /// explicit logo URL come back with one derived from the team name.
    #[instrument(skip(self))]
    pub async fn fetch_player_history(
        &self,
        player_id: i64,
    ) -> Result<Vec<TeamStint>, crate::error::AppError> {
        let url = build_history_url(&self.config.api_domain, player_id);
        let body = fetch_text(
            &self.client,
            &url,
            Duration::from_secs(timeouts::HISTORY_SECONDS),
        )
        .await?;
        let stints = parse_history(&body, &self.config.api_domain);
        info!(
            "Fetched {} stints for player {player_id} from {url}",
            stints.len()
        );
        Ok(stints)
    }

    /// Boundary variant of [`fetch_players`](Self::fetch_players): every
    /// failure collapses to an empty roster. The cause is logged, never
    /// propagated.
    pub async fn fetch_players_or_empty(&self) -> Vec<Player> {
        match self.fetch_players().await {
            Ok(players) => players,
            Err(e) if e.is_connection_failure() => {
                warn!("Server unreachable, returning empty roster: {e}");
                Vec::new()
            }
            Err(e) => {
                warn!("Player fetch failed, returning empty roster: {e}");
                Vec::new()
            }
        }
    }

    /// Boundary variant of [`fetch_player_history`](Self::fetch_player_history)
    /// with the same collapse-to-empty contract.
    pub async fn fetch_player_history_or_empty(&self, player_id: i64) -> Vec<TeamStint> {
        match self.fetch_player_history(player_id).await {
            Ok(stints) => stints,
            Err(e) => {
                warn!("History fetch failed for player {player_id}, returning empty history: {e}");
                Vec::new()
            }
        }
    }
}
