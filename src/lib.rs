//! Rugby Squad Roster Library
//!
//! This library fetches a rugby squad's player roster and per-player team
//! history from the club's HTTP/JSON backend, normalizing the loosely
//! structured records the backend serves (two generations of field names,
//! missing values, year ranges stored in separate columns) into typed
//! `Player` and `TeamStint` values.
//!
//! # Examples
//!
//! ```rust,no_run
//! use rugby_roster::{Config, RosterClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config {
//!         api_domain: "http://10.0.2.2/rugby_app_v2".to_string(),
//!         ..Config::default()
//!     };
//!     let client = RosterClient::new(config).expect("client construction");
//!
//!     if client.check_server_reachable().await {
//!         for player in client.fetch_players_or_empty().await {
//!             println!("{} - {}", player.name, player.current_team);
//!         }
//!     }
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::RosterClient;
pub use data_fetcher::models::{Player, TeamStint};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
