pub mod api;
pub mod models;
pub mod normalizer;
pub mod sample_data;
pub mod team_logos;

pub use api::RosterClient;
pub use models::{Player, TeamStint};
pub use normalizer::{parse_history, parse_players};
pub use team_logos::team_logo_url;
