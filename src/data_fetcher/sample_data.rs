//! Built-in sample roster shown when the server is unreachable.
//!
//! The entries mirror what the backend's seed database ships with, so the
//! screens look the same whether the data arrived over the wire or not.
//! Logo and image URLs stay empty: with no server there is nothing to load,
//! and the caller's placeholder handling covers the gap.

use crate::data_fetcher::models::{Player, TeamStint};

/// A small, fixed roster of well-known players.
pub fn sample_players() -> Vec<Player> {
    vec![
        Player {
            id: 1,
            name: "Jonny Wilkinson".to_string(),
            birth_date: "1979-05-25".to_string(),
            position: "Fly-half".to_string(),
            nationality: "England".to_string(),
            current_team: "RC Toulon".to_string(),
            image_name: String::new(),
            image_url: String::new(),
        },
        Player {
            id: 2,
            name: "Dan Carter".to_string(),
            birth_date: "1982-03-05".to_string(),
            position: "Fly-half".to_string(),
            nationality: "New Zealand".to_string(),
            current_team: "Crusaders".to_string(),
            image_name: String::new(),
            image_url: String::new(),
        },
        Player {
            id: 3,
            name: "Richie McCaw".to_string(),
            birth_date: "1980-12-31".to_string(),
            position: "Flanker".to_string(),
            nationality: "New Zealand".to_string(),
            current_team: "Crusaders".to_string(),
            image_name: String::new(),
            image_url: String::new(),
        },
        Player {
            id: 4,
            name: "Sergio Parisse".to_string(),
            birth_date: "1983-09-12".to_string(),
            position: "Number 8".to_string(),
            nationality: "Italy".to_string(),
            current_team: "Stade Français".to_string(),
            image_name: String::new(),
            image_url: String::new(),
        },
    ]
}

/// Team history for a sample player, keyed by the ids from [`sample_players`].
/// Unknown ids get an empty history, same as the live endpoint.
pub fn sample_history(player_id: i64) -> Vec<TeamStint> {
    match player_id {
        1 => vec![
            stint("Newcastle Falcons", "1997–2009"),
            stint("RC Toulon", "2009–2014"),
            stint("England", "1998–2011"),
        ],
        2 => vec![
            stint("Crusaders", "2003–2015"),
            stint("All Blacks", "2003–2015"),
        ],
        3 => vec![
            stint("Crusaders", "2001–2015"),
            stint("All Blacks", "2001–2015"),
        ],
        4 => vec![
            stint("Stade Français", "2005–2019"),
            stint("Italy", "2002–2019"),
        ],
        _ => Vec::new(),
    }
}

fn stint(team: &str, years: &str) -> TeamStint {
    TeamStint {
        team: team.to_string(),
        years: years.to_string(),
        logo_url: String::new(),
    }
}
