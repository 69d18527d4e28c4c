use serde::{Deserialize, Serialize};

/// One rugby player as served by the roster backend.
///
/// Immutable value record: built fresh by the normalizer on every fetch and
/// discarded when the next fetch replaces it. `image_url` is derived from
/// `image_name` and the configured API domain; it is empty when the record
/// carries no usable image reference.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: i64,
    pub name: String,
    #[serde(rename = "birthDate", default)]
    pub birth_date: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(rename = "currentTeam", default)]
    pub current_team: String,
    #[serde(rename = "imageName", default)]
    pub image_name: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
}

/// A contiguous period a player spent at one team.
///
/// `years` is free-form ("2003–2007", a single year, or empty). `logo_url` is
/// either the backend-supplied URL or one derived from the team name; empty
/// when neither applies, in which case the caller shows a placeholder.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TeamStint {
    pub team: String,
    #[serde(default)]
    pub years: String,
    #[serde(rename = "logoUrl", default)]
    pub logo_url: String,
}
