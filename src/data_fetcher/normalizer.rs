//! Permissive JSON normalization for roster payloads.
//!
//! The backend has shipped two generations of column names: the current
//! camelCase fields and the legacy Spanish snake_case fields from the first
//! database. Each logical field is resolved through an ordered candidate-key
//! chain, so one missing field never discards a whole record. A record is
//! dropped only when it fails the identity checks: `id > 0` and a non-blank
//! `name` for players, a non-blank `team` for stints.
//!
//! Whole-payload failures (malformed JSON, a non-array document, the server's
//! `error` payloads) always normalize to an empty sequence, never a partial
//! result and never an error to the caller.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::constants::fallback;
use crate::data_fetcher::api::build_player_image_url;
use crate::data_fetcher::models::{Player, TeamStint};
use crate::data_fetcher::team_logos::team_logo_url;

/// Parses the players payload into normalized [`Player`] records.
///
/// Accepts a JSON array of loosely-structured objects. `"[]"`, `"null"` and
/// error payloads yield an empty roster; so does any parse failure.
pub fn parse_players(raw: &str, api_domain: &str) -> Vec<Player> {
    let Some(items) = payload_items(raw, "players") else {
        return Vec::new();
    };
    let players: Vec<Player> = items
        .iter()
        .filter_map(|item| player_from_value(item, api_domain))
        .collect();
    debug!("Normalized {} of {} player records", players.len(), items.len());
    players
}

/// Parses the history payload into normalized [`TeamStint`] records.
///
/// Same tolerance rules as [`parse_players`]; additionally synthesizes the
/// `years` label from `start_year`/`end_year` when the backend stored the
/// stint as a range, and backfills `logo_url` from the team name when the
/// record carries no explicit URL.
pub fn parse_history(raw: &str, api_domain: &str) -> Vec<TeamStint> {
    let Some(items) = payload_items(raw, "history") else {
        return Vec::new();
    };
    let stints: Vec<TeamStint> = items
        .iter()
        .filter_map(|item| stint_from_value(item, api_domain))
        .collect();
    debug!("Normalized {} of {} stint records", stints.len(), items.len());
    stints
}

/// Shared payload guard: returns the array elements, or `None` for anything
/// that must normalize to an empty sequence.
fn payload_items(raw: &str, kind: &str) -> Option<Vec<Value>> {
    let trimmed = raw.trim();
    // The backend signals failures as `null`, `[]`, or `{"error": "..."}`
    // style bodies; all of them mean "no records".
    if trimmed.is_empty() || trimmed == "[]" || trimmed == "null" || trimmed.contains("error") {
        debug!("{kind} payload carries no records");
        return None;
    }
    let value: Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(e) => {
            warn!("Discarding unparseable {kind} payload: {e}");
            return None;
        }
    };
    match value {
        Value::Array(items) => Some(items),
        _ => {
            warn!("Discarding non-array {kind} payload");
            None
        }
    }
}

fn player_from_value(value: &Value, api_domain: &str) -> Option<Player> {
    let obj = value.as_object()?;

    let image_name = string_field(obj, "image_name", "photo", "");
    let image_url = if image_name.trim().is_empty() {
        String::new()
    } else {
        build_player_image_url(api_domain, &image_name)
    };

    let player = Player {
        id: int_field(obj, "id"),
        name: string_field(obj, "name", "nombre", fallback::PLAYER_NAME),
        birth_date: string_field(obj, "birthDate", "fecha_nacimiento", ""),
        position: string_field(obj, "position", "posicion", ""),
        nationality: string_field(obj, "nationality", "nacionalidad", ""),
        current_team: string_field(obj, "currentTeam", "current_team", ""),
        image_name,
        image_url,
    };

    // Identity checks: records without a usable id or name are dropped, not errors
    (player.id > 0 && !player.name.trim().is_empty()).then_some(player)
}

fn stint_from_value(value: &Value, api_domain: &str) -> Option<TeamStint> {
    let obj = value.as_object()?;

    let logo_url = match non_empty(obj, "logoUrl") {
        Some(url) => url,
        None => {
            let team_name = non_empty(obj, "teamName")
                .or_else(|| non_empty(obj, "team_name"))
                .unwrap_or_default();
            team_logo_url(api_domain, &team_name)
        }
    };

    let stint = TeamStint {
        team: string_field(obj, "teamName", "team_name", fallback::TEAM_NAME),
        years: years_label(obj),
        logo_url,
    };

    (!stint.team.trim().is_empty()).then_some(stint)
}

/// The `years` label: an explicit `years` value wins; otherwise it is
/// synthesized from `start_year`/`end_year`. Both present gives a range,
/// start alone gives a single year, neither gives an empty label.
fn years_label(obj: &Map<String, Value>) -> String {
    if let Some(years) = non_empty(obj, "years") {
        return years;
    }
    match (non_empty(obj, "start_year"), non_empty(obj, "end_year")) {
        (Some(start), Some(end)) => format!("{start}–{end}"),
        (Some(start), None) => start,
        _ => String::new(),
    }
}

/// Resolves one logical string field through its candidate-key chain: the
/// canonical key's non-empty value, else the legacy key's value whenever the
/// key is present, else the default. A legacy key explicitly holding an empty
/// string stays empty; the default only covers absent keys.
fn string_field(
    obj: &Map<String, Value>,
    canonical: &str,
    legacy: &str,
    default: &str,
) -> String {
    if let Some(value) = non_empty(obj, canonical) {
        return value;
    }
    match obj.get(legacy).and_then(coerce_string) {
        Some(value) => value,
        None => default.to_string(),
    }
}

/// The key's value as a non-empty string, coercing numbers. `None` for an
/// absent key, an empty string, or a non-scalar value.
fn non_empty(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(coerce_string)
        .filter(|s| !s.is_empty())
}

/// Integer field tolerant of the backend's habit of quoting numbers.
fn int_field(obj: &Map<String, Value>, key: &str) -> i64 {
    match obj.get(key) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Strings pass through, numbers are rendered; anything else (null, bool,
/// nested structures) counts as absent.
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
