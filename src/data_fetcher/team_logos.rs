//! Team name to logo asset resolution.
//!
//! The backend stores stint records without logo URLs for rows imported from
//! the legacy database, so the client derives one by matching the team name
//! against a small fixed keyword table.

use crate::constants::assets;

/// Ordered keyword table mapping team name fragments to logo file names.
/// First matching row wins; matching is case-insensitive substring search.
const LOGO_TABLE: &[(&[&str], &str)] = &[
    (&["newcastle", "falcon"], "newcastle_falcons.png"),
    (&["toulon"], "rc_toulon.png"),
    (&["crusader"], "crusaders.png"),
    (&["england", "inglaterra"], "england.png"),
    (
        &["new zealand", "nueva zelanda", "all blacks"],
        "new_zealand.png",
    ),
    (&["stade", "français", "francais"], "stade_francais.png"),
    (&["italy", "italia"], "italy.png"),
];

/// Resolves a free-text team name to a logo file name, or `None` when no
/// keyword matches.
pub fn logo_file_for(team_name: &str) -> Option<&'static str> {
    if team_name.trim().is_empty() {
        return None;
    }
    let needle = team_name.to_lowercase();
    LOGO_TABLE
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| needle.contains(keyword)))
        .map(|(_, file)| *file)
}

/// Builds the full logo URL for a team, or an empty string when the name
/// resolves to no known logo. Callers treat the empty string as "show a
/// placeholder".
pub fn team_logo_url(api_domain: &str, team_name: &str) -> String {
    logo_file_for(team_name)
        .map(|file| {
            format!(
                "{}/{}/{file}",
                api_domain.trim_end_matches('/'),
                assets::TEAM_LOGO_DIR
            )
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: &str = "http://10.0.2.2/rugby_app_v2";

    #[test]
    fn test_exact_team_names_resolve() {
        assert_eq!(
            logo_file_for("Newcastle Falcons"),
            Some("newcastle_falcons.png")
        );
        assert_eq!(logo_file_for("RC Toulon"), Some("rc_toulon.png"));
        assert_eq!(logo_file_for("Crusaders"), Some("crusaders.png"));
        assert_eq!(logo_file_for("England"), Some("england.png"));
        assert_eq!(logo_file_for("Stade Français"), Some("stade_francais.png"));
        assert_eq!(logo_file_for("Italy"), Some("italy.png"));
    }

    #[test]
    fn test_all_blacks_resolves_to_new_zealand() {
        assert_eq!(logo_file_for("All Blacks"), Some("new_zealand.png"));
        assert_eq!(logo_file_for("New Zealand"), Some("new_zealand.png"));
        assert_eq!(logo_file_for("Nueva Zelanda"), Some("new_zealand.png"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(logo_file_for("NEWCASTLE FALCONS"), Some("newcastle_falcons.png"));
        assert_eq!(logo_file_for("all blacks"), Some("new_zealand.png"));
        assert_eq!(logo_file_for("InGlAtErRa"), Some("england.png"));
    }

    #[test]
    fn test_substring_match_within_longer_names() {
        assert_eq!(logo_file_for("The Crusaders (Super Rugby)"), Some("crusaders.png"));
        assert_eq!(logo_file_for("Selección de Italia"), Some("italy.png"));
    }

    #[test]
    fn test_unknown_team_resolves_to_none() {
        assert_eq!(logo_file_for("FC Unknown"), None);
        assert_eq!(logo_file_for(""), None);
        assert_eq!(logo_file_for("   "), None);
    }

    #[test]
    fn test_first_matching_row_wins() {
        // "Falcon" only appears in the first row, so a name matching both a
        // later keyword and "falcon" must take the first row.
        assert_eq!(
            logo_file_for("Newcastle Falcons England XV"),
            Some("newcastle_falcons.png")
        );
    }

    #[test]
    fn test_team_logo_url_builds_full_path() {
        assert_eq!(
            team_logo_url(DOMAIN, "All Blacks"),
            "http://10.0.2.2/rugby_app_v2/img/teams/new_zealand.png"
        );
    }

    #[test]
    fn test_team_logo_url_empty_for_unknown() {
        assert_eq!(team_logo_url(DOMAIN, "FC Unknown"), "");
    }

    #[test]
    fn test_team_logo_url_tolerates_trailing_slash() {
        assert_eq!(
            team_logo_url("http://10.0.2.2/rugby_app_v2/", "Crusaders"),
            "http://10.0.2.2/rugby_app_v2/img/teams/crusaders.png"
        );
    }
}
