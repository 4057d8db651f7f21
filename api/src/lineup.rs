use crate::backend::{
    BackendCoach, BackendCoaches, BackendCountry, BackendLineupPlayer, BackendLineupResponse,
    BackendReferee, BackendRendering, BackendTeamLineup,
};
use crate::position::classify_position;
use crate::{
    Coach, Country, LineupPlayerExtended, LineupResponse, LineupSource, Lineups, MatchCoaches,
    Referee, Rendering, RenderingMode, TeamLineupData,
};

const DEFAULT_FORMATION: &str = "4-4-2";

// ---------------------------------------------------------------------------
// Mapping: backend lineup → canonical LineupResponse
// ---------------------------------------------------------------------------

/// Map a backend lineup payload into the canonical [`LineupResponse`].
///
/// When the backend leaves them out, `has_lineup` and the rendering hints are
/// derived from whether either team lists any starter or substitute:
///   - with players: `has_lineup = true`, mode `field`, source `matches_players`
///   - without: `has_lineup = false`, mode `hidden`, source `none`
///
/// Each rendering field is resolved on its own, so a backend that sends only
/// `source` still gets a derived `mode`.
pub fn adapt_lineup_response(raw: BackendLineupResponse) -> LineupResponse {
    let BackendLineupResponse {
        game_id,
        has_lineup,
        rendering,
        lineups,
        referees,
        coaches,
    } = raw;

    let has_any_lineup_data =
        lineups.home_team.player_count() + lineups.away_team.player_count() > 0;
    let coaches = coaches.map(CoachSet::from).unwrap_or_default();

    LineupResponse {
        match_id: game_id,
        has_lineup: has_lineup.unwrap_or(has_any_lineup_data),
        rendering: resolve_rendering(rendering.unwrap_or_default(), has_any_lineup_data),
        lineups: Lineups {
            home_team: map_team(lineups.home_team, coaches.home_name),
            away_team: map_team(lineups.away_team, coaches.away_name),
        },
        referees: referees.map(|list| list.into_iter().map(map_referee).collect()),
        coaches: coaches.pair,
    }
}

fn resolve_rendering(raw: BackendRendering, has_any_lineup_data: bool) -> Rendering {
    let (mode, source) = if has_any_lineup_data {
        (RenderingMode::Field, LineupSource::MatchesPlayers)
    } else {
        (RenderingMode::Hidden, LineupSource::Unavailable)
    };

    Rendering {
        mode: raw.mode.unwrap_or(mode),
        source: raw.source.unwrap_or(source),
        field_allowed_by_rules: raw.field_allowed_by_rules.unwrap_or(has_any_lineup_data),
        field_data_valid: raw.field_data_valid.unwrap_or(has_any_lineup_data),
    }
}

fn map_team(team: BackendTeamLineup, coach_name: Option<String>) -> TeamLineupData {
    TeamLineupData {
        team_id: team.team_id,
        team_name: team.team_name,
        formation: team
            .formation
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_FORMATION.to_owned()),
        kit_color: team.kit_color,
        coach_name,
        starters: map_players(team.starters),
        substitutes: map_players(team.substitutes),
    }
}

fn map_players(players: Option<Vec<BackendLineupPlayer>>) -> Vec<LineupPlayerExtended> {
    players
        .unwrap_or_default()
        .into_iter()
        .map(map_player)
        .collect()
}

fn map_player(p: BackendLineupPlayer) -> LineupPlayerExtended {
    LineupPlayerExtended {
        position: classify_position(p.position.as_deref()),
        id: p.id,
        first_name: p.first_name,
        last_name: p.last_name,
        number: p.shirt_number.unwrap_or_default(),
        amplua: p.amplua,
        field_position: p.field_position,
        is_captain: p.is_captain.unwrap_or(false),
        photo_url: p.photo_url,
        country: p.country.map(map_country),
    }
}

pub(crate) fn map_country(c: BackendCountry) -> Country {
    Country {
        id: c.id,
        code: c.code,
        name: c.name,
        flag_url: c.flag_url,
    }
}

fn map_referee(r: BackendReferee) -> Referee {
    Referee {
        name: full_name(&r.first_name, &r.last_name),
        role: r.role,
    }
}

/// "First Last" with no stray spaces when either half is blank.
fn full_name(first: &str, last: &str) -> String {
    format!("{} {}", first.trim(), last.trim()).trim().to_owned()
}

// ---------------------------------------------------------------------------
// Coaches: both wire shapes folded into one on ingest
// ---------------------------------------------------------------------------

/// Per-side coach names come from the squad arrays; the top-level pair comes
/// from the single-object shape and only when both sides are present.
#[derive(Debug, Default)]
struct CoachSet {
    home_name: Option<String>,
    away_name: Option<String>,
    pair: Option<MatchCoaches>,
}

impl From<BackendCoaches> for CoachSet {
    fn from(raw: BackendCoaches) -> Self {
        let pair = match (raw.home, raw.away) {
            (Some(home), Some(away)) => Some(MatchCoaches {
                home: map_coach(home),
                away: map_coach(away),
            }),
            _ => None,
        };

        CoachSet {
            home_name: first_coach_name(raw.home_team),
            away_name: first_coach_name(raw.away_team),
            pair,
        }
    }
}

fn first_coach_name(coaches: Option<Vec<BackendCoach>>) -> Option<String> {
    coaches?
        .first()
        .map(|c| full_name(&c.first_name, &c.last_name))
        .filter(|name| !name.is_empty())
}

fn map_coach(c: BackendCoach) -> Coach {
    Coach {
        id: c.id,
        first_name: c.first_name,
        last_name: c.last_name,
        photo_url: c.photo_url,
        country: c.country.map(map_country),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendLineups;
    use crate::{Amplua, FieldPosition, Position};

    fn player(id: u64, shirt_number: u32, position: &str) -> BackendLineupPlayer {
        BackendLineupPlayer {
            id,
            first_name: "Ivan".into(),
            last_name: "Petrov".into(),
            shirt_number: Some(shirt_number),
            position: Some(position.into()),
            ..Default::default()
        }
    }

    fn lineup(home: BackendTeamLineup, away: BackendTeamLineup) -> BackendLineupResponse {
        BackendLineupResponse {
            game_id: 501,
            lineups: BackendLineups { home_team: home, away_team: away },
            ..Default::default()
        }
    }

    fn team(team_id: u64) -> BackendTeamLineup {
        BackendTeamLineup { team_id, team_name: format!("Team {team_id}"), ..Default::default() }
    }

    fn coach(first: &str, last: &str) -> BackendCoach {
        BackendCoach { first_name: first.into(), last_name: last.into(), ..Default::default() }
    }

    #[test]
    fn empty_lineup_is_hidden_with_no_source() {
        let adapted = adapt_lineup_response(lineup(team(1), team(2)));
        assert_eq!(adapted.match_id, 501);
        assert!(!adapted.has_lineup);
        assert_eq!(adapted.rendering.mode, RenderingMode::Hidden);
        assert_eq!(adapted.rendering.source, LineupSource::Unavailable);
        assert!(!adapted.rendering.field_allowed_by_rules);
        assert!(!adapted.rendering.field_data_valid);
        assert!(adapted.referees.is_none());
        assert!(adapted.coaches.is_none());
    }

    #[test]
    fn any_player_switches_to_field_rendering() {
        let mut away = team(2);
        away.substitutes = Some(vec![player(10, 12, "GK")]);
        let adapted = adapt_lineup_response(lineup(team(1), away));
        assert!(adapted.has_lineup);
        assert_eq!(adapted.rendering.mode, RenderingMode::Field);
        assert_eq!(adapted.rendering.source, LineupSource::MatchesPlayers);
        assert!(adapted.rendering.field_data_valid);
    }

    #[test]
    fn backend_flags_win_over_derived_ones() {
        let mut raw = lineup(team(1), team(2));
        raw.has_lineup = Some(true);
        raw.rendering = Some(BackendRendering {
            mode: Some(RenderingMode::List),
            field_data_valid: Some(false),
            ..Default::default()
        });
        let adapted = adapt_lineup_response(raw);
        assert!(adapted.has_lineup);
        assert_eq!(adapted.rendering.mode, RenderingMode::List);
        // Source was not sent, so it still follows the (empty) player lists.
        assert_eq!(adapted.rendering.source, LineupSource::Unavailable);
        assert!(!adapted.rendering.field_data_valid);
    }

    #[test]
    fn team_defaults_fill_formation_and_kit_color() {
        let mut home = team(1);
        home.formation = Some(String::new());
        let mut away = team(2);
        away.formation = Some("3-5-2".into());
        away.kit_color = Some("#FFD700".into());

        let adapted = adapt_lineup_response(lineup(home, away));
        assert_eq!(adapted.lineups.home_team.formation, "4-4-2");
        assert!(adapted.lineups.home_team.kit_color.is_none());
        assert_eq!(adapted.lineups.away_team.formation, "3-5-2");
        assert_eq!(adapted.lineups.away_team.kit_color.as_deref(), Some("#FFD700"));
        assert_eq!(adapted.lineups.away_team.team_name, "Team 2");
    }

    #[test]
    fn players_are_renamed_and_classified() {
        let mut home = team(1);
        let mut captain = player(9, 9, "ЦН");
        captain.is_captain = Some(true);
        captain.amplua = Some(Amplua::Forward);
        captain.field_position = Some(FieldPosition::Center);
        captain.country = Some(BackendCountry {
            id: 1,
            code: "KZ".into(),
            name: "Kazakhstan".into(),
            flag_url: None,
        });
        home.starters = Some(vec![captain, player(4, 4, "ЦЗ (центральный защитник)")]);
        home.substitutes = Some(vec![BackendLineupPlayer { id: 30, ..Default::default() }]);

        let adapted = adapt_lineup_response(lineup(home, team(2)));
        let starters = &adapted.lineups.home_team.starters;
        assert_eq!(starters[0].number, 9);
        assert_eq!(starters[0].position, Position::Forward);
        assert!(starters[0].is_captain);
        assert_eq!(starters[0].amplua, Some(Amplua::Forward));
        assert_eq!(starters[0].field_position, Some(FieldPosition::Center));
        assert_eq!(starters[1].position, Position::Defender);
        assert!(!starters[1].is_captain);
        assert!(starters[1].amplua.is_none());

        let sub = &adapted.lineups.home_team.substitutes[0];
        assert_eq!(sub.position, Position::Midfielder);
        assert!(sub.country.is_none());

        let json = serde_json::to_value(&starters[0]).unwrap();
        assert_eq!(json["number"], 9);
        assert!(json.get("shirt_number").is_none());
        assert!(json["country"].get("flag_url").is_none(), "missing flag is omitted, not null");
        let json = serde_json::to_value(&starters[1]).unwrap();
        assert!(json["amplua"].is_null());
        assert!(json["field_position"].is_null());
    }

    #[test]
    fn referee_names_are_trimmed_and_joined() {
        let mut raw = lineup(team(1), team(2));
        raw.referees = Some(vec![
            BackendReferee { first_name: "A".into(), last_name: "B".into(), role: "main".into() },
            BackendReferee { first_name: "".into(), last_name: "B".into(), role: "var".into() },
            BackendReferee { first_name: " Ana ".into(), last_name: "  ".into(), role: "".into() },
        ]);
        let referees = adapt_lineup_response(raw).referees.unwrap();
        assert_eq!(referees[0], Referee { name: "A B".into(), role: "main".into() });
        assert_eq!(referees[1].name, "B");
        assert_eq!(referees[2].name, "Ana");
    }

    #[test]
    fn coach_names_come_from_team_arrays_only() {
        let mut raw = lineup(team(1), team(2));
        raw.coaches = Some(BackendCoaches {
            home_team: Some(vec![coach("Stanimir", "Stoilov"), coach("Second", "Coach")]),
            away_team: Some(vec![]),
            home: Some(coach("Object", "Home")),
            away: None,
        });
        let adapted = adapt_lineup_response(raw);
        assert_eq!(adapted.lineups.home_team.coach_name.as_deref(), Some("Stanimir Stoilov"));
        assert!(adapted.lineups.away_team.coach_name.is_none());
        assert!(adapted.coaches.is_none(), "a single side never surfaces as the pair");
    }

    #[test]
    fn coach_pair_needs_both_objects() {
        let mut raw = lineup(team(1), team(2));
        raw.coaches = Some(BackendCoaches {
            home: Some(coach("Home", "Coach")),
            away: Some(BackendCoach { id: Some(77), ..coach("Away", "Coach") }),
            ..Default::default()
        });
        let adapted = adapt_lineup_response(raw);
        let pair = adapted.coaches.expect("both sides present");
        assert_eq!(pair.home.first_name, "Home");
        assert_eq!(pair.away.id, Some(77));
        assert!(adapted.lineups.home_team.coach_name.is_none());
        assert!(adapted.lineups.away_team.coach_name.is_none());
    }

    #[test]
    fn adapts_a_full_backend_payload() {
        let raw: BackendLineupResponse = serde_json::from_str(
            r#"{
                "game_id": 42,
                "lineups": {
                    "home_team": {
                        "team_id": 1, "team_name": "Astana", "formation": null,
                        "starters": [{"id": 1, "first_name": "A", "last_name": "B",
                                      "shirt_number": 1, "position": "Вратарь"}]
                    },
                    "away_team": {"team_id": 2, "team_name": "Kairat", "substitutes": null}
                },
                "referees": [{"first_name": "R", "last_name": "S", "role": "main"}],
                "coaches": {"home_team": [{"first_name": "C", "last_name": "D"}]}
            }"#,
        )
        .unwrap();
        let adapted = adapt_lineup_response(raw);
        assert!(adapted.has_lineup);
        assert_eq!(adapted.lineups.home_team.formation, "4-4-2");
        assert_eq!(adapted.lineups.home_team.starters[0].position, Position::Goalkeeper);
        assert_eq!(adapted.lineups.home_team.coach_name.as_deref(), Some("C D"));
        assert_eq!(adapted.referees.unwrap()[0].name, "R S");

        let json = serde_json::to_value(adapt_lineup_response(lineup(team(1), team(2)))).unwrap();
        assert_eq!(json["rendering"]["mode"], "hidden");
        assert_eq!(json["rendering"]["source"], "none");
        assert!(json["lineups"]["home_team"]["kit_color"].is_null());
        assert!(json.get("coaches").is_none());
    }
}
