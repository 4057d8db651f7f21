use crate::backend::{BackendTeamPlayer, BackendTeamPlayersResponse};
use crate::lineup::map_country;
use crate::position::RoleClassifier;
use crate::{Position, RosterPlayer};

/// Classify a squad `player_type` value. Anything unrecognized is a forward.
pub fn map_player_type_to_position(player_type: &str) -> Position {
    RoleClassifier::ROSTER.classify(Some(player_type))
}

/// Map a backend squad listing, keeping the backend order.
pub fn adapt_team_roster(raw: BackendTeamPlayersResponse) -> Vec<RosterPlayer> {
    raw.players.into_iter().map(map_roster_player).collect()
}

fn map_roster_player(p: BackendTeamPlayer) -> RosterPlayer {
    RosterPlayer {
        position: map_player_type_to_position(p.player_type.as_deref().unwrap_or_default()),
        id: p.id,
        first_name: p.first_name,
        last_name: p.last_name,
        number: p.number,
        photo_url: p.photo_url,
        age: p.age,
        country: p.country.map(map_country),
    }
}
