use crate::backend::{BackendLiveEvent, BackendLiveEventsResponse};
use crate::{EventsResponse, GameEvent};

/// Events without a half belong to the first one.
const DEFAULT_HALF: u8 = 1;

/// Map a backend live-events payload into the canonical [`EventsResponse`].
///
/// Events keep the backend order; nothing here sorts them by minute.
pub fn adapt_events_response(raw: BackendLiveEventsResponse) -> EventsResponse {
    EventsResponse {
        game_id: raw.game_id,
        total: raw.total.unwrap_or(0),
        events: raw.events.into_iter().map(map_event).collect(),
    }
}

fn map_event(e: BackendLiveEvent) -> GameEvent {
    GameEvent {
        id: e.id,
        half: e.half.unwrap_or(DEFAULT_HALF),
        minute: e.minute.unwrap_or_default(),
        event_type: e.event_type,
        team_id: e.team_id,
        team_name: e.team_name.unwrap_or_default(),
        player_id: e.player_id,
        player_name: e.player_name.unwrap_or_default(),
        player_number: e.player_number,
        player2_id: e.player2_id,
        player2_name: e.player2_name.unwrap_or_default(),
        player2_number: e.player2_number,
        player2_team_name: e.player2_team_name,
        assist_player_id: e.assist_player_id,
        assist_player_name: e.assist_player_name.unwrap_or_default(),
        assist_player_number: e.assist_player_number,
        description: e.description,
    }
}
