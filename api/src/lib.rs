pub mod backend;
pub mod client;
pub mod config;
pub mod events;
pub mod i18n;
pub mod lineup;
pub mod news;
pub mod position;
pub mod roster;
pub mod stats;

use crate::client::ApiResult;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Domain types: canonical shapes, independent of the backend wire format.
//
// `Option` fields that serialize as `null` are "known to be empty"; fields
// marked `skip_serializing_if` are omitted entirely when unknown.
// ---------------------------------------------------------------------------

/// Canonical four-bucket role of a player on the pitch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[default]
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

/// Structured role code sent by the lineup sync pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Amplua {
    #[serde(rename = "Gk")]
    Goalkeeper,
    #[serde(rename = "D")]
    Defender,
    #[serde(rename = "DM")]
    DefensiveMidfielder,
    #[serde(rename = "M")]
    Midfielder,
    #[serde(rename = "AM")]
    AttackingMidfielder,
    #[serde(rename = "F")]
    Forward,
}

/// Side of the pitch a player occupies in the formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldPosition {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "LC")]
    LeftCenter,
    #[serde(rename = "C")]
    Center,
    #[serde(rename = "RC")]
    RightCenter,
    #[serde(rename = "R")]
    Right,
}

/// How much lineup visualization the available data supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderingMode {
    Field,
    List,
    Hidden,
}

/// Where the lineup data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineupSource {
    TeamSquad,
    SotaApi,
    VsporteApi,
    MatchesPlayers,
    #[serde(rename = "none")]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupResponse {
    pub match_id: u64,
    pub has_lineup: bool,
    pub rendering: Rendering,
    pub lineups: Lineups,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referees: Option<Vec<Referee>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coaches: Option<MatchCoaches>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendering {
    pub mode: RenderingMode,
    pub source: LineupSource,
    pub field_allowed_by_rules: bool,
    pub field_data_valid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lineups {
    pub home_team: TeamLineupData,
    pub away_team: TeamLineupData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamLineupData {
    pub team_id: u64,
    pub team_name: String,
    pub formation: String,
    pub kit_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coach_name: Option<String>,
    pub starters: Vec<LineupPlayerExtended>,
    pub substitutes: Vec<LineupPlayerExtended>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupPlayerExtended {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub number: u32,
    pub position: Position,
    pub amplua: Option<Amplua>,
    pub field_position: Option<FieldPosition>,
    pub is_captain: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Country {
    pub id: u64,
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Referee {
    pub name: String, // "First Last", trimmed
    pub role: String,
}

/// Head coaches of both sides. Only ever populated as a pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCoaches {
    pub home: Coach,
    pub away: Coach,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coach {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
}

/// Live match events in the order the backend reported them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventsResponse {
    pub game_id: u64,
    pub total: u32,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub half: u8,
    pub minute: u16,
    pub event_type: String, // "goal", "yellow_card", "substitution", ...
    pub team_id: Option<u64>,
    pub team_name: String,
    pub player_id: Option<u64>,
    pub player_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_number: Option<u32>,
    pub player2_id: Option<u64>,
    pub player2_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player2_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player2_team_name: Option<String>,
    pub assist_player_id: Option<u64>,
    pub assist_player_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assist_player_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One metric for both sides of a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatPair<T> {
    pub home: T,
    pub away: T,
}

/// Home/away comparison of team statistics for a single match.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchStats {
    pub possession: StatPair<f64>,
    pub shots: StatPair<u32>,
    pub shots_on_target: StatPair<u32>,
    pub corners: StatPair<u32>,
    pub fouls: StatPair<u32>,
    pub offsides: StatPair<u32>,
    pub yellow_cards: StatPair<u32>,
    pub red_cards: StatPair<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NewsReactions {
    pub views: u64,
    pub likes: u64,
    pub liked: bool,
}

/// Squad member as shown on a team page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterPlayer {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
}

/// Everything a match page needs, loaded side by side. Each part fails on its own.
#[derive(Debug)]
pub struct MatchCenter {
    pub lineup: ApiResult<LineupResponse>,
    pub events: ApiResult<EventsResponse>,
    pub stats: ApiResult<Option<MatchStats>>,
}
