//! Backend raw wire types: serde shapes for league backend payloads.
//! These map to the canonical domain types via the adapters in lineup.rs, events.rs,
//! stats.rs, news.rs and roster.rs.
//!
//! The backend is loosely typed: numbers may arrive as strings, names as null, and
//! enumerated codes outside the known set. None of that fails a payload; the field
//! reads as absent instead.
use crate::{Amplua, FieldPosition, LineupSource, RenderingMode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Match lineup
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BackendLineupResponse {
    #[serde(default, deserialize_with = "id_or_default")]
    pub game_id: u64,
    pub has_lineup: Option<bool>,
    pub rendering: Option<BackendRendering>,
    pub lineups: BackendLineups,
    pub referees: Option<Vec<BackendReferee>>,
    pub coaches: Option<BackendCoaches>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BackendRendering {
    #[serde(default, deserialize_with = "code_or_none")]
    pub mode: Option<RenderingMode>,
    #[serde(default, deserialize_with = "code_or_none")]
    pub source: Option<LineupSource>,
    pub field_allowed_by_rules: Option<bool>,
    pub field_data_valid: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BackendLineups {
    pub home_team: BackendTeamLineup,
    pub away_team: BackendTeamLineup,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BackendTeamLineup {
    #[serde(default, deserialize_with = "id_or_default")]
    pub team_id: u64,
    #[serde(default, deserialize_with = "string_or_default")]
    pub team_name: String,
    pub formation: Option<String>,
    pub kit_color: Option<String>,
    pub starters: Option<Vec<BackendLineupPlayer>>,
    pub substitutes: Option<Vec<BackendLineupPlayer>>,
}

impl BackendTeamLineup {
    /// Starters plus substitutes; absent lists count as empty.
    pub fn player_count(&self) -> usize {
        self.starters.as_ref().map_or(0, Vec::len) + self.substitutes.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BackendLineupPlayer {
    #[serde(default, deserialize_with = "id_or_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "string_or_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "number_or_none")]
    pub shirt_number: Option<u32>,
    /// Free text: "CF", "ЦЗ (центральный защитник)", "Вратарь", ...
    pub position: Option<String>,
    #[serde(default, deserialize_with = "code_or_none")]
    pub amplua: Option<Amplua>,
    #[serde(default, deserialize_with = "code_or_none")]
    pub field_position: Option<FieldPosition>,
    pub is_captain: Option<bool>,
    pub photo_url: Option<String>,
    pub country: Option<BackendCountry>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BackendCountry {
    #[serde(default, deserialize_with = "id_or_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "string_or_default")]
    pub code: String, // ISO code, e.g. "KZ"
    #[serde(default, deserialize_with = "string_or_default")]
    pub name: String,
    pub flag_url: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BackendReferee {
    #[serde(default, deserialize_with = "string_or_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub role: String, // "main", "first_assistant", "var", ...
}

/// Two sync sources feed this object: the squad sync writes per-team arrays
/// (`home_team`/`away_team`), the match sync writes one coach per side
/// (`home`/`away`). Either, both or neither may be present.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct BackendCoaches {
    pub home_team: Option<Vec<BackendCoach>>,
    pub away_team: Option<Vec<BackendCoach>>,
    pub home: Option<BackendCoach>,
    pub away: Option<BackendCoach>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BackendCoach {
    #[serde(default, deserialize_with = "number_or_none")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "string_or_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub last_name: String,
    pub photo_url: Option<String>,
    pub country: Option<BackendCountry>,
}

// ---------------------------------------------------------------------------
// Live events
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BackendLiveEventsResponse {
    #[serde(default, deserialize_with = "id_or_default")]
    pub game_id: u64,
    #[serde(default, deserialize_with = "vec_or_default")]
    pub events: Vec<BackendLiveEvent>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub total: Option<u32>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BackendLiveEvent {
    #[serde(default, deserialize_with = "number_or_none")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub half: Option<u8>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub minute: Option<u16>,
    #[serde(default, deserialize_with = "string_or_default")]
    pub event_type: String,
    #[serde(default, deserialize_with = "number_or_none")]
    pub team_id: Option<u64>,
    pub team_name: Option<String>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub player_id: Option<u64>,
    pub player_name: Option<String>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub player_number: Option<u32>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub player2_id: Option<u64>,
    pub player2_name: Option<String>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub player2_number: Option<u32>,
    pub player2_team_name: Option<String>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub assist_player_id: Option<u64>,
    pub assist_player_name: Option<String>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub assist_player_number: Option<u32>,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Team statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BackendGameStatsResponse {
    #[serde(default, deserialize_with = "id_or_default")]
    pub game_id: u64,
    #[serde(default, deserialize_with = "vec_or_default")]
    pub team_stats: Vec<BackendTeamStatsEntry>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BackendTeamStatsEntry {
    #[serde(default, deserialize_with = "id_or_default")]
    pub team_id: u64,
    #[serde(default, deserialize_with = "number_or_none")]
    pub possession_percent: Option<f64>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub shots: Option<u32>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub shots_on_goal: Option<u32>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub corners: Option<u32>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub fouls: Option<u32>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub offsides: Option<u32>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub yellow_cards: Option<u32>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub red_cards: Option<u32>,
}

// ---------------------------------------------------------------------------
// News reactions
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BackendNewsReactions {
    #[serde(default, deserialize_with = "number_or_none")]
    pub views: Option<u64>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub likes: Option<u64>,
    pub liked: Option<bool>,
}

// ---------------------------------------------------------------------------
// Team roster
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BackendTeamPlayersResponse {
    #[serde(default, deserialize_with = "id_or_default")]
    pub team_id: u64,
    #[serde(default, deserialize_with = "vec_or_default")]
    pub players: Vec<BackendTeamPlayer>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BackendTeamPlayer {
    #[serde(default, deserialize_with = "id_or_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "string_or_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "number_or_none")]
    pub number: Option<u32>,
    /// Squad sync enumerates "goalkeeper", "defender", "midfielder", "forward",
    /// though older seasons carry free text.
    pub player_type: Option<String>,
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub age: Option<u8>,
    pub country: Option<BackendCountry>,
}

// ---------------------------------------------------------------------------
// Error bodies
// ---------------------------------------------------------------------------

/// Body of a non-2xx response. The backend has used all three keys over time.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct BackendErrorBody {
    pub detail: Option<Value>,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl BackendErrorBody {
    /// First human-readable message in the body, if any.
    pub fn into_message(self) -> Option<String> {
        let detail = match self.detail {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };
        detail
            .or(self.error)
            .or(self.message)
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Lenient field readers
// ---------------------------------------------------------------------------

fn vec_or_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

fn string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let rendered = match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    Ok(rendered)
}

/// Numbers, numeric strings and null. Anything unreadable as `T` is absent.
fn number_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + FromStr,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => serde_json::from_value(Value::Number(n)).ok(),
        Value::String(s) => s.trim().parse::<T>().ok(),
        _ => None,
    })
}

/// Identifiers the adapters require; unreadable ids read as 0.
fn id_or_default<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number_or_none::<D, u64>(deserializer)?.unwrap_or_default())
}

/// Enumerated codes; values outside the known set read as absent.
fn code_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
