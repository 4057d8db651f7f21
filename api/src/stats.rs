use crate::backend::BackendTeamStatsEntry;
use crate::{MatchStats, StatPair};

/// Build the home/away comparison for one match from per-team entries.
///
/// Returns `None` unless entries for both teams are present; a one-sided
/// comparison is never produced. Missing metrics read as zero, so an absent
/// value and a real zero are indistinguishable in the output.
pub fn transform_team_stats(
    entries: &[BackendTeamStatsEntry],
    home_team_id: u64,
    away_team_id: u64,
) -> Option<MatchStats> {
    let home = entries.iter().find(|e| e.team_id == home_team_id)?;
    let away = entries.iter().find(|e| e.team_id == away_team_id)?;

    let count = |metric: fn(&BackendTeamStatsEntry) -> Option<u32>| StatPair {
        home: metric(home).unwrap_or(0),
        away: metric(away).unwrap_or(0),
    };

    Some(MatchStats {
        possession: StatPair {
            home: percent(home.possession_percent),
            away: percent(away.possession_percent),
        },
        shots: count(|e| e.shots),
        shots_on_target: count(|e| e.shots_on_goal),
        corners: count(|e| e.corners),
        fouls: count(|e| e.fouls),
        offsides: count(|e| e.offsides),
        yellow_cards: count(|e| e.yellow_cards),
        red_cards: count(|e| e.red_cards),
    })
}

fn percent(value: Option<f64>) -> f64 {
    value.filter(|v| !v.is_nan()).unwrap_or(0.0)
}
