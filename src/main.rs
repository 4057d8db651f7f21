mod cli;

use crate::cli::Command;
use league_api::MatchCenter;
use league_api::client::{ApiResult, LeagueApi};
use log::debug;
use serde::Serialize;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let command = match cli::parse(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{}", cli::usage_text());
            return Ok(());
        }
        Ok(Command::Version) => {
            println!("league-center {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Ok(command) => command,
        Err(message) => {
            eprintln!("{message}\n\n{}", cli::usage_text());
            std::process::exit(2);
        }
    };

    better_panic::install();
    init_logging();

    let api = LeagueApi::from_env()?;
    debug!("using backend {}", api.config().base_url);

    let output = run(&api, command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// `RUST_LOG` controls verbosity; library `log` records are bridged into the subscriber.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(api: &LeagueApi, command: Command) -> anyhow::Result<Value> {
    let output = match command {
        Command::Lineup { game_id } => to_json(&api.fetch_match_lineup(game_id).await?)?,
        Command::Events { game_id } => to_json(&api.fetch_live_events(game_id).await?)?,
        Command::Stats { game_id, home_team_id, away_team_id } => {
            to_json(&api.fetch_match_stats(game_id, home_team_id, away_team_id).await?)?
        }
        Command::Roster { team_id, season_id } => {
            to_json(&api.fetch_team_roster(team_id, season_id).await?)?
        }
        Command::Reactions { news_id } => to_json(&api.fetch_news_reactions(news_id).await)?,
        Command::Match { game_id, home_team_id, away_team_id } => {
            match_center_json(api.fetch_match_center(game_id, home_team_id, away_team_id).await)?
        }
        Command::Help | Command::Version => Value::Null,
    };
    Ok(output)
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Each part renders on its own; a failed part shows as `{"error": ...}`.
fn match_center_json(center: MatchCenter) -> anyhow::Result<Value> {
    fn part<T: Serialize>(result: ApiResult<T>) -> anyhow::Result<Value> {
        match result {
            Ok(value) => to_json(&value),
            Err(err) => Ok(json!({ "error": err.to_string(), "status": err.status() })),
        }
    }

    Ok(json!({
        "lineup": part(center.lineup)?,
        "events": part(center.events)?,
        "stats": part(center.stats)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_api::client::ApiError;

    #[test]
    fn match_center_failures_render_inline() {
        let center = MatchCenter {
            lineup: Err(ApiError::Failed { status: 404, message: "Game not found".into() }),
            events: Err(ApiError::Other("offline".into())),
            stats: Ok(None),
        };
        let value = match_center_json(center).unwrap();
        assert_eq!(value["lineup"]["error"], "Game not found");
        assert_eq!(value["lineup"]["status"], 404);
        assert_eq!(value["events"]["status"], 0);
        assert!(value["stats"].is_null());
    }
}
