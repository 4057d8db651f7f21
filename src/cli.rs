#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Lineup { game_id: u64 },
    Events { game_id: u64 },
    Stats { game_id: u64, home_team_id: u64, away_team_id: u64 },
    Roster { team_id: u64, season_id: Option<u64> },
    Reactions { news_id: u64 },
    Match { game_id: u64, home_team_id: u64, away_team_id: u64 },
    Help,
    Version,
}

pub fn usage_text() -> &'static str {
    "league-center - football league match center

Usage:
  league-center lineup <game_id>
  league-center events <game_id>
  league-center stats <game_id> <home_team_id> <away_team_id>
  league-center roster <team_id> [season_id]
  league-center reactions <news_id>
  league-center match <game_id> <home_team_id> <away_team_id>
  league-center --help
  league-center --version

Environment:
  LEAGUE_API_URL            Backend base URL (default http://localhost:8000/api/v1)
  LEAGUE_API_TIMEOUT_SECS   Request timeout in seconds (default 10)
  LEAGUE_LANG               ru, kz or en (default ru)
  LEAGUE_I18N_JSON          Path to a JSON message catalog
  RUST_LOG                  Log filter (default warn)"
}

pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Command, String> {
    let mut args = args.into_iter();
    let Some(name) = args.next() else {
        return Ok(Command::Help);
    };
    let rest: Vec<String> = args.collect();

    let command = match name.as_str() {
        "-h" | "--help" | "help" => Command::Help,
        "-V" | "--version" => Command::Version,
        "lineup" => {
            let [game_id] = ids::<1>(&name, &rest)?;
            Command::Lineup { game_id }
        }
        "events" => {
            let [game_id] = ids::<1>(&name, &rest)?;
            Command::Events { game_id }
        }
        "stats" => {
            let [game_id, home_team_id, away_team_id] = ids::<3>(&name, &rest)?;
            Command::Stats { game_id, home_team_id, away_team_id }
        }
        "match" => {
            let [game_id, home_team_id, away_team_id] = ids::<3>(&name, &rest)?;
            Command::Match { game_id, home_team_id, away_team_id }
        }
        "reactions" => {
            let [news_id] = ids::<1>(&name, &rest)?;
            Command::Reactions { news_id }
        }
        "roster" => match rest.as_slice() {
            [team_id] => Command::Roster { team_id: id(team_id)?, season_id: None },
            [team_id, season_id] => {
                Command::Roster { team_id: id(team_id)?, season_id: Some(id(season_id)?) }
            }
            _ => return Err("roster expects <team_id> [season_id]".into()),
        },
        other => return Err(format!("Unknown command: {other}")),
    };
    Ok(command)
}

/// Exactly `N` numeric ids after the command name.
fn ids<const N: usize>(command: &str, rest: &[String]) -> Result<[u64; N], String> {
    if rest.len() != N {
        return Err(format!("{command} expects {N} id(s), got {}", rest.len()));
    }
    let mut parsed = [0u64; N];
    for (slot, raw) in parsed.iter_mut().zip(rest) {
        *slot = id(raw)?;
    }
    Ok(parsed)
}

fn id(raw: &str) -> Result<u64, String> {
    raw.trim().parse::<u64>().map_err(|_| format!("Not a numeric id: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Result<Command, String> {
        parse(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn no_arguments_shows_help() {
        assert_eq!(parse_args(&[]), Ok(Command::Help));
        assert_eq!(parse_args(&["--version"]), Ok(Command::Version));
    }

    #[test]
    fn commands_parse_their_ids() {
        assert_eq!(parse_args(&["lineup", "88"]), Ok(Command::Lineup { game_id: 88 }));
        assert_eq!(
            parse_args(&["stats", "7", "1", "2"]),
            Ok(Command::Stats { game_id: 7, home_team_id: 1, away_team_id: 2 })
        );
        assert_eq!(
            parse_args(&["roster", "4"]),
            Ok(Command::Roster { team_id: 4, season_id: None })
        );
        assert_eq!(
            parse_args(&["roster", "4", "2025"]),
            Ok(Command::Roster { team_id: 4, season_id: Some(2025) })
        );
    }

    #[test]
    fn bad_input_is_rejected() {
        assert!(parse_args(&["lineup"]).is_err());
        assert!(parse_args(&["lineup", "abc"]).is_err());
        assert!(parse_args(&["stats", "7", "1"]).is_err());
        assert!(parse_args(&["roster", "1", "2", "3"]).is_err());
        assert_eq!(parse_args(&["table"]), Err("Unknown command: table".into()));
    }
}
