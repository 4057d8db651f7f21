use crate::backend::{
    BackendErrorBody, BackendGameStatsResponse, BackendLineupResponse, BackendLiveEventsResponse,
    BackendNewsReactions, BackendTeamPlayersResponse,
};
use crate::config::Config;
use crate::events::adapt_events_response;
use crate::i18n::{Catalog, Translate};
use crate::lineup::adapt_lineup_response;
use crate::news::{GapNotice, adapt_news_reactions, adapt_news_reactions_fallback};
use crate::roster::adapt_team_roster;
use crate::stats::transform_team_stats;
use crate::{EventsResponse, LineupResponse, MatchCenter, MatchStats, NewsReactions, RosterPlayer};
use futures_util::future::join3;
use log::{debug, error};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

pub type ApiResult<T> = Result<T, ApiError>;

/// League backend client. Every service fetches one resource and hands the
/// payload to its adapter, so callers only ever see canonical types.
#[derive(Debug, Clone)]
pub struct LeagueApi {
    client: Client,
    config: Config,
    translator: Arc<dyn Translate>,
    gap_notice: Arc<GapNotice>,
}

impl Default for LeagueApi {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Status {
        status: u16,
        url: String,
        message: Option<String>,
    },
    Parsing(reqwest::Error, String),
    /// A service call failed; `message` is ready to show to the user.
    Failed { status: u16, message: String },
    Other(String),
}

impl ApiError {
    /// HTTP status of the failure; 0 when no response was received.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Status { status, .. } | ApiError::Failed { status, .. } => *status,
            ApiError::Network(..) | ApiError::Parsing(..) | ApiError::Other(_) => 0,
        }
    }

    /// Message supplied by the backend itself, if it sent one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Status { status, url, message: Some(message) } => {
                write!(f, "HTTP {status} for {url}: {message}")
            }
            ApiError::Status { status, url, message: None } => write!(f, "HTTP {status} for {url}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::Failed { message, .. } => write!(f, "{message}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl LeagueApi {
    pub fn new(config: Config) -> Self {
        let translator = Arc::new(Catalog::builtin(config.lang));
        Self {
            client: Client::builder()
                .user_agent(concat!("league-api/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
            config,
            translator,
            gap_notice: Arc::new(GapNotice::new()),
        }
    }

    /// Client configured from the environment (see [`Config::from_env`]).
    ///
    /// A catalog file named by `LEAGUE_I18N_JSON` is layered over the
    /// built-in messages for the configured language.
    pub fn from_env() -> ApiResult<Self> {
        let config = Config::from_env();
        let mut catalog = Catalog::builtin(config.lang);

        if let Some(path) = &config.catalog_path {
            let content = std::fs::read_to_string(path)
                .map_err(|e| ApiError::Other(format!("could not read {}: {e}", path.display())))?;
            let overrides = Catalog::from_json(&content).map_err(|e| {
                ApiError::Other(format!("invalid message catalog at {}: {e}", path.display()))
            })?;
            catalog = catalog.merge(overrides);
        }

        Ok(Self::new(config).with_translator(Arc::new(catalog)))
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translate>) -> Self {
        self.translator = translator;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn gap_notice(&self) -> &GapNotice {
        &self.gap_notice
    }

    /// Starting lineups, substitutes, coaches and referees for a match.
    pub async fn fetch_match_lineup(&self, game_id: u64) -> ApiResult<LineupResponse> {
        let url = self.url(&format!("/games/{game_id}/lineup"));
        debug!("loading lineup for game {game_id}");
        let raw: BackendLineupResponse = self
            .get(&url)
            .await
            .map_err(|e| self.service_failure(e, "errors.lineup", "Failed to load match lineups"))?;
        Ok(adapt_lineup_response(raw))
    }

    /// Live events in backend order.
    pub async fn fetch_live_events(&self, game_id: u64) -> ApiResult<EventsResponse> {
        let url = self.url(&format!("/live/games/{game_id}/events"));
        debug!("loading live events for game {game_id}");
        let raw: BackendLiveEventsResponse = self.get(&url).await.map_err(|e| {
            self.service_failure(e, "errors.liveEvents", "Failed to load match events")
        })?;
        Ok(adapt_events_response(raw))
    }

    /// Team statistics comparison. `Ok(None)` when either team has no entry.
    pub async fn fetch_match_stats(
        &self,
        game_id: u64,
        home_team_id: u64,
        away_team_id: u64,
    ) -> ApiResult<Option<MatchStats>> {
        let url = self.url(&format!("/games/{game_id}/stats"));
        debug!("loading team stats for game {game_id}");
        let raw: BackendGameStatsResponse = self.get(&url).await.map_err(|e| {
            self.service_failure(e, "errors.matchStats", "Failed to load match statistics")
        })?;

        let stats = transform_team_stats(&raw.team_stats, home_team_id, away_team_id);
        if stats.is_none() {
            debug!("no stats for both teams {home_team_id} and {away_team_id} in game {game_id}");
        }
        Ok(stats)
    }

    /// Lineup, events and stats for one match, requested concurrently.
    pub async fn fetch_match_center(
        &self,
        game_id: u64,
        home_team_id: u64,
        away_team_id: u64,
    ) -> MatchCenter {
        let (lineup, events, stats) = join3(
            self.fetch_match_lineup(game_id),
            self.fetch_live_events(game_id),
            self.fetch_match_stats(game_id, home_team_id, away_team_id),
        )
        .await;
        MatchCenter { lineup, events, stats }
    }

    /// Squad list with each player's role bucket.
    pub async fn fetch_team_roster(
        &self,
        team_id: u64,
        season_id: Option<u64>,
    ) -> ApiResult<Vec<RosterPlayer>> {
        let mut url = self.url(&format!("/teams/{team_id}/players"));
        if let Some(season_id) = season_id {
            url.push_str(&format!("&season_id={season_id}"));
        }
        debug!("loading roster for team {team_id}");
        let raw: BackendTeamPlayersResponse = self.get(&url).await.map_err(|e| {
            self.service_failure(e, "errors.teamRoster", "Failed to load team players")
        })?;
        Ok(adapt_team_roster(raw))
    }

    /// Views and likes for a news item. Never fails: any error yields zeroed reactions.
    pub async fn fetch_news_reactions(&self, news_id: u64) -> NewsReactions {
        let url = self.url(&format!("/news/{news_id}/reactions"));
        debug!("loading reactions for news {news_id}");
        match self.get::<BackendNewsReactions>(&url).await {
            Ok(raw) => adapt_news_reactions(raw),
            Err(err) => {
                match err.status() {
                    404 => {
                        debug!("reactions for news {news_id} not found");
                        self.gap_notice.warn_once();
                    }
                    0 => debug!("reactions for news {news_id} unavailable: {err}"),
                    status => debug!("reactions for news {news_id} failed with HTTP {status}"),
                }
                adapt_news_reactions_fallback(&err)
            }
        }
    }

    pub async fn record_news_view(&self, news_id: u64) -> ApiResult<()> {
        let url = self.url(&format!("/news/{news_id}/view"));
        debug!("recording view for news {news_id}");
        self.execute(self.client.post(&url), &url)
            .await
            .map(|_| ())
            .map_err(|e| self.news_failure(e, "errors.newsView", "Failed to record news view"))
    }

    /// Like a news item; returns the reactions after the like.
    pub async fn like_news(&self, news_id: u64) -> ApiResult<NewsReactions> {
        let url = self.url(&format!("/news/{news_id}/like"));
        debug!("liking news {news_id}");
        let raw: BackendNewsReactions = self
            .fetch(self.client.post(&url), &url)
            .await
            .map_err(|e| self.news_failure(e, "errors.newsLike", "Failed to like news"))?;
        Ok(adapt_news_reactions(raw))
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}{path}?lang={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.lang.as_str()
        )
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        self.fetch(self.client.get(url), url).await
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder, url: &str) -> ApiResult<T> {
        self.execute(request, url)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }

    async fn execute(&self, request: RequestBuilder, url: &str) -> ApiResult<Response> {
        let response = request
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<BackendErrorBody>()
            .await
            .ok()
            .and_then(BackendErrorBody::into_message);
        Err(ApiError::Status { status: status.as_u16(), url: url.to_owned(), message })
    }

    /// Turn a transport/HTTP error into the user-facing failure for a service.
    /// The backend's own message wins over the localized one.
    fn service_failure(&self, err: ApiError, key: &str, default_value: &str) -> ApiError {
        error!("{err}");
        let message = match err.backend_message() {
            Some(message) => message.to_owned(),
            None => self.translator.t(key, default_value, &[]),
        };
        ApiError::Failed { status: err.status(), message }
    }

    fn news_failure(&self, err: ApiError, key: &str, default_value: &str) -> ApiError {
        if err.status() == 404 {
            self.gap_notice.warn_once();
        }
        self.service_failure(err, key, default_value)
    }
}
