use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Site languages. Sent to the backend as the `lang` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Ru,
    Kz,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::Kz => "kz",
            Language::En => "en",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ru" => Some(Language::Ru),
            "kz" | "kk" => Some(Language::Kz),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
    pub lang: Language,
    /// JSON message catalog layered over the built-in messages.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            lang: Language::default(),
            catalog_path: None,
        }
    }
}

impl Config {
    /// Defaults overlaid with `LEAGUE_API_URL`, `LEAGUE_API_TIMEOUT_SECS`,
    /// `LEAGUE_LANG` and `LEAGUE_I18N_JSON`. Unparseable values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            base_url: non_empty("LEAGUE_API_URL")
                .map(|url| url.trim().trim_end_matches('/').to_owned())
                .unwrap_or(defaults.base_url),
            timeout: non_empty("LEAGUE_API_TIMEOUT_SECS")
                .and_then(|secs| secs.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            lang: non_empty("LEAGUE_LANG")
                .and_then(|code| Language::parse(&code))
                .unwrap_or(defaults.lang),
            catalog_path: non_empty("LEAGUE_I18N_JSON").map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.lang, Language::Ru);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn environment_overrides_are_applied() {
        let config = config_from(&[
            ("LEAGUE_API_URL", "https://stats.example.kz/api/v1/"),
            ("LEAGUE_API_TIMEOUT_SECS", "3"),
            ("LEAGUE_LANG", "KZ"),
            ("LEAGUE_I18N_JSON", "/etc/league/en.json"),
        ]);
        assert_eq!(config.base_url, "https://stats.example.kz/api/v1");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.lang, Language::Kz);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/etc/league/en.json")));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("LEAGUE_API_URL", "  "),
            ("LEAGUE_API_TIMEOUT_SECS", "soon"),
            ("LEAGUE_LANG", "de"),
        ]);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.lang, Language::Ru);

        assert_eq!(config_from(&[("LEAGUE_API_TIMEOUT_SECS", "0")]).timeout, Duration::from_secs(10));
    }
}
