//! Message lookup for user-facing service errors.
//!
//! Templates use `{{name}}` placeholders. A key missing from the catalog
//! renders the caller's default text through the same interpolation, so a
//! partially translated catalog still produces a readable message.

use crate::config::Language;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

pub trait Translate: fmt::Debug + Send + Sync {
    fn t(&self, key: &str, default_value: &str, vars: &[(&str, &str)]) -> String;
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Service error messages shipped with the client.
    pub fn builtin(lang: Language) -> Self {
        let entries: &[(&str, &str)] = match lang {
            Language::Ru => &[
                ("errors.lineup", "Не удалось загрузить составы матча"),
                ("errors.liveEvents", "Не удалось загрузить события матча"),
                ("errors.matchStats", "Не удалось загрузить статистику матча"),
                ("errors.teamRoster", "Не удалось загрузить состав команды"),
                ("errors.newsView", "Не удалось отметить просмотр новости"),
                ("errors.newsLike", "Не удалось поставить отметку «нравится»"),
            ],
            Language::Kz => &[
                ("errors.lineup", "Матч құрамдарын жүктеу мүмкін болмады"),
                ("errors.liveEvents", "Матч оқиғаларын жүктеу мүмкін болмады"),
                ("errors.matchStats", "Матч статистикасын жүктеу мүмкін болмады"),
                ("errors.teamRoster", "Команда құрамын жүктеу мүмкін болмады"),
                ("errors.newsView", "Жаңалықты қарауды белгілеу мүмкін болмады"),
                ("errors.newsLike", "Жаңалыққа ұнату белгісін қою мүмкін болмады"),
            ],
            Language::En => &[],
        };
        entries.iter().fold(Self::new(), |catalog, (key, template)| {
            catalog.with_message(*key, *template)
        })
    }

    pub fn with_message(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.messages.insert(key.into(), template.into());
        self
    }

    /// Load a JSON catalog. Nested objects flatten into dotted keys
    /// (`{"errors": {"lineup": "..."}}` → `errors.lineup`); non-string leaves are skipped.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        flatten_into(&mut catalog.messages, String::new(), value);
        Ok(catalog)
    }

    /// Entries of `other` replace ours.
    pub fn merge(mut self, other: Catalog) -> Self {
        self.messages.extend(other.messages);
        self
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translate for Catalog {
    fn t(&self, key: &str, default_value: &str, vars: &[(&str, &str)]) -> String {
        let template = self.messages.get(key).map_or(default_value, String::as_str);
        interpolate(template, vars)
    }
}

fn flatten_into(messages: &mut HashMap<String, String>, prefix: String, value: Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() { key } else { format!("{prefix}.{key}") };
                flatten_into(messages, path, child);
            }
        }
        Value::String(s) if !prefix.is_empty() => {
            messages.insert(prefix, s);
        }
        _ => {}
    }
}

fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_owned(), |text, (name, value)| {
        text.replace(&format!("{{{{{name}}}}}"), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_uses_default_value() {
        let catalog = Catalog::new();
        assert_eq!(catalog.t("errors.lineup", "Failed to load lineup", &[]), "Failed to load lineup");
    }

    #[test]
    fn placeholders_are_interpolated() {
        let catalog = Catalog::new().with_message("errors.status", "Server error ({{status}}) at {{path}}");
        assert_eq!(
            catalog.t("errors.status", "unused", &[("status", "502"), ("path", "/games")]),
            "Server error (502) at /games"
        );
        assert_eq!(catalog.t("other", "Code {{status}}", &[("status", "404")]), "Code 404");
    }

    #[test]
    fn json_catalog_flattens_nested_keys() {
        let catalog = Catalog::from_json(
            r#"{"errors": {"lineup": "Lineup down", "nested": {"deep": "Deep"}, "count": 3}, "title": "League"}"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.t("errors.lineup", "", &[]), "Lineup down");
        assert_eq!(catalog.t("errors.nested.deep", "", &[]), "Deep");
        assert_eq!(catalog.t("errors.count", "fallback", &[]), "fallback");
    }

    #[test]
    fn merged_entries_override_builtin_ones() {
        let catalog = Catalog::builtin(Language::Ru)
            .merge(Catalog::new().with_message("errors.lineup", "Составы недоступны"));
        assert_eq!(catalog.t("errors.lineup", "", &[]), "Составы недоступны");
        assert_eq!(
            catalog.t("errors.matchStats", "", &[]),
            "Не удалось загрузить статистику матча"
        );
    }

    #[test]
    fn english_builtin_relies_on_defaults() {
        let catalog = Catalog::builtin(Language::En);
        assert!(catalog.is_empty());
        assert_eq!(catalog.t("errors.lineup", "Failed to load lineup", &[]), "Failed to load lineup");
    }
}
