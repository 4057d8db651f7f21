//! Role classification for free-text position labels.
//!
//! Lineup data and squad data describe roles differently. Lineup pipelines
//! emit short codes in Latin or Cyrillic ("CF", "ЦЗ") and sometimes a full
//! Russian description ("Вратарь"); the squad sync emits English words
//! ("goalkeeper", "midfielder"). Both are folded into [`Position`] through a
//! single [`RoleClassifier`] configured per source.

use crate::Position;

const GOALKEEPER_CODES: &[&str] = &["GK", "G", "ВР", "ГК", "ВРТ"];
const DEFENDER_CODES: &[&str] = &[
    "CD", "LD", "RD", "LB", "RB", "CB", "D", "ЛЗ", "ПЗ", "ЦЗ", "ЗЩ", "ЗАЩ",
];
const MIDFIELDER_CODES: &[&str] = &[
    "DM", "CM", "AM", "LM", "RM", "LW", "RW", "M", "ОП", "ЦП", "АП", "ПП", "ЛП", "ПЗЩ",
];
const FORWARD_CODES: &[&str] = &["CF", "ST", "FW", "F", "ЦН", "НП", "ЦФ", "НАП"];

/// Checked in order; the first set containing the code wins.
const CODE_SETS: [(&[&str], Position); 4] = [
    (GOALKEEPER_CODES, Position::Goalkeeper),
    (DEFENDER_CODES, Position::Defender),
    (MIDFIELDER_CODES, Position::Midfielder),
    (FORWARD_CODES, Position::Forward),
];

/// Word stems of the Russian role names, matched anywhere in the label.
const DESCRIPTION_STEMS: [(&str, Position); 4] = [
    ("ВРАТ", Position::Goalkeeper),
    ("ЗАЩИТ", Position::Defender),
    ("ПОЛУЗАЩ", Position::Midfielder),
    ("НАПАД", Position::Forward),
];

/// English role words from the squad sync, lowercase, in priority order.
const PLAYER_TYPE_WORDS: [(&[&str], Position); 3] = [
    (&["goalkeeper", "gk"], Position::Goalkeeper),
    (&["defender", "defence", "def"], Position::Defender),
    (&["midfielder", "halfback", "mid"], Position::Midfielder),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Exact code match first, then Russian word stems.
    Structured,
    /// Lowercase substring match against English role words.
    FreeText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleClassifier {
    pub strategy: Strategy,
    /// Bucket for labels nothing matched, including empty ones.
    pub fallback: Position,
}

impl RoleClassifier {
    /// Lineup `position` labels. Midfield is the most populous role.
    pub const LINEUP: Self = Self { strategy: Strategy::Structured, fallback: Position::Midfielder };

    /// Squad `player_type` values. Attacking roles are the residual case there.
    pub const ROSTER: Self = Self { strategy: Strategy::FreeText, fallback: Position::Forward };

    pub fn classify(&self, label: Option<&str>) -> Position {
        let label = label.unwrap_or_default();
        let matched = match self.strategy {
            Strategy::Structured => classify_structured(label),
            Strategy::FreeText => classify_free_text(label),
        };
        matched.unwrap_or(self.fallback)
    }
}

/// Classify a lineup position label, defaulting to [`Position::Midfielder`].
pub fn classify_position(label: Option<&str>) -> Position {
    RoleClassifier::LINEUP.classify(label)
}

fn classify_structured(label: &str) -> Option<Position> {
    if label.is_empty() {
        return None;
    }

    let normalized = label.trim().to_uppercase();
    let code = position_code(&normalized);

    CODE_SETS
        .iter()
        .find(|(codes, _)| codes.contains(&code.as_str()))
        .map(|(_, position)| *position)
        .or_else(|| {
            DESCRIPTION_STEMS
                .iter()
                .find(|(stem, _)| normalized.contains(stem))
                .map(|(_, position)| *position)
        })
}

fn classify_free_text(label: &str) -> Option<Position> {
    let lowered = label.to_lowercase();
    PLAYER_TYPE_WORDS
        .iter()
        .find(|(words, _)| words.iter().any(|w| lowered.contains(w)))
        .map(|(_, position)| *position)
}

/// First token of an uppercased label, reduced to Latin/Cyrillic letters and digits.
fn position_code(normalized: &str) -> String {
    normalized
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || is_cyrillic_upper(*c))
        .collect()
}

fn is_cyrillic_upper(c: char) -> bool {
    ('А'..='Я').contains(&c) || c == 'Ё'
}
