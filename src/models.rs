//! Domain models shared by the CSV store and the TUI. These stay plain data
//! holders so persistence and presentation can evolve independently.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Lowest score the karaoke machine hands out.
pub const MIN_SCORE: f64 = 0.0;
/// Highest score the karaoke machine hands out.
pub const MAX_SCORE: f64 = 100.0;

/// One row of the song list.
///
/// The serde names match the CSV header. Aliases accept the Japanese header
/// row written by older versions of the list so existing files still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongRecord {
    #[serde(alias = "曲名")]
    pub title: String,
    #[serde(alias = "アーティスト名")]
    pub artist: String,
    /// Missing when the song was sung without a score being recorded.
    #[serde(alias = "得点", default, deserialize_with = "deserialize_score")]
    pub score: Option<f64>,
}

/// Spellings a spreadsheet or pandas export uses for a missing value.
const MISSING_MARKERS: &[&str] = &[
    "", "NA", "N/A", "NaN", "nan", "-NaN", "-nan", "null", "NULL",
];

/// Read a score cell, treating missing markers and non-finite numbers as
/// "no score" so they never reach the statistics.
fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    let raw = raw.trim();
    if MISSING_MARKERS.contains(&raw) {
        return Ok(None);
    }
    let value = raw
        .parse::<f64>()
        .map_err(|_| serde::de::Error::custom(format!("invalid score {raw:?}")))?;
    Ok(value.is_finite().then_some(value))
}

impl SongRecord {
    /// Build a record from raw user input, trimming the text fields and
    /// enforcing the required/range rules.
    pub fn new(title: &str, artist: &str, score: Option<f64>) -> Result<Self, ValidationError> {
        let title = title.trim();
        let artist = artist.trim();
        if title.is_empty() || artist.is_empty() {
            return Err(ValidationError::MissingField);
        }
        if let Some(value) = score {
            if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                return Err(ValidationError::ScoreOutOfRange(value));
            }
        }
        Ok(Self {
            title: title.to_string(),
            artist: artist.to_string(),
            score,
        })
    }

    /// Score rendered for tables; blank when absent.
    pub fn score_label(&self) -> String {
        match self.score {
            Some(score) => format!("{score:.1}"),
            None => String::new(),
        }
    }

    /// Value of the requested searchable column.
    pub fn column(&self, column: SearchColumn) -> &str {
        match column {
            SearchColumn::Title => &self.title,
            SearchColumn::Artist => &self.artist,
        }
    }
}

/// Columns the search control may target. Scores are deliberately not
/// searchable by substring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SearchColumn {
    #[default]
    Title,
    Artist,
}

impl SearchColumn {
    pub fn toggle(self) -> Self {
        match self {
            SearchColumn::Title => SearchColumn::Artist,
            SearchColumn::Artist => SearchColumn::Title,
        }
    }
}

impl fmt::Display for SearchColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchColumn::Title => write!(f, "title"),
            SearchColumn::Artist => write!(f, "artist"),
        }
    }
}
