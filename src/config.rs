use crate::gallery::Titles;
use crate::logging::{LogLevel, Logger};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

const EMBEDDED_CONFIG: &str = include_str!("../config/gallery.json");

const DEFAULT_GRID_COLUMNS: usize = 4;
const DEFAULT_RAIN_DROPS: usize = 50;
const DEFAULT_TITLE: &str = "LogoDisco";
const DEFAULT_SUBTITLE: &str = "by El Chico";

const GRID_COLUMNS_BOUNDS: (usize, usize) = (1, 12);
const RAIN_DROPS_BOUNDS: (usize, usize) = (0, 500);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid gallery config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate card id {0}")]
    DuplicateCardId(u32),
    #[error("card {0} has an empty title")]
    EmptyTitle(u32),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub video_url: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawGalleryConfig {
    grid_columns: Option<usize>,
    rain_drops: Option<usize>,
    default_title: Option<String>,
    default_subtitle: Option<String>,
    alternate_titles: Option<Vec<String>>,
    log_level: Option<LogLevel>,
    cards: Vec<CardRecord>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    pub grid_columns: usize,
    pub rain_drops: usize,
    pub default_title: String,
    pub default_subtitle: String,
    pub alternate_titles: Vec<String>,
    pub log_level: LogLevel,
    pub cards: Vec<CardRecord>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            grid_columns: DEFAULT_GRID_COLUMNS,
            rain_drops: DEFAULT_RAIN_DROPS,
            default_title: DEFAULT_TITLE.to_string(),
            default_subtitle: DEFAULT_SUBTITLE.to_string(),
            alternate_titles: Vec::new(),
            log_level: LogLevel::default(),
            cards: Vec::new(),
        }
    }
}

impl GalleryConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let parsed: RawGalleryConfig = serde_json::from_str(raw)?;

        let mut seen = HashSet::new();
        for card in &parsed.cards {
            if !seen.insert(card.id) {
                return Err(ConfigError::DuplicateCardId(card.id));
            }
            if card.title.trim().is_empty() {
                return Err(ConfigError::EmptyTitle(card.id));
            }
        }

        let cards = parsed
            .cards
            .into_iter()
            .map(|card| CardRecord {
                video_url: card
                    .video_url
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty()),
                ..card
            })
            .collect();

        Ok(Self {
            grid_columns: within_bounds(parsed.grid_columns, DEFAULT_GRID_COLUMNS, GRID_COLUMNS_BOUNDS),
            rain_drops: within_bounds(parsed.rain_drops, DEFAULT_RAIN_DROPS, RAIN_DROPS_BOUNDS),
            default_title: non_empty(parsed.default_title).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            default_subtitle: parsed
                .default_subtitle
                .map(|value| value.trim().to_string())
                .unwrap_or_else(|| DEFAULT_SUBTITLE.to_string()),
            alternate_titles: parsed
                .alternate_titles
                .unwrap_or_default()
                .into_iter()
                .filter_map(|value| non_empty(Some(value)))
                .collect(),
            log_level: parsed.log_level.unwrap_or_default(),
            cards,
        })
    }

    pub fn embedded() -> Self {
        Self::from_json(EMBEDDED_CONFIG).unwrap_or_default()
    }

    /// Prefers an injected document over the embedded one; an invalid
    /// injected document is reported alongside the embedded fallback.
    pub fn resolve(injected: Option<&str>) -> (Self, Option<ConfigError>) {
        match injected.map(str::trim).filter(|value| !value.is_empty()) {
            Some(raw) => match Self::from_json(raw) {
                Ok(config) => (config, None),
                Err(error) => (Self::embedded(), Some(error)),
            },
            None => (Self::embedded(), None),
        }
    }

    pub fn titles(&self) -> Titles {
        Titles {
            default_title: self.default_title.clone(),
            default_subtitle: self.default_subtitle.clone(),
            alternates: self.alternate_titles.clone(),
        }
    }

    pub fn logger(&self) -> Logger {
        Logger::new(self.log_level)
    }
}

fn within_bounds(value: Option<usize>, default: usize, bounds: (usize, usize)) -> usize {
    value
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
