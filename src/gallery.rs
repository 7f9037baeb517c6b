use crate::config::CardRecord;
use crate::logging::Logger;
use crate::media::{CardMedia, ImageSpec, VideoRef, VideoRefError};
use crate::random::RandomSource;
use serde_json::json;
use std::fmt;

pub type CardId = u32;

const REST_ROTATION_DEGREES: f64 = 5.0;
const SCATTER_ROTATION_DEGREES: f64 = 10.0;
const SCATTER_CLEARANCE_PX: f64 = 200.0;
const SCATTER_LEFT_MAX_PERCENT: f64 = 80.0;
const SCATTER_OPACITY: f64 = 0.5;
const FULL_OPACITY: f64 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub date: String,
    pub thumbnail: String,
    pub description: String,
    pub media: CardMedia,
}

impl Card {
    pub fn from_record(record: &CardRecord) -> (Self, Option<VideoRefError>) {
        let image = || CardMedia::Image(ImageSpec::tile(record.thumbnail.clone()));
        let (media, error) = match record.video_url.as_deref().map(VideoRef::parse) {
            Some(Ok(video)) => (CardMedia::Video(video), None),
            Some(Err(error)) => (image(), Some(error)),
            None => (image(), None),
        };

        let card = Self {
            id: record.id,
            title: record.title.clone(),
            date: record.date.clone(),
            thumbnail: record.thumbnail.clone(),
            description: record.description.clone(),
            media,
        };

        (card, error)
    }
}

pub fn build_cards(records: &[CardRecord], logger: &Logger) -> Vec<Card> {
    records
        .iter()
        .map(|record| {
            let (card, error) = Card::from_record(record);
            if let Some(error) = error {
                logger.warn(
                    "video_ref_fallback",
                    json!({ "cardId": record.id, "reason": error.to_string() }),
                );
            }
            card
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    Percent(f64),
    Pixels(f64),
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(value) => write!(f, "{value:.2}%"),
            Self::Pixels(value) => write!(f, "{value:.2}px"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutEntry {
    pub card: Card,
    pub original_top: Offset,
    pub original_left: Offset,
    pub top: Offset,
    pub left: Offset,
    pub rotate: f64,
    pub opacity: Option<f64>,
}

impl LayoutEntry {
    pub fn id(&self) -> CardId {
        self.card.id
    }

    pub fn effective_opacity(&self) -> f64 {
        self.opacity.unwrap_or(FULL_OPACITY)
    }

    pub fn style(&self) -> String {
        format!(
            "top: {}; left: {}; transform: rotate({:.2}deg); opacity: {};",
            self.top,
            self.left,
            self.rotate,
            self.effective_opacity()
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Titles {
    pub default_title: String,
    pub default_subtitle: String,
    pub alternates: Vec<String>,
}

impl Titles {
    fn default_subtitle(&self) -> Option<String> {
        Some(self.default_subtitle.clone()).filter(|value| !value.is_empty())
    }

    fn pick_alternate(&self, rng: &mut impl RandomSource) -> String {
        rng.index(self.alternates.len())
            .and_then(|index| self.alternates.get(index))
            .cloned()
            .unwrap_or_else(|| self.default_title.clone())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    pub entries: Vec<LayoutEntry>,
    pub hovered_id: Option<CardId>,
    pub raining: bool,
    pub title: String,
    pub subtitle: Option<String>,
}

impl GalleryState {
    pub fn mount(
        cards: &[Card],
        grid_columns: usize,
        titles: &Titles,
        rng: &mut impl RandomSource,
    ) -> Self {
        let columns = grid_columns.max(1);
        let cell = 100.0 / columns as f64;

        let entries = cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let row = (index / columns) as f64;
                let col = (index % columns) as f64;
                let original_top = Offset::Percent(row * cell + rng.unit() * (cell / 2.0));
                let original_left = Offset::Percent(col * cell + rng.unit() * (cell / 2.0));

                LayoutEntry {
                    card: card.clone(),
                    original_top,
                    original_left,
                    top: original_top,
                    left: original_left,
                    rotate: rest_rotation(rng),
                    opacity: None,
                }
            })
            .collect();

        Self {
            entries,
            hovered_id: None,
            raining: false,
            title: titles.default_title.clone(),
            subtitle: titles.default_subtitle(),
        }
    }

    /// `container_height` is the measured height of the card area in
    /// pixels; `None` or a non-positive value pins scattered cards to the top.
    pub fn hover_enter(
        &self,
        id: CardId,
        container_height: Option<f64>,
        titles: &Titles,
        rng: &mut impl RandomSource,
    ) -> Self {
        let title = titles.pick_alternate(rng);
        let height = container_height
            .filter(|value| value.is_finite() && *value > 0.0)
            .unwrap_or(0.0);
        let max_top = (height - SCATTER_CLEARANCE_PX).max(0.0);

        let entries = self
            .entries
            .iter()
            .map(|entry| {
                if entry.id() == id {
                    return entry.clone();
                }

                let top = (rng.unit() * height).min(max_top).max(0.0);
                let left = rng.unit() * SCATTER_LEFT_MAX_PERCENT;

                LayoutEntry {
                    top: Offset::Pixels(top),
                    left: Offset::Percent(left),
                    rotate: rng.range(-SCATTER_ROTATION_DEGREES, SCATTER_ROTATION_DEGREES),
                    opacity: Some(SCATTER_OPACITY),
                    ..entry.clone()
                }
            })
            .collect();

        Self {
            entries,
            hovered_id: Some(id),
            raining: true,
            title,
            subtitle: None,
        }
    }

    pub fn hover_leave(&self, titles: &Titles, rng: &mut impl RandomSource) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|entry| LayoutEntry {
                top: entry.original_top,
                left: entry.original_left,
                rotate: rest_rotation(rng),
                opacity: Some(FULL_OPACITY),
                ..entry.clone()
            })
            .collect();

        Self {
            entries,
            hovered_id: None,
            raining: false,
            title: titles.default_title.clone(),
            subtitle: titles.default_subtitle(),
        }
    }

    pub fn entry(&self, id: CardId) -> Option<&LayoutEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn is_hovered(&self, id: CardId) -> bool {
        self.hovered_id == Some(id)
    }

    /// Image cards get a play-circle overlay while hovered; video cards
    /// already draw their own play icon.
    pub fn shows_hover_overlay(&self, id: CardId) -> bool {
        self.is_hovered(id)
            && self
                .entry(id)
                .is_some_and(|entry| !entry.card.media.is_video())
    }
}

fn rest_rotation(rng: &mut impl RandomSource) -> f64 {
    rng.range(-REST_ROTATION_DEGREES, REST_ROTATION_DEGREES)
}
