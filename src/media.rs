use thiserror::Error;
use url::Url;

pub const TILE_WIDTH: u32 = 320;
pub const TILE_HEIGHT: u32 = 180;

const VIDEO_ID_MAX_LEN: usize = 64;
const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";
const PLAYER_BASE: &str = "https://www.youtube.com/embed";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VideoRefError {
    #[error("video url is not a valid absolute url")]
    InvalidUrl,
    #[error("unsupported video host `{0}`")]
    UnsupportedHost(String),
    #[error("video url carries no video id")]
    MissingId,
    #[error("malformed video id `{0}`")]
    MalformedId(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoRef {
    id: String,
}

impl VideoRef {
    pub fn parse(raw_url: &str) -> Result<Self, VideoRefError> {
        let url = Url::parse(raw_url.trim()).map_err(|_| VideoRefError::InvalidUrl)?;
        let host = url
            .host_str()
            .map(str::to_ascii_lowercase)
            .ok_or(VideoRefError::InvalidUrl)?;

        let id = match host.as_str() {
            "youtu.be" | "www.youtu.be" => first_path_segment(&url),
            "youtube.com" | "www.youtube.com" | "m.youtube.com" => {
                let mut segments = url.path_segments().into_iter().flatten();
                match segments.next() {
                    Some("watch") => url
                        .query_pairs()
                        .find(|(key, _)| key == "v")
                        .map(|(_, value)| value.into_owned()),
                    Some("embed") | Some("shorts") | Some("live") => {
                        segments.next().map(ToString::to_string)
                    }
                    _ => None,
                }
            }
            _ => return Err(VideoRefError::UnsupportedHost(host)),
        };

        let id = id
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(VideoRefError::MissingId)?;

        if !is_valid_video_id(&id) {
            return Err(VideoRefError::MalformedId(id));
        }

        Ok(Self { id })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn thumbnail_url(&self) -> String {
        format!("{THUMBNAIL_BASE}/{}/0.jpg", self.id)
    }

    pub fn player_url(&self) -> String {
        format!("{PLAYER_BASE}/{}?autoplay=1", self.id)
    }
}

fn first_path_segment(url: &Url) -> Option<String> {
    url.path_segments()?
        .find(|segment| !segment.is_empty())
        .map(ToString::to_string)
}

fn is_valid_video_id(id: &str) -> bool {
    id.len() <= VIDEO_ID_MAX_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSpec {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

impl ImageSpec {
    pub fn sized(src: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            src: src.into(),
            width,
            height,
        }
    }

    pub fn tile(src: impl Into<String>) -> Self {
        Self::sized(src, TILE_WIDTH, TILE_HEIGHT)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardMedia {
    Image(ImageSpec),
    Video(VideoRef),
}

impl CardMedia {
    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video(_))
    }

    /// Image shown before (or instead of) playback.
    pub fn poster(&self) -> ImageSpec {
        match self {
            Self::Image(image) => image.clone(),
            Self::Video(video) => ImageSpec::tile(video.thumbnail_url()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Thumbnail,
    Playing,
}

impl PlaybackState {
    pub fn click(self, media: &CardMedia) -> Self {
        match (self, media) {
            (Self::Thumbnail, CardMedia::Video(_)) => Self::Playing,
            (state, _) => state,
        }
    }

    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url_yields_id_and_derived_urls() {
        let video = VideoRef::parse("https://www.youtube.com/watch?v=rzUoy59w6YM").expect("valid watch url");

        assert_eq!(video.id(), "rzUoy59w6YM");
        assert_eq!(video.thumbnail_url(), "https://img.youtube.com/vi/rzUoy59w6YM/0.jpg");
        assert_eq!(
            video.player_url(),
            "https://www.youtube.com/embed/rzUoy59w6YM?autoplay=1"
        );
    }

    #[test]
    fn watch_url_ignores_extra_query_pairs() {
        let video = VideoRef::parse("https://youtube.com/watch?t=42&v=dQw4w9WgXcQ&list=x").expect("valid watch url");

        assert_eq!(video.id(), "dQw4w9WgXcQ");
    }

    #[test]
    fn short_and_embed_forms_are_accepted() {
        let short = VideoRef::parse("https://youtu.be/dQw4w9WgXcQ").expect("valid short url");
        let embed = VideoRef::parse("https://www.youtube.com/embed/dQw4w9WgXcQ").expect("valid embed url");

        assert_eq!(short, embed);
    }

    #[test]
    fn malformed_references_are_rejected() {
        assert_eq!(VideoRef::parse("not a url"), Err(VideoRefError::InvalidUrl));
        assert_eq!(
            VideoRef::parse("https://vimeo.com/123"),
            Err(VideoRefError::UnsupportedHost("vimeo.com".to_string()))
        );
        assert_eq!(
            VideoRef::parse("https://www.youtube.com/watch?list=abc"),
            Err(VideoRefError::MissingId)
        );
        assert_eq!(
            VideoRef::parse("https://www.youtube.com/watch?v=<script>"),
            Err(VideoRefError::MalformedId("<script>".to_string()))
        );
    }

    #[test]
    fn image_tile_never_starts_playing() {
        let media = CardMedia::Image(ImageSpec::tile("/placeholder.svg"));

        let state = PlaybackState::Thumbnail.click(&media);
        assert_eq!(state, PlaybackState::Thumbnail);
        assert_eq!(state.click(&media), PlaybackState::Thumbnail);
    }

    #[test]
    fn video_tile_plays_after_one_click_and_stays_playing() {
        let media = CardMedia::Video(
            VideoRef::parse("https://www.youtube.com/watch?v=rzUoy59w6YM").expect("valid watch url"),
        );

        let once = PlaybackState::default().click(&media);
        assert!(once.is_playing());
        assert_eq!(once.click(&media), PlaybackState::Playing);
    }

    #[test]
    fn video_poster_is_derived_thumbnail() {
        let media = CardMedia::Video(VideoRef::parse("https://youtu.be/abc_DEF-123").expect("valid short url"));

        assert_eq!(
            media.poster(),
            ImageSpec::sized("https://img.youtube.com/vi/abc_DEF-123/0.jpg", 320, 180)
        );
    }
}
