use crate::config::GalleryConfig;
use crate::gallery::{build_cards, Card, CardId, GalleryState, LayoutEntry, Titles};
use crate::logging::Logger;
use crate::media::{CardMedia, ImageSpec, PlaybackState, TILE_HEIGHT};
use crate::rain::sample_drops;
use serde_json::json;
use web_sys::{window, HtmlElement, MouseEvent};
use yew::prelude::*;

const CONFIG_ELEMENT_ID: &str = "gallery-config";
const WAVE_PATH: &str = "M-160 44c30 0 58-18 88-18s 58 18 88 18 58-18 88-18 58 18 88 18 v44h-352z";
const WAVE_OFFSETS: [&str; 4] = ["0", "3", "5", "7"];
const CAPTION: &str =
    "🖤 Made this from the heart, inspired by family, crafted with love just for my twins & broskis 🖤";
const PLAYER_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

struct GallerySetup {
    config: GalleryConfig,
    cards: Vec<Card>,
    titles: Titles,
    logger: Logger,
}

impl GallerySetup {
    fn load() -> Self {
        let injected = read_injected_config();
        let (config, error) = GalleryConfig::resolve(injected.as_deref());
        let logger = config.logger();

        if let Some(error) = error {
            logger.warn(
                "config_fallback",
                json!({ "source": CONFIG_ELEMENT_ID, "reason": error.to_string() }),
            );
        }

        let cards = build_cards(&config.cards, &logger);
        let titles = config.titles();

        Self {
            config,
            cards,
            titles,
            logger,
        }
    }
}

fn read_injected_config() -> Option<String> {
    window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

fn container_height(container: &NodeRef) -> Option<f64> {
    container
        .cast::<HtmlElement>()
        .map(|element| f64::from(element.client_height()))
}

#[derive(Properties, PartialEq)]
struct WavesBackgroundProps {
    excited: bool,
}

#[function_component(WavesBackground)]
fn waves_background(props: &WavesBackgroundProps) -> Html {
    html! {
        <div class="waves-container" aria-hidden="true">
            <svg
                class="waves"
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 24 150 28"
                preserveAspectRatio="none"
                shape-rendering="auto"
            >
                <defs>
                    <path id="gentle-wave" d={WAVE_PATH} />
                </defs>
                <g class={classes!("parallax", props.excited.then_some("hovered"))}>
                    { for WAVE_OFFSETS.iter().map(|y| html! {
                        <@{"use"} href="#gentle-wave" x="48" y={*y} />
                    })}
                </g>
            </svg>
            <div class={classes!("copyright", if props.excited { "is-excited" } else { "is-calm" })}>
                {CAPTION}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RainOverlayProps {
    count: usize,
}

#[function_component(RainOverlay)]
fn rain_overlay(props: &RainOverlayProps) -> Html {
    let count = props.count;
    let drops = use_state(move || sample_drops(count, &mut fastrand::Rng::new()));

    html! {
        <div class="rain-overlay" aria-hidden="true">
            { for drops.iter().map(|raindrop| html! {
                <div class="rain-drop" style={raindrop.style()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MediaTileProps {
    card_id: CardId,
    media: CardMedia,
    alt: AttrValue,
    logger: Logger,
}

#[function_component(MediaTile)]
fn media_tile(props: &MediaTileProps) -> Html {
    let playback = use_state(PlaybackState::default);

    let video = match &props.media {
        CardMedia::Image(image) => return tile_image(image, props.alt.clone()),
        CardMedia::Video(video) => video.clone(),
    };

    if playback.is_playing() {
        return html! {
            <iframe
                class="tile-player"
                width="100%"
                height={TILE_HEIGHT.to_string()}
                src={video.player_url()}
                frameborder="0"
                allow={PLAYER_ALLOW}
                allowfullscreen="true"
            />
        };
    }

    let onclick = {
        let playback = playback.clone();
        let media = props.media.clone();
        let logger = props.logger;
        let card_id = props.card_id;
        Callback::from(move |_: MouseEvent| {
            let next = (*playback).click(&media);
            if next != *playback {
                logger.info(
                    "tile_playback_started",
                    json!({ "cardId": card_id, "videoId": video.id() }),
                );
                playback.set(next);
            }
        })
    };

    html! {
        <div class="tile-thumbnail" {onclick}>
            {tile_image(&props.media.poster(), AttrValue::from("YouTube video thumbnail"))}
            <div class="tile-play-icon">
                <svg viewBox="0 0 24 24" fill="currentColor">
                    <path d="M8 5v14l11-7z" />
                </svg>
            </div>
        </div>
    }
}

fn tile_image(image: &ImageSpec, alt: AttrValue) -> Html {
    html! {
        <img
            class="tile-image"
            src={image.src.clone()}
            alt={alt}
            width={image.width.to_string()}
            height={image.height.to_string()}
            loading="lazy"
        />
    }
}

#[derive(Properties, PartialEq)]
struct GalleryCardProps {
    entry: LayoutEntry,
    hovered: bool,
    show_overlay: bool,
    logger: Logger,
    on_enter: Callback<CardId>,
    on_leave: Callback<()>,
}

#[function_component(GalleryCard)]
fn gallery_card(props: &GalleryCardProps) -> Html {
    let card = &props.entry.card;

    let onmouseenter = {
        let on_enter = props.on_enter.clone();
        let id = card.id;
        Callback::from(move |_: MouseEvent| on_enter.emit(id))
    };

    let onmouseleave = {
        let on_leave = props.on_leave.clone();
        Callback::from(move |_: MouseEvent| on_leave.emit(()))
    };

    html! {
        <div class="gallery-card" style={props.entry.style()} {onmouseenter} {onmouseleave}>
            <div class={classes!("card-frame", props.hovered.then_some("pulsating-border"))}>
                <div class="card-media">
                    <MediaTile
                        card_id={card.id}
                        media={card.media.clone()}
                        alt={AttrValue::from(card.title.clone())}
                        logger={props.logger}
                    />
                    <div class="card-tint" />
                    <div class="card-description">
                        <p>{card.description.clone()}</p>
                    </div>
                    if props.show_overlay {
                        <div class="card-hover-overlay">
                            <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M14.752 11.168l-3.197-2.132A1 1 0 0010 9.87v4.263a1 1 0 001.555.832l3.197-2.132a1 1 0 000-1.664z"
                                />
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M21 12a9 9 0 11-18 0 9 9 0 0118 0z"
                                />
                            </svg>
                        </div>
                    }
                </div>
                <div class="card-copy">
                    <h2>{card.title.clone()}</h2>
                    <p>{card.date.clone()}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let setup = use_memo((), |_| GallerySetup::load());
    let rng = use_mut_ref(fastrand::Rng::new);
    let container_ref = use_node_ref();

    let gallery = {
        let setup = setup.clone();
        let rng = rng.clone();
        use_state(move || {
            GalleryState::mount(
                &setup.cards,
                setup.config.grid_columns,
                &setup.titles,
                &mut *rng.borrow_mut(),
            )
        })
    };

    {
        let setup = setup.clone();
        use_effect_with((), move |_| {
            setup.logger.info(
                "gallery_mounted",
                json!({
                    "cards": setup.cards.len(),
                    "gridColumns": setup.config.grid_columns,
                    "rainDrops": setup.config.rain_drops,
                }),
            );
            || ()
        });
    }

    let on_enter = {
        let gallery = gallery.clone();
        let setup = setup.clone();
        let rng = rng.clone();
        let container_ref = container_ref.clone();
        Callback::from(move |id: CardId| {
            let height = container_height(&container_ref);
            let next = gallery.hover_enter(id, height, &setup.titles, &mut *rng.borrow_mut());
            setup.logger.debug(
                "gallery_hover_enter",
                json!({ "cardId": id, "containerHeight": height }),
            );
            gallery.set(next);
        })
    };

    let on_leave = {
        let gallery = gallery.clone();
        let setup = setup.clone();
        let rng = rng.clone();
        Callback::from(move |_| {
            let next = gallery.hover_leave(&setup.titles, &mut *rng.borrow_mut());
            setup.logger.debug("gallery_hover_leave", json!({}));
            gallery.set(next);
        })
    };

    html! {
        <div class="gallery-shell">
            <WavesBackground excited={gallery.raining} />
            if gallery.raining {
                <RainOverlay count={setup.config.rain_drops} />
            }
            <div class="gallery-content">
                <h1 class="gallery-title pulsating-title">
                    <div class="gallery-title-main">{format!("🪩 {} 🪩", gallery.title)}</div>
                    if let Some(subtitle) = gallery.subtitle.clone() {
                        <div class="gallery-subtitle">{subtitle}</div>
                    }
                </h1>
                <div ref={container_ref} class="gallery-board">
                    { for gallery.entries.iter().map(|entry| html! {
                        <GalleryCard
                            key={entry.id().to_string()}
                            entry={entry.clone()}
                            hovered={gallery.is_hovered(entry.id())}
                            show_overlay={gallery.shows_hover_overlay(entry.id())}
                            logger={setup.logger}
                            on_enter={on_enter.clone()}
                            on_leave={on_leave.clone()}
                        />
                    })}
                </div>
            </div>
        </div>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
