//! Home page: latest releases and the full episode table.

use dioxus::prelude::*;
use podcastr_core::{Catalog, Episode};

use crate::components::icons::PlayIcon;
use crate::state::{use_player, Navigation, Route};

/// Number of episodes featured as cards at the top.
const LATEST_COUNT: usize = 2;

/// Episode listing.
#[component]
pub fn HomePage() -> Element {
    let catalog = use_context::<Catalog>();
    let latest = catalog.latest(LATEST_COUNT).to_vec();
    let rest = catalog.rest(LATEST_COUNT).to_vec();

    rsx! {
        div { class: "homepage",
            section { class: "latest-episodes",
                h2 { "Últimos lançamentos" }
                ul {
                    for (index, episode) in latest.into_iter().enumerate() {
                        EpisodeCard {
                            key: "{index}",
                            episode,
                            index,
                        }
                    }
                }
            }

            section { class: "all-episodes",
                h2 { "Todos episódios" }
                if rest.is_empty() {
                    p { "Nenhum outro episódio" }
                } else {
                    table {
                        thead {
                            tr {
                                th {}
                                th { "Podcast" }
                                th { "Integrantes" }
                                th { "Duração" }
                                th {}
                            }
                        }
                        tbody {
                            for (offset, episode) in rest.into_iter().enumerate() {
                                EpisodeRow {
                                    key: "{offset}",
                                    episode,
                                    index: LATEST_COUNT + offset,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Featured episode card.
#[component]
fn EpisodeCard(episode: Episode, index: usize) -> Element {
    let player = use_player();
    let mut navigation = use_context::<Navigation>();
    let class = if player.is_current(&episode) {
        "episode-card is-current"
    } else {
        "episode-card"
    };
    let duration = episode.duration.format();

    rsx! {
        li { class,
            if let Some(thumbnail) = episode.thumbnail_url() {
                img { src: "{thumbnail}", alt: "{episode.title}" }
            }
            div { class: "episode-card__details",
                a {
                    onclick: move |_| navigation.navigate(Route::Episode(index)),
                    "{episode.title}"
                }
                p { "{episode.members}" }
                span { "{duration}" }
            }
            PlayListButton { index }
        }
    }
}

/// Row in the full episode table.
#[component]
fn EpisodeRow(episode: Episode, index: usize) -> Element {
    let player = use_player();
    let mut navigation = use_context::<Navigation>();
    let class = if player.is_current(&episode) {
        "is-current"
    } else {
        ""
    };
    let duration = episode.duration.format();

    rsx! {
        tr { class,
            td {
                if let Some(thumbnail) = episode.thumbnail_url() {
                    img { src: "{thumbnail}", alt: "{episode.title}" }
                }
            }
            td {
                a {
                    onclick: move |_| navigation.navigate(Route::Episode(index)),
                    "{episode.title}"
                }
            }
            td { "{episode.members}" }
            td { "{duration}" }
            td {
                PlayListButton { index }
            }
        }
    }
}

/// Queue the whole catalog and start at `index`, so next/previous walk it.
#[component]
fn PlayListButton(index: usize) -> Element {
    let mut player = use_player();
    let catalog = use_context::<Catalog>();

    rsx! {
        button {
            r#type: "button",
            class: "play-button",
            title: "Tocar episódio",
            onclick: move |_| player.play_list(catalog.episodes.clone(), index),
            PlayIcon { fill: "#04d361" }
        }
    }
}
