//! Episode detail page.

use dioxus::prelude::*;
use podcastr_core::Catalog;
use tracing::warn;

use crate::components::icons::PlayIcon;
use crate::state::{use_player, Navigation};

/// Details for a single catalog episode. Playing from here queues only this
/// episode.
#[component]
pub fn EpisodePage(index: usize) -> Element {
    let mut player = use_player();
    let mut navigation = use_context::<Navigation>();
    let catalog = use_context::<Catalog>();

    let Some(episode) = catalog.episodes.get(index).cloned() else {
        warn!("No catalog episode at index {index}");
        return rsx! {
            div { class: "episode",
                p { "Episódio não encontrado" }
                div { class: "episode__actions",
                    button {
                        r#type: "button",
                        class: "back-button",
                        onclick: move |_| navigation.go_back(),
                        "Voltar"
                    }
                }
            }
        };
    };

    let duration = episode.duration.format();
    let is_current = player.is_current(&episode);
    let to_play = episode.clone();

    rsx! {
        div { class: "episode",
            div { class: "episode__thumbnail",
                if let Some(thumbnail) = episode.thumbnail_url() {
                    img { src: "{thumbnail}", alt: "{episode.title}" }
                }
            }

            header { class: "episode__header",
                h1 { "{episode.title}" }
                span { "{episode.members}" }
                span { "{duration}" }
            }

            div { class: "episode__actions",
                button {
                    r#type: "button",
                    class: "back-button",
                    onclick: move |_| navigation.go_back(),
                    "Voltar"
                }
                button {
                    r#type: "button",
                    disabled: is_current,
                    onclick: move |_| player.play(to_play.clone()),
                    PlayIcon {}
                    if is_current { " Tocando" } else { " Tocar episódio" }
                }
            }
        }
    }
}
