//! Persistent player panel.
//!
//! Audio is handled entirely by the webview's `<audio>` element. This
//! component keeps that element and the shared [`PlayerContext`] in step:
//! element callbacks write into the context, and play/pause intent from the
//! context is pushed back into the element.
//!
//! [`PlayerContext`]: crate::state::PlayerContext

use dioxus::prelude::*;
use podcastr_core::Duration;
use tracing::{debug, info, warn};

use super::icons::{
    HeadphonesIcon, NextIcon, PauseIcon, PlayIcon, PreviousIcon, RepeatIcon, ShuffleIcon,
};
use crate::state::use_player;

/// DOM id of the media element.
const AUDIO_ELEMENT_ID: &str = "podcastr-audio";

const PLAY_SCRIPT: &str = r"
    const el = document.getElementById('podcastr-audio');
    if (el && el.paused) { el.play().catch(() => {}); }
";

const PAUSE_SCRIPT: &str = r"
    const el = document.getElementById('podcastr-audio');
    if (el && !el.paused) { el.pause(); }
";

const RESTART_SCRIPT: &str = r"
    const el = document.getElementById('podcastr-audio');
    if (el) { el.currentTime = 0; el.play().catch(() => {}); }
";

const CURRENT_TIME_SCRIPT: &str = r"
    const el = document.getElementById('podcastr-audio');
    return el ? el.currentTime : 0;
";

fn seek_script(seconds: u64) -> String {
    format!(
        "const el = document.getElementById('{AUDIO_ELEMENT_ID}'); \
         if (el) {{ el.currentTime = {seconds}; }}"
    )
}

/// Player sidebar: current episode, progress, and transport controls.
#[component]
pub fn Player() -> Element {
    let mut player = use_player();
    let mut progress = use_signal(|| 0_u64);

    // Push play/pause intent into the media element.
    use_effect(move || {
        let script = if player.is_playing() {
            PLAY_SCRIPT
        } else {
            PAUSE_SCRIPT
        };
        let _ = document::eval(script);
    });

    let episode = player.current_episode();
    let is_playing = player.is_playing();
    let is_looping = player.is_looping();
    let is_shuffling = player.is_shuffling();
    let has_next = player.has_next();
    let has_previous = player.has_previous();
    let queue_len = player.len();
    let is_empty = episode.is_none();

    let elapsed = Duration::from_seconds(*progress.read()).format();
    let total = episode
        .as_ref()
        .map_or_else(|| Duration::default().format(), |e| e.duration.format());

    rsx! {
        div { class: "player",
            header {
                HeadphonesIcon {}
                strong { "Tocando agora" }
            }

            if let Some(episode) = &episode {
                div { class: "player__current",
                    if let Some(thumbnail) = episode.thumbnail_url() {
                        img {
                            src: "{thumbnail}",
                            alt: "{episode.title}",
                        }
                    }
                    strong { "{episode.title}" }
                    span { "{episode.members}" }
                }
            } else {
                div { class: "player__empty",
                    strong { "Selecione um podcast para ouvir" }
                }
            }

            footer {
                class: if is_empty { "player__footer is-empty" } else { "player__footer" },

                div { class: "player__progress",
                    span { "{elapsed}" }
                    div { class: "player__slider",
                        if let Some(episode) = &episode {
                            input {
                                r#type: "range",
                                min: "0",
                                max: "{episode.duration.as_seconds()}",
                                value: "{progress}",
                                oninput: move |evt: FormEvent| {
                                    let seconds = Duration::from_secs_f64(
                                        evt.value().parse::<f64>().unwrap_or_default(),
                                    )
                                    .as_seconds();
                                    progress.set(seconds);
                                    let _ = document::eval(&seek_script(seconds));
                                },
                            }
                        } else {
                            div { class: "player__empty-slider" }
                        }
                    }
                    span { "{total}" }
                }

                if let Some(episode) = &episode {
                    audio {
                        id: AUDIO_ELEMENT_ID,
                        src: "{episode.url}",
                        autoplay: true,
                        r#loop: is_looping,
                        onloadedmetadata: move |_| {
                            debug!("Media metadata loaded");
                            progress.set(0);
                        },
                        onplay: move |_| player.set_playing_state(true),
                        onpause: move |_| player.set_playing_state(false),
                        ontimeupdate: move |_| {
                            spawn(async move {
                                match document::eval(CURRENT_TIME_SCRIPT).join::<f64>().await {
                                    Ok(seconds) => progress.set(Duration::from_secs_f64(seconds).as_seconds()),
                                    Err(e) => warn!("Failed to read playback position: {e}"),
                                }
                            });
                        },
                        onended: move |_| {
                            if player.has_next() {
                                let before = player.current_episode_index();
                                player.play_next();
                                // Shuffle can land on the same episode; the src
                                // doesn't change, so restart by hand.
                                if player.current_episode_index() == before {
                                    let _ = document::eval(RESTART_SCRIPT);
                                }
                            } else {
                                info!("Reached end of queue");
                                player.clear_player_state();
                            }
                        },
                    }
                }

                div { class: "player__buttons",
                    button {
                        r#type: "button",
                        class: if is_shuffling { "is-active" } else { "" },
                        disabled: is_empty || queue_len <= 1,
                        onclick: move |_| player.toggle_shuffle(),
                        ShuffleIcon {}
                    }
                    button {
                        r#type: "button",
                        disabled: is_empty || !has_previous,
                        onclick: move |_| player.play_previous(),
                        PreviousIcon {}
                    }
                    button {
                        r#type: "button",
                        class: "play-pause",
                        disabled: is_empty,
                        onclick: move |_| player.toggle_play(),
                        if is_playing {
                            PauseIcon {}
                        } else {
                            PlayIcon {}
                        }
                    }
                    button {
                        r#type: "button",
                        disabled: is_empty || !has_next,
                        onclick: move |_| player.play_next(),
                        NextIcon {}
                    }
                    button {
                        r#type: "button",
                        class: if is_looping { "is-active" } else { "" },
                        disabled: is_empty,
                        onclick: move |_| player.toggle_loop(),
                        RepeatIcon {}
                    }
                }
            }
        }
    }
}
