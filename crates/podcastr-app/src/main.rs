//! # Podcastr
//!
//! A small podcast player built with Rust and Dioxus.

// RSX macros generate code that triggers these warnings incorrectly
#![allow(unused_qualifications)]
#![allow(clippy::use_self)]

mod components;
mod config;
mod pages;
mod state;

use anyhow::Result;
use components::{Header, Player};
use config::AppConfig;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use pages::{EpisodePage, HomePage};
use state::{Navigation, PlayerContext, Route};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Smallest window that still fits the player sidebar next to the content.
const MIN_WIDTH: f64 = 960.0;
const MIN_HEIGHT: f64 = 640.0;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podcastr=debug,podcastr_app=debug,podcastr_core=info".into()),
        )
        .init();

    info!("Starting Podcastr v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    let catalog = config.load_catalog()?;
    info!("Catalog ready with {} episodes", catalog.len());

    let window_builder = WindowBuilder::new()
        .with_title("Podcastr")
        .with_inner_size(LogicalSize::new(config.window_width, config.window_height))
        .with_min_inner_size(LogicalSize::new(MIN_WIDTH, MIN_HEIGHT));

    let desktop_config = Config::new()
        .with_window(window_builder)
        .with_menu(None);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(catalog)
        .launch(App);

    Ok(())
}

/// Application root.
/// The player sits beside `main` so it keeps playing while pages change.
#[component]
fn App() -> Element {
    use_context_provider(PlayerContext::new);
    let navigation = use_context_provider(Navigation::new);
    let route = *navigation.route.read();

    rsx! {
        document::Title { "Podcastr | {route.title()}" }

        // Inject CSS
        style { {include_str!("../assets/styles.css")} }

        div { class: "wrapper",
            main {
                Header {}
                match route {
                    Route::Home => rsx! { HomePage {} },
                    Route::Episode(index) => rsx! { EpisodePage { index } },
                }
            }
            Player {}
        }
    }
}
