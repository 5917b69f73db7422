//! Page header with branding and today's date.

use dioxus::prelude::*;
use podcastr_core::date;

const LOGO_SVG: &str = include_str!("../../assets/logo.svg");

/// Tagline shown next to the logo.
pub const TAGLINE: &str = "O melhor para você ouvir, sempre";

/// Header at the top of every page.
/// The date is recomputed on each render, not on a timer.
#[component]
pub fn Header() -> Element {
    let current_date = date::today();

    rsx! {
        header { class: "header",
            div {
                class: "header__logo",
                title: "Podcastr",
                dangerous_inner_html: LOGO_SVG,
            }
            p { "{TAGLINE}" }
            span { "{current_date}" }
        }
    }
}
