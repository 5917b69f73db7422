//! Inline SVG icons.

use dioxus::prelude::*;

#[component]
pub fn PlayIcon(#[props(default = "white")] fill: &'static str) -> Element {
    rsx! {
        svg {
            width: "20",
            height: "20",
            view_box: "0 0 20 20",
            fill: "{fill}",
            polygon { points: "5,2 18,10 5,18" }
        }
    }
}

#[component]
pub fn PauseIcon() -> Element {
    rsx! {
        svg {
            width: "20",
            height: "20",
            view_box: "0 0 20 20",
            fill: "white",
            rect { x: "4", y: "2", width: "4", height: "16" }
            rect { x: "12", y: "2", width: "4", height: "16" }
        }
    }
}

#[component]
pub fn PreviousIcon() -> Element {
    rsx! {
        svg {
            width: "20",
            height: "14",
            view_box: "0 0 20 14",
            fill: "white",
            polygon { points: "10,0 10,14 0,7" }
            polygon { points: "20,0 20,14 10,7" }
        }
    }
}

#[component]
pub fn NextIcon() -> Element {
    rsx! {
        svg {
            width: "20",
            height: "14",
            view_box: "0 0 20 14",
            fill: "white",
            polygon { points: "0,0 10,7 0,14" }
            polygon { points: "10,0 20,7 10,14" }
        }
    }
}

#[component]
pub fn ShuffleIcon() -> Element {
    rsx! {
        svg {
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "white",
            stroke_width: "2",
            path { d: "M16 3h5v5" }
            path { d: "M4 20L21 3" }
            path { d: "M21 16v5h-5" }
            path { d: "M15 15l6 6" }
            path { d: "M4 4l5 5" }
        }
    }
}

#[component]
pub fn RepeatIcon() -> Element {
    rsx! {
        svg {
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "white",
            stroke_width: "2",
            path { d: "M17 1l4 4-4 4" }
            path { d: "M3 11V9a4 4 0 0 1 4-4h14" }
            path { d: "M7 23l-4-4 4-4" }
            path { d: "M21 13v2a4 4 0 0 1-4 4H3" }
        }
    }
}

#[component]
pub fn HeadphonesIcon() -> Element {
    rsx! {
        svg {
            width: "32",
            height: "32",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "white",
            stroke_width: "2",
            path { d: "M3 18v-6a9 9 0 0 1 18 0v6" }
            path { d: "M21 19a2 2 0 0 1-2 2h-1v-6h3zM3 19a2 2 0 0 0 2 2h1v-6H3z" }
        }
    }
}
