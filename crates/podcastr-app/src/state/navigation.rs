//! Page navigation state.

use dioxus::prelude::*;

/// Pages the main area can show.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Route {
    /// Episode listing.
    #[default]
    Home,
    /// Detail page for the catalog episode at this index.
    Episode(usize),
}

impl Route {
    /// Window title suffix for this page.
    pub const fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Episode(_) => "Episódio",
        }
    }
}

/// Current page plus back history.
#[derive(Clone, Copy)]
pub struct Navigation {
    /// Current page.
    pub route: Signal<Route>,
    /// Pages visited before the current one.
    pub history: Signal<Vec<Route>>,
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            route: Signal::new(Route::Home),
            history: Signal::new(Vec::new()),
        }
    }

    /// Navigate to a page.
    pub fn navigate(&mut self, route: Route) {
        let current = *self.route.read();
        if current == route {
            return;
        }
        self.history.write().push(current);
        *self.route.write() = route;
    }

    /// Go back to the previous page, or home when there is none.
    pub fn go_back(&mut self) {
        let prev = self.history.write().pop().unwrap_or_default();
        *self.route.write() = prev;
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}
