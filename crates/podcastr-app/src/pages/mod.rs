//! Pages shown in the main area.

mod episode;
mod home;

pub use episode::EpisodePage;
pub use home::HomePage;
