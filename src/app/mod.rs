mod phases;
mod root;
mod state;

pub(crate) use phases::PhaseView;
pub(crate) use state::{AppState, DashboardState, LandingAnchor, LandingState};

pub use root::App;
pub use state::Page;
