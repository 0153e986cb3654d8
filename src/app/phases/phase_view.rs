use eframe::egui::Context;

use crate::app::App;
use crate::app::state::AppState;

/// One frame of a page. Consumes the page state and hands back the state for the next frame.
pub(crate) trait PhaseView {
    fn tick(self, app: &mut App, ctx: &Context) -> AppState;
}
