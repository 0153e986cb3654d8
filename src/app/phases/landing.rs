// app/phases/landing.rs

use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::AppState, state::LandingState};

impl PhaseView for LandingState {
    fn tick(self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_landing_state(ctx, self)
    }
}
