// app/phases/dashboard.rs

use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::AppState, state::DashboardState};

impl PhaseView for DashboardState {
    fn tick(self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_dashboard_state(ctx, self)
    }
}
