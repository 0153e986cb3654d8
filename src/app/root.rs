use {
    eframe::{
        Frame, Storage,
        egui::{Context, FontFamily, FontId, Key, TextStyle, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{mem, sync::Arc, time::Duration},
};

use crate::{
    Cli,
    app::{AppState, DashboardState, LandingState, Page, PhaseView},
    config::{AppConfig, DF},
    ui::{UI_CONFIG, frame_now, render_dashboard, render_landing},
    utils::AppInstant,
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) page: Page,
    pub(crate) bot_active: bool, // cosmetic toggle, persists across sessions.
    #[serde(skip)]
    pub(crate) config: Arc<AppConfig>,
    #[serde(skip)]
    pub(crate) seed: Option<u64>,
    #[serde(skip)]
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            page: Page::default(),
            bot_active: true,
            config: Arc::new(AppConfig::default()),
            seed: None,
            state: AppState::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli, config: AppConfig) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        Self::configure_text_styles(&cc.egui_ctx);

        if let Some(page) = args.page {
            app.page = page;
        }
        app.seed = args.seed;
        app.config = Arc::new(config);
        app.state = AppState::Starting;
        app
    }

    /// Builds fresh state for `page`. Animations start from scratch on every visit.
    fn mount_page(&self, page: Page, now: Duration) -> AppState {
        match page {
            Page::Landing => AppState::Landing(LandingState::mount(
                &self.config.landing,
                &self.config.animation,
                now,
            )),
            Page::Dashboard => AppState::Dashboard(DashboardState::mount(
                &self.config.dashboard,
                &self.config.series,
                self.seed,
            )),
        }
    }

    pub(crate) fn navigate(&mut self, page: Page, now: Duration) -> AppState {
        #[cfg(debug_assertions)]
        if DF.log_navigation {
            log::info!("navigating {} -> {}", self.page, page);
        }
        self.page = page;
        self.mount_page(page, now)
    }

    /// 1 / 2 switch pages, B flips the bot toggle.
    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) -> Option<Page> {
        if ctx.wants_keyboard_input() {
            return None;
        }

        ctx.input(|i| {
            if i.key_pressed(Key::B) {
                self.bot_active = !self.bot_active;
            }
            if i.key_pressed(Key::Num1) {
                Some(Page::Landing)
            } else if i.key_pressed(Key::Num2) {
                Some(Page::Dashboard)
            } else {
                None
            }
        })
    }

    pub(crate) fn tick_landing_state(&mut self, ctx: &Context, mut state: LandingState) -> AppState {
        let start = AppInstant::now();
        let now = frame_now(ctx);
        let config = Arc::clone(&self.config);

        let clicked = render_landing(ctx, &mut state, &config.landing, now);
        let requested = clicked.or(self.handle_global_shortcuts(ctx));
        self.log_slow_frame("landing", start);

        match requested {
            Some(page) if page != Page::Landing => {
                state.unmount();
                ctx.request_repaint();
                self.navigate(page, now)
            }
            _ => {
                schedule_repaint(ctx, state.next_wake(now));
                AppState::Landing(state)
            }
        }
    }

    pub(crate) fn tick_dashboard_state(
        &mut self,
        ctx: &Context,
        mut state: DashboardState,
    ) -> AppState {
        let start = AppInstant::now();
        let config = Arc::clone(&self.config);

        let clicked = render_dashboard(ctx, &mut state, &config.dashboard, &mut self.bot_active);
        let requested = clicked.or(self.handle_global_shortcuts(ctx));
        self.log_slow_frame("dashboard", start);

        match requested {
            Some(page) if page != Page::Dashboard => {
                ctx.request_repaint();
                self.navigate(page, frame_now(ctx))
            }
            _ => AppState::Dashboard(state),
        }
    }

    fn log_slow_frame(&self, page: &str, start: AppInstant) {
        let micros = start.elapsed().as_micros();
        if DF.log_performance && micros > DF.slow_frame_micros {
            log::warn!("🐢 SLOW FRAME: {} took {}us", page, micros);
        }
    }

    fn configure_text_styles(ctx: &Context) {
        ctx.all_styles_mut(|style| {
            style
                .text_styles
                .insert(TextStyle::Heading, FontId::new(28.0, FontFamily::Proportional));
            style
                .text_styles
                .insert(TextStyle::Body, FontId::new(15.0, FontFamily::Proportional));
            style
                .text_styles
                .insert(TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace));
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Starting => {
                ctx.request_repaint();
                self.mount_page(self.page, frame_now(ctx))
            }
            AppState::Landing(s) => s.tick(self, ctx),
            AppState::Dashboard(s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if let Some(page) = self.state.page() {
            self.page = page;
        }
        #[cfg(debug_assertions)]
        if DF.log_navigation {
            log::info!(
                "💾 SAVE [App]: page = {}, bot_active = {}",
                self.page,
                self.bot_active
            );
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn schedule_repaint(ctx: &Context, wake: Option<Duration>) {
    if let Some(delay) = wake {
        ctx.request_repaint_after(delay);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.card;
    visuals.panel_fill = UI_CONFIG.colors.background;
    visuals.extreme_bg_color = UI_CONFIG.colors.background;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.selection.bg_fill = UI_CONFIG.colors.accent_dim;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
