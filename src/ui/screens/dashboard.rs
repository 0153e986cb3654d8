use {
    crate::{
        app::{DashboardState, Page},
        config::{DF, DashboardConfig, PLOT_CONFIG},
        series::{SeriesSummary, ViewportClass},
        ui::{
            UI_CONFIG, UI_TEXT, UiStyleExt, get_outcome_color,
            pnl_chart::render_pnl_chart,
            screens::{card_width, columns_for},
            trades::{render_active_trades, render_history_window},
            utils::{format_percent_change, format_price, format_signed, format_signed_usd},
        },
        utils::{TimeUtils, format_thousands},
    },
    eframe::egui::{
        Align, Button, CentralPanel, Context, FontId, Key, Layout, RichText, ScrollArea,
        TopBottomPanel, Ui,
    },
};

pub(crate) fn render_dashboard(
    ctx: &Context,
    state: &mut DashboardState,
    config: &DashboardConfig,
    bot_active: &mut bool,
) -> Option<Page> {
    let mut requested = None;

    TopBottomPanel::top("dashboard_nav")
        .frame(UI_CONFIG.nav_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .interactive_label(
                        &UI_TEXT.nav_home,
                        false,
                        UI_CONFIG.colors.label,
                        FontId::proportional(14.0),
                    )
                    .clicked()
                {
                    requested = Some(Page::Landing);
                }
                ui.separator();
                ui.label(RichText::new(&config.bot_name).strong().color(UI_CONFIG.colors.heading));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    render_bot_toggle(ui, bot_active);
                    ui.label_subdued(format!("SOL {}", format_price(config.sol_price)));
                });
            });
        });

    CentralPanel::default()
        .frame(UI_CONFIG.page_frame())
        .show(ctx, |ui| {
            let width = ui.max_rect().width();
            let today = TimeUtils::today_local();
            state.series.on_resize(width, today, &mut state.rng);
            let class = state.series.class().unwrap_or(ViewportClass::Wide);

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    UI_CONFIG.section_frame().show(ui, |ui| {
                        ui.add_space(24.0);
                        ui.heading(RichText::new(&UI_TEXT.db_title).strong());
                        ui.label_subdued(&UI_TEXT.db_subtitle);
                        ui.add_space(16.0);

                        render_stat_cards(ui, config);
                        ui.add_space(24.0);

                        ui.card(ui.available_width(), false, |ui| {
                            render_pnl_header(ui, &state.series.summary());
                            ui.add_space(8.0);
                            render_pnl_chart(ui, state.series.series(), class);
                        });
                        ui.add_space(24.0);

                        ui.card(ui.available_width(), false, |ui| {
                            ui.horizontal(|ui| {
                                ui.label_subheader(&UI_TEXT.db_active_trades);
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    if ui.button(UI_TEXT.db_view_history.as_str()).clicked() {
                                        state.show_history = true;
                                        #[cfg(debug_assertions)]
                                        if DF.log_navigation {
                                            log::info!("trade history opened");
                                        }
                                    }
                                });
                            });
                            ui.add_space(8.0);
                            render_active_trades(ui, &config.active_trades);
                        });
                        ui.add_space(32.0);
                        ui.label_subdued(&UI_TEXT.label_shortcuts);
                        ui.add_space(16.0);
                    });
                });
        });

    if state.show_history {
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            state.show_history = false;
        } else {
            render_history_window(ctx, &mut state.show_history, &config.trade_history);
        }
    }

    requested
}

fn render_bot_toggle(ui: &mut Ui, bot_active: &mut bool) {
    let (text, fill) = if *bot_active {
        (
            ui.button_text_primary(UI_TEXT.db_bot_active.as_str()),
            PLOT_CONFIG.color_primary,
        )
    } else {
        (
            ui.button_text_secondary(UI_TEXT.db_bot_inactive.as_str()),
            PLOT_CONFIG.color_widget_border,
        )
    };
    if ui.add(Button::new(text).fill(fill)).clicked() {
        *bot_active = !*bot_active;
        #[cfg(debug_assertions)]
        if DF.log_navigation {
            log::info!("bot toggled: active = {}", bot_active);
        }
    }
}

fn render_stat_cards(ui: &mut Ui, config: &DashboardConfig) {
    let columns = columns_for(ui.available_width(), 4);
    let width = card_width(ui, columns);
    let balance = &config.total_balance;
    let win = &config.win_rate;

    ui.horizontal_wrapped(|ui| {
        ui.card(width, false, |ui| {
            ui.label_subdued(&UI_TEXT.db_total_balance);
            ui.label(
                RichText::new(format!("{} {}", format_thousands(balance.sol, 2), UI_TEXT.label_sol))
                    .size(22.0)
                    .strong(),
            );
            ui.horizontal(|ui| {
                ui.label_subdued(format!("${}", format_thousands(balance.usd, 2)));
                ui.label(
                    RichText::new(format_percent_change(balance.percent_change))
                        .small()
                        .color(get_outcome_color(balance.percent_change)),
                );
            });
        });

        for (title, figure) in [
            (&UI_TEXT.db_realized_profit, &config.realized_profit),
            (&UI_TEXT.db_unrealized_profit, &config.unrealized_profit),
        ] {
            ui.card(width, false, |ui| {
                ui.label_subdued(title);
                ui.label(
                    RichText::new(format!("{} {}", format_signed(figure.sol, 2), UI_TEXT.label_sol))
                        .size(22.0)
                        .strong()
                        .color(get_outcome_color(figure.sol)),
                );
                ui.label_subdued(format!("{} · {}", format_signed_usd(figure.usd), figure.caption));
            });
        }

        ui.card(width, false, |ui| {
            ui.label_subdued(&UI_TEXT.db_win_rate);
            ui.label(
                RichText::new(format!("{:.1}%", win.percentage))
                    .size(22.0)
                    .strong()
                    .color(UI_CONFIG.colors.accent),
            );
            ui.label_subdued(format!("{} {}", win.winning_trades, UI_TEXT.db_winning_trades));
        });
    });
}

fn render_pnl_header(ui: &mut Ui, summary: &SeriesSummary) {
    ui.horizontal_wrapped(|ui| {
        ui.label_subheader(&UI_TEXT.db_daily_pnl_avg);
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(
                RichText::new(format!("({})", format_signed_usd(summary.mean_display())))
                    .color(get_outcome_color(summary.mean_display())),
            );
            ui.label(
                RichText::new(format!(
                    "{} {}",
                    format_signed(summary.mean_native(), 2),
                    UI_TEXT.label_sol
                ))
                .strong()
                .color(get_outcome_color(summary.mean_native())),
            );
        });
    });
}
