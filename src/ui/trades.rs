use eframe::egui::{Context, Grid, RichText, ScrollArea, Ui, Window};

use crate::{
    config::{ActiveTrade, HistoricalTrade, PLOT_CONFIG},
    ui::{
        ToneColor, UI_TEXT, get_outcome_color,
        utils::{format_percent_change, format_price, format_signed_usd},
    },
};

fn header_cell(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).small().color(PLOT_CONFIG.color_text_subdued));
}

pub(crate) fn render_active_trades(ui: &mut Ui, trades: &[ActiveTrade]) {
    if trades.is_empty() {
        ui.label(RichText::new(&UI_TEXT.db_no_active_trades).color(PLOT_CONFIG.color_text_subdued));
        return;
    }
    Grid::new("active_trades_grid")
        .num_columns(4)
        .striped(true)
        .spacing([24.0, 8.0])
        .show(ui, |ui| {
            for header in [
                &UI_TEXT.col_token,
                &UI_TEXT.col_buy,
                &UI_TEXT.col_current,
                &UI_TEXT.col_pnl,
            ] {
                header_cell(ui, header);
            }
            ui.end_row();

            for trade in trades {
                ui.label(RichText::new(&trade.token).strong());
                ui.label(format_price(trade.buy));
                ui.label(format_price(trade.current));
                ui.label(
                    RichText::new(format_percent_change(trade.pnl_pct))
                        .color(get_outcome_color(trade.pnl_pct)),
                );
                ui.end_row();
            }
        });
}

fn render_history_grid(ui: &mut Ui, history: &[HistoricalTrade]) {
    Grid::new("trade_history_grid")
        .num_columns(6)
        .striped(true)
        .spacing([20.0, 8.0])
        .show(ui, |ui| {
            for header in [
                &UI_TEXT.col_token,
                &UI_TEXT.col_side,
                &UI_TEXT.col_entry,
                &UI_TEXT.col_exit,
                &UI_TEXT.col_pnl,
                &UI_TEXT.col_date,
            ] {
                header_cell(ui, header);
            }
            ui.end_row();

            for trade in history {
                ui.label(RichText::new(&trade.token).strong());
                ui.label(RichText::new(trade.side.to_string()).color(trade.side.color()));
                ui.label(format_price(trade.entry));
                ui.label(format_price(trade.exit));
                ui.label(
                    RichText::new(format_signed_usd(trade.pnl_usd))
                        .color(get_outcome_color(trade.pnl_usd)),
                );
                ui.label(RichText::new(&trade.date).color(PLOT_CONFIG.color_text_subdued));
                ui.end_row();
            }
        });
}

/// Modal-style window listing closed trades. `open` is cleared by the close button.
pub(crate) fn render_history_window(ctx: &Context, open: &mut bool, history: &[HistoricalTrade]) {
    Window::new(UI_TEXT.db_history_title.as_str())
        .open(open)
        .collapsible(false)
        .resizable(true)
        .default_width(640.0)
        .show(ctx, |ui| {
            ScrollArea::both().max_height(400.0).show(ui, |ui| {
                render_history_grid(ui, history);
            });
        });
}
