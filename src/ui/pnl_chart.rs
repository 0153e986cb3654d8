use {
    eframe::egui::{Ui, Vec2b},
    egui_plot::{AxisHints, Bar, BarChart, Plot},
};

use crate::{
    config::PLOT_CONFIG,
    series::{Series, ViewportClass},
    ui::{UI_TEXT, apply_opacity, utils::format_signed, utils::format_signed_usd},
};

/// Tooltip shown when hovering one day's bar.
pub(crate) fn bar_tooltip(date_label: &str, pnl_native: f64, pnl_display: f64) -> String {
    format!(
        "{}\n{} {}\n{} {}",
        date_label,
        format_signed(pnl_native, 2),
        UI_TEXT.label_sol,
        format_signed_usd(pnl_display),
        UI_TEXT.label_usd,
    )
}

/// Splits the series into profit and loss bars, indexed by day.
fn build_bars(series: &Series) -> (Vec<Bar>, Vec<Bar>) {
    let mut profit = Vec::new();
    let mut loss = Vec::new();
    for (i, point) in series.points().iter().enumerate() {
        let is_profit = point.pnl_native >= 0.0;
        let color = if is_profit {
            PLOT_CONFIG.color_profit
        } else {
            PLOT_CONFIG.color_loss
        };
        let bar = Bar::new(i as f64, point.pnl_native)
            .width(PLOT_CONFIG.bar_width)
            .fill(apply_opacity(color, PLOT_CONFIG.bar_opacity))
            .name(bar_tooltip(
                &point.date_label,
                point.pnl_native,
                point.pnl_display,
            ));
        if is_profit {
            profit.push(bar);
        } else {
            loss.push(bar);
        }
    }
    (profit, loss)
}

/// Every n-th day gets a label so narrow charts stay readable.
fn label_stride(len: usize) -> usize {
    (len / 6).max(1)
}

fn create_date_axis(series: &Series) -> AxisHints<'static> {
    let labels: Vec<String> = series
        .points()
        .iter()
        .map(|p| p.date_label.clone())
        .collect();
    let stride = label_stride(labels.len());

    AxisHints::new_x()
        .label(UI_TEXT.db_chart_x_axis.as_str())
        .formatter(move |mark, _range| {
            let rounded = mark.value.round();
            if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
                return String::new();
            }
            let idx = rounded as usize;
            match labels.get(idx) {
                Some(label) if idx % stride == 0 => label.clone(),
                _ => String::new(),
            }
        })
}

pub(crate) fn render_pnl_chart(ui: &mut Ui, series: &Series, class: ViewportClass) {
    let height = match class {
        ViewportClass::Narrow => PLOT_CONFIG.chart_height_narrow,
        ViewportClass::Wide => PLOT_CONFIG.chart_height,
    };
    let (profit, loss) = build_bars(series);

    let tooltip = |bar: &Bar, _chart: &BarChart| bar.name.clone();
    let profit_chart = BarChart::new("profit", profit).element_formatter(Box::new(tooltip));
    let loss_chart = BarChart::new("loss", loss).element_formatter(Box::new(tooltip));

    Plot::new("pnl_chart")
        .height(height)
        .custom_x_axes(vec![create_date_axis(series)])
        .y_axis_formatter(|mark, _range| format!("{:.1}", mark.value))
        .label_formatter(|_, _| String::new())
        .show_grid(Vec2b { x: false, y: true })
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(profit_chart);
            plot_ui.bar_chart(loss_chart);
        });
}
