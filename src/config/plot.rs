//! Chart and semantic colors

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- BRAND ---
    pub color_primary: Color32,
    pub color_primary_dim: Color32,

    // --- SEMANTIC COLORS ---
    pub color_profit: Color32,
    pub color_loss: Color32,
    pub color_warning: Color32,

    pub color_text_subdued: Color32, // Explanations/Context (Darker Gray)

    // --- PNL BAR CHART ---
    pub bar_width: f64,     // 1.0 = bars touch
    pub bar_opacity: f32,
    pub chart_height: f32,
    pub chart_height_narrow: f32,

    // --- TERMINAL ---
    pub color_terminal_bg: Color32,
    pub color_terminal_blue: Color32,
    pub color_terminal_green: Color32,
    pub color_terminal_yellow: Color32,

    // UI WIDGET STYLES
    pub color_widget_background: Color32,
    pub color_widget_border: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    color_primary: Color32::from_rgb(0, 255, 148),
    color_primary_dim: Color32::from_rgb(0, 120, 70),

    color_profit: Color32::from_rgb(0, 255, 148),
    color_loss: Color32::from_rgb(239, 68, 68),
    color_warning: Color32::from_rgb(250, 204, 21),

    color_text_subdued: Color32::from_rgb(156, 163, 175),

    bar_width: 0.9,
    bar_opacity: 0.8,
    chart_height: 300.0,
    chart_height_narrow: 250.0,

    color_terminal_bg: Color32::from_rgb(12, 12, 12),
    color_terminal_blue: Color32::from_rgb(96, 165, 250),
    color_terminal_green: Color32::from_rgb(74, 222, 128),
    color_terminal_yellow: Color32::from_rgb(250, 204, 21),

    color_widget_background: Color32::from_rgb(17, 17, 17),
    color_widget_border: Color32::from_rgb(34, 34, 34),
};
