use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

use crate::config::PLOT_CONFIG;

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub background: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub accent: Color32,
    pub accent_dim: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Cards wrap onto a new row below this width
    pub card_min_width: f32,
    pub section_spacing: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(156, 163, 175),
        heading: Color32::WHITE,
        subsection_heading: PLOT_CONFIG.color_primary,
        background: Color32::BLACK,
        card: PLOT_CONFIG.color_widget_background,
        card_border: PLOT_CONFIG.color_widget_border,
        accent: PLOT_CONFIG.color_primary,
        accent_dim: PLOT_CONFIG.color_primary_dim,
    },
    card_min_width: 220.0,
    section_spacing: 64.0,
};

impl UiConfig {
    /// Frame for the sticky nav bar
    pub fn nav_frame(&self) -> Frame {
        Frame {
            fill: self.colors.background,
            stroke: Stroke::new(1.0, self.colors.card_border),
            inner_margin: Margin::symmetric(16, 10),
            ..Default::default()
        }
    }

    /// Page body: no margin so `max_rect().width()` is the viewport width
    pub fn page_frame(&self) -> Frame {
        Frame {
            fill: self.colors.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::ZERO,
            ..Default::default()
        }
    }

    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            inner_margin: Margin::same(16),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }

    /// Card with an accent border (popular plan, highlighted metric)
    pub fn highlight_card_frame(&self) -> Frame {
        Frame {
            stroke: Stroke::new(2.0, self.colors.accent),
            ..self.card_frame()
        }
    }

    pub fn terminal_frame(&self) -> Frame {
        Frame {
            fill: PLOT_CONFIG.color_terminal_bg,
            stroke: Stroke::new(1.0, self.colors.card_border),
            inner_margin: Margin::same(12),
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        }
    }

    /// Centered content column with side gutters
    pub fn section_frame(&self) -> Frame {
        Frame {
            fill: Color32::TRANSPARENT,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(24, 0),
            ..Default::default()
        }
    }
}
