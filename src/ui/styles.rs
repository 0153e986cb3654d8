use {
    crate::{
        config::{PLOT_CONFIG, TerminalTone, TradeSide, Trend},
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{
        Color32, CornerRadius, FontId, Response, RichText, Sense, Stroke, StrokeKind, Ui, Vec2,
        WidgetInfo, WidgetType,
    },
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Semantic color for a content enum.
pub trait ToneColor {
    fn color(&self) -> Color32;
}

impl ToneColor for TerminalTone {
    fn color(&self) -> Color32 {
        match self {
            Self::Primary => PLOT_CONFIG.color_primary,
            Self::Info => PLOT_CONFIG.color_terminal_blue,
            Self::Success => PLOT_CONFIG.color_terminal_green,
            Self::Warning => PLOT_CONFIG.color_terminal_yellow,
        }
    }
}

impl ToneColor for Trend {
    fn color(&self) -> Color32 {
        match self {
            Self::Up => PLOT_CONFIG.color_profit,
            Self::Down => PLOT_CONFIG.color_loss,
            Self::Neutral => PLOT_CONFIG.color_text_subdued,
        }
    }
}

impl ToneColor for TradeSide {
    fn color(&self) -> Color32 {
        match self {
            Self::Long => PLOT_CONFIG.color_profit,
            Self::Short => PLOT_CONFIG.color_loss,
        }
    }
}

pub(crate) fn trend_icon(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => &UI_TEXT.icon_trend_up,
        Trend::Down => &UI_TEXT.icon_trend_down,
        Trend::Neutral => &UI_TEXT.icon_trend_flat,
    }
}

pub fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor)
}

/// Green for zero and above, red below. A flat day counts as a non-loss.
pub fn get_outcome_color(value: f64) -> Color32 {
    if value >= 0.0 {
        PLOT_CONFIG.color_profit
    } else {
        PLOT_CONFIG.color_loss
    }
}

pub(crate) trait UiStyleExt {
    /// Interactive label acting as button: transparent when idle, gray bg on hover, accent bg when selected.
    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response;

    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
    fn section_heading(&mut self, title: &str, subtitle: &str) -> Response;
    fn card(&mut self, width: f32, highlighted: bool, add_contents: impl FnOnce(&mut Ui));
    fn button_text_primary(&self, text: impl Into<String>) -> RichText;
    fn button_text_secondary(&self, text: impl Into<String>) -> RichText;
}

impl UiStyleExt for Ui {
    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response {
        let padding = Vec2::new(6.0, 4.0);
        let galley = self
            .painter()
            .layout_no_wrap(text.to_string(), font_id, idle_color);
        let desired_size = galley.size() + padding * 2.0;
        let (rect, response) = self.allocate_exact_size(desired_size, Sense::click());
        response.widget_info(|| WidgetInfo::selected(WidgetType::Button, true, is_selected, text));

        if self.is_rect_visible(rect) {
            let visuals = self.style().visuals.clone();
            let (bg_fill, text_color) = if is_selected {
                (visuals.selection.bg_fill, Color32::WHITE)
            } else if response.hovered() || response.has_focus() {
                (visuals.widgets.hovered.bg_fill, UI_CONFIG.colors.accent)
            } else {
                (Color32::TRANSPARENT, idle_color)
            };

            if is_selected || response.hovered() {
                self.painter().rect(
                    rect,
                    CornerRadius::same(4),
                    bg_fill,
                    Stroke::NONE,
                    StrokeKind::Inside,
                );
            }
            let text_pos = rect.left_top() + padding;
            self.painter().galley(text_pos, galley, text_color);
        }
        response
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(PLOT_CONFIG.color_text_subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).strong().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }

    fn section_heading(&mut self, title: &str, subtitle: &str) -> Response {
        let response = self
            .vertical_centered(|ui| {
                ui.heading(RichText::new(title).strong().color(UI_CONFIG.colors.heading));
                ui.add_space(6.0);
                ui.label(RichText::new(subtitle).color(UI_CONFIG.colors.label));
            })
            .response;
        self.add_space(24.0);
        response
    }

    fn card(&mut self, width: f32, highlighted: bool, add_contents: impl FnOnce(&mut Ui)) {
        let frame = if highlighted {
            UI_CONFIG.highlight_card_frame()
        } else {
            UI_CONFIG.card_frame()
        };
        frame.show(self, |ui| {
            // Frame margins sit outside the content width.
            let inner = (width - 34.0).max(80.0);
            ui.set_width(inner);
            ui.vertical(add_contents);
        });
    }

    fn button_text_primary(&self, text: impl Into<String>) -> RichText {
        RichText::new(text).strong().color(Color32::BLACK)
    }

    fn button_text_secondary(&self, text: impl Into<String>) -> RichText {
        RichText::new(text).strong().color(Color32::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_color_treats_zero_as_profit() {
        assert_eq!(get_outcome_color(0.0), PLOT_CONFIG.color_profit);
        assert_eq!(get_outcome_color(2.5), PLOT_CONFIG.color_profit);
        assert_eq!(get_outcome_color(-0.01), PLOT_CONFIG.color_loss);
    }

    #[test]
    fn trade_side_colors_follow_direction() {
        assert_eq!(TradeSide::Long.color(), PLOT_CONFIG.color_profit);
        assert_eq!(TradeSide::Short.color(), PLOT_CONFIG.color_loss);
    }
}
