mod dashboard;
mod faq;
mod landing;

pub(crate) use dashboard::render_dashboard;
pub(crate) use landing::render_landing;

use eframe::egui::Ui;

/// Cards per row for the available width, capped at `max`.
pub(crate) fn columns_for(available: f32, max: usize) -> usize {
    let fit = (available / crate::ui::UI_CONFIG.card_min_width).floor() as usize;
    fit.clamp(1, max.max(1))
}

/// Outer width of one card so `columns` cards fill the row.
pub(crate) fn card_width(ui: &Ui, columns: usize) -> f32 {
    let columns = columns.max(1) as f32;
    let gap = ui.spacing().item_spacing.x;
    ((ui.available_width() - gap * (columns - 1.0)) / columns).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_count_tracks_width() {
        assert_eq!(columns_for(100.0, 4), 1);
        assert_eq!(columns_for(500.0, 4), 2);
        assert_eq!(columns_for(2000.0, 4), 4);
        assert_eq!(columns_for(2000.0, 0), 1);
    }
}
