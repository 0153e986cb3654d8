use std::time::Duration;

use eframe::egui::{Align, Button, Label, RichText, Sense, Ui};

use crate::{
    app::{LandingAnchor, LandingState},
    config::{DF, FaqContent, PLOT_CONFIG},
    reveal::CounterReveal,
    ui::{
        UI_CONFIG, UI_TEXT, UiStyleExt,
        screens::{card_width, columns_for},
    },
};

/// One counter card. The card's rect is the visibility signal: the count starts the
/// first frame any part of it is inside the scroll viewport.
fn render_counter(ui: &mut Ui, reveal: &mut CounterReveal, label: &str, width: f32, now: Duration) {
    reveal.poll(now);
    let text = reveal.animator().format(reveal.animation_state());

    let response = UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width((width - 34.0).max(80.0));
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(text)
                    .size(32.0)
                    .strong()
                    .color(UI_CONFIG.colors.accent),
            );
            ui.label_subdued(label);
        });
    });

    let visible = ui.is_rect_visible(response.response.rect);
    let was_triggered = reveal.snapshot().is_triggered;
    reveal.observe_visibility(visible, now);
    if !was_triggered && reveal.snapshot().is_triggered {
        #[cfg(debug_assertions)]
        if DF.log_reveal {
            log::info!("counter '{}' scrolled into view", label);
        }
        ui.ctx().request_repaint();
    }
}

fn render_accordion(ui: &mut Ui, state: &mut LandingState, content: &FaqContent) {
    for (i, entry) in content.entries.iter().enumerate() {
        let is_open = state.faq_open == Some(i);
        let icon = if is_open {
            &UI_TEXT.icon_collapse
        } else {
            &UI_TEXT.icon_expand
        };

        ui.card(ui.available_width(), is_open, |ui| {
            let color = if is_open {
                UI_CONFIG.colors.accent
            } else {
                UI_CONFIG.colors.heading
            };
            let question = RichText::new(format!("{}  {}", icon, entry.question))
                .size(16.0)
                .color(color);
            if ui.add(Label::new(question).sense(Sense::click())).clicked() {
                state.toggle_faq(i);
            }
            if is_open {
                ui.add_space(6.0);
                ui.label(RichText::new(&entry.answer).color(UI_CONFIG.colors.label));
            }
        });
        ui.add_space(8.0);
    }
}

pub(super) fn render_faq(
    ui: &mut Ui,
    state: &mut LandingState,
    content: &FaqContent,
    now: Duration,
) {
    let heading = ui.section_heading(&UI_TEXT.faq_heading, &UI_TEXT.faq_subheading);
    if state.take_anchor(LandingAnchor::Faq) {
        heading.scroll_to_me(Some(Align::TOP));
    }

    let columns = columns_for(ui.available_width(), content.counters.len());
    let width = card_width(ui, columns);
    ui.horizontal_wrapped(|ui| {
        for (reveal, stat) in state.counters.iter_mut().zip(&content.counters) {
            render_counter(ui, reveal, &stat.label, width, now);
        }
    });
    ui.add_space(32.0);

    render_accordion(ui, state, content);

    ui.add_space(24.0);
    ui.card(ui.available_width(), false, |ui| {
        ui.vertical_centered(|ui| {
            ui.label_subheader(&content.contact_title);
            ui.label_subdued(&content.contact_body);
            ui.add_space(8.0);
            ui.add(
                Button::new(ui.button_text_primary(content.contact_cta.as_str()))
                    .fill(PLOT_CONFIG.color_primary),
            );
        });
    });
}
