use std::time::Duration;

use chrono::Datelike;
use eframe::egui::{
    Align, Button, CentralPanel, Context, FontId, Layout, RichText, ScrollArea, TopBottomPanel, Ui,
};

use crate::{
    app::{LandingAnchor, LandingState, Page},
    config::{
        DF, FooterContent, HeroContent, LandingContent, PLOT_CONFIG, PerformanceContent,
        PricingPlan, Step,
    },
    ui::{
        ToneColor, UI_CONFIG, UI_TEXT, UiStyleExt,
        screens::{card_width, columns_for, faq::render_faq},
        styles::trend_icon,
    },
    utils::TimeUtils,
};

/// Navigation requested by a click this frame.
#[derive(Default)]
struct LandingAction {
    page: Option<Page>,
}

impl LandingAction {
    fn go(&mut self, page: Page) {
        self.page = Some(page);
    }
}

fn scroll_to(state: &mut LandingState, anchor: LandingAnchor) {
    #[cfg(debug_assertions)]
    if DF.log_navigation {
        log::info!("scrolling landing page to {}", anchor);
    }
    state.pending_anchor = Some(anchor);
}

fn render_brand(ui: &mut Ui, content: &LandingContent, size: f32) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label(RichText::new(&content.brand_lead).size(size).strong().color(UI_CONFIG.colors.heading));
        ui.label(RichText::new(&content.brand_accent).size(size).strong().color(UI_CONFIG.colors.accent));
    });
}

fn render_nav(
    ctx: &Context,
    state: &mut LandingState,
    content: &LandingContent,
    action: &mut LandingAction,
) {
    // Learn -> how it works, VIP -> pricing
    let anchors = [LandingAnchor::HowItWorks, LandingAnchor::Pricing];
    TopBottomPanel::top("landing_nav")
        .frame(UI_CONFIG.nav_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                render_brand(ui, content, 20.0);
                ui.add_space(16.0);
                for (link, anchor) in content.nav_links.iter().zip(anchors) {
                    if ui
                        .interactive_label(link, false, UI_CONFIG.colors.label, FontId::proportional(15.0))
                        .clicked()
                    {
                        scroll_to(state, anchor);
                    }
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .add(
                            Button::new(ui.button_text_primary(UI_TEXT.nav_dashboard.as_str()))
                                .fill(PLOT_CONFIG.color_primary),
                        )
                        .clicked()
                    {
                        action.go(Page::Dashboard);
                    }
                    if ui.button(UI_TEXT.nav_login.as_str()).clicked() {
                        action.go(Page::Dashboard);
                    }
                });
            });
        });
}

fn render_terminal(ui: &mut Ui, state: &mut LandingState, hero: &HeroContent, now: Duration) {
    UI_CONFIG.terminal_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            for color in [PLOT_CONFIG.color_loss, PLOT_CONFIG.color_warning, PLOT_CONFIG.color_profit] {
                ui.label(RichText::new("●").size(10.0).color(color));
            }
        });
        ui.add_space(8.0);

        for (reveal, line) in state.terminal.iter_mut().zip(&hero.terminal_lines) {
            let snapshot = reveal.poll(now);
            if !snapshot.is_triggered {
                continue;
            }
            let typed = reveal.animator().visible(reveal.animation_state());
            let cursor = if snapshot.is_complete { "" } else { "▌" };
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    RichText::new(&line.prefix)
                        .monospace()
                        .color(PLOT_CONFIG.color_text_subdued),
                );
                ui.label(
                    RichText::new(format!("{}{}", typed, cursor))
                        .monospace()
                        .color(line.tone.color()),
                );
            });
        }
    });
}

fn render_hero(
    ui: &mut Ui,
    state: &mut LandingState,
    content: &LandingContent,
    action: &mut LandingAction,
    now: Duration,
) {
    let hero = &content.hero;
    let columns = columns_for(ui.available_width(), 2);

    let copy = |ui: &mut Ui, state: &mut LandingState, action: &mut LandingAction| {
        ui.label(RichText::new(&hero.badge).small().color(UI_CONFIG.colors.accent));
        ui.add_space(8.0);
        ui.label(RichText::new(&hero.headline).size(40.0).strong().color(UI_CONFIG.colors.heading));
        ui.label(RichText::new(&hero.headline_accent).size(40.0).strong().color(UI_CONFIG.colors.accent));
        ui.add_space(12.0);
        ui.label(RichText::new(&hero.tagline).color(UI_CONFIG.colors.label));
        ui.add_space(16.0);
        ui.horizontal_wrapped(|ui| {
            if ui
                .add(
                    Button::new(ui.button_text_primary(hero.primary_cta.as_str()))
                        .fill(PLOT_CONFIG.color_primary),
                )
                .clicked()
            {
                action.go(Page::Dashboard);
            }
            if ui
                .add(Button::new(ui.button_text_secondary(hero.secondary_cta.as_str())))
                .clicked()
            {
                scroll_to(state, LandingAnchor::Performance);
            }
        });
        ui.add_space(12.0);
        ui.label_subdued(&hero.trusted_by);
    };

    if columns >= 2 {
        let width = card_width(ui, 2);
        ui.horizontal_top(|ui| {
            ui.allocate_ui_with_layout(
                [width, 0.0].into(),
                Layout::top_down(Align::Min),
                |ui| copy(ui, state, action),
            );
            ui.allocate_ui_with_layout(
                [width, 0.0].into(),
                Layout::top_down(Align::Min),
                |ui| render_terminal_block(ui, state, hero, now),
            );
        });
    } else {
        copy(ui, state, action);
        ui.add_space(24.0);
        render_terminal_block(ui, state, hero, now);
    }
}

/// Terminal mockup plus the delayed stat cards under it.
fn render_terminal_block(ui: &mut Ui, state: &mut LandingState, hero: &HeroContent, now: Duration) {
    render_terminal(ui, state, hero, now);
    if !state.hero_stats.poll(now) {
        return;
    }
    ui.add_space(12.0);
    let width = card_width(ui, hero.stat_cards.len());
    ui.horizontal_wrapped(|ui| {
        for stat in &hero.stat_cards {
            ui.card(width, false, |ui| {
                ui.label_subdued(&stat.title);
                ui.label(RichText::new(&stat.value).size(24.0).strong().color(UI_CONFIG.colors.heading));
                ui.label(RichText::new(&stat.caption).small().color(PLOT_CONFIG.color_profit));
            });
        }
    });
}

fn render_steps(ui: &mut Ui, state: &mut LandingState, steps: &[Step]) {
    let heading = ui.section_heading(&UI_TEXT.hiw_heading, &UI_TEXT.hiw_subheading);
    if state.take_anchor(LandingAnchor::HowItWorks) {
        heading.scroll_to_me(Some(Align::TOP));
    }
    let width = card_width(ui, columns_for(ui.available_width(), 4));
    ui.horizontal_wrapped(|ui| {
        for step in steps {
            ui.card(width, false, |ui| {
                ui.label(RichText::new(&step.number).size(28.0).strong().color(UI_CONFIG.colors.accent_dim));
                ui.add_space(4.0);
                ui.label_subheader(&step.title);
                ui.label(RichText::new(&step.description).color(UI_CONFIG.colors.label));
            });
        }
    });
}

fn render_performance(ui: &mut Ui, state: &mut LandingState, perf: &PerformanceContent) {
    let heading = ui.section_heading(&UI_TEXT.perf_heading, &UI_TEXT.perf_subheading);
    if state.take_anchor(LandingAnchor::Performance) {
        heading.scroll_to_me(Some(Align::TOP));
    }
    let width = card_width(ui, columns_for(ui.available_width(), 4));
    ui.horizontal_wrapped(|ui| {
        for stat in &perf.stats {
            ui.card(width, false, |ui| {
                ui.label(RichText::new(&stat.value).size(30.0).strong().color(UI_CONFIG.colors.accent));
                ui.label_subheader(&stat.label);
                ui.label_subdued(&stat.description);
            });
        }
    });
    ui.add_space(16.0);

    let width = card_width(ui, columns_for(ui.available_width(), 2));
    ui.horizontal_wrapped(|ui| {
        ui.card(width, false, |ui| {
            for metric in &perf.metrics {
                let value = format!("{} {}", metric.value, trend_icon(metric.trend));
                ui.metric(&metric.label, &value, metric.trend.color());
                ui.add_space(4.0);
            }
        });
        ui.card(width, true, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(&perf.highlight_value)
                        .size(44.0)
                        .strong()
                        .color(UI_CONFIG.colors.accent),
                );
                ui.label_subdued(&perf.highlight_caption);
            });
        });
    });
}

fn render_plan(ui: &mut Ui, plan: &PricingPlan, width: f32, action: &mut LandingAction) {
    ui.card(width, plan.popular, |ui| {
        if plan.popular {
            ui.label(RichText::new(&UI_TEXT.pricing_popular).small().strong().color(UI_CONFIG.colors.accent));
        }
        ui.label_subheader(&plan.name);
        ui.label(RichText::new(&plan.price).size(32.0).strong().color(UI_CONFIG.colors.heading));
        ui.label_subdued(&plan.description);
        ui.add_space(8.0);
        for feature in &plan.features {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(&UI_TEXT.icon_check).color(UI_CONFIG.colors.accent));
                ui.label(RichText::new(feature).color(UI_CONFIG.colors.label));
            });
        }
        ui.add_space(12.0);
        let button = if plan.popular {
            Button::new(ui.button_text_primary(plan.cta.as_str())).fill(PLOT_CONFIG.color_primary)
        } else {
            Button::new(ui.button_text_secondary(plan.cta.as_str()))
        };
        if ui.add(button).clicked() {
            action.go(Page::Dashboard);
        }
    });
}

fn render_pricing(ui: &mut Ui, state: &mut LandingState, content: &LandingContent, action: &mut LandingAction) {
    let heading = ui.section_heading(&UI_TEXT.pricing_heading, &UI_TEXT.pricing_subheading);
    if state.take_anchor(LandingAnchor::Pricing) {
        heading.scroll_to_me(Some(Align::TOP));
    }
    let width = card_width(ui, columns_for(ui.available_width(), content.pricing.len()));
    ui.horizontal_wrapped(|ui| {
        for plan in &content.pricing {
            render_plan(ui, plan, width, action);
        }
    });
    ui.add_space(12.0);
    ui.vertical_centered(|ui| ui.label_subdued(&content.pricing_footnote));
}

fn render_footer(ui: &mut Ui, content: &LandingContent, footer: &FooterContent) {
    ui.separator();
    ui.add_space(16.0);
    let width = card_width(ui, columns_for(ui.available_width(), footer.columns.len() + 1));
    ui.horizontal_wrapped(|ui| {
        ui.allocate_ui_with_layout([width, 0.0].into(), Layout::top_down(Align::Min), |ui| {
            render_brand(ui, content, 18.0);
            ui.add_space(4.0);
            ui.label_subdued(footer.socials.join("  ·  "));
        });
        for column in &footer.columns {
            ui.allocate_ui_with_layout([width, 0.0].into(), Layout::top_down(Align::Min), |ui| {
                ui.label_subheader(&column.title);
                for link in &column.links {
                    ui.label(RichText::new(link).small().color(UI_CONFIG.colors.label));
                }
            });
        }
    });
    ui.add_space(16.0);
    let year = TimeUtils::today_local().year();
    ui.vertical_centered(|ui| {
        ui.label_subdued(format!(
            "© {} {}. {}",
            year, footer.copyright_holder, UI_TEXT.footer_rights
        ));
    });
    ui.add_space(16.0);
}

/// Renders the whole landing page. Returns the page the user asked to go to, if any.
pub(crate) fn render_landing(
    ctx: &Context,
    state: &mut LandingState,
    content: &LandingContent,
    now: Duration,
) -> Option<Page> {
    let mut action = LandingAction::default();
    render_nav(ctx, state, content, &mut action);

    CentralPanel::default()
        .frame(UI_CONFIG.page_frame())
        .show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    UI_CONFIG.section_frame().show(ui, |ui| {
                        let gap = UI_CONFIG.section_spacing;
                        ui.add_space(gap / 2.0);
                        render_hero(ui, state, content, &mut action, now);
                        ui.add_space(gap);
                        render_steps(ui, state, &content.steps);
                        ui.add_space(gap);
                        render_performance(ui, state, &content.performance);
                        ui.add_space(gap);
                        render_pricing(ui, state, content, &mut action);
                        ui.add_space(gap);
                        render_faq(ui, state, &content.faq, now);
                        ui.add_space(gap);
                        render_footer(ui, content, &content.footer);
                    });
                });
        });

    action.page
}
