mod pnl_chart;
mod screens;
mod styles;
mod trades;
mod ui_config;
mod ui_text;
mod utils;

pub(crate) use screens::{render_dashboard, render_landing};

pub(crate) use styles::{ToneColor, UiStyleExt, apply_opacity, get_outcome_color};

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use utils::frame_now;
