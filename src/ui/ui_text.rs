use std::sync::LazyLock;

// Glyphs covered by egui's bundled emoji fonts.
pub const ICON_BOLT: &str = "⚡";
pub const ICON_CHECK: &str = "✔";
pub const ICON_CLOSE: &str = "❌";
pub const ICON_TREND_UP: &str = "⬈";
pub const ICON_TREND_DOWN: &str = "⬊";
pub const ICON_TREND_FLAT: &str = "➡";
pub const ICON_EXPAND: &str = "⏷";
pub const ICON_COLLAPSE: &str = "⏶";
pub const ICON_HISTORY: &str = "🕘";
pub const ICON_WALLET: &str = "💰";
pub const ICON_CHART: &str = "📈";

pub struct UiText {
    pub icon_bolt: String,
    pub icon_check: String,
    pub icon_close: String,
    pub icon_trend_up: String,
    pub icon_trend_down: String,
    pub icon_trend_flat: String,
    pub icon_expand: String,
    pub icon_collapse: String,

    // --- NAV ---
    pub nav_login: String,
    pub nav_dashboard: String,
    pub nav_home: String,

    // --- LANDING SECTIONS ---
    pub hiw_heading: String,
    pub hiw_subheading: String,
    pub perf_heading: String,
    pub perf_subheading: String,
    pub pricing_heading: String,
    pub pricing_subheading: String,
    pub pricing_popular: String,
    pub faq_heading: String,
    pub faq_subheading: String,
    pub footer_rights: String,

    // --- DASHBOARD ---
    pub db_title: String,
    pub db_subtitle: String,
    pub db_bot_active: String,
    pub db_bot_inactive: String,
    pub db_total_balance: String,
    pub db_realized_profit: String,
    pub db_unrealized_profit: String,
    pub db_win_rate: String,
    pub db_winning_trades: String,
    pub db_daily_pnl: String,
    pub db_daily_pnl_avg: String,
    pub db_chart_x_axis: String,
    pub db_active_trades: String,
    pub db_view_history: String,
    pub db_history_title: String,
    pub db_no_active_trades: String,

    // --- TABLE HEADERS ---
    pub col_token: String,
    pub col_buy: String,
    pub col_current: String,
    pub col_pnl: String,
    pub col_side: String,
    pub col_entry: String,
    pub col_exit: String,
    pub col_date: String,

    pub label_sol: String,
    pub label_usd: String,
    pub label_shortcuts: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    icon_bolt: ICON_BOLT.to_string(),
    icon_check: ICON_CHECK.to_string(),
    icon_close: ICON_CLOSE.to_string(),
    icon_trend_up: ICON_TREND_UP.to_string(),
    icon_trend_down: ICON_TREND_DOWN.to_string(),
    icon_trend_flat: ICON_TREND_FLAT.to_string(),
    icon_expand: ICON_EXPAND.to_string(),
    icon_collapse: ICON_COLLAPSE.to_string(),

    nav_login: "Login".to_string(),
    nav_dashboard: format!("{} Dashboard", ICON_CHART),
    nav_home: "← Home".to_string(),

    hiw_heading: "How It Works".to_string(),
    hiw_subheading: "Get started with automated Solana trading in four simple steps".to_string(),
    perf_heading: "Performance Metrics".to_string(),
    perf_subheading: "Real-time statistics and performance indicators".to_string(),
    pricing_heading: "Simple, Transparent Pricing".to_string(),
    pricing_subheading: "Choose the perfect plan for your trading needs".to_string(),
    pricing_popular: "Most Popular".to_string(),
    faq_heading: "Frequently Asked Questions".to_string(),
    faq_subheading: "Everything you need to know about our Solana trading bot".to_string(),
    footer_rights: "All rights reserved.".to_string(),

    db_title: "Trading Dashboard".to_string(),
    db_subtitle: "Monitor your bot's performance in real time".to_string(),
    db_bot_active: format!("{} Bot Active", ICON_BOLT),
    db_bot_inactive: "Bot Inactive".to_string(),
    db_total_balance: format!("{} Total Balance", ICON_WALLET),
    db_realized_profit: "Realized Profit".to_string(),
    db_unrealized_profit: "Unrealized Profit".to_string(),
    db_win_rate: "Win Rate".to_string(),
    db_winning_trades: "winning trades".to_string(),
    db_daily_pnl: "Daily PNL".to_string(),
    db_daily_pnl_avg: "Daily Average PNL".to_string(),
    db_chart_x_axis: "Date".to_string(),
    db_active_trades: "Active Trades".to_string(),
    db_view_history: format!("{} View History", ICON_HISTORY),
    db_history_title: "Trade History".to_string(),
    db_no_active_trades: "No open positions".to_string(),

    col_token: "Token".to_string(),
    col_buy: "Buy".to_string(),
    col_current: "Current".to_string(),
    col_pnl: "PNL".to_string(),
    col_side: "Side".to_string(),
    col_entry: "Entry".to_string(),
    col_exit: "Exit".to_string(),
    col_date: "Date".to_string(),

    label_sol: "SOL".to_string(),
    label_usd: "USD".to_string(),
    label_shortcuts: "1: Home  2: Dashboard  B: Toggle bot".to_string(),
});
