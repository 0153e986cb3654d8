//! Mock figures shown on the dashboard. Illustrative only, not computed from anything.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum TradeSide {
    #[strum(to_string = "LONG")]
    Long,
    #[strum(to_string = "SHORT")]
    Short,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceFigure {
    pub sol: f64,
    pub usd: f64,
    pub percent_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitFigure {
    pub sol: f64,
    pub usd: f64,
    /// "This month", "Open positions", ...
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinRate {
    pub percentage: f64,
    pub winning_trades: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveTrade {
    pub token: String,
    pub buy: f64,
    pub current: f64,
    pub pnl_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalTrade {
    pub token: String,
    pub side: TradeSide,
    pub entry: f64,
    pub exit: f64,
    pub pnl_usd: f64,
    /// Display timestamp, e.g. "2024-03-15 14:30"
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub bot_name: String,
    /// SOL price in USD
    pub sol_price: f64,
    pub total_balance: BalanceFigure,
    pub realized_profit: ProfitFigure,
    pub unrealized_profit: ProfitFigure,
    pub win_rate: WinRate,
    /// SOL -> USD factor for the PnL chart
    pub pnl_multiplier: f64,
    pub active_trades: Vec<ActiveTrade>,
    pub trade_history: Vec<HistoricalTrade>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let active = |token: &str, buy: f64, current: f64, pnl_pct: f64| ActiveTrade {
            token: token.to_string(),
            buy,
            current,
            pnl_pct,
        };
        let closed = |token: &str, side, entry: f64, exit: f64, pnl_usd: f64, date: &str| {
            HistoricalTrade {
                token: token.to_string(),
                side,
                entry,
                exit,
                pnl_usd,
                date: date.to_string(),
            }
        };

        Self {
            bot_name: "SolanaTrader Bot".to_string(),
            sol_price: 50.0,
            total_balance: BalanceFigure {
                sol: 245.67,
                usd: 12283.50,
                percent_change: 12.5,
            },
            realized_profit: ProfitFigure {
                sol: 18.34,
                usd: 917.00,
                caption: "This month".to_string(),
            },
            unrealized_profit: ProfitFigure {
                sol: 5.21,
                usd: 260.50,
                caption: "Open positions".to_string(),
            },
            win_rate: WinRate {
                percentage: 78.5,
                winning_trades: 62,
            },
            pnl_multiplier: 139.33,
            active_trades: vec![
                active("SOL/USDC", 45.23, 46.12, 2.45),
                active("RAY/USDC", 1.23, 1.18, -4.12),
                active("BONK/USDC", 0.00001234, 0.00001334, 8.10),
            ],
            trade_history: vec![
                closed("SOL/USDC", TradeSide::Long, 44.23, 46.12, 94.50, "2024-03-15 14:30"),
                closed("RAY/USDC", TradeSide::Short, 1.45, 1.38, 35.00, "2024-03-15 12:15"),
                closed("BONK/USDC", TradeSide::Long, 0.00001234, 0.00001334, 128.90, "2024-03-15 10:45"),
                closed("SOL/USDC", TradeSide::Short, 47.82, 46.91, 45.50, "2024-03-14 22:30"),
                closed("RAY/USDC", TradeSide::Long, 1.23, 1.18, -25.00, "2024-03-14 20:15"),
            ],
        }
    }
}
