//! Static copy for the marketing page.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum TerminalTone {
    Primary,
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalLine {
    pub prefix: String,
    pub text: String,
    /// Typing starts this long after the page mounts
    pub delay_ms: u64,
    pub tone: TerminalTone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroStat {
    pub title: String,
    pub value: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub badge: String,
    pub headline: String,
    pub headline_accent: String,
    pub tagline: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub trusted_by: String,
    pub terminal_lines: Vec<TerminalLine>,
    pub stat_cards: Vec<HeroStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub number: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub value: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendMetric {
    pub label: String,
    pub value: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceContent {
    pub stats: Vec<StatCard>,
    pub metrics: Vec<TrendMetric>,
    pub highlight_value: String,
    pub highlight_caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub description: String,
    pub features: Vec<String>,
    pub cta: String,
    pub popular: bool,
}

/// Counter animated from 0 on first view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterStat {
    pub value: f64,
    pub label: String,
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqContent {
    pub counters: Vec<CounterStat>,
    pub entries: Vec<FaqEntry>,
    pub contact_title: String,
    pub contact_body: String,
    pub contact_cta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkColumn {
    pub title: String,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterContent {
    pub columns: Vec<LinkColumn>,
    pub socials: Vec<String>,
    pub copyright_holder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingContent {
    pub brand_lead: String,
    pub brand_accent: String,
    pub nav_links: Vec<String>,
    pub hero: HeroContent,
    pub steps: Vec<Step>,
    pub performance: PerformanceContent,
    pub pricing: Vec<PricingPlan>,
    pub pricing_footnote: String,
    pub faq: FaqContent,
    pub footer: FooterContent,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for LandingContent {
    fn default() -> Self {
        let line = |prefix: &str, text: &str, delay_ms: u64, tone| TerminalLine {
            prefix: prefix.to_string(),
            text: text.to_string(),
            delay_ms,
            tone,
        };
        let step = |number: &str, title: &str, description: &str| Step {
            number: number.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        };
        let stat = |value: &str, label: &str, description: &str| StatCard {
            value: value.to_string(),
            label: label.to_string(),
            description: description.to_string(),
        };
        let metric = |label: &str, value: &str, trend| TrendMetric {
            label: label.to_string(),
            value: value.to_string(),
            trend,
        };
        let counter = |value: f64, label: &str, suffix: Option<&str>| CounterStat {
            value,
            label: label.to_string(),
            suffix: suffix.map(str::to_string),
        };
        let faq = |question: &str, answer: &str| FaqEntry {
            question: question.to_string(),
            answer: answer.to_string(),
        };

        Self {
            brand_lead: "Solana".to_string(),
            brand_accent: "TradeBot".to_string(),
            nav_links: strings(&["Learn", "VIP"]),
            hero: HeroContent {
                badge: "Now in Beta".to_string(),
                headline: "Automated Solana Trading".to_string(),
                headline_accent: "Made Simple".to_string(),
                tagline: "Experience the power of algorithmic trading with our advanced Solana trading bot. \
                    Real-time market analysis, automated execution, and proven strategies to maximize your returns."
                    .to_string(),
                primary_cta: "Start Trading Now".to_string(),
                secondary_cta: "View Performance →".to_string(),
                trusted_by: "Trusted by 10,000+ traders".to_string(),
                terminal_lines: vec![
                    line("$", "Initialize trading_bot --network solana", 0, TerminalTone::Primary),
                    line(">", "Connecting to Solana mainnet...", 1000, TerminalTone::Info),
                    line(">", "Connection established ✓", 2000, TerminalTone::Success),
                    line(">", "Analyzing market trends...", 2500, TerminalTone::Warning),
                    line(">", "Loading trading strategies...", 3000, TerminalTone::Info),
                    line(">", "Bot ready for trading ✓", 3500, TerminalTone::Success),
                ],
                stat_cards: vec![
                    HeroStat {
                        title: "24h Volume".to_string(),
                        value: "$2.4M".to_string(),
                        caption: "↗ 14% vs last 24h".to_string(),
                    },
                    HeroStat {
                        title: "Success Rate".to_string(),
                        value: "94%".to_string(),
                        caption: "↗ 2% vs last week".to_string(),
                    },
                ],
            },
            steps: vec![
                step("01", "Connect Your Wallet", "Securely connect your Solana wallet to start trading. We support Phantom, Solflare, and other popular wallets."),
                step("02", "Choose Your Strategy", "Select from our pre-built strategies or create your own custom trading strategy using our intuitive builder."),
                step("03", "Set Parameters", "Configure your risk management settings, trading pairs, and automation preferences to match your goals."),
                step("04", "Start Trading", "Activate your bot and watch it execute trades automatically based on your strategy and market conditions."),
            ],
            performance: PerformanceContent {
                stats: vec![
                    stat("$250M+", "Trading Volume", "Total trading volume processed"),
                    stat("94%", "Success Rate", "Average trade success rate"),
                    stat("10K+", "Active Users", "Traders using our platform"),
                    stat("24/7", "Uptime", "Continuous operation"),
                ],
                metrics: vec![
                    metric("Win Rate (24h)", "94%", Trend::Up),
                    metric("Average ROI", "32.5%", Trend::Up),
                    metric("Active Trades", "1,234", Trend::Neutral),
                ],
                highlight_value: "+127%".to_string(),
                highlight_caption: "30-day growth".to_string(),
            },
            pricing: vec![
                PricingPlan {
                    name: "Basic".to_string(),
                    price: "Free".to_string(),
                    description: "Perfect for getting started with automated trading".to_string(),
                    features: strings(&[
                        "Basic trading strategies",
                        "Manual trade execution",
                        "Real-time market data",
                        "Basic portfolio tracking",
                        "Community support",
                    ]),
                    cta: "Start Free".to_string(),
                    popular: false,
                },
                PricingPlan {
                    name: "Pro".to_string(),
                    price: "$49/mo".to_string(),
                    description: "Advanced features for serious traders".to_string(),
                    features: strings(&[
                        "All Basic features",
                        "Advanced trading strategies",
                        "Automated trading execution",
                        "Priority support",
                        "Custom strategy builder",
                        "Advanced analytics",
                        "API access",
                    ]),
                    cta: "Get Started".to_string(),
                    popular: true,
                },
                PricingPlan {
                    name: "Enterprise".to_string(),
                    price: "Custom".to_string(),
                    description: "For institutional traders and large portfolios".to_string(),
                    features: strings(&[
                        "All Pro features",
                        "Custom strategy development",
                        "Dedicated account manager",
                        "White-label solutions",
                        "Custom API integration",
                        "24/7 phone support",
                        "SLA guarantee",
                    ]),
                    cta: "Contact Sales".to_string(),
                    popular: false,
                },
            ],
            pricing_footnote: "All plans include 14-day free trial. No credit card required.".to_string(),
            faq: FaqContent {
                counters: vec![
                    counter(5000.0, "Questions Answered", None),
                    counter(98.0, "Customer Satisfaction", Some("%")),
                    counter(24.0, "Hour Support", Some("/7")),
                ],
                entries: vec![
                    faq("What is SolanaTradeBot?", "SolanaTradeBot is an advanced automated trading platform that helps you trade Solana and other cryptocurrencies 24/7. It uses sophisticated algorithms to analyze market trends and execute trades based on your chosen strategy."),
                    faq("Is it safe to use SolanaTradeBot?", "Yes, security is our top priority. We use bank-grade encryption, secure API connections, and never store your private keys. Your funds remain in your wallet at all times, and the bot only executes trades based on your permissions."),
                    faq("How much experience do I need to use the bot?", "SolanaTradeBot is designed for both beginners and experienced traders. Beginners can start with pre-built strategies, while advanced users can create custom strategies using our strategy builder."),
                    faq("What kind of returns can I expect?", "Trading returns vary based on market conditions, chosen strategies, and risk management settings. While our bot has achieved an average success rate of 94%, past performance doesn't guarantee future results."),
                    faq("Which wallets are supported?", "We support all major Solana wallets including Phantom, Solflare, Sollet, and more. You can easily connect your preferred wallet to start trading."),
                    faq("Can I customize trading strategies?", "Yes! Pro and Enterprise users can create custom trading strategies using our intuitive strategy builder. You can set specific indicators, timeframes, and conditions for your trades."),
                ],
                contact_title: "Still have questions?".to_string(),
                contact_body: "Our support team is here to help you 24/7".to_string(),
                contact_cta: "Contact Support".to_string(),
            },
            footer: FooterContent {
                columns: vec![
                    LinkColumn {
                        title: "Product".to_string(),
                        links: strings(&["Features", "How it Works", "Pricing", "FAQ"]),
                    },
                    LinkColumn {
                        title: "Company".to_string(),
                        links: strings(&["About Us", "Blog", "Careers", "Contact"]),
                    },
                    LinkColumn {
                        title: "Legal".to_string(),
                        links: strings(&["Privacy Policy", "Terms of Service", "Security"]),
                    },
                ],
                socials: strings(&["Twitter", "GitHub", "Discord"]),
                copyright_holder: "SolanaTradeBot".to_string(),
            },
        }
    }
}
