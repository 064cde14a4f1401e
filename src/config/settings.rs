//! Configuration settings for cacpulse.

use crate::sentiment::SentimentBackend;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data source configuration.
    pub api: ApiConfig,
    /// Sentiment scoring configuration.
    pub sentiment: SentimentConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
    /// Theme configuration.
    pub theme: ThemeConfig,
}

impl Config {
    /// Load configuration from file, returning default if file doesn't exist.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from file.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(default_config_path);

        let config: Self = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::config(e.to_string()))?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(default_config_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Reject settings the dashboard cannot work with.
    pub fn validate(&self) -> crate::Result<()> {
        if self.api.history_days == 0 {
            return Err(crate::Error::config("api.history_days must be at least 1"));
        }
        if self.api.news_limit == 0 {
            return Err(crate::Error::config("api.news_limit must be at least 1"));
        }
        if self.api.scored_headlines > self.api.news_limit {
            return Err(crate::Error::config(
                "api.scored_headlines cannot exceed api.news_limit",
            ));
        }
        for binding in self.keybindings.all() {
            binding.parse::<crate::events::KeyBinding>()?;
        }
        Ok(())
    }
}

fn default_config_path() -> PathBuf {
    super::config_dir()
        .map(|p| p.join("config.toml"))
        .unwrap_or_else(|_| PathBuf::from("config.toml"))
}

/// Data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Market data base URL (Yahoo Finance chart API).
    pub quote_base_url: String,
    /// News search base URL (Google News RSS).
    pub news_base_url: String,
    /// Feed language (`hl`).
    pub language: String,
    /// Feed region (`gl`).
    pub region: String,
    /// Trading days of history to request.
    pub history_days: u32,
    /// Maximum headlines kept from the feed.
    pub news_limit: usize,
    /// Headlines that feed the average sentiment.
    pub scored_headlines: usize,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            quote_base_url: "https://query2.finance.yahoo.com".to_string(),
            news_base_url: "https://news.google.com".to_string(),
            language: "fr".to_string(),
            region: "FR".to_string(),
            history_days: 5,
            news_limit: 15,
            scored_headlines: 10,
            timeout_secs: 30,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
                .to_string(),
        }
    }
}

/// Sentiment scoring configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// Lexicon used to score headlines.
    pub backend: SentimentBackend,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tick rate in milliseconds for UI updates.
    pub tick_rate_ms: u64,
    /// Enable mouse support.
    pub mouse_support: bool,
    /// Width of the company sidebar in columns.
    pub sidebar_width: u16,
    /// Height of the headline table in rows.
    pub news_table_height: u16,
    /// Show status bar.
    pub show_status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            mouse_support: true,
            sidebar_width: 24,
            news_table_height: 18,
            show_status_bar: true,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Previous company.
    pub up: String,
    /// Next company.
    pub down: String,
    /// Cancel/back.
    pub back: String,
    /// Refresh data.
    pub refresh: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            back: "Esc".to_string(),
            refresh: "r".to_string(),
        }
    }
}

impl KeyBindings {
    /// Every configured binding string.
    pub fn all(&self) -> [&str; 6] {
        [
            self.quit.as_str(),
            self.help.as_str(),
            self.up.as_str(),
            self.down.as_str(),
            self.back.as_str(),
            self.refresh.as_str(),
        ]
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Accent color (hex).
    pub accent: String,
    /// Positive sentiment / rising price color (hex).
    pub positive: String,
    /// Negative sentiment / falling price color (hex).
    pub negative: String,
    /// Neutral sentiment color (hex).
    pub neutral: String,
    /// Border color (hex).
    pub border: String,
    /// Dimmed text color (hex).
    pub muted: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#5c6bc0".to_string(),
            positive: "#66bb6a".to_string(),
            negative: "#ef5350".to_string(),
            neutral: "#fdd835".to_string(),
            border: "#45475a".to_string(),
            muted: "#7f849c".to_string(),
        }
    }
}

/// Resolved theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub neutral: Color,
    pub border: Color,
    pub muted: Color,
}

impl Default for Palette {
    fn default() -> Self {
        ThemeConfig::default().palette()
    }
}

impl ThemeConfig {
    /// Parse the configured colors, keeping a named fallback for any that don't parse.
    pub fn palette(&self) -> Palette {
        Palette {
            accent: parse_color(&self.accent, Color::Cyan),
            positive: parse_color(&self.positive, Color::Green),
            negative: parse_color(&self.negative, Color::Red),
            neutral: parse_color(&self.neutral, Color::Yellow),
            border: parse_color(&self.border, Color::DarkGray),
            muted: parse_color(&self.muted, Color::Gray),
        }
    }
}

fn parse_color(value: &str, fallback: Color) -> Color {
    Color::from_str(value).unwrap_or_else(|_| {
        tracing::warn!("Unrecognised theme color {:?}, using {:?}", value, fallback);
        fallback
    })
}
