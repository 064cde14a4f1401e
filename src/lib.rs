//! # cacpulse - CAC 40 sentiment dashboard
//!
//! A terminal dashboard for ten CAC 40 companies: five days of daily
//! quotes as a candlestick chart, the latest headlines with a per-headline
//! sentiment score, and a gauge of the average sentiment.
//!
//! ## Architecture
//!
//! - **App**: Terminal lifecycle and the event loop
//! - **API**: Quote and news fetchers behind the `QuoteSource`/`NewsSource` traits
//! - **Sentiment**: Lexicon-based headline scoring
//! - **Chart**: Gauge and candlestick figure builders
//! - **Dashboard**: Orchestration of one refresh into a view model
//! - **State**: Centralized state management
//! - **Events**: Input handling and key bindings
//! - **UI**: Layout and rendering logic
//! - **Config**: Configuration management

pub mod api;
pub mod app;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod sentiment;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use dashboard::{Controller, Dashboard};
pub use error::{Error, Result};
pub use sentiment::{SentimentBackend, SentimentScorer};
