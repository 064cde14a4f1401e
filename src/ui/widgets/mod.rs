//! TUI widgets.

mod candlestick;
mod company_list;
mod header;
mod help;
mod news_table;
mod notifications;
mod sentiment_gauge;
mod status_bar;

pub use candlestick::CandlestickWidget;
pub use company_list::CompanyList;
pub use header::HeaderBar;
pub use help::HelpPanel;
pub use news_table::NewsTable;
pub use notifications::{UNAVAILABLE_NOTICE, render_error, render_notification, render_unavailable};
pub use sentiment_gauge::{NO_NEWS, NOTHING_TO_ANALYZE, SentimentGaugeWidget};
pub use status_bar::StatusBar;
