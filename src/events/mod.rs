//! Event handling for cacpulse.
//!
//! Terminal input is polled, matched against the configured key bindings,
//! and turned into [`Action`](crate::state::Action)s for the store.

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::{InputEvent, Key, KeyBinding, Modifiers};
