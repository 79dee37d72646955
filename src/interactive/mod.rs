//! Interactive TUI interface
//!
//! The terminal front end: draws sessions and feeds key presses into them.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
