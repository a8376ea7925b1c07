//! Built-in subscription sources.
//!
//! - [`terminal_events`]: keyboard, mouse, resize, focus, and paste events
//!   from the terminal.
//! - [`every`] / [`after`]: repeating and one-shot timers. The search page
//!   uses [`after`] to deliver the expand/collapse settle signal.

mod terminal;
mod timer;

pub use terminal::*;
pub use timer::*;
