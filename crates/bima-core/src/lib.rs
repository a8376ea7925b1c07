//! Runtime core for **bima**, a terminal insurance-comparison browser.
//!
//! The application is expressed as a pure **init -> update -> view** cycle
//! in the style of the Elm Architecture: state lives in a [`Model`], every
//! external event becomes a message, [`Model::update`] is the only place
//! state changes, and side effects are pushed to the edges through
//! [`Command`]s and [`Subscription`]s.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model rendering into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Side effect returned from an update |
//! | [`Subscription`] | Long-lived event source (terminal events, timers) |
//! | [`Program`] | Wires a [`Model`] to a real terminal and runs the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for testing a [`Model`] without a TTY |
//!
//! Events are processed one at a time in arrival order; there is no
//! concurrent mutation of model state anywhere in the cycle.

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{log_to_file, Program, ProgramError, ProgramOptions};
pub use subscription::{Subscription, SubscriptionId};
pub use subscriptions::{after, every, terminal_events};

/// Run an application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
