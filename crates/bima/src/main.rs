//! **bima**, a terminal life-insurance comparison browser.
//!
//! Landing page, filterable/sortable policy search, expandable policy
//! cards rendered through a windowed list. Built on the `bima-core`
//! runtime and `bima-widgets` components.
//!
//! Set `BIMA_LOG` to a file path for debug logging (the TUI owns stdout).

mod app;
mod card;
mod catalog;
mod criteria;
mod engine;
mod landing;
mod policy;
mod search;

use app::App;
use bima_core::{run_with, ProgramError, ProgramOptions};

#[tokio::main]
async fn main() -> Result<(), ProgramError> {
    let options = ProgramOptions {
        title: Some("bima".into()),
        log_file: std::env::var_os("BIMA_LOG").map(Into::into),
        ..ProgramOptions::default()
    };
    run_with::<App>(catalog::builtin(), options).await?;
    Ok(())
}
