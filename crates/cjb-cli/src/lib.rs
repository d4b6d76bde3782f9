//! Terminal front-end for the campus job board.
//!
//! The binary resolves the stored session, routes to the view for the
//! logged-in role and runs one action per invocation. Views are also usable
//! as a library against any [`cjb_client::ApiClient`].

pub mod cli;
pub mod commands;
pub mod context;
pub mod logging;
pub mod output;
pub mod views;

pub use cli::{exit_codes, run, Cli};
pub use context::CliContext;
pub use output::{OutputFormat, OutputWriter};
