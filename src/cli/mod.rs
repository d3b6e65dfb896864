//! Terminal front end: a line-oriented shell that turns commands into session
//! events and redraws the dashboard after each one.

pub mod commands;
pub mod core;
pub mod io;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;
pub mod ui;

pub use shell::run_cli;
