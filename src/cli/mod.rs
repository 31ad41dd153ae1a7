//! Interactive shell front end driving a ledger [`Session`](crate::ledger::Session).

pub mod commands;
pub mod core;
pub mod output;
pub mod registry;
pub mod render;
pub mod shell;

pub use shell::run_cli;
