#![doc(test(attr(deny(warnings))))]

//! Savings Core keeps a session ledger of income and categorized expenses and
//! derives the period-filtered totals, savings figure, and per-category chart
//! data that a front end renders.

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Savings Core tracing initialized.");
    });
}
