#![doc(test(attr(deny(warnings))))]

//! Expense Core records personal expenses for one session, groups them by
//! category, and reports totals, averages, charts, and CSV exports through an
//! interactive console.

pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
