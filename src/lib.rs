#![doc(test(attr(deny(warnings))))]

//! Dépensier turns short chat messages ("Dépense: Taxi - 1500 FCFA") into
//! structured ledger operations and renders the formatted French reply for
//! each one.

pub mod cli;
pub mod commands;
pub mod config;
pub mod dates;
pub mod engine;
pub mod errors;
pub mod ledger;
pub mod reply;
pub mod report;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Dépensier tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
