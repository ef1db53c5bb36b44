#![doc(test(attr(deny(warnings))))]

//! Transact keeps a staff address book alongside the transactions each
//! staff member handled, with a line-oriented shell on top.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod logic;
pub mod storage;
pub mod utils;

#[cfg(test)]
mod test_support;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Transact tracing initialized.");
    });
}
