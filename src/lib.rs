#![doc(test(attr(deny(warnings))))]

//! Journal Core offers the record lifecycle, category registry, and
//! time-windowed analytics that power a personal spending journal.

pub mod analytics;
pub mod core;
pub mod errors;
pub mod journal;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Journal Core tracing initialized.");
    });
}
