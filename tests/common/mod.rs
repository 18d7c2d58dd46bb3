use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{NaiveDate, NaiveDateTime};
use depensier::{config::Config, engine::Engine, ledger::LedgerStore};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an engine backed by a unique temporary ledger file; the path is
/// returned so tests can inspect the persisted state directly.
pub fn setup_engine() -> (Engine, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("depenses.json");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let store = LedgerStore::new(path.clone());
    (Engine::new(store, &Config::default()), path)
}

/// Thursday 2025-05-15, 10:30 — a fixed reference clock for scenarios.
#[allow(dead_code)]
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 5, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}
