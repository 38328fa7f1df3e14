//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pairlog_core` wiring end to
//!   end: database bootstrap, slice store guard, cycle engine.
//! - Keep output deterministic for quick local sanity checks.

use pairlog_core::db::open_db_in_memory;
use pairlog_core::{CycleService, SqliteSliceStore};

fn main() {
    println!("pairlog_core version={}", pairlog_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("pairlog_core db=error {err}");
            std::process::exit(1);
        }
    };

    let store = match SqliteSliceStore::try_new(&conn) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("pairlog_core store=error {err}");
            std::process::exit(1);
        }
    };

    let mut cycle = CycleService::load(store);
    let today = pairlog_core::date::today();
    cycle.add_period(today);
    match cycle.next_prediction(today) {
        Some(prediction) => println!(
            "pairlog_core store=ok prediction={} days_left={}",
            pairlog_core::date::format_date(prediction.date),
            prediction.days_left
        ),
        None => println!("pairlog_core store=ok prediction=none"),
    }
}
