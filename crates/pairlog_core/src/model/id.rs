//! Record-id issuing.
//!
//! Ids are decimal epoch-millisecond strings, strictly increasing within a
//! process. The conflict display sorts ids as integers to recover creation
//! order, so the generator must never issue a non-numeric id. Global
//! uniqueness is not guaranteed and not required.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static LAST_ISSUED_MS: AtomicI64 = AtomicI64::new(0);

/// Issues the next record id, strictly greater than any id issued before by
/// this process.
pub fn next_record_id() -> String {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0);

    let previous = LAST_ISSUED_MS
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(if now_ms > last { now_ms } else { last + 1 })
        })
        .unwrap_or(now_ms);

    let issued = if now_ms > previous { now_ms } else { previous + 1 };
    issued.to_string()
}
