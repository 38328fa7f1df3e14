//! Generic id-keyed list mutation shared by all record collections.
//!
//! # Responsibility
//! - Toggle/remove records by id with no-op semantics on a missing id.
//!
//! # Invariants
//! - A mutation against an absent id leaves the collection byte-for-byte
//!   unchanged and reports `false` so callers can skip persistence.

/// Anything stored in an id-keyed collection.
pub trait Record {
    fn id(&self) -> &str;
}

/// Applies `mutate` to the record matching `id`.
///
/// Returns `false`, with the collection untouched, when no record matches.
pub fn toggle_by_id<T: Record>(items: &mut [T], id: &str, mutate: impl FnOnce(&mut T)) -> bool {
    match items.iter_mut().find(|item| item.id() == id) {
        Some(item) => {
            mutate(item);
            true
        }
        None => false,
    }
}

/// Removes the record matching `id`. Returns `false` when nothing matched.
pub fn remove_by_id<T: Record>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() < before
}
