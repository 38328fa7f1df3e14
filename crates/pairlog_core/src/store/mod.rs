//! Persistent slice storage.
//!
//! # Responsibility
//! - Define the slice-store contract used by every record service.
//! - Isolate SQLite details from service orchestration.
//!
//! # Invariants
//! - One serialized JSON value per named slice; slices never share a write.
//! - `save` never propagates a failure to the caller; the in-memory copy
//!   stays authoritative for the session.

pub mod slice_store;

pub use slice_store::{SliceKey, SliceStore, SqliteSliceStore, StoreError, StoreResult};
