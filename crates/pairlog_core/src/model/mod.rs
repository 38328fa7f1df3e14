//! Domain model for all record kinds.
//!
//! # Responsibility
//! - Define the typed record shapes persisted in the per-kind slices.
//! - Keep construction and in-place mutation helpers next to each shape.
//!
//! # Invariants
//! - Every record carries an opaque numeric-string id issued at creation.
//! - Records are never shared across collections except by id.

pub mod album;
pub mod conflict;
pub mod id;
pub mod memory;
pub mod message;
pub mod period;
pub mod todo;
