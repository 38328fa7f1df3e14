//! Use-case services.
//!
//! # Responsibility
//! - Own each record collection in memory and write it through its slice
//!   after every observed state transition.
//! - Orchestrate capability calls with explicit fallback semantics.
//!
//! # Invariants
//! - Services stay storage-agnostic behind the `SliceStore` contract.
//! - A mutation that observes no state change persists nothing.

pub mod album_service;
pub mod board_service;
pub mod conflict_service;
pub mod cycle_service;
pub mod memory_service;
pub mod profile_service;
