//! External capability seams: media upload, conflict judging, task
//! extraction, and the in-flight guard for the controls that trigger them.
//!
//! # Responsibility
//! - Declare the trait contracts the application core calls out through.
//! - Convert every capability failure into a safe default at the call site.
//!
//! # Invariants
//! - No capability error propagates past this boundary.
//! - No cancellation and no timeout here; both belong to the capability.

pub mod extract;
pub mod flight;
pub mod judge;
pub mod upload;

pub use extract::{ExtractedTask, PhraseTaskExtractor, TaskExtractor};
pub use flight::{FlightPermit, SingleFlight};
pub use judge::{fallback_verdict, judge_or_fallback, ConflictJudge};
pub use upload::{upload_or_discard, MediaUpload, PendingMedia};

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure reported by an external capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// Call never produced a response.
    Transport(String),
    /// Response arrived but could not be understood.
    InvalidResponse(String),
}

impl Display for CapabilityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(details) => write!(f, "capability transport failure: {details}"),
            Self::InvalidResponse(details) => write!(f, "capability response invalid: {details}"),
        }
    }
}

impl Error for CapabilityError {}
