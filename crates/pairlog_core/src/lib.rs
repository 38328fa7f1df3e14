//! Core domain logic for Pairlog, a couple's shared diary.
//! This crate is the single source of truth for business invariants.

pub mod calendar;
pub mod capability;
pub mod collection;
pub mod cycle;
pub mod date;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use calendar::{day_summary, month_grid, CalendarSources, DaySummary, MonthCell, MonthGrid};
pub use capability::{
    fallback_verdict, CapabilityError, ConflictJudge, ExtractedTask, MediaUpload, PendingMedia,
    PhraseTaskExtractor, SingleFlight, TaskExtractor,
};
pub use cycle::{CyclePrediction, DEFAULT_PERIOD_DURATION_DAYS};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::album::{Album, AlbumMedia};
pub use model::conflict::{ConflictRecord, Verdict};
pub use model::memory::{Comment, Memory, MemoryKind};
pub use model::message::Message;
pub use model::period::PeriodEntry;
pub use model::todo::TodoItem;
pub use service::album_service::{AlbumService, AlbumServiceError};
pub use service::board_service::{BoardService, PostOutcome};
pub use service::conflict_service::{ConflictService, ConflictServiceError};
pub use service::cycle_service::CycleService;
pub use service::memory_service::{MemoryService, MemoryServiceError};
pub use service::profile_service::{ProfileService, ProfileServiceError};
pub use store::{SliceKey, SliceStore, SqliteSliceStore, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
