//! Error types for the site-data pipeline.
//!
//! Errors come in two tiers: [`DataError`] aborts the whole build (corrupt
//! source data must never reach the generated site), while [`Warning`] is
//! collected and logged but never raised.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, DataError>;

/// Fatal build errors. Every variant names the offending record so the
/// source file can be fixed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// A timestamp string did not match the format expected for its source
    #[error("malformed timestamp {value:?}, expected format {expected}")]
    MalformedTimestamp {
        value: String,
        expected: &'static str,
    },

    /// A session ends at or before it starts
    #[error("invalid session window for {session}: start {start} is not before end {end}")]
    InvalidSessionWindow {
        session: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// A scheduled (paper, slot) pair has no zoom-link record
    #[error("no zoom link for paper {paper_id} in session {session_name}")]
    MissingZoomLink {
        paper_id: String,
        session_name: String,
    },

    /// The zoom table and the slot table disagree on when a session starts
    #[error(
        "session time mismatch for paper {paper_id} in session {session_name}: \
         slot says {slot_time}, zoom record says {zoom_time}"
    )]
    SessionTimeMismatch {
        paper_id: String,
        session_name: String,
        slot_time: DateTime<Utc>,
        zoom_time: DateTime<Utc>,
    },

    /// Two zoom-link records share the same (paper, session) key
    #[error("duplicate zoom link for paper {paper_id} in session {session_name}")]
    DuplicateZoomLink {
        paper_id: String,
        session_name: String,
    },

    /// Two presentation-id records share the same paper id
    #[error("duplicate presentation id for paper {paper_id}")]
    DuplicatePresentationId { paper_id: String },

    /// A calendar session crosses midnight, which the per-day aggregation
    /// cannot represent
    #[error("session {session} spans multiple days ({start_day} to {end_day})")]
    SessionSpansMultipleDays {
        session: String,
        start_day: NaiveDate,
        end_day: NaiveDate,
    },

    /// A constructed paper violates a required-field invariant
    #[error("invalid paper {paper_id}: {reason}")]
    InvalidPaper { paper_id: String, reason: String },

    /// A sponsor names a level outside the fixed level ladder
    #[error("unknown sponsor level {level:?} for sponsor {sponsor}")]
    UnknownSponsorLevel { sponsor: String, level: String },
}

/// Non-fatal data-quality findings. The build proceeds with best-effort
/// defaults; the rendering layer may surface these to the site operators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Paper has no entry in the projection index file
    #[error("{paper_id} does not have a projection")]
    MissingProjection { paper_id: String },

    /// Paper has no presentation id
    #[error("presentation_id not set for {paper_id}")]
    MissingPresentationId { paper_id: String },

    /// Paper is scheduled for an unexpected number of live Q&A sessions
    #[error("found {found} sessions for {paper_id}, expected {expected}")]
    UnexpectedSessionCount {
        paper_id: String,
        found: usize,
        expected: usize,
    },

    /// Paper came with an empty similar-papers list; defaulted to itself
    #[error("empty similar paper list for {paper_id}")]
    EmptySimilarPapers { paper_id: String },
}
