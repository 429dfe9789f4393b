//! Conference site data pipeline.
//!
//! Transforms heterogeneous conference-metadata records (papers, sessions,
//! committees, workshops, socials, sponsors) into the normalized in-memory
//! model a static conference website is rendered from. The loading layer
//! parses the source files into [`records::SiteInput`]; [`build_site`] joins,
//! merges and validates everything into an immutable [`SiteData`].

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod records;
pub mod utils;

// Re-export commonly used items (avoiding ambiguous re-exports)
pub use config::SiteConfig;
pub use error::{DataError, Result, Warning};
pub use models::{
    CalendarEvent, CommitteeMember, DayTab, EventType, EventView, Paper, PaperContent,
    PlenarySession, PlenaryVideo, SessionInfo, SocialEvent, SocialEventOrganizers, Sponsor,
    SponsorBooth, Tutorial, TutorialSessionInfo, Workshop, WorkshopPaper, SPONSOR_LEVELS,
};
pub use pipeline::{build_site, SessionKey, SiteData};
pub use records::SiteInput;
pub use utils::{day_slug, slugify};
