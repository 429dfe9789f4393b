//! Raw input records, as handed over by the file-loading layer.
//!
//! Each struct mirrors one source table. The pipeline never reads files
//! itself: the loading layer deserializes YAML/JSON/CSV sources into these
//! types and passes a [`SiteInput`] to `build_site`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::models::calendar::EventView;
use crate::models::committee::CommitteeMember;

/// A slot table: live Q&A slot code ("1A") to its definition, in source
/// order. Order matters: it drives the order of each paper's session list.
pub type SlotTable = IndexMap<String, SlotRecord>;

/// One live Q&A slot: when it starts and which papers present in it.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotRecord {
    /// Start timestamp in `%Y-%m-%d_%H:%M:%S` (GMT)
    pub date: String,
    pub papers: Vec<String>,
}

/// One paper row from a per-track papers table.
#[derive(Debug, Clone, Deserialize)]
pub struct PaperRecord {
    #[serde(rename = "UID")]
    pub uid: String,
    pub title: String,
    #[serde(default, deserialize_with = "list_field")]
    pub authors: Vec<String>,
    #[serde(default, deserialize_with = "list_field")]
    pub keywords: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub track: String,
    #[serde(default)]
    pub paper_type: String,
    #[serde(default)]
    pub pdf_url: String,
    #[serde(default)]
    pub demo_url: String,
}

/// One row of a per-track zoom-link table, keyed by (paper, session).
#[derive(Debug, Clone, Deserialize)]
pub struct ZoomLinkRecord {
    #[serde(rename = "UID")]
    pub uid: String,
    pub session_name: String,
    /// Start timestamp in ISO8601 UTC (`%Y-%m-%dT%H:%M:%SZ`), authored
    /// independently of the slot table and cross-checked against it
    pub starttime: String,
    pub zoom_join_link: String,
}

/// One row of a per-track presentation-id table.
#[derive(Debug, Clone, Deserialize)]
pub struct PresentationIdRecord {
    #[serde(rename = "UID")]
    pub uid: String,
    pub presentation_id: String,
}

/// The parallel tables of one track (main, demo, student research, ...).
///
/// Tracks are merged by ordered append, never by positional index; this
/// struct is the unit of that merge.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackRecords {
    pub name: String,
    #[serde(default)]
    pub papers: Vec<PaperRecord>,
    #[serde(default)]
    pub sessions: SlotTable,
    #[serde(default)]
    pub zoom_links: Vec<ZoomLinkRecord>,
    #[serde(default)]
    pub presentation_ids: Vec<PresentationIdRecord>,
}

/// A session entry authored with native timestamps (plenary, tutorial and
/// workshop sources).
#[derive(Debug, Clone, Deserialize)]
pub struct RawSessionRecord {
    #[serde(default)]
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub zoom_link: String,
    #[serde(default)]
    pub livestream_id: Option<String>,
}

/// A session entry authored with `%Y-%m-%d_%H:%M:%S` string timestamps
/// (social event sources).
#[derive(Debug, Clone, Deserialize)]
pub struct SocialSessionRecord {
    #[serde(default)]
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub zoom_link: String,
}

/// One plenary session row.
#[derive(Debug, Clone, Deserialize)]
pub struct PlenarySessionRecord {
    #[serde(rename = "UID")]
    pub uid: String,
    pub title: String,
    pub image: String,
    pub day: String,
    #[serde(default)]
    pub sessions: Vec<RawSessionRecord>,
    #[serde(default)]
    pub presenter: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub presentation_id: Option<String>,
    #[serde(default)]
    pub rocketchat_channel: Option<String>,
}

/// One recorded talk belonging to a meeting-style plenary session.
#[derive(Debug, Clone, Deserialize)]
pub struct PlenaryVideoRecord {
    #[serde(rename = "UID")]
    pub uid: String,
    pub title: String,
    pub speakers: String,
    #[serde(default)]
    pub presentation_id: Option<String>,
}

/// One tutorial row.
#[derive(Debug, Clone, Deserialize)]
pub struct TutorialRecord {
    #[serde(rename = "UID")]
    pub uid: String,
    pub title: String,
    #[serde(default, deserialize_with = "list_field")]
    pub organizers: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub slides: Option<String>,
    #[serde(default)]
    pub prerecorded: Option<String>,
    #[serde(default)]
    pub rocketchat_channel: String,
    #[serde(default)]
    pub sessions: Vec<RawSessionRecord>,
    /// Free-form virtual-format description, shown on the tutorial page
    #[serde(default)]
    pub info: String,
}

/// One workshop row.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkshopRecord {
    #[serde(rename = "UID")]
    pub uid: String,
    pub title: String,
    #[serde(default)]
    pub day: String,
    #[serde(default, deserialize_with = "list_field")]
    pub organizers: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub livestream: Option<String>,
    #[serde(default)]
    pub rocketchat_channel: String,
    #[serde(default)]
    pub sessions: Vec<RawSessionRecord>,
}

/// One paper row from a per-workshop papers table.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkshopPaperRecord {
    #[serde(rename = "UID")]
    pub uid: String,
    pub title: String,
    #[serde(default)]
    pub speakers: String,
    #[serde(default)]
    pub presentation_id: Option<String>,
}

/// One social event row.
#[derive(Debug, Clone, Deserialize)]
pub struct SocialEventRecord {
    #[serde(rename = "UID")]
    pub uid: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub organizers: SocialOrganizersRecord,
    #[serde(default)]
    pub sessions: Vec<SocialSessionRecord>,
    #[serde(default)]
    pub rocketchat_channel: String,
    #[serde(default)]
    pub website: String,
}

/// The organizing group of a social event.
#[derive(Debug, Clone, Deserialize)]
pub struct SocialOrganizersRecord {
    pub members: Vec<String>,
    #[serde(default)]
    pub website: String,
}

/// One sponsor row.
#[derive(Debug, Clone, Deserialize)]
pub struct SponsorRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Single level, for sponsors appearing under exactly one
    #[serde(default)]
    pub level: Option<String>,
    /// Multiple levels, for sponsors appearing under several
    #[serde(default)]
    pub levels: Option<Vec<String>>,
    #[serde(default)]
    pub schedule: Vec<SponsorBoothRecord>,
}

/// One staffed-booth window of a sponsor's schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct SponsorBoothRecord {
    pub start: DateTime<Utc>,
    /// Explicit end; when absent, `duration` hours past `start` is used
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration: Option<i64>,
    pub label: String,
}

/// A pre-authored calendar entry from the overall-calendar source file.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarEventRecord {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "calendarId", default)]
    pub calendar_id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub view: EventView,
}

/// One paper's entry in the 2D projection index file.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectionEntry {
    pub id: String,
    #[serde(default)]
    pub pos: Vec<f64>,
}

/// Everything the pipeline consumes, fully loaded into memory before any
/// join or merge step runs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteInput {
    pub committee: Vec<CommitteeMember>,
    /// Pre-authored base calendar (plenary, QA, social entries)
    pub calendar: Vec<CalendarEventRecord>,
    pub plenary_sessions: Vec<PlenarySessionRecord>,
    /// Recorded talks keyed by the id of the plenary session they belong to
    pub plenary_videos: IndexMap<String, Vec<PlenaryVideoRecord>>,
    pub tutorials: Vec<TutorialRecord>,
    /// Per-track parallel tables, in track order
    pub tracks: Vec<TrackRecords>,
    /// Paper id to recommended similar paper ids
    pub paper_recommendations: HashMap<String, Vec<String>>,
    pub paper_projections: Vec<ProjectionEntry>,
    pub workshops: Vec<WorkshopRecord>,
    /// Accepted papers keyed by workshop id, in workshop order
    pub workshop_papers: IndexMap<String, Vec<WorkshopPaperRecord>>,
    /// Workshop-authored schedule tables keyed by workshop id
    pub workshop_schedules: HashMap<String, serde_json::Value>,
    pub socials: Vec<SocialEventRecord>,
    pub sponsors: Vec<SponsorRecord>,
    pub faq: serde_json::Value,
    pub code_of_conduct: serde_json::Value,
}

/// Accept either a list of strings or a single `|`-separated string, the two
/// shapes the authorship and keyword columns are authored in.
fn list_field<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListField {
        Text(String),
        Items(Vec<String>),
    }

    Ok(match ListField::deserialize(deserializer)? {
        ListField::Text(text) if text.is_empty() => Vec::new(),
        ListField::Text(text) => text.split('|').map(str::to_string).collect(),
        ListField::Items(items) => items,
    })
}
