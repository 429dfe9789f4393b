use serde::Serialize;

use crate::models::session::SessionInfo;

/// A workshop with its accepted papers and live sessions.
#[derive(Debug, Clone, Serialize)]
pub struct Workshop {
    pub id: String,
    pub title: String,
    pub day: String,
    pub organizers: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub website: String,
    pub livestream: Option<String>,
    pub papers: Vec<WorkshopPaper>,
    /// Workshop-authored schedule table, passed through to the detail page
    pub schedule: Option<serde_json::Value>,
    pub rocketchat_channel: String,
    pub sessions: Vec<SessionInfo>,
}

/// A paper accepted at a workshop.
///
/// Workshop papers carry no track or paper type; those invariants apply to
/// main-programme papers only.
#[derive(Debug, Clone, Serialize)]
pub struct WorkshopPaper {
    pub id: String,
    pub title: String,
    pub speakers: String,
    pub presentation_id: Option<String>,
}
