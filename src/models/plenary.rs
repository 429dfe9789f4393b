use serde::Serialize;

use crate::models::session::SessionInfo;

/// A plenary session (keynote, award session, business meeting, ...).
#[derive(Debug, Clone, Serialize)]
pub struct PlenarySession {
    pub id: String,
    pub title: String,
    pub image: String,
    /// Day label the schedule page groups by, e.g. "Monday, July 6"
    pub day: String,
    pub sessions: Vec<SessionInfo>,
    pub presenter: Option<String>,
    pub institution: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub bio: Option<String>,
    pub presentation_id: Option<String>,
    pub rocketchat_channel: Option<String>,
    /// Recorded talks attached to meeting-style sessions
    pub videos: Option<Vec<PlenaryVideo>>,
}

/// A pre-recorded video shown inside a plenary session page.
#[derive(Debug, Clone, Serialize)]
pub struct PlenaryVideo {
    pub id: String,
    pub title: String,
    pub speakers: String,
    pub presentation_id: Option<String>,
}

/// One tab of the plenary-sessions page day selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayTab {
    /// Anchor id, derived from the label (see `utils::day_slug`)
    pub slug: String,
    pub label: String,
    /// The first day starts selected
    pub active: bool,
}
