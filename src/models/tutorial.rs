use serde::Serialize;

use crate::models::session::TutorialSessionInfo;

/// A tutorial with its live sessions and material links.
#[derive(Debug, Clone, Serialize)]
pub struct Tutorial {
    pub id: String,
    pub title: String,
    pub organizers: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub website: Option<String>,
    pub material: Option<String>,
    pub slides: Option<String>,
    pub prerecorded: Option<String>,
    pub rocketchat_channel: String,
    pub sessions: Vec<TutorialSessionInfo>,
    /// Free-form description of how the tutorial runs virtually
    pub virtual_format_description: String,
}
