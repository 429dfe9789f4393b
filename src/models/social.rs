use serde::Serialize;

use crate::models::session::SessionInfo;

/// A social event (birds-of-a-feather, affinity meetup, trivia night, ...).
#[derive(Debug, Clone, Serialize)]
pub struct SocialEvent {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub organizers: SocialEventOrganizers,
    pub sessions: Vec<SessionInfo>,
    pub rocketchat_channel: String,
    pub website: String,
}

/// The organizing group of a social event.
#[derive(Debug, Clone, Serialize)]
pub struct SocialEventOrganizers {
    pub members: Vec<String>,
    pub website: String,
}
