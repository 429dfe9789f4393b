use serde::{Deserialize, Serialize};

/// A member of the organizing committee.
///
/// The index page shows the committee grouped by role; grouping happens in
/// the pipeline (see `pipeline::builders::build_committee`) so that role
/// groups keep their source order instead of being sorted alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeMember {
    pub role: String,
    pub name: String,
    #[serde(rename = "aff")]
    pub affiliation: String,
    #[serde(rename = "im", default)]
    pub image: Option<String>,
    #[serde(rename = "tw", default)]
    pub twitter: Option<String>,
}
