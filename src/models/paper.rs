use serde::Serialize;

use crate::error::DataError;
use crate::models::session::SessionInfo;

/// A paper as rendered on the papers page and its detail page.
///
/// This corresponds to an entry in the generated `papers.json`.
#[derive(Debug, Clone, Serialize)]
pub struct Paper {
    pub id: String,
    pub forum: String,
    pub card_image_path: String,
    pub presentation_id: Option<String>,
    pub content: PaperContent,
}

impl Paper {
    /// Chat channel for the paper, e.g. `paper-main-1` for `main.1`
    pub fn rocketchat_channel(&self) -> String {
        format!("paper-{}", self.id.replace('.', "-"))
    }

    /// Check the required-field invariants of §the papers page.
    ///
    /// A violation means corrupt source metadata and fails the build rather
    /// than rendering a broken card.
    pub fn validate(&self) -> Result<(), DataError> {
        let invalid = |reason: &str| DataError::InvalidPaper {
            paper_id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.content.track.is_empty() {
            return Err(invalid("track is not set"));
        }
        match self.content.paper_type.chars().next() {
            None => return Err(invalid("paper type is not set")),
            Some(first) if !first.is_uppercase() => {
                return Err(invalid("paper type must start with an uppercase letter"))
            }
            Some(_) => {}
        }
        if let Some(url) = &self.content.pdf_url {
            if !url.starts_with("https://") {
                return Err(invalid("pdf_url must use the https scheme"));
            }
        }
        if let Some(url) = &self.content.demo_url {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                return Err(invalid("demo_url must use the http or https scheme"));
            }
        }
        Ok(())
    }
}

/// The content of a paper: authorship, track, abstract and schedule.
#[derive(Debug, Clone, Serialize)]
pub struct PaperContent {
    pub title: String,
    pub authors: Vec<String>,
    pub track: String,
    pub paper_type: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub tldr: String,
    pub keywords: Vec<String>,
    pub pdf_url: Option<String>,
    pub demo_url: Option<String>,
    pub sessions: Vec<SessionInfo>,
    pub similar_paper_ids: Vec<String>,
}

/// Card blurb: the first 250 characters of the abstract.
pub fn make_tldr(abstract_text: &str) -> String {
    let head: String = abstract_text.chars().take(250).collect();
    format!("{}...", head)
}
