//! Pipeline configuration, read from the site config file by the loading
//! layer.

use serde::Deserialize;

/// Knobs the site data pipeline needs from the conference configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Length of a live Q&A slot in hours; a slot's end time is its start
    /// plus this when no explicit end is given
    #[serde(default = "default_qa_session_length_hr")]
    pub qa_session_length_hr: i64,

    /// Base path for paper card images; a paper's card lives at
    /// `{paper_images_path}/{paper_id}.png`
    #[serde(default = "default_paper_images_path")]
    pub paper_images_path: String,

    /// How many live Q&A sessions each paper is expected to have; a
    /// different count is warned about, not rejected
    #[serde(default = "default_expected_qa_sessions")]
    pub expected_qa_sessions: usize,
}

fn default_qa_session_length_hr() -> i64 {
    1
}

fn default_paper_images_path() -> String {
    "static/images/papers".to_string()
}

fn default_expected_qa_sessions() -> usize {
    2
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            qa_session_length_hr: default_qa_session_length_hr(),
            paper_images_path: default_paper_images_path(),
            expected_qa_sessions: default_expected_qa_sessions(),
        }
    }
}
