use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

/// A scheduled live session window with its join link.
///
/// Attached to papers (live Q&A slots), plenary sessions, workshops and
/// social events. `start_time < end_time` is guaranteed by the pipeline
/// before construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    pub session_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub zoom_link: String,
}

impl SessionInfo {
    /// Human-readable time range, e.g. "(05:00-06:00 GMT)"
    pub fn time_string(&self) -> String {
        format!(
            "({}-{} GMT)",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }

    /// ISO start time at second precision, as the calendar widget expects
    pub fn start_time_string(&self) -> String {
        self.start_time.format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    /// ISO end time at second precision
    pub fn end_time_string(&self) -> String {
        self.end_time.format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    /// Display label for the session, derived from the session-name prefix
    /// conventions: "D" marks demo sessions, "P-"/"S-"/"W-" mark plenary,
    /// social and workshop sessions whose own name follows the prefix.
    pub fn label(&self) -> String {
        let start_date = format!(
            "{} {}",
            self.start_time.format("%b"),
            self.start_time.day()
        );
        if let Some(number) = self.session_name.strip_prefix('D') {
            return format!("Demo Session {}: {}", number, start_date);
        }
        for prefix in ["P-", "S-", "W-"] {
            if let Some(name) = self.session_name.strip_prefix(prefix) {
                return format!("{}: {}", name, start_date);
            }
        }
        format!("Session {}: {}", self.session_name, start_date)
    }
}

/// A tutorial session; carries a livestream id on top of the zoom link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TutorialSessionInfo {
    pub session_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub livestream_id: String,
    pub zoom_link: String,
}

impl TutorialSessionInfo {
    /// Human-readable time range, e.g. "(05:00-08:30 GMT)"
    pub fn time_string(&self) -> String {
        format!(
            "({}-{} GMT)",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }

    /// ISO start time at second precision
    pub fn start_time_string(&self) -> String {
        self.start_time.format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    /// ISO end time at second precision
    pub fn end_time_string(&self) -> String {
        self.end_time.format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    /// Display label, e.g. "Live Session 1: Jul 5"
    pub fn label(&self) -> String {
        format!(
            "{}: {} {}",
            self.session_name,
            self.start_time.format("%b"),
            self.start_time.day()
        )
    }
}
