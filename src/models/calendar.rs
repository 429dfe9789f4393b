use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Whether an event renders in the fine-grained day view or as a
/// coarse-grained block in the week view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventView {
    Day,
    Week,
}

/// The category an event belongs to, which determines its display class.
///
/// Categories outside the fixed schedule set are preserved verbatim in
/// `Other` so that the overall calendar stays lossless; only the filtered
/// schedule drops them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventType {
    PlenarySessions,
    Tutorials,
    Workshops,
    QaSessions,
    Socials,
    Sponsors,
    Other(String),
}

impl EventType {
    /// The display string used in source calendar files
    pub fn as_str(&self) -> &str {
        match self {
            EventType::PlenarySessions => "Plenary Sessions",
            EventType::Tutorials => "Tutorials",
            EventType::Workshops => "Workshops",
            EventType::QaSessions => "QA Sessions",
            EventType::Socials => "Socials",
            EventType::Sponsors => "Sponsors",
            EventType::Other(name) => name,
        }
    }

    /// CSS class the calendar widget styles this category with
    pub fn css_class(&self) -> &'static str {
        match self {
            EventType::PlenarySessions => "calendar-event-plenary",
            EventType::Tutorials => "calendar-event-tutorial",
            EventType::Workshops => "calendar-event-workshops",
            EventType::QaSessions => "calendar-event-qa",
            EventType::Socials => "calendar-event-socials",
            EventType::Sponsors => "calendar-event-sponsors",
            EventType::Other(_) => "calendar-event-other",
        }
    }

    /// Whether events of this category appear on the rendered schedule
    pub fn in_schedule(&self) -> bool {
        !matches!(self, EventType::Other(_))
    }
}

impl From<&str> for EventType {
    fn from(name: &str) -> Self {
        match name {
            "Plenary Sessions" => EventType::PlenarySessions,
            "Tutorials" => EventType::Tutorials,
            "Workshops" => EventType::Workshops,
            "QA Sessions" => EventType::QaSessions,
            "Socials" => EventType::Socials,
            "Sponsors" => EventType::Sponsors,
            other => EventType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// An entry of the site calendar, shaped for the calendar widget.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: String,
    pub link: String,
    pub category: String,
    #[serde(rename = "calendarId")]
    pub calendar_id: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub view: EventView,
    /// Display classes; empty until the event passes the schedule filter
    #[serde(rename = "classNames", skip_serializing_if = "Vec::is_empty")]
    pub class_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
