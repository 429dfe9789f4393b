//! Deriving calendar events from session-bearing entities.
//!
//! Tutorials and workshops contribute two layers of events: one fine-grained
//! event per session for the day view, and one aggregate block per calendar
//! day for the week view. The rendered schedule is then filtered down to the
//! categories the calendar widget knows how to style.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::Result;
use crate::models::calendar::{CalendarEvent, EventType, EventView};
use crate::models::tutorial::Tutorial;
use crate::models::workshop::Workshop;
use crate::pipeline::time::{check_window, session_day};
use crate::records::CalendarEventRecord;

/// One entity of a category (a tutorial, a workshop) as seen by the event
/// deriver: a rendered title, a detail page, and its session windows.
#[derive(Debug, Clone)]
pub struct CategoryItem {
    pub id: String,
    pub title: String,
    pub link: String,
    /// (session name, start, end)
    pub sessions: Vec<(String, DateTime<Utc>, DateTime<Utc>)>,
}

/// Convert a pre-authored calendar record into an event. Display classes
/// stay empty until the schedule filter stamps them.
pub fn base_event(record: &CalendarEventRecord) -> CalendarEvent {
    CalendarEvent {
        title: record.title.clone(),
        start: record.start,
        end: record.end,
        location: record.location.clone(),
        link: record.link.clone(),
        category: record.category.clone(),
        calendar_id: record.calendar_id.clone(),
        event_type: EventType::from(record.event_type.as_str()),
        view: record.view,
        class_names: vec![],
        url: None,
    }
}

/// Derive the two event layers for one category.
///
/// Per sub-session, one `view=day` event pointing at the item's detail page;
/// per calendar day, one `view=week` block from the earliest start to the
/// latest end among that day's sessions, pointing at the category page.
/// Sessions must not cross midnight.
pub fn derive_category_events(
    event_type: EventType,
    block_title: &str,
    block_link: &str,
    items: &[CategoryItem],
) -> Result<Vec<CalendarEvent>> {
    let mut events = Vec::new();
    let mut sessions_by_day: BTreeMap<NaiveDate, Vec<(DateTime<Utc>, DateTime<Utc>)>> =
        BTreeMap::new();

    for item in items {
        for (name, start, end) in &item.sessions {
            let session = format!("{} session {}", item.id, name);
            check_window(&session, *start, *end)?;
            let day = session_day(&session, *start, *end)?;

            events.push(CalendarEvent {
                title: item.title.clone(),
                start: *start,
                end: *end,
                location: item.link.clone(),
                link: item.link.clone(),
                category: "time".to_string(),
                calendar_id: "---".to_string(),
                event_type: event_type.clone(),
                view: EventView::Day,
                class_names: vec![],
                url: None,
            });
            sessions_by_day.entry(day).or_default().push((*start, *end));
        }
    }

    // one aggregate block per day, in chronological day order
    for windows in sessions_by_day.values() {
        let min_start = windows.iter().map(|(start, _)| *start).min();
        let max_end = windows.iter().map(|(_, end)| *end).max();
        if let (Some(start), Some(end)) = (min_start, max_end) {
            events.push(CalendarEvent {
                title: block_title.to_string(),
                start,
                end,
                location: block_link.to_string(),
                link: block_link.to_string(),
                category: "time".to_string(),
                calendar_id: "---".to_string(),
                event_type: event_type.clone(),
                view: EventView::Week,
                class_names: vec![],
                url: None,
            });
        }
    }

    Ok(events)
}

/// Tutorials as deriver input: "T1: Title" with organizers beneath.
pub fn tutorial_category_items(tutorials: &[Tutorial]) -> Vec<CategoryItem> {
    tutorials
        .iter()
        .map(|tutorial| CategoryItem {
            id: tutorial.id.clone(),
            title: format!(
                "{}: {}<br/> <br/> <i>{}</i>",
                tutorial.id,
                tutorial.title,
                tutorial.organizers.join(", ")
            ),
            link: format!("tutorial_{}.html", tutorial.id),
            sessions: tutorial
                .sessions
                .iter()
                .map(|s| (s.session_name.clone(), s.start_time, s.end_time))
                .collect(),
        })
        .collect()
}

/// Workshops as deriver input.
pub fn workshop_category_items(workshops: &[Workshop]) -> Vec<CategoryItem> {
    workshops
        .iter()
        .map(|workshop| CategoryItem {
            id: workshop.id.clone(),
            title: format!(
                "{}<br/> <br/> <i>{}</i>",
                workshop.title,
                workshop.organizers.join(", ")
            ),
            link: format!("workshop_{}.html", workshop.id),
            sessions: workshop
                .sessions
                .iter()
                .map(|s| (s.session_name.clone(), s.start_time, s.end_time))
                .collect(),
        })
        .collect()
}

/// The rendered schedule: only the categories on the fixed allow-list,
/// each stamped with its display classes and widget url.
pub fn build_schedule(overall_calendar: &[CalendarEvent]) -> Vec<CalendarEvent> {
    overall_calendar
        .iter()
        .filter(|event| event.event_type.in_schedule())
        .cloned()
        .map(stamp)
        .collect()
}

/// The tutorials-page calendar: tutorial events only, same stamping.
pub fn build_tutorial_schedule(overall_calendar: &[CalendarEvent]) -> Vec<CalendarEvent> {
    overall_calendar
        .iter()
        .filter(|event| event.event_type == EventType::Tutorials)
        .cloned()
        .map(stamp)
        .collect()
}

fn stamp(mut event: CalendarEvent) -> CalendarEvent {
    event.class_names = vec![
        event.event_type.css_class().to_string(),
        "calendar-event".to_string(),
    ];
    event.url = Some(event.link.clone());
    event
}
