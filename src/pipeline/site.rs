//! The pipeline entry point: one-shot transformation of raw records into
//! the immutable site data handed to the rendering layer.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::info;

use crate::config::SiteConfig;
use crate::error::{Result, Warning};
use crate::models::calendar::{CalendarEvent, EventType};
use crate::models::committee::CommitteeMember;
use crate::models::paper::Paper;
use crate::models::plenary::{DayTab, PlenarySession};
use crate::models::social::SocialEvent;
use crate::models::sponsor::{Sponsor, SPONSOR_LEVELS};
use crate::models::tutorial::Tutorial;
use crate::models::workshop::Workshop;
use crate::pipeline::{builders, calendar, merger};
use crate::records::SiteInput;

/// Everything the rendering layer needs, built once per site build and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SiteData {
    /// Committee grouped by role, in source order
    pub committee: IndexMap<String, Vec<CommitteeMember>>,

    /// All calendar entries: the pre-authored base calendar plus the
    /// derived tutorial and workshop events
    pub overall_calendar: Vec<CalendarEvent>,
    /// The rendered schedule: allow-listed categories with display classes
    pub calendar: Vec<CalendarEvent>,
    /// Tutorial events only, for the tutorials page calendar
    pub tutorial_calendar: Vec<CalendarEvent>,

    /// Plenary sessions grouped by day, in source order
    pub plenary_sessions: IndexMap<String, Vec<PlenarySession>>,
    pub plenary_sessions_by_id: HashMap<String, PlenarySession>,
    pub plenary_day_tabs: Vec<DayTab>,

    pub papers: Vec<Paper>,
    pub papers_by_id: HashMap<String, Paper>,
    /// Track selector entries, demo and student-research tracks last
    pub tracks: Vec<String>,

    pub tutorials: Vec<Tutorial>,
    pub tutorials_by_id: HashMap<String, Tutorial>,

    pub workshops: Vec<Workshop>,
    pub workshops_by_id: HashMap<String, Workshop>,

    pub socials: Vec<SocialEvent>,

    pub sponsors: Vec<Sponsor>,
    pub sponsors_by_id: HashMap<String, Sponsor>,
    /// Level → sponsor uids, first-occurrence order
    pub sponsors_by_level: IndexMap<String, Vec<String>>,
    /// The full level ladder, in display order
    pub sponsor_levels: Vec<String>,

    /// FAQ page content, passed through from the source file
    pub faq: serde_json::Value,
    /// Code-of-conduct page content, passed through from the source file
    pub code_of_conduct: serde_json::Value,

    /// Non-fatal data-quality findings collected during the build
    pub warnings: Vec<Warning>,
}

/// Transform loaded records into site data.
///
/// Runs synchronously over fully loaded inputs and either completes
/// deterministically or fails fast at the first invariant violation.
pub fn build_site(input: SiteInput, config: &SiteConfig) -> Result<SiteData> {
    let committee = builders::build_committee(input.committee);

    let tutorials = builders::build_tutorials(&input.tutorials)?;
    let workshops = builders::build_workshops(
        &input.workshops,
        &input.workshop_papers,
        &input.workshop_schedules,
    )?;

    let mut overall_calendar: Vec<CalendarEvent> =
        input.calendar.iter().map(calendar::base_event).collect();
    overall_calendar.extend(calendar::derive_category_events(
        EventType::Tutorials,
        "Tutorials",
        "tutorials.html",
        &calendar::tutorial_category_items(&tutorials),
    )?);
    overall_calendar.extend(calendar::derive_category_events(
        EventType::Workshops,
        "Workshops",
        "workshops.html",
        &calendar::workshop_category_items(&workshops),
    )?);

    let schedule = calendar::build_schedule(&overall_calendar);
    let tutorial_calendar = calendar::build_tutorial_schedule(&overall_calendar);

    let plenary_sessions =
        builders::build_plenary_sessions(&input.plenary_sessions, &input.plenary_videos)?;
    let plenary_day_tabs = builders::plenary_day_tabs(&plenary_sessions);

    let merged = merger::merge_tracks(input.tracks);
    let (papers, warnings) = merger::build_papers(
        &merged,
        &input.paper_recommendations,
        &input.paper_projections,
        config,
    )?;
    let tracks = merger::track_list(&papers);

    let socials = builders::build_socials(&input.socials)?;
    let (sponsors, sponsors_by_level) = builders::build_sponsors(&input.sponsors)?;

    info!(
        papers = papers.len(),
        tutorials = tutorials.len(),
        workshops = workshops.len(),
        warnings = warnings.len(),
        "site data loaded"
    );

    Ok(SiteData {
        committee,
        calendar: schedule,
        tutorial_calendar,
        overall_calendar,
        plenary_sessions_by_id: plenary_sessions
            .values()
            .flatten()
            .map(|session| (session.id.clone(), session.clone()))
            .collect(),
        plenary_day_tabs,
        plenary_sessions,
        papers_by_id: papers
            .iter()
            .map(|paper| (paper.id.clone(), paper.clone()))
            .collect(),
        papers,
        tracks,
        tutorials_by_id: tutorials
            .iter()
            .map(|tutorial| (tutorial.id.clone(), tutorial.clone()))
            .collect(),
        tutorials,
        workshops_by_id: workshops
            .iter()
            .map(|workshop| (workshop.id.clone(), workshop.clone()))
            .collect(),
        workshops,
        socials,
        sponsors_by_id: sponsors
            .iter()
            .map(|sponsor| (sponsor.uid.clone(), sponsor.clone()))
            .collect(),
        sponsors,
        sponsors_by_level,
        sponsor_levels: SPONSOR_LEVELS.iter().map(|level| level.to_string()).collect(),
        faq: input.faq,
        code_of_conduct: input.code_of_conduct,
        warnings,
    })
}
