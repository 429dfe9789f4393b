//! Constructing the typed site entities from joined/merged records.
//!
//! Pure construction: each builder maps raw records 1:1 into the entities of
//! the data model, validating session windows and field invariants as it
//! goes. A violation fails the build instead of producing a partially valid
//! entity.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::error::{DataError, Result};
use crate::models::committee::CommitteeMember;
use crate::models::plenary::{DayTab, PlenarySession, PlenaryVideo};
use crate::models::session::{SessionInfo, TutorialSessionInfo};
use crate::models::social::{SocialEvent, SocialEventOrganizers};
use crate::models::sponsor::{Sponsor, SponsorBooth, SPONSOR_LEVELS};
use crate::models::tutorial::Tutorial;
use crate::models::workshop::{Workshop, WorkshopPaper};
use crate::pipeline::time::{check_window, parse_slot_time};
use crate::records::{
    PlenarySessionRecord, PlenaryVideoRecord, RawSessionRecord, SocialEventRecord, SponsorRecord,
    TutorialRecord, WorkshopPaperRecord, WorkshopRecord,
};
use crate::utils::{day_slug, slugify};

/// Group the committee by role, preserving source order.
///
/// Group order is first occurrence of each role, not alphabetical, so the
/// general chair stays on top. Chair roles with more than one member get a
/// plural "s".
pub fn build_committee(members: Vec<CommitteeMember>) -> IndexMap<String, Vec<CommitteeMember>> {
    let mut by_role: IndexMap<String, Vec<CommitteeMember>> = IndexMap::new();
    for member in members {
        by_role.entry(member.role.clone()).or_default().push(member);
    }

    by_role
        .into_iter()
        .map(|(role, group)| {
            let label = if role.to_lowercase().ends_with("chair") && group.len() > 1 {
                format!("{}s", role)
            } else {
                role
            };
            (label, group)
        })
        .collect()
}

/// Build plenary sessions grouped by day, attaching recorded talks to the
/// sessions that own them.
pub fn build_plenary_sessions(
    records: &[PlenarySessionRecord],
    videos: &IndexMap<String, Vec<PlenaryVideoRecord>>,
) -> Result<IndexMap<String, Vec<PlenarySession>>> {
    let mut by_day: IndexMap<String, Vec<PlenarySession>> = IndexMap::new();
    for record in records {
        let sessions = convert_sessions(&format!("plenary {}", record.uid), &record.sessions)?;
        let session_videos = videos.get(&record.uid).map(|items| {
            items
                .iter()
                .map(|video| PlenaryVideo {
                    id: video.uid.clone(),
                    title: video.title.clone(),
                    speakers: video.speakers.clone(),
                    presentation_id: video.presentation_id.clone(),
                })
                .collect()
        });

        by_day
            .entry(record.day.clone())
            .or_default()
            .push(PlenarySession {
                id: record.uid.clone(),
                title: record.title.clone(),
                image: record.image.clone(),
                day: record.day.clone(),
                sessions,
                presenter: record.presenter.clone(),
                institution: record.institution.clone(),
                abstract_text: record.abstract_text.clone(),
                bio: record.bio.clone(),
                presentation_id: record.presentation_id.clone(),
                rocketchat_channel: record.rocketchat_channel.clone(),
                videos: session_videos,
            });
    }
    Ok(by_day)
}

/// Day selector tabs for the plenary page; the first day starts active.
pub fn plenary_day_tabs(by_day: &IndexMap<String, Vec<PlenarySession>>) -> Vec<DayTab> {
    by_day
        .keys()
        .enumerate()
        .map(|(index, day)| DayTab {
            slug: day_slug(day),
            label: day.clone(),
            active: index == 0,
        })
        .collect()
}

/// Build the tutorial list.
pub fn build_tutorials(records: &[TutorialRecord]) -> Result<Vec<Tutorial>> {
    records
        .iter()
        .map(|record| {
            let sessions = record
                .sessions
                .iter()
                .map(|session| {
                    check_window(
                        &format!("tutorial {} session {}", record.uid, session.name),
                        session.start_time,
                        session.end_time,
                    )?;
                    Ok(TutorialSessionInfo {
                        session_name: session.name.clone(),
                        start_time: session.start_time,
                        end_time: session.end_time,
                        livestream_id: session.livestream_id.clone().unwrap_or_default(),
                        zoom_link: session.zoom_link.clone(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(Tutorial {
                id: record.uid.clone(),
                title: record.title.clone(),
                organizers: record.organizers.clone(),
                abstract_text: record.abstract_text.clone(),
                website: record.website.clone(),
                material: record.material.clone(),
                slides: record.slides.clone(),
                prerecorded: record.prerecorded.clone(),
                rocketchat_channel: record.rocketchat_channel.clone(),
                sessions,
                virtual_format_description: record.info.clone(),
            })
        })
        .collect()
}

/// Build the workshop list, attaching each workshop's accepted papers and
/// its authored schedule table.
pub fn build_workshops(
    records: &[WorkshopRecord],
    workshop_papers: &IndexMap<String, Vec<WorkshopPaperRecord>>,
    workshop_schedules: &HashMap<String, serde_json::Value>,
) -> Result<Vec<Workshop>> {
    records
        .iter()
        .map(|record| {
            let papers = workshop_papers
                .get(&record.uid)
                .map(|items| {
                    items
                        .iter()
                        .map(|paper| WorkshopPaper {
                            id: paper.uid.clone(),
                            title: paper.title.clone(),
                            speakers: paper.speakers.clone(),
                            presentation_id: paper.presentation_id.clone(),
                        })
                        .collect()
                })
                .unwrap_or_default();

            Ok(Workshop {
                id: record.uid.clone(),
                title: record.title.clone(),
                day: record.day.clone(),
                organizers: record.organizers.clone(),
                abstract_text: record.abstract_text.clone(),
                website: record.website.clone(),
                livestream: record.livestream.clone(),
                papers,
                schedule: workshop_schedules.get(&record.uid).cloned(),
                rocketchat_channel: record.rocketchat_channel.clone(),
                sessions: convert_sessions(&format!("workshop {}", record.uid), &record.sessions)?,
            })
        })
        .collect()
}

/// Build the social event list. Social sources author their session times
/// as `%Y-%m-%d_%H:%M:%S` strings, so they go through the time resolver.
pub fn build_socials(records: &[SocialEventRecord]) -> Result<Vec<SocialEvent>> {
    records
        .iter()
        .map(|record| {
            let sessions = record
                .sessions
                .iter()
                .map(|session| {
                    let start_time = parse_slot_time(&session.start_time)?;
                    let end_time = parse_slot_time(&session.end_time)?;
                    check_window(
                        &format!("social {} session {}", record.uid, session.name),
                        start_time,
                        end_time,
                    )?;
                    Ok(SessionInfo {
                        session_name: session.name.clone(),
                        start_time,
                        end_time,
                        zoom_link: session.zoom_link.clone(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(SocialEvent {
                id: record.uid.clone(),
                name: record.name.clone(),
                description: record.description.clone(),
                image: record.image.clone(),
                organizers: SocialEventOrganizers {
                    members: record.organizers.members.clone(),
                    website: record.organizers.website.clone(),
                },
                sessions,
                rocketchat_channel: record.rocketchat_channel.clone(),
                website: record.website.clone(),
            })
        })
        .collect()
}

/// Build the sponsor list and the level → sponsor-uid grouping.
///
/// Booth windows are formatted per weekday for the sponsors page; a booth
/// without an explicit end runs `duration` hours past its start.
pub fn build_sponsors(
    records: &[SponsorRecord],
) -> Result<(Vec<Sponsor>, IndexMap<String, Vec<String>>)> {
    let mut sponsors = Vec::with_capacity(records.len());
    let mut by_level: IndexMap<String, Vec<String>> = IndexMap::new();

    for record in records {
        let uid = slugify(&record.name);

        let mut levels = Vec::new();
        if let Some(level) = &record.level {
            levels.push(level.clone());
        }
        if let Some(more) = &record.levels {
            levels.extend(more.iter().cloned());
        }
        for level in &levels {
            if !SPONSOR_LEVELS.contains(&level.as_str()) {
                return Err(DataError::UnknownSponsorLevel {
                    sponsor: record.name.clone(),
                    level: level.clone(),
                });
            }
            by_level.entry(level.clone()).or_default().push(uid.clone());
        }

        let mut booths_by_day: IndexMap<String, Vec<SponsorBooth>> = IndexMap::new();
        for booth in &record.schedule {
            let start = booth.start;
            let end = match booth.end {
                Some(end) => end,
                None => start + chrono::Duration::hours(booth.duration.unwrap_or(0)),
            };
            check_window(&format!("sponsor {} booth {}", uid, booth.label), start, end)?;

            let day = start.format("%A").to_string();
            booths_by_day.entry(day.clone()).or_default().push(SponsorBooth {
                time_string: format!(
                    "{} ({}-{} GMT)",
                    day,
                    start.format("%H:%M"),
                    end.format("%H:%M")
                ),
                label: booth.label.clone(),
            });
        }

        sponsors.push(Sponsor {
            uid,
            name: record.name.clone(),
            description: record.description.clone(),
            logo: record.logo.clone(),
            website: record.website.clone(),
            levels,
            booths_by_day,
        });
    }

    Ok((sponsors, by_level))
}

fn convert_sessions(owner: &str, records: &[RawSessionRecord]) -> Result<Vec<SessionInfo>> {
    records
        .iter()
        .map(|session| {
            check_window(
                &format!("{} session {}", owner, session.name),
                session.start_time,
                session.end_time,
            )?;
            Ok(SessionInfo {
                session_name: session.name.clone(),
                start_time: session.start_time,
                end_time: session.end_time,
                zoom_link: session.zoom_link.clone(),
            })
        })
        .collect()
}
