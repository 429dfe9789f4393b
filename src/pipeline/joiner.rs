//! Joining papers to their live Q&A sessions.
//!
//! Two independently authored sources describe the same schedule: the slot
//! tables (slot code, start date, papers in the slot) and the zoom-link
//! exports (one row per paper per slot, with their own start times). The
//! joiner matches them by composite key and cross-validates the times;
//! any disagreement is corrupt data and fails the build.

use std::collections::HashMap;

use crate::error::{DataError, Result};
use crate::models::session::SessionInfo;
use crate::pipeline::time::{parse_iso_utc, parse_slot_time, session_window};
use crate::records::{PresentationIdRecord, SlotRecord, ZoomLinkRecord};

/// Composite key addressing one paper's appearance in one session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub paper_id: String,
    pub session_name: String,
}

impl SessionKey {
    pub fn new(paper_id: &str, session_name: &str) -> Self {
        SessionKey {
            paper_id: paper_id.to_string(),
            session_name: session_name.to_string(),
        }
    }
}

/// Index zoom-link records by (paper, session).
///
/// Duplicate keys would make the join pick an arbitrary link, so they are
/// rejected.
pub fn index_zoom_links(
    zoom_links: &[ZoomLinkRecord],
) -> Result<HashMap<SessionKey, &ZoomLinkRecord>> {
    let mut index = HashMap::with_capacity(zoom_links.len());
    for record in zoom_links {
        let key = SessionKey::new(&record.uid, &record.session_name);
        if index.insert(key, record).is_some() {
            return Err(DataError::DuplicateZoomLink {
                paper_id: record.uid.clone(),
                session_name: record.session_name.clone(),
            });
        }
    }
    Ok(index)
}

/// Index presentation ids by paper id. Duplicates are rejected.
pub fn index_presentation_ids(
    records: &[PresentationIdRecord],
) -> Result<HashMap<String, String>> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        if index
            .insert(record.uid.clone(), record.presentation_id.clone())
            .is_some()
        {
            return Err(DataError::DuplicatePresentationId {
                paper_id: record.uid.clone(),
            });
        }
    }
    Ok(index)
}

/// Build the mapping from paper id to its ordered list of live sessions.
///
/// Slots are processed in input order and each paper's sessions accumulate
/// in that order, so the result is deterministic for a given input order.
/// For every (slot, paper) pair the zoom index must hold a record whose own
/// start time equals the slot's start.
pub fn join_sessions(
    slots: &[(String, SlotRecord)],
    zoom_index: &HashMap<SessionKey, &ZoomLinkRecord>,
    qa_session_length_hr: i64,
) -> Result<HashMap<String, Vec<SessionInfo>>> {
    let mut sessions_for_paper: HashMap<String, Vec<SessionInfo>> = HashMap::new();

    for (session_name, slot) in slots {
        let start_time = parse_slot_time(&slot.date)?;
        let (start_time, end_time) = session_window(
            &format!("slot {}", session_name),
            start_time,
            None,
            qa_session_length_hr,
        )?;

        for paper_id in &slot.papers {
            let key = SessionKey::new(paper_id, session_name);
            let zoom = zoom_index
                .get(&key)
                .ok_or_else(|| DataError::MissingZoomLink {
                    paper_id: paper_id.clone(),
                    session_name: session_name.clone(),
                })?;

            let zoom_time = parse_iso_utc(&zoom.starttime)?;
            if zoom_time != start_time {
                return Err(DataError::SessionTimeMismatch {
                    paper_id: paper_id.clone(),
                    session_name: session_name.clone(),
                    slot_time: start_time,
                    zoom_time,
                });
            }

            sessions_for_paper
                .entry(paper_id.clone())
                .or_default()
                .push(SessionInfo {
                    session_name: session_name.clone(),
                    start_time,
                    end_time,
                    zoom_link: zoom.zoom_join_link.clone(),
                });
        }
    }

    Ok(sessions_for_paper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn zoom(uid: &str, session: &str, starttime: &str) -> ZoomLinkRecord {
        ZoomLinkRecord {
            uid: uid.to_string(),
            session_name: session.to_string(),
            starttime: starttime.to_string(),
            zoom_join_link: format!("https://zoom.us/j/{}-{}", uid, session),
        }
    }

    fn slot(date: &str, papers: &[&str]) -> SlotRecord {
        SlotRecord {
            date: date.to_string(),
            papers: papers.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_join_single_slot() {
        let zoom_links = vec![zoom("main.1", "1A", "2020-07-06T05:00:00Z")];
        let zoom_index = index_zoom_links(&zoom_links).unwrap();
        let slots = vec![("1A".to_string(), slot("2020-07-06_05:00:00", &["main.1"]))];

        let joined = join_sessions(&slots, &zoom_index, 1).unwrap();
        let sessions = &joined["main.1"];
        assert_eq!(sessions.len(), 1);
        assert_eq!(
            sessions[0].start_time,
            Utc.with_ymd_and_hms(2020, 7, 6, 5, 0, 0).unwrap()
        );
        assert_eq!(
            sessions[0].end_time,
            Utc.with_ymd_and_hms(2020, 7, 6, 6, 0, 0).unwrap()
        );
        assert_eq!(sessions[0].zoom_link, "https://zoom.us/j/main.1-1A");
    }

    #[test]
    fn test_join_preserves_slot_order() {
        let zoom_links = vec![
            zoom("main.1", "1A", "2020-07-06T05:00:00Z"),
            zoom("main.1", "2A", "2020-07-06T08:00:00Z"),
        ];
        let zoom_index = index_zoom_links(&zoom_links).unwrap();
        let slots = vec![
            ("2A".to_string(), slot("2020-07-06_08:00:00", &["main.1"])),
            ("1A".to_string(), slot("2020-07-06_05:00:00", &["main.1"])),
        ];

        let joined = join_sessions(&slots, &zoom_index, 1).unwrap();
        let names: Vec<&str> = joined["main.1"]
            .iter()
            .map(|s| s.session_name.as_str())
            .collect();
        assert_eq!(names, ["2A", "1A"], "session order must follow slot order");
    }

    #[test]
    fn test_missing_zoom_link() {
        let zoom_index = index_zoom_links(&[]).unwrap();
        let slots = vec![("1A".to_string(), slot("2020-07-06_05:00:00", &["main.1"]))];

        let err = join_sessions(&slots, &zoom_index, 1).unwrap_err();
        assert_eq!(
            err,
            DataError::MissingZoomLink {
                paper_id: "main.1".to_string(),
                session_name: "1A".to_string(),
            }
        );
    }

    #[test]
    fn test_session_time_mismatch() {
        let zoom_links = vec![zoom("main.1", "1A", "2020-07-06T06:00:00Z")];
        let zoom_index = index_zoom_links(&zoom_links).unwrap();
        let slots = vec![("1A".to_string(), slot("2020-07-06_05:00:00", &["main.1"]))];

        let err = join_sessions(&slots, &zoom_index, 1).unwrap_err();
        assert!(matches!(
            err,
            DataError::SessionTimeMismatch { paper_id, .. } if paper_id == "main.1"
        ));
    }

    #[test]
    fn test_duplicate_zoom_link_rejected() {
        let zoom_links = vec![
            zoom("main.1", "1A", "2020-07-06T05:00:00Z"),
            zoom("main.1", "1A", "2020-07-06T05:00:00Z"),
        ];
        let err = index_zoom_links(&zoom_links).unwrap_err();
        assert!(matches!(err, DataError::DuplicateZoomLink { .. }));
    }

    #[test]
    fn test_duplicate_presentation_id_rejected() {
        let records = vec![
            PresentationIdRecord {
                uid: "main.1".to_string(),
                presentation_id: "38921111".to_string(),
            },
            PresentationIdRecord {
                uid: "main.1".to_string(),
                presentation_id: "38922222".to_string(),
            },
        ];
        let err = index_presentation_ids(&records).unwrap_err();
        assert_eq!(
            err,
            DataError::DuplicatePresentationId {
                paper_id: "main.1".to_string()
            }
        );
    }

    #[test]
    fn test_same_slot_name_across_tracks() {
        // Two tracks may both use a slot code; each (paper, slot) pair still
        // resolves to its own zoom record.
        let zoom_links = vec![
            zoom("main.1", "1A", "2020-07-06T05:00:00Z"),
            zoom("demo.1", "1A", "2020-07-06T08:00:00Z"),
        ];
        let zoom_index = index_zoom_links(&zoom_links).unwrap();
        let slots = vec![
            ("1A".to_string(), slot("2020-07-06_05:00:00", &["main.1"])),
            ("1A".to_string(), slot("2020-07-06_08:00:00", &["demo.1"])),
        ];

        let joined = join_sessions(&slots, &zoom_index, 1).unwrap();
        assert_eq!(joined["main.1"].len(), 1);
        assert_eq!(joined["demo.1"].len(), 1);
    }
}
