//! Merging per-track tables and assembling papers.
//!
//! Every track (main, demo, student research, ...) ships the same four
//! parallel tables: papers, session slots, zoom links and presentation ids.
//! The merger appends same-kind tables across tracks in input order, hands
//! the result to the joiner, and builds the canonical paper list with its
//! non-fatal data-quality warnings.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, warn};

use crate::config::SiteConfig;
use crate::error::{Result, Warning};
use crate::models::paper::{make_tldr, Paper, PaperContent};
use crate::pipeline::joiner::{index_presentation_ids, index_zoom_links, join_sessions};
use crate::records::{
    PaperRecord, PresentationIdRecord, ProjectionEntry, SlotRecord, TrackRecords, ZoomLinkRecord,
};

/// Tracks that render after the alphabetically sorted main-programme tracks
const TRAILING_TRACKS: [&str; 2] = ["System Demonstrations", "Student Research Workshop"];

/// The four per-track tables appended across all tracks, in track order.
#[derive(Debug, Clone, Default)]
pub struct MergedRecords {
    pub papers: Vec<PaperRecord>,
    /// (slot code, slot) pairs; a code may repeat across tracks
    pub slots: Vec<(String, SlotRecord)>,
    pub zoom_links: Vec<ZoomLinkRecord>,
    pub presentation_ids: Vec<PresentationIdRecord>,
}

/// Append the parallel tables of every track, preserving input order.
///
/// The merge is a plain ordered append, so it is associative over track
/// partitions: merging [A, B] then [C] equals merging [A, B, C].
pub fn merge_tracks(tracks: Vec<TrackRecords>) -> MergedRecords {
    let mut merged = MergedRecords::default();
    for track in tracks {
        debug!(
            track = track.name.as_str(),
            papers = track.papers.len(),
            slots = track.sessions.len(),
            "merging track tables"
        );
        merged.papers.extend(track.papers);
        merged.slots.extend(track.sessions);
        merged.zoom_links.extend(track.zoom_links);
        merged.presentation_ids.extend(track.presentation_ids);
    }
    merged
}

/// Expand the short track codes used in source sheets to their display
/// names. Anything else passes through unchanged.
pub fn normalize_track(track: &str) -> &str {
    match track {
        "SRW" => "Student Research Workshop",
        "Demo" => "System Demonstrations",
        other => other,
    }
}

/// Card image location for a paper.
pub fn card_image_path(paper_id: &str, paper_images_path: &str) -> String {
    format!("{}/{}.png", paper_images_path, paper_id)
}

/// Build the canonical paper list from the merged tables.
///
/// Papers come out in merged input order, each joined with its live Q&A
/// sessions and presentation id. Fatal cross-reference problems abort the
/// build; data-quality findings are logged and returned as warnings.
pub fn build_papers(
    merged: &MergedRecords,
    recommendations: &HashMap<String, Vec<String>>,
    projections: &[ProjectionEntry],
    config: &SiteConfig,
) -> Result<(Vec<Paper>, Vec<Warning>)> {
    let zoom_index = index_zoom_links(&merged.zoom_links)?;
    let presentation_ids = index_presentation_ids(&merged.presentation_ids)?;
    let sessions_for_paper =
        join_sessions(&merged.slots, &zoom_index, config.qa_session_length_hr)?;

    let mut warnings = Vec::new();
    let mut emit = |warning: Warning| {
        warn!("{}", warning);
        warnings.push(warning);
    };

    let mut papers = Vec::with_capacity(merged.papers.len());
    for record in &merged.papers {
        let similar_paper_ids = match recommendations.get(&record.uid) {
            Some(ids) if !ids.is_empty() => ids.clone(),
            Some(_) => {
                emit(Warning::EmptySimilarPapers {
                    paper_id: record.uid.clone(),
                });
                vec![record.uid.clone()]
            }
            None => vec![record.uid.clone()],
        };

        let paper = Paper {
            id: record.uid.clone(),
            forum: record.uid.clone(),
            card_image_path: card_image_path(&record.uid, &config.paper_images_path),
            presentation_id: presentation_ids.get(&record.uid).cloned(),
            content: PaperContent {
                title: record.title.clone(),
                authors: record.authors.clone(),
                track: normalize_track(&record.track).to_string(),
                paper_type: record.paper_type.clone(),
                abstract_text: record.abstract_text.clone(),
                tldr: make_tldr(&record.abstract_text),
                keywords: record.keywords.clone(),
                pdf_url: non_empty(&record.pdf_url),
                demo_url: non_empty(&record.demo_url),
                sessions: sessions_for_paper
                    .get(&record.uid)
                    .cloned()
                    .unwrap_or_default(),
                similar_paper_ids,
            },
        };
        paper.validate()?;
        papers.push(paper);
    }

    let projected: HashSet<&str> = projections.iter().map(|entry| entry.id.as_str()).collect();
    for paper in &papers {
        if paper.presentation_id.is_none() {
            emit(Warning::MissingPresentationId {
                paper_id: paper.id.clone(),
            });
        }
        if paper.content.sessions.len() != config.expected_qa_sessions {
            emit(Warning::UnexpectedSessionCount {
                paper_id: paper.id.clone(),
                found: paper.content.sessions.len(),
                expected: config.expected_qa_sessions,
            });
        }
        if !projected.contains(paper.id.as_str()) {
            emit(Warning::MissingProjection {
                paper_id: paper.id.clone(),
            });
        }
    }

    Ok((papers, warnings))
}

/// The track selector list: distinct tracks sorted alphabetically, with the
/// demo and student-research tracks pinned to the end.
pub fn track_list(papers: &[Paper]) -> Vec<String> {
    let main_tracks: BTreeSet<String> = papers
        .iter()
        .map(|paper| paper.content.track.clone())
        .filter(|track| !TRAILING_TRACKS.contains(&track.as_str()))
        .collect();

    let mut tracks: Vec<String> = main_tracks.into_iter().collect();
    tracks.extend(TRAILING_TRACKS.iter().map(|track| track.to_string()));
    tracks
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::SlotTable;

    fn paper_record(uid: &str, track: &str) -> PaperRecord {
        PaperRecord {
            uid: uid.to_string(),
            title: format!("Paper {}", uid),
            authors: vec!["Ada Lovelace".to_string()],
            keywords: vec![],
            abstract_text: "We study things.".to_string(),
            track: track.to_string(),
            paper_type: "Long".to_string(),
            pdf_url: String::new(),
            demo_url: String::new(),
        }
    }

    fn track(name: &str, papers: Vec<PaperRecord>) -> TrackRecords {
        TrackRecords {
            name: name.to_string(),
            papers,
            sessions: SlotTable::new(),
            zoom_links: vec![],
            presentation_ids: vec![],
        }
    }

    #[test]
    fn test_normalize_track() {
        assert_eq!(normalize_track("SRW"), "Student Research Workshop");
        assert_eq!(normalize_track("Demo"), "System Demonstrations");
        assert_eq!(normalize_track("Machine Learning"), "Machine Learning");
    }

    #[test]
    fn test_card_image_path() {
        assert_eq!(
            card_image_path("main.1", "static/images/papers"),
            "static/images/papers/main.1.png"
        );
    }

    #[test]
    fn test_merge_preserves_track_order() {
        let merged = merge_tracks(vec![
            track("main", vec![paper_record("main.1", "ML")]),
            track("demo", vec![paper_record("demo.1", "Demo")]),
        ]);
        let uids: Vec<&str> = merged.papers.iter().map(|p| p.uid.as_str()).collect();
        assert_eq!(uids, ["main.1", "demo.1"]);
    }

    #[test]
    fn test_merge_is_associative() {
        let a = track("main", vec![paper_record("main.1", "ML")]);
        let b = track("demo", vec![paper_record("demo.1", "Demo")]);
        let c = track("srw", vec![paper_record("srw.1", "SRW")]);

        let two_step = {
            let first = merge_tracks(vec![a.clone(), b.clone()]);
            let mut combined = first;
            let rest = merge_tracks(vec![c.clone()]);
            combined.papers.extend(rest.papers);
            combined.slots.extend(rest.slots);
            combined.zoom_links.extend(rest.zoom_links);
            combined.presentation_ids.extend(rest.presentation_ids);
            combined
        };
        let one_step = merge_tracks(vec![a, b, c]);

        let uids = |m: &MergedRecords| {
            m.papers.iter().map(|p| p.uid.clone()).collect::<Vec<_>>()
        };
        assert_eq!(uids(&two_step), uids(&one_step));
    }

    #[test]
    fn test_build_papers_defaults_and_warnings() {
        let merged = merge_tracks(vec![track("main", vec![paper_record("main.1", "ML")])]);
        let mut recommendations = HashMap::new();
        recommendations.insert("main.1".to_string(), vec![]);

        let (papers, warnings) =
            build_papers(&merged, &recommendations, &[], &SiteConfig::default()).unwrap();

        assert_eq!(papers.len(), 1);
        // empty recommendation list falls back to the paper itself
        assert_eq!(papers[0].content.similar_paper_ids, vec!["main.1"]);
        assert!(warnings.contains(&Warning::EmptySimilarPapers {
            paper_id: "main.1".to_string()
        }));
        assert!(warnings.contains(&Warning::MissingPresentationId {
            paper_id: "main.1".to_string()
        }));
        assert!(warnings.contains(&Warning::MissingProjection {
            paper_id: "main.1".to_string()
        }));
        assert!(warnings.contains(&Warning::UnexpectedSessionCount {
            paper_id: "main.1".to_string(),
            found: 0,
            expected: 2,
        }));
    }

    #[test]
    fn test_build_papers_absent_recommendation_is_not_warned() {
        let merged = merge_tracks(vec![track("main", vec![paper_record("main.1", "ML")])]);

        let (papers, warnings) =
            build_papers(&merged, &HashMap::new(), &[], &SiteConfig::default()).unwrap();

        assert_eq!(papers[0].content.similar_paper_ids, vec!["main.1"]);
        assert!(!warnings
            .iter()
            .any(|w| matches!(w, Warning::EmptySimilarPapers { .. })));
    }

    #[test]
    fn test_projection_present_no_warning() {
        let merged = merge_tracks(vec![track("main", vec![paper_record("main.1", "ML")])]);
        let projections = vec![ProjectionEntry {
            id: "main.1".to_string(),
            pos: vec![0.1, 0.2],
        }];

        let (_, warnings) =
            build_papers(&merged, &HashMap::new(), &projections, &SiteConfig::default()).unwrap();
        assert!(!warnings
            .iter()
            .any(|w| matches!(w, Warning::MissingProjection { .. })));
    }

    #[test]
    fn test_track_list_orders_demo_and_srw_last() {
        let merged = merge_tracks(vec![
            track("main", vec![paper_record("main.1", "Semantics")]),
            track("main2", vec![paper_record("main.2", "Generation")]),
            track("srw", vec![paper_record("srw.1", "SRW")]),
        ]);
        let (papers, _) =
            build_papers(&merged, &HashMap::new(), &[], &SiteConfig::default()).unwrap();

        assert_eq!(
            track_list(&papers),
            vec![
                "Generation",
                "Semantics",
                "System Demonstrations",
                "Student Research Workshop",
            ]
        );
    }
}
