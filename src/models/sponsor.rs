use indexmap::IndexMap;
use serde::Serialize;

/// The fixed sponsorship ladder, in display order. A sponsor naming a level
/// outside this list fails the build.
pub const SPONSOR_LEVELS: &[&str] = &[
    "Diamond",
    "Platinum",
    "Gold",
    "Silver",
    "Bronze",
    "Supporter",
    "Publisher",
    "Diversity & Inclusion: Champion",
    "Diversity & Inclusion: In-Kind",
];

/// A sponsor with its booth schedule grouped by weekday.
#[derive(Debug, Clone, Serialize)]
pub struct Sponsor {
    /// Page identifier derived from the name (see `utils::slugify`)
    pub uid: String,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    /// Levels this sponsor appears under; most sponsors have exactly one
    pub levels: Vec<String>,
    /// Booth sessions per weekday label ("Monday", ...), in schedule order
    pub booths_by_day: IndexMap<String, Vec<SponsorBooth>>,
}

/// One staffed booth window, formatted for the sponsors page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SponsorBooth {
    /// e.g. "Monday (08:00-09:00 GMT)"
    pub time_string: String,
    pub label: String,
}
