pub mod calendar;
pub mod committee;
pub mod paper;
pub mod plenary;
pub mod session;
pub mod social;
pub mod sponsor;
pub mod tutorial;
pub mod workshop;

pub use calendar::{CalendarEvent, EventType, EventView};
pub use committee::CommitteeMember;
pub use paper::{Paper, PaperContent};
pub use plenary::{DayTab, PlenarySession, PlenaryVideo};
pub use session::{SessionInfo, TutorialSessionInfo};
pub use social::{SocialEvent, SocialEventOrganizers};
pub use sponsor::{Sponsor, SponsorBooth, SPONSOR_LEVELS};
pub use tutorial::Tutorial;
pub use workshop::{Workshop, WorkshopPaper};
