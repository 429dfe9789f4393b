pub mod builders;
pub mod calendar;
pub mod joiner;
pub mod merger;
pub mod site;
pub mod time;

pub use joiner::SessionKey;
pub use site::{build_site, SiteData};
