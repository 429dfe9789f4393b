pub mod normalize;

pub use normalize::{day_slug, slugify};
