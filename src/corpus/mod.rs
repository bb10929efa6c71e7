// Corpus loading and derived views.
//
// The collector writes raw feed dumps as JSON arrays of posts; this module
// reads them back with strict schema validation, then exposes the two views
// the pipeline needs: the full corpus (engagement statistics) and the
// ad-filtered organic subset (topic extraction).

pub mod load;
pub mod models;
pub mod views;

pub use load::load_dir;
pub use models::{Engagement, Post};
pub use views::CorpusViews;
