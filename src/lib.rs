// Linsight: insight mining for a scraped LinkedIn feed
//
// This is the library root. Each module corresponds to a stage of the
// insight pipeline: corpus loading, ad filtering, text normalization,
// topic extraction, engagement aggregation, report assembly, and
// content suggestions derived from the latest report.

pub mod classifier;
pub mod config;
pub mod corpus;
pub mod engagement;
pub mod insights;
pub mod normalize;
pub mod output;
pub mod status;
pub mod suggest;
pub mod topics;
