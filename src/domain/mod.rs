pub mod dataset;
pub mod listing;
pub mod sqft;
pub mod stats;

pub use dataset::{Dataset, DatasetStatus};
pub use listing::ListingRecord;
