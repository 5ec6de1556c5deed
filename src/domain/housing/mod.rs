// Feature schema (field table, enum values)
pub mod schema;

// Typed request features
pub mod record;

pub use record::{FeatureRecord, FeatureValue, LayoutMismatch};
pub use schema::{FEATURE_NAMES, FurnishingStatus};
