use crate::domain::housing::{FeatureRecord, FurnishingStatus};

pub use crate::domain::housing::FEATURE_NAMES;

/// Label encoding of the furnishing status, alphabetical like the encoder
/// the regressors are trained with.
pub fn encode_furnishing(status: FurnishingStatus) -> f64 {
    match status {
        FurnishingStatus::Furnished => 0.0,
        FurnishingStatus::SemiFurnished => 1.0,
        FurnishingStatus::Unfurnished => 2.0,
    }
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Converts a record into one model input row, columns in schema order.
pub fn features_to_f64_vector(record: &FeatureRecord) -> Vec<f64> {
    vec![
        record.area,
        record.bedrooms as f64,
        record.bathrooms as f64,
        record.stories as f64,
        flag(record.mainroad),
        flag(record.guestroom),
        flag(record.basement),
        flag(record.hotwaterheating),
        flag(record.airconditioning),
        record.parking as f64,
        flag(record.prefarea),
        encode_furnishing(record.furnishingstatus),
    ]
}

/// Converts a batch of records into a row-major matrix.
pub fn records_to_rows(records: &[FeatureRecord]) -> Vec<Vec<f64>> {
    records.iter().map(features_to_f64_vector).collect()
}
