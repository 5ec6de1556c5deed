//! Deterministic estimate used while no trained pipeline is loaded.
//!
//! Keeps the service answering (in degraded mode) before an artifact has
//! been deployed. Using it is a normal success path.

use crate::domain::housing::FeatureRecord;

pub const AREA_WEIGHT: f64 = 10.0;
pub const BEDROOM_WEIGHT: f64 = 1000.0;
pub const BATHROOM_PENALTY: f64 = 200.0;

/// `area*10 + bedrooms*1000 - bathrooms*200`
pub fn estimate(record: &FeatureRecord) -> f64 {
    record.area * AREA_WEIGHT + f64::from(record.bedrooms) * BEDROOM_WEIGHT
        - f64::from(record.bathrooms) * BATHROOM_PENALTY
}
