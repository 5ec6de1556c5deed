use super::schema::FurnishingStatus;
use serde::{Deserialize, Serialize};

/// Validated, typed features of one house.
///
/// Built fresh by input coercion for each request and never mutated
/// afterwards. Field order mirrors [`super::schema::SCHEMA`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub area: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub stories: u32,
    pub mainroad: bool,
    pub guestroom: bool,
    pub basement: bool,
    pub hotwaterheating: bool,
    pub airconditioning: bool,
    pub parking: u32,
    pub prefarea: bool,
    pub furnishingstatus: FurnishingStatus,
}

#[cfg(test)]
impl FeatureRecord {
    /// Typical three bedroom house used across tests.
    pub fn sample() -> Self {
        Self {
            area: 1000.0,
            bedrooms: 3,
            bathrooms: 1,
            stories: 2,
            mainroad: true,
            guestroom: false,
            basement: false,
            hotwaterheating: false,
            airconditioning: true,
            parking: 1,
            prefarea: false,
            furnishingstatus: FurnishingStatus::SemiFurnished,
        }
    }
}

/// A single field value after coercion to its declared type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Float(f64),
    Count(u32),
    Flag(bool),
    Furnishing(FurnishingStatus),
}

/// Coerced values do not line up with the record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMismatch;

impl TryFrom<&[FeatureValue]> for FeatureRecord {
    type Error = LayoutMismatch;

    fn try_from(values: &[FeatureValue]) -> Result<Self, Self::Error> {
        use FeatureValue::{Count, Flag, Float, Furnishing};

        match *values {
            [
                Float(area),
                Count(bedrooms),
                Count(bathrooms),
                Count(stories),
                Flag(mainroad),
                Flag(guestroom),
                Flag(basement),
                Flag(hotwaterheating),
                Flag(airconditioning),
                Count(parking),
                Flag(prefarea),
                Furnishing(furnishingstatus),
            ] => Ok(FeatureRecord {
                area,
                bedrooms,
                bathrooms,
                stories,
                mainroad,
                guestroom,
                basement,
                hotwaterheating,
                airconditioning,
                parking,
                prefarea,
                furnishingstatus,
            }),
            _ => Err(LayoutMismatch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_values_in_schema_order() {
        let values = [
            FeatureValue::Float(1000.0),
            FeatureValue::Count(3),
            FeatureValue::Count(1),
            FeatureValue::Count(2),
            FeatureValue::Flag(true),
            FeatureValue::Flag(false),
            FeatureValue::Flag(false),
            FeatureValue::Flag(false),
            FeatureValue::Flag(true),
            FeatureValue::Count(1),
            FeatureValue::Flag(false),
            FeatureValue::Furnishing(FurnishingStatus::SemiFurnished),
        ];

        let record = FeatureRecord::try_from(&values[..]).unwrap();
        assert_eq!(record, FeatureRecord::sample());
    }

    #[test]
    fn test_record_rejects_misaligned_values() {
        let values = [FeatureValue::Count(3), FeatureValue::Float(1000.0)];
        assert_eq!(FeatureRecord::try_from(&values[..]), Err(LayoutMismatch));
    }
}
