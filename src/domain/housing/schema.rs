//! Canonical feature schema for house price requests.
//!
//! The table below is the single source of truth for which fields a request
//! must carry, in which order they are vectorized, and how each raw value is
//! coerced. Input coercion walks this table; adding or retyping a field only
//! touches the data here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Strictly positive, finite float.
    PositiveFloat,
    /// Non-negative integer count.
    Count,
    /// Yes/no amenity flag.
    Flag,
    /// Member of [`FURNISHING_STATUSES`].
    Furnishing,
}

/// One entry of the schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, kind }
}

/// Ordered schema. This order MUST match the column order the model was
/// trained with; reordering is a breaking change for every saved artifact.
pub const SCHEMA: &[FieldSpec] = &[
    field("area", FieldKind::PositiveFloat),
    field("bedrooms", FieldKind::Count),
    field("bathrooms", FieldKind::Count),
    field("stories", FieldKind::Count),
    field("mainroad", FieldKind::Flag),
    field("guestroom", FieldKind::Flag),
    field("basement", FieldKind::Flag),
    field("hotwaterheating", FieldKind::Flag),
    field("airconditioning", FieldKind::Flag),
    field("parking", FieldKind::Count),
    field("prefarea", FieldKind::Flag),
    field("furnishingstatus", FieldKind::Furnishing),
];

const NAMES: [&str; SCHEMA.len()] = {
    let mut names = [""; SCHEMA.len()];
    let mut i = 0;
    while i < SCHEMA.len() {
        names[i] = SCHEMA[i].name;
        i += 1;
    }
    names
};

/// Field names in schema order, derived from [`SCHEMA`].
pub const FEATURE_NAMES: &[&str] = &NAMES;

pub const FURNISHING_FIELD: &str = "furnishingstatus";

/// Upper bound for [`FieldKind::PositiveFloat`] values. Keeps the fallback
/// estimate finite.
pub const POSITIVE_FLOAT_LIMIT: f64 = 1e12;

/// Closed set of accepted `furnishingstatus` values (case-sensitive).
pub const FURNISHING_STATUSES: &[&str] = &["furnished", "semi-furnished", "unfurnished"];

/// Tokens accepted as `true` for flags submitted through an HTML form.
/// Anything else is `false`.
pub const FORM_TRUTHY_TOKENS: &[&str] = &["1", "true", "True", "on", "yes"];

/// Looks up a field by name.
pub fn lookup(name: &str) -> Option<&'static FieldSpec> {
    SCHEMA.iter().find(|spec| spec.name == name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FurnishingStatus {
    #[serde(rename = "furnished")]
    Furnished,
    #[serde(rename = "semi-furnished")]
    SemiFurnished,
    #[serde(rename = "unfurnished")]
    Unfurnished,
}

impl FurnishingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FurnishingStatus::Furnished => "furnished",
            FurnishingStatus::SemiFurnished => "semi-furnished",
            FurnishingStatus::Unfurnished => "unfurnished",
        }
    }
}

impl fmt::Display for FurnishingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FurnishingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "furnished" => Ok(FurnishingStatus::Furnished),
            "semi-furnished" => Ok(FurnishingStatus::SemiFurnished),
            "unfurnished" => Ok(FurnishingStatus::Unfurnished),
            other => Err(format!("unknown furnishing status: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_follow_schema_order() {
        assert_eq!(FEATURE_NAMES.len(), 12);
        assert_eq!(FEATURE_NAMES[0], "area");
        assert_eq!(FEATURE_NAMES[11], "furnishingstatus");
        assert_eq!(lookup(FURNISHING_FIELD).map(|s| s.kind), Some(FieldKind::Furnishing));
    }

    #[test]
    fn test_furnishing_statuses_round_trip_through_enum() {
        for status in FURNISHING_STATUSES {
            let parsed = FurnishingStatus::from_str(status).unwrap();
            assert_eq!(parsed.as_str(), *status);
        }
        assert!(FurnishingStatus::from_str("Furnished").is_err());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("parking").map(|s| s.kind), Some(FieldKind::Count));
        assert_eq!(lookup("furnishingstatus").map(|s| s.kind), Some(FieldKind::Furnishing));
        assert!(lookup("price").is_none());
    }
}
