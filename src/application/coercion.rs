//! Input coercion: untyped request fields to a validated [`FeatureRecord`].
//!
//! The pass runs in three steps, all driven by the schema table:
//! 1. every schema field must be present (form input also rejects blanks),
//! 2. `furnishingstatus` is checked against its closed set before anything
//!    else is coerced,
//! 3. the remaining fields are coerced in schema order, stopping at the
//!    first failure.

use crate::domain::errors::{ParseError, ValidationError};
use crate::domain::housing::FeatureRecord;
use crate::domain::housing::record::FeatureValue;
use crate::domain::housing::schema::{
    FORM_TRUTHY_TOKENS, FURNISHING_FIELD, FURNISHING_STATUSES, FieldKind, FieldSpec,
    FurnishingStatus, POSITIVE_FLOAT_LIMIT, SCHEMA,
};
use serde_json::{Map, Value};
use std::str::FromStr;

/// Transport the raw fields arrived through. Flags are coerced differently
/// for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionMode {
    /// JSON body; flags follow JSON truthiness.
    Structured,
    /// URL-encoded form; flags are true only for [`FORM_TRUTHY_TOKENS`].
    Form,
}

/// Untyped field name -> raw value mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct RawInput {
    mode: CoercionMode,
    fields: Map<String, Value>,
}

impl RawInput {
    /// Parses a JSON body. Anything other than a JSON object is rejected.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_slice(body).map_err(|_| ParseError::InvalidJson)?;
        Self::from_json(value)
    }

    pub fn from_json(value: Value) -> Result<Self, ParseError> {
        match value {
            Value::Object(fields) => Ok(Self {
                mode: CoercionMode::Structured,
                fields,
            }),
            _ => Err(ParseError::InvalidJson),
        }
    }

    /// Builds input from decoded form pairs. Every value is kept as text.
    pub fn from_form<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        Self {
            mode: CoercionMode::Form,
            fields,
        }
    }

    pub fn mode(&self) -> CoercionMode {
        self.mode
    }

    fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    fn is_present(&self, name: &str) -> bool {
        match (self.mode, self.get(name)) {
            (_, None) => false,
            (CoercionMode::Form, Some(Value::String(s))) => !s.trim().is_empty(),
            (_, Some(_)) => true,
        }
    }
}

/// Coerces raw input into a [`FeatureRecord`].
pub fn coerce(input: &RawInput) -> Result<FeatureRecord, ValidationError> {
    let missing: Vec<&'static str> = SCHEMA
        .iter()
        .filter(|spec| !input.is_present(spec.name))
        .map(|spec| spec.name)
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields { fields: missing });
    }

    // Enum membership is decided before any type coercion.
    let furnishing = coerce_furnishing(raw(input, FURNISHING_FIELD)?)?;

    let mut values = Vec::with_capacity(SCHEMA.len());
    for spec in SCHEMA {
        let value = match spec.kind {
            FieldKind::Furnishing => FeatureValue::Furnishing(furnishing),
            FieldKind::PositiveFloat => {
                FeatureValue::Float(coerce_positive_float(spec, raw(input, spec.name)?)?)
            }
            FieldKind::Count => FeatureValue::Count(coerce_count(spec, raw(input, spec.name)?)?),
            FieldKind::Flag => FeatureValue::Flag(coerce_flag(input.mode, raw(input, spec.name)?)),
        };
        values.push(value);
    }

    FeatureRecord::try_from(values.as_slice()).map_err(|_| ValidationError::InvalidType {
        field: "schema",
        reason: "coerced values do not match the feature record layout".to_string(),
    })
}

fn raw<'a>(input: &'a RawInput, name: &'static str) -> Result<&'a Value, ValidationError> {
    input
        .get(name)
        .ok_or_else(|| ValidationError::MissingFields { fields: vec![name] })
}

fn invalid(spec: &FieldSpec, reason: impl Into<String>) -> ValidationError {
    ValidationError::InvalidType {
        field: spec.name,
        reason: reason.into(),
    }
}

/// Text form of a raw value: strings as-is, everything else as JSON.
fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn coerce_furnishing(value: &Value) -> Result<FurnishingStatus, ValidationError> {
    let text = as_text(value);
    let trimmed = text.trim();
    FurnishingStatus::from_str(trimmed).map_err(|_| ValidationError::InvalidEnum {
        field: FURNISHING_FIELD,
        value: trimmed.to_string(),
        allowed: FURNISHING_STATUSES,
    })
}

fn coerce_positive_float(spec: &FieldSpec, value: &Value) -> Result<f64, ValidationError> {
    let number = match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| invalid(spec, format!("{} is not representable as a float", n)))?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid(spec, format!("expected a number, got {:?}", s)))?,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        other => {
            return Err(invalid(
                spec,
                format!("expected a number, got {}", kind_name(other)),
            ));
        }
    };

    if !number.is_finite() || number <= 0.0 {
        return Err(invalid(
            spec,
            format!("must be a positive number, got {}", number),
        ));
    }
    if number > POSITIVE_FLOAT_LIMIT {
        return Err(invalid(
            spec,
            format!("must not exceed {:e}, got {}", POSITIVE_FLOAT_LIMIT, number),
        ));
    }
    Ok(number)
}

fn coerce_count(spec: &FieldSpec, value: &Value) -> Result<u32, ValidationError> {
    let number: i64 = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.is_u64() {
                return Err(invalid(spec, format!("{} is out of range", n)));
            } else {
                // Fractional JSON numbers truncate toward zero.
                let f = n.as_f64().unwrap_or(f64::NAN);
                let truncated = f.trunc();
                if !truncated.is_finite() || truncated.abs() > u32::MAX as f64 {
                    return Err(invalid(spec, format!("{} is out of range", n)));
                }
                truncated as i64
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid(spec, format!("expected an integer, got {:?}", s)))?,
        Value::Bool(b) => i64::from(*b),
        other => {
            return Err(invalid(
                spec,
                format!("expected an integer, got {}", kind_name(other)),
            ));
        }
    };

    u32::try_from(number)
        .map_err(|_| invalid(spec, format!("must be a non-negative integer, got {}", number)))
}

fn coerce_flag(mode: CoercionMode, value: &Value) -> bool {
    match mode {
        CoercionMode::Structured => is_truthy(value),
        CoercionMode::Form => match value {
            Value::String(s) => FORM_TRUTHY_TOKENS.contains(&s.trim()),
            _ => false,
        },
    }
}

/// JSON truthiness: null, false, zero, empty strings and empty containers are
/// false. Note that the string `"false"` is non-empty and therefore true.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
