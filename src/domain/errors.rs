use thiserror::Error;

/// Request body could not be decoded at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid JSON")]
    InvalidJson,

    #[error("Invalid form data")]
    InvalidForm,
}

/// Errors raised while coercing raw input into a `FeatureRecord`.
///
/// The `Display` output is the message returned to the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing fields: {fields:?}")]
    MissingFields { fields: Vec<&'static str> },

    #[error("Invalid {field}: {value}. Must be one of {allowed:?}")]
    InvalidEnum {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("Invalid field types: {field}: {reason}")]
    InvalidType { field: &'static str, reason: String },
}

impl ValidationError {
    /// Fields the error refers to.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            ValidationError::MissingFields { fields } => fields.clone(),
            ValidationError::InvalidEnum { field, .. } => vec![*field],
            ValidationError::InvalidType { field, .. } => vec![*field],
        }
    }
}

/// Errors raised by the prediction pipeline adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PredictionError {
    #[error("{detail}")]
    InferenceFailure { detail: String },

    #[error("inference timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

impl PredictionError {
    pub fn inference(detail: impl Into<String>) -> Self {
        PredictionError::InferenceFailure {
            detail: detail.into(),
        }
    }
}

/// Everything that can end a prediction request early.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PredictError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Prediction failed: {0}")]
    Prediction(#[from] PredictionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_formatting() {
        let error = ValidationError::MissingFields {
            fields: vec!["area", "parking"],
        };

        let msg = error.to_string();
        assert_eq!(msg, r#"Missing fields: ["area", "parking"]"#);
    }

    #[test]
    fn test_invalid_enum_formatting() {
        let error = ValidationError::InvalidEnum {
            field: "furnishingstatus",
            value: "luxury".to_string(),
            allowed: &["furnished", "semi-furnished", "unfurnished"],
        };

        let msg = error.to_string();
        assert!(msg.starts_with("Invalid furnishingstatus: luxury. Must be one of"));
        assert!(msg.contains("semi-furnished"));
    }

    #[test]
    fn test_prediction_error_formatting() {
        let error = PredictError::from(PredictionError::inference("shape mismatch"));
        assert_eq!(error.to_string(), "Prediction failed: shape mismatch");

        let timeout = PredictError::from(PredictionError::Timeout { timeout_ms: 250 });
        assert_eq!(
            timeout.to_string(),
            "Prediction failed: inference timed out after 250ms"
        );
    }
}
