use thiserror::Error;

/// Failure taxonomy for the decision engines.
///
/// A search that finds nothing is not represented here: "no match" is a
/// negative result (`MatchOutcome::NoMatch`), never an error. Every variant
/// below is returned as a value to the caller; nothing is raised past an
/// engine boundary.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("{0}")]
    Validation(String),
    #[error("Missing required customer data: '{field}'")]
    MissingData { field: String },
    #[error("catalog unavailable: {reason}")]
    CatalogUnavailable { reason: String },
    #[error("Qualification check failed: {0}")]
    QualificationFailed(String),
}

impl EngineError {
    pub fn missing_data(field: impl Into<String>) -> Self {
        Self::MissingData { field: field.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::EngineError;

    #[test]
    fn missing_data_names_the_absent_field() {
        let error = EngineError::missing_data("credit_score");
        assert_eq!(error.to_string(), "Missing required customer data: 'credit_score'");
    }

    #[test]
    fn validation_carries_the_caller_facing_message() {
        let error = EngineError::validation("Down payment cannot be negative.");
        assert_eq!(error.to_string(), "Down payment cannot be negative.");
    }
}
