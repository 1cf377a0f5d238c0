use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditTier {
    Excellent,
    Good,
    Fair,
    Subprime,
}

impl fmt::Display for CreditTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Subprime => "subprime",
        };
        f.write_str(name)
    }
}

/// Financial profile supplied by the caller per request. The engine never
/// stores or mutates it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub credit_score: u16,
    pub annual_income: Decimal,
    pub monthly_debt_payments: Decimal,
    pub account_balance: Decimal,
}

impl CustomerProfile {
    pub const REQUIRED_FIELDS: [&'static str; 4] =
        ["credit_score", "annual_income", "monthly_debt_payments", "account_balance"];

    /// Validation pass over an untyped profile object. Absent (or null)
    /// required fields surface as `MissingData` naming the field; a present
    /// field with an unusable value is an internal qualification fault, the
    /// same split the callers log on.
    pub fn from_value(value: &Value) -> Result<Self, EngineError> {
        for field in Self::REQUIRED_FIELDS {
            match value.get(field) {
                Some(present) if !present.is_null() => {}
                _ => return Err(EngineError::missing_data(field)),
            }
        }

        serde_json::from_value(value.clone())
            .map_err(|err| EngineError::QualificationFailed(err.to_string()))
    }
}
