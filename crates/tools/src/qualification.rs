use anyhow::{Context, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use lotwise_core::domain::customer::CustomerProfile;
use lotwise_core::lending::qualification::{QualificationEngine, TieredQualificationEngine};

use crate::registry::Tool;

#[derive(Debug, Deserialize)]
struct QualificationRequest {
    vehicle_price: Decimal,
    customer_profile: Value,
    #[serde(default)]
    down_payment: Option<Decimal>,
}

/// `check_loan_qualification` — full credit decision. Profile problems and
/// internal faults come back as `{error, approved: false}` bodies; callers
/// treat both as "not approved" but can distinguish them for logging.
pub struct QualificationTool {
    engine: TieredQualificationEngine,
}

impl QualificationTool {
    pub fn new(engine: TieredQualificationEngine) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Tool for QualificationTool {
    fn name(&self) -> &'static str {
        "check_loan_qualification"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let request: QualificationRequest =
            serde_json::from_value(input).context("invalid check_loan_qualification arguments")?;
        debug!(
            vehicle_price = %request.vehicle_price,
            down_payment = ?request.down_payment,
            "check_loan_qualification called"
        );

        let decision = CustomerProfile::from_value(&request.customer_profile).and_then(
            |profile| {
                self.engine.check_qualification(
                    request.vehicle_price,
                    &profile,
                    request.down_payment,
                )
            },
        );

        match decision {
            Ok(result) => Ok(serde_json::to_value(result)?),
            Err(error) => Ok(json!({
                "error": error.to_string(),
                "approved": false,
            })),
        }
    }
}
