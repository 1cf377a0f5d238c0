use anyhow::{Context, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use lotwise_core::config::RateSchedule;
use lotwise_core::errors::EngineError;
use lotwise_core::lending::amortization::{quote_loan, LoanQuoteRequest};

use crate::registry::Tool;

#[derive(Debug, Deserialize)]
struct FinancingRequest {
    purchase_amount: Decimal,
    loan_term_months: u32,
    #[serde(default)]
    down_payment: Option<Decimal>,
}

/// `calculate_loan_details` — financing estimate without a credit
/// decision. The response always carries all four fields; `error` is null
/// on success and validation failures keep the zeroed estimates, exactly
/// as existing callers expect.
pub struct FinancingTool {
    rates: RateSchedule,
}

impl FinancingTool {
    pub fn new(rates: RateSchedule) -> Self {
        Self { rates }
    }
}

#[async_trait]
impl Tool for FinancingTool {
    fn name(&self) -> &'static str {
        "calculate_loan_details"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let request: FinancingRequest =
            serde_json::from_value(input).context("invalid calculate_loan_details arguments")?;
        debug!(
            purchase_amount = %request.purchase_amount,
            loan_term_months = request.loan_term_months,
            down_payment = ?request.down_payment,
            "calculate_loan_details called"
        );

        let quote_request = LoanQuoteRequest {
            purchase_amount: request.purchase_amount,
            term_months: request.loan_term_months,
            down_payment: request.down_payment,
        };

        match quote_loan(&quote_request, &self.rates) {
            Ok(quote) => Ok(json!({
                "error": null,
                "monthly_payment_estimate": quote.monthly_payment,
                "total_interest_paid": quote.total_interest,
                "principal_financed": quote.principal_financed,
            })),
            Err(EngineError::Validation(message)) => Ok(json!({
                "error": message,
                "monthly_payment_estimate": Decimal::ZERO,
                "total_interest_paid": Decimal::ZERO,
                "principal_financed": request.purchase_amount,
            })),
            Err(other) => Err(other.into()),
        }
    }
}
