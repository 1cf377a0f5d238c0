use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::customer::CreditTier;

/// A single affordable term offered to the customer. Always drawn from the
/// configured allowed-term set, filtered by the DTI cap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanOption {
    pub term_months: u32,
    pub monthly_payment: Decimal,
    pub interest_rate: Decimal,
    pub total_interest: Decimal,
    pub new_debt_to_income: Decimal,
}

/// Financing estimate without any credit decision attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub principal_financed: Decimal,
    pub term_months: u32,
    pub annual_rate_pct: Decimal,
    pub monthly_payment: Decimal,
    pub total_interest: Decimal,
}

/// Outcome of a qualification check. Field order is the wire order existing
/// callers consume; `suggested_down_payment` is only present when a
/// suggestion was actually made.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QualificationResult {
    pub approved: bool,
    pub vehicle_price: Decimal,
    pub loan_amount: Decimal,
    pub down_payment: Decimal,
    pub credit_tier: CreditTier,
    pub credit_score: u16,
    pub current_debt_to_income: Decimal,
    pub loan_options: Vec<LoanOption>,
    pub denial_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_down_payment: Option<Decimal>,
}
