use rust_decimal::{Decimal, MathematicalOps};

use crate::config::RateSchedule;
use crate::domain::loan::LoanQuote;
use crate::errors::EngineError;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Rounded payment figures for one principal/rate/term combination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaymentSchedule {
    pub monthly_payment: Decimal,
    pub total_interest: Decimal,
}

/// Level monthly payment before any boundary rounding. Zero for a zero
/// term and for degenerate rate/term combinations where the amortization
/// denominator collapses.
pub(crate) fn monthly_payment_unrounded(
    principal: Decimal,
    annual_rate_pct: Decimal,
    term_months: u32,
) -> Decimal {
    if term_months == 0 {
        return Decimal::ZERO;
    }

    let monthly_rate = annual_rate_pct / Decimal::ONE_HUNDRED / MONTHS_PER_YEAR;
    if monthly_rate.is_zero() {
        return principal / Decimal::from(term_months);
    }

    let growth = match (Decimal::ONE + monthly_rate).checked_powi(i64::from(term_months)) {
        Some(growth) => growth,
        None => return Decimal::ZERO,
    };
    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        return Decimal::ZERO;
    }

    principal * (monthly_rate * growth) / denominator
}

/// Standard amortization: `payment = principal * [r(1+r)^n] / [(1+r)^n - 1]`.
/// Rounding to currency precision happens here at the boundary, never in
/// intermediate steps.
pub fn compute_payment(
    principal: Decimal,
    annual_rate_pct: Decimal,
    term_months: u32,
) -> PaymentSchedule {
    if term_months == 0 {
        return PaymentSchedule::default();
    }

    let monthly_rate = annual_rate_pct / Decimal::ONE_HUNDRED / MONTHS_PER_YEAR;
    if monthly_rate.is_zero() {
        return PaymentSchedule {
            monthly_payment: (principal / Decimal::from(term_months)).round_dp(2),
            total_interest: Decimal::ZERO,
        };
    }

    let payment = monthly_payment_unrounded(principal, annual_rate_pct, term_months);
    if payment.is_zero() {
        return PaymentSchedule::default();
    }

    let total_interest = payment * Decimal::from(term_months) - principal;
    PaymentSchedule {
        monthly_payment: payment.round_dp(2),
        total_interest: total_interest.round_dp(2),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoanQuoteRequest {
    pub purchase_amount: Decimal,
    pub term_months: u32,
    pub down_payment: Option<Decimal>,
}

/// Financing estimate against a rate schedule. Term and down payment are
/// validated first; error text is caller-facing wire contract.
pub fn quote_loan(
    request: &LoanQuoteRequest,
    rates: &RateSchedule,
) -> Result<LoanQuote, EngineError> {
    let annual_rate_pct = rates
        .rate_for(request.term_months)
        .ok_or_else(|| EngineError::validation(rates.unsupported_term_message()))?;

    let mut principal_financed = request.purchase_amount;
    if let Some(down_payment) = request.down_payment {
        if down_payment < Decimal::ZERO {
            return Err(EngineError::validation("Down payment cannot be negative."));
        }
        if down_payment > request.purchase_amount {
            return Err(EngineError::validation("Down payment cannot exceed purchase amount."));
        }
        principal_financed = request.purchase_amount - down_payment;
    }

    let schedule = compute_payment(principal_financed, annual_rate_pct, request.term_months);
    Ok(LoanQuote {
        principal_financed: principal_financed.round_dp(2),
        term_months: request.term_months,
        annual_rate_pct,
        monthly_payment: schedule.monthly_payment,
        total_interest: schedule.total_interest,
    })
}
