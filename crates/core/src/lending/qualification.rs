use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{LendingPolicy, RateSchedule};
use crate::domain::customer::CustomerProfile;
use crate::domain::loan::{LoanOption, QualificationResult};
use crate::errors::EngineError;
use crate::lending::amortization;

pub trait QualificationEngine: Send + Sync {
    fn check_qualification(
        &self,
        vehicle_price: Decimal,
        profile: &CustomerProfile,
        down_payment: Option<Decimal>,
    ) -> Result<QualificationResult, EngineError>;
}

/// Credit-tier based decisioning against an injected rate schedule and
/// lending policy. Stateless: every call reads only its arguments and the
/// immutable configuration.
#[derive(Clone, Debug)]
pub struct TieredQualificationEngine {
    rates: RateSchedule,
    policy: LendingPolicy,
}

impl TieredQualificationEngine {
    pub fn new(rates: RateSchedule, policy: LendingPolicy) -> Self {
        Self { rates, policy }
    }

    pub fn rates(&self) -> &RateSchedule {
        &self.rates
    }

    pub fn policy(&self) -> &LendingPolicy {
        &self.policy
    }
}

impl Default for TieredQualificationEngine {
    fn default() -> Self {
        Self::new(RateSchedule::default(), LendingPolicy::default())
    }
}

impl QualificationEngine for TieredQualificationEngine {
    fn check_qualification(
        &self,
        vehicle_price: Decimal,
        profile: &CustomerProfile,
        down_payment: Option<Decimal>,
    ) -> Result<QualificationResult, EngineError> {
        debug!(
            %vehicle_price,
            down_payment = ?down_payment,
            credit_score = profile.credit_score,
            "checking loan qualification"
        );

        if profile.annual_income <= Decimal::ZERO {
            return Err(EngineError::QualificationFailed(
                "annual income must be positive".to_owned(),
            ));
        }

        let down = down_payment.unwrap_or(Decimal::ZERO);
        let loan_amount = vehicle_price - down;
        let band = self.policy.tier_for(profile.credit_score);

        let monthly_income = profile.annual_income / Decimal::from(12);
        let current_debt_to_income =
            (profile.monthly_debt_payments / monthly_income).round_dp(3);

        let mut result = QualificationResult {
            approved: false,
            vehicle_price,
            loan_amount,
            down_payment: down,
            credit_tier: band.tier,
            credit_score: profile.credit_score,
            current_debt_to_income,
            loan_options: Vec::new(),
            denial_reason: None,
            suggested_down_payment: None,
        };

        // Affordability ceiling dominates every other check.
        let max_loan = profile.annual_income * self.policy.max_loan_income_share;
        if loan_amount > max_loan {
            result.denial_reason = Some(format!(
                "Requested loan amount (${}) exceeds maximum based on income (${})",
                format_grouped(loan_amount),
                format_grouped(max_loan),
            ));
            return Ok(result);
        }

        for term_months in self.rates.terms() {
            let payment =
                amortization::monthly_payment_unrounded(loan_amount, band.annual_rate_pct, term_months);
            let new_debt_to_income = (profile.monthly_debt_payments + payment) / monthly_income;

            if new_debt_to_income <= self.policy.max_debt_to_income {
                let total_interest = payment * Decimal::from(term_months) - loan_amount;
                result.loan_options.push(LoanOption {
                    term_months,
                    monthly_payment: payment.round_dp(2),
                    interest_rate: band.annual_rate_pct,
                    total_interest: total_interest.round_dp(2),
                    new_debt_to_income: new_debt_to_income.round_dp(3),
                });
            }
        }

        if result.loan_options.is_empty() {
            result.denial_reason =
                Some("Debt-to-income ratio too high for available loan terms".to_owned());
            return Ok(result);
        }

        result.approved = true;
        if down_payment.is_none() && profile.account_balance > self.policy.suggestion_balance_floor
        {
            let suggested = (profile.account_balance * self.policy.suggestion_balance_share)
                .min(vehicle_price * self.policy.suggestion_price_share);
            result.suggested_down_payment = Some(suggested.round_dp(0));
        }

        Ok(result)
    }
}

/// Whole-dollar figure with thousands grouping, as the denial text has
/// always rendered it ("$32,300").
fn format_grouped(amount: Decimal) -> String {
    let rounded = amount.round_dp(0);
    let raw = rounded.to_string();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}
